//! Six-dimension personality assessment for matchmaking support.
//!
//! A fixed bank of 10 weighted multiple-choice questions feeds six scoring
//! dimensions. Per-dimension averages are rescaled to 0-100 and mapped onto
//! one of six partner archetypes, each with static descriptive content and
//! a compatibility table.

mod profiles;
mod questions;
mod scoring;

pub use profiles::{PersonalityType, TypeProfile};
pub use questions::{question_bank, Dimension, Question, QuestionOption};
pub use scoring::{analyze, calculate_scores, classify, DimensionScores, PersonalityReport};
