//! Marriage MBTI+ combined assessment.
//!
//! Two sub-quizzes feed one report: 16 binary questions resolve a
//! four-letter MBTI code by per-axis tally, and 10 five-point questions
//! average into five relationship-values categories. The report combines
//! static per-type content with advice generated from the raw
//! relationship-values answers.

mod advice;
mod profiles;
mod questions;
mod scoring;

pub use advice::{generate_advice, Advice};
pub use profiles::{Compatibility, MbtiType, MbtiTypeProfile};
pub use questions::{
    marriage_question_bank, mbti_question_bank, MarriageCategory, MarriageQuestion, MbtiAxis,
    MbtiQuestion,
};
pub use scoring::{
    analyze, calculate_marriage_scores, calculate_tally, resolve_type, MarriageAnswer,
    MarriageMbtiReport, MarriageScores, MbtiAnswer, MbtiTally,
};
