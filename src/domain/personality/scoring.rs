//! Scoring and classification for the personality assessment.
//!
//! # Algorithm
//! 1. Validate the submitted answer map (fail-fast, first defect wins).
//! 2. Group chosen option weights by dimension and average them.
//! 3. Rescale each average from [1,4] to [0,100], rounded to one decimal.
//! 4. Classify the score vector against fixed thresholds in priority order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::foundation::ValidationError;

use super::profiles::{PersonalityType, TypeProfile};
use super::questions::{question_bank, Dimension};

/// Normalized per-dimension scores, each in [0.0, 100.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionScores {
    pub extroversion: f64,
    pub communication: f64,
    pub emotional_stability: f64,
    pub decision_making: f64,
    pub empathy: f64,
    pub commitment: f64,
}

impl DimensionScores {
    /// Returns the score for a dimension.
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Extroversion => self.extroversion,
            Dimension::Communication => self.communication,
            Dimension::EmotionalStability => self.emotional_stability,
            Dimension::DecisionMaking => self.decision_making,
            Dimension::Empathy => self.empathy,
            Dimension::Commitment => self.commitment,
        }
    }

    fn set(&mut self, dimension: Dimension, score: f64) {
        match dimension {
            Dimension::Extroversion => self.extroversion = score,
            Dimension::Communication => self.communication = score,
            Dimension::EmotionalStability => self.emotional_stability = score,
            Dimension::DecisionMaking => self.decision_making = score,
            Dimension::Empathy => self.empathy = score,
            Dimension::Commitment => self.commitment = score,
        }
    }
}

/// Full assessment result.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalityReport {
    pub personality_type: &'static str,
    pub scores: DimensionScores,
    pub description: TypeProfile,
    pub compatible_types: Vec<&'static str>,
}

fn validate(answers: &BTreeMap<u8, usize>) -> Result<(), ValidationError> {
    if answers.is_empty() {
        return Err(ValidationError::empty("personality"));
    }

    let missing: Vec<u8> = question_bank()
        .iter()
        .map(|q| q.id)
        .filter(|id| !answers.contains_key(id))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::UnansweredQuestions { missing });
    }

    for (&id, &index) in answers {
        let question = question_bank()
            .iter()
            .find(|q| q.id == id)
            .ok_or(ValidationError::UnknownQuestion { id })?;

        if index >= question.options.len() {
            return Err(ValidationError::OptionOutOfBounds {
                question_id: id,
                index,
            });
        }
    }

    Ok(())
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Computes the normalized per-dimension scores for a validated answer map.
///
/// A dimension with no submitted answers scores 0.0; with the completeness
/// check in place every dimension receives at least one answer.
pub fn calculate_scores(answers: &BTreeMap<u8, usize>) -> DimensionScores {
    let mut collected: BTreeMap<&'static str, Vec<u8>> = BTreeMap::new();

    for question in question_bank() {
        if let Some(&index) = answers.get(&question.id) {
            if let Some(option) = question.options.get(index) {
                collected
                    .entry(question.dimension.label())
                    .or_default()
                    .push(option.score);
            }
        }
    }

    let mut scores = DimensionScores {
        extroversion: 0.0,
        communication: 0.0,
        emotional_stability: 0.0,
        decision_making: 0.0,
        empathy: 0.0,
        commitment: 0.0,
    };

    for dimension in Dimension::ALL {
        if let Some(weights) = collected.get(dimension.label()) {
            let avg = weights.iter().map(|&w| w as f64).sum::<f64>() / weights.len() as f64;
            // Rescale the 1-4 average onto a 0-100 scale.
            let normalized = (avg - 1.0) / 3.0 * 100.0;
            scores.set(dimension, round_one_decimal(normalized));
        }
    }

    scores
}

/// Classifies a score vector into an archetype.
///
/// Rules are evaluated in a fixed priority order; the first match wins and
/// `Reliable` is the unconditional fallback.
pub fn classify(scores: &DimensionScores) -> PersonalityType {
    if scores.extroversion >= 70.0 && scores.communication >= 70.0 {
        PersonalityType::Communicator
    } else if scores.empathy >= 70.0 && scores.emotional_stability >= 60.0 {
        PersonalityType::Supporter
    } else if scores.extroversion >= 70.0 && scores.decision_making >= 70.0 {
        PersonalityType::Leader
    } else if scores.decision_making >= 70.0 && scores.emotional_stability >= 70.0 {
        PersonalityType::Analyst
    } else if scores.extroversion >= 60.0 && scores.empathy >= 60.0 && scores.communication >= 60.0
    {
        PersonalityType::Creative
    } else {
        PersonalityType::Reliable
    }
}

/// Runs the full assessment over a `question id -> option index` map.
pub fn analyze(answers: &BTreeMap<u8, usize>) -> Result<PersonalityReport, ValidationError> {
    validate(answers)?;

    let scores = calculate_scores(answers);
    let personality_type = classify(&scores);

    Ok(PersonalityReport {
        personality_type: personality_type.label(),
        scores,
        description: personality_type.profile(),
        compatible_types: personality_type
            .compatible_types()
            .iter()
            .map(|t| t.label())
            .collect(),
    })
}
