//! Tallying, averaging, and report assembly for Marriage MBTI+.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

use super::advice::{generate_advice, Advice};
use super::profiles::{Compatibility, MbtiType};
use super::questions::{marriage_question_bank, mbti_question_bank, MarriageCategory};

/// One submitted MBTI answer. `answer` is validated against 'A'/'B'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MbtiAnswer {
    pub question_id: u8,
    pub answer: String,
}

impl MbtiAnswer {
    pub fn new(question_id: u8, answer: impl Into<String>) -> Self {
        Self {
            question_id,
            answer: answer.into(),
        }
    }
}

/// One submitted relationship-values answer, expected in 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarriageAnswer {
    pub question_id: u8,
    pub answer: i64,
}

impl MarriageAnswer {
    pub fn new(question_id: u8, answer: i64) -> Self {
        Self {
            question_id,
            answer,
        }
    }
}

/// Raw per-letter tallies. Each axis pair sums to 4 for a valid answer set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MbtiTally {
    #[serde(rename = "E")]
    pub e: u8,
    #[serde(rename = "I")]
    pub i: u8,
    #[serde(rename = "S")]
    pub s: u8,
    #[serde(rename = "N")]
    pub n: u8,
    #[serde(rename = "T")]
    pub t: u8,
    #[serde(rename = "F")]
    pub f: u8,
    #[serde(rename = "J")]
    pub j: u8,
    #[serde(rename = "P")]
    pub p: u8,
}

impl MbtiTally {
    fn increment(&mut self, letter: char) {
        match letter {
            'E' => self.e += 1,
            'I' => self.i += 1,
            'S' => self.s += 1,
            'N' => self.n += 1,
            'T' => self.t += 1,
            'F' => self.f += 1,
            'J' => self.j += 1,
            'P' => self.p += 1,
            _ => unreachable!("letters come from the axis table"),
        }
    }
}

/// Per-category averages in [1.0, 5.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarriageScores {
    pub communication: f64,
    pub lifestyle: f64,
    pub values: f64,
    pub future: f64,
    pub intimacy: f64,
}

impl MarriageScores {
    /// Returns the average for a category.
    pub fn get(&self, category: MarriageCategory) -> f64 {
        match category {
            MarriageCategory::Communication => self.communication,
            MarriageCategory::Lifestyle => self.lifestyle,
            MarriageCategory::Values => self.values,
            MarriageCategory::Future => self.future,
            MarriageCategory::Intimacy => self.intimacy,
        }
    }

    fn set(&mut self, category: MarriageCategory, score: f64) {
        match category {
            MarriageCategory::Communication => self.communication = score,
            MarriageCategory::Lifestyle => self.lifestyle = score,
            MarriageCategory::Values => self.values = score,
            MarriageCategory::Future => self.future = score,
            MarriageCategory::Intimacy => self.intimacy = score,
        }
    }
}

/// The combined assessment result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarriageMbtiReport {
    pub mbti_type: &'static str,
    pub type_name: &'static str,
    pub description: &'static str,
    pub love_characteristics: Vec<&'static str>,
    pub compatible_types: Vec<Compatibility>,
    pub advice: Vec<Advice>,
    pub mbti_scores: MbtiTally,
    pub marriage_scores: MarriageScores,
}

fn validate(
    mbti_answers: &[MbtiAnswer],
    marriage_answers: &[MarriageAnswer],
) -> Result<(), ValidationError> {
    if mbti_answers.is_empty() {
        return Err(ValidationError::empty("MBTI"));
    }
    if marriage_answers.is_empty() {
        return Err(ValidationError::empty("marriage"));
    }

    let mbti_count = mbti_question_bank().len();
    if mbti_answers.len() != mbti_count {
        return Err(ValidationError::wrong_count(
            "MBTI",
            mbti_count,
            mbti_answers.len(),
        ));
    }

    let marriage_count = marriage_question_bank().len();
    if marriage_answers.len() != marriage_count {
        return Err(ValidationError::wrong_count(
            "marriage",
            marriage_count,
            marriage_answers.len(),
        ));
    }

    for (i, answer) in mbti_answers.iter().enumerate() {
        if answer.question_id as usize != i {
            return Err(ValidationError::order_mismatch(
                "MBTI",
                i as u8,
                answer.question_id,
            ));
        }
        if answer.answer != "A" && answer.answer != "B" {
            return Err(ValidationError::InvalidChoice {
                value: answer.answer.clone(),
            });
        }
    }

    for (i, answer) in marriage_answers.iter().enumerate() {
        if answer.question_id as usize != i {
            return Err(ValidationError::order_mismatch(
                "marriage",
                i as u8,
                answer.question_id,
            ));
        }
        if !(1..=5).contains(&answer.answer) {
            return Err(ValidationError::AnswerOutOfRange {
                value: answer.answer,
            });
        }
    }

    Ok(())
}

/// Tallies MBTI answers into per-letter counts.
///
/// Answers whose id has no bank entry are skipped, so calling this without
/// going through `analyze` cannot panic.
pub fn calculate_tally(answers: &[MbtiAnswer]) -> MbtiTally {
    let bank = mbti_question_bank();
    let mut tally = MbtiTally::default();

    for answer in answers {
        let Some(question) = bank.get(answer.question_id as usize) else {
            continue;
        };
        let letter = if answer.answer == "A" {
            question.axis.letter_a()
        } else {
            question.axis.letter_b()
        };
        tally.increment(letter);
    }

    tally
}

/// Resolves the four-letter code from a tally.
///
/// Ties break toward the first-listed letter of each axis (E, S, T, J).
pub fn resolve_type(tally: &MbtiTally) -> MbtiType {
    MbtiType::from_letters(
        if tally.e >= tally.i { 'E' } else { 'I' },
        if tally.s >= tally.n { 'S' } else { 'N' },
        if tally.t >= tally.f { 'T' } else { 'F' },
        if tally.j >= tally.p { 'J' } else { 'P' },
    )
}

/// Averages validated relationship-values answers per category.
///
/// A category with no answers defaults to the 3.0 midpoint; the fixed bank
/// covers every category, so this only matters for partial inputs in tests.
pub fn calculate_marriage_scores(answers: &[MarriageAnswer]) -> MarriageScores {
    let bank = marriage_question_bank();

    let mut scores = MarriageScores {
        communication: 3.0,
        lifestyle: 3.0,
        values: 3.0,
        future: 3.0,
        intimacy: 3.0,
    };

    for category in MarriageCategory::ALL {
        let collected: Vec<i64> = answers
            .iter()
            .filter(|a| {
                bank.get(a.question_id as usize)
                    .map(|q| q.category == category)
                    .unwrap_or(false)
            })
            .map(|a| a.answer)
            .collect();

        if !collected.is_empty() {
            let avg = collected.iter().sum::<i64>() as f64 / collected.len() as f64;
            scores.set(category, avg);
        }
    }

    scores
}

/// Runs the full combined assessment.
pub fn analyze(
    mbti_answers: &[MbtiAnswer],
    marriage_answers: &[MarriageAnswer],
) -> Result<MarriageMbtiReport, ValidationError> {
    validate(mbti_answers, marriage_answers)?;

    let tally = calculate_tally(mbti_answers);
    let mbti_type = resolve_type(&tally);
    let marriage_scores = calculate_marriage_scores(marriage_answers);
    let profile = mbti_type.profile();

    Ok(MarriageMbtiReport {
        mbti_type: mbti_type.code(),
        type_name: profile.name,
        description: profile.description,
        love_characteristics: profile.love_characteristics.to_vec(),
        compatible_types: profile.compatible_types.to_vec(),
        advice: generate_advice(marriage_answers),
        mbti_scores: tally,
        marriage_scores,
    })
}
