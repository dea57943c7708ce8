//! Personalized advice derived from the raw relationship-values answers.
//!
//! Unlike the rest of the report this does not depend on the derived MBTI
//! type: four specific questions (ids 0-3) each emit one advice entry when
//! the raw answer leans low (<= 2) or high (>= 4). A midpoint answer of 3
//! stays silent. The low/high framings are kept as published, including
//! their asymmetries across categories.

use serde::Serialize;

use super::questions::MarriageCategory;
use super::scoring::MarriageAnswer;

/// One advice entry of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub category: &'static str,
    pub content: &'static str,
}

struct AdviceRule {
    question_id: u8,
    category: MarriageCategory,
    low: &'static str,
    high: &'static str,
}

const RULES: [AdviceRule; 4] = [
    AdviceRule {
        question_id: 0,
        category: MarriageCategory::Communication,
        low: "You value logical communication; making room for emotional expression as well will help you build a deeper relationship.",
        high: "You value emotional understanding; bringing in logical discussion at times will make the relationship more constructive.",
    },
    AdviceRule {
        question_id: 1,
        category: MarriageCategory::Lifestyle,
        low: "You prefer an active lifestyle; sharing new experiences with your partner will deepen the relationship.",
        high: "You prefer a calm lifestyle; spending quality time together will build a deep bond.",
    },
    AdviceRule {
        question_id: 2,
        category: MarriageCategory::Values,
        low: "You value shared values; staying flexible about your differences will make the relationship richer.",
        high: "You value diversity; sharing the basic values as well will keep the relationship stable.",
    },
    AdviceRule {
        question_id: 3,
        category: MarriageCategory::Future,
        low: "You place importance on having children; discussing parenting plans with your partner early on is recommended.",
        high: "You prefer a flexible life plan; shaping the future together while listening to your partner's wishes matters most.",
    },
];

/// Generates 0 to 4 advice entries from the raw answers.
pub fn generate_advice(answers: &[MarriageAnswer]) -> Vec<Advice> {
    let mut advice = Vec::new();

    for rule in &RULES {
        // Missing answers fall back to the silent midpoint.
        let value = answers
            .iter()
            .find(|a| a.question_id == rule.question_id)
            .map(|a| a.answer)
            .unwrap_or(3);

        if value <= 2 {
            advice.push(Advice {
                category: rule.category.label(),
                content: rule.low,
            });
        } else if value >= 4 {
            advice.push(Advice {
                category: rule.category.label(),
                content: rule.high,
            });
        }
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: [i64; 10]) -> Vec<MarriageAnswer> {
        values
            .into_iter()
            .enumerate()
            .map(|(id, v)| MarriageAnswer::new(id as u8, v))
            .collect()
    }

    #[test]
    fn midpoint_answers_emit_nothing() {
        assert!(generate_advice(&answers([3; 10])).is_empty());
    }

    #[test]
    fn low_answers_emit_four_low_framings() {
        let advice = generate_advice(&answers([1, 2, 1, 2, 3, 3, 3, 3, 3, 3]));
        assert_eq!(advice.len(), 4);
        assert_eq!(advice[0].category, "Communication");
        assert!(advice[0].content.contains("logical communication"));
        assert_eq!(advice[1].category, "Lifestyle");
        assert!(advice[1].content.contains("active lifestyle"));
        assert_eq!(advice[2].category, "Values");
        assert!(advice[2].content.contains("shared values"));
        assert_eq!(advice[3].category, "Future plans");
        assert!(advice[3].content.contains("having children"));
    }

    #[test]
    fn high_answers_emit_four_high_framings() {
        let advice = generate_advice(&answers([5, 4, 5, 4, 3, 3, 3, 3, 3, 3]));
        assert_eq!(advice.len(), 4);
        assert!(advice[0].content.contains("emotional understanding"));
        assert!(advice[1].content.contains("calm lifestyle"));
        assert!(advice[2].content.contains("diversity"));
        assert!(advice[3].content.contains("flexible life plan"));
    }

    #[test]
    fn only_the_first_four_questions_drive_advice() {
        // Extreme answers on ids 4-9 must not add entries.
        let advice = generate_advice(&answers([3, 3, 3, 3, 1, 5, 1, 5, 1, 5]));
        assert!(advice.is_empty());
    }

    #[test]
    fn mixed_answers_emit_a_partial_list() {
        let advice = generate_advice(&answers([2, 3, 4, 3, 3, 3, 3, 3, 3, 3]));
        assert_eq!(advice.len(), 2);
        assert_eq!(advice[0].category, "Communication");
        assert_eq!(advice[1].category, "Values");
    }

    #[test]
    fn missing_answers_are_treated_as_midpoint() {
        assert!(generate_advice(&[]).is_empty());
    }
}
