//! Static question banks for the Marriage MBTI+ assessment.
//!
//! Axis and category assignments are explicit fields on each question
//! record; the scoring code never infers them from bank position.

use once_cell::sync::Lazy;
use serde::Serialize;

/// The four MBTI axis pairs. Option A always maps to the first-listed
/// letter, option B to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MbtiAxis {
    #[serde(rename = "EI")]
    ExtraversionIntroversion,
    #[serde(rename = "SN")]
    SensingIntuition,
    #[serde(rename = "TF")]
    ThinkingFeeling,
    #[serde(rename = "JP")]
    JudgingPerceiving,
}

impl MbtiAxis {
    /// Letter tallied for an 'A' answer.
    pub fn letter_a(&self) -> char {
        match self {
            MbtiAxis::ExtraversionIntroversion => 'E',
            MbtiAxis::SensingIntuition => 'S',
            MbtiAxis::ThinkingFeeling => 'T',
            MbtiAxis::JudgingPerceiving => 'J',
        }
    }

    /// Letter tallied for a 'B' answer.
    pub fn letter_b(&self) -> char {
        match self {
            MbtiAxis::ExtraversionIntroversion => 'I',
            MbtiAxis::SensingIntuition => 'N',
            MbtiAxis::ThinkingFeeling => 'F',
            MbtiAxis::JudgingPerceiving => 'P',
        }
    }
}

/// One binary MBTI question.
#[derive(Debug, Clone, Serialize)]
pub struct MbtiQuestion {
    pub id: u8,
    pub question: &'static str,
    #[serde(rename = "optionA")]
    pub option_a: &'static str,
    #[serde(rename = "optionB")]
    pub option_b: &'static str,
    pub axis: MbtiAxis,
}

/// The five relationship-values categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarriageCategory {
    Communication,
    Lifestyle,
    Values,
    Future,
    Intimacy,
}

impl MarriageCategory {
    /// All categories in canonical order.
    pub const ALL: [MarriageCategory; 5] = [
        MarriageCategory::Communication,
        MarriageCategory::Lifestyle,
        MarriageCategory::Values,
        MarriageCategory::Future,
        MarriageCategory::Intimacy,
    ];

    /// Returns the lowercase key used on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            MarriageCategory::Communication => "communication",
            MarriageCategory::Lifestyle => "lifestyle",
            MarriageCategory::Values => "values",
            MarriageCategory::Future => "future",
            MarriageCategory::Intimacy => "intimacy",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            MarriageCategory::Communication => "Communication",
            MarriageCategory::Lifestyle => "Lifestyle",
            MarriageCategory::Values => "Values",
            MarriageCategory::Future => "Future plans",
            MarriageCategory::Intimacy => "Intimacy",
        }
    }
}

/// One five-point relationship-values question.
#[derive(Debug, Clone, Serialize)]
pub struct MarriageQuestion {
    pub id: u8,
    pub question: &'static str,
    pub options: [&'static str; 5],
    pub category: MarriageCategory,
}

static MBTI_BANK: Lazy<Vec<MbtiQuestion>> = Lazy::new(|| {
    use MbtiAxis::*;

    let mbti = |id, axis, question, option_a, option_b| MbtiQuestion {
        id,
        question,
        option_a,
        option_b,
        axis,
    };

    vec![
        mbti(
            0,
            ExtraversionIntroversion,
            "When meeting people in a new environment, what is your tendency?",
            "Strike up conversations and build connections with many people",
            "Observe first and prefer talking in depth with a few people",
        ),
        mbti(
            1,
            ExtraversionIntroversion,
            "When you need to recharge your energy, you...",
            "Spend more time with friends and family",
            "Treasure time relaxing on my own",
        ),
        mbti(
            2,
            ExtraversionIntroversion,
            "Your ideal day off with a partner is?",
            "Joining parties or events with friends",
            "Quiet time spent just the two of us",
        ),
        mbti(
            3,
            ExtraversionIntroversion,
            "In communication, you...",
            "Often think out loud while talking",
            "Prefer to think things through before speaking",
        ),
        mbti(
            4,
            SensingIntuition,
            "What do you prioritize when choosing a partner?",
            "Concrete criteria such as finances, occupation, and character",
            "Intuitive chemistry and future potential",
        ),
        mbti(
            5,
            SensingIntuition,
            "When discussing future plans, you...",
            "Want concrete, achievable plans",
            "Want to share big dreams and visions",
        ),
        mbti(
            6,
            SensingIntuition,
            "What do you consider important in married life?",
            "A steady daily rhythm and practical cooperation",
            "Mutual growth and embracing new possibilities",
        ),
        mbti(
            7,
            SensingIntuition,
            "Which conversations with a partner do you enjoy?",
            "What is happening now and concrete experiences",
            "Future possibilities and abstract ideas",
        ),
        mbti(
            8,
            ThinkingFeeling,
            "The most important quality you seek in a partner?",
            "Intelligence and logical thinking",
            "Warmth and consideration",
        ),
        mbti(
            9,
            ThinkingFeeling,
            "When a disagreement arises, you...",
            "Want to resolve it with facts and logic",
            "Put understanding each other's feelings first",
        ),
        mbti(
            10,
            ThinkingFeeling,
            "When making important decisions, you...",
            "Weigh objective data and analysis",
            "Consider the impact on the people involved",
        ),
        mbti(
            11,
            ThinkingFeeling,
            "When supporting your partner, you...",
            "Work through solutions together",
            "Put emotional support first",
        ),
        mbti(
            12,
            JudgingPerceiving,
            "Thinking about life after marriage, you...",
            "Prefer solid plans and a regular routine",
            "Prefer flexibility that adapts to circumstances",
        ),
        mbti(
            13,
            JudgingPerceiving,
            "When planning a date, you...",
            "Plan thoroughly in advance and book ahead",
            "Decide on the mood of the moment and roam freely",
        ),
        mbti(
            14,
            JudgingPerceiving,
            "What reassures you in a relationship?",
            "Clear promises and agreed rules",
            "A natural dynamic that respects each other's freedom",
        ),
        mbti(
            15,
            JudgingPerceiving,
            "Facing a new experience, you...",
            "Gather information and prepare before diving in",
            "Go with the flow and enjoy the moment",
        ),
    ]
});

static MARRIAGE_BANK: Lazy<Vec<MarriageQuestion>> = Lazy::new(|| {
    use MarriageCategory::*;

    vec![
        MarriageQuestion {
            id: 0,
            question: "What do you value most in communication with a partner?",
            options: [
                "Logical, clear discussion",
                "Leaning logical",
                "A balanced dialogue",
                "Leaning emotional",
                "Emotional understanding and empathy",
            ],
            category: Communication,
        },
        MarriageQuestion {
            id: 1,
            question: "What is your ideal lifestyle?",
            options: [
                "Very active and stimulating",
                "Fairly active",
                "A balanced life",
                "Fairly calm",
                "Very quiet and settled",
            ],
            category: Lifestyle,
        },
        MarriageQuestion {
            id: 2,
            question: "How do you see differences in values with a partner?",
            options: [
                "We should hold exactly the same values",
                "We should share the basic values",
                "Acknowledge differences and resolve them by talking",
                "Respect diversity and learn from each other",
                "Fully independent values are fine",
            ],
            category: Values,
        },
        MarriageQuestion {
            id: 3,
            question: "How do you feel about raising children?",
            options: [
                "I absolutely want children",
                "I would like children if possible",
                "Decide together with my partner",
                "Not particularly important to me",
                "I do not want children",
            ],
            category: Future,
        },
        MarriageQuestion {
            id: 4,
            question: "How should money be managed in a marriage?",
            options: [
                "Fully joint management",
                "Mostly joint, partly personal",
                "Decide by discussion",
                "Mostly personal, partly joint",
                "Fully separate management",
            ],
            category: Future,
        },
        MarriageQuestion {
            id: 5,
            question: "How do you express closeness with a partner?",
            options: [
                "Value verbal expressions of affection",
                "Lean toward words",
                "Both words and actions",
                "Lean toward actions",
                "Value showing love through actions",
            ],
            category: Intimacy,
        },
        MarriageQuestion {
            id: 6,
            question: "How do you like to spend time with a partner?",
            options: [
                "Value being together constantly",
                "Want to share most of our time",
                "Keep a comfortable distance",
                "Value each other's own time too",
                "Value independence most",
            ],
            category: Lifestyle,
        },
        MarriageQuestion {
            id: 7,
            question: "What about careers after marriage?",
            options: [
                "Both prioritize careers above all",
                "Lean toward careers",
                "Balance home and career",
                "Lean toward home",
                "Home comes first",
            ],
            category: Values,
        },
        MarriageQuestion {
            id: 8,
            question: "Where would you like to live after marriage?",
            options: [
                "A convenient urban area",
                "A balanced near-urban area",
                "Either is fine",
                "Leafy suburbs",
                "Quiet country living",
            ],
            category: Lifestyle,
        },
        MarriageQuestion {
            id: 9,
            question: "What do you most want to treasure in the relationship?",
            options: [
                "Passionate love",
                "Deep mutual trust",
                "Growing together",
                "A stable cooperative bond",
                "Respect for independence",
            ],
            category: Values,
        },
    ]
});

/// Returns the canonical 16-question MBTI bank (axis blocks of four).
pub fn mbti_question_bank() -> &'static [MbtiQuestion] {
    &MBTI_BANK
}

/// Returns the canonical 10-question relationship-values bank.
pub fn marriage_question_bank() -> &'static [MarriageQuestion] {
    &MARRIAGE_BANK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mbti_bank_has_sixteen_questions_in_axis_blocks_of_four() {
        let bank = mbti_question_bank();
        assert_eq!(bank.len(), 16);

        for (i, q) in bank.iter().enumerate() {
            assert_eq!(q.id as usize, i);
            let expected = match i / 4 {
                0 => MbtiAxis::ExtraversionIntroversion,
                1 => MbtiAxis::SensingIntuition,
                2 => MbtiAxis::ThinkingFeeling,
                _ => MbtiAxis::JudgingPerceiving,
            };
            assert_eq!(q.axis, expected, "question {}", i);
        }
    }

    #[test]
    fn axis_letters_pair_up() {
        assert_eq!(MbtiAxis::ExtraversionIntroversion.letter_a(), 'E');
        assert_eq!(MbtiAxis::ExtraversionIntroversion.letter_b(), 'I');
        assert_eq!(MbtiAxis::SensingIntuition.letter_a(), 'S');
        assert_eq!(MbtiAxis::SensingIntuition.letter_b(), 'N');
        assert_eq!(MbtiAxis::ThinkingFeeling.letter_a(), 'T');
        assert_eq!(MbtiAxis::ThinkingFeeling.letter_b(), 'F');
        assert_eq!(MbtiAxis::JudgingPerceiving.letter_a(), 'J');
        assert_eq!(MbtiAxis::JudgingPerceiving.letter_b(), 'P');
    }

    #[test]
    fn marriage_bank_matches_the_fixed_category_map() {
        use MarriageCategory::*;

        let expected = [
            Communication,
            Lifestyle,
            Values,
            Future,
            Future,
            Intimacy,
            Lifestyle,
            Values,
            Lifestyle,
            Values,
        ];

        let bank = marriage_question_bank();
        assert_eq!(bank.len(), 10);
        for (i, q) in bank.iter().enumerate() {
            assert_eq!(q.id as usize, i);
            assert_eq!(q.category, expected[i], "question {}", i);
            assert_eq!(q.options.len(), 5);
        }
    }

    #[test]
    fn every_marriage_category_is_covered() {
        for category in MarriageCategory::ALL {
            assert!(
                marriage_question_bank()
                    .iter()
                    .any(|q| q.category == category),
                "{:?} has no question",
                category
            );
        }
    }
}
