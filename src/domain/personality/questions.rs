//! Static question bank for the personality assessment.
//!
//! The bank is built once and treated as read-only. Each question carries
//! its dimension explicitly so reordering the bank cannot silently change
//! the scoring.

use once_cell::sync::Lazy;
use serde::Serialize;

/// The six scoring dimensions of the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Extroversion,
    Communication,
    EmotionalStability,
    DecisionMaking,
    Empathy,
    Commitment,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Extroversion,
        Dimension::Communication,
        Dimension::EmotionalStability,
        Dimension::DecisionMaking,
        Dimension::Empathy,
        Dimension::Commitment,
    ];

    /// Returns the snake_case label used on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Extroversion => "extroversion",
            Dimension::Communication => "communication",
            Dimension::EmotionalStability => "emotional_stability",
            Dimension::DecisionMaking => "decision_making",
            Dimension::Empathy => "empathy",
            Dimension::Commitment => "commitment",
        }
    }
}

/// One selectable option with its score weight (1-4).
#[derive(Debug, Clone, Serialize)]
pub struct QuestionOption {
    pub text: &'static str,
    pub score: u8,
}

/// One question of the bank.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: u8,
    pub question: &'static str,
    pub dimension: Dimension,
    pub options: Vec<QuestionOption>,
}

fn question(
    id: u8,
    dimension: Dimension,
    prompt: &'static str,
    options: [&'static str; 4],
) -> Question {
    // Option weights always run 4 down to 1 in bank order.
    Question {
        id,
        question: prompt,
        dimension,
        options: options
            .into_iter()
            .zip([4u8, 3, 2, 1])
            .map(|(text, score)| QuestionOption { text, score })
            .collect(),
    }
}

static QUESTION_BANK: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        question(
            1,
            Dimension::Extroversion,
            "How do you feel in a conversation with someone you just met?",
            [
                "I enjoy it and talk naturally",
                "A little nervous, but I like talking",
                "Nervous, but I adapt to the other person",
                "Very nervous and find it hard to talk",
            ],
        ),
        question(
            2,
            Dimension::Communication,
            "What matters most to you in conversations with a partner?",
            [
                "Understanding each other's feelings",
                "Having fun and keeping things lively",
                "Listening closely to the other person",
                "Conveying my own thoughts accurately",
            ],
        ),
        question(
            3,
            Dimension::EmotionalStability,
            "When you feel stressed, how do you cope?",
            [
                "Talk it over with friends or family",
                "Think it through calmly on my own",
                "Clear my head with hobbies or exercise",
                "Wait for time to sort it out",
            ],
        ),
        question(
            4,
            Dimension::DecisionMaking,
            "When planning a date, what is your style?",
            [
                "Plan everything out in detail beforehand",
                "Settle on a rough outline in advance",
                "Ask my partner's wishes before deciding",
                "Decide as things unfold",
            ],
        ),
        question(
            5,
            Dimension::Empathy,
            "When your partner is feeling down, how do you respond?",
            [
                "Listen, empathize, and support them",
                "Work through solutions together",
                "Quietly watch over them",
                "Suggest ways to cheer them up",
            ],
        ),
        question(
            6,
            Dimension::Commitment,
            "What are your thoughts on marriage?",
            [
                "One of the most important decisions in life",
                "A vital partnership of mutual support",
                "A natural step when there is love",
                "Something to consider if the right person appears",
            ],
        ),
        question(
            7,
            Dimension::Communication,
            "When opinions clash, how do you resolve it?",
            [
                "Talk until we understand each other's positions",
                "Cool off, then discuss constructively",
                "Find a compromise and settle it",
                "Give it time and let it resolve naturally",
            ],
        ),
        question(
            8,
            Dimension::Extroversion,
            "How do you feel about new environments and change?",
            [
                "Excited, I dive in eagerly",
                "A little anxious, but I want the challenge",
                "I prepare carefully before facing it",
                "I prefer a stable environment when possible",
            ],
        ),
        question(
            9,
            Dimension::DecisionMaking,
            "How do you picture sharing roles in your future household?",
            [
                "Split duties by each person's strengths",
                "Decide through discussion",
                "Adapt flexibly to my partner",
                "Traditional role division works best",
            ],
        ),
        question(
            10,
            Dimension::Empathy,
            "What do you want to value in relationships with your partner's family and friends?",
            [
                "Actively build good relationships",
                "Respect them and interact naturally",
                "Engage fully when it matters",
                "Stay polite while keeping some distance",
            ],
        ),
    ]
});

/// Returns the canonical 10-question bank.
pub fn question_bank() -> &'static [Question] {
    &QUESTION_BANK
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bank_has_ten_questions_with_unique_ids() {
        let bank = question_bank();
        assert_eq!(bank.len(), 10);

        let ids: HashSet<u8> = bank.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(ids, (1..=10).collect::<HashSet<u8>>());
    }

    #[test]
    fn every_question_has_four_options_weighted_4_to_1() {
        for q in question_bank() {
            assert_eq!(q.options.len(), 4, "question {}", q.id);
            let weights: Vec<u8> = q.options.iter().map(|o| o.score).collect();
            assert_eq!(weights, vec![4, 3, 2, 1], "question {}", q.id);
        }
    }

    #[test]
    fn communication_and_empathy_receive_two_questions_each() {
        let count = |dim: Dimension| {
            question_bank()
                .iter()
                .filter(|q| q.dimension == dim)
                .count()
        };

        assert_eq!(count(Dimension::Communication), 2);
        assert_eq!(count(Dimension::Empathy), 2);
        assert_eq!(count(Dimension::Extroversion), 2);
        assert_eq!(count(Dimension::EmotionalStability), 1);
        assert_eq!(count(Dimension::DecisionMaking), 2);
        assert_eq!(count(Dimension::Commitment), 1);
    }

    #[test]
    fn every_dimension_is_covered() {
        let covered: HashSet<Dimension> =
            question_bank().iter().map(|q| q.dimension).collect();
        assert_eq!(covered.len(), Dimension::ALL.len());
    }
}
