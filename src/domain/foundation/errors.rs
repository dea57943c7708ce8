//! Error types for the domain layer.
//!
//! The engines perform no I/O, so the only failure mode is a caller
//! submitting a structurally or semantically invalid answer set. Every
//! variant message names the concrete defect so clients can surface it
//! directly.

use thiserror::Error;

/// Errors raised while validating a submitted answer set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("No {quiz} answers were submitted")]
    EmptyAnswers { quiz: &'static str },

    #[error("Unanswered questions: {missing:?}")]
    UnansweredQuestions { missing: Vec<u8> },

    #[error("Unknown question id: {id}")]
    UnknownQuestion { id: u8 },

    #[error("Invalid option index {index} for question {question_id}")]
    OptionOutOfBounds { question_id: u8, index: usize },

    #[error("{quiz} requires exactly {expected} answers, got {actual}")]
    WrongAnswerCount {
        quiz: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{quiz} question ids must be in ascending order: expected {expected}, got {actual}")]
    QuestionOrderMismatch {
        quiz: &'static str,
        expected: u8,
        actual: u8,
    },

    #[error("MBTI answers must be 'A' or 'B', got '{value}'")]
    InvalidChoice { value: String },

    #[error("Marriage answers must be in the 1-5 range, got {value}")]
    AnswerOutOfRange { value: i64 },
}

impl ValidationError {
    /// Creates an empty answer set error.
    pub fn empty(quiz: &'static str) -> Self {
        ValidationError::EmptyAnswers { quiz }
    }

    /// Creates a wrong answer count error.
    pub fn wrong_count(quiz: &'static str, expected: usize, actual: usize) -> Self {
        ValidationError::WrongAnswerCount {
            quiz,
            expected,
            actual,
        }
    }

    /// Creates a question order mismatch error.
    pub fn order_mismatch(quiz: &'static str, expected: u8, actual: u8) -> Self {
        ValidationError::QuestionOrderMismatch {
            quiz,
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answers_names_the_quiz() {
        let err = ValidationError::empty("personality");
        assert_eq!(format!("{}", err), "No personality answers were submitted");
    }

    #[test]
    fn unanswered_questions_lists_missing_ids() {
        let err = ValidationError::UnansweredQuestions { missing: vec![3, 7] };
        let msg = format!("{}", err);
        assert!(msg.contains("3"));
        assert!(msg.contains("7"));
    }

    #[test]
    fn wrong_count_reports_expected_and_actual() {
        let err = ValidationError::wrong_count("MBTI", 16, 15);
        assert_eq!(
            format!("{}", err),
            "MBTI requires exactly 16 answers, got 15"
        );
    }

    #[test]
    fn order_mismatch_reports_positions() {
        let err = ValidationError::order_mismatch("MBTI", 0, 1);
        assert_eq!(
            format!("{}", err),
            "MBTI question ids must be in ascending order: expected 0, got 1"
        );
    }

    #[test]
    fn invalid_choice_names_the_value() {
        let err = ValidationError::InvalidChoice {
            value: "C".to_string(),
        };
        assert_eq!(format!("{}", err), "MBTI answers must be 'A' or 'B', got 'C'");
    }

    #[test]
    fn out_of_range_names_the_value() {
        let err = ValidationError::AnswerOutOfRange { value: 6 };
        assert_eq!(
            format!("{}", err),
            "Marriage answers must be in the 1-5 range, got 6"
        );
    }
}
