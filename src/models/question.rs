use serde_json::{Map, Value};
use std::fmt;

use crate::projection::{Projectable, Projection, ToProjected};

/// A profile question with the local user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub user_answer: String,
    pub explanation: String,
}

impl Question {
    pub fn new(text: String, user_answer: String, explanation: String) -> Self {
        Self {
            text,
            user_answer,
            explanation,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Question: {}>", self.text)
    }
}

impl Projectable for Question {
    fn project(&self) -> Map<String, Value> {
        Projection::new()
            .field("text", &self.text)
            .field("user_answer", &self.user_answer)
            .field("explanation", &self.explanation)
            .finish()
    }
}

impl ToProjected for Question {
    fn to_projected(&self) -> Option<Value> {
        Some(Value::Object(self.project()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Question {
        Question::new(
            "Do you like scary movies?".to_string(),
            "Yes".to_string(),
            "The scarier the better.".to_string(),
        )
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "<Question: Do you like scary movies?>");
    }

    #[test]
    fn test_projection() {
        assert_eq!(
            Value::Object(sample().project()),
            json!({
                "text": "Do you like scary movies?",
                "user_answer": "Yes",
                "explanation": "The scarier the better.",
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let question = sample();
        let decoded: Value = serde_json::from_str(&question.to_json().unwrap()).unwrap();
        assert_eq!(decoded, Value::Object(question.project()));
    }
}
