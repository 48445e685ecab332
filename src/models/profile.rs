use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use super::question::Question;
use crate::projection::{Projectable, Projection, ToProjected};

/// Another user's profile as seen by the local user.
///
/// Most fields stay empty until application code fills them in from
/// profile pages. The site-internal id is kept off the serialized form.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub name: String,
    pub age: Option<u32>,
    pub location: String,
    pub match_percentage: Option<u32>,
    pub enemy_percentage: Option<u32>,
    pub rating: u32,
    pub contacted: bool,
    pub essays: BTreeMap<String, String>,
    pub details: BTreeMap<String, String>,
    pub questions: Vec<Question>,
    id: Option<String>,
}

impl Profile {
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Profile of {}>", self.name)
    }
}

impl Projectable for Profile {
    fn project(&self) -> Map<String, Value> {
        Projection::new()
            .field("name", &self.name)
            .field("age", &self.age)
            .field("location", &self.location)
            .field("match_percentage", &self.match_percentage)
            .field("enemy_percentage", &self.enemy_percentage)
            .field("rating", &self.rating)
            .field("contacted", &self.contacted)
            .field("essays", &self.essays)
            .field("details", &self.details)
            .field("questions", &self.questions)
            .finish()
    }
}

impl ToProjected for Profile {
    fn to_projected(&self) -> Option<Value> {
        Some(Value::Object(self.project()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display() {
        let profile = Profile::new("stacy1981".to_string());
        assert_eq!(profile.to_string(), "<Profile of stacy1981>");
    }

    #[test]
    fn test_internal_id_stays_out_of_projection() {
        let mut profile = Profile::new("stacy1981".to_string());
        profile.set_id("10384".to_string());

        let map = profile.project();
        assert!(!map.contains_key("id"));
        assert_eq!(profile.id(), Some("10384"));
    }

    #[test]
    fn test_nested_questions_project() {
        let mut profile = Profile::new("stacy1981".to_string());
        profile.age = Some(32);
        profile.questions.push(Question::new(
            "Cats or dogs?".to_string(),
            "Cats".to_string(),
            String::new(),
        ));
        profile.questions.push(Question::new(
            "Morning person?".to_string(),
            "No".to_string(),
            "Night owl.".to_string(),
        ));

        let map = profile.project();
        assert_eq!(
            map["questions"],
            json!([
                {"text": "Cats or dogs?", "user_answer": "Cats", "explanation": ""},
                {"text": "Morning person?", "user_answer": "No", "explanation": "Night owl."},
            ])
        );
        assert_eq!(map["age"], json!(32));
    }

    #[test]
    fn test_essays_and_details_project_as_mappings() {
        let mut profile = Profile::new("stacy1981".to_string());
        profile
            .essays
            .insert("self summary".to_string(), "I like hiking.".to_string());
        profile
            .details
            .insert("diet".to_string(), "vegetarian".to_string());

        let map = profile.project();
        assert_eq!(map["essays"], json!({"self summary": "I like hiking."}));
        assert_eq!(map["details"], json!({"diet": "vegetarian"}));
    }

    #[test]
    fn test_json_round_trip() {
        let mut profile = Profile::new("stacy1981".to_string());
        profile.location = "Portland, OR".to_string();
        profile.contacted = true;

        let decoded: Value = serde_json::from_str(&profile.to_json().unwrap()).unwrap();
        assert_eq!(decoded, Value::Object(profile.project()));
    }
}
