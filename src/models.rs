use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Fixed first entry of every choice list: picking it means the question
/// needs no correction and nothing is written to the answer log.
pub const NO_PROBLEM_CHOICE: &str = "No problem";

#[derive(Debug, Clone, Deserialize)]
pub struct DialogueLine {
    pub speaker: String,
    pub text: String,
}

impl DialogueLine {
    pub fn display(&self) -> String {
        format!("{}: {}", self.speaker, self.text)
    }
}

/// One labeled correction option of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub text: String,
}

impl Choice {
    pub fn display(&self) -> String {
        format!("{}: {}", self.label, self.text)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub category: String,
    pub question: String,
    /// Reference answer shown to the annotator, never graded.
    pub answer: String,
    #[serde(deserialize_with = "choices_in_document_order")]
    pub choices: Vec<Choice>,
}

/// One survey document. Replaced wholesale when the cursor crosses a file
/// boundary; never mutated in between.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionSet {
    #[serde(default)]
    pub dialogue: Vec<DialogueLine>,
    pub questions: Vec<Question>,
}

/// The `choices` field is a JSON object, but its render order must be the
/// document's declared order, not the map's key order. Streaming the entries
/// into a Vec keeps them as written.
fn choices_in_document_order<'de, D>(deserializer: D) -> Result<Vec<Choice>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ChoiceMapVisitor;

    impl<'de> Visitor<'de> for ChoiceMapVisitor {
        type Value = Vec<Choice>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of choice labels to choice text")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut choices = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((label, text)) = map.next_entry::<String, String>()? {
                choices.push(Choice { label, text });
            }
            Ok(choices)
        }
    }

    deserializer.deserialize_map(ChoiceMapVisitor)
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Survey,
    QuitConfirm,
    Complete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_display() {
        let choice = Choice {
            label: "A".to_string(),
            text: "The speaker changes topic".to_string(),
        };
        assert_eq!(choice.display(), "A: The speaker changes topic");
    }

    #[test]
    fn test_dialogue_line_display() {
        let line = DialogueLine {
            speaker: "Alice".to_string(),
            text: "Hello there".to_string(),
        };
        assert_eq!(line.display(), "Alice: Hello there");
    }

    #[test]
    fn test_choices_keep_document_order() {
        let json = r#"{
            "category": "tone",
            "question": "What went wrong?",
            "answer": "Nothing",
            "choices": {"C": "third", "A": "first", "B": "second"}
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        let labels: Vec<&str> = question.choices.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_question_set_without_dialogue() {
        let json = r#"{
            "questions": [{
                "category": "tone",
                "question": "Q?",
                "answer": "A",
                "choices": {"A": "one"}
            }]
        }"#;
        let set: QuestionSet = serde_json::from_str(json).unwrap();
        assert!(set.dialogue.is_empty());
        assert_eq!(set.questions.len(), 1);
    }

    #[test]
    fn test_question_set_with_dialogue() {
        let json = r#"{
            "dialogue": [
                {"speaker": "Alice", "text": "Hi"},
                {"speaker": "Bob", "text": "Hey"}
            ],
            "questions": []
        }"#;
        let set: QuestionSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.dialogue.len(), 2);
        assert_eq!(set.dialogue[0].speaker, "Alice");
        assert_eq!(set.dialogue[1].text, "Hey");
    }

    #[test]
    fn test_empty_choices_map() {
        let json = r#"{
            "category": "tone",
            "question": "Q?",
            "answer": "A",
            "choices": {}
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert!(question.choices.is_empty());
    }
}
