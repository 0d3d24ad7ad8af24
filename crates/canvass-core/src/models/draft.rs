use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A question type, carried as the raw string the frontend and the
/// generation service exchange (`shortAnswer`, `multipleChoice`, ...).
///
/// Generated payloads may name types this build has never seen; those are
/// kept verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct QuestionType(String);

impl QuestionType {
    pub const SHORT_ANSWER: &'static str = "shortAnswer";
    pub const PARAGRAPH: &'static str = "paragraph";
    pub const MULTIPLE_CHOICE: &'static str = "multipleChoice";
    pub const SINGLE_CHOICE: &'static str = "singleChoice";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Choice-like types carry a fixed set of selectable options.
    pub fn is_choice_like(&self) -> bool {
        self.0 == Self::MULTIPLE_CHOICE || self.0 == Self::SINGLE_CHOICE
    }
}

/// The type a manually added question starts with.
impl Default for QuestionType {
    fn default() -> Self {
        Self(Self::SHORT_ANSWER.to_string())
    }
}

impl From<&str> for QuestionType {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// A selectable answer within a choice-like question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub id: Uuid,
    pub text: String,
}

impl AnswerOption {
    /// A fresh option with empty text, as appended by the option-add action.
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            text: String::new(),
        }
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub title: String,
    /// Saved questions render in view mode; unsaved ones in edit mode.
    pub saved: bool,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// A blank question as appended by the question-add action.
    /// Choice-like types start with two empty options, everything else
    /// with none.
    pub fn blank(question_type: QuestionType) -> Self {
        let options = if question_type.is_choice_like() {
            vec![AnswerOption::empty(), AnswerOption::empty()]
        } else {
            Vec::new()
        };
        Self {
            id: Uuid::new_v4(),
            question_type,
            title: String::new(),
            saved: false,
            options,
        }
    }
}

/// The in-progress, unpersisted survey being edited. Lives only as long
/// as the owning UI session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurveyDraft {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl SurveyDraft {
    /// Placeholder content shown when the composer first opens.
    pub fn placeholder() -> Self {
        Self {
            title: "My Survey Title".to_string(),
            description: "This is a sample survey.".to_string(),
            questions: Vec::new(),
        }
    }
}
