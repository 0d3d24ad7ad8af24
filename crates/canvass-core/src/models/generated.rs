//! Payload shapes produced by the generation service.
//!
//! The service sits in front of an LLM, so these types are deliberately
//! lenient: every field is optional, options arrive as plain strings or as
//! objects, and unrecognised shapes coerce to empty text instead of
//! failing deserialization.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::draft::QuestionType;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeneratedSurvey {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Option<Vec<GeneratedQuestion>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeneratedQuestion {
    /// Copied verbatim into the draft; a missing type falls back to the
    /// default question type.
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<GeneratedOption>>,
}

impl GeneratedQuestion {
    /// The question wording: `text`, falling back to `title`, falling back
    /// to empty.
    pub fn wording(&self) -> String {
        self.text
            .clone()
            .or_else(|| self.title.clone())
            .unwrap_or_default()
    }
}

/// One generated answer option. All shapes observed on the wire are
/// accepted: a bare string, an object carrying `text` and/or `label`, or
/// anything else (which coerces to empty text).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum GeneratedOption {
    Text(String),
    Labeled {
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        label: Option<String>,
    },
    Other(serde_json::Value),
}

impl GeneratedOption {
    /// The option text: `text`, falling back to `label`, falling back to
    /// empty.
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Labeled { text, label } => text
                .clone()
                .or_else(|| label.clone())
                .unwrap_or_default(),
            Self::Other(_) => String::new(),
        }
    }
}
