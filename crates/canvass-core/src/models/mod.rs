mod draft;
mod generated;

pub use draft::{AnswerOption, Question, QuestionType, SurveyDraft};
pub use generated::{GeneratedOption, GeneratedQuestion, GeneratedSurvey};
