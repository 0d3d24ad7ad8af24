//! Deserialization of generation-service payloads, which vary in shape
//! from one model response to the next.

use canvass_core::models::{GeneratedOption, GeneratedSurvey, QuestionType};

#[test]
fn option_accepts_a_bare_string() {
    let option: GeneratedOption = serde_json::from_str("\"Strongly agree\"").unwrap();
    assert_eq!(option.text(), "Strongly agree");
}

#[test]
fn option_accepts_an_object_with_text() {
    let option: GeneratedOption =
        serde_json::from_str(r#"{"text": "Agree", "label": "ignored"}"#).unwrap();
    assert_eq!(option.text(), "Agree");
}

#[test]
fn option_falls_back_to_label() {
    let option: GeneratedOption = serde_json::from_str(r#"{"label": "Disagree"}"#).unwrap();
    assert_eq!(option.text(), "Disagree");
}

#[test]
fn option_with_neither_text_nor_label_is_empty() {
    let option: GeneratedOption = serde_json::from_str(r#"{"weight": 3}"#).unwrap();
    assert_eq!(option.text(), "");
}

#[test]
fn unrecognised_option_shape_coerces_to_empty_text() {
    let option: GeneratedOption = serde_json::from_str("42").unwrap();
    assert_eq!(option.text(), "");
}

#[test]
fn question_text_wins_over_title() {
    let survey: GeneratedSurvey = serde_json::from_str(
        r#"{"questions": [{"type": "shortAnswer", "text": "From text", "title": "From title"}]}"#,
    )
    .unwrap();
    let questions = survey.questions.unwrap();
    assert_eq!(questions[0].wording(), "From text");
}

#[test]
fn question_falls_back_to_title_then_empty() {
    let survey: GeneratedSurvey = serde_json::from_str(
        r#"{"questions": [{"type": "shortAnswer", "title": "Only title"}, {"type": "paragraph"}]}"#,
    )
    .unwrap();
    let questions = survey.questions.unwrap();
    assert_eq!(questions[0].wording(), "Only title");
    assert_eq!(questions[1].wording(), "");
}

#[test]
fn missing_type_defaults_to_short_answer() {
    let survey: GeneratedSurvey =
        serde_json::from_str(r#"{"questions": [{"text": "Untyped"}]}"#).unwrap();
    let questions = survey.questions.unwrap();
    assert_eq!(
        questions[0].question_type.as_str(),
        QuestionType::SHORT_ANSWER
    );
}

#[test]
fn whole_payload_with_mixed_option_shapes_parses() {
    let survey: GeneratedSurvey = serde_json::from_str(
        r#"{
            "title": "Customer feedback",
            "description": "Generated",
            "questions": [
                {
                    "type": "multipleChoice",
                    "text": "How did you hear about us?",
                    "options": ["Search", {"text": "A friend"}, {"label": "Press"}, null]
                }
            ]
        }"#,
    )
    .unwrap();

    let questions = survey.questions.unwrap();
    let texts: Vec<_> = questions[0]
        .options
        .as_ref()
        .unwrap()
        .iter()
        .map(GeneratedOption::text)
        .collect();
    assert_eq!(texts, vec!["Search", "A friend", "Press", ""]);
}

#[test]
fn empty_object_is_a_valid_payload() {
    let survey: GeneratedSurvey = serde_json::from_str("{}").unwrap();
    assert!(survey.title.is_none());
    assert!(survey.description.is_none());
    assert!(survey.questions.is_none());
}
