use canvass_core::models::QuestionType;
use canvass_core::store::DraftStore;

#[test]
fn new_store_starts_with_placeholder_content() {
    let store = DraftStore::new();
    assert_eq!(store.draft().title, "My Survey Title");
    assert_eq!(store.draft().description, "This is a sample survey.");
    assert!(store.draft().questions.is_empty());
}

#[test]
fn adding_a_choice_question_yields_two_empty_options() {
    let mut store = DraftStore::new();
    store.add_question(QuestionType::from(QuestionType::MULTIPLE_CHOICE));

    let question = &store.draft().questions[0];
    assert_eq!(question.options.len(), 2);
    assert!(question.options.iter().all(|o| o.text.is_empty()));
    assert!(!question.saved);
}

#[test]
fn adding_a_default_question_yields_no_options() {
    let mut store = DraftStore::new();
    store.add_default_question();

    let question = &store.draft().questions[0];
    assert_eq!(question.question_type.as_str(), QuestionType::SHORT_ANSWER);
    assert!(question.options.is_empty());
}

#[test]
fn type_change_away_from_choice_clears_options() {
    let mut store = DraftStore::new();
    store.add_question(QuestionType::from(QuestionType::SINGLE_CHOICE));
    store.set_option_text(0, 0, "keep me?");

    store.set_question_type(0, QuestionType::from(QuestionType::SHORT_ANSWER));
    assert!(store.draft().questions[0].options.is_empty());

    store.set_question_type(0, QuestionType::from(QuestionType::SINGLE_CHOICE));
    let question = &store.draft().questions[0];
    assert_eq!(question.options.len(), 2);
    assert!(question.options.iter().all(|o| o.text.is_empty()));
}

#[test]
fn type_change_keeps_existing_options_when_already_choice_sized() {
    let mut store = DraftStore::new();
    store.add_question(QuestionType::from(QuestionType::MULTIPLE_CHOICE));
    store.set_option_text(0, 0, "yes");
    store.set_option_text(0, 1, "no");

    store.set_question_type(0, QuestionType::from(QuestionType::SINGLE_CHOICE));

    let question = &store.draft().questions[0];
    assert_eq!(question.question_type.as_str(), QuestionType::SINGLE_CHOICE);
    assert_eq!(question.options[0].text, "yes");
    assert_eq!(question.options[1].text, "no");
}

#[test]
fn delete_question_out_of_range_is_a_noop() {
    let mut store = DraftStore::new();
    store.add_default_question();

    store.delete_question(5);
    assert_eq!(store.draft().questions.len(), 1);

    store.delete_question(0);
    assert!(store.draft().questions.is_empty());
}

#[test]
fn duplicate_appends_to_end_with_fresh_id_in_edit_mode() {
    let mut store = DraftStore::new();
    store.add_question(QuestionType::from(QuestionType::MULTIPLE_CHOICE));
    store.set_question_title(0, "Favourite colour?");
    store.add_default_question();
    store.save_question(0);

    store.duplicate_question(0);

    let questions = &store.draft().questions;
    assert_eq!(questions.len(), 3);
    let copy = &questions[2];
    assert_eq!(copy.title, "Favourite colour?");
    assert_ne!(copy.id, questions[0].id);
    assert!(!copy.saved);
    // Option ids carry over from the source; only the question id is new.
    assert_eq!(copy.options[0].id, questions[0].options[0].id);
}

#[test]
fn duplicate_out_of_range_is_a_noop() {
    let mut store = DraftStore::new();
    store.duplicate_question(0);
    assert!(store.draft().questions.is_empty());
}

#[test]
fn save_and_edit_toggle_view_mode() {
    let mut store = DraftStore::new();
    store.add_default_question();

    store.save_question(0);
    assert!(store.draft().questions[0].saved);

    store.edit_question(0);
    assert!(!store.draft().questions[0].saved);
}

#[test]
fn rapid_option_adds_are_debounced_to_one() {
    let mut store = DraftStore::new();
    store.add_question(QuestionType::from(QuestionType::MULTIPLE_CHOICE));

    assert!(store.add_option(0));
    assert!(!store.add_option(0));
    assert_eq!(store.draft().questions[0].options.len(), 3);

    store.complete_option_add();
    assert!(store.add_option(0));
    assert_eq!(store.draft().questions[0].options.len(), 4);
}

#[test]
fn option_add_guard_does_not_extend_across_questions() {
    let mut store = DraftStore::new();
    store.add_question(QuestionType::from(QuestionType::MULTIPLE_CHOICE));
    store.add_question(QuestionType::from(QuestionType::SINGLE_CHOICE));

    assert!(store.add_option(0));
    assert!(store.add_option(1));
    assert_eq!(store.draft().questions[0].options.len(), 3);
    assert_eq!(store.draft().questions[1].options.len(), 3);
}

#[test]
fn add_option_out_of_range_is_a_noop() {
    let mut store = DraftStore::new();
    assert!(!store.add_option(0));
}

#[test]
fn set_option_text_out_of_range_is_a_noop() {
    let mut store = DraftStore::new();
    store.add_default_question();

    store.set_option_text(0, 0, "nowhere to go");
    assert!(store.draft().questions[0].options.is_empty());

    store.set_option_text(7, 0, "nowhere to go");
    assert_eq!(store.draft().questions.len(), 1);
}

#[test]
fn delete_option_with_unknown_id_leaves_options_unchanged() {
    let mut store = DraftStore::new();
    store.add_question(QuestionType::from(QuestionType::MULTIPLE_CHOICE));

    store.delete_option(0, uuid::Uuid::new_v4());
    assert_eq!(store.draft().questions[0].options.len(), 2);
}

#[test]
fn delete_option_removes_by_id_not_position() {
    let mut store = DraftStore::new();
    store.add_question(QuestionType::from(QuestionType::MULTIPLE_CHOICE));
    store.set_option_text(0, 0, "first");
    store.set_option_text(0, 1, "second");

    let first_id = store.draft().questions[0].options[0].id;
    store.delete_option(0, first_id);

    let options = &store.draft().questions[0].options;
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].text, "second");
}

#[test]
fn reorder_moves_question_and_preserves_id_multiset() {
    let mut store = DraftStore::new();
    for _ in 0..4 {
        store.add_default_question();
    }
    let mut ids_before: Vec<_> = store.draft().questions.iter().map(|q| q.id).collect();
    let moved = ids_before[0];

    store.reorder(0, Some(2));

    let ids_after: Vec<_> = store.draft().questions.iter().map(|q| q.id).collect();
    assert_eq!(ids_after[2], moved);
    assert_eq!(ids_after, vec![ids_before[1], ids_before[2], moved, ids_before[3]]);

    let mut sorted_after = ids_after.clone();
    sorted_after.sort();
    ids_before.sort();
    assert_eq!(sorted_after, ids_before);
}

#[test]
fn reorder_without_destination_is_a_noop() {
    let mut store = DraftStore::new();
    store.add_default_question();
    store.add_default_question();
    let ids: Vec<_> = store.draft().questions.iter().map(|q| q.id).collect();

    store.reorder(0, None);

    let after: Vec<_> = store.draft().questions.iter().map(|q| q.id).collect();
    assert_eq!(after, ids);
}

#[test]
fn reorder_with_out_of_range_source_is_a_noop() {
    let mut store = DraftStore::new();
    store.add_default_question();

    store.reorder(3, Some(0));
    assert_eq!(store.draft().questions.len(), 1);
}

#[test]
fn clear_resets_fields_and_questions() {
    let mut store = DraftStore::new();
    store.set_title("Quarterly check-in");
    store.add_default_question();

    store.clear();

    assert_eq!(store.draft().title, "");
    assert_eq!(store.draft().description, "");
    assert!(store.draft().questions.is_empty());
}
