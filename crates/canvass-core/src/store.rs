//! The survey draft store: single source of truth for the in-progress
//! survey. All mutations go through it. Out-of-range indices and unknown
//! identifiers degrade to no-ops rather than errors.

use uuid::Uuid;

use crate::models::{AnswerOption, GeneratedSurvey, Question, QuestionType, SurveyDraft};

/// Owns the draft plus the single-slot guard for option appends.
#[derive(Debug, Clone)]
pub struct DraftStore {
    draft: SurveyDraft,
    /// Id of the question whose option append has not yet been applied to
    /// the view. While set, further appends for that question are
    /// discarded, not queued.
    pending_option_add: Option<Uuid>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self {
            draft: SurveyDraft::placeholder(),
            pending_option_add: None,
        }
    }

    pub fn draft(&self) -> &SurveyDraft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn add_question(&mut self, question_type: QuestionType) {
        self.draft.questions.push(Question::blank(question_type));
    }

    pub fn add_default_question(&mut self) {
        self.add_question(QuestionType::default());
    }

    pub fn delete_question(&mut self, index: usize) {
        if index < self.draft.questions.len() {
            self.draft.questions.remove(index);
        }
    }

    /// Appends a copy of the question at `index` to the end of the list,
    /// with a fresh id and back in edit mode. The copy's options keep
    /// their source ids; only the question id is refreshed.
    pub fn duplicate_question(&mut self, index: usize) {
        let Some(source) = self.draft.questions.get(index) else {
            return;
        };
        let mut copy = source.clone();
        copy.id = Uuid::new_v4();
        copy.saved = false;
        self.draft.questions.push(copy);
    }

    pub fn set_question_title(&mut self, index: usize, title: impl Into<String>) {
        if let Some(question) = self.draft.questions.get_mut(index) {
            question.title = title.into();
        }
    }

    /// Switching to a choice-like type with fewer than two options replaces
    /// them with two fresh empty ones; switching away clears the options
    /// entirely. The clear is destructive — there is no undo.
    pub fn set_question_type(&mut self, index: usize, question_type: QuestionType) {
        let Some(question) = self.draft.questions.get_mut(index) else {
            return;
        };
        if question_type.is_choice_like() {
            if question.options.len() < 2 {
                question.options = vec![AnswerOption::empty(), AnswerOption::empty()];
            }
        } else {
            question.options.clear();
        }
        question.question_type = question_type;
    }

    pub fn save_question(&mut self, index: usize) {
        if let Some(question) = self.draft.questions.get_mut(index) {
            question.saved = true;
        }
    }

    pub fn edit_question(&mut self, index: usize) {
        if let Some(question) = self.draft.questions.get_mut(index) {
            question.saved = false;
        }
    }

    /// Appends one empty option to the question at `index`.
    ///
    /// Guarded by a single-slot in-flight marker: until the previous append
    /// for the SAME question is released via [`complete_option_add`],
    /// further appends for it return `false` and change nothing. This is a
    /// deliberate debounce for double-delivered click events — discarded,
    /// not queued. An append for a different question proceeds and takes
    /// over the slot.
    ///
    /// [`complete_option_add`]: DraftStore::complete_option_add
    pub fn add_option(&mut self, index: usize) -> bool {
        let Some(question) = self.draft.questions.get_mut(index) else {
            return false;
        };
        if self.pending_option_add == Some(question.id) {
            return false;
        }
        question.options.push(AnswerOption::empty());
        self.pending_option_add = Some(question.id);
        true
    }

    /// Releases the add-option guard once the append has been applied to
    /// the view. The marker is checked and cleared through the same
    /// serialized store, never via deferred task-queue resets.
    pub fn complete_option_add(&mut self) {
        self.pending_option_add = None;
    }

    pub fn set_option_text(
        &mut self,
        question_index: usize,
        option_index: usize,
        text: impl Into<String>,
    ) {
        if let Some(option) = self
            .draft
            .questions
            .get_mut(question_index)
            .and_then(|q| q.options.get_mut(option_index))
        {
            option.text = text.into();
        }
    }

    /// Removes the option with `option_id` from the question at
    /// `question_index`. Unknown ids leave the option list unchanged.
    pub fn delete_option(&mut self, question_index: usize, option_id: Uuid) {
        if let Some(question) = self.draft.questions.get_mut(question_index) {
            question.options.retain(|option| option.id != option_id);
        }
    }

    /// Moves the question at `source` to `destination`, shifting the ones
    /// in between. A `None` destination (a cancelled drag) is a no-op;
    /// destinations past the end clamp to the end.
    pub fn reorder(&mut self, source: usize, destination: Option<usize>) {
        let Some(destination) = destination else {
            return;
        };
        if source >= self.draft.questions.len() {
            return;
        }
        let question = self.draft.questions.remove(source);
        let destination = destination.min(self.draft.questions.len());
        self.draft.questions.insert(destination, question);
    }

    /// Resets title and description to empty strings and drops every
    /// question.
    pub fn clear(&mut self) {
        self.draft.title.clear();
        self.draft.description.clear();
        self.draft.questions.clear();
    }

    /// Merges a generated payload into the draft.
    ///
    /// A present `title` or `description` replaces the draft's; a present
    /// `questions` sequence replaces the whole question list in payload
    /// order. Generated questions arrive saved (view mode) with fresh ids
    /// throughout — identifiers from the payload are never reused. A
    /// choice-like question without options gets two empty ones, the same
    /// as a manual add.
    pub fn autofill(&mut self, generated: &GeneratedSurvey) {
        if let Some(title) = &generated.title {
            self.draft.title = title.clone();
        }
        if let Some(description) = &generated.description {
            self.draft.description = description.clone();
        }
        let Some(entries) = &generated.questions else {
            return;
        };
        self.draft.questions = entries
            .iter()
            .map(|entry| {
                let options = match &entry.options {
                    Some(options) => options
                        .iter()
                        .map(|option| AnswerOption::with_text(option.text()))
                        .collect(),
                    None if entry.question_type.is_choice_like() => {
                        vec![AnswerOption::empty(), AnswerOption::empty()]
                    }
                    None => Vec::new(),
                };
                Question {
                    id: Uuid::new_v4(),
                    question_type: entry.question_type.clone(),
                    title: entry.wording(),
                    saved: true,
                    options,
                }
            })
            .collect();
    }
}

impl Default for DraftStore {
    fn default() -> Self {
        Self::new()
    }
}
