use serde::{Deserialize, Serialize};
use specta::Type;
use tauri::State;
use uuid::Uuid;

use canvass_core::models::{QuestionType, SurveyDraft};
use canvass_generate::GenerateClient;
use canvass_desktop::config::{self, AppConfig};

use crate::state::{AppState, GeneratedRecord};

/// Snapshot the composer view renders from.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyView {
    pub draft: SurveyDraft,
    pub loading: bool,
    pub generating: bool,
    pub has_generated: bool,
}

/// Outcome of a generate invocation that did not fail.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
pub enum GenerateOutcome {
    /// Payload received and merged into the draft.
    Generated,
    /// Empty description; nothing was sent.
    Skipped,
    /// A generation request is already in flight; this one was ignored.
    Ignored,
}

#[tauri::command]
pub async fn survey_snapshot(state: State<'_, AppState>) -> Result<SurveyView, String> {
    let store = state.store.lock().await;
    let page = state.page.lock().await;
    Ok(SurveyView {
        draft: store.draft().clone(),
        loading: page.loading,
        generating: page.generating,
        has_generated: page.generated.is_some(),
    })
}

#[tauri::command]
pub async fn set_survey_title(
    state: State<'_, AppState>,
    title: String,
) -> Result<SurveyDraft, String> {
    let mut store = state.store.lock().await;
    store.set_title(title);
    Ok(store.draft().clone())
}

#[tauri::command]
pub async fn set_survey_description(
    state: State<'_, AppState>,
    description: String,
) -> Result<SurveyDraft, String> {
    let mut store = state.store.lock().await;
    store.set_description(description);
    Ok(store.draft().clone())
}

#[tauri::command]
pub async fn add_question(
    state: State<'_, AppState>,
    question_type: Option<QuestionType>,
) -> Result<SurveyDraft, String> {
    let mut store = state.store.lock().await;
    store.add_question(question_type.unwrap_or_default());
    Ok(store.draft().clone())
}

#[tauri::command]
pub async fn delete_question(
    state: State<'_, AppState>,
    index: usize,
) -> Result<SurveyDraft, String> {
    let mut store = state.store.lock().await;
    store.delete_question(index);
    Ok(store.draft().clone())
}

#[tauri::command]
pub async fn duplicate_question(
    state: State<'_, AppState>,
    index: usize,
) -> Result<SurveyDraft, String> {
    let mut store = state.store.lock().await;
    store.duplicate_question(index);
    Ok(store.draft().clone())
}

#[tauri::command]
pub async fn set_question_title(
    state: State<'_, AppState>,
    index: usize,
    title: String,
) -> Result<SurveyDraft, String> {
    let mut store = state.store.lock().await;
    store.set_question_title(index, title);
    Ok(store.draft().clone())
}

#[tauri::command]
pub async fn set_question_type(
    state: State<'_, AppState>,
    index: usize,
    question_type: QuestionType,
) -> Result<SurveyDraft, String> {
    let mut store = state.store.lock().await;
    store.set_question_type(index, question_type);
    Ok(store.draft().clone())
}

#[tauri::command]
pub async fn save_question(
    state: State<'_, AppState>,
    index: usize,
) -> Result<SurveyDraft, String> {
    let mut store = state.store.lock().await;
    store.save_question(index);
    Ok(store.draft().clone())
}

#[tauri::command]
pub async fn edit_question(
    state: State<'_, AppState>,
    index: usize,
) -> Result<SurveyDraft, String> {
    let mut store = state.store.lock().await;
    store.edit_question(index);
    Ok(store.draft().clone())
}

#[tauri::command]
pub async fn add_option(
    state: State<'_, AppState>,
    question: usize,
) -> Result<SurveyDraft, String> {
    let mut store = state.store.lock().await;
    store.add_option(question);
    let snapshot = store.draft().clone();
    // Append applied and snapshot taken under one lock; the debounce slot
    // is released before the next command can run.
    store.complete_option_add();
    Ok(snapshot)
}

#[tauri::command]
pub async fn set_option_text(
    state: State<'_, AppState>,
    question: usize,
    option: usize,
    text: String,
) -> Result<SurveyDraft, String> {
    let mut store = state.store.lock().await;
    store.set_option_text(question, option, text);
    Ok(store.draft().clone())
}

#[tauri::command]
pub async fn delete_option(
    state: State<'_, AppState>,
    question: usize,
    option_id: Uuid,
) -> Result<SurveyDraft, String> {
    let mut store = state.store.lock().await;
    store.delete_option(question, option_id);
    Ok(store.draft().clone())
}

#[tauri::command]
pub async fn reorder_question(
    state: State<'_, AppState>,
    source: usize,
    destination: Option<usize>,
) -> Result<SurveyDraft, String> {
    let mut store = state.store.lock().await;
    store.reorder(source, destination);
    Ok(store.draft().clone())
}

#[tauri::command]
pub async fn generate_survey(
    state: State<'_, AppState>,
    description: String,
) -> Result<GenerateOutcome, String> {
    if description.trim().is_empty() {
        return Ok(GenerateOutcome::Skipped);
    }

    {
        let mut page = state.page.lock().await;
        if page.generating {
            return Ok(GenerateOutcome::Ignored);
        }
        page.loading = true;
        page.generating = true;
    }

    let base_url = state.config.lock().await.api_base_url.clone();
    let result = tauri::async_runtime::spawn_blocking(move || {
        GenerateClient::new(base_url).generate(&description)
    })
    .await;

    let outcome = match result {
        Ok(Ok(survey)) => {
            let mut store = state.store.lock().await;
            store.autofill(&survey);
            drop(store);

            let mut page = state.page.lock().await;
            page.generated = Some(GeneratedRecord {
                survey,
                received_at: jiff::Timestamp::now(),
            });
            Ok(GenerateOutcome::Generated)
        }
        Ok(Err(e)) => Err(e.to_string()),
        Err(e) => Err(format!("generation task failed: {e}")),
    };

    // Flags reset on every path, success or failure.
    let mut page = state.page.lock().await;
    page.loading = false;
    page.generating = false;

    outcome
}

/// Clearing the form and dropping the generated indicator happen together,
/// so the view never shows stale generated state against an empty draft.
#[tauri::command]
pub async fn clear_survey(state: State<'_, AppState>) -> Result<SurveyDraft, String> {
    // Lock order is store then page, as everywhere else.
    let mut store = state.store.lock().await;
    let mut page = state.page.lock().await;
    page.generated = None;
    store.clear();
    Ok(store.draft().clone())
}

#[tauri::command]
pub async fn configure(
    state: State<'_, AppState>,
    api_base_url: String,
) -> Result<AppConfig, String> {
    let updated = AppConfig {
        api_base_url: api_base_url.trim_end_matches('/').to_string(),
    };
    config::save(&updated).map_err(|e| e.to_string())?;

    let mut config = state.config.lock().await;
    *config = updated.clone();
    Ok(updated)
}

#[tauri::command]
pub async fn current_config(state: State<'_, AppState>) -> Result<AppConfig, String> {
    Ok(state.config.lock().await.clone())
}
