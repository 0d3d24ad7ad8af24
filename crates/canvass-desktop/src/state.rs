use canvass_core::models::GeneratedSurvey;
use canvass_core::store::DraftStore;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use canvass_desktop::config::AppConfig;

/// The last payload received from the generation service, kept so the view
/// can show its generated-content indicator until the form is cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedRecord {
    pub survey: GeneratedSurvey,
    pub received_at: jiff::Timestamp,
}

/// Page-level UI flags for the composer.
#[derive(Debug, Default)]
pub struct PageState {
    pub loading: bool,
    pub generating: bool,
    pub generated: Option<GeneratedRecord>,
}

pub struct AppState {
    pub store: Mutex<DraftStore>,
    pub page: Mutex<PageState>,
    pub config: Mutex<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: Mutex::new(DraftStore::new()),
            page: Mutex::new(PageState::default()),
            config: Mutex::new(config),
        }
    }
}
