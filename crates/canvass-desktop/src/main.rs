#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eyre::Result;

mod commands;
mod state;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = canvass_desktop::config::resolve();
    tracing::info!(api_base_url = %config.api_base_url, "starting canvass");

    tauri::Builder::default()
        .manage(state::AppState::new(config))
        .invoke_handler(tauri::generate_handler![
            commands::survey_snapshot,
            commands::set_survey_title,
            commands::set_survey_description,
            commands::add_question,
            commands::delete_question,
            commands::duplicate_question,
            commands::set_question_title,
            commands::set_question_type,
            commands::save_question,
            commands::edit_question,
            commands::add_option,
            commands::set_option_text,
            commands::delete_option,
            commands::reorder_question,
            commands::generate_survey,
            commands::clear_survey,
            commands::configure,
            commands::current_config,
        ])
        .run(tauri::generate_context!())
        .map_err(|e| eyre::eyre!("tauri error: {e}"))?;

    Ok(())
}
