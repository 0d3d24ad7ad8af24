//! Smoke test for the survey generation flow.
//!
//! Calls a running generation service and merges the payload into a fresh
//! draft store, printing what the composer would show.
//!
//! Usage:
//!   CANVASS_API_BASE_URL=http://127.0.0.1:8000 \
//!   cargo run -p canvass-desktop --example generate_smoke -- "A survey about coffee habits"

use canvass_core::store::DraftStore;
use canvass_desktop::config;
use canvass_generate::GenerateClient;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_env_filter("info").init();

    let description = std::env::args()
        .nth(1)
        .ok_or_else(|| eyre::eyre!("pass a survey description as the first argument"))?;

    let config = config::resolve();
    println!("Generation service: {}", config.api_base_url);
    println!("Description:        {description}");
    println!();

    let client = GenerateClient::new(config.api_base_url.clone());
    let survey = client.generate(&description)?;

    let mut store = DraftStore::new();
    store.autofill(&survey);

    let draft = store.draft();
    println!("Title:       {}", draft.title);
    println!("Description: {}", draft.description);
    println!("Questions:   {}", draft.questions.len());
    for (i, question) in draft.questions.iter().enumerate() {
        println!(
            "  {}. [{}] {}",
            i + 1,
            question.question_type.as_str(),
            question.title
        );
        for option in &question.options {
            let text = if option.text.is_empty() {
                "(empty)"
            } else {
                option.text.as_str()
            };
            println!("       - {text}");
        }
    }

    Ok(())
}
