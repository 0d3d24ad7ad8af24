use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The request never completed: connection refused, DNS, timeout.
    #[error("could not reach the generation service: {0}")]
    Transport(#[from] ureq::Error),

    /// The service answered with a non-success status. `detail` is the
    /// service's own message when it sent one, and is surfaced to the
    /// user verbatim.
    #[error("{detail}")]
    Service { status: u16, detail: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}
