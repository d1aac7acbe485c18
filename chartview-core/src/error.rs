use thiserror::Error;

/// Reasons a router configuration can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("unknown addressing mode `{0}` (expected `history` or `hash`)")]
    UnknownMode(String),
    #[error("unknown fallback policy `{0}` (expected `blank`, `not-found` or `redirect:<path>`)")]
    UnknownFallback(String),
    #[error("route table is empty")]
    EmptyTable,
    #[error("invalid route path `{0}`")]
    InvalidPath(String),
    #[error("duplicate route path `{path}` (entries {first} and {second})")]
    DuplicatePath {
        path: String,
        first: usize,
        second: usize,
    },
    #[error("redirect target `{0}` does not match any route")]
    UnknownRedirect(String),
}
