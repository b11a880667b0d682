use thiserror::Error;

/// Errors surfaced while resolving a chain into constraints.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChainError {
    /// A chain anchored to its container (or the container's safe area) was
    /// resolved before the subject view was added to a hierarchy.
    #[error("view '{view}' has no container to anchor against; add it to a hierarchy before resolving")]
    MissingContainer { view: String },
}

impl ChainError {
    pub fn missing_container(view: impl Into<String>) -> Self {
        ChainError::MissingContainer { view: view.into() }
    }
}
