/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while building a tree or reading leaves.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // ================
    // Input validation
    // ================
    #[error("Invalid input: leaf list must not be empty")]
    EmptyLeaves,

    #[error("Invalid input: {count} leaves exceeds limit of {}", crate::MAX_LEAVES)]
    TooManyLeaves { count: u64 },

    // ==========
    // CLI errors
    // ==========
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error was caused by the caller's data rather than the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::EmptyLeaves | Error::TooManyLeaves { .. })
    }
}
