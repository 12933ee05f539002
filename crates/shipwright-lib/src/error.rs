use thiserror::Error;

/// Convenient result alias for the shipwright library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Variants are split along the taxonomy the CLI cares about: usage errors
/// (bad input, mapped to the usage exit status) and internal defects (a broken
/// catalog, mapped to a distinct status). Domain infeasibility during search is
/// not an error at all; allocators signal it separately and the engine skips
/// the candidate.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a part name could not be found in the catalog.
    #[error("unknown part: '{name}'{}", format_suggestions(.suggestions))]
    UnknownPart {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when an armament token names a part that does not consume ammunition.
    #[error("part is not a gun: '{name}'")]
    NotAGun { name: String },

    /// Raised when an armament token does not match `<count>:<gun-name>`.
    #[error("invalid armament token '{token}': expected <count>:<gun-name> with a positive count")]
    InvalidArmament { token: String },

    /// Raised when an interval specification fails to parse for a given flag.
    #[error("invalid interval given to {flag}: '{text}'")]
    InvalidInterval { flag: String, text: String },

    /// Raised when a chassis layout specification is malformed or inconsistent.
    #[error("invalid chassis layout '{text}': {reason}")]
    InvalidChassis { text: String, reason: String },

    /// Raised when the same part name is registered twice during catalog build.
    #[error("duplicate part registered in catalog: '{name}'")]
    DuplicatePart { name: String },

    /// Raised when the catalog is missing a part the composition model relies on.
    #[error("catalog is missing required part: '{name}'")]
    MissingPart { name: String },
}

impl Error {
    /// Whether this error indicates a broken catalog rather than bad user input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Error::DuplicatePart { .. } | Error::MissingPart { .. }
        )
    }

    /// Process exit status for this error: 2 for usage errors (matching the
    /// argument parser), 70 (EX_SOFTWARE) for internal defects.
    pub fn exit_code(&self) -> u8 {
        if self.is_internal() {
            70
        } else {
            2
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
