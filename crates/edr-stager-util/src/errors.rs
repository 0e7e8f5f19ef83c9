use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all stager operations.
#[derive(Debug, Error, Diagnostic)]
pub enum StagerError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required action input was absent (or empty) after normalization.
    #[error("Missing required input '{key}'")]
    #[diagnostic(help("set INPUT_{key} in the workflow, or pass --{flag}"))]
    MissingInput {
        key: &'static str,
        flag: &'static str,
    },

    /// A version string could not be parsed.
    #[error("Invalid version '{value}': {reason}")]
    #[diagnostic(help("version strings must be full semantic versions, e.g. 1.2.3"))]
    InvalidVersion { value: String, reason: String },

    /// An installer or detection subprocess failed to spawn or exited non-zero.
    #[error("Subprocess failed: {message}")]
    Subprocess { message: String },

    /// The final edr command exited non-zero.
    #[error("edr command exited with code {code}")]
    EdrCommand { code: i32 },
}

impl StagerError {
    /// Process exit code for this failure. The final edr command's own exit
    /// code is preserved; every other failure maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EdrCommand { code } => *code,
            _ => 1,
        }
    }
}

/// Convenience alias for `miette::Result<T>`.
pub type StagerResult<T> = miette::Result<T>;
