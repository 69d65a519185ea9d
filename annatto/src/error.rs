use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error taxonomy of the pipeline.
///
/// `Configuration` errors are fatal for the whole run; `ExternalTool`,
/// `Parse` and `MergeConflict` abort the current sequence only. The driver
/// matches on these variants to decide.
#[derive(Debug, Error)]
pub enum Error {
    /// A referenced capability is not registered, or the run configuration
    /// is otherwise unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An external tool exited with a non-zero status or did not produce an
    /// expected output file.
    #[error("external tool `{tool}` failed: {message}")]
    ExternalTool { tool: String, message: String },

    /// A record of a tool's output could not be parsed.
    #[error("parse error in {context}: {message} (line: {line:?})")]
    Parse {
        context: String,
        message: String,
        line:    String,
    },

    /// Two declared feature identifiers collided during an annotation merge.
    #[error("merge conflict: feature id `{0}` is declared by both sides")]
    MergeConflict(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn parse(
        context: impl Into<String>,
        message: impl Into<String>,
        line: impl Into<String>,
    ) -> Self {
        Error::Parse {
            context: context.into(),
            message: message.into(),
            line:    line.into(),
        }
    }

    pub fn tool(
        tool: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::ExternalTool {
            tool:    tool.into(),
            message: message.into(),
        }
    }

    /// Short error-kind label used in per-sequence failure reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Configuration(_) => "configuration",
            Error::ExternalTool { .. } => "external-tool",
            Error::Parse { .. } => "parse",
            Error::MergeConflict(_) => "merge-conflict",
            Error::Io(_) => "io",
        }
    }
}
