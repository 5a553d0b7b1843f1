use miette::Diagnostic;
use thiserror::Error;

/// Main error type for contrast operations
#[derive(Error, Diagnostic, Debug)]
pub enum ContrastError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(contrast::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(contrast::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(contrast::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Output error: {message}")]
    #[diagnostic(code(contrast::output))]
    Output { message: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(contrast::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ContrastError>;
