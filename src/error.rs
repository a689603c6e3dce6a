use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassUnionError {
    #[error("IO operation failed: {0}")]
    Io(#[from] io::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Permission denied: {path}")]
    Permission { path: String },

    #[error("Cannot write output file: {path}")]
    OutputNotWritable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid selector pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ClassUnionError {
    /// Classify an I/O failure on `path` into the variant the CLI reports.
    pub fn from_io(error: io::Error, path: &Path) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => ClassUnionError::InputNotFound {
                path: path.display().to_string(),
            },
            io::ErrorKind::PermissionDenied => ClassUnionError::Permission {
                path: path.display().to_string(),
            },
            _ => ClassUnionError::Io(error),
        }
    }

    /// Like [`ClassUnionError::from_io`], but for the output side where a
    /// missing parent directory means the file cannot be created.
    pub fn from_output_io(error: io::Error, path: &Path) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => ClassUnionError::Permission {
                path: path.display().to_string(),
            },
            _ => ClassUnionError::OutputNotWritable {
                path: path.display().to_string(),
                source: error,
            },
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for ClassUnionError {
    fn user_message(&self) -> String {
        match self {
            ClassUnionError::InputNotFound { path } => {
                format!("Input file not found: {}", path)
            }
            ClassUnionError::Permission { path } => {
                format!("Permission denied accessing: {}", path)
            }
            ClassUnionError::OutputNotWritable { path, source } => {
                format!("Cannot write output file {}: {}", path, source)
            }
            ClassUnionError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            ClassUnionError::InputNotFound { .. } => Some(
                "Pass the stylesheet or list file as the first argument (e.g., class-union styles/base.css)".to_string()
            ),
            ClassUnionError::Permission { .. } => Some(
                "Ensure the input is readable and the output location is writable, or choose another path with --output.".to_string()
            ),
            ClassUnionError::OutputNotWritable { .. } => Some(
                "Make sure the output directory exists before running.".to_string()
            ),
            ClassUnionError::Config { .. } => Some(
                "Check your configuration file syntax or run with --generate-config to create a fresh one.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ClassUnionError {
    fn from(error: toml::de::Error) -> Self {
        ClassUnionError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassUnionError>;
