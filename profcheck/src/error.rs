use std::io;
use std::path::PathBuf;

/// Represents an error that occured while checking a profile directory.
#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    /// A parsed record lacks one of the required keys.
    #[error("{file}: missing required field `{field}`")]
    MissingField { file: String, field: String },
    /// The file contents are not a JSON object.
    #[error("{file}: invalid profile data: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    /// The directory or one of its entries could not be read.
    #[error("{}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Tells whether a profile check succeeded.
pub type ProfileResult<T> = Result<T, ProfileError>;

impl ProfileError {
    pub fn kind(&self) -> &'static str {
        match self {
            ProfileError::MissingField { .. } => "missing_field",
            ProfileError::Parse { .. } => "parse",
            ProfileError::Filesystem { .. } => "filesystem",
        }
    }

    /// The file (or directory) the error is about, as shown to the user.
    pub fn file(&self) -> String {
        match self {
            ProfileError::MissingField { file, .. } | ProfileError::Parse { file, .. } => {
                file.clone()
            }
            ProfileError::Filesystem { path, .. } => path.display().to_string(),
        }
    }
}
