use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Could not read questions from {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    #[error("{0}")]
    Validation(String),
}

impl QuizError {
    pub fn read<P: Into<PathBuf>>(path: P, source: anyhow::Error) -> Self {
        QuizError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        QuizError::Validation(message.into())
    }
}
