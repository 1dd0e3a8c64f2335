use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Unable to find/open {file_name}")]
    SourceNotFound { file_name: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Unable to read header file path. {0}")]
    Prompt(#[from] inquire::InquireError),
}

impl From<serde_json::Error> for AnalyzeError {
    fn from(value: serde_json::Error) -> Self {
        AnalyzeError::Io(value.into())
    }
}

impl From<tempfile::PersistError> for AnalyzeError {
    fn from(value: tempfile::PersistError) -> Self {
        AnalyzeError::Io(value.error)
    }
}
