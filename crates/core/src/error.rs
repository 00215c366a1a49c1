#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("arrival date must be earlier than discharge date")]
    InvalidDates,
    #[error("invalid value: {0}")]
    InvalidValue(#[from] ward_types::TypesError),
    #[error("failed to read labels file: {0}")]
    FileRead(std::io::Error),
    #[error("collation data unavailable: {0}")]
    Collation(String),
    #[error("failed to deserialize labels YAML: {0}")]
    LabelsYaml(serde_yaml::Error),
}

pub type PatientResult<T> = std::result::Result<T, PatientError>;
