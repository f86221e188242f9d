#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Features of \"{0}\" type are not supported")]
    InvalidFeatureType(String),

    #[error("{0} should not be empty")]
    EmptyValue(&'static str),

    #[error("A value \"{0}\" is not found in the importer")]
    UnknownValue(String),

    #[error("No importer is registered under \"{0}\"")]
    MissingImporter(String),

    #[error("Invalid importer configuration")]
    Config(#[source] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
