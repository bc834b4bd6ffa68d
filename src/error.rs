use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A fixture file on disk could not be read or parsed.
    #[error("Invalid fixture {}: {source}", path.display())]
    Fixture {
        path: std::path::PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// A foreign key in one dataset has no matching record in another.
    #[error("Reference not found: no {key} in {dataset}")]
    ReferenceNotFound { dataset: &'static str, key: String },

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    #[error("Unknown dataset group: {0}")]
    UnknownGroup(String),

    #[error("Unknown query: {group}.{query}")]
    UnknownQuery { group: String, query: String },
}

impl Error {
    pub fn reference_not_found(dataset: &'static str, key: impl Into<String>) -> Self {
        Error::ReferenceNotFound {
            dataset,
            key: key.into(),
        }
    }

    pub fn fixture(path: impl Into<std::path::PathBuf>, source: impl Into<Error>) -> Self {
        Error::Fixture {
            path: path.into(),
            source: Box::new(source.into()),
        }
    }

    /// Process exit code for this error when it reaches the binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UnknownGroup(_) | Error::UnknownQuery { .. } => 2,
            _ => 1,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Config(s)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
