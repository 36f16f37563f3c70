use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterestError {
    #[error("rate not found for year {year}")]
    RateNotFound {
        year: i32,
    },

    #[error("record {index} failed: {source}")]
    RecordFailed {
        index: usize,
        #[source]
        source: Box<InterestError>,
    },

    #[error("no records to calculate")]
    EmptyBatch,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl InterestError {
    /// attach the position of the failing record in a batch
    pub fn at_record(self, index: usize) -> Self {
        InterestError::RecordFailed {
            index,
            source: Box::new(self),
        }
    }

    /// the underlying error, looking through record wrappers
    pub fn root(&self) -> &InterestError {
        match self {
            InterestError::RecordFailed { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, InterestError>;
