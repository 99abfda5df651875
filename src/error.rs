use thiserror::Error as ThisError;

/// Failure reported by a subscriber while handling an update.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SubscriberError {
    message: String,
}

impl SubscriberError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(ThisError, Debug)]
pub enum HubError {
    #[error("Subscriber #{index} failed to handle update: {source}")]
    SubscriberFailed {
        index: usize,
        #[source]
        source: SubscriberError,
    },

    #[error("No command assigned to the remote control")]
    NoCommand,

    #[error("No payment strategy selected")]
    NoPaymentStrategy,

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HubError>;
