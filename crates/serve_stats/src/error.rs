use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid serve order: {0}")]
    InvalidServeOrder(String),

    #[error("Current server is not set; confirm both serve orders first")]
    ServerNotSet,

    #[error("Set is still in progress ({team}-{opponent}, set point {threshold})")]
    SetInProgress {
        team: u32,
        opponent: u32,
        threshold: u32,
    },

    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl From<csv::Error> for TrackerError {
    fn from(error: csv::Error) -> Self {
        Self::Export(error.to_string())
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for TrackerError {
    fn from(error: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        Self::Export(error.to_string())
    }
}

impl TrackerError {
    /// Errors caused by the caller's input or the current match phase, as
    /// opposed to failures inside the tracker itself.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Export(_))
    }
}
