#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Date Error: {0}")]
    Date(#[from] chrono::ParseError),
    #[error("Data Error: {0}")]
    Data(String),
}

pub type Result<T> = std::result::Result<T, SummaryError>;
