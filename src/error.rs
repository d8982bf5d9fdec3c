use thiserror::Error;

/// Errors surfaced by the scraper's public entry points
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to fetch a page
    #[error("Failed to fetch page: {0}")]
    Fetch(#[from] FetchError),

    /// Failed to extract data from a page
    #[error("Failed to extract page: {0}")]
    Extract(#[from] ExtractError),

    /// Failed to read or write a table file
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Page range outside of 1..=end or reversed
    #[error("Invalid page range: {0}")]
    InvalidRange(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single failed request
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with anything other than 200
    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Connection, timeout or body read failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The HTTP client could not be constructed
    #[error("Could not build HTTP client: {0}")]
    Client(String),
}

/// Structural problems found while reading a page
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A field the record cannot exist without is missing or empty
    #[error("Required field '{0}' not found")]
    MissingRequired(&'static str),

    /// An expected region of the page is absent
    #[error("Section '{0}' not found")]
    MissingSection(&'static str),

    /// A link could not be resolved against the base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Problems reading or writing delimited table files
#[derive(Error, Debug)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Header row missing or not the expected columns
    #[error("Unexpected header: {0}")]
    MissingHeader(String),

    /// A data row does not have one cell per header column
    #[error("Row {row}: expected {expected} cells, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Raw and measured ingredient cells have different lengths
    #[error("Row {row}: raw and measured ingredient counts differ")]
    Misaligned { row: usize },

    /// A cell could not be decoded
    #[error("Row {row}, column '{column}': {message}")]
    InvalidCell {
        row: usize,
        column: &'static str,
        message: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
