use crate::format::FormatError;
use thiserror::Error;

/// One variant per pipeline stage. Every variant aborts the run with exit code 2.
#[derive(Debug, Error)]
pub enum GoatError {
    #[error("Failed to load config: {0}")]
    Config(String),
    #[error("Failed to parse data (-d param): {0}")]
    Data(#[from] serde_json::Error),
    #[error("Failed to read data (--data-file param): {0}")]
    DataFile(std::io::Error),
    #[error("Failed to read input: {0}")]
    Input(std::io::Error),
    #[error("Failed to parse template: {0}")]
    Parse(String),
    #[error("Failed to execute template: {0}")]
    Execute(String),
    #[error("Failed to render header: {0}")]
    Header(#[from] tinytemplate::error::Error),
    #[error("Failed to {formatter} the resulting source: {source}")]
    Format {
        formatter: String,
        #[source]
        source: FormatError,
    },
    #[error("Failed to write output: {0}")]
    Output(std::io::Error),
}

impl GoatError {
    pub const EXIT_CODE: i32 = 2;
}
