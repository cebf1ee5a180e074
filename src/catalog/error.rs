use thiserror::Error;

/// Failures while turning filenames into catalog rows.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The filename splits into fewer than three `_`-delimited tokens, so
    /// there is no sampletype/cell pair to read.
    #[error("malformed filename '{filename}': expected at least 3 '_'-separated tokens, found {tokens}")]
    MalformedFilename { filename: String, tokens: usize },

    #[error("writing CSV row")]
    Csv(#[from] csv::Error),

    #[error("flushing output")]
    Io(#[from] std::io::Error),
}
