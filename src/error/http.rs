use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Get \"{url}\": {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body from \"{url}\": {source}")]
    ReadBodyFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[cfg(test)]
    #[error("Simulated transport failure for \"{url}\".")]
    Simulated { url: String },
}
