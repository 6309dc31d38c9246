//! Client error type.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the download client.
///
/// Always fatal to the run: without torrent enumeration there is nothing
/// to reconcile against, so no report is produced. Transient failures are
/// not retried here.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response not read.
    #[error("qBittorrent {operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Login was answered but rejected.
    #[error("qBittorrent login rejected ({status}): {body:?}")]
    LoginRejected { status: StatusCode, body: String },

    /// An endpoint answered with a non-success status.
    #[error("qBittorrent {operation} returned status {status}")]
    Status {
        operation: &'static str,
        status: StatusCode,
    },

    /// The response body could not be decoded.
    #[error("qBittorrent {operation} response malformed: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
