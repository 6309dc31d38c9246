//! qBittorrent Web API v2 client for seedsweep.
//!
//! A thin authenticated wrapper over the endpoints the reconciliation
//! pass needs: torrent enumeration and per-torrent file lists. Any
//! failure here is fatal to the run; no report is produced without
//! torrent data.
//!
//! # Example
//!
//! ```rust,no_run
//! use seedsweep_client::QbitClient;
//!
//! # async fn run() -> Result<(), seedsweep_client::ClientError> {
//! let client = QbitClient::connect("http://qbittorrent:8080", "admin", "password").await?;
//! let records = client.fetch_records().await?;
//! println!("{} torrents", records.len());
//! # Ok(())
//! # }
//! ```

mod api;
mod dto;
mod error;

pub use api::QbitClient;
pub use dto::{TorrentFileEntry, TorrentInfo};
pub use error::ClientError;

// Re-export core types for convenience
pub use seedsweep_core::{Category, TorrentFile, TorrentRecord};
