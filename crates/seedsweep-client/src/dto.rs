//! Wire types for the qBittorrent Web API v2.

use std::path::PathBuf;

use serde::Deserialize;

use seedsweep_core::{Category, TorrentFile, TorrentRecord};

/// One torrent from `/api/v2/torrents/info`.
#[derive(Debug, Clone, Deserialize)]
pub struct TorrentInfo {
    /// Torrent hash, used to fetch the file list.
    pub hash: String,
    /// Display name.
    pub name: String,
    /// Category name; empty when the torrent has no category.
    #[serde(default)]
    pub category: String,
    /// Save location the content paths are relative to; may be empty
    /// while the client is still resolving it.
    #[serde(default)]
    pub save_path: String,
}

/// One content file from `/api/v2/torrents/files`.
#[derive(Debug, Clone, Deserialize)]
pub struct TorrentFileEntry {
    /// Path relative to the save location, as stored in the torrent.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

impl TorrentInfo {
    /// Combine the torrent with its file list into a record.
    ///
    /// Empty wire values become the explicit absences the core expects:
    /// no category and no save path.
    pub fn into_record(self, files: Vec<TorrentFileEntry>) -> TorrentRecord {
        TorrentRecord {
            category: Category::from_client(Some(&self.category)),
            save_path: if self.save_path.is_empty() {
                None
            } else {
                Some(PathBuf::from(self.save_path))
            },
            name: self.name,
            files: files
                .into_iter()
                .map(|file| TorrentFile {
                    path: file.name,
                    size: file.size,
                })
                .collect(),
        }
    }
}
