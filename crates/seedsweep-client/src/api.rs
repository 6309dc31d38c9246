//! qBittorrent Web API v2 session.

use std::time::Duration;

use reqwest::{Client, Response};
use tracing::{debug, info};

use seedsweep_core::TorrentRecord;

use crate::dto::{TorrentFileEntry, TorrentInfo};
use crate::error::ClientError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated session against a qBittorrent Web UI.
///
/// The session cookie handed out at login lives in the underlying HTTP
/// client's cookie store; every later request carries it automatically.
pub struct QbitClient {
    api: String,
    http: Client,
}

impl QbitClient {
    /// Log in and return an authenticated session.
    ///
    /// qBittorrent answers a successful login with `Ok.` in the body and
    /// a session cookie; anything else is treated as a rejected login.
    pub async fn connect(host: &str, username: &str, password: &str) -> Result<Self, ClientError> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| ClientError::Transport {
                operation: "client setup",
                source,
            })?;

        let api = format!("{}/api/v2", host.trim_end_matches('/'));

        let response = http
            .post(format!("{api}/auth/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                operation: "auth/login",
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ClientError::Transport {
                operation: "auth/login",
                source,
            })?;

        if !status.is_success() || body.trim() != "Ok." {
            return Err(ClientError::LoginRejected {
                status,
                body: body.trim().to_string(),
            });
        }

        info!(host, "logged in to qBittorrent");
        Ok(Self { api, http })
    }

    /// Enumerate the currently managed torrents.
    pub async fn torrents(&self) -> Result<Vec<TorrentInfo>, ClientError> {
        let response = self
            .http
            .get(format!("{}/torrents/info", self.api))
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                operation: "torrents/info",
                source,
            })?;

        Self::checked("torrents/info", response)?
            .json()
            .await
            .map_err(|source| ClientError::Decode {
                operation: "torrents/info",
                source,
            })
    }

    /// Content files of one torrent.
    pub async fn files(&self, hash: &str) -> Result<Vec<TorrentFileEntry>, ClientError> {
        let response = self
            .http
            .get(format!("{}/torrents/files", self.api))
            .query(&[("hash", hash)])
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                operation: "torrents/files",
                source,
            })?;

        Self::checked("torrents/files", response)?
            .json()
            .await
            .map_err(|source| ClientError::Decode {
                operation: "torrents/files",
                source,
            })
    }

    /// Fetch every torrent together with its content files.
    pub async fn fetch_records(&self) -> Result<Vec<TorrentRecord>, ClientError> {
        let torrents = self.torrents().await?;
        info!(count = torrents.len(), "enumerating torrent contents");

        let mut records = Vec::with_capacity(torrents.len());
        for torrent in torrents {
            let files = self.files(&torrent.hash).await?;
            debug!(torrent = %torrent.name, files = files.len(), "fetched file list");
            records.push(torrent.into_record(files));
        }
        Ok(records)
    }

    fn checked(operation: &'static str, response: Response) -> Result<Response, ClientError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ClientError::Status {
                operation,
                status: response.status(),
            })
        }
    }
}
