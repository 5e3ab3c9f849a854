//! Asset upload service.
//!
//! Delegates raw image content to the external image CDN and hands back the
//! CDN-assigned public URL. Uploads go over a multipart form with the
//! private key as HTTP basic auth username (ImageKit wire format). There is
//! no retry and no chunking; a CDN failure is terminal for that file.
//!
//! Batch uploads process files one at a time, awaiting each CDN round-trip
//! before starting the next. Every file is attempted and the report says
//! which succeeded and which failed; files already uploaded when a later
//! one fails are never deleted.

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AssetCdnConfig;

/// Errors that can occur during asset uploads.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The request carried no file content.
    #[error("Missing file")]
    MissingFile,

    /// The request carried no file name.
    #[error("Missing fileName")]
    MissingFileName,

    /// The file content is not valid base64.
    #[error("File content is not valid base64")]
    InvalidBase64,

    /// The HTTP request to the CDN failed.
    #[error("CDN request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The CDN rejected the upload.
    #[error("CDN returned status {0}")]
    Cdn(u16),
}

/// One file to upload: base64 content plus the target name.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub file: String,
    #[serde(default, rename = "fileName")]
    pub file_name: String,
}

/// A successfully uploaded asset.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedAsset {
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub url: String,
}

/// One failed upload in a batch.
#[derive(Debug, Clone, Serialize)]
pub struct FailedUpload {
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub error: String,
}

/// Per-file outcome of a batch upload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchUploadReport {
    pub succeeded: Vec<UploadedAsset>,
    pub failed: Vec<FailedUpload>,
}

/// The fields of the CDN upload response we care about.
#[derive(Debug, Deserialize)]
struct CdnUploadResponse {
    url: String,
}

/// Client for the image CDN upload endpoint.
pub struct AssetCdnClient {
    http: reqwest::Client,
    config: AssetCdnConfig,
}

impl AssetCdnClient {
    /// Create a new CDN client.
    #[must_use]
    pub fn new(config: AssetCdnConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Upload one file and return its public URL.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::MissingFile` / `MissingFileName` on empty
    /// inputs, `InvalidBase64` if the content does not decode, `Http` if
    /// the request cannot be sent, and `Cdn` on a non-success response.
    pub async fn upload(&self, file: &str, file_name: &str) -> Result<UploadedAsset, AssetError> {
        if file.trim().is_empty() {
            return Err(AssetError::MissingFile);
        }
        if file_name.trim().is_empty() {
            return Err(AssetError::MissingFileName);
        }
        validate_base64(file)?;

        let form = reqwest::multipart::Form::new()
            .text("file", file.to_owned())
            .text("fileName", file_name.to_owned());

        let response = self
            .http
            .post(&self.config.upload_url)
            .basic_auth(self.config.private_key.expose_secret(), Some(""))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, file_name, "CDN rejected upload");
            return Err(AssetError::Cdn(status.as_u16()));
        }

        let body: CdnUploadResponse = response.json().await?;

        Ok(UploadedAsset {
            file_name: file_name.to_owned(),
            url: body.url,
        })
    }

    /// Upload a batch of files sequentially, reporting per-file outcomes.
    ///
    /// Every file is attempted; earlier successes are kept even when later
    /// files fail.
    pub async fn upload_batch(&self, files: &[UploadRequest]) -> BatchUploadReport {
        let mut report = BatchUploadReport::default();

        for request in files {
            match self.upload(&request.file, &request.file_name).await {
                Ok(asset) => report.succeeded.push(asset),
                Err(e) => {
                    tracing::warn!(file_name = %request.file_name, error = %e, "Upload failed");
                    report.failed.push(FailedUpload {
                        file_name: request.file_name.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        report
    }
}

/// Check the content decodes as base64, accepting an optional data-URL
/// prefix (`data:image/png;base64,...`). The original string is what gets
/// forwarded; this only rejects garbage before the network round-trip.
fn validate_base64(file: &str) -> Result<(), AssetError> {
    use base64::Engine as _;

    let payload = file
        .split_once(";base64,")
        .map_or(file, |(_, payload)| payload);

    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map(|_| ())
        .map_err(|_| AssetError::InvalidBase64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_base64() {
        assert!(validate_base64("aGVsbG8gd29ybGQ=").is_ok());
    }

    #[test]
    fn accepts_data_url_prefix() {
        assert!(validate_base64("data:image/png;base64,aGVsbG8=").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            validate_base64("!!not base64!!"),
            Err(AssetError::InvalidBase64)
        ));
    }

    // Validation failures never reach the network, so the batch contract is
    // testable offline: every file is attempted and reported.
    #[tokio::test]
    async fn batch_reports_per_file_outcomes() {
        let client = AssetCdnClient::new(AssetCdnConfig {
            upload_url: "http://127.0.0.1:9/upload".to_owned(),
            private_key: secrecy::SecretString::from("test-key"),
        });

        let files = vec![
            UploadRequest {
                file: String::new(),
                file_name: "front.png".to_owned(),
            },
            UploadRequest {
                file: "aGVsbG8=".to_owned(),
                file_name: String::new(),
            },
        ];

        let report = client.upload_batch(&files).await;
        assert!(report.succeeded.is_empty());
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.failed.first().map(|f| f.file_name.as_str()), Some("front.png"));
        assert_eq!(report.failed.last().map(|f| f.error.as_str()), Some("Missing fileName"));
    }
}
