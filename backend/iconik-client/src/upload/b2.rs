//! Byte transfer to Backblaze B2 using the upload targets Iconik hands out.

use crate::config::{B2_MAX_PART_SIZE, B2_MIN_PART_SIZE};
use crate::error::upload::UploadError;

use models::NewAssetUpload;

use std::io::SeekFrom;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use sha1::{Digest, Sha1};
use tokio::io::{AsyncReadExt, AsyncSeekExt};

const FILE_NAME_HEADER: &str = "x-bz-file-name";
const CONTENT_SHA1_HEADER: &str = "x-bz-content-sha1";
const PART_NUMBER_HEADER: &str = "x-bz-part-number";

/// Characters B2 accepts unencoded in `X-Bz-File-Name`.
const FILE_NAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// One slice of a multipart upload. Part numbers start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartRange {
    pub number: u32,
    pub offset: u64,
    pub len: u64,
}

/// Split `size` bytes into consecutive parts of `part_size` (the last may be shorter).
pub fn plan_parts(size: u64, part_size: u64) -> Vec<PartRange> {
    if part_size == 0 {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut offset = 0;
    let mut number = 1;
    while offset < size {
        let len = part_size.min(size - offset);
        parts.push(PartRange { number, offset, len });
        offset += len;
        number += 1;
    }
    parts
}

pub fn sha1_hex(bytes: &[u8]) -> String {
    hex::encode(Sha1::digest(bytes))
}

pub fn encode_file_name(name: &str) -> String {
    utf8_percent_encode(name, FILE_NAME_ENCODE_SET).to_string()
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(rename = "contentSha1")]
    content_sha1: String,
}

#[derive(Clone)]
pub struct B2Transfer {
    client: Client,
    part_size: u64,
}

impl B2Transfer {
    /// `part_size` must be within B2's large-file part limits.
    #[track_caller]
    pub fn new(part_size: u64, timeout: Duration) -> Result<Self, UploadError> {
        if !(B2_MIN_PART_SIZE..=B2_MAX_PART_SIZE).contains(&part_size) {
            return Err(UploadError::invalid_part_size(part_size));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, part_size })
    }

    pub fn part_size(&self) -> u64 {
        self.part_size
    }

    /// Send the file at `path`, recording part digests on `upload` for multipart transfers.
    pub async fn transfer(&self, upload: &mut NewAssetUpload, path: &Path) -> Result<(), UploadError> {
        if upload.is_multipart() {
            upload.sha1_list = self.upload_parts(upload, path).await?;
        } else {
            let body = tokio::fs::read(path)
                .await
                .map_err(|e| UploadError::io(path, e))?;
            self.upload_single(upload, body).await?;
        }
        Ok(())
    }

    /// Single-request upload of the whole body.
    pub async fn upload_single(&self, upload: &NewAssetUpload, body: Vec<u8>) -> Result<(), UploadError> {
        let size = body.len();
        let sha1 = sha1_hex(&body);

        debug!("Uploading {size} bytes to {}", upload.upload_url);

        let response = self
            .client
            .post(&upload.upload_url)
            .header(AUTHORIZATION, upload.upload_auth_token.expose())
            .header(FILE_NAME_HEADER, encode_file_name(&upload.upload_filename))
            .header(CONTENT_SHA1_HEADER, sha1)
            .header(CONTENT_TYPE, upload.mime_type.as_str())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(UploadError::transfer(status.as_u16(), text));
        }

        info!("Uploaded {} ({size} bytes)", upload.upload_filename);
        Ok(())
    }

    /// Multipart upload; returns the part SHA-1 digests reported by B2, in order.
    pub async fn upload_parts(&self, upload: &NewAssetUpload, path: &Path) -> Result<Vec<String>, UploadError> {
        let mut file = tokio::fs::File::open(path)
            .await
            .map_err(|e| UploadError::io(path, e))?;

        let parts = plan_parts(upload.size, self.part_size);
        let total = parts.len();
        let mut shas = Vec::with_capacity(total);

        for part in parts {
            file.seek(SeekFrom::Start(part.offset))
                .await
                .map_err(|e| UploadError::io(path, e))?;

            let mut buffer = vec![0u8; part.len as usize];
            file.read_exact(&mut buffer)
                .await
                .map_err(|e| UploadError::io(path, e))?;

            let sha1 = self.upload_part(upload, part, buffer).await?;
            debug!("Uploaded part {}/{total} of {}", part.number, upload.upload_filename);
            shas.push(sha1);
        }

        info!("Uploaded {} in {total} parts", upload.upload_filename);
        Ok(shas)
    }

    async fn upload_part(
        &self,
        upload: &NewAssetUpload,
        part: PartRange,
        body: Vec<u8>,
    ) -> Result<String, UploadError> {
        let sha1 = sha1_hex(&body);

        let response = self
            .client
            .post(&upload.upload_url)
            .header(AUTHORIZATION, upload.upload_auth_token.expose())
            .header(PART_NUMBER_HEADER, part.number.to_string())
            .header(CONTENT_SHA1_HEADER, sha1)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(UploadError::transfer(
                status.as_u16(),
                format!("part {}: {text}", part.number),
            ));
        }

        let parsed: PartResponse = serde_json::from_str(&text)?;
        Ok(parsed.content_sha1)
    }
}
