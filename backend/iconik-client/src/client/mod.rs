//! Iconik REST client.
//!
//! One authorized request per operation, no retries. The client is cheap to
//! clone and holds nothing but credentials and connection settings.

mod assets;
mod files;
mod jobs;
mod search;
mod urls;

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::iconik_client::IconikClientError;
use crate::ICONIK_API_BASE_URL;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use log::debug;

const APP_ID_HEADER: &str = "app-id";
const AUTH_TOKEN_HEADER: &str = "auth-token";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Unreserved characters stay as-is inside an id path segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub(crate) const SEARCH_ENDPOINT: &str = "search/v1/search/";
pub(crate) const ASSETS_ENDPOINT: &str = "assets/v1/assets/";
pub(crate) const JOBS_ENDPOINT: &str = "jobs/v1/jobs/";

#[derive(Clone)]
pub struct IconikClient {
    base_url: Url,
    client: Client,
    credentials: Credentials,
    tag_field: String,
    search_per_page: u32,
}

impl IconikClient {
    /// Create a client for the configured host.
    ///
    /// An empty host falls back to `https://app.iconik.io/API/`. The host is
    /// normalised to end with `/` so endpoint paths join underneath it.
    pub fn new(credentials: Credentials, config: &ClientConfig) -> Result<Self, IconikClientError> {
        let host = if config.host.trim().is_empty() {
            ICONIK_API_BASE_URL
        } else {
            config.host.trim()
        };

        let base_url = if host.ends_with('/') {
            Url::parse(host)?
        } else {
            Url::parse(&format!("{host}/"))?
        };

        let client = Client::builder().timeout(config.timeout()).build()?;

        debug!("Iconik client using {base_url}");

        Ok(Self {
            base_url,
            client,
            credentials,
            tag_field: config.tag_field.clone(),
            search_per_page: config.search_per_page,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Metadata field that holds asset tags.
    pub fn tag_field(&self) -> &str {
        &self.tag_field
    }

    pub fn app_id(&self) -> &str {
        &self.credentials.app_id
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, IconikClientError> {
        Ok(self.base_url.join(path)?)
    }

    fn auth_headers(&self) -> Result<HeaderMap, IconikClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            APP_ID_HEADER,
            HeaderValue::from_str(&self.credentials.app_id)
                .map_err(|e| IconikClientError::validation(format!("Invalid App ID: {e}")))?,
        );
        let mut token = HeaderValue::from_str(self.credentials.token.expose())
            .map_err(|e| IconikClientError::validation(format!("Invalid auth token: {e}")))?;
        token.set_sensitive(true);
        headers.insert(AUTH_TOKEN_HEADER, token);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Ok(headers)
    }

    fn prepare_request(&self, request: RequestBuilder) -> Result<RequestBuilder, IconikClientError> {
        Ok(request.headers(self.auth_headers()?))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, IconikClientError> {
        debug!("GET {url}");
        let response = self.prepare_request(self.client.get(url.clone()))?.send().await?;
        read_json(&url, response).await
    }

    pub(crate) async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, IconikClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {url} {}", serde_json::to_string(body)?);
        let response = self
            .prepare_request(self.client.post(url.clone()))?
            .json(body)
            .send()
            .await?;
        read_json(&url, response).await
    }

    /// POST where only the status matters.
    pub(crate) async fn post_no_content<B>(&self, url: Url, body: &B) -> Result<(), IconikClientError>
    where
        B: Serialize + ?Sized,
    {
        debug!("POST {url} {}", serde_json::to_string(body)?);
        let response = self
            .prepare_request(self.client.post(url.clone()))?
            .json(body)
            .send()
            .await?;
        read_status(&url, response).await
    }

    pub(crate) async fn patch_json<B, T>(&self, url: Url, body: &B) -> Result<T, IconikClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("PATCH {url} {}", serde_json::to_string(body)?);
        let response = self
            .prepare_request(self.client.patch(url.clone()))?
            .json(body)
            .send()
            .await?;
        read_json(&url, response).await
    }
}

/// Percent-encode an id for use as one path segment.
///
/// Empty ids and the dot segments `.`/`..` are rejected, since `Url::join`
/// would resolve them to a different endpoint.
#[track_caller]
pub(crate) fn path_segment(id: &str) -> Result<String, IconikClientError> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(IconikClientError::validation(format!(
            "Invalid id for a URL path segment: '{id}'"
        )));
    }
    Ok(utf8_percent_encode(id, PATH_SEGMENT_ENCODE_SET).to_string())
}

/// Read the body, then either decode it or turn it into an API error.
async fn read_json<T: DeserializeOwned>(url: &Url, response: Response) -> Result<T, IconikClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    debug!(
        "Response from {url}: HTTP {} {}",
        status.as_u16(),
        String::from_utf8_lossy(&body)
    );

    if !status.is_success() {
        return Err(IconikClientError::from_response(status.as_u16(), &body));
    }

    Ok(serde_json::from_slice(&body)?)
}

async fn read_status(url: &Url, response: Response) -> Result<(), IconikClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    debug!(
        "Response from {url}: HTTP {} {}",
        status.as_u16(),
        String::from_utf8_lossy(&body)
    );

    if !status.is_success() {
        return Err(IconikClientError::from_response(status.as_u16(), &body));
    }

    Ok(())
}
