use crate::cli::CommonArgs;
use crate::error::ToolError;

use iconik_client::IconikClient;
use models::SearchCriteria;

use std::io::Write;

use clap::Parser;
use log::{info, warn};
use serde::Serialize;

#[derive(Parser, Debug, Clone)]
#[command(name = "iconik-search", version, about = "Search Iconik assets by title and/or tag")]
pub struct SearchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Title to search for
    #[arg(long, default_value = "")]
    pub title: String,

    /// Tag to search for
    #[arg(long, default_value = "")]
    pub tag: String,

    /// Match the title exactly instead of as free text
    #[arg(long)]
    pub exact: bool,

    /// Also print the first keyframe URL of every asset
    #[arg(long)]
    pub keyframes: bool,

    /// Output machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedUrlEntry {
    pub asset_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SignedUrlEntry {
    fn from_result<E: std::fmt::Display>(
        asset_id: &str,
        proxy_id: Option<&str>,
        result: Result<String, E>,
    ) -> Self {
        let asset_id = asset_id.to_string();
        let proxy_id = proxy_id.map(str::to_string);
        match result {
            Ok(url) => Self {
                asset_id,
                proxy_id,
                url: Some(url),
                error: None,
            },
            Err(e) => {
                warn!("No signed URL for asset {asset_id}: {e}");
                Self {
                    asset_id,
                    proxy_id,
                    url: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub file_names: Vec<String>,
    pub proxy_urls: Vec<SignedUrlEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keyframe_urls: Vec<SignedUrlEntry>,
}

pub async fn run(args: &SearchArgs) -> Result<(), ToolError> {
    let (client, _) = args.common.connect()?;
    let report = collect(&client, args).await?;
    write_report(&report, args.json, &mut std::io::stdout().lock())
}

/// Search every result page, then sign a download URL for every asset/proxy pair.
///
/// A failed signing is recorded on its entry and does not stop the rest.
pub async fn collect(client: &IconikClient, args: &SearchArgs) -> Result<SearchReport, ToolError> {
    let criteria = SearchCriteria::with_title_and_tag(
        client.tag_field(),
        Some(&args.title),
        Some(&args.tag),
        args.exact,
    );
    let response = client.search_all_pages(&criteria).await?;
    info!(
        "Search matched {} object(s)",
        response.total.unwrap_or(response.objects.len() as u64)
    );

    let mut report = SearchReport {
        file_names: response.file_names().map(str::to_string).collect(),
        ..SearchReport::default()
    };

    for (asset_id, proxy_id) in response.asset_proxy_pairs() {
        let result = client.proxy_download_url(&asset_id, &proxy_id).await;
        report
            .proxy_urls
            .push(SignedUrlEntry::from_result(&asset_id, Some(&proxy_id), result));
    }

    if args.keyframes {
        for object in &response.objects {
            let result = client.get_keyframe_url(&object.id).await;
            report
                .keyframe_urls
                .push(SignedUrlEntry::from_result(&object.id, None, result));
        }
    }

    Ok(report)
}

/// File names first, then one URL (or error) per line.
pub fn write_report(report: &SearchReport, json: bool, out: &mut impl Write) -> Result<(), ToolError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    for name in &report.file_names {
        writeln!(out, "{name}")?;
    }
    for entry in report.proxy_urls.iter().chain(&report.keyframe_urls) {
        match (&entry.url, &entry.error) {
            (Some(url), _) => writeln!(out, "{url}")?,
            (None, Some(error)) => writeln!(out, "Error: {error}")?,
            (None, None) => {}
        }
    }
    Ok(())
}
