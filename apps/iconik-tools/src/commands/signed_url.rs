use crate::cli::CommonArgs;
use crate::error::ToolError;

use std::io::Write;

use clap::Parser;
use log::debug;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "iconik-signed-url",
    version,
    about = "Generate a signed URL for an asset's original file and fetch it"
)]
pub struct SignedUrlArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Asset to sign the original file of
    #[arg(long = "asset-id")]
    pub asset_id: String,

    /// Only print the URL, skip the GET
    #[arg(long)]
    pub no_fetch: bool,
}

pub async fn run(args: &SignedUrlArgs) -> Result<(), ToolError> {
    let (client, config) = args.common.connect()?;

    let url = client.generate_signed_file_url(&args.asset_id).await?;
    println!("Signed URL: {url}");

    if args.no_fetch {
        return Ok(());
    }

    let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
    fetch_and_report(&http, &url, &mut std::io::stdout().lock()).await
}

/// GET `url` and print the status code and response headers.
pub async fn fetch_and_report(http: &reqwest::Client, url: &str, out: &mut impl Write) -> Result<(), ToolError> {
    debug!("GET {url}");
    let response = http.get(url).send().await?;

    writeln!(out, "Status Code: {}", response.status().as_u16())?;
    writeln!(out, "Response Headers:")?;
    for (name, value) in response.headers() {
        writeln!(
            out,
            "{name}: {}",
            value.to_str().unwrap_or("<non-ascii value>")
        )?;
    }
    Ok(())
}
