use crate::cli::CommonArgs;
use crate::error::ToolError;

use iconik_client::upload::{B2Transfer, LocalFile, NewAssetSpec, UploadOptions, upload_new_asset};
use iconik_client::{ClientConfig, IconikClient};
use models::NewAssetUpload;

use std::path::PathBuf;

use clap::Parser;
use log::info;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "iconik-upload",
    version,
    about = "Upload a local file to B2 and ingest it into an Iconik collection"
)]
pub struct UploadArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Local file to upload
    #[arg(long)]
    pub file: PathBuf,

    /// Title of the new asset
    #[arg(long)]
    pub title: String,

    /// Title of the collection to add the asset to
    #[arg(long)]
    pub collection: String,

    /// Directory inside the storage
    #[arg(long, default_value = "/")]
    pub storage_path: String,

    /// Do not request keyframe generation after the upload
    #[arg(long)]
    pub no_keyframes: bool,
}

pub async fn run(args: &UploadArgs) -> Result<(), ToolError> {
    let (client, config) = args.common.connect()?;
    let upload = upload_file(&client, &config, args).await?;
    println!(
        "Uploaded {} as asset {} (job {})",
        args.file.display(),
        upload.asset_id,
        upload.job_id
    );
    Ok(())
}

/// Resolve the collection, inspect the file and run the upload workflow.
///
/// When several collections share the title the first one is used.
pub async fn upload_file(
    client: &IconikClient,
    config: &ClientConfig,
    args: &UploadArgs,
) -> Result<NewAssetUpload, ToolError> {
    if args.title.trim().is_empty() {
        return Err(ToolError::tool("Title cannot be empty"));
    }

    let collections = client.get_collection_ids(&args.collection).await?;
    let Some(collection) = collections.first() else {
        return Err(ToolError::tool(format!(
            "No collection titled '{}'",
            args.collection
        )));
    };
    info!("Using collection {}", collection.id);
    for unused in &collections[1..] {
        info!("(unused) collection {}", unused.id);
    }

    let local = LocalFile::inspect(&args.file).await?;
    let spec = NewAssetSpec {
        collection_id: collection.id.clone(),
        title: args.title.clone(),
        storage_path: args.storage_path.clone(),
        local,
    };

    let transfer = B2Transfer::new(config.multipart_part_size_bytes, config.upload_timeout())?;
    let mut options = UploadOptions::from(config);
    if args.no_keyframes {
        options.request_keyframes = false;
    }

    Ok(upload_new_asset(client, &transfer, &spec, options).await?)
}
