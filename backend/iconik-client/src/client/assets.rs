use crate::client::{ASSETS_ENDPOINT, IconikClient, path_segment};
use crate::error::iconik_client::IconikClientError;

use models::{Asset, CollectionContent, CreateAssetRequest};

use log::info;

fn collection_contents_endpoint(collection_id: &str) -> Result<String, IconikClientError> {
    Ok(format!(
        "assets/v1/collections/{}/contents/",
        path_segment(collection_id)?
    ))
}

impl IconikClient {
    pub async fn create_asset(&self, request: &CreateAssetRequest) -> Result<Asset, IconikClientError> {
        let url = self.endpoint(ASSETS_ENDPOINT)?;
        let asset: Asset = self.post_json(url, request).await?;
        info!("Created asset {} ('{}')", asset.id, request.title);
        Ok(asset)
    }

    pub async fn add_to_collection(
        &self,
        collection_id: &str,
        asset_id: &str,
    ) -> Result<(), IconikClientError> {
        let url = self.endpoint(&collection_contents_endpoint(collection_id)?)?;
        self.post_no_content(url, &CollectionContent::asset(asset_id))
            .await?;
        info!("Added asset {asset_id} to collection {collection_id}");
        Ok(())
    }
}
