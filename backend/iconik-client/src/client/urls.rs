use crate::client::{IconikClient, path_segment};
use crate::error::iconik_client::IconikClientError;

use models::{ObjectList, ProxyDownloadUrl, UrlObject};

use log::debug;

fn proxies_endpoint(asset_id: &str) -> Result<String, IconikClientError> {
    Ok(format!("files/v1/assets/{}/proxies/", path_segment(asset_id)?))
}

fn proxy_download_endpoint(asset_id: &str, proxy_id: &str) -> Result<String, IconikClientError> {
    Ok(format!(
        "files/v1/assets/{}/proxies/{}/download_url/",
        path_segment(asset_id)?,
        path_segment(proxy_id)?
    ))
}

fn files_endpoint(asset_id: &str) -> Result<String, IconikClientError> {
    Ok(format!("files/v1/assets/{}/files/", path_segment(asset_id)?))
}

fn keyframes_endpoint(asset_id: &str) -> Result<String, IconikClientError> {
    Ok(format!("files/v1/assets/{}/keyframes/", path_segment(asset_id)?))
}

impl IconikClient {
    /// Signed URL of the first proxy of an asset.
    pub async fn generate_signed_proxy_url(&self, asset_id: &str) -> Result<String, IconikClientError> {
        let url = self.endpoint(&proxies_endpoint(asset_id)?)?;
        let listing: ObjectList<UrlObject> = self.get_json(url).await?;

        let signed = listing
            .first_url()
            .ok_or_else(|| IconikClientError::not_found(format!("No proxy URL for asset {asset_id}")))?;

        debug!("Signed proxy URL for asset {asset_id} generated");
        Ok(signed.to_string())
    }

    /// Download URL of one specific proxy.
    pub async fn proxy_download_url(
        &self,
        asset_id: &str,
        proxy_id: &str,
    ) -> Result<String, IconikClientError> {
        let url = self.endpoint(&proxy_download_endpoint(asset_id, proxy_id)?)?;
        let response: ProxyDownloadUrl = self.get_json(url).await?;
        Ok(response.url)
    }

    /// Signed URL of the first original file of an asset.
    pub async fn generate_signed_file_url(&self, asset_id: &str) -> Result<String, IconikClientError> {
        let mut url = self.endpoint(&files_endpoint(asset_id)?)?;
        url.query_pairs_mut().append_pair("generate_signed_url", "true");

        let listing: ObjectList<UrlObject> = self.get_json(url).await?;

        let signed = listing
            .first_url()
            .ok_or_else(|| IconikClientError::not_found(format!("No file URL for asset {asset_id}")))?;

        debug!("Signed file URL for asset {asset_id} generated");
        Ok(signed.to_string())
    }

    /// URL of the first `KEYFRAME` image of an asset.
    pub async fn get_keyframe_url(&self, asset_id: &str) -> Result<String, IconikClientError> {
        let url = self.endpoint(&keyframes_endpoint(asset_id)?)?;
        let listing: ObjectList<UrlObject> = self.get_json(url).await?;

        listing
            .first_keyframe_url()
            .map(str::to_string)
            .ok_or_else(|| IconikClientError::not_found(format!("No keyframe for asset {asset_id}")))
    }
}
