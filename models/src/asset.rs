use serde::{Deserialize, Serialize};

pub const ASSET_TYPE: &str = "ASSET";
pub const ASSETS_OBJECT_TYPE: &str = "assets";

/// Body of `POST assets/v1/assets/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAssetRequest {
    pub title: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
}

impl CreateAssetRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            asset_type: ASSET_TYPE.to_string(),
            collection_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Body of `POST assets/v1/collections/{collection}/contents/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionContent {
    pub object_id: String,
    pub object_type: String,
}

impl CollectionContent {
    pub fn asset(asset_id: impl Into<String>) -> Self {
        Self {
            object_id: asset_id.into(),
            object_type: ASSETS_OBJECT_TYPE.to_string(),
        }
    }
}
