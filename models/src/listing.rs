use serde::{Deserialize, Serialize};

pub const KEYFRAME_TYPE: &str = "KEYFRAME";

/// `{"objects": [...]}` envelope used by the proxies, files and keyframes listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectList<T> {
    #[serde(default = "Vec::new")]
    pub objects: Vec<T>,
}

impl<T> Default for ObjectList<T> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
        }
    }
}

/// Listing entry that may carry a signed URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
}

impl UrlObject {
    pub fn is_keyframe(&self) -> bool {
        self.object_type.as_deref() == Some(KEYFRAME_TYPE)
    }
}

impl ObjectList<UrlObject> {
    /// URL of the first entry that has one.
    pub fn first_url(&self) -> Option<&str> {
        self.objects.iter().find_map(|o| o.url.as_deref())
    }

    /// URL of the first `KEYFRAME` entry.
    pub fn first_keyframe_url(&self) -> Option<&str> {
        self.objects
            .iter()
            .filter(|o| o.is_keyframe())
            .find_map(|o| o.url.as_deref())
    }
}

/// Response of `GET files/v1/assets/{asset}/proxies/{proxy}/download_url/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyDownloadUrl {
    pub url: String,
}
