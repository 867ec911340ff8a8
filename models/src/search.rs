//! Search request criteria and the result documents Iconik returns.

use crate::listing::UrlObject;

use serde::{Deserialize, Serialize};

pub const ASSETS_DOC_TYPE: &str = "assets";
pub const COLLECTIONS_DOC_TYPE: &str = "collections";
pub const FILTER_OPERATOR_AND: &str = "AND";
pub const TITLE_FIELD: &str = "title";

/// Body of `POST search/v1/search/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub doc_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub operator: String,
    pub terms: Vec<FilterTerm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTerm {
    pub name: String,
    pub value: String,
}

impl FilterTerm {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl SearchFilter {
    /// An `AND` filter, or `None` when there is nothing to filter on.
    pub fn all_of(terms: Vec<FilterTerm>) -> Option<Self> {
        if terms.is_empty() {
            return None;
        }
        Some(Self {
            operator: FILTER_OPERATOR_AND.to_string(),
            terms,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl SearchCriteria {
    /// Assets whose `tag_field` metadata matches `tag`.
    pub fn with_tag(tag_field: &str, tag: &str) -> Self {
        Self::with_title_and_tag(tag_field, None, Some(tag), false)
    }

    /// Assets matching a title and/or a tag.
    ///
    /// With `exact_title` the title becomes a filter term on the `title`
    /// field, otherwise it is sent as a free-text query. Blank values are
    /// ignored, so passing neither searches every asset.
    pub fn with_title_and_tag(
        tag_field: &str,
        title: Option<&str>,
        tag: Option<&str>,
        exact_title: bool,
    ) -> Self {
        let mut terms = Vec::new();
        let mut query = None;

        if let Some(title) = non_empty(title) {
            if exact_title {
                terms.push(FilterTerm::new(TITLE_FIELD, title));
            } else {
                query = Some(title.to_string());
            }
        }

        if let Some(tag) = non_empty(tag) {
            terms.push(FilterTerm::new(tag_field, tag));
        }

        Self {
            doc_types: vec![ASSETS_DOC_TYPE.to_string()],
            query,
            filter: SearchFilter::all_of(terms),
        }
    }

    /// Collections with exactly this title.
    pub fn for_collection_title(title: &str) -> Self {
        Self {
            doc_types: vec![COLLECTIONS_DOC_TYPE.to_string()],
            query: None,
            filter: SearchFilter::all_of(vec![FilterTerm::new(TITLE_FIELD, title)]),
        }
    }
}

/// Result page of a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub objects: Vec<SearchObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl SearchResponse {
    /// `(asset_id, proxy_id)` for every proxy of every returned object.
    pub fn asset_proxy_pairs(&self) -> Vec<(String, String)> {
        self.objects
            .iter()
            .flat_map(|object| {
                object
                    .proxies
                    .iter()
                    .map(move |proxy| (object.id.clone(), proxy.id.clone()))
            })
            .collect()
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.objects
            .iter()
            .flat_map(|object| object.files.iter().map(|file| file.name.as_str()))
    }

    /// The page after this one, if Iconik reported more. Missing paging fields mean one page.
    pub fn next_page(&self) -> Option<u32> {
        match (self.page, self.pages) {
            (Some(page), Some(pages)) if page < pages => page.checked_add(1),
            _ => None,
        }
    }

    pub fn has_more_pages(&self) -> bool {
        self.next_page().is_some()
    }
}

/// One search hit: an asset or a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchObject {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(default)]
    pub files: Vec<FileSummary>,
    #[serde(default)]
    pub proxies: Vec<ProxySummary>,
    #[serde(default)]
    pub keyframes: Vec<UrlObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxySummary {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
