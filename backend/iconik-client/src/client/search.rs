use crate::client::{IconikClient, SEARCH_ENDPOINT};
use crate::error::iconik_client::IconikClientError;

use models::{Collection, SearchCriteria, SearchResponse};

use log::{debug, info, warn};

impl IconikClient {
    /// Run a search and return one page of results (1-based, default first page).
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        page: Option<u32>,
    ) -> Result<SearchResponse, IconikClientError> {
        let mut url = self.endpoint(SEARCH_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("per_page", &self.search_per_page.to_string())
            .append_pair("page", &page.unwrap_or(1).to_string());

        let response: SearchResponse = self.post_json(url, criteria).await?;
        debug!(
            "Search returned {} objects (total {:?})",
            response.objects.len(),
            response.total
        );
        Ok(response)
    }

    /// Run a search and follow the paging fields until the last page.
    ///
    /// The merged response keeps the first page's `total` and reports the last page fetched.
    pub async fn search_all_pages(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<SearchResponse, IconikClientError> {
        let mut merged = self.search(criteria, None).await?;
        let mut next = merged.next_page();

        while let Some(page_number) = next {
            let page = self.search(criteria, Some(page_number)).await?;
            next = page.next_page();
            merged.page = page.page.or(Some(page_number));
            merged.pages = page.pages;

            if page.objects.is_empty() {
                warn!("Search page {page_number} was empty before the reported last page");
                break;
            }
            merged.objects.extend(page.objects);

            if next.is_some_and(|following| following <= page_number) {
                warn!("Search paging did not advance past page {page_number}; stopping");
                break;
            }
        }

        debug!("Search collected {} objects across all pages", merged.objects.len());
        Ok(merged)
    }

    /// Assets whose tag metadata field matches `tag`.
    pub async fn search_with_tag(&self, tag: &str) -> Result<SearchResponse, IconikClientError> {
        let criteria = SearchCriteria::with_tag(&self.tag_field, tag);
        self.search(&criteria, None).await
    }

    /// Assets matching a title and/or a tag. Blank values are ignored.
    pub async fn search_with_title_and_tag(
        &self,
        title: &str,
        tag: &str,
        exact_title: bool,
    ) -> Result<SearchResponse, IconikClientError> {
        let criteria =
            SearchCriteria::with_title_and_tag(&self.tag_field, Some(title), Some(tag), exact_title);
        self.search(&criteria, None).await
    }

    /// Collections titled exactly `title`, in the order Iconik ranks them.
    ///
    /// # Errors
    /// Returns [`IconikClientError::NotFound`] when no collection matches.
    pub async fn get_collection_ids(&self, title: &str) -> Result<Vec<Collection>, IconikClientError> {
        if title.trim().is_empty() {
            return Err(IconikClientError::validation("Collection title cannot be empty"));
        }

        let criteria = SearchCriteria::for_collection_title(title);
        let response = self.search(&criteria, None).await?;

        let collections: Vec<Collection> = response
            .objects
            .into_iter()
            .map(|object| Collection {
                id: object.id,
                title: object.title,
            })
            .collect();

        if collections.is_empty() {
            return Err(IconikClientError::not_found(format!(
                "No collection titled '{title}'"
            )));
        }

        info!("Found {} collection(s) titled '{title}'", collections.len());
        Ok(collections)
    }
}
