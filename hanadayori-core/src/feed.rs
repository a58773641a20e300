//! Photo feed behind the image picker: an initial page plus "load more".

use hanadayori_model::PhotoResult;
use tracing::{debug, warn};

use crate::error::FetchFailed;
use crate::flowers::FlowerKind;
use crate::providers::{DEFAULT_PAGE, DEFAULT_PER_PAGE, ImageProvider};

/// Accumulated photos for the picker.
///
/// Without a filter, the first page is the default flower search and later
/// pages come from [`ImageProvider::fetch_variety`], so the feed mixes
/// several flower terms. With a filter every page is a search for that
/// kind. A failed fetch leaves the feed untouched.
#[derive(Debug, Clone)]
pub struct FlowerFeed {
    photos: Vec<PhotoResult>,
    page: u32,
    per_page: u32,
    filter: Option<FlowerKind>,
}

impl Default for FlowerFeed {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl FlowerFeed {
    pub fn new(per_page: u32) -> Self {
        Self {
            photos: Vec::new(),
            page: DEFAULT_PAGE,
            per_page,
            filter: None,
        }
    }

    pub fn photos(&self) -> &[PhotoResult] {
        &self.photos
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn filter(&self) -> Option<&FlowerKind> {
        self.filter.as_ref()
    }

    /// Replace the feed with the first page for `filter`.
    pub async fn load_initial(
        &mut self,
        provider: &dyn ImageProvider,
        filter: Option<FlowerKind>,
    ) -> Result<&[PhotoResult], FetchFailed> {
        let first = match &filter {
            Some(kind) => {
                provider
                    .search_flower(kind, DEFAULT_PAGE, self.per_page)
                    .await?
            }
            None => provider.fetch_default(DEFAULT_PAGE, self.per_page).await?,
        };

        self.photos = first.photos;
        self.page = DEFAULT_PAGE;
        self.filter = filter;
        Ok(&self.photos)
    }

    /// Append the next page. Returns how many photos were added.
    pub async fn load_more(
        &mut self,
        provider: &dyn ImageProvider,
    ) -> Result<usize, FetchFailed> {
        let Some(next) = self.page.checked_add(1) else {
            warn!(page = self.page, "feed is at the last addressable page");
            return Err(FetchFailed);
        };
        let page = match &self.filter {
            Some(kind) => {
                provider.search_flower(kind, next, self.per_page).await?
            }
            None => provider.fetch_variety(next, self.per_page).await?,
        };
        if page.is_empty() {
            debug!(page = next, "provider has no further photos");
        }

        let added = page.photos.len();
        self.photos.extend(page.photos);
        self.page = next;
        debug!(
            page = next,
            added,
            total = self.photos.len(),
            "feed extended"
        );
        Ok(added)
    }
}
