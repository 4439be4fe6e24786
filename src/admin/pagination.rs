//! Cursor pagination over list endpoints

use std::future::Future;

use log::debug;
use serde::Deserialize;

use crate::error::{AdminError, Result};

/// One page of a cursor-paginated list response
#[derive(Deserialize, Debug, Clone)]
pub struct ListPage<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub last_id: Option<String>,
}

impl<T> ListPage<T> {
    /// Cursor for the next page, or `None` when this page is terminal
    ///
    /// A page without `last_id` ends the listing even if `has_more` is set.
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_more {
            self.last_id.as_deref()
        } else {
            None
        }
    }
}

/// Drain a cursor-paginated listing into a single ordered collection
///
/// `fetch_page` receives the `after_id` cursor (`None` for the first page).
/// Pages are fetched strictly one after another and their items are
/// concatenated in arrival order. The first failing page aborts the whole
/// listing; items gathered so far are dropped.
///
/// At most `max_pages` pages are requested. If the last allowed page still
/// reports more results, the listing fails with
/// [`AdminError::PaginationLimit`].
pub async fn collect_pages<T, F, Fut>(
    context: &str,
    max_pages: usize,
    mut fetch_page: F,
) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ListPage<T>>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0;

    loop {
        if pages == max_pages {
            return Err(AdminError::PaginationLimit {
                pages,
                context: context.to_string(),
            });
        }

        let page = fetch_page(cursor.take()).await?;
        pages += 1;

        debug!(
            "Page {} of {} returned {} items (has_more: {})",
            pages,
            context,
            page.data.len(),
            page.has_more
        );

        let next = page.next_cursor().map(str::to_string);
        items.extend(page.data);

        match next {
            Some(last_id) => cursor = Some(last_id),
            None => break,
        }
    }

    debug!("Fetched {} total items for {}", items.len(), context);
    Ok(items)
}
