use std::future::Future;

use anyhow::{bail, Result};

/// One slice of an offset-paginated result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// number of entries the service returned, including the ones that were skipped
    pub received: usize,
    pub total: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u32) -> Self {
        Self {
            received: items.len(),
            items,
            total,
        }
    }

    /// Build a page from raw service entries, keeping those `convert` accepts
    pub fn from_raw<R, F>(raw: Vec<R>, total: u32, convert: F) -> Self
    where
        F: FnMut(R) -> Option<T>,
    {
        let received = raw.len();
        Self {
            items: raw.into_iter().filter_map(convert).collect(),
            received,
            total,
        }
    }
}

/// Aggregate an offset-paginated result set.
///
/// `fetch(limit, offset)` is called with offsets `0, limit, 2 * limit, ...` until it
/// returns a page holding fewer than `limit` entries. A result set whose size is a
/// multiple of `limit` therefore costs one extra request that comes back empty.
pub async fn collect_pages<T, F, Fut>(limit: u32, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    if limit == 0 {
        bail!("page limit must be greater than zero");
    }

    let mut items = Vec::new();
    let mut offset = 0;
    loop {
        let page = fetch(limit, offset).await?;
        tracing::debug!(
            "fetched {} of {} entries at offset {offset}",
            page.received,
            page.total
        );
        items.extend(page.items);

        if page.received < limit as usize {
            break;
        }
        offset += limit;
    }

    Ok(items)
}
