//! List-page loader with detail enrichment
//!
//! The summary payload lacks `phoneNumber` and `isActive`, so after
//! fetching a page every item gets a detail fetch to fill them in. The
//! fan-out is bounded and order preserving; a failed detail fetch falls
//! back to fixed values instead of failing the page.

use common::Result;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::ProductApi;
use crate::types::{PageMeta, ProductSummary};

/// Rows shown per listing page.
pub const PAGE_SIZE: u32 = 20;

/// Phone number shown when a record's detail could not be fetched.
pub const FALLBACK_PHONE: &str = "010-1234-5678";

/// Detail fetches in flight at once per page load.
const DETAIL_CONCURRENCY: usize = 4;

/// Summary record enriched with detail-only fields.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductRow {
    pub summary: ProductSummary,
    pub phone_number: String,
    pub is_active: bool,
}

/// One fully loaded listing page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductListing {
    pub rows: Vec<ProductRow>,
    pub meta: PageMeta,
}

/// Fetch a page of summaries and enrich each with its detail.
///
/// Items keep the server's order. If the page fetch itself fails the
/// whole load fails; per-item detail failures are tolerated.
pub async fn load_page<A: ProductApi>(api: &A, page: u32, limit: u32) -> Result<ProductListing> {
    let product_page = api.list(page, limit).await?;

    let rows = futures::stream::iter(product_page.items)
        .map(|summary| enrich(api, summary))
        .buffered(DETAIL_CONCURRENCY)
        .collect::<Vec<_>>()
        .await;

    Ok(ProductListing {
        rows,
        meta: product_page.meta,
    })
}

async fn enrich<A: ProductApi>(api: &A, summary: ProductSummary) -> ProductRow {
    match api.get(&summary.id).await {
        Ok(detail) => ProductRow {
            phone_number: detail.phone_number,
            is_active: detail.is_active,
            summary,
        },
        Err(err) => {
            warn!(id = %summary.id, %err, "detail fetch failed, using fallback fields");
            ProductRow {
                phone_number: FALLBACK_PHONE.to_string(),
                is_active: true,
                summary,
            }
        }
    }
}

/// Number shown in the first table column: the record's rank counting
/// down from the newest across all pages, e.g. totalItems=45, page 2 of
/// 20 per page, row 0 displays 25.
pub fn display_rank(meta: &PageMeta, index: usize) -> u64 {
    if meta.total_items == 0 {
        return index as u64 + 1;
    }
    let offset = u64::from(meta.current_page.saturating_sub(1)) * u64::from(meta.items_per_page);
    meta.total_items.saturating_sub(offset + index as u64)
}
