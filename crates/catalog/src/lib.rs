//! Catalog - product record management for Adboard
//!
//! Catalog owns everything behind the admin UI: the remote API client,
//! the enriched list loader, the form draft and its submission workflow,
//! and the pagination math. All of it is target-agnostic and natively
//! testable; only the HTTP transport is wasm-specific.

pub mod client;
pub mod config;
pub mod draft;
pub mod form;
pub mod loader;
pub mod page;
pub mod submit;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use client::ProductApi;
#[cfg(target_arch = "wasm32")]
pub use client::HttpClient;
pub use config::ApiConfig;
pub use draft::ProductDraft;
pub use form::{FormEvent, FormMode, FormPhase};
pub use loader::{display_rank, load_page, ProductListing, ProductRow, PAGE_SIZE};
pub use submit::{submit_draft, ImageSlot, SubmitError};
pub use types::{
    ImageObject, ImageSelection, PageMeta, PostingPeriod, ProductDetail, ProductPage,
    ProductPayload, ProductSummary,
};
