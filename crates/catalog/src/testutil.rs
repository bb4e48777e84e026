//! Shared test doubles
//!
//! `MockApi` records every call so tests can assert on exactly which
//! requests a workflow issued, and can be told to fail specific
//! operations.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use common::{Error, Result};

use crate::client::ProductApi;
use crate::types::{
    ImageObject, ImageSelection, PageMeta, PostingPeriod, ProductDetail, ProductPage,
    ProductPayload, ProductSummary,
};

#[derive(Default)]
pub struct MockApi {
    page: Option<ProductPage>,
    details: HashMap<String, ProductDetail>,
    fail_list: bool,
    fail_details: HashSet<String>,
    fail_uploads: HashSet<String>,
    fail_create: bool,
    fail_update: bool,
    uploaded: RefCell<Vec<String>>,
    created: RefCell<Vec<ProductPayload>>,
    updated: RefCell<Vec<(String, ProductPayload)>>,
}

impl MockApi {
    pub fn with_page(mut self, items: Vec<ProductSummary>, meta: PageMeta) -> Self {
        self.page = Some(ProductPage { items, meta });
        self
    }

    pub fn with_detail(mut self, detail: ProductDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_detail(mut self, id: &str) -> Self {
        self.fail_details.insert(id.to_string());
        self
    }

    pub fn failing_upload(mut self, file_name: &str) -> Self {
        self.fail_uploads.insert(file_name.to_string());
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn failing_update(mut self) -> Self {
        self.fail_update = true;
        self
    }

    pub fn uploaded(&self) -> Vec<String> {
        self.uploaded.borrow().clone()
    }

    pub fn created(&self) -> Vec<ProductPayload> {
        self.created.borrow().clone()
    }

    pub fn updated(&self) -> Vec<(String, ProductPayload)> {
        self.updated.borrow().clone()
    }
}

impl ProductApi for MockApi {
    async fn list(&self, _page: u32, _limit: u32) -> Result<ProductPage> {
        if self.fail_list {
            return Err(Error::Http("HTTP 500".into()));
        }
        Ok(self.page.clone().unwrap_or(ProductPage {
            items: Vec::new(),
            meta: PageMeta::default(),
        }))
    }

    async fn get(&self, id: &str) -> Result<ProductDetail> {
        if self.fail_details.contains(id) {
            return Err(Error::Http("HTTP 500".into()));
        }
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| Error::Http("HTTP 404".into()))
    }

    async fn upload_image(&self, image: &ImageSelection) -> Result<ImageObject> {
        if self.fail_uploads.contains(&image.file_name) {
            return Err(Error::Http("HTTP 500".into()));
        }
        self.uploaded.borrow_mut().push(image.file_name.clone());
        Ok(ImageObject {
            key: format!("key-{}", image.file_name),
            url: format!("https://cdn.example/{}", image.file_name),
        })
    }

    async fn create(&self, payload: &ProductPayload) -> Result<ProductDetail> {
        if self.fail_create {
            return Err(Error::Rejected);
        }
        self.created.borrow_mut().push(payload.clone());
        Ok(detail("p-created"))
    }

    async fn update(&self, id: &str, payload: &ProductPayload) -> Result<ProductDetail> {
        if self.fail_update {
            return Err(Error::Rejected);
        }
        self.updated
            .borrow_mut()
            .push((id.to_string(), payload.clone()));
        Ok(detail(id))
    }

    async fn delete(&self, _id: &str) -> Result<()> {
        Ok(())
    }
}

pub fn summary(id: &str) -> ProductSummary {
    ProductSummary {
        id: id.to_string(),
        title: format!("title-{id}"),
        company_name: format!("company-{id}"),
        content: "content".to_string(),
        start_date: Some("2026-03-01".to_string()),
        end_date: Some("2026-04-01".to_string()),
        posting_period_type: PostingPeriod::FixedPeriod,
        logo_image_url: format!("https://cdn.example/{id}-logo.png"),
        product_image_url: format!("https://cdn.example/{id}-card.png"),
    }
}

pub fn detail(id: &str) -> ProductDetail {
    ProductDetail {
        id: id.to_string(),
        title: format!("title-{id}"),
        company_name: format!("company-{id}"),
        content: "content".to_string(),
        start_date: Some("2026-03-01".to_string()),
        end_date: Some("2026-04-01".to_string()),
        posting_period_type: PostingPeriod::FixedPeriod,
        logo_image: ImageObject {
            key: format!("stored-logo-{id}"),
            url: format!("https://cdn.example/{id}-logo.png"),
        },
        product_image: ImageObject {
            key: format!("stored-card-{id}"),
            url: format!("https://cdn.example/{id}-card.png"),
        },
        phone_number: "010-1111-2222".to_string(),
        is_active: true,
    }
}

pub fn selection(file_name: &str) -> ImageSelection {
    ImageSelection {
        file_name: file_name.to_string(),
        bytes: vec![0u8; 4],
    }
}

pub fn page_meta(total_items: u64, current_page: u32) -> PageMeta {
    let items_per_page = 20;
    PageMeta {
        total_items,
        item_count: total_items.min(u64::from(items_per_page)) as u32,
        items_per_page,
        total_pages: (total_items.div_ceil(u64::from(items_per_page)) as u32).max(1),
        current_page,
    }
}
