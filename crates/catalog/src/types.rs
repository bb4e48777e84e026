//! Wire types for the remote product API
//!
//! Field names are camelCase on the wire and must match the server
//! byte-for-byte, so every struct carries a serde rename.

use serde::{Deserialize, Serialize};

/// Posting schedule of a record: either a fixed date range or always
/// visible.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostingPeriod {
    #[default]
    FixedPeriod,
    Permanent,
}

/// An uploaded image as the server stores it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageObject {
    pub key: String,
    pub url: String,
}

/// Product record as returned by the list endpoint. The summary payload
/// carries image URLs only; `phoneNumber` and `isActive` exist only on
/// the detail payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub content: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub posting_period_type: PostingPeriod,
    pub logo_image_url: String,
    pub product_image_url: String,
}

/// Product record as returned by the detail endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub content: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub posting_period_type: PostingPeriod,
    pub logo_image: ImageObject,
    pub product_image: ImageObject,
    pub phone_number: String,
    pub is_active: bool,
}

/// Page metadata attached to every list response.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_items: u64,
    pub item_count: u32,
    pub items_per_page: u32,
    pub total_pages: u32,
    pub current_page: u32,
}

/// One page of summaries plus its metadata.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductPage {
    pub items: Vec<ProductSummary>,
    pub meta: PageMeta,
}

/// Request body for create and update. Both operations share the shape;
/// dates are null when the record posts permanently.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub title: String,
    pub content: String,
    pub phone_number: String,
    pub logo_image_key: String,
    pub product_image_key: String,
    pub is_active: bool,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub posting_period_type: PostingPeriod,
    pub company_id: String,
}

/// A locally selected image file, read into memory at pick time so the
/// core stays independent of browser file handles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSelection {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Standard `{ success, data }` envelope every endpoint wraps its
/// payload in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

/// Bodyless acknowledgement, as returned by delete.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_parses_camel_case_wire_format() {
        let json = r#"{
            "id": "p-1",
            "title": "Spring promo",
            "companyName": "Acme",
            "content": "hello",
            "startDate": "2026-03-01",
            "endDate": null,
            "postingPeriodType": "FIXED_PERIOD",
            "logoImageUrl": "https://cdn.example/logo.png",
            "productImageUrl": "https://cdn.example/card.png"
        }"#;

        let summary: ProductSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.company_name, "Acme");
        assert_eq!(summary.posting_period_type, PostingPeriod::FixedPeriod);
        assert_eq!(summary.start_date.as_deref(), Some("2026-03-01"));
        assert!(summary.end_date.is_none());
    }

    #[test]
    fn payload_serializes_enum_as_screaming_snake() {
        let payload = ProductPayload {
            title: "t".into(),
            content: "c".into(),
            phone_number: "010-0000-0000".into(),
            logo_image_key: "k1".into(),
            product_image_key: "k2".into(),
            is_active: true,
            start_date: None,
            end_date: None,
            posting_period_type: PostingPeriod::Permanent,
            company_id: "co-1".into(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["postingPeriodType"], "PERMANENT");
        assert_eq!(value["phoneNumber"], "010-0000-0000");
        assert!(value["startDate"].is_null());
    }
}
