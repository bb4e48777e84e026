//! Form draft state
//!
//! The transient, locally held, editable state of the create/edit form.
//! A draft exists only while the form is open; the server copy is never
//! mutated until a submission succeeds.

use crate::form::FormMode;
use crate::types::{ImageSelection, PostingPeriod, ProductDetail, ProductPayload};

/// Editable form state. Image selections are populated only when the
/// user picks a new file; in edit mode an empty slot means "keep the
/// stored image".
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDraft {
    pub company_name: String,
    pub title: String,
    pub phone_number: String,
    pub content: String,
    pub is_active: bool,
    pub start_date: String,
    pub end_date: String,
    pub period: PostingPeriod,
    pub logo_image: Option<ImageSelection>,
    pub card_image: Option<ImageSelection>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            title: String::new(),
            phone_number: String::new(),
            content: String::new(),
            is_active: true,
            start_date: String::new(),
            end_date: String::new(),
            period: PostingPeriod::FixedPeriod,
            logo_image: None,
            card_image: None,
        }
    }
}

impl ProductDraft {
    /// Prefill from a fetched detail when the edit form opens. Image
    /// slots start empty; the stored keys are reused on submit unless
    /// the user picks replacements.
    pub fn from_detail(detail: &ProductDetail) -> Self {
        Self {
            company_name: detail.company_name.clone(),
            title: detail.title.clone(),
            phone_number: detail.phone_number.clone(),
            content: detail.content.clone(),
            is_active: detail.is_active,
            start_date: detail.start_date.clone().unwrap_or_default(),
            end_date: detail.end_date.clone().unwrap_or_default(),
            period: detail.posting_period_type,
            logo_image: None,
            card_image: None,
        }
    }

    pub fn is_permanent(&self) -> bool {
        self.period == PostingPeriod::Permanent
    }

    /// Toggle permanent posting. Turning it on clears both dates;
    /// turning it off requires the user to pick dates again before the
    /// draft becomes submittable.
    pub fn set_permanent(&mut self, permanent: bool) {
        if permanent {
            self.period = PostingPeriod::Permanent;
            self.start_date.clear();
            self.end_date.clear();
        } else {
            self.period = PostingPeriod::FixedPeriod;
        }
    }

    /// Validation gate for the submit button: all text fields non-empty
    /// after trimming, both images selected in create mode (edit mode
    /// falls back to the stored keys), and either permanent posting or
    /// both dates present.
    pub fn is_submittable(&self, mode: &FormMode) -> bool {
        let texts_ok = [
            self.title.as_str(),
            self.company_name.as_str(),
            self.phone_number.as_str(),
            self.content.as_str(),
        ]
        .iter()
        .all(|field| !field.trim().is_empty());

        let images_ok = match mode {
            FormMode::Create => self.logo_image.is_some() && self.card_image.is_some(),
            FormMode::Edit(_) => true,
        };

        let dates_ok =
            self.is_permanent() || (!self.start_date.is_empty() && !self.end_date.is_empty());

        texts_ok && images_ok && dates_ok
    }

    /// Assemble the request body: trimmed text fields, resolved image
    /// keys, and both dates null when posting permanently.
    pub fn to_payload(
        &self,
        logo_image_key: String,
        product_image_key: String,
        company_id: &str,
    ) -> ProductPayload {
        let (start_date, end_date) = if self.is_permanent() {
            (None, None)
        } else {
            (
                Some(self.start_date.clone()),
                Some(self.end_date.clone()),
            )
        };

        ProductPayload {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            logo_image_key,
            product_image_key,
            is_active: self.is_active,
            start_date,
            end_date,
            posting_period_type: self.period,
            company_id: company_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{detail, selection};

    fn filled_draft() -> ProductDraft {
        ProductDraft {
            company_name: "Acme".into(),
            title: "Spring promo".into(),
            phone_number: "010-0000-0000".into(),
            content: "hello".into(),
            start_date: "2026-03-01".into(),
            end_date: "2026-04-01".into(),
            logo_image: Some(selection("logo.png")),
            card_image: Some(selection("card.png")),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn blank_or_whitespace_text_blocks_submission() {
        let mode = FormMode::Create;
        assert!(filled_draft().is_submittable(&mode));

        for blank in ["", "   "] {
            let mut draft = filled_draft();
            draft.phone_number = blank.into();
            assert!(!draft.is_submittable(&mode));

            let mut draft = filled_draft();
            draft.title = blank.into();
            assert!(!draft.is_submittable(&mode));
        }
    }

    #[test]
    fn create_mode_requires_both_images() {
        let mode = FormMode::Create;
        let mut draft = filled_draft();
        draft.card_image = None;
        assert!(!draft.is_submittable(&mode));
    }

    #[test]
    fn edit_mode_accepts_missing_images() {
        let mode = FormMode::Edit(detail("p-1"));
        let mut draft = filled_draft();
        draft.logo_image = None;
        draft.card_image = None;
        assert!(draft.is_submittable(&mode));
    }

    #[test]
    fn fixed_period_requires_both_dates() {
        let mode = FormMode::Create;
        let mut draft = filled_draft();
        draft.end_date.clear();
        assert!(!draft.is_submittable(&mode));

        draft.set_permanent(true);
        assert!(draft.is_submittable(&mode));
    }

    #[test]
    fn permanent_toggle_clears_dates_and_flips_period() {
        let mut draft = filled_draft();
        draft.set_permanent(true);
        assert_eq!(draft.period, PostingPeriod::Permanent);
        assert!(draft.start_date.is_empty());
        assert!(draft.end_date.is_empty());

        draft.set_permanent(false);
        assert_eq!(draft.period, PostingPeriod::FixedPeriod);
        assert!(!draft.is_submittable(&FormMode::Create));
    }

    #[test]
    fn payload_trims_text_and_nulls_dates_when_permanent() {
        let mut draft = filled_draft();
        draft.title = "  Spring promo  ".into();
        draft.set_permanent(true);

        let payload = draft.to_payload("k-logo".into(), "k-card".into(), "co-1");
        assert_eq!(payload.title, "Spring promo");
        assert_eq!(payload.logo_image_key, "k-logo");
        assert_eq!(payload.product_image_key, "k-card");
        assert!(payload.start_date.is_none());
        assert!(payload.end_date.is_none());
        assert_eq!(payload.posting_period_type, PostingPeriod::Permanent);
        assert_eq!(payload.company_id, "co-1");
    }

    #[test]
    fn payload_keeps_dates_for_fixed_period() {
        let payload = filled_draft().to_payload("k1".into(), "k2".into(), "co-1");
        assert_eq!(payload.start_date.as_deref(), Some("2026-03-01"));
        assert_eq!(payload.end_date.as_deref(), Some("2026-04-01"));
    }

    #[test]
    fn prefill_copies_detail_fields_and_leaves_images_empty() {
        let d = detail("p-1");
        let draft = ProductDraft::from_detail(&d);
        assert_eq!(draft.title, d.title);
        assert_eq!(draft.phone_number, d.phone_number);
        assert!(draft.logo_image.is_none());
        assert!(draft.card_image.is_none());
    }
}
