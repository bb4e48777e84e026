//! Submission workflow
//!
//! The ordering here is the contract: images that need uploading go
//! first (concurrently), the create or update call only happens once
//! every required key is resolved, and any upload failure aborts the
//! whole submission so no partial record is ever written.

use std::fmt;

use thiserror::Error;

use crate::client::ProductApi;
use crate::draft::ProductDraft;
use crate::form::FormMode;
use crate::types::{ImageObject, ImageSelection, ProductDetail};

/// Which image slot an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSlot {
    Logo,
    Card,
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSlot::Logo => write!(f, "logo"),
            ImageSlot::Card => write!(f, "card"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SubmitError {
    /// The draft did not pass the validation gate. The UI disables the
    /// submit button in this case; hitting it anyway is a bug, not a
    /// user error.
    #[error("draft is not ready to submit")]
    NotSubmittable,

    /// An image slot has neither a new selection nor a stored key.
    #[error("no {0} image selected")]
    MissingImage(ImageSlot),

    #[error("{slot} image upload failed: {source}")]
    Upload { slot: ImageSlot, source: common::Error },

    #[error("failed to create record: {0}")]
    Create(common::Error),

    #[error("failed to update record: {0}")]
    Update(common::Error),
}

/// Where a slot's key comes from: a freshly picked file that still
/// needs uploading, or the key already stored on the record.
enum ImageSource<'a> {
    New(&'a ImageSelection),
    Stored(&'a str),
}

fn image_source<'a>(
    slot: ImageSlot,
    selection: &'a Option<ImageSelection>,
    stored: Option<&'a ImageObject>,
) -> Result<ImageSource<'a>, SubmitError> {
    match (selection, stored) {
        (Some(picked), _) => Ok(ImageSource::New(picked)),
        (None, Some(existing)) => Ok(ImageSource::Stored(&existing.key)),
        (None, None) => Err(SubmitError::MissingImage(slot)),
    }
}

async fn resolve_key<A: ProductApi>(
    api: &A,
    slot: ImageSlot,
    source: ImageSource<'_>,
) -> Result<String, SubmitError> {
    match source {
        ImageSource::Stored(key) => Ok(key.to_string()),
        ImageSource::New(selection) => api
            .upload_image(selection)
            .await
            .map(|image| image.key)
            .map_err(|source| SubmitError::Upload { slot, source }),
    }
}

/// Run the whole submission: resolve both image keys (uploading only
/// what the user actually replaced, in parallel), assemble the payload,
/// then dispatch exactly one of create or update.
pub async fn submit_draft<A: ProductApi>(
    api: &A,
    mode: &FormMode,
    draft: &ProductDraft,
    company_id: &str,
) -> Result<ProductDetail, SubmitError> {
    if !draft.is_submittable(mode) {
        return Err(SubmitError::NotSubmittable);
    }

    let (stored_logo, stored_card) = match mode {
        FormMode::Create => (None, None),
        FormMode::Edit(detail) => (Some(&detail.logo_image), Some(&detail.product_image)),
    };

    let logo = image_source(ImageSlot::Logo, &draft.logo_image, stored_logo)?;
    let card = image_source(ImageSlot::Card, &draft.card_image, stored_card)?;

    // Phase barrier: both keys must be resolved before the record call.
    let (logo_key, card_key) = futures::future::try_join(
        resolve_key(api, ImageSlot::Logo, logo),
        resolve_key(api, ImageSlot::Card, card),
    )
    .await?;

    let payload = draft.to_payload(logo_key, card_key, company_id);

    match mode {
        FormMode::Create => api.create(&payload).await.map_err(SubmitError::Create),
        FormMode::Edit(detail) => api
            .update(&detail.id, &payload)
            .await
            .map_err(SubmitError::Update),
    }
}
