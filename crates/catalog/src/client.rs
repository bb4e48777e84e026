//! Remote product API client
//!
//! `ProductApi` is the seam the loader and the submission workflow are
//! written against; `HttpClient` is the browser implementation over
//! gloo-net. Every authenticated request carries the fixed bearer token.
//! Failures are surfaced to the caller; there are no automatic retries.

use common::Result;

use crate::types::{ImageObject, ImageSelection, ProductDetail, ProductPage, ProductPayload};

/// Operations the remote API exposes.
///
/// Futures returned here are not required to be `Send`: the client runs
/// on the single-threaded browser event loop.
#[allow(async_fn_in_trait)]
pub trait ProductApi {
    /// Fetch one page of summaries with its page metadata.
    async fn list(&self, page: u32, limit: u32) -> Result<ProductPage>;

    /// Fetch the full detail for a single record.
    async fn get(&self, id: &str) -> Result<ProductDetail>;

    /// Upload an image and get back its stored key and URL.
    async fn upload_image(&self, image: &ImageSelection) -> Result<ImageObject>;

    /// Create a new record.
    async fn create(&self, payload: &ProductPayload) -> Result<ProductDetail>;

    /// Update an existing record.
    async fn update(&self, id: &str, payload: &ProductPayload) -> Result<ProductDetail>;

    /// Delete a record. Irreversible.
    async fn delete(&self, id: &str) -> Result<()>;
}

#[cfg(target_arch = "wasm32")]
pub use http::HttpClient;

#[cfg(target_arch = "wasm32")]
mod http {
    use common::{Error, Result};
    use gloo_net::http::{Request, Response};
    use serde::de::DeserializeOwned;

    use crate::config::ApiConfig;
    use crate::types::{
        Ack, Envelope, ImageObject, ImageSelection, ProductDetail, ProductPage, ProductPayload,
    };

    use super::ProductApi;

    /// gloo-net backed client for the remote product API.
    #[derive(Clone, Debug)]
    pub struct HttpClient {
        config: ApiConfig,
    }

    impl HttpClient {
        pub fn new(config: ApiConfig) -> Self {
            Self { config }
        }

        fn url(&self, path: &str) -> String {
            format!("{}{}", self.config.base_url, path)
        }

        /// Unwrap a response: non-2xx is an error, then the JSON envelope
        /// must report success.
        async fn unwrap_envelope<T: DeserializeOwned>(resp: Response) -> Result<T> {
            if !resp.ok() {
                return Err(Error::Http(format!("HTTP {}", resp.status())));
            }
            let envelope: Envelope<T> = resp
                .json()
                .await
                .map_err(|e| Error::Other(e.to_string()))?;
            if !envelope.success {
                return Err(Error::Rejected);
            }
            Ok(envelope.data)
        }

        fn form_data(image: &ImageSelection) -> Result<web_sys::FormData> {
            let parts = js_sys::Array::new();
            parts.push(&js_sys::Uint8Array::from(image.bytes.as_slice()));
            let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)
                .map_err(|e| Error::Other(format!("{e:?}")))?;
            let form = web_sys::FormData::new().map_err(|e| Error::Other(format!("{e:?}")))?;
            form.append_with_blob_and_filename("image", &blob, &image.file_name)
                .map_err(|e| Error::Other(format!("{e:?}")))?;
            Ok(form)
        }
    }

    impl ProductApi for HttpClient {
        async fn list(&self, page: u32, limit: u32) -> Result<ProductPage> {
            let resp = Request::get(&self.url(&format!("/products?page={page}&limit={limit}")))
                .header("Authorization", &self.config.bearer())
                .send()
                .await
                .map_err(|e| Error::Http(e.to_string()))?;
            Self::unwrap_envelope(resp).await
        }

        async fn get(&self, id: &str) -> Result<ProductDetail> {
            let resp = Request::get(&self.url(&format!("/products/{id}")))
                .header("Authorization", &self.config.bearer())
                .send()
                .await
                .map_err(|e| Error::Http(e.to_string()))?;
            Self::unwrap_envelope(resp).await
        }

        async fn upload_image(&self, image: &ImageSelection) -> Result<ImageObject> {
            // multipart/form-data with the boundary set by the browser, so
            // no explicit content type here.
            let resp = Request::post(&self.url("/products/upload-image"))
                .header("Authorization", &self.config.bearer())
                .body(Self::form_data(image)?)
                .map_err(|e| Error::Other(e.to_string()))?
                .send()
                .await
                .map_err(|e| Error::Http(e.to_string()))?;
            Self::unwrap_envelope(resp).await
        }

        async fn create(&self, payload: &ProductPayload) -> Result<ProductDetail> {
            let resp = Request::post(&self.url("/products"))
                .header("Authorization", &self.config.bearer())
                .json(payload)
                .map_err(|e| Error::Other(e.to_string()))?
                .send()
                .await
                .map_err(|e| Error::Http(e.to_string()))?;
            Self::unwrap_envelope(resp).await
        }

        async fn update(&self, id: &str, payload: &ProductPayload) -> Result<ProductDetail> {
            let resp = Request::patch(&self.url(&format!("/products/{id}")))
                .header("Authorization", &self.config.bearer())
                .json(payload)
                .map_err(|e| Error::Other(e.to_string()))?
                .send()
                .await
                .map_err(|e| Error::Http(e.to_string()))?;
            Self::unwrap_envelope(resp).await
        }

        async fn delete(&self, id: &str) -> Result<()> {
            let resp = Request::delete(&self.url(&format!("/products/{id}")))
                .header("Authorization", &self.config.bearer())
                .send()
                .await
                .map_err(|e| Error::Http(e.to_string()))?;
            if !resp.ok() {
                return Err(Error::Http(format!("HTTP {}", resp.status())));
            }
            let ack: Ack = resp
                .json()
                .await
                .map_err(|e| Error::Other(e.to_string()))?;
            if !ack.success {
                return Err(Error::Rejected);
            }
            Ok(())
        }
    }
}
