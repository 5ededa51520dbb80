use js_sys::Reflect;
use log::{debug, error, warn};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Clipboard, HtmlDocument, HtmlTextAreaElement};

use crate::utils::js_error_message;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CopyError {
    #[error("clipboard API is not available")]
    NativeUnavailable,
    #[error("clipboard API rejected the write: {0}")]
    NativeRejected(String),
    #[error("fallback copy failed: {0}")]
    FallbackFailed(String),
}

#[allow(async_fn_in_trait)]
pub trait ClipboardBackend {
    async fn write_native(&self, text: &str) -> Result<(), CopyError>;
    fn write_fallback(&self, text: &str) -> Result<(), CopyError>;
}

/// Copies through the async clipboard API, then through `execCommand`.
/// Any failure ends up as `false`.
pub async fn copy_with<B: ClipboardBackend>(backend: &B, text: &str) -> bool {
    match backend.write_native(text).await {
        Ok(()) => {
            debug!("Copied {} chars with the clipboard API", text.len());
            return true;
        }
        Err(e) => warn!("{}, falling back to execCommand", e),
    }

    match backend.write_fallback(text) {
        Ok(()) => {
            debug!("Copied {} chars with execCommand", text.len());
            true
        }
        Err(e) => {
            error!("Copy failed: {}", e);
            false
        }
    }
}

pub async fn copy_text(text: &str) -> bool {
    copy_with(&BrowserClipboard, text).await
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl ClipboardBackend for BrowserClipboard {
    async fn write_native(&self, text: &str) -> Result<(), CopyError> {
        let window = window().ok_or(CopyError::NativeUnavailable)?;
        let navigator = window.navigator();
        // Older and insecure contexts have no navigator.clipboard at all.
        let clipboard = Reflect::get(&navigator, &"clipboard".into())
            .map_err(|_| CopyError::NativeUnavailable)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(CopyError::NativeUnavailable);
        }
        let clipboard: Clipboard = clipboard.unchecked_into();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| CopyError::NativeRejected(js_error_message(e)))
    }

    fn write_fallback(&self, text: &str) -> Result<(), CopyError> {
        let fail = |msg: &str| CopyError::FallbackFailed(msg.to_string());

        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| fail("no document"))?;
        let body = document.body().ok_or_else(|| fail("no body"))?;
        let area: HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(|e| CopyError::FallbackFailed(js_error_message(e)))?
            .dyn_into()
            .map_err(|_| fail("created element is not a textarea"))?;

        area.set_value(text);
        area.set_attribute("readonly", "")
            .and_then(|_| area.set_attribute("style", "position:fixed;top:-9999px;left:-9999px"))
            .map_err(|e| CopyError::FallbackFailed(js_error_message(e)))?;
        body.append_child(&area)
            .map_err(|e| CopyError::FallbackFailed(js_error_message(e)))?;

        area.select();
        let copied = match document.dyn_ref::<HtmlDocument>() {
            Some(html) => html
                .exec_command("copy")
                .map_err(|e| CopyError::FallbackFailed(js_error_message(e))),
            None => Err(fail("document is not an HTML document")),
        };
        area.remove();

        match copied? {
            true => Ok(()),
            false => Err(fail("execCommand(\"copy\") returned false")),
        }
    }
}
