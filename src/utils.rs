use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{ImageFormat, Luma};
use js_sys::Reflect;
use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use qrcode::QrCode;
use wasm_bindgen::JsValue;
use web_sys::{window, HtmlElement};
use yew::NodeRef;

use crate::config::MessagingConfig;

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn confirmation_message(brand: &str, method_name: Option<&str>) -> String {
    match method_name {
        Some(name) => format!(
            "Halo admin {}, saya ingin konfirmasi pembayaran via {}.",
            brand, name
        ),
        None => format!("Halo admin {}, saya ingin konfirmasi pembayaran.", brand),
    }
}

pub fn confirmation_link(messaging: &MessagingConfig, brand: &str, method_name: Option<&str>) -> String {
    let text = confirmation_message(brand, method_name);
    format!(
        "https://{}/{}?text={}",
        messaging.host,
        messaging.phone,
        utf8_percent_encode(&text, URI_COMPONENT)
    )
}

pub fn generate_qr_data_url(text: &str) -> String {
    let qr_code = match QrCode::new(text) {
        Ok(code) => code,
        Err(e) => {
            warn!("Cannot encode QR payload ({} bytes): {}", text.len(), e);
            return String::new();
        }
    };
    let qr_image = qr_code.render::<Luma<u8>>().min_dimensions(240, 240).build();

    let mut png_bytes: Vec<u8> = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut png_bytes);
    if let Err(e) = qr_image.write_to(&mut cursor, ImageFormat::Png) {
        warn!("Failed to write QR PNG: {}", e);
        return String::new();
    }

    format!("data:image/png;base64,{}", BASE64.encode(&png_bytes))
}

pub fn js_error_message(err: JsValue) -> String {
    if let Ok(message) = Reflect::get(&err, &"message".into()) {
        if let Some(s) = message.as_string() {
            return s;
        }
    }

    if let Some(s) = err.as_string() {
        return s;
    }

    if let Ok(json) = js_sys::JSON::stringify(&err) {
        if let Some(s) = json.as_string() {
            return s;
        }
    }

    "Unknown error (failed to extract message)".to_string()
}

/// Host the page is served from, or `fallback` outside a browser page.
pub fn site_host(fallback: &str) -> String {
    window()
        .and_then(|w| w.location().host().ok())
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn focus_node(node: &NodeRef) {
    match node.cast::<HtmlElement>() {
        Some(el) => {
            if el.focus().is_err() {
                debug!("Element refused focus");
            }
        }
        None => debug!("Focus target is not mounted"),
    }
}
