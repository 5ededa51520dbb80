use serde::{Deserialize, Serialize};

use crate::utils::generate_qr_data_url;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[serde(alias = "number")]
    Copyable,
    #[serde(alias = "qris")]
    Qr,
    Unavailable,
}

impl MethodKind {
    pub fn subtitle(&self) -> &'static str {
        match self {
            MethodKind::Copyable => "Salin nomor tujuan, lalu bayar dari aplikasi Anda",
            MethodKind::Qr => "Scan QRIS dari aplikasi pembayaran",
            MethodKind::Unavailable => "Metode ini sedang tidak tersedia",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub kind: MethodKind,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default, alias = "number")]
    pub identifier: Option<String>,
}

impl PaymentMethod {
    pub fn header_id(&self) -> String {
        format!("pm-{}-header", self.id)
    }

    pub fn panel_id(&self) -> String {
        format!("pm-{}-panel", self.id)
    }
}

/// Where a QR card gets its picture from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum QrImage {
    /// Static asset addressed by relative path.
    Src(String),
    /// Text rendered into a PNG data URL in the browser.
    Payload(String),
}

impl QrImage {
    pub fn href(&self) -> String {
        match self {
            QrImage::Src(path) => path.clone(),
            QrImage::Payload(text) => generate_qr_data_url(text),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QrVariant {
    pub id: String,
    pub image: QrImage,
    pub download: String,
    pub note: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_kind_names_are_accepted() {
        let kind: MethodKind = serde_json::from_str("\"number\"").unwrap();
        assert_eq!(kind, MethodKind::Copyable);
        let kind: MethodKind = serde_json::from_str("\"qris\"").unwrap();
        assert_eq!(kind, MethodKind::Qr);
        let kind: MethodKind = serde_json::from_str("\"unavailable\"").unwrap();
        assert_eq!(kind, MethodKind::Unavailable);
    }

    #[test]
    fn aria_ids_follow_method_id() {
        let method: PaymentMethod = serde_json::from_str(
            r#"{"id":"dana","name":"DANA","logo":"./img/dana.jpg","kind":"number","number":"0812"}"#,
        )
        .unwrap();
        assert_eq!(method.header_id(), "pm-dana-header");
        assert_eq!(method.panel_id(), "pm-dana-panel");
        assert_eq!(method.identifier.as_deref(), Some("0812"));
        assert_eq!(method.badge, None);
    }

    #[test]
    fn src_images_are_used_verbatim() {
        let image = QrImage::Src("./img/qris1.jpg".into());
        assert_eq!(image.href(), "./img/qris1.jpg");
    }

    #[test]
    fn payload_images_render_to_png() {
        let image = QrImage::Payload("00020101021126570011ID.DANA.WWW".into());
        assert!(image.href().starts_with("data:image/png;base64,"));
    }
}
