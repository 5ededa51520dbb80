use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::models::{MethodKind, PaymentMethod, QrVariant};

const EMBEDDED: &str = include_str!("../config/widget.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("widget configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("payment method `{0}` is declared more than once")]
    DuplicateMethod(String),
    #[error("payment method `{0}` is copyable but has no identifier")]
    MissingIdentifier(String),
    #[error("payment method `{0}` shows QR codes but no QR variants are configured")]
    NoVariants(String),
    #[error("messaging phone `{0}` must contain digits only")]
    InvalidPhone(String),
    #[error("messaging host `{0}` is not a valid host")]
    InvalidHost(String),
}

fn default_messaging_host() -> String {
    "wa.me".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MessagingConfig {
    #[serde(default = "default_messaging_host")]
    pub host: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub brand: String,
    #[serde(default)]
    pub site_host: String,
    pub messaging: MessagingConfig,
    pub methods: Vec<PaymentMethod>,
    #[serde(default)]
    pub qr_variants: Vec<QrVariant>,
}

impl WidgetConfig {
    /// Configuration compiled into the bundle.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn method(&self, id: &str) -> Option<&PaymentMethod> {
        self.methods.iter().find(|m| m.id == id)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let phone = &self.messaging.phone;
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidPhone(phone.clone()));
        }

        let host = &self.messaging.host;
        let parsed = Url::parse(&format!("https://{}/", host))
            .map_err(|_| ConfigError::InvalidHost(host.clone()))?;
        if parsed.host_str() != Some(host.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidHost(host.clone()));
        }

        let mut seen = HashSet::new();
        for method in &self.methods {
            if !seen.insert(method.id.as_str()) {
                return Err(ConfigError::DuplicateMethod(method.id.clone()));
            }
            match method.kind {
                MethodKind::Copyable
                    if method.identifier.as_deref().map_or(true, str::is_empty) =>
                {
                    return Err(ConfigError::MissingIdentifier(method.id.clone()));
                }
                MethodKind::Qr if self.qr_variants.is_empty() => {
                    return Err(ConfigError::NoVariants(method.id.clone()));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
