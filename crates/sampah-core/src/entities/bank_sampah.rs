use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::WasteKind;
use crate::errors::CoreError;

/// A community waste-collection point.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BankSampahLocation {
    pub id: String,
    pub name: String,
    pub address: String,
    pub rating: f32,
}

/// A validated request to sell waste to a bank sampah.
///
/// Sales are not sent to the backend; they are handed off as a pre-filled
/// WhatsApp message to the bank operator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SaleRequest {
    pub address: String,
    pub weight_kg: f64,
    pub kind: WasteKind,
}

impl SaleRequest {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the address is blank or the weight
    /// is not a positive number.
    pub fn new(address: &str, weight_kg: f64, kind: WasteKind) -> Result<Self, CoreError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(CoreError::Validation("address is required".into()));
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(CoreError::Validation(
                "weight must be a positive number of kilograms".into(),
            ));
        }
        Ok(Self {
            address: address.to_string(),
            weight_kg,
            kind,
        })
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Saya ingin menjual {} Kg sampah {} dengan alamat {}",
            self.weight_kg, self.kind, self.address
        )
    }

    /// WhatsApp deep link carrying [`SaleRequest::message`].
    #[must_use]
    pub fn whatsapp_url(&self, phone_number: &str) -> String {
        format!(
            "https://wa.me/{phone_number}?text={}",
            urlencoding::encode(&self.message())
        )
    }
}
