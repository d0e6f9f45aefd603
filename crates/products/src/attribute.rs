use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::AttributeId;

/// How a select attribute renders its options on the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwatchType {
    Dropdown,
    Color,
    Image,
    Text,
}

/// One selectable value of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeOption {
    pub id: u64,
    pub admin_name: String,
    pub label: Option<String>,
    pub swatch_value: Option<String>,
}

/// Catalog attribute (configurable products vary along these).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub id: AttributeId,
    pub code: String,
    pub attribute_type: String,
    pub name: String,
    pub swatch_type: Option<SwatchType>,
    pub options: Vec<AttributeOption>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
