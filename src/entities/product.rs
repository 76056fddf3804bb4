//! Storefront product listed to buyers

use crate::core::record::Filterable;
use crate::impl_record;
use serde::{Deserialize, Serialize};

/// A product card on the storefront
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in RWF
    pub price: f64,
    pub category: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            category: category.into(),
            location: location.into(),
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

// Storefront search looks at the product name only.
impl Filterable for Product {
    fn text_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn range_value(&self) -> Option<f64> {
        Some(self.price)
    }

    fn location(&self) -> Option<&str> {
        Some(self.location.as_str())
    }
}

impl_record!(
    Product,
    resource: "products",
    id: u32 => id,
    fields: {
        "id" => |p| p.id,
        "name" => |p| &p.name,
        "price" => |p| p.price,
        "category" => |p| &p.category,
        "location" => |p| &p.location,
    }
);
