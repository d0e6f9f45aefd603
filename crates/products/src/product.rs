use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{CatalogError, ProductId};

use crate::attribute::Attribute;
use crate::downloadable::{DownloadableLink, DownloadableSample};
use crate::grouped::GroupedProductLink;

/// Product type discriminator.
///
/// Selects how a product is priced, how its stock is reported and which
/// type-specific block the storefront resource attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Simple,
    Virtual,
    Sample,
    Configurable,
    Grouped,
    Bundle,
    Downloadable,
    Booking,
}

/// How the `price` field of a product is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRule {
    /// Use the raw price stored on the product.
    StoredPrice,
    /// Ask the type's price renderer (may return a pre-formatted range).
    TypeRenderer,
}

/// How the `in_stock` flag of a product is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockRule {
    /// Ask inventory whether the given quantity can be fulfilled.
    RequireQuantity(u32),
    /// Report available unconditionally. Composite types defer real stock
    /// checks to their constituent items.
    AlwaysAvailable,
}

impl ProductType {
    pub const ALL: [ProductType; 8] = [
        ProductType::Simple,
        ProductType::Virtual,
        ProductType::Sample,
        ProductType::Configurable,
        ProductType::Grouped,
        ProductType::Bundle,
        ProductType::Downloadable,
        ProductType::Booking,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ProductType::Simple => "simple",
            ProductType::Virtual => "virtual",
            ProductType::Sample => "sample",
            ProductType::Configurable => "configurable",
            ProductType::Grouped => "grouped",
            ProductType::Bundle => "bundle",
            ProductType::Downloadable => "downloadable",
            ProductType::Booking => "booking",
        }
    }

    pub const fn price_rule(self) -> PriceRule {
        match self {
            ProductType::Simple | ProductType::Virtual | ProductType::Sample => {
                PriceRule::StoredPrice
            }
            ProductType::Configurable
            | ProductType::Downloadable
            | ProductType::Grouped
            | ProductType::Bundle
            | ProductType::Booking => PriceRule::TypeRenderer,
        }
    }

    pub const fn stock_rule(self) -> StockRule {
        match self {
            ProductType::Sample => StockRule::RequireQuantity(1),
            ProductType::Simple
            | ProductType::Virtual
            | ProductType::Configurable
            | ProductType::Grouped
            | ProductType::Bundle
            | ProductType::Downloadable
            | ProductType::Booking => StockRule::AlwaysAvailable,
        }
    }

    /// Grouped products expose the quantity changer per child instead.
    pub const fn has_top_level_quantity_changer(self) -> bool {
        !matches!(self, ProductType::Grouped)
    }

    /// Configurable products carry their attributes through `variants`.
    pub const fn exposes_super_attributes(self) -> bool {
        !matches!(self, ProductType::Configurable)
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CatalogError::validation(format!("unknown product type: {s}")))
    }
}

/// Catalog product as seen by the storefront.
///
/// A listing row may wrap the catalog product it was flattened from in
/// `product`; see [`Product::effective`]. Which child collections are populated
/// depends on `product_type`; empty collections for other types are normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub product_type: ProductType,
    pub name: String,
    pub url_key: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub product: Option<Box<Product>>,
    pub variants: Vec<Product>,
    pub super_attributes: Vec<Attribute>,
    pub grouped_products: Vec<GroupedProductLink>,
    pub downloadable_links: Vec<DownloadableLink>,
    pub downloadable_samples: Vec<DownloadableSample>,
}

impl Product {
    /// Create a product with empty descriptions, zero price and no children.
    pub fn new(
        id: ProductId,
        product_type: ProductType,
        sku: impl Into<String>,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let sku = sku.into();
        Self {
            id,
            url_key: sku.to_lowercase(),
            sku,
            product_type,
            name: name.into(),
            short_description: None,
            description: None,
            price: 0.0,
            created_at,
            updated_at: created_at,
            product: None,
            variants: Vec::new(),
            super_attributes: Vec::new(),
            grouped_products: Vec::new(),
            downloadable_links: Vec::new(),
            downloadable_samples: Vec::new(),
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_url_key(mut self, url_key: impl Into<String>) -> Self {
        self.url_key = url_key.into();
        self
    }

    pub fn with_descriptions(
        mut self,
        short_description: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.short_description = Some(short_description.into());
        self.description = Some(description.into());
        self
    }

    /// Wrap the catalog product this listing row was flattened from.
    pub fn wrapping(mut self, inner: Product) -> Self {
        self.product = Some(Box::new(inner));
        self
    }

    pub fn with_variants(mut self, variants: Vec<Product>) -> Self {
        self.variants = variants;
        self
    }

    pub fn with_super_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.super_attributes = attributes;
        self
    }

    pub fn with_grouped_products(mut self, links: Vec<GroupedProductLink>) -> Self {
        self.grouped_products = links;
        self
    }

    pub fn with_downloadables(
        mut self,
        links: Vec<DownloadableLink>,
        samples: Vec<DownloadableSample>,
    ) -> Self {
        self.downloadable_links = links;
        self.downloadable_samples = samples;
        self
    }

    /// The product whose type, id and collections drive serialization: the
    /// wrapped catalog product when present, otherwise `self`.
    pub fn effective(&self) -> &Product {
        self.product.as_deref().unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn test_product(id: u64, product_type: ProductType) -> Product {
        Product::new(ProductId::new(id), product_type, "SKU-001", "Test Product", test_time())
    }

    #[test]
    fn stored_price_types() {
        for t in [ProductType::Simple, ProductType::Virtual, ProductType::Sample] {
            assert_eq!(t.price_rule(), PriceRule::StoredPrice, "{t}");
        }
    }

    #[test]
    fn composite_types_use_type_renderer() {
        for t in [
            ProductType::Configurable,
            ProductType::Downloadable,
            ProductType::Grouped,
            ProductType::Bundle,
            ProductType::Booking,
        ] {
            assert_eq!(t.price_rule(), PriceRule::TypeRenderer, "{t}");
        }
    }

    #[test]
    fn only_sample_checks_quantity() {
        for t in ProductType::ALL {
            let expected = if t == ProductType::Sample {
                StockRule::RequireQuantity(1)
            } else {
                StockRule::AlwaysAvailable
            };
            assert_eq!(t.stock_rule(), expected, "{t}");
        }
    }

    #[test]
    fn top_level_flags_exclude_one_type_each() {
        assert!(!ProductType::Grouped.has_top_level_quantity_changer());
        assert!(ProductType::Grouped.exposes_super_attributes());
        assert!(!ProductType::Configurable.exposes_super_attributes());
        assert!(ProductType::Configurable.has_top_level_quantity_changer());
    }

    #[test]
    fn parse_rejects_unknown_type() {
        let err = "subscription".parse::<ProductType>().unwrap_err();
        match err {
            CatalogError::Validation(msg) => assert!(msg.contains("subscription")),
            _ => panic!("Expected Validation error for unknown type"),
        }
    }

    #[test]
    fn type_serializes_lowercase() {
        let json = serde_json::to_value(ProductType::Downloadable).unwrap();
        assert_eq!(json, serde_json::json!("downloadable"));
    }

    #[test]
    fn effective_unwraps_inner_product() {
        let inner = test_product(7, ProductType::Bundle);
        let listing = test_product(100, ProductType::Simple).wrapping(inner.clone());

        assert_eq!(listing.effective(), &inner);
        assert_eq!(listing.effective().id, ProductId::new(7));
    }

    #[test]
    fn effective_defaults_to_self() {
        let product = test_product(3, ProductType::Simple);
        assert_eq!(product.effective().id, product.id);
    }

    #[test]
    fn new_derives_url_key_from_sku() {
        let product = test_product(1, ProductType::Simple);
        assert_eq!(product.url_key, "sku-001");
        assert_eq!(product.created_at, product.updated_at);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_type() -> impl Strategy<Value = ProductType> {
            proptest::sample::select(ProductType::ALL.to_vec())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: type names round-trip through `FromStr`.
            #[test]
            fn display_parses_back(t in any_type()) {
                prop_assert_eq!(t.to_string().parse::<ProductType>().unwrap(), t);
            }

            /// Property: a type never hides both the quantity changer and super attributes.
            #[test]
            fn top_level_flags_never_both_off(t in any_type()) {
                prop_assert!(t.has_top_level_quantity_changer() || t.exposes_super_attributes());
            }
        }
    }
}
