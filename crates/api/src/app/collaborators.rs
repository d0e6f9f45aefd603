//! Capability interfaces the product resource consumes.
//!
//! Pricing, inventory, images, reviews, bundle configuration and booking
//! scheduling all live in the surrounding platform. The resource layer only
//! calls through these traits and reshapes what comes back.

use std::sync::Arc;

use serde::Serialize;

use storefront_core::{BookingProductId, CatalogResult, ProductId};
use storefront_products::{BookingProduct, Product};

/// Type-specific price lookups.
pub trait PriceCalculator: Send + Sync {
    /// Rendered price of a composite product (ranges, "as low as", ...).
    fn display_price(&self, product: &Product) -> CatalogResult<String>;

    fn has_special_price(&self, product: &Product) -> CatalogResult<bool>;

    fn special_price(&self, product: &Product) -> CatalogResult<f64>;
}

/// Per-type capability object of a product.
pub trait TypeCapabilities: Send + Sync {
    fn is_saleable(&self, product: &Product) -> bool;

    fn show_quantity_box(&self, product: &Product) -> bool;

    fn have_sufficient_quantity(&self, product: &Product, qty: u32) -> CatalogResult<bool>;
}

pub trait ImageProvider: Send + Sync {
    fn gallery_images(&self, product: &Product) -> CatalogResult<Vec<String>>;

    fn base_image(&self, product: &Product) -> CatalogResult<String>;
}

/// Review aggregation. Only `total_reviews` is consulted for products without reviews.
pub trait ReviewAggregator: Send + Sync {
    fn total_reviews(&self, product: &Product) -> CatalogResult<u64>;

    fn total_rating(&self, product: &Product) -> CatalogResult<u64>;

    fn average_rating(&self, product: &Product) -> CatalogResult<f64>;

    fn rating_percentages(&self, product: &Product) -> CatalogResult<Vec<RatingShare>>;
}

pub trait CurrencyFormatter: Send + Sync {
    fn format(&self, amount: f64) -> String;

    /// Symbol metadata the client-side price widgets need.
    fn js_symbols(&self) -> CurrencyOptions;
}

pub trait RouteGenerator: Send + Sync {
    fn download_sample(&self, kind: DownloadKind, id: u64) -> String;

    fn booking_slots(&self, booking_id: BookingProductId) -> String;
}

pub trait BundleConfigProvider: Send + Sync {
    fn bundle_config(&self, product: &Product) -> CatalogResult<BundleConfig>;
}

pub trait BookingLookup: Send + Sync {
    fn find_by_product_id(&self, product_id: ProductId) -> CatalogResult<Option<BookingProduct>>;
}

/// Slot rendering for appointment and table bookings.
pub trait SlotHelper: Send + Sync {
    fn today_slots_html(&self, booking: &BookingProduct) -> CatalogResult<String>;

    fn week_slot_durations(&self, booking: &BookingProduct) -> CatalogResult<Vec<WeekdaySlots>>;
}

pub trait EventTicketHelper: Send + Sync {
    fn tickets(&self, booking: &BookingProduct) -> CatalogResult<Vec<EventTicket>>;

    fn event_date(&self, booking: &BookingProduct) -> CatalogResult<String>;
}

/// Which download a sample URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadKind {
    Sample,
    Link,
}

impl DownloadKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            DownloadKind::Sample => "sample",
            DownloadKind::Link => "link",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingShare {
    pub rating: u8,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyOptions {
    pub symbol: String,
    pub decimal: String,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceLine {
    pub price: f64,
    pub formated_price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundlePrices {
    pub regular_price: PriceLine,
    pub final_price: PriceLine,
}

/// One product a bundle option lets the shopper pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleSelection {
    pub id: u64,
    pub product_id: ProductId,
    pub name: String,
    pub qty: u32,
    pub is_default: bool,
    pub sort_order: u32,
    pub price: BundlePrices,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleOption {
    pub id: u64,
    pub label: String,
    #[serde(rename = "type")]
    pub option_type: String,
    pub is_required: bool,
    pub sort_order: u32,
    pub products: Vec<BundleSelection>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BundleConfig {
    pub options: Vec<BundleOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotRange {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdaySlots {
    pub name: String,
    pub slots: Vec<SlotRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventTicket {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub formated_price: String,
    pub qty: u32,
}

/// Every collaborator the product resource needs, injected at construction.
#[derive(Clone)]
pub struct Collaborators {
    pub prices: Arc<dyn PriceCalculator>,
    pub capabilities: Arc<dyn TypeCapabilities>,
    pub images: Arc<dyn ImageProvider>,
    pub reviews: Arc<dyn ReviewAggregator>,
    pub currency: Arc<dyn CurrencyFormatter>,
    pub routes: Arc<dyn RouteGenerator>,
    pub bundles: Arc<dyn BundleConfigProvider>,
    pub bookings: Arc<dyn BookingLookup>,
    pub appointment_slots: Arc<dyn SlotHelper>,
    pub table_slots: Arc<dyn SlotHelper>,
    pub event_tickets: Arc<dyn EventTicketHelper>,
}

impl core::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

/// Route generator building absolute storefront URLs under a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRoutes {
    base_url: String,
}

impl UrlRoutes {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl RouteGenerator for UrlRoutes {
    fn download_sample(&self, kind: DownloadKind, id: u64) -> String {
        format!(
            "{}/downloadable/download-sample/{}/{}",
            self.base_url,
            kind.as_str(),
            id
        )
    }

    fn booking_slots(&self, booking_id: BookingProductId) -> String {
        format!("{}/booking-product/{}/slots", self.base_url, booking_id)
    }
}
