use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_core::{BookingProductId, DownloadableLinkId, ProductId};
use storefront_products::{
    AppointmentSlot, Attribute, AttributeOption, BookingProduct, BookingType, DownloadableLink,
    DownloadableSample, DownloadableSource, ProductType, RentingType, SwatchType, TableSlot,
};

use crate::app::collaborators::{
    BundleConfig, CurrencyOptions, EventTicket, RatingShare, WeekdaySlots,
};

// -------------------------
// Core product resource
// -------------------------

/// Price as shown to the client: the stored amount, or whatever the type's
/// price renderer produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PriceValue {
    Amount(f64),
    Rendered(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSummary {
    pub total: u64,
    pub total_rating: u64,
    pub average_rating: f64,
    pub percentage: Vec<RatingShare>,
}

impl ReviewSummary {
    pub fn empty() -> Self {
        Self {
            total: 0,
            total_rating: 0,
            average_rating: 0.0,
            percentage: Vec::new(),
        }
    }
}

/// Storefront representation of a product.
///
/// Optional fields are omitted from the JSON when `None`, never emitted as
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SerializedProduct {
    pub id: ProductId,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub name: String,
    pub url_key: String,
    pub price: PriceValue,
    pub formated_price: PriceValue,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub sku: String,
    pub images: Vec<String>,
    pub base_image: String,
    pub variants: Vec<SerializedProduct>,
    pub in_stock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formated_special_price: Option<String>,
    pub reviews: ReviewSummary,
    pub is_saved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_quantity_changer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_attributes: Option<Vec<SerializedAttribute>>,
    #[serde(flatten)]
    pub extension: Option<TypeExtension>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SerializedAttribute {
    pub id: storefront_core::AttributeId,
    pub code: String,
    #[serde(rename = "type")]
    pub attribute_type: String,
    pub name: String,
    pub swatch_type: Option<SwatchType>,
    pub options: Vec<AttributeOption>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Attribute> for SerializedAttribute {
    fn from(attribute: &Attribute) -> Self {
        Self {
            id: attribute.id,
            code: attribute.code.clone(),
            attribute_type: attribute.attribute_type.clone(),
            name: attribute.name.clone(),
            swatch_type: attribute.swatch_type,
            options: attribute.options.clone(),
            created_at: attribute.created_at,
            updated_at: attribute.updated_at,
        }
    }
}

// -------------------------
// Type-specific blocks
// -------------------------

/// Fields only present for one product type. Flattened into the product object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeExtension {
    Grouped(GroupedExtension),
    Downloadable(DownloadableExtension),
    Bundle(BundleExtension),
    Booking(BookingExtension),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedExtension {
    pub grouped_products: Vec<GroupedProductEntry>,
}

/// A grouped member: its own full resource with a currency-formatted
/// `formated_price` and its quantity-changer flag, plus saleability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedProductEntry {
    #[serde(flatten)]
    pub product: SerializedProduct,
    #[serde(rename = "isSaleable")]
    pub is_saleable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadableExtension {
    pub downloadable_links: Vec<DownloadableLinkEntry>,
    pub downloadable_samples: Vec<DownloadableSampleEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadableSampleEntry {
    #[serde(flatten)]
    pub sample: DownloadableSample,
    pub download_url: String,
}

/// A downloadable link. `price` and `sample_download_url` only appear for
/// links that carry a sample file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadableLinkEntry {
    pub id: DownloadableLinkId,
    pub title: Option<String>,
    pub url: Option<String>,
    pub file: Option<String>,
    pub file_name: Option<String>,
    #[serde(rename = "type")]
    pub source: DownloadableSource,
    pub sample_url: Option<String>,
    pub sample_file: Option<String>,
    pub sample_file_name: Option<String>,
    pub sample_type: Option<DownloadableSource>,
    pub downloads: u32,
    pub sort_order: u32,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_download_url: Option<String>,
}

impl From<&DownloadableLink> for DownloadableLinkEntry {
    fn from(link: &DownloadableLink) -> Self {
        Self {
            id: link.id,
            title: link.title.clone(),
            url: link.url.clone(),
            file: link.file.clone(),
            file_name: link.file_name.clone(),
            source: link.source,
            sample_url: link.sample_url.clone(),
            sample_file: link.sample_file.clone(),
            sample_file_name: link.sample_file_name.clone(),
            sample_type: link.sample_source,
            downloads: link.downloads,
            sort_order: link.sort_order,
            product_id: link.product_id,
            created_at: link.created_at,
            updated_at: link.updated_at,
            price: None,
            sample_download_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleExtension {
    pub currency_options: CurrencyOptions,
    pub bundle_options: BundleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingExtension {
    pub booking_product: BookingProductEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingProductEntry {
    pub id: BookingProductId,
    pub product_id: ProductId,
    #[serde(rename = "type")]
    pub booking_type: BookingType,
    pub qty: Option<u32>,
    pub location: Option<String>,
    pub show_location: bool,
    pub available_every_week: Option<bool>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
    pub slot_index_route: String,
    #[serde(flatten)]
    pub details: Option<BookingDetails>,
}

impl BookingProductEntry {
    pub fn new(record: &BookingProduct, slot_index_route: String) -> Self {
        Self {
            id: record.id,
            product_id: record.product_id,
            booking_type: record.booking_type,
            qty: record.qty,
            location: record.location.clone(),
            show_location: record.show_location,
            available_every_week: record.available_every_week,
            available_from: record.available_from,
            available_to: record.available_to,
            slot_index_route,
            details: None,
        }
    }
}

/// Booking sub-type fields, flattened into `booking_product`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BookingDetails {
    Appointment(AppointmentDetails),
    Event(EventDetails),
    Rental(RentalDetails),
    Table(TableDetails),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentDetails {
    pub today_slots_html: String,
    pub week_slot_durations: Vec<WeekdaySlots>,
    pub appointment_slot: Option<AppointmentSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDetails {
    pub tickets: Vec<EventTicket>,
    pub event_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RentalDetails {
    pub renting_type: RentingType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDetails {
    pub today_slots_html: String,
    pub week_slot_durations: Vec<WeekdaySlots>,
    pub table_slot: Option<TableSlot>,
}

// -------------------------
// Response envelopes
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}
