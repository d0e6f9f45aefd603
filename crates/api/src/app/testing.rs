//! In-memory collaborators for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use storefront_core::{
    AttributeId, BookingProductId, CatalogError, CatalogResult, DownloadableLinkId,
    DownloadableSampleId, ProductId,
};
use storefront_products::{
    Attribute, AttributeOption, BookingProduct, DownloadableLink, DownloadableSample,
    DownloadableSource, Product, ProductType, SwatchType,
};

use crate::app::collaborators::{
    BookingLookup, BundleConfig, BundleConfigProvider, BundleOption, BundlePrices,
    BundleSelection, Collaborators, CurrencyFormatter, CurrencyOptions, EventTicket,
    EventTicketHelper, ImageProvider, PriceCalculator, PriceLine, RatingShare, ReviewAggregator,
    SlotHelper, SlotRange, TypeCapabilities, UrlRoutes, WeekdaySlots,
};

pub const BASE_URL: &str = "https://shop.test";

pub fn test_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap()
}

pub fn product(id: u64, product_type: ProductType) -> Product {
    Product::new(
        ProductId::new(id),
        product_type,
        format!("SKU-{id}"),
        format!("Product {id}"),
        test_time(),
    )
}

pub fn attribute(id: u64, code: &str) -> Attribute {
    Attribute {
        id: AttributeId::new(id),
        code: code.to_string(),
        attribute_type: "select".to_string(),
        name: code.to_uppercase(),
        swatch_type: Some(SwatchType::Dropdown),
        options: vec![AttributeOption {
            id: id * 10,
            admin_name: "Red".to_string(),
            label: Some("Red".to_string()),
            swatch_value: None,
        }],
        created_at: test_time(),
        updated_at: test_time(),
    }
}

pub fn sample(id: u64, product_id: u64) -> DownloadableSample {
    DownloadableSample {
        id: DownloadableSampleId::new(id),
        title: Some(format!("Sample {id}")),
        url: None,
        file: Some(format!("samples/{id}.pdf")),
        file_name: Some(format!("{id}.pdf")),
        source: DownloadableSource::File,
        sort_order: 0,
        product_id: ProductId::new(product_id),
        created_at: test_time(),
        updated_at: test_time(),
    }
}

pub fn link(id: u64, product_id: u64, price: f64, sample_file: Option<&str>) -> DownloadableLink {
    DownloadableLink {
        id: DownloadableLinkId::new(id),
        title: Some(format!("Link {id}")),
        price,
        url: None,
        file: Some(format!("links/{id}.zip")),
        file_name: Some(format!("{id}.zip")),
        source: DownloadableSource::File,
        sample_url: None,
        sample_file: sample_file.map(str::to_string),
        sample_file_name: sample_file.map(str::to_string),
        sample_source: sample_file.map(|_| DownloadableSource::File),
        downloads: 3,
        sort_order: 0,
        product_id: ProductId::new(product_id),
        created_at: test_time(),
        updated_at: test_time(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FakeReviews {
    pub total: u64,
    pub total_rating: u64,
    pub average_rating: f64,
    pub percentage: Vec<RatingShare>,
}

/// One struct answering for the whole platform. Per-product answers are keyed
/// by the effective product id.
#[derive(Debug)]
pub struct FakePlatform {
    pub special_prices: HashMap<ProductId, f64>,
    pub reviews: HashMap<ProductId, FakeReviews>,
    pub bookings: HashMap<ProductId, BookingProduct>,
    pub out_of_stock: Vec<ProductId>,
    pub not_saleable: Vec<ProductId>,
    pub failing_prices: bool,
    pub review_calls: Mutex<Vec<&'static str>>,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self {
            special_prices: HashMap::new(),
            reviews: HashMap::new(),
            bookings: HashMap::new(),
            out_of_stock: Vec::new(),
            not_saleable: Vec::new(),
            failing_prices: false,
            review_calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakePlatform {
    pub fn review_calls(&self) -> Vec<&'static str> {
        self.review_calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.review_calls.lock().unwrap().push(call);
    }

    fn reviews_for(&self, product: &Product) -> FakeReviews {
        self.reviews.get(&product.id).cloned().unwrap_or(FakeReviews {
            total: 0,
            total_rating: 0,
            average_rating: 0.0,
            percentage: Vec::new(),
        })
    }
}

impl PriceCalculator for FakePlatform {
    fn display_price(&self, product: &Product) -> CatalogResult<String> {
        if self.failing_prices {
            return Err(CatalogError::collaborator("price calculator", "price index offline"));
        }
        Ok(format!("<span>rendered {}</span>", product.id))
    }

    fn has_special_price(&self, product: &Product) -> CatalogResult<bool> {
        Ok(self.special_prices.contains_key(&product.id))
    }

    fn special_price(&self, product: &Product) -> CatalogResult<f64> {
        self.special_prices
            .get(&product.id)
            .copied()
            .ok_or_else(|| CatalogError::not_found("special price", product.id))
    }
}

impl TypeCapabilities for FakePlatform {
    fn is_saleable(&self, product: &Product) -> bool {
        !self.not_saleable.contains(&product.id)
    }

    fn show_quantity_box(&self, product: &Product) -> bool {
        !matches!(product.product_type, ProductType::Virtual | ProductType::Downloadable)
    }

    fn have_sufficient_quantity(&self, product: &Product, qty: u32) -> CatalogResult<bool> {
        assert_eq!(qty, 1);
        Ok(!self.out_of_stock.contains(&product.id))
    }
}

impl ImageProvider for FakePlatform {
    fn gallery_images(&self, product: &Product) -> CatalogResult<Vec<String>> {
        Ok(vec![format!("https://img.test/{}/1.jpg", product.id)])
    }

    fn base_image(&self, product: &Product) -> CatalogResult<String> {
        Ok(format!("https://img.test/{}/base.jpg", product.id))
    }
}

impl ReviewAggregator for FakePlatform {
    fn total_reviews(&self, product: &Product) -> CatalogResult<u64> {
        self.record("total_reviews");
        Ok(self.reviews_for(product).total)
    }

    fn total_rating(&self, product: &Product) -> CatalogResult<u64> {
        self.record("total_rating");
        Ok(self.reviews_for(product).total_rating)
    }

    fn average_rating(&self, product: &Product) -> CatalogResult<f64> {
        self.record("average_rating");
        Ok(self.reviews_for(product).average_rating)
    }

    fn rating_percentages(&self, product: &Product) -> CatalogResult<Vec<RatingShare>> {
        self.record("rating_percentages");
        Ok(self.reviews_for(product).percentage)
    }
}

impl CurrencyFormatter for FakePlatform {
    fn format(&self, amount: f64) -> String {
        format!("${amount:.2}")
    }

    fn js_symbols(&self) -> CurrencyOptions {
        CurrencyOptions {
            symbol: "$".to_string(),
            decimal: ".".to_string(),
            format: "%s%v".to_string(),
        }
    }
}

impl BundleConfigProvider for FakePlatform {
    fn bundle_config(&self, product: &Product) -> CatalogResult<BundleConfig> {
        Ok(BundleConfig {
            options: vec![BundleOption {
                id: 1,
                label: "Choose a case".to_string(),
                option_type: "radio".to_string(),
                is_required: true,
                sort_order: 0,
                products: vec![BundleSelection {
                    id: 11,
                    product_id: ProductId::new(product.id.get() + 1000),
                    name: "Leather case".to_string(),
                    qty: 1,
                    is_default: true,
                    sort_order: 0,
                    price: BundlePrices {
                        regular_price: PriceLine {
                            price: 20.0,
                            formated_price: "$20.00".to_string(),
                        },
                        final_price: PriceLine {
                            price: 15.0,
                            formated_price: "$15.00".to_string(),
                        },
                    },
                }],
            }],
        })
    }
}

impl BookingLookup for FakePlatform {
    fn find_by_product_id(&self, product_id: ProductId) -> CatalogResult<Option<BookingProduct>> {
        Ok(self.bookings.get(&product_id).cloned())
    }
}

impl EventTicketHelper for FakePlatform {
    fn tickets(&self, _booking: &BookingProduct) -> CatalogResult<Vec<EventTicket>> {
        Ok(vec![EventTicket {
            id: 1,
            name: "General admission".to_string(),
            description: None,
            price: 25.0,
            formated_price: "$25.00".to_string(),
            qty: 100,
        }])
    }

    fn event_date(&self, _booking: &BookingProduct) -> CatalogResult<String> {
        Ok("1 Nov 2026, 18:00 - 22:00".to_string())
    }
}

/// Slot helper tagging its output so appointment and table helpers can be told apart.
#[derive(Debug)]
pub struct FakeSlots {
    pub label: &'static str,
}

impl SlotHelper for FakeSlots {
    fn today_slots_html(&self, booking: &BookingProduct) -> CatalogResult<String> {
        Ok(format!("<ul class=\"{}\" data-booking=\"{}\"></ul>", self.label, booking.id))
    }

    fn week_slot_durations(&self, _booking: &BookingProduct) -> CatalogResult<Vec<WeekdaySlots>> {
        Ok(vec![WeekdaySlots {
            name: "Mon".to_string(),
            slots: vec![SlotRange {
                from: "09:00".to_string(),
                to: "17:00".to_string(),
            }],
        }])
    }
}

pub fn booking(id: u64, product_id: u64, booking_type: storefront_products::BookingType) -> BookingProduct {
    BookingProduct::new(BookingProductId::new(id), ProductId::new(product_id), booking_type)
}

pub fn collaborators(platform: Arc<FakePlatform>) -> Collaborators {
    Collaborators {
        prices: platform.clone(),
        capabilities: platform.clone(),
        images: platform.clone(),
        reviews: platform.clone(),
        currency: platform.clone(),
        routes: Arc::new(UrlRoutes::new(BASE_URL)),
        bundles: platform.clone(),
        bookings: platform.clone(),
        appointment_slots: Arc::new(FakeSlots { label: "appointment" }),
        table_slots: Arc::new(FakeSlots { label: "table" }),
        event_tickets: platform,
    }
}
