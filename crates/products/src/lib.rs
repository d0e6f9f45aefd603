//! Catalog domain model consumed by the storefront resources.
//!
//! These types are read-only snapshots handed over by the platform's catalog
//! (no IO, no HTTP, no storage). The only behaviour here is the per-type
//! dispatch table in [`product::ProductType`].

pub mod attribute;
pub mod booking;
pub mod downloadable;
pub mod grouped;
pub mod product;

pub use attribute::{Attribute, AttributeOption, SwatchType};
pub use booking::{
    AppointmentSlot, BookingProduct, BookingType, RentalSlot, RentingType, SlotWindow,
    TablePriceType, TableSlot,
};
pub use downloadable::{DownloadableLink, DownloadableSample, DownloadableSource};
pub use grouped::GroupedProductLink;
pub use product::{PriceRule, Product, ProductType, StockRule};
