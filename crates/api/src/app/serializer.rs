//! Product resource: turns a catalog product into its storefront representation.
//!
//! The product type picks the price rule, the stock rule and the type-specific
//! block; everything else is delegated to [`Collaborators`]. Collaborator
//! failures are returned unchanged.

use storefront_core::{CatalogError, CatalogResult};
use storefront_products::{BookingType, PriceRule, Product, ProductType, StockRule};

use crate::app::collaborators::{Collaborators, DownloadKind};
use crate::app::dto::{
    AppointmentDetails, BookingDetails, BookingExtension, BookingProductEntry, BundleExtension,
    DownloadableExtension, DownloadableLinkEntry, DownloadableSampleEntry, EventDetails,
    GroupedExtension, GroupedProductEntry, PriceValue, RentalDetails, ReviewSummary,
    SerializedAttribute, SerializedProduct, TableDetails, TypeExtension,
};
use crate::config::ResourceConfig;

/// Serializes products for the storefront API.
///
/// Recursion through `variants` and grouped members is bounded by
/// `max_depth`. A cyclic catalog fails with `DepthExceeded`.
#[derive(Debug, Clone)]
pub struct ProductSerializer {
    collaborators: Collaborators,
    max_depth: usize,
}

impl ProductSerializer {
    pub fn new(collaborators: Collaborators, config: &ResourceConfig) -> Self {
        Self {
            collaborators,
            max_depth: config.max_depth,
        }
    }

    pub fn serialize(&self, product: &Product) -> CatalogResult<SerializedProduct> {
        self.serialize_at(product, 0).inspect_err(|err| {
            tracing::warn!(product_id = %product.id, error = %err, "product serialization failed");
        })
    }

    /// Serialize in order, stopping at the first failure.
    pub fn collection(&self, products: &[Product]) -> CatalogResult<Vec<SerializedProduct>> {
        products.iter().map(|p| self.serialize(p)).collect()
    }

    fn collection_at(&self, products: &[Product], depth: usize) -> CatalogResult<Vec<SerializedProduct>> {
        products.iter().map(|p| self.serialize_at(p, depth)).collect()
    }

    fn serialize_at(&self, listing: &Product, depth: usize) -> CatalogResult<SerializedProduct> {
        let product = listing.effective();
        if depth > self.max_depth {
            return Err(CatalogError::DepthExceeded {
                limit: self.max_depth,
                product_id: product.id.to_string(),
            });
        }

        let product_type = product.product_type;
        tracing::debug!(product_id = %product.id, %product_type, depth, "serializing product");

        let price = self.resolve_price(listing, product)?;
        let extension = self.extension(product, depth)?;

        let c = &self.collaborators;
        let (special_price, formated_special_price) = if c.prices.has_special_price(product)? {
            let special = c.prices.special_price(product)?;
            (Some(special), Some(c.currency.format(special)))
        } else {
            (None, None)
        };

        let mut out = SerializedProduct {
            id: product.id,
            product_type,
            name: listing.name.clone(),
            url_key: listing.url_key.clone(),
            formated_price: price.clone(),
            price,
            short_description: listing.short_description.clone(),
            description: listing.description.clone(),
            sku: listing.sku.clone(),
            images: c.images.gallery_images(product)?,
            base_image: c.images.base_image(product)?,
            variants: self.collection_at(&listing.variants, depth + 1)?,
            in_stock: self.resolve_stock(product)?,
            special_price,
            formated_special_price,
            reviews: self.review_summary(product)?,
            is_saved: false,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
            show_quantity_changer: None,
            super_attributes: None,
            extension,
        };

        // Applied after the core fields; only ever adds keys.
        if product_type.has_top_level_quantity_changer() {
            out.show_quantity_changer = Some(c.capabilities.show_quantity_box(product));
        }
        if product_type.exposes_super_attributes() {
            out.super_attributes = Some(
                product
                    .super_attributes
                    .iter()
                    .map(SerializedAttribute::from)
                    .collect(),
            );
        }

        Ok(out)
    }

    fn resolve_price(&self, listing: &Product, product: &Product) -> CatalogResult<PriceValue> {
        match product.product_type.price_rule() {
            PriceRule::StoredPrice => Ok(PriceValue::Amount(listing.price)),
            PriceRule::TypeRenderer => self
                .collaborators
                .prices
                .display_price(product)
                .map(PriceValue::Rendered),
        }
    }

    fn resolve_stock(&self, product: &Product) -> CatalogResult<bool> {
        match product.product_type.stock_rule() {
            StockRule::RequireQuantity(qty) => self
                .collaborators
                .capabilities
                .have_sufficient_quantity(product, qty),
            StockRule::AlwaysAvailable => Ok(true),
        }
    }

    fn review_summary(&self, product: &Product) -> CatalogResult<ReviewSummary> {
        let reviews = &self.collaborators.reviews;
        let total = reviews.total_reviews(product)?;
        if total == 0 {
            return Ok(ReviewSummary::empty());
        }

        Ok(ReviewSummary {
            total,
            total_rating: reviews.total_rating(product)?,
            average_rating: reviews.average_rating(product)?,
            percentage: reviews.rating_percentages(product)?,
        })
    }

    fn extension(&self, product: &Product, depth: usize) -> CatalogResult<Option<TypeExtension>> {
        let extension = match product.product_type {
            ProductType::Grouped => Some(TypeExtension::Grouped(self.grouped(product, depth)?)),
            ProductType::Downloadable => Some(TypeExtension::Downloadable(self.downloadable(product))),
            ProductType::Bundle => Some(TypeExtension::Bundle(self.bundle(product)?)),
            ProductType::Booking => Some(TypeExtension::Booking(self.booking(product)?)),
            ProductType::Simple
            | ProductType::Virtual
            | ProductType::Sample
            | ProductType::Configurable => None,
        };
        Ok(extension)
    }

    fn grouped(&self, product: &Product, depth: usize) -> CatalogResult<GroupedExtension> {
        let c = &self.collaborators;
        let mut grouped_products = Vec::with_capacity(product.grouped_products.len());

        for link in &product.grouped_products {
            let member = &link.associated_product;
            let mut serialized = self.serialize_at(member, depth + 1)?;

            serialized.formated_price = match &serialized.price {
                PriceValue::Amount(amount) => PriceValue::Rendered(c.currency.format(*amount)),
                rendered @ PriceValue::Rendered(_) => rendered.clone(),
            };

            let member = member.effective();
            serialized.show_quantity_changer = Some(c.capabilities.show_quantity_box(member));

            grouped_products.push(GroupedProductEntry {
                product: serialized,
                is_saleable: c.capabilities.is_saleable(member),
            });
        }

        Ok(GroupedExtension { grouped_products })
    }

    fn downloadable(&self, product: &Product) -> DownloadableExtension {
        let c = &self.collaborators;

        let downloadable_samples = product
            .downloadable_samples
            .iter()
            .map(|sample| DownloadableSampleEntry {
                download_url: c.routes.download_sample(DownloadKind::Sample, sample.id.get()),
                sample: sample.clone(),
            })
            .collect();

        let downloadable_links = product
            .downloadable_links
            .iter()
            .map(|link| {
                let mut entry = DownloadableLinkEntry::from(link);
                if link.has_sample_file() {
                    entry.price = Some(c.currency.format(link.price));
                    entry.sample_download_url =
                        Some(c.routes.download_sample(DownloadKind::Link, link.id.get()));
                }
                entry
            })
            .collect();

        DownloadableExtension {
            downloadable_links,
            downloadable_samples,
        }
    }

    fn bundle(&self, product: &Product) -> CatalogResult<BundleExtension> {
        let c = &self.collaborators;
        Ok(BundleExtension {
            currency_options: c.currency.js_symbols(),
            bundle_options: c.bundles.bundle_config(product)?,
        })
    }

    fn booking(&self, product: &Product) -> CatalogResult<BookingExtension> {
        let c = &self.collaborators;
        let record = c
            .bookings
            .find_by_product_id(product.id)?
            .ok_or_else(|| CatalogError::not_found("booking product", product.id))?;

        let mut entry = BookingProductEntry::new(&record, c.routes.booking_slots(record.id));

        entry.details = match record.booking_type {
            BookingType::Appointment => Some(BookingDetails::Appointment(AppointmentDetails {
                today_slots_html: c.appointment_slots.today_slots_html(&record)?,
                week_slot_durations: c.appointment_slots.week_slot_durations(&record)?,
                appointment_slot: record.appointment_slot.clone(),
            })),
            BookingType::Event => Some(BookingDetails::Event(EventDetails {
                tickets: c.event_tickets.tickets(&record)?,
                event_date: c.event_tickets.event_date(&record)?,
            })),
            BookingType::Rental => {
                let slot = record
                    .rental_slot
                    .as_ref()
                    .ok_or_else(|| CatalogError::not_found("rental slot", record.id))?;
                Some(BookingDetails::Rental(RentalDetails {
                    renting_type: slot.renting_type,
                }))
            }
            BookingType::Table => Some(BookingDetails::Table(TableDetails {
                today_slots_html: c.table_slots.today_slots_html(&record)?,
                week_slot_durations: c.table_slots.week_slot_durations(&record)?,
                table_slot: record.table_slot.clone(),
            })),
            BookingType::Default | BookingType::Unrecognized => None,
        };

        Ok(BookingExtension {
            booking_product: entry,
        })
    }
}
