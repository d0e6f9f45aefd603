//! Booking records attached to products of type `booking`.
//!
//! The record lives in its own table keyed by `product_id`; the slot tables
//! hang off it depending on [`BookingType`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{BookingProductId, ProductId};

/// Booking sub-type. Sub-types are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    /// Plain bookable slots; the storefront shows nothing beyond the record.
    Default,
    Appointment,
    Event,
    Rental,
    Table,
    /// Any sub-type this catalog does not know; treated like `Default`.
    #[serde(other)]
    Unrecognized,
}

/// One opening window, `HH:MM` wall-clock times.
///
/// `day` is the weekday (0 = Sunday) when slots differ per day, and absent when
/// the same windows apply to every day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
    pub from: String,
    pub to: String,
}

impl SlotWindow {
    pub fn every_day(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            day: None,
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn on(day: u8, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            day: Some(day),
            from: from.into(),
            to: to.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentSlot {
    /// Minutes per appointment.
    pub duration: u32,
    /// Minutes between appointments.
    pub break_time: u32,
    pub same_slot_all_days: bool,
    pub slots: Vec<SlotWindow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentingType {
    Daily,
    Hourly,
    DailyHourly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalSlot {
    pub renting_type: RentingType,
    pub daily_price: f64,
    pub hourly_price: f64,
    pub same_slot_all_days: bool,
    pub slots: Vec<SlotWindow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TablePriceType {
    Guest,
    Table,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSlot {
    pub price_type: TablePriceType,
    pub guest_limit: u32,
    pub duration: u32,
    pub break_time: u32,
    /// Minutes of notice required before a reservation.
    pub prevent_scheduling_before: u32,
    pub same_slot_all_days: bool,
    pub slots: Vec<SlotWindow>,
}

/// Booking record of a product. Only the slot table matching `booking_type`
/// is expected to be populated.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingProduct {
    pub id: BookingProductId,
    pub product_id: ProductId,
    pub booking_type: BookingType,
    pub qty: Option<u32>,
    pub location: Option<String>,
    pub show_location: bool,
    pub available_every_week: Option<bool>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
    pub appointment_slot: Option<AppointmentSlot>,
    pub rental_slot: Option<RentalSlot>,
    pub table_slot: Option<TableSlot>,
}

impl BookingProduct {
    pub fn new(id: BookingProductId, product_id: ProductId, booking_type: BookingType) -> Self {
        Self {
            id,
            product_id,
            booking_type,
            qty: None,
            location: None,
            show_location: false,
            available_every_week: None,
            available_from: None,
            available_to: None,
            appointment_slot: None,
            rental_slot: None,
            table_slot: None,
        }
    }
}
