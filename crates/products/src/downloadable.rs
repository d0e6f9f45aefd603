//! Downloadable links (the purchasable files) and their free samples.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DownloadableLinkId, DownloadableSampleId, ProductId};

/// Where a downloadable payload lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadableSource {
    Url,
    File,
}

/// Free sample attached to a downloadable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadableSample {
    pub id: DownloadableSampleId,
    pub title: Option<String>,
    pub url: Option<String>,
    pub file: Option<String>,
    pub file_name: Option<String>,
    #[serde(rename = "type")]
    pub source: DownloadableSource,
    pub sort_order: u32,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Purchasable link of a downloadable product, optionally with its own sample.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadableLink {
    pub id: DownloadableLinkId,
    pub title: Option<String>,
    pub price: f64,
    pub url: Option<String>,
    pub file: Option<String>,
    pub file_name: Option<String>,
    pub source: DownloadableSource,
    pub sample_url: Option<String>,
    pub sample_file: Option<String>,
    pub sample_file_name: Option<String>,
    pub sample_source: Option<DownloadableSource>,
    pub downloads: u32,
    pub sort_order: u32,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DownloadableLink {
    /// Only links with a registered sample file get a sample download.
    pub fn has_sample_file(&self) -> bool {
        self.sample_file.is_some()
    }
}
