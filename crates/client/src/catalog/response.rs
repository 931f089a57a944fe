//! Catalog response types and normalization.

use bookshelf_core::{Book, ListPrice};
use serde::Deserialize;

/// Raw response from the volumes endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Option<Vec<Volume>>,
}

/// One catalog item.
#[derive(Debug, Default, Deserialize)]
pub struct Volume {
    #[serde(default, rename = "volumeInfo")]
    pub volume_info: Option<VolumeInfo>,
    #[serde(default, rename = "saleInfo")]
    pub sale_info: Option<SaleInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub authors: Option<Vec<String>>,
    #[serde(rename = "infoLink")]
    pub info_link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SaleInfo {
    #[serde(rename = "listPrice")]
    pub list_price: Option<RawPrice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPrice {
    pub amount: Option<f64>,
    #[serde(rename = "currencyCode")]
    pub currency_code: Option<String>,
}

impl From<Volume> for Book {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info.unwrap_or_default();
        let price = volume
            .sale_info
            .and_then(|s| s.list_price)
            .map(|p| ListPrice { amount: p.amount, currency: p.currency_code })
            .unwrap_or_default();

        Book::new(info.title, info.description, info.authors, price, info.info_link)
    }
}

impl VolumesResponse {
    /// Normalize every item, keeping catalog order.
    pub fn into_books(self) -> Vec<Book> {
        self.items
            .unwrap_or_default()
            .into_iter()
            .map(Book::from)
            .collect()
    }
}
