//! Flat transfer shape of a `Product`, used to cross the domain/infrastructure
//! boundary.

use serde::{Deserialize, Serialize};

use crate::product::ProductMeta;

/// Plain-data mirror of every field stored by [`crate::Product`].
///
/// `discountPercentage` and `rating` default to 0 when absent from the source
/// data; the list fields default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    pub stock: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ProductMeta>,
}
