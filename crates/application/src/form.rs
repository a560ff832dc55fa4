//! Raw product input as it arrives from a form or API payload, plus the
//! field-level checks run before it reaches the domain.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const MAX_TITLE_CHARS: usize = 200;
const MAX_DESCRIPTION_CHARS: usize = 5000;
const MAX_BRAND_CHARS: usize = 100;
const MAX_PRICE: f64 = 999_999.0;
const MAX_STOCK: f64 = 999_999.0;

/// Input of the create use case.
///
/// Numbers are kept raw (`f64`) so that the value objects decide what is valid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFormData {
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    pub stock: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// Partial update: only the fields that are `Some` are applied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.discount_percentage.is_none()
            && self.stock.is_none()
            && self.category.is_none()
    }

    /// Names of the fields this update touches, in application order.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        if self.price.is_some() {
            fields.push("price");
        }
        if self.discount_percentage.is_some() {
            fields.push("discountPercentage");
        }
        if self.stock.is_some() {
            fields.push("stock");
        }
        if self.category.is_some() {
            fields.push("category");
        }
        fields
    }
}

impl From<ProductFormData> for ProductUpdate {
    fn from(form: ProductFormData) -> Self {
        Self {
            title: Some(form.title),
            description: Some(form.description),
            price: Some(form.price),
            discount_percentage: form.discount_percentage,
            stock: Some(form.stock),
            category: Some(form.category),
        }
    }
}

/// Field-keyed validation messages (keys use the camelCase wire names).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    fn push(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl core::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

impl ProductFormData {
    /// Check every field and return a cleaned copy (strings trimmed, category,
    /// brand and tags sanitized, discount defaulted to 0, tags to empty).
    pub fn validate(&self) -> Result<ProductFormData, FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push("title", "Title is required");
        } else if title.chars().count() > MAX_TITLE_CHARS {
            errors.push("title", "Title must be 200 characters or less");
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.push("description", "Description is required");
        } else if description.chars().count() > MAX_DESCRIPTION_CHARS {
            errors.push("description", "Description must be 5000 characters or less");
        }

        if !self.price.is_finite() {
            errors.push("price", "Price must be a number");
        } else if self.price < 0.0 {
            errors.push("price", "Price must be 0 or greater");
        } else if self.price > MAX_PRICE {
            errors.push("price", "Price must be 999999 or less");
        }

        let discount = self.discount_percentage.unwrap_or(0.0);
        if !discount.is_finite() {
            errors.push("discountPercentage", "Discount must be a number");
        } else if discount < 0.0 {
            errors.push("discountPercentage", "Discount must be 0 or greater");
        } else if discount > 100.0 {
            errors.push("discountPercentage", "Discount must be 100% or less");
        }

        if !self.stock.is_finite() || self.stock.fract() != 0.0 {
            errors.push("stock", "Stock must be an integer");
        } else if self.stock < 0.0 {
            errors.push("stock", "Stock must be 0 or greater");
        } else if self.stock > MAX_STOCK {
            errors.push("stock", "Stock must be 999999 or less");
        }

        let category = sanitize_string(&self.category);
        if category.is_empty() {
            errors.push("category", "Category is required");
        }

        let brand = self
            .brand
            .as_deref()
            .map(sanitize_string)
            .filter(|b| !b.is_empty());
        if brand
            .as_ref()
            .is_some_and(|b| b.chars().count() > MAX_BRAND_CHARS)
        {
            errors.push("brand", "Brand must be 100 characters or less");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let tags = self
            .tags
            .iter()
            .flatten()
            .map(|t| sanitize_string(t))
            .filter(|t| !t.is_empty())
            .collect();

        Ok(ProductFormData {
            title: title.to_string(),
            description: description.to_string(),
            price: self.price,
            discount_percentage: Some(discount),
            stock: self.stock,
            category,
            tags: Some(tags),
            brand,
        })
    }
}

/// Trim, drop ASCII control characters, and collapse whitespace runs.
pub fn sanitize_string(input: &str) -> String {
    let stripped: String = input
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_control())
        .collect();
    let mut out = String::with_capacity(stripped.len());
    let mut in_space = false;
    for c in stripped.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
