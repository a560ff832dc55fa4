use serde::{Deserialize, Serialize};

use catalog_core::{AggregateRoot, Entity};

use crate::dto::ProductDto;
use crate::error::{ProductError, ProductResult};
use crate::value_objects::{DiscountPercentage, Money, ProductId, ProductTitle, Stock};

pub(crate) const MAX_DESCRIPTION_CHARS: usize = 5000;
pub(crate) const MAX_RATING: f64 = 5.0;

/// Timestamps and codes carried through from the backend unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMeta {
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
}

/// Parameters for [`Product::create`].
///
/// The required fields go through [`NewProduct::new`]; optional fields default
/// when left unset (no discount, rating 0, no images, empty thumbnail, no tags).
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: ProductId,
    pub title: ProductTitle,
    pub description: String,
    pub category: String,
    pub price: Money,
    pub stock: Stock,
    pub discount_percentage: Option<DiscountPercentage>,
    pub rating: Option<f64>,
    pub images: Option<Vec<String>>,
    pub thumbnail: Option<String>,
    pub tags: Option<Vec<String>>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub meta: Option<ProductMeta>,
}

impl NewProduct {
    pub fn new(
        id: ProductId,
        title: ProductTitle,
        description: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        stock: Stock,
    ) -> Self {
        Self {
            id,
            title,
            description: description.into(),
            category: category.into(),
            price,
            stock,
            discount_percentage: None,
            rating: None,
            images: None,
            thumbnail: None,
            tags: None,
            brand: None,
            sku: None,
            meta: None,
        }
    }

    pub fn discount_percentage(mut self, discount: DiscountPercentage) -> Self {
        self.discount_percentage = Some(discount);
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn images(mut self, images: Vec<String>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn meta(mut self, meta: ProductMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Aggregate root: Product.
///
/// Identity is fixed at creation. Title, description, category, price, discount
/// and stock change only through the mutation methods below; the remaining
/// fields are fixed once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    title: ProductTitle,
    description: String,
    category: String,
    price: Money,
    discount_percentage: DiscountPercentage,
    stock: Stock,
    rating: f64,
    images: Vec<String>,
    thumbnail: String,
    tags: Vec<String>,
    brand: Option<String>,
    sku: Option<String>,
    meta: Option<ProductMeta>,
}

impl Product {
    pub fn create(params: NewProduct) -> ProductResult<Self> {
        let rating = params.rating.unwrap_or(0.0);

        ensure_description(&params.description)?;
        ensure_category(&params.category)?;
        ensure_rating(rating)?;

        Ok(Self {
            id: params.id,
            title: params.title,
            description: params.description,
            category: params.category,
            price: params.price,
            discount_percentage: params.discount_percentage.unwrap_or_default(),
            stock: params.stock,
            rating,
            images: params.images.unwrap_or_default(),
            thumbnail: params.thumbnail.unwrap_or_default(),
            tags: params.tags.unwrap_or_default(),
            brand: params.brand,
            sku: params.sku,
            meta: params.meta,
        })
    }

    /// Rehydrate from the flat transfer shape.
    pub fn from_dto(dto: ProductDto) -> ProductResult<Self> {
        let params = NewProduct {
            id: ProductId::create(dto.id)?,
            title: ProductTitle::create(&dto.title)?,
            description: dto.description,
            category: dto.category,
            price: Money::create(dto.price)?,
            stock: Stock::create(f64::from(dto.stock))?,
            discount_percentage: Some(DiscountPercentage::create(dto.discount_percentage)?),
            rating: Some(dto.rating),
            images: Some(dto.images),
            thumbnail: Some(dto.thumbnail),
            tags: Some(dto.tags),
            brand: dto.brand,
            sku: dto.sku,
            meta: dto.meta,
        };
        Self::create(params)
    }

    pub fn to_dto(&self) -> ProductDto {
        ProductDto {
            id: self.id.value(),
            title: self.title.value().to_string(),
            description: self.description.clone(),
            category: self.category.clone(),
            price: self.price.amount(),
            discount_percentage: self.discount_percentage.value(),
            stock: self.stock.value(),
            rating: self.rating,
            images: self.images.clone(),
            thumbnail: self.thumbnail.clone(),
            tags: self.tags.clone(),
            brand: self.brand.clone(),
            sku: self.sku.clone(),
            meta: self.meta.clone(),
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn title(&self) -> &ProductTitle {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn discount_percentage(&self) -> DiscountPercentage {
        self.discount_percentage
    }

    pub fn stock(&self) -> Stock {
        self.stock
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    pub fn meta(&self) -> Option<&ProductMeta> {
        self.meta.as_ref()
    }

    /// Price after the current discount.
    pub fn discounted_price(&self) -> f64 {
        self.discount_percentage.apply_to(self.price.amount())
    }

    pub fn update_title(&mut self, title: ProductTitle) {
        self.title = title;
    }

    pub fn update_description(&mut self, description: impl Into<String>) -> ProductResult<()> {
        let description = description.into();
        ensure_description(&description)?;
        self.description = description;
        Ok(())
    }

    pub fn update_price(&mut self, price: Money) {
        self.price = price;
    }

    pub fn update_category(&mut self, category: impl Into<String>) -> ProductResult<()> {
        let category = category.into();
        ensure_category(&category)?;
        self.category = category;
        Ok(())
    }

    pub fn apply_discount(&mut self, discount: DiscountPercentage) {
        self.discount_percentage = discount;
    }

    pub fn update_stock(&mut self, stock: Stock) {
        self.stock = stock;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Product {
    fn aggregate_type() -> &'static str {
        "products.product"
    }
}

fn ensure_description(description: &str) -> ProductResult<()> {
    if description.trim().is_empty() {
        return Err(ProductError::InvalidProduct(
            "Product description cannot be empty".to_string(),
        ));
    }
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_CHARS {
        return Err(ProductError::InvalidProduct(format!(
            "Product description cannot exceed {MAX_DESCRIPTION_CHARS} characters, got: {len}"
        )));
    }
    Ok(())
}

fn ensure_category(category: &str) -> ProductResult<()> {
    if category.trim().is_empty() {
        return Err(ProductError::InvalidProduct(
            "Product category cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn ensure_rating(rating: f64) -> ProductResult<()> {
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(ProductError::InvalidProduct(format!(
            "Rating must be between 0 and {MAX_RATING}, got: {rating}"
        )));
    }
    Ok(())
}
