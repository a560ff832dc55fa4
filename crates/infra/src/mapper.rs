use catalog_application::ProductFormData;
use catalog_products::{Product, ProductDto, ProductResult};

use crate::api::ApiProduct;

/// Conversions between API payloads and the `Product` aggregate.
///
/// Fields only the API knows about (weight, dimensions, reviews and the rest)
/// do not survive `to_domain`; `to_api` leaves them `None`.
pub struct ProductMapper;

impl ProductMapper {
    /// Validates through [`Product::from_dto`], so malformed payloads are
    /// rejected with the same errors as any other construction.
    pub fn to_domain(api: ApiProduct) -> ProductResult<Product> {
        Product::from_dto(ProductDto {
            id: api.id,
            title: api.title,
            description: api.description,
            category: api.category,
            price: api.price,
            discount_percentage: api.discount_percentage,
            stock: api.stock,
            rating: api.rating,
            images: api.images,
            thumbnail: api.thumbnail,
            tags: api.tags.unwrap_or_default(),
            brand: api.brand,
            sku: api.sku,
            meta: api.meta,
        })
    }

    pub fn to_api(product: &Product) -> ApiProduct {
        let dto = product.to_dto();
        ApiProduct {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            category: dto.category,
            price: dto.price,
            discount_percentage: dto.discount_percentage,
            rating: dto.rating,
            stock: dto.stock,
            tags: Some(dto.tags),
            brand: dto.brand,
            sku: dto.sku,
            weight: None,
            dimensions: None,
            warranty_information: None,
            shipping_information: None,
            availability_status: None,
            reviews: None,
            return_policy: None,
            minimum_order_quantity: None,
            meta: dto.meta,
            images: dto.images,
            thumbnail: dto.thumbnail,
        }
    }

    /// Payload for create/update requests.
    pub fn to_form_data(product: &Product) -> ProductFormData {
        let dto = product.to_dto();
        ProductFormData {
            title: dto.title,
            description: dto.description,
            price: dto.price,
            discount_percentage: Some(dto.discount_percentage),
            stock: f64::from(dto.stock),
            category: dto.category,
            tags: Some(dto.tags),
            brand: dto.brand,
        }
    }
}
