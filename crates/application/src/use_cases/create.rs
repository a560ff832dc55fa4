use serde::{Deserialize, Serialize};

use catalog_products::{
    DiscountPercentage, Money, NewProduct, Product, ProductDomainService, ProductError, ProductId,
    ProductRepository, ProductTitle, Stock,
};

use crate::error::CatalogResult;
use crate::form::ProductFormData;

/// Grey 300x200 "No Image" SVG used as image and thumbnail for new products.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='300' height='200'%3E%3Crect fill='%23e2e2e2' width='300' height='200'/%3E%3Ctext fill='%236b7280' font-family='sans-serif' font-size='14' x='50%25' y='50%25' text-anchor='middle' dy='.3em'%3ENo Image%3C/text%3E%3C/svg%3E";

/// How the create use case detects a title collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "strategy")]
pub enum DuplicateCheck {
    /// Ask the repository (`exists_by_title`).
    #[default]
    Repository,
    /// Search for the title and run [`ProductDomainService`] over every
    /// match, fetched `limit` at a time.
    CandidateScan { limit: u32 },
}

/// Create a product from form input under a client-minted id.
pub struct CreateProductUseCase<R> {
    repository: R,
    domain_service: ProductDomainService,
    duplicate_check: DuplicateCheck,
}

impl<R> CreateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            domain_service: ProductDomainService::new(),
            duplicate_check: DuplicateCheck::default(),
        }
    }

    pub fn with_duplicate_check(mut self, duplicate_check: DuplicateCheck) -> Self {
        self.duplicate_check = duplicate_check;
        self
    }

    /// Steps, in order:
    /// 1. build value objects (any failure returns before the repository is contacted)
    /// 2. duplicate-title check (a duplicate returns before `save`)
    /// 3. build the aggregate with the placeholder image
    /// 4. save and return what the repository returns
    pub async fn execute(&self, data: &ProductFormData, client_id: i64) -> CatalogResult<Product> {
        tracing::debug!(client_id, title = %data.title, "creating product");

        let id = ProductId::create_client_id(client_id)?;
        let title = ProductTitle::create(&data.title)?;
        let price = Money::create(data.price)?;
        let stock = Stock::create(data.stock)?;
        let discount = match data.discount_percentage {
            Some(value) => DiscountPercentage::create(value)?,
            None => DiscountPercentage::none(),
        };

        let build = || {
            let mut params = NewProduct::new(
                id,
                title.clone(),
                data.description.clone(),
                data.category.clone(),
                price.clone(),
                stock,
            )
            .discount_percentage(discount)
            .images(vec![PLACEHOLDER_IMAGE.to_string()])
            .thumbnail(PLACEHOLDER_IMAGE);
            params.tags = data.tags.clone();
            params.brand = data.brand.clone();
            Product::create(params)
        };

        let product = match self.duplicate_check {
            DuplicateCheck::Repository => {
                if self.repository.exists_by_title(title.value()).await? {
                    tracing::warn!(title = %title, "duplicate product title");
                    return Err(ProductError::duplicate_title(&title).into());
                }
                build()?
            }
            DuplicateCheck::CandidateScan { limit } => {
                let product = build()?;
                self.scan_for_duplicate(&product, limit.max(1)).await?;
                product
            }
        };

        let saved = self.repository.save(product).await?;
        tracing::info!(product_id = %saved.id(), "product created");
        Ok(saved)
    }

    /// Pages through `search` until the matches run out or one of them
    /// collides with the candidate's title.
    async fn scan_for_duplicate(&self, candidate: &Product, page_size: u32) -> CatalogResult<()> {
        let title = candidate.title();
        let mut skip = 0u32;
        loop {
            let page = self.repository.search(title.value(), page_size, skip).await?;
            if let Err(err) = self
                .domain_service
                .validate_product_creation(candidate, &page.products)
            {
                tracing::warn!(title = %title, skip, "duplicate product title");
                return Err(err.into());
            }

            let fetched = page.products.len() as u32;
            skip = skip.saturating_add(fetched);
            if fetched == 0 || u64::from(skip) >= page.total {
                return Ok(());
            }
        }
    }
}
