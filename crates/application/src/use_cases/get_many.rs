use catalog_products::{Product, ProductRepository};

use crate::error::CatalogResult;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Listing request. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: u32,
    pub limit: u32,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            category: None,
            search: None,
        }
    }
}

impl ProductQuery {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            ..Self::default()
        }
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn matching(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// One page of products with the paging parameters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// List products: search, else category filter, else everything.
pub struct GetProductsUseCase<R> {
    repository: R,
    default_limit: u32,
    max_limit: u32,
}

impl<R> GetProductsUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            default_limit: DEFAULT_PAGE_SIZE,
            max_limit: MAX_PAGE_SIZE,
        }
    }

    /// A `limit` of 0 falls back to `default_limit`; larger ones are capped at `max_limit`.
    pub fn with_page_limits(mut self, default_limit: u32, max_limit: u32) -> Self {
        self.max_limit = max_limit.max(1);
        self.default_limit = default_limit.clamp(1, self.max_limit);
        self
    }

    /// Exactly one repository method is called per invocation. Blank search
    /// and category strings count as absent.
    pub async fn execute(&self, query: ProductQuery) -> CatalogResult<ProductListing> {
        let page = query.page.max(1);
        let limit = match query.limit {
            0 => self.default_limit,
            n => n.min(self.max_limit),
        };
        let skip = (page - 1).saturating_mul(limit);

        let search = query.search.as_deref().filter(|s| !s.trim().is_empty());
        let category = query.category.as_deref().filter(|c| !c.trim().is_empty());

        tracing::debug!(page, limit, skip, ?search, ?category, "listing products");

        let result = if let Some(search) = search {
            self.repository.search(search, limit, skip).await?
        } else if let Some(category) = category {
            self.repository.find_by_category(category, limit, skip).await?
        } else {
            self.repository.find_all(limit, skip).await?
        };

        Ok(ProductListing {
            products: result.products,
            total: result.total,
            page,
            limit,
        })
    }
}
