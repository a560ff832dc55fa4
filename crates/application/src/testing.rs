//! Recording repository double for use-case tests.

use std::sync::Mutex;

use async_trait::async_trait;

use catalog_products::{
    Money, NewProduct, Product, ProductId, ProductPage, ProductRepository, ProductTitle,
    RepositoryError, Stock,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    FindById(i64),
    FindAll { limit: u32, skip: u32 },
    FindByCategory { category: String, limit: u32, skip: u32 },
    Search { query: String, limit: u32, skip: u32 },
    Save(Product),
    Delete(i64),
    Exists(i64),
    ExistsByTitle(String),
}

/// Serves a fixed product list and records every call it receives.
#[derive(Debug, Default)]
pub(crate) struct StubRepository {
    products: Vec<Product>,
    total: Option<u64>,
    title_exists: bool,
    write_failure: Option<RepositoryError>,
    calls: Mutex<Vec<Call>>,
}

impl StubRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    /// Report this total instead of the product count.
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_title_exists(mut self, exists: bool) -> Self {
        self.title_exists = exists;
        self
    }

    pub fn failing_writes(mut self, err: RepositoryError) -> Self {
        self.write_failure = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn saved(&self) -> Vec<Product> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Save(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    /// Slice of the fixed product list; `total` counts the whole list
    /// unless overridden.
    fn page(&self, limit: u32, skip: u32) -> ProductPage {
        ProductPage::new(
            self.products
                .iter()
                .skip(skip as usize)
                .take(limit as usize)
                .cloned()
                .collect(),
            self.total.unwrap_or(self.products.len() as u64),
        )
    }
}

#[async_trait]
impl ProductRepository for StubRepository {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        self.record(Call::FindById(id.value()));
        Ok(self.products.iter().find(|p| p.id() == *id).cloned())
    }

    async fn find_all(&self, limit: u32, skip: u32) -> Result<ProductPage, RepositoryError> {
        self.record(Call::FindAll { limit, skip });
        Ok(self.page(limit, skip))
    }

    async fn find_by_category(
        &self,
        category: &str,
        limit: u32,
        skip: u32,
    ) -> Result<ProductPage, RepositoryError> {
        self.record(Call::FindByCategory {
            category: category.to_string(),
            limit,
            skip,
        });
        Ok(self.page(limit, skip))
    }

    async fn search(
        &self,
        query: &str,
        limit: u32,
        skip: u32,
    ) -> Result<ProductPage, RepositoryError> {
        self.record(Call::Search {
            query: query.to_string(),
            limit,
            skip,
        });
        Ok(self.page(limit, skip))
    }

    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        self.record(Call::Save(product.clone()));
        match &self.write_failure {
            Some(err) => Err(err.clone()),
            None => Ok(product),
        }
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        self.record(Call::Delete(id.value()));
        match &self.write_failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn exists(&self, id: &ProductId) -> Result<bool, RepositoryError> {
        self.record(Call::Exists(id.value()));
        Ok(self.products.iter().any(|p| p.id() == *id))
    }

    async fn exists_by_title(&self, title: &str) -> Result<bool, RepositoryError> {
        self.record(Call::ExistsByTitle(title.to_string()));
        Ok(self.title_exists)
    }
}

pub(crate) fn product(id: i64, title: &str) -> Product {
    Product::create(
        NewProduct::new(
            ProductId::create(id).unwrap(),
            ProductTitle::create(title).unwrap(),
            "Test description",
            "electronics",
            Money::create(100.0).unwrap(),
            Stock::create(50.0).unwrap(),
        )
        .rating(4.5),
    )
    .unwrap()
}
