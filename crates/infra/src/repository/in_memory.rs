use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};

use catalog_products::{
    Product, ProductId, ProductMeta, ProductPage, ProductRepository, RepositoryError,
};

/// In-memory product store ordered by id.
///
/// Intended for tests/dev. Reads scan the whole map.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store as-is; `meta` is not stamped.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products.into_iter().map(|p| (p.id(), p)).collect();
        Self {
            products: RwLock::new(products),
        }
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.read()?.is_empty())
    }

    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<ProductId, Product>>, RepositoryError> {
        self.products
            .read()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, BTreeMap<ProductId, Product>>, RepositoryError> {
        self.products
            .write()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))
    }

    fn page_where(
        &self,
        limit: u32,
        skip: u32,
        matches: impl Fn(&Product) -> bool,
    ) -> Result<ProductPage, RepositoryError> {
        let map = self.read()?;
        let hits: Vec<&Product> = map.values().filter(|p| matches(p)).collect();
        let total = hits.len() as u64;
        let products = hits
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(ProductPage::new(products, total))
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// `createdAt` survives from the stored copy (or the incoming one), `updatedAt`
/// is always now. Barcode and QR code come from the incoming product.
fn stamp(product: Product, stored: Option<&Product>) -> Result<Product, RepositoryError> {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let incoming = product.meta().cloned();
    let created_at = stored
        .and_then(|p| p.meta())
        .or(incoming.as_ref())
        .map(|m| m.created_at.clone())
        .unwrap_or_else(|| now.clone());

    let mut dto = product.to_dto();
    dto.meta = Some(ProductMeta {
        created_at,
        updated_at: now,
        barcode: incoming.as_ref().and_then(|m| m.barcode.clone()),
        qr_code: incoming.and_then(|m| m.qr_code),
    });
    Ok(Product::from_dto(dto)?)
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        tracing::trace!(product_id = %id, "find_by_id");
        Ok(self.read()?.get(id).cloned())
    }

    async fn find_all(&self, limit: u32, skip: u32) -> Result<ProductPage, RepositoryError> {
        tracing::trace!(limit, skip, "find_all");
        self.page_where(limit, skip, |_| true)
    }

    async fn find_by_category(
        &self,
        category: &str,
        limit: u32,
        skip: u32,
    ) -> Result<ProductPage, RepositoryError> {
        tracing::trace!(category, limit, skip, "find_by_category");
        let category = category.trim().to_lowercase();
        self.page_where(limit, skip, |p| p.category().to_lowercase() == category)
    }

    async fn search(
        &self,
        query: &str,
        limit: u32,
        skip: u32,
    ) -> Result<ProductPage, RepositoryError> {
        tracing::trace!(query, limit, skip, "search");
        let needle = query.trim().to_lowercase();
        self.page_where(limit, skip, |p| {
            contains_ignore_case(p.title().value(), &needle)
                || contains_ignore_case(p.description(), &needle)
                || contains_ignore_case(p.category(), &needle)
                || p.brand().is_some_and(|b| contains_ignore_case(b, &needle))
        })
    }

    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        let id = product.id();
        let mut map = self.write()?;
        let stamped = stamp(product, map.get(&id))?;
        let replaced = map.insert(id, stamped.clone()).is_some();
        tracing::debug!(
            product_id = %id,
            client_generated = id.is_client_generated(),
            replaced,
            "product stored"
        );
        Ok(stamped)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let removed = self.write()?.remove(id).is_some();
        tracing::debug!(product_id = %id, removed, "product removed");
        Ok(())
    }

    async fn exists(&self, id: &ProductId) -> Result<bool, RepositoryError> {
        Ok(self.read()?.contains_key(id))
    }

    async fn exists_by_title(&self, title: &str) -> Result<bool, RepositoryError> {
        Ok(self
            .read()?
            .values()
            .any(|p| p.title().matches_ignore_case(title)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_products::{Money, NewProduct, ProductTitle, Stock};
    use proptest::prelude::*;

    fn product(id: i64, title: &str, category: &str) -> Product {
        Product::create(
            NewProduct::new(
                ProductId::create(id).unwrap(),
                ProductTitle::create(title).unwrap(),
                format!("{title} description"),
                category,
                Money::create(10.0).unwrap(),
                Stock::create(1.0).unwrap(),
            )
            .brand("Acme"),
        )
        .unwrap()
    }

    fn catalog() -> InMemoryProductRepository {
        InMemoryProductRepository::with_products([
            product(3, "Red Lipstick", "beauty"),
            product(1, "iPhone 9", "smartphones"),
            product(2, "Mascara", "Beauty"),
            product(4, "Oak Table", "furniture"),
        ])
    }

    #[tokio::test]
    async fn find_all_pages_in_id_order() {
        let repo = catalog();

        let page = repo.find_all(2, 1).await.unwrap();

        assert_eq!(page.total, 4);
        let ids: Vec<i64> = page.products.iter().map(|p| p.id().value()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn skip_past_end_is_empty_with_total() {
        let page = catalog().find_all(10, 50).await.unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.total, 4);
    }

    #[tokio::test]
    async fn category_match_ignores_case() {
        let page = catalog().find_by_category("BEAUTY", 10, 0).await.unwrap();
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn search_covers_title_description_category_and_brand() {
        let repo = catalog();

        assert_eq!(repo.search("iphone", 10, 0).await.unwrap().total, 1);
        assert_eq!(repo.search("TABLE DESC", 10, 0).await.unwrap().total, 1);
        assert_eq!(repo.search("furn", 10, 0).await.unwrap().total, 1);
        assert_eq!(repo.search("acme", 10, 0).await.unwrap().total, 4);
        assert_eq!(repo.search("nothing", 10, 0).await.unwrap().total, 0);
    }

    #[tokio::test]
    async fn save_stamps_meta_and_keeps_created_at() {
        let repo = InMemoryProductRepository::new();

        let first = repo.save(product(7, "Lamp", "home")).await.unwrap();
        let meta = first.meta().unwrap().clone();
        assert!(chrono::DateTime::parse_from_rfc3339(&meta.created_at).is_ok());
        assert_eq!(meta.created_at, meta.updated_at);

        let second = repo.save(product(7, "Lamp v2", "home")).await.unwrap();
        let meta2 = second.meta().unwrap();
        assert_eq!(meta2.created_at, meta.created_at);
        assert!(meta2.updated_at >= meta.updated_at);

        assert_eq!(repo.len().unwrap(), 1);
        let stored = repo.find_by_id(&ProductId::create(7).unwrap()).await.unwrap();
        assert_eq!(stored.unwrap().title().value(), "Lamp v2");
    }

    #[tokio::test]
    async fn delete_and_exists() {
        let repo = catalog();
        let id = ProductId::create(1).unwrap();

        assert!(repo.exists(&id).await.unwrap());
        repo.delete(&id).await.unwrap();
        assert!(!repo.exists(&id).await.unwrap());
        assert_eq!(repo.find_by_id(&id).await.unwrap(), None);
        repo.delete(&id).await.unwrap();
        assert_eq!(repo.len().unwrap(), 3);
    }

    #[tokio::test]
    async fn exists_by_title_is_exact_and_case_insensitive() {
        let repo = catalog();

        assert!(repo.exists_by_title("mascara").await.unwrap());
        assert!(repo.exists_by_title("RED LIPSTICK").await.unwrap());
        assert!(!repo.exists_by_title("Red").await.unwrap());
    }

    #[tokio::test]
    async fn save_upserts_both_id_kinds() {
        let repo = InMemoryProductRepository::new();
        let server = product(7, "Lamp", "home");
        let client = product(12_345, "Desk", "home");
        assert!(client.id().is_client_generated());

        repo.save(server.clone()).await.unwrap();
        repo.save(client.clone()).await.unwrap();
        repo.save(client.clone()).await.unwrap();

        assert_eq!(repo.len().unwrap(), 2);
        assert!(repo.exists(&server.id()).await.unwrap());
        assert!(repo.exists(&client.id()).await.unwrap());
    }

    #[tokio::test]
    async fn poisoned_lock_is_reported_as_unavailable() {
        let repo = catalog();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = repo.products.write().unwrap();
            panic!("poison");
        }));

        let unavailable = RepositoryError::Unavailable("lock poisoned".to_string());
        assert_eq!(repo.len(), Err(unavailable.clone()));
        assert_eq!(repo.is_empty(), Err(unavailable.clone()));
        assert_eq!(repo.find_all(10, 0).await, Err(unavailable));
    }

    proptest! {
        #[test]
        fn page_size_is_bounded_by_limit_and_remaining(limit in 0u32..8, skip in 0u32..8) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let page = rt.block_on(catalog().find_all(limit, skip)).unwrap();

            let remaining = 4u32.saturating_sub(skip);
            prop_assert_eq!(page.total, 4);
            prop_assert_eq!(page.products.len() as u32, limit.min(remaining));
        }
    }
}
