//! The product store
//!
//! A single `RwLock` guards the collection and the id counter. Mutating
//! operations hold the write guard across the whole sequence
//! {read state, compute candidate, persist, commit}, so creates,
//! updates and deletes never interleave with each other. Reads share
//! the read side and never observe a half-applied mutation.
//!
//! The candidate collection is written to disk BEFORE it replaces the
//! in-memory state: a failed rewrite leaves memory untouched and the
//! operation reports the persistence error.

use tokio::sync::RwLock;
use tracing::info;

use crate::persist::CsvFile;
use crate::query;

use super::errors::{StoreError, StoreResult};
use super::product::{Product, ProductDraft};

/// Fixed seed for the identifier counter. Ids below this value belong
/// to the seed rows shipped in the data file; the counter is not
/// derived from loaded data.
const ID_SEED: u64 = 41;

struct Inner {
    products: Vec<Product>,
    next_id: u64,
}

/// The shared record store. One instance per process, handed to the
/// HTTP layer as an `Arc`.
pub struct ProductStore {
    file: CsvFile,
    inner: RwLock<Inner>,
}

impl ProductStore {
    /// Opens the store by loading the full collection from `file`.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing or malformed; the process must not
    /// start without a readable collection.
    pub fn open(file: CsvFile) -> StoreResult<Self> {
        let products = file.load()?;
        info!(count = products.len(), path = %file.path().display(), "coleção carregada");

        Ok(Self {
            file,
            inner: RwLock::new(Inner {
                products,
                next_id: ID_SEED,
            }),
        })
    }

    /// Path of the backing file.
    pub fn data_path(&self) -> &std::path::Path {
        self.file.path()
    }

    // ==================
    // Mutations
    // ==================

    /// Assigns the next id, appends the product, persists and returns
    /// the new record. The counter advances only on success.
    pub async fn create(&self, draft: ProductDraft) -> StoreResult<Product> {
        let mut inner = self.inner.write().await;

        let product = draft.into_product(inner.next_id);

        let mut candidate = inner.products.clone();
        candidate.push(product.clone());
        self.file.save(&candidate)?;

        inner.products = candidate;
        inner.next_id += 1;

        info!(id = product.id, "produto cadastrado");
        Ok(product)
    }

    /// Replaces the mutable fields of the product with `id`, keeping
    /// the id itself. Persists and returns the updated record.
    pub async fn update(&self, id: u64, draft: ProductDraft) -> StoreResult<Product> {
        let mut inner = self.inner.write().await;

        let pos = inner
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut candidate = inner.products.clone();
        candidate[pos] = draft.into_product(id);
        let updated = candidate[pos].clone();
        self.file.save(&candidate)?;

        inner.products = candidate;

        info!(id, "produto atualizado");
        Ok(updated)
    }

    /// Removes the product with `id` and persists the shrunk
    /// collection. The counter is never rewound.
    pub async fn delete(&self, id: u64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;

        let pos = inner
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut candidate = inner.products.clone();
        candidate.remove(pos);
        self.file.save(&candidate)?;

        inner.products = candidate;

        info!(id, "produto apagado");
        Ok(())
    }

    // ==================
    // Reads
    // ==================

    /// Snapshot of the full collection, in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        self.inner.read().await.products.clone()
    }

    /// Returns the product with `id`.
    pub async fn get(&self, id: u64) -> StoreResult<Product> {
        let inner = self.inner.read().await;
        inner
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    // ==================
    // Derived queries
    // ==================

    /// Product with the greatest price; first in collection order on a
    /// tie.
    pub async fn most_expensive(&self) -> StoreResult<Product> {
        let inner = self.inner.read().await;
        query::most_expensive(&inner.products)
            .cloned()
            .ok_or(StoreError::EmptyCatalog)
    }

    /// Product with the least price; first in collection order on a
    /// tie.
    pub async fn cheapest(&self) -> StoreResult<Product> {
        let inner = self.inner.read().await;
        query::cheapest(&inner.products)
            .cloned()
            .ok_or(StoreError::EmptyCatalog)
    }

    /// Unrounded arithmetic mean of all prices, recomputed from the
    /// live collection on every call.
    pub async fn mean_price(&self) -> StoreResult<f64> {
        let inner = self.inner.read().await;
        query::mean_price(&inner.products).ok_or(StoreError::EmptyCatalog)
    }

    /// Products priced at or above the current mean, in order.
    pub async fn above_mean(&self) -> Vec<Product> {
        let inner = self.inner.read().await;
        query::above_mean(&inner.products)
    }

    /// Products priced strictly below the current mean, in order.
    pub async fn below_mean(&self) -> Vec<Product> {
        let inner = self.inner.read().await;
        query::below_mean(&inner.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str = "id,nome,categoria,preco\n";

    fn draft(name: &str, price: f64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            category: "Teste".to_string(),
            price,
        }
    }

    fn empty_store(dir: &TempDir) -> ProductStore {
        let path = dir.path().join("produtos.csv");
        std::fs::write(&path, HEADER).unwrap();
        ProductStore::open(CsvFile::new(path)).unwrap()
    }

    #[test]
    fn test_open_fails_without_data_file() {
        let dir = TempDir::new().unwrap();
        let result = ProductStore::open(CsvFile::new(dir.path().join("missing.csv")));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_ids_start_at_seed_and_stay_monotone() {
        let dir = TempDir::new().unwrap();
        let store = empty_store(&dir);

        let first = store.create(draft("A", 1.0)).await.unwrap();
        let second = store.create(draft("B", 2.0)).await.unwrap();
        assert_eq!(first.id, 41);
        assert_eq!(second.id, 42);

        // Deleting never rewinds the counter
        store.delete(second.id).await.unwrap();
        let third = store.create(draft("C", 3.0)).await.unwrap();
        assert_eq!(third.id, 43);
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = empty_store(&dir);

        let created = store.create(draft("Mouse", 159.9)).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_neighbors() {
        let dir = TempDir::new().unwrap();
        let store = empty_store(&dir);

        let a = store.create(draft("A", 1.0)).await.unwrap();
        let b = store.create(draft("B", 2.0)).await.unwrap();

        let updated = store.update(a.id, draft("A2", 9.0)).await.unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.name, "A2");

        // The other record is untouched
        assert_eq!(store.get(b.id).await.unwrap(), b);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let dir = TempDir::new().unwrap();
        let store = empty_store(&dir);

        let a = store.create(draft("A", 1.0)).await.unwrap();
        let b = store.create(draft("B", 2.0)).await.unwrap();

        store.delete(a.id).await.unwrap();

        assert!(matches!(
            store.get(a.id).await,
            Err(StoreError::NotFound(id)) if id == a.id
        ));
        let remaining = store.list().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b.id);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found_everywhere() {
        let dir = TempDir::new().unwrap();
        let store = empty_store(&dir);

        assert!(matches!(store.get(9999).await, Err(StoreError::NotFound(9999))));
        assert!(matches!(
            store.update(9999, draft("X", 1.0)).await,
            Err(StoreError::NotFound(9999))
        ));
        assert!(matches!(store.delete(9999).await, Err(StoreError::NotFound(9999))));
    }

    #[tokio::test]
    async fn test_empty_catalog_queries() {
        let dir = TempDir::new().unwrap();
        let store = empty_store(&dir);

        assert!(matches!(
            store.most_expensive().await,
            Err(StoreError::EmptyCatalog)
        ));
        assert!(matches!(store.cheapest().await, Err(StoreError::EmptyCatalog)));
        assert!(matches!(store.mean_price().await, Err(StoreError::EmptyCatalog)));
        assert!(store.above_mean().await.is_empty());
        assert!(store.below_mean().await.is_empty());
    }

    #[tokio::test]
    async fn test_mutations_rewrite_the_file() {
        let dir = TempDir::new().unwrap();
        let store = empty_store(&dir);
        let path = store.data_path().to_path_buf();

        let a = store.create(draft("A", 1.5)).await.unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with(HEADER));
        assert!(contents.contains("41,A,Teste,1.5"));

        store.delete(a.id).await.unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, HEADER);
    }

    #[tokio::test]
    async fn test_reopen_reads_persisted_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("produtos.csv");
        std::fs::write(&path, HEADER).unwrap();

        {
            let store = ProductStore::open(CsvFile::new(&path)).unwrap();
            store.create(draft("Mouse", 159.9)).await.unwrap();
        }

        let store = ProductStore::open(CsvFile::new(&path)).unwrap();
        let products = store.list().await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Mouse");
    }
}
