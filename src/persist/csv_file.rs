//! Whole-file CSV adapter
//!
//! File layout: one header row (`id,nome,categoria,preco`) followed by
//! one row per product, in collection order. `save` truncates and
//! rewrites the file in place; a crash mid-write can corrupt it. An
//! atomic temp-file-then-rename would close that window but is not
//! part of the persistence contract here.

use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use crate::store::Product;

use super::errors::{PersistError, PersistResult};

/// Column order of the backing file.
const HEADER: [&str; 4] = ["id", "nome", "categoria", "preco"];

/// Handle to the backing CSV file.
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full collection into memory.
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Load` if the file is missing, unreadable
    /// or any row fails to parse.
    pub fn load(&self) -> PersistResult<Vec<Product>> {
        let mut reader =
            csv::Reader::from_path(&self.path).map_err(|e| PersistError::load(&self.path, e))?;

        let mut products = Vec::new();
        for row in reader.deserialize() {
            let product: Product = row.map_err(|e| PersistError::load(&self.path, e))?;
            products.push(product);
        }

        Ok(products)
    }

    /// Overwrites the entire file with `products`, header included.
    ///
    /// The header is written explicitly so that an empty collection
    /// still leaves a well-formed file behind.
    pub fn save(&self, products: &[Product]) -> PersistResult<()> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| PersistError::save(&self.path, e))?;

        writer
            .write_record(HEADER)
            .map_err(|e| PersistError::save(&self.path, e))?;

        for product in products {
            writer
                .serialize(product)
                .map_err(|e| PersistError::save(&self.path, e))?;
        }

        writer
            .flush()
            .map_err(|e| PersistError::save(&self.path, csv::Error::from(e)))?;

        Ok(())
    }
}
