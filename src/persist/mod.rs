//! CSV persistence for the product collection
//!
//! The persistence model is deliberately simple: the whole file is
//! loaded once at startup and rewritten in full, header included,
//! after every successful mutation. There is no partial-write
//! protection; durability is traded for simplicity.

mod csv_file;
mod errors;

pub use csv_file::CsvFile;
pub use errors::{PersistError, PersistResult};
