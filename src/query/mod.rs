//! Derived read queries over the product collection
//!
//! Stateless: every function takes the snapshot it operates on. The
//! mean is recomputed from the given slice on each call, never cached.

mod engine;

pub use engine::{above_mean, below_mean, cheapest, mean_price, most_expensive, round_to_cents};
