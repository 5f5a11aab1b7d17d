//! Core invoice types, numbering, and totals.
//!
//! This module provides the draft an editing session mutates, the durable
//! invoice number sequence, and the pure totals computation.

mod builder;
mod currencies;
mod draft;
mod error;
mod export;
mod numbering;
mod store;
pub mod totals;
mod types;
mod validation;

pub use builder::*;
pub use currencies::*;
pub use draft::*;
pub use error::*;
pub use export::*;
pub use numbering::*;
pub use store::*;
pub use totals::{
    compute_item_total, compute_totals, format_amount, try_compute_item_total, try_compute_totals,
};
pub use types::*;
pub use validation::*;
