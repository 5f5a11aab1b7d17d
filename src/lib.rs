//! # invoicer
//!
//! Invoice numbering and totals for desktop invoice authoring.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Invoice numbers come from a durable counter ([`core::SequenceAllocator`])
//! that never blocks an export: store failures fall back to `INV-00001` and
//! are reported through `tracing`.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use invoicer::core::*;
//! use rust_decimal_macros::dec;
//!
//! let draft = DraftBuilder::new()
//!     .client(ClientBuilder::new("Kumar Traders").build())
//!     .bank(BankDetailsBuilder::new("State Bank").build())
//!     .add_item("Web design", 2, dec!(10.00), dec!(18))
//!     .build();
//!
//! let mut numbers = SequenceAllocator::new(MemoryCounterStore::with_content("41"));
//! let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
//! let snapshot = prepare_export(&draft, &mut numbers, &CurrencyTable, date).unwrap();
//!
//! assert_eq!(snapshot.id.to_string(), "INV-00041");
//! assert_eq!(snapshot.totals.grand_total, "23.60");
//! assert_eq!(complete_export(&mut numbers, true).unwrap().to_string(), "INV-00042");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Draft, numbering, totals, export |
//! | `logging` | `logging::init()` with a `tracing-subscriber` env filter |

pub mod config;

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "logging")]
pub mod logging;

pub use crate::config::AppConfig;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
