//! Module catalog: the read-only curriculum supplied to the engine.
//!
//! The catalog module provides:
//! - Module records, levels, and quiz questions
//! - The shipped catalog and JSON catalog loading
//! - Per-learner module status (completed, available, ready-to-buy, locked)
//! - Quiz grading
//! - Price quotes and bundles

pub mod builtin;
#[allow(clippy::module_inception)]
pub mod catalog;
pub mod pricing;
pub mod quiz;
pub mod status;
pub mod types;

pub use catalog::ModuleCatalog;
pub use pricing::{builtin_bundles, quote, Bundle, PaymentPlan, Quote};
pub use quiz::grade;
pub use status::{module_status, ModuleStatus};
pub use types::{Module, ModuleCode, ModuleLevel, QuizQuestion};
