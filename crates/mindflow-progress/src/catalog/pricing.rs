//! Price quotes for modules and bundles.
//!
//! Quotes only. Nothing here takes payment.

use serde::{Deserialize, Serialize};

use super::types::{Module, ModuleCode};

/// Number of payments in the installment plan.
pub const INSTALLMENT_COUNT: u32 = 3;

/// How the learner intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPlan {
    #[default]
    Full,
    Installments,
}

/// A computed price quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub module: ModuleCode,
    pub plan: PaymentPlan,
    pub list_price: u32,
    pub discount: u32,
    /// Amount due per payment.
    pub amount_per_payment: u32,
    pub payments: u32,
}

/// Quote a module at its early-bird price under `plan`.
///
/// Installment amounts round up, so the learner never pays less than the
/// early-bird price in total.
pub fn quote(module: &Module, plan: PaymentPlan) -> Quote {
    let (amount_per_payment, payments) = match plan {
        PaymentPlan::Full => (module.early_bird_price, 1),
        PaymentPlan::Installments => (
            module.early_bird_price.div_ceil(INSTALLMENT_COUNT),
            INSTALLMENT_COUNT,
        ),
    };

    Quote {
        module: module.code.clone(),
        plan,
        list_price: module.price,
        discount: module.early_bird_savings(),
        amount_per_payment,
        payments,
    }
}

/// A priced group of modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: String,
    pub title: String,
    pub price: u32,
    pub savings: u32,
    pub description: String,
    pub modules: Vec<ModuleCode>,
}

/// The shipped bundles.
pub fn builtin_bundles() -> Vec<Bundle> {
    let bundle = |id: &str,
                  title: &str,
                  price: u32,
                  savings: u32,
                  description: &str,
                  modules: &[&str]| {
        Bundle {
            id: id.into(),
            title: title.into(),
            price,
            savings,
            description: description.into(),
            modules: modules.iter().map(|c| ModuleCode::new(*c)).collect(),
        }
    };

    vec![
        bundle(
            "foundation",
            "Foundation Access",
            399,
            0,
            "ATMT 1 (Core Empathy Framework)",
            &["ATMT_1"],
        ),
        bundle(
            "professional",
            "Professional Track",
            1499,
            97,
            "ATMT 1 + Choose 3 Specializations",
            &["ATMT_1", "ATMT_2", "ATMT_3", "ATMT_4"],
        ),
        bundle(
            "master",
            "Master Certification",
            1999,
            595,
            "Full Clinical Registry Access (ATMT 1-6)",
            &["ATMT_1", "ATMT_2", "ATMT_3", "ATMT_4", "ATMT_5", "ATMT_6"],
        ),
    ]
}
