//! Data structures for the module catalog.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Module code
// ---------------------------------------------------------------------------

/// Unique key of a catalog module (e.g., "ATMT_1").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleCode(pub String);

impl ModuleCode {
    /// Sentinel code carried by the aggregate master certificate.
    pub const MASTER: &'static str = "MASTER";

    /// Create a new module code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The master sentinel as a code.
    pub fn master() -> Self {
        Self(Self::MASTER.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_master(&self) -> bool {
        self.0 == Self::MASTER
    }
}

impl std::fmt::Display for ModuleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModuleCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Module level
// ---------------------------------------------------------------------------

/// Placement of a module in the curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleLevel {
    /// Free orientation. Never certified.
    Introduction,
    Mandatory,
    Specialization,
}

impl ModuleLevel {
    /// Whether completing a module of this level earns a certificate.
    pub fn is_certifiable(self) -> bool {
        !matches!(self, ModuleLevel::Introduction)
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            ModuleLevel::Introduction => "introduction",
            ModuleLevel::Mandatory => "mandatory",
            ModuleLevel::Specialization => "specialization",
        }
    }
}

impl std::fmt::Display for ModuleLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

// ---------------------------------------------------------------------------
// Quiz question
// ---------------------------------------------------------------------------

/// A multiple-choice question attached to a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    #[serde(rename = "correctAnswer")]
    pub correct_answer: usize,
}

// ---------------------------------------------------------------------------
// Module
// ---------------------------------------------------------------------------

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub code: ModuleCode,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub level: ModuleLevel,
    pub price: u32,
    pub early_bird_price: u32,
    #[serde(default)]
    pub prerequisite_modules: Vec<ModuleCode>,
    #[serde(default)]
    pub unlocks_modules: Vec<ModuleCode>,
    pub passing_score: u32,
    #[serde(default)]
    pub display_order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration_url: Option<String>,
    #[serde(default)]
    pub quiz_questions: Vec<QuizQuestion>,
}

impl Module {
    /// Whether `score` meets this module's passing score.
    ///
    /// Advisory only: the completion engine records any score.
    pub fn is_passing(&self, score: u32) -> bool {
        score >= self.passing_score
    }

    /// A paid module whose early-bird price undercuts the list price.
    pub fn is_early_bird(&self) -> bool {
        self.price > 0 && self.early_bird_price < self.price
    }

    /// Amount saved by paying the early-bird price.
    pub fn early_bird_savings(&self) -> u32 {
        self.price.saturating_sub(self.early_bird_price)
    }
}
