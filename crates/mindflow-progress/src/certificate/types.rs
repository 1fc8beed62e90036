//! Data structures for certificates.

use serde::{Deserialize, Serialize};

use crate::catalog::ModuleCode;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Human-readable certificate identifier (e.g., "MF-7Q2XKD-ATMT_1").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CertificateId(pub String);

impl std::fmt::Display for CertificateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque key used for public, unauthenticated certificate lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerificationToken(pub String);

impl VerificationToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VerificationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VerificationToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Certificate
// ---------------------------------------------------------------------------

/// An issued completion credential. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: CertificateId,
    /// Module code, or [`ModuleCode::MASTER`] for the aggregate credential.
    pub module_code: ModuleCode,
    pub module_title: String,
    pub issue_date: String,
    pub verification_token: VerificationToken,
    /// Name at issuance time; later profile edits do not change it.
    pub student_name: String,
    /// SHA-256 over the fields above. Empty for certificates written before
    /// digests existed.
    #[serde(default)]
    pub digest: String,
}

impl Certificate {
    pub fn is_master(&self) -> bool {
        self.module_code.is_master()
    }
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Result of checking a certificate's integrity.
#[derive(Debug, Clone)]
pub struct CertificateVerification {
    pub certificate_id: CertificateId,
    pub digest_present: bool,
    pub digest_valid: bool,
    pub is_valid: bool,
    pub verified_at: u64,
    pub errors: Vec<String>,
}
