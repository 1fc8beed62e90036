//! Certificate registry: issuing, looking up, and master eligibility.

use crate::catalog::ModuleCode;
use crate::crypto::random;
use crate::progress::UserProgress;

use super::types::{Certificate, CertificateId, VerificationToken};
use super::verify::compute_digest;

/// Length of the random part of a certificate id.
pub const ID_SUFFIX_LEN: usize = 6;

/// Prefix of every certificate id.
pub const ID_PREFIX: &str = "MF";

/// Prefix distinguishing master verification tokens.
pub const MASTER_TOKEN_PREFIX: &str = "MASTER-";

// ---------------------------------------------------------------------------
// Issue
// ---------------------------------------------------------------------------

/// Issue a certificate and append it to `progress.certificates`.
///
/// When `is_master` is set the certificate carries the [`ModuleCode::MASTER`]
/// sentinel regardless of `module_code`. The returned certificate is already
/// recorded; there is no separate commit step.
pub fn issue(
    progress: &mut UserProgress,
    module_code: &ModuleCode,
    module_title: &str,
    student_name: &str,
    is_master: bool,
) -> Certificate {
    let (id, module_code) = if is_master {
        (
            CertificateId(format!(
                "{ID_PREFIX}-{}-{}",
                ModuleCode::MASTER,
                random::random_suffix(ID_SUFFIX_LEN)
            )),
            ModuleCode::master(),
        )
    } else {
        (
            CertificateId(format!(
                "{ID_PREFIX}-{}-{}",
                random::random_suffix(ID_SUFFIX_LEN),
                module_code
            )),
            module_code.clone(),
        )
    };

    let verification_token = fresh_token(&progress.certificates, is_master);

    let mut certificate = Certificate {
        id,
        module_code,
        module_title: module_title.to_string(),
        issue_date: crate::time::issue_date_today(),
        verification_token,
        student_name: student_name.to_string(),
        digest: String::new(),
    };
    certificate.digest = compute_digest(&certificate);

    log::info!(
        "issued certificate {} for {} to {}",
        certificate.id,
        certificate.module_code,
        certificate.student_name
    );

    progress.certificates.push(certificate.clone());
    certificate
}

/// Draw a token not already used by any of `existing`.
fn fresh_token(existing: &[Certificate], is_master: bool) -> VerificationToken {
    loop {
        let raw = random::random_token();
        let token = if is_master {
            VerificationToken(format!("{MASTER_TOKEN_PREFIX}{raw}"))
        } else {
            VerificationToken(raw)
        };
        if lookup(existing, token.as_str()).is_none() {
            return token;
        }
        log::warn!("verification token collision, redrawing");
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Find a certificate by verification token.
///
/// Linear scan; an unknown token is a normal `None`, not an error.
pub fn lookup<'a>(certificates: &'a [Certificate], token: &str) -> Option<&'a Certificate> {
    certificates
        .iter()
        .find(|c| c.verification_token.as_str() == token)
}

/// Find the certificate issued for a module, if any.
pub fn find_for_module<'a>(
    certificates: &'a [Certificate],
    module_code: &ModuleCode,
) -> Option<&'a Certificate> {
    certificates.iter().find(|c| &c.module_code == module_code)
}

// ---------------------------------------------------------------------------
// Master eligibility
// ---------------------------------------------------------------------------

/// Whether a master certificate has already been issued.
pub fn has_master(certificates: &[Certificate]) -> bool {
    certificates.iter().any(Certificate::is_master)
}

/// Whether every target module is completed.
///
/// An empty target set is never eligible.
pub fn master_eligible(completed: &[ModuleCode], targets: &[ModuleCode]) -> bool {
    !targets.is_empty() && targets.iter().all(|t| completed.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::verify::verify;

    fn codes(list: &[&str]) -> Vec<ModuleCode> {
        list.iter().map(|c| ModuleCode::new(*c)).collect()
    }

    #[test]
    fn test_issue_standard_certificate() {
        let mut progress = UserProgress::default();
        let code = ModuleCode::new("ATMT_1");
        let cert = issue(&mut progress, &code, "5Why Empathy Framework", "Alex Johnson", false);

        assert!(cert.id.0.starts_with("MF-"));
        assert!(cert.id.0.ends_with("-ATMT_1"));
        assert_eq!(cert.id.0.len(), "MF-".len() + ID_SUFFIX_LEN + "-ATMT_1".len());
        assert_eq!(cert.module_code, code);
        assert_eq!(cert.student_name, "Alex Johnson");
        assert!(!cert.verification_token.as_str().starts_with(MASTER_TOKEN_PREFIX));
        assert_eq!(progress.certificates, vec![cert]);
    }

    #[test]
    fn test_issue_master_certificate() {
        let mut progress = UserProgress::default();
        let cert = issue(
            &mut progress,
            &ModuleCode::new("ATMT_6"),
            "Master NLP Practitioner (Clinical)",
            "Alex Johnson",
            true,
        );

        assert!(cert.is_master());
        assert!(cert.id.0.starts_with("MF-MASTER-"));
        assert!(cert.verification_token.as_str().starts_with(MASTER_TOKEN_PREFIX));
        assert!(has_master(&progress.certificates));
    }

    #[test]
    fn test_issued_certificate_verifies() {
        let mut progress = UserProgress::default();
        let cert = issue(&mut progress, &ModuleCode::new("ATMT_2"), "Reframing", "Sam", false);
        assert!(verify(&cert).is_valid);
    }

    #[test]
    fn test_lookup_found_and_missing() {
        let mut progress = UserProgress::default();
        let cert = issue(&mut progress, &ModuleCode::new("ATMT_3"), "Anchoring", "Sam", false);

        let found = lookup(&progress.certificates, cert.verification_token.as_str());
        assert_eq!(found, Some(&cert));
        assert!(lookup(&progress.certificates, "never-issued").is_none());
        assert!(lookup(&[], "anything").is_none());
    }

    #[test]
    fn test_find_for_module() {
        let mut progress = UserProgress::default();
        issue(&mut progress, &ModuleCode::new("ATMT_3"), "Anchoring", "Sam", false);
        assert!(find_for_module(&progress.certificates, &ModuleCode::new("ATMT_3")).is_some());
        assert!(find_for_module(&progress.certificates, &ModuleCode::new("ATMT_4")).is_none());
    }

    #[test]
    fn test_master_eligible() {
        let targets = codes(&["A", "B", "C"]);
        assert!(master_eligible(&codes(&["C", "X", "A", "B"]), &targets));
        assert!(!master_eligible(&codes(&["A", "B"]), &targets));
        assert!(!master_eligible(&codes(&["A"]), &[]));
    }
}
