//! Stress test: verification token uniqueness over 10K issuances.
//!
//! Tokens are drawn from the OS CSPRNG with 128 bits of entropy; none of
//! them may collide within one learner's certificates.

use std::collections::HashSet;

use mindflow_progress::certificate::{issue, lookup};
use mindflow_progress::{ModuleCode, UserProgress};

#[test]
fn stress_10k_issuances_have_unique_tokens() {
    let mut progress = UserProgress::default();

    for i in 0..10_000 {
        issue(
            &mut progress,
            &ModuleCode::new(format!("MOD_{i}")),
            "Scale Module",
            "Scale Student",
            i % 1_000 == 999,
        );
    }

    assert_eq!(progress.certificates.len(), 10_000);

    let tokens: HashSet<&str> = progress
        .certificates
        .iter()
        .map(|c| c.verification_token.as_str())
        .collect();
    assert_eq!(tokens.len(), 10_000, "verification token collision");

    let ids: HashSet<&str> = progress.certificates.iter().map(|c| c.id.0.as_str()).collect();
    assert_eq!(ids.len(), 10_000, "certificate id collision");
}

#[test]
fn stress_every_token_resolves_to_its_certificate() {
    let mut progress = UserProgress::default();
    for i in 0..2_000 {
        issue(
            &mut progress,
            &ModuleCode::new(format!("MOD_{i}")),
            "Lookup Module",
            "Lookup Student",
            false,
        );
    }

    for cert in &progress.certificates {
        let found = lookup(&progress.certificates, cert.verification_token.as_str())
            .expect("token should resolve");
        assert_eq!(found.id, cert.id);
    }
}
