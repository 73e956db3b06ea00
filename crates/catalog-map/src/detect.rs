//! Platform detection from a CSV header row.
//!
//! Each known platform is scored by the share of its signature headers
//! present in the input. A platform needs at least
//! [`MIN_SIGNATURE_MATCHES`] matching headers to be considered at all.

use std::collections::BTreeSet;

use catalog_model::{PlatformConfig, PlatformId};
use tracing::debug;

use crate::registry::PLATFORMS;

/// Minimum number of signature headers that must be present.
pub const MIN_SIGNATURE_MATCHES: usize = 3;

/// Detection score of one platform against a header set.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformScore {
    pub platform: PlatformId,
    /// Signature headers found in the input.
    pub matched: Vec<&'static str>,
    pub signature_len: usize,
}

impl PlatformScore {
    pub fn match_count(&self) -> usize {
        self.matched.len()
    }

    /// Fraction of the signature present, in `0.0..=1.0`.
    pub fn score(&self) -> f64 {
        if self.signature_len == 0 {
            0.0
        } else {
            self.match_count() as f64 / self.signature_len as f64
        }
    }

    pub fn is_candidate(&self) -> bool {
        self.match_count() >= MIN_SIGNATURE_MATCHES
    }
}

fn header_set<S: AsRef<str>>(headers: &[S]) -> BTreeSet<&str> {
    headers.iter().map(|h| h.as_ref().trim()).collect()
}

fn score_platform(config: &PlatformConfig, headers: &BTreeSet<&str>) -> PlatformScore {
    let matched = config
        .header_signature
        .iter()
        .copied()
        .filter(|signature| headers.contains(signature))
        .collect();
    PlatformScore {
        platform: config.id,
        matched,
        signature_len: config.header_signature.len(),
    }
}

/// Scores every known platform, in detection order.
pub fn score_platforms<S: AsRef<str>>(headers: &[S]) -> Vec<PlatformScore> {
    let headers = header_set(headers);
    PLATFORMS
        .iter()
        .map(|config| score_platform(config, &headers))
        .collect()
}

/// Identifies the platform that produced a CSV from its headers.
///
/// Picks the candidate with the strictly highest score; on an exact tie the
/// platform evaluated first keeps the win. Returns [`PlatformId::Unknown`]
/// when no platform has enough matching headers.
pub fn detect_platform<S: AsRef<str>>(headers: &[S]) -> PlatformId {
    let mut best: Option<PlatformScore> = None;
    for score in score_platforms(headers) {
        if !score.is_candidate() {
            continue;
        }
        let better = best
            .as_ref()
            .is_none_or(|current| score.score() > current.score());
        if better {
            best = Some(score);
        }
    }
    match best {
        Some(score) => {
            debug!(
                platform = %score.platform,
                matched = score.match_count(),
                signature_len = score.signature_len,
                "platform detected"
            );
            score.platform
        }
        None => {
            debug!(header_count = headers.len(), "no platform matched");
            PlatformId::Unknown
        }
    }
}
