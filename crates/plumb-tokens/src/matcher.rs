//! Nearest-token matching

use crate::category::TokenCategory;
use crate::registry::TokenRegistry;
use serde::Serialize;
use tracing::trace;

/// The closest valid token to an observed value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMatch {
    pub value: u32,
    pub token_name: String,
    /// Absolute distance between the observed value and `value`
    pub distance: f64,
}

/// Find the token closest to `observed` in `category`.
///
/// The circular radius sentinel is never a candidate. Ties go to the token
/// declared first in the scale. Returns `None` only when no candidate
/// remains.
pub fn find_closest(
    registry: &TokenRegistry,
    category: TokenCategory,
    observed: f64,
) -> Option<TokenMatch> {
    let scale = registry.scale(category);

    let mut best: Option<(u32, f64)> = None;
    for token in scale.tokens() {
        if category == TokenCategory::BorderRadius && token.circular {
            continue;
        }

        let distance = (observed - f64::from(token.value)).abs();
        // strict comparison keeps the earlier token on ties
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((token.value, distance));
        }
    }

    let (value, distance) = best?;
    let token_name = registry.token_name(category, f64::from(value))?.to_string();
    trace!(%category, observed, value, distance, "closest token");

    Some(TokenMatch {
        value,
        token_name,
        distance,
    })
}
