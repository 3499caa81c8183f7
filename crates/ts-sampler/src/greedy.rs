use tracing::debug;

use crate::error::{Result, SamplerError};
use crate::sampler::{by_rank, ScoredIndex};

/// Index of the largest logit, the lowest one among exact ties.
///
/// NaN never wins unless every value is NaN, in which case index 0 is
/// returned. `None` only for an empty row.
pub fn argmax(logits: &[f32]) -> Option<usize> {
    logits
        .iter()
        .enumerate()
        .map(|(index, &score)| ScoredIndex { score, index })
        .min_by(by_rank)
        .map(|best| best.index)
}

/// Walk the cumulative distribution of `set` and return the index of the
/// first entry whose cumulative probability reaches `u`.
///
/// `set` is expected to be sorted and normalized, and `u` uniform in
/// `[0, 1)`. When rounding leaves the total mass short of `u` the last
/// entry is returned, even if its weight is zero (e.g. a `-inf` or NaN logit
/// that sorted last).
pub fn draw(set: &[ScoredIndex], u: f32) -> Result<usize> {
    let last = set
        .last()
        .ok_or_else(|| SamplerError::internal("cannot draw from an empty candidate set"))?;

    let mut cumulative = 0.0f32;
    for candidate in set {
        cumulative += candidate.score;
        if cumulative >= u {
            return Ok(candidate.index);
        }
    }

    debug!(u, cumulative, "cumulative mass fell short of the draw, using last candidate");
    Ok(last.index)
}
