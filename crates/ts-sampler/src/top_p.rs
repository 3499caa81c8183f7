use crate::error::{Result, SamplerError};
use crate::sampler::ScoredIndex;

/// Nucleus truncation: keeps the smallest leading run of `set` whose
/// cumulative probability reaches `p`.
///
/// `set` must be sorted and normalized. The first candidate is always kept.
/// If rounding keeps the running total below `p`, nothing is dropped.
pub fn select_top_p(set: &mut Vec<ScoredIndex>, p: f32) -> Result<()> {
    if set.is_empty() {
        return Err(SamplerError::internal("top-p selection over an empty candidate set"));
    }

    let mut cumulative = 0.0f32;
    let keep = set
        .iter()
        .position(|c| {
            cumulative += c.score;
            cumulative >= p
        })
        .map_or(set.len(), |i| i + 1);
    set.truncate(keep);
    Ok(())
}
