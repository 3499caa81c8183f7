use crate::error::{Result, SamplerError};
use crate::sampler::{by_rank, ScoredIndex};

/// Keeps only the `k` highest-scoring candidates and leaves them sorted in
/// descending score order, ties broken by ascending vocabulary index.
///
/// `k == 0` or `k >= set.len()` keeps every candidate (still sorted).
pub fn select_top_k(set: &mut Vec<ScoredIndex>, k: usize) -> Result<()> {
    if set.is_empty() {
        return Err(SamplerError::internal("top-k selection over an empty candidate set"));
    }

    if k > 0 && k < set.len() {
        // Partial selection: everything before position k-1 ranks ahead of it.
        set.select_nth_unstable_by(k - 1, by_rank);
        set.truncate(k);
    }
    set.sort_unstable_by(by_rank);
    Ok(())
}
