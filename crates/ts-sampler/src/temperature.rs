use crate::error::{Result, SamplerError};
use crate::sampler::ScoredIndex;

/// Divides every score by `temperature` and applies a numerically stable
/// softmax in place, replacing scores with weights (probabilities when
/// `normalize` is set).
///
/// The largest scaled score is subtracted before exponentiating so large
/// logits cannot overflow. If that maximum is infinite, entries equal to it
/// get weight 1 and all others 0. NaN scores get weight 0.
///
/// Higher temperatures flatten the distribution, lower ones sharpen it.
///
/// # Errors
/// `Internal` for an empty set or, when normalizing, a zero or non-finite
/// total weight. `InvalidArgument` for a temperature that is not positive.
pub fn scaled_softmax(set: &mut [ScoredIndex], temperature: f32, normalize: bool) -> Result<()> {
    if set.is_empty() {
        return Err(SamplerError::internal("softmax over an empty candidate set"));
    }
    if temperature.is_nan() || temperature <= 0.0 {
        return Err(SamplerError::invalid_argument(format!(
            "temperature must be positive, got {temperature}"
        )));
    }

    let max = set
        .iter()
        .map(|c| c.score / temperature)
        .filter(|s| !s.is_nan())
        .fold(f32::NEG_INFINITY, f32::max);

    for candidate in set.iter_mut() {
        let scaled = candidate.score / temperature;
        candidate.score = if scaled.is_nan() {
            0.0
        } else if max.is_infinite() {
            if scaled == max {
                1.0
            } else {
                0.0
            }
        } else {
            (scaled - max).exp()
        };
    }

    if normalize {
        self::normalize(set)?;
    }
    Ok(())
}

/// Rescales the scores of `set` so they sum to 1.
pub fn normalize(set: &mut [ScoredIndex]) -> Result<()> {
    if set.is_empty() {
        return Err(SamplerError::internal("normalizing an empty candidate set"));
    }
    let sum: f32 = set.iter().map(|c| c.score).sum();
    if !sum.is_finite() || sum <= 0.0 {
        return Err(SamplerError::internal(format!(
            "degenerate distribution: total weight {sum}"
        )));
    }
    for candidate in set.iter_mut() {
        candidate.score /= sum;
    }
    Ok(())
}
