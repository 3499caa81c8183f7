use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::config::{SamplerConfig, SamplingPolicy};
use crate::error::{Result, SamplerError};
use crate::greedy::{argmax, draw};
use crate::logits::{batch_and_vocab, Logits};
use crate::temperature::{normalize, scaled_softmax};
use crate::top_k::select_top_k;
use crate::top_p::select_top_p;

/// A logit (or, after softmax, a probability) paired with its vocabulary index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredIndex {
    pub score: f32,
    pub index: usize,
}

impl ScoredIndex {
    pub fn new(score: f32, index: usize) -> Self {
        Self { score, index }
    }
}

/// Copies a logits row into an owned candidate set, in vocabulary order.
pub fn candidates(row: &[f32]) -> Vec<ScoredIndex> {
    row.iter()
        .enumerate()
        .map(|(index, &score)| ScoredIndex { score, index })
        .collect()
}

/// Candidate ordering: higher score first, lower index first on ties,
/// NaN scores after everything else.
pub(crate) fn by_rank(a: &ScoredIndex, b: &ScoredIndex) -> Ordering {
    let by_score = match (a.score.is_nan(), b.score.is_nan()) {
        (false, false) => b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    };
    by_score.then(a.index.cmp(&b.index))
}

/// Picks one token per batch element from `[batch, 1, vocab_size]` logits.
///
/// The random stream `R` belongs to this sampler alone. It is advanced once
/// per batch element, in batch order, whenever the final candidate set holds
/// more than one entry; a single remaining candidate is returned without a
/// draw. Two samplers built from the same config and seed therefore produce
/// the same tokens for the same sequence of calls.
///
/// `sample` takes `&mut self`; callers sharing a sampler across threads must
/// wrap it in a lock.
#[derive(Debug)]
pub struct Sampler<R = StdRng> {
    config: SamplerConfig,
    rng: R,
}

impl Sampler<StdRng> {
    /// Create a sampler whose stream is seeded from `config.seed`.
    pub fn new(config: SamplerConfig) -> Result<Self> {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }

    /// Create a sampler from loose parameters.
    ///
    /// A negative `top_k` is rejected; `0` keeps the whole vocabulary.
    pub fn create(
        policy: SamplingPolicy,
        top_k: i64,
        top_p: f32,
        temperature: f32,
        seed: u64,
    ) -> Result<Self> {
        let top_k = usize::try_from(top_k).map_err(|_| {
            SamplerError::invalid_argument(format!("top_k must be non-negative, got {top_k}"))
        })?;
        Self::new(SamplerConfig {
            policy,
            top_k,
            top_p,
            temperature,
            seed,
        })
    }
}

impl<R: Rng> Sampler<R> {
    /// Create a sampler drawing from a caller-supplied stream. `config.seed`
    /// is not used.
    pub fn with_rng(config: SamplerConfig, rng: R) -> Result<Self> {
        config.validate()?;
        debug!(
            policy = %config.policy,
            top_k = config.top_k,
            top_p = config.top_p,
            temperature = config.temperature,
            seed = config.seed,
            "sampler created"
        );
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn policy(&self) -> SamplingPolicy {
        self.config.policy
    }

    /// Sample one vocabulary index per batch element.
    ///
    /// # Errors
    /// `InvalidArgument` if the tensor is not `[batch, 1, vocab_size]` with
    /// `vocab_size >= 1`, or a row cannot be read. The first failing batch
    /// element aborts the call and no partial result is returned.
    pub fn sample<L: Logits + ?Sized>(&mut self, logits: &L) -> Result<Vec<usize>> {
        let (batch, vocab_size) = batch_and_vocab(logits.dims())?;
        (0..batch)
            .map(|b| {
                let row = logits.row(b)?;
                if row.len() != vocab_size {
                    return Err(SamplerError::invalid_argument(format!(
                        "batch {b}: expected {vocab_size} logits, got {}",
                        row.len()
                    )));
                }
                let token = self.sample_row(&row)?;
                trace!(batch = b, token, "sampled token");
                Ok(token)
            })
            .collect()
    }

    /// Sample a single vocabulary index from one logits row.
    pub fn sample_row(&mut self, row: &[f32]) -> Result<usize> {
        if row.is_empty() {
            return Err(SamplerError::invalid_argument("logits row is empty"));
        }
        match self.config.policy {
            SamplingPolicy::Greedy => {
                argmax(row).ok_or_else(|| SamplerError::internal("argmax of an empty row"))
            }
            SamplingPolicy::TopK => {
                let mut set = candidates(row);
                select_top_k(&mut set, self.config.top_k)?;
                scaled_softmax(&mut set, self.config.temperature, true)?;
                self.pick(&set)
            }
            SamplingPolicy::TopP => {
                let mut set = candidates(row);
                select_top_k(&mut set, self.config.top_k)?;
                scaled_softmax(&mut set, self.config.temperature, true)?;
                select_top_p(&mut set, self.config.top_p)?;
                normalize(&mut set)?;
                self.pick(&set)
            }
        }
    }

    fn pick(&mut self, set: &[ScoredIndex]) -> Result<usize> {
        if let [only] = set {
            return Ok(only.index);
        }
        let u: f32 = self.rng.gen_range(0.0..1.0);
        trace!(candidates = set.len(), u, "drawing from distribution");
        draw(set, u)
    }
}
