//! `ts-sampler` - Token sampling over batched logits.
//!
//! A [`Sampler`] owns its configuration and a seeded random stream and picks
//! one vocabulary index per batch element of a `[batch, 1, vocab_size]`
//! logits tensor, using greedy, top-k or top-p (nucleus) sampling.

pub mod config;
pub mod error;
pub mod greedy;
pub mod logits;
pub mod sampler;
pub mod temperature;
pub mod top_k;
pub mod top_p;

pub use config::{SamplerConfig, SamplingPolicy};
pub use error::{Result, SamplerError};
pub use greedy::{argmax, draw};
pub use logits::Logits;
pub use sampler::{candidates, Sampler, ScoredIndex};
pub use temperature::{normalize, scaled_softmax};
pub use top_k::select_top_k;
pub use top_p::select_top_p;
