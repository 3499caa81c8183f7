use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SamplerError};

/// How a [`Sampler`](crate::Sampler) turns a logits row into a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SamplingPolicy {
    /// Argmax. Ignores `top_k`, `top_p` and `temperature`.
    #[default]
    Greedy,
    /// Keep the `top_k` best logits, apply temperature and softmax, then draw.
    TopK,
    /// Like `TopK`, then keep the smallest prefix whose mass reaches `top_p`.
    TopP,
}

impl SamplingPolicy {
    /// Whether this policy draws from the random stream.
    pub fn is_stochastic(&self) -> bool {
        !matches!(self, SamplingPolicy::Greedy)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SamplingPolicy::Greedy => "greedy",
            SamplingPolicy::TopK => "top_k",
            SamplingPolicy::TopP => "top_p",
        }
    }
}

impl fmt::Display for SamplingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SamplingPolicy {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "greedy" => Ok(SamplingPolicy::Greedy),
            "top_k" => Ok(SamplingPolicy::TopK),
            "top_p" => Ok(SamplingPolicy::TopP),
            other => Err(SamplerError::invalid_argument(format!(
                "unknown sampling policy '{other}'"
            ))),
        }
    }
}

/// Sampling parameters, validated once when a sampler is built.
///
/// `top_k == 0` disables the top-k restriction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SamplerConfig {
    pub policy: SamplingPolicy,
    pub top_k: usize,
    pub top_p: f32,
    pub temperature: f32,
    pub seed: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            policy: SamplingPolicy::Greedy,
            top_k: 0,
            top_p: 1.0,
            temperature: 1.0,
            seed: 0,
        }
    }
}

impl SamplerConfig {
    pub fn greedy() -> Self {
        Self::default()
    }

    pub fn top_k(k: usize) -> Self {
        Self {
            policy: SamplingPolicy::TopK,
            top_k: k,
            ..Self::default()
        }
    }

    pub fn top_p(p: f32) -> Self {
        Self {
            policy: SamplingPolicy::TopP,
            top_p: p,
            ..Self::default()
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the parameters the configured policy actually reads.
    ///
    /// # Errors
    /// `InvalidArgument` if a stochastic policy has a temperature that is not
    /// a finite positive number, or if `TopP` has `top_p` outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let bad_temperature = !self.temperature.is_finite() || self.temperature <= 0.0;
        if self.policy.is_stochastic() && bad_temperature {
            return Err(SamplerError::invalid_argument(format!(
                "temperature must be positive for {} sampling, got {}",
                self.policy, self.temperature
            )));
        }
        if self.policy == SamplingPolicy::TopP && !(0.0..=1.0).contains(&self.top_p) {
            return Err(SamplerError::invalid_argument(format!(
                "top_p must be in [0, 1], got {}",
                self.top_p
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_greedy() {
        let config = SamplerConfig::default();
        assert_eq!(config.policy, SamplingPolicy::Greedy);
        assert_eq!(config.top_k, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_greedy_ignores_other_parameters() {
        let config = SamplerConfig::greedy().with_temperature(0.0).with_top_p(7.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_stochastic_requires_positive_temperature() {
        for temperature in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = SamplerConfig::top_k(4)
                .with_temperature(temperature)
                .validate()
                .unwrap_err();
            assert!(matches!(err, SamplerError::InvalidArgument(_)));

            let err = SamplerConfig::top_p(0.9)
                .with_temperature(temperature)
                .validate()
                .unwrap_err();
            assert!(matches!(err, SamplerError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_top_p_range() {
        assert!(SamplerConfig::top_p(0.0).validate().is_ok());
        assert!(SamplerConfig::top_p(1.0).validate().is_ok());
        assert!(SamplerConfig::top_p(1.5).validate().is_err());
        assert!(SamplerConfig::top_p(-0.1).validate().is_err());
        assert!(SamplerConfig::top_p(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_top_k_ignores_top_p() {
        let config = SamplerConfig::top_k(3).with_top_p(-2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_policy_parse_and_display() {
        assert_eq!(
            "greedy".parse::<SamplingPolicy>().unwrap(),
            SamplingPolicy::Greedy
        );
        assert_eq!(
            "Top-K".parse::<SamplingPolicy>().unwrap(),
            SamplingPolicy::TopK
        );
        assert_eq!(
            " top_p ".parse::<SamplingPolicy>().unwrap(),
            SamplingPolicy::TopP
        );
        assert!("beam".parse::<SamplingPolicy>().is_err());
        assert_eq!(SamplingPolicy::TopP.to_string(), "top_p");
        assert!(!SamplingPolicy::Greedy.is_stochastic());
        assert!(SamplingPolicy::TopK.is_stochastic());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_partial_document() {
        let config: SamplerConfig =
            serde_json::from_str(r#"{"policy": "top_p", "top_p": 0.9, "seed": 42}"#).unwrap();
        assert_eq!(config.policy, SamplingPolicy::TopP);
        assert_eq!(config.top_p, 0.9);
        assert_eq!(config.seed, 42);
        assert_eq!(config.top_k, 0);
        assert_eq!(config.temperature, 1.0);

        let json = serde_json::to_string(&SamplerConfig::top_k(40)).unwrap();
        assert!(json.contains(r#""policy":"top_k""#));
    }
}
