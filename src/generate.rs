//! Input generators for exercising the sorts.
//!
//! # Examples
//!
//! ```
//! use bst_sort::{ArrayGenerator, GeneratorConfig};
//!
//! let config = GeneratorConfig { min: 1, max: 6, seed: Some(3) };
//! let mut generator = ArrayGenerator::new(config).unwrap();
//!
//! let rolls = generator.random(10);
//! assert_eq!(rolls.len(), 10);
//! assert!(rolls.iter().all(|roll| (1..=6).contains(roll)));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Settings for an [`ArrayGenerator`]. Missing fields fall back to their defaults when
/// deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Smallest value a random array may contain.
    #[serde(default = "default_min")]
    pub min: i64,

    /// Largest value a random array may contain.
    #[serde(default = "default_max")]
    pub max: i64,

    /// Seed for reproducible output. Without one the generator seeds itself from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_min() -> i64 {
    1
}

fn default_max() -> i64 {
    1000
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Checks that `min` does not exceed `max`.
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(Error::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Produces random arrays within the configured bounds.
#[derive(Debug)]
pub struct ArrayGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl Default for ArrayGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl ArrayGenerator {
    /// Builds a generator, rejecting configs whose range is empty.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        tracing::debug!(
            min = config.min,
            max = config.max,
            seeded = config.seed.is_some(),
            "built array generator"
        );
        Ok(Self { config, rng })
    }

    /// The config this generator was built from.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// `size` values drawn uniformly from `min..=max`.
    pub fn random(&mut self, size: usize) -> Vec<i64> {
        let range = self.config.min..=self.config.max;
        (0..size).map(|_| self.rng.gen_range(range.clone())).collect()
    }
}

/// `1, 2, ..., size`.
pub fn sorted_array(size: usize) -> Vec<i64> {
    (1..=size as i64).collect()
}

/// `size, size - 1, ..., 1`.
pub fn reverse_sorted_array(size: usize) -> Vec<i64> {
    (1..=size as i64).rev().collect()
}
