//! Faker configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values controlling how generator instances are seeded.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FAKER")]
pub struct FakerSettings {
    /// Seed for the random source; absent or zero selects system entropy.
    pub seed: Option<u64>,
}

impl FakerSettings {
    /// Return the configured seed, falling back to zero.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(0)
    }

    /// Return `true` when the configured seed yields a reproducible sequence.
    #[must_use]
    pub fn is_reproducible(&self) -> bool {
        self.seed() != 0
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for faker configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> FakerSettings {
        FakerSettings::load_from_iter([OsString::from("faker")]).expect("config should load")
    }

    #[rstest]
    fn seed_defaults_to_entropy_when_missing() {
        let _guard = lock_env([("FAKER_SEED", None::<String>)]);

        let settings = load_from_empty_args();
        assert!(settings.seed.is_none());
        assert_eq!(settings.seed(), 0);
        assert!(!settings.is_reproducible());
    }

    #[rstest]
    fn environment_seed_is_respected() {
        let _guard = lock_env([("FAKER_SEED", Some("2026".to_owned()))]);

        let settings = load_from_empty_args();
        assert_eq!(settings.seed(), 2026);
        assert!(settings.is_reproducible());
    }

    #[rstest]
    fn zero_seed_is_not_reproducible() {
        let settings = FakerSettings { seed: Some(0) };
        assert!(!settings.is_reproducible());
    }
}
