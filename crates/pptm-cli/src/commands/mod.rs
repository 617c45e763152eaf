//! CLI subcommands

pub mod enumerate;
pub mod probe;
pub mod run;

use pptm_core::HarnessConfig;

/// Environment configuration with command-line overrides applied
pub(crate) fn harness_config(
    max_length: Option<u32>,
    seed: Option<u64>,
    max_attempts: Option<u32>,
) -> HarnessConfig {
    let mut config = HarnessConfig::from_env();
    if let Some(max_length) = max_length {
        config = config.with_max_length(max_length);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(max_attempts) = max_attempts {
        config = config.with_max_attempts(max_attempts);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_flags_override_environment() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("PPTM_MAX_LENGTH", "3");
        env::set_var("PPTM_SEED", "21");
        env::set_var("PPTM_MAX_ATTEMPTS", "12");

        let from_env = harness_config(None, None, None);
        let overridden = harness_config(Some(9), Some(11), Some(50));

        env::remove_var("PPTM_MAX_LENGTH");
        env::remove_var("PPTM_SEED");
        env::remove_var("PPTM_MAX_ATTEMPTS");

        assert_eq!(from_env.max_length, 3);
        assert_eq!(from_env.seed, Some(21));
        assert_eq!(from_env.max_attempts, Some(12));

        assert_eq!(overridden.max_length, 9);
        assert_eq!(overridden.seed, Some(11));
        assert_eq!(overridden.max_attempts, Some(50));
    }

    #[test]
    fn test_partial_flags_keep_environment() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("PPTM_MAX_LENGTH", "7");
        env::set_var("PPTM_SEED", "4");

        let config = harness_config(None, Some(99), None);

        env::remove_var("PPTM_MAX_LENGTH");
        env::remove_var("PPTM_SEED");

        assert_eq!(config.max_length, 7);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.max_attempts, None);
    }
}
