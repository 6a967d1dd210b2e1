//! Sandbox configuration structures and loaders.
use std::env;

use crate::level::clamp_side;

/// Size of the generated level and how long the agent may run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SandboxConfig {
    pub width: usize,
    pub height: usize,
    /// Tick budget for the agent's behavior tree.
    pub ticks: usize,
    /// Connect cells diagonally as well as orthogonally.
    pub diagonals: bool,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 9,
            ticks: 64,
            diagonals: false,
        }
    }
}

impl SandboxConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SANDBOX_WIDTH` - Level width in cells (default: 16, max: 1024)
    /// - `SANDBOX_HEIGHT` - Level height in cells (default: 9, max: 1024)
    /// - `SANDBOX_TICKS` - Tick budget for the agent (default: 64)
    /// - `SANDBOX_DIAGONALS` - Allow diagonal moves (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(width) = parse::<usize>(&lookup, "SANDBOX_WIDTH") {
            config.width = clamp_side(width);
        }
        if let Some(height) = parse::<usize>(&lookup, "SANDBOX_HEIGHT") {
            config.height = clamp_side(height);
        }
        if let Some(ticks) = parse::<usize>(&lookup, "SANDBOX_TICKS") {
            config.ticks = ticks;
        }

        if let Some(diagonals) = parse::<bool>(&lookup, "SANDBOX_DIAGONALS") {
            config.diagonals = diagonals;
        } else if lookup("SANDBOX_DIAGONALS").is_some() {
            // A bare variable counts as enabled.
            config.diagonals = true;
        }

        config
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::MAX_SIDE;

    fn lookup(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(SandboxConfig::from_lookup(|_| None), SandboxConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = SandboxConfig::from_lookup(lookup(&[
            ("SANDBOX_WIDTH", "24"),
            ("SANDBOX_HEIGHT", " 5 "),
            ("SANDBOX_TICKS", "200"),
            ("SANDBOX_DIAGONALS", "true"),
        ]));

        assert_eq!(
            config,
            SandboxConfig {
                width: 24,
                height: 5,
                ticks: 200,
                diagonals: true,
            }
        );
    }

    #[test]
    fn zero_sizes_are_clamped() {
        let config =
            SandboxConfig::from_lookup(lookup(&[("SANDBOX_WIDTH", "0"), ("SANDBOX_HEIGHT", "0")]));
        assert_eq!((config.width, config.height), (1, 1));
    }

    #[test]
    fn huge_sizes_are_capped() {
        let config = SandboxConfig::from_lookup(lookup(&[
            ("SANDBOX_WIDTH", "18446744073709551615"),
            ("SANDBOX_HEIGHT", "5000"),
        ]));
        assert_eq!((config.width, config.height), (MAX_SIDE, MAX_SIDE));
    }

    #[test]
    fn unparsable_values_fall_back() {
        let config = SandboxConfig::from_lookup(lookup(&[
            ("SANDBOX_WIDTH", "wide"),
            ("SANDBOX_TICKS", "-3"),
        ]));
        assert_eq!(config.width, 16);
        assert_eq!(config.ticks, 64);
    }

    #[test]
    fn bare_diagonals_flag_enables() {
        let config = SandboxConfig::from_lookup(lookup(&[("SANDBOX_DIAGONALS", "")]));
        assert!(config.diagonals);
    }
}
