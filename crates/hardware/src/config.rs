//! Configuration system for the scoreboard simulator.
//!
//! This module defines all configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline hardware constants (window, units, latencies, memory).
//! 2. **Structures:** Hierarchical config for general, resource, latency, and memory settings.
//! 3. **Validation:** Setup-time rejection of non-positive limits and latencies.
//!
//! Configuration is supplied via JSON (`serde_json::from_str`) or use
//! `Config::default()` for the CLI.

use serde::Deserialize;

use crate::common::error::SetupError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline hardware configuration when not
/// explicitly overridden in a JSON configuration file.
mod defaults {
    /// Maximum number of in-flight scoreboard entries (the window).
    pub const WINDOW_SIZE: u16 = 8;

    /// Number of integer execution units available to the scoreboard.
    pub const INT_UNITS: u16 = 2;

    /// Latency in cycles of scoreboard-tracked operations (ALU,
    /// load-immediate, halt/put).
    pub const INT_LATENCY: u16 = 3;

    /// Divide latency in cycles (busy-flag gate only; divides execute
    /// combinationally).
    pub const DIV_LATENCY: u16 = 8;

    /// Multiply latency in cycles (busy-flag gate only).
    pub const MUL_LATENCY: u16 = 4;

    /// Modulo latency in cycles (busy-flag gate only).
    pub const MOD_LATENCY: u16 = 8;

    /// Exponent latency in cycles (busy-flag gate only).
    pub const EXP_LATENCY: u16 = 12;

    /// Exclusive upper bound on the uniformly drawn memory delay, in
    /// simulated cycles.
    pub const MAX_MEM_DELAY: u64 = 1000;

    /// Seed for the memory-delay pseudo-random number generator.
    pub const MEM_SEED: u64 = 123_456_789;

    /// Host clock frequency label (recorded and printed; the core itself is
    /// purely cycle-driven).
    pub const CLOCK_FREQUENCY: &str = "1GHz";
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use xsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.resources.window_size, 8);
/// assert!(config.validate().is_ok());
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use xsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "resources": { "window_size": 4, "int_units": 1 },
///     "latency": { "int_latency": 2 },
///     "memory": { "max_delay": 100, "seed": 42 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.resources.window_size, 4);
/// assert_eq!(config.latency.int_latency, 2);
/// assert_eq!(config.latency.div_latency, 8); // default retained
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Scoreboard resource limits.
    #[serde(default)]
    pub resources: ResourceConfig,
    /// Per-category instruction latencies.
    #[serde(default)]
    pub latency: LatencyConfig,
    /// Memory latency modeling.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Validates the configuration for setup.
    ///
    /// Non-positive resource limits or latencies are configuration errors
    /// reported here, before the first cycle; they are never per-cycle
    /// faults.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.resources.window_size == 0 {
            return Err(SetupError::ZeroWindow);
        }
        if self.resources.int_units == 0 {
            return Err(SetupError::ZeroUnits);
        }
        let latencies = [
            ("integer", self.latency.int_latency),
            ("divide", self.latency.div_latency),
            ("multiply", self.latency.mul_latency),
            ("modulo", self.latency.mod_latency),
            ("exponent", self.latency.exp_latency),
        ];
        for (category, latency) in latencies {
            if latency == 0 {
                return Err(SetupError::ZeroLatency { category });
            }
        }
        if self.memory.max_delay == 0 {
            return Err(SetupError::ZeroMemDelay);
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Enable per-cycle scheduler event tracing (dispatch, broadcast, stalls).
    #[serde(default)]
    pub trace_instructions: bool,

    /// Host clock frequency label. The core is cycle-driven and never reads
    /// this; it is recorded for the host driver and the report banner.
    #[serde(default = "GeneralConfig::default_clock_frequency")]
    pub clock_frequency: String,
}

impl GeneralConfig {
    /// Returns the default host clock frequency label.
    fn default_clock_frequency() -> String {
        defaults::CLOCK_FREQUENCY.to_string()
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            clock_frequency: defaults::CLOCK_FREQUENCY.to_string(),
        }
    }
}

/// Scoreboard resource limits.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceConfig {
    /// Maximum number of in-flight scoreboard entries.
    #[serde(default = "ResourceConfig::default_window_size")]
    pub window_size: u16,

    /// Number of integer execution units.
    #[serde(default = "ResourceConfig::default_int_units")]
    pub int_units: u16,
}

impl ResourceConfig {
    /// Returns the default scoreboard window size.
    fn default_window_size() -> u16 {
        defaults::WINDOW_SIZE
    }

    /// Returns the default execution unit count.
    fn default_int_units() -> u16 {
        defaults::INT_UNITS
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            window_size: defaults::WINDOW_SIZE,
            int_units: defaults::INT_UNITS,
        }
    }
}

/// Per-category instruction latencies in cycles.
///
/// The integer latency drives the scoreboard countdown for all
/// scoreboard-tracked categories. The divide/multiply/modulo/exponent
/// latencies only gate the advisory `busy` flag: those categories execute
/// combinationally.
#[derive(Debug, Clone, Deserialize)]
pub struct LatencyConfig {
    /// Latency of scoreboard-tracked operations.
    #[serde(default = "LatencyConfig::default_int_latency")]
    pub int_latency: u16,

    /// Divide latency.
    #[serde(default = "LatencyConfig::default_div_latency")]
    pub div_latency: u16,

    /// Multiply latency.
    #[serde(default = "LatencyConfig::default_mul_latency")]
    pub mul_latency: u16,

    /// Modulo latency.
    #[serde(default = "LatencyConfig::default_mod_latency")]
    pub mod_latency: u16,

    /// Exponent latency.
    #[serde(default = "LatencyConfig::default_exp_latency")]
    pub exp_latency: u16,
}

impl LatencyConfig {
    /// Returns the default integer latency.
    fn default_int_latency() -> u16 {
        defaults::INT_LATENCY
    }

    /// Returns the default divide latency.
    fn default_div_latency() -> u16 {
        defaults::DIV_LATENCY
    }

    /// Returns the default multiply latency.
    fn default_mul_latency() -> u16 {
        defaults::MUL_LATENCY
    }

    /// Returns the default modulo latency.
    fn default_mod_latency() -> u16 {
        defaults::MOD_LATENCY
    }

    /// Returns the default exponent latency.
    fn default_exp_latency() -> u16 {
        defaults::EXP_LATENCY
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            int_latency: defaults::INT_LATENCY,
            div_latency: defaults::DIV_LATENCY,
            mul_latency: defaults::MUL_LATENCY,
            mod_latency: defaults::MOD_LATENCY,
            exp_latency: defaults::EXP_LATENCY,
        }
    }
}

/// Memory latency modeling configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Exclusive upper bound on the uniformly drawn completion delay.
    #[serde(default = "MemoryConfig::default_max_delay")]
    pub max_delay: u64,

    /// Seed for the delay generator. A zero seed is coerced to the default
    /// (the xorshift state must be non-zero).
    #[serde(default = "MemoryConfig::default_seed")]
    pub seed: u64,
}

impl MemoryConfig {
    /// Returns the default memory delay bound.
    fn default_max_delay() -> u64 {
        defaults::MAX_MEM_DELAY
    }

    /// Returns the default generator seed.
    fn default_seed() -> u64 {
        defaults::MEM_SEED
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_delay: defaults::MAX_MEM_DELAY,
            seed: defaults::MEM_SEED,
        }
    }
}
