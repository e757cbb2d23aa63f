//! Configuration system for the simulator.
//!
//! This module defines the configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline timing constants (hit and miss latency).
//! 2. **Structures:** Hierarchical config for general run control and the memory model.
//! 3. **Enums:** Cache index policy and indirect addressing mode.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or built with `Config::default()`,
//! which reproduces the reference timing model exactly.

use serde::Deserialize;

use crate::common::constants;

/// Default configuration constants for the simulator.
mod defaults {
    use super::constants;

    /// Cycles for a load/store whose slot was already touched.
    pub const HIT_LATENCY: u64 = constants::HIT_LATENCY;

    /// Cycles for the first load/store to a slot.
    pub const MISS_LATENCY: u64 = constants::MISS_LATENCY;
}

/// How a raw 8-bit cache index outside 0-255 is treated.
///
/// Signed register values can be negative. Whichever policy is chosen, the
/// resolved index feeds both the data array and the validity bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum IndexPolicy {
    /// Reduce the index modulo 256 (`-1` addresses slot 255).
    #[default]
    Wrap,
    /// Treat a negative index as a fatal runtime error.
    Reject,
}

/// How the bracketed operand of `LD Rn, [Rm]` and `ST [Rm], Rn` is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum IndirectMode {
    /// Use the identifier of `Rm` (its zero-based index) as the cache index.
    #[default]
    #[serde(alias = "Id")]
    RegisterId,
    /// Use the value held in `Rm` when the instruction executes.
    #[serde(alias = "Value")]
    RegisterValue,
}

/// Root configuration structure.
///
/// Every field has a default, so `{}` is a valid configuration.
///
/// # Example (JSON)
///
/// ```
/// use bytesim_core::config::{Config, IndexPolicy, IndirectMode};
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_instructions": 1000 },
///     "memory": { "miss_latency": 100, "index_policy": "Reject", "indirect_mode": "RegisterValue" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_instructions, Some(1000));
/// assert_eq!(config.memory.hit_latency, 2);
/// assert_eq!(config.memory.miss_latency, 100);
/// assert_eq!(config.memory.index_policy, IndexPolicy::Reject);
/// assert_eq!(config.memory.indirect_mode, IndirectMode::RegisterValue);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General run control
    #[serde(default)]
    pub general: GeneralConfig,
    /// Local memory timing and addressing
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not valid JSON or contains
    /// values of the wrong type.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed instruction at `info` level instead of `trace`.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop with an error after this many executed instructions. `None` runs unbounded.
    #[serde(default)]
    pub max_instructions: Option<u64>,
}

/// Local memory (cache) configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Cycles charged when a load/store hits a touched slot.
    #[serde(default = "MemoryConfig::default_hit_latency")]
    pub hit_latency: u64,

    /// Cycles charged on the first load/store to a slot.
    #[serde(default = "MemoryConfig::default_miss_latency")]
    pub miss_latency: u64,

    /// Treatment of indices outside 0-255.
    #[serde(default)]
    pub index_policy: IndexPolicy,

    /// Resolution of bracketed `[Rm]` operands.
    #[serde(default)]
    pub indirect_mode: IndirectMode,
}

impl MemoryConfig {
    const fn default_hit_latency() -> u64 {
        defaults::HIT_LATENCY
    }

    const fn default_miss_latency() -> u64 {
        defaults::MISS_LATENCY
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            hit_latency: defaults::HIT_LATENCY,
            miss_latency: defaults::MISS_LATENCY,
            index_policy: IndexPolicy::default(),
            indirect_mode: IndirectMode::default(),
        }
    }
}
