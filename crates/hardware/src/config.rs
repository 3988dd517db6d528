//! Configuration system for the bus pipeline simulator.
//!
//! This module defines all configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline parameters matching a 64-bit AXI4 bus with one register stage.
//! 2. **Structures:** Hierarchical config for the pipeline and the AXI4 channel field widths.
//! 3. **Validation:** Width checks with typed errors.
//!
//! Configuration is supplied via JSON (`Config::from_json`) or use `Config::default()`.

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants for the simulator.
///
/// These values define the baseline bus configuration when not explicitly
/// overridden in a JSON configuration.
mod defaults {
    /// Default pipeline depth (one register stage per channel).
    ///
    /// Zero is a legal depth and turns every channel into a combinational
    /// passthrough.
    pub const PIPELINE_DEPTH: usize = 1;

    /// Transaction identifier width in bits.
    pub const ID_WIDTH: usize = 4;

    /// Address bus width in bits.
    pub const ADDR_WIDTH: usize = 64;

    /// Data bus width in bits.
    ///
    /// Must stay a multiple of 8: the write channel carries one strobe bit
    /// per data byte.
    pub const DATA_WIDTH: usize = 64;

    /// Burst length field width in bits (AXI4 fixes this at 8).
    pub const LEN_WIDTH: usize = 8;

    /// Transfer size field width in bits.
    pub const SIZE_WIDTH: usize = 3;

    /// Burst type field width in bits.
    pub const BURST_WIDTH: usize = 2;

    /// Lock field width in bits.
    pub const LOCK_WIDTH: usize = 1;

    /// Cache attribute field width in bits.
    pub const CACHE_WIDTH: usize = 4;

    /// Protection attribute field width in bits.
    pub const PROT_WIDTH: usize = 3;

    /// Response code field width in bits.
    pub const RESP_WIDTH: usize = 2;
}

/// Errors produced while parsing or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON input could not be deserialized.
    #[error("invalid JSON configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field width that must be positive was zero.
    #[error("{field} must be non-zero")]
    ZeroWidth {
        /// Name of the offending configuration field.
        field: &'static str,
    },

    /// The data bus width is not a whole number of bytes.
    #[error("data_width must be a multiple of 8, got {0}")]
    DataWidthAlignment(usize),
}

/// Root configuration for the simulator.
///
/// # Example
///
/// ```
/// use axipipe_core::Config;
///
/// let json = r#"{
///     "pipeline": { "depth": 2 },
///     "axi": { "data_width": 128 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.pipeline.depth, 2);
/// assert_eq!(config.axi.data_width, 128);
/// assert_eq!(config.axi.addr_width, 64);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Pipeline depth configuration, shared by all channels.
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// AXI4 channel field widths.
    #[serde(default)]
    pub axi: AxiConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the JSON is malformed or a width check
    /// fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all field widths.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a width that must be positive is zero,
    /// or when the data width is not a multiple of 8.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.axi.validate()
    }
}

/// Pipeline depth configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Number of register stages per channel; 0 means combinational passthrough.
    #[serde(default = "PipelineConfig::default_depth")]
    pub depth: usize,
}

impl PipelineConfig {
    /// Returns the default pipeline depth.
    fn default_depth() -> usize {
        defaults::PIPELINE_DEPTH
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            depth: defaults::PIPELINE_DEPTH,
        }
    }
}

/// AXI4 channel field widths.
///
/// Each composed channel's payload width is the concatenation of the fields
/// that channel carries; see [`crate::axi::AxiChannel::payload_width`].
#[derive(Debug, Clone, Deserialize)]
pub struct AxiConfig {
    /// Transaction identifier width in bits.
    #[serde(default = "AxiConfig::default_id_width")]
    pub id_width: usize,

    /// Address bus width in bits.
    #[serde(default = "AxiConfig::default_addr_width")]
    pub addr_width: usize,

    /// Data bus width in bits; must be a multiple of 8.
    #[serde(default = "AxiConfig::default_data_width")]
    pub data_width: usize,

    /// Burst length field width in bits.
    #[serde(default = "AxiConfig::default_len_width")]
    pub len_width: usize,

    /// Transfer size field width in bits.
    #[serde(default = "AxiConfig::default_size_width")]
    pub size_width: usize,

    /// Burst type field width in bits.
    #[serde(default = "AxiConfig::default_burst_width")]
    pub burst_width: usize,

    /// Lock field width in bits.
    #[serde(default = "AxiConfig::default_lock_width")]
    pub lock_width: usize,

    /// Cache attribute field width in bits.
    #[serde(default = "AxiConfig::default_cache_width")]
    pub cache_width: usize,

    /// Protection attribute field width in bits.
    #[serde(default = "AxiConfig::default_prot_width")]
    pub prot_width: usize,

    /// Response code field width in bits.
    #[serde(default = "AxiConfig::default_resp_width")]
    pub resp_width: usize,
}

impl AxiConfig {
    /// Write strobe width in bits: one strobe bit per data byte.
    #[inline(always)]
    pub const fn strb_width(&self) -> usize {
        self.data_width / 8
    }

    /// Validates every field width.
    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("id_width", self.id_width),
            ("addr_width", self.addr_width),
            ("data_width", self.data_width),
            ("len_width", self.len_width),
            ("size_width", self.size_width),
            ("burst_width", self.burst_width),
            ("lock_width", self.lock_width),
            ("cache_width", self.cache_width),
            ("prot_width", self.prot_width),
            ("resp_width", self.resp_width),
        ];
        for (field, width) in fields {
            if width == 0 {
                return Err(ConfigError::ZeroWidth { field });
            }
        }
        if self.data_width % 8 != 0 {
            return Err(ConfigError::DataWidthAlignment(self.data_width));
        }
        Ok(())
    }

    /// Returns the default transaction identifier width.
    fn default_id_width() -> usize {
        defaults::ID_WIDTH
    }

    /// Returns the default address bus width.
    fn default_addr_width() -> usize {
        defaults::ADDR_WIDTH
    }

    /// Returns the default data bus width.
    fn default_data_width() -> usize {
        defaults::DATA_WIDTH
    }

    /// Returns the default burst length field width.
    fn default_len_width() -> usize {
        defaults::LEN_WIDTH
    }

    /// Returns the default transfer size field width.
    fn default_size_width() -> usize {
        defaults::SIZE_WIDTH
    }

    /// Returns the default burst type field width.
    fn default_burst_width() -> usize {
        defaults::BURST_WIDTH
    }

    /// Returns the default lock field width.
    fn default_lock_width() -> usize {
        defaults::LOCK_WIDTH
    }

    /// Returns the default cache attribute field width.
    fn default_cache_width() -> usize {
        defaults::CACHE_WIDTH
    }

    /// Returns the default protection attribute field width.
    fn default_prot_width() -> usize {
        defaults::PROT_WIDTH
    }

    /// Returns the default response code field width.
    fn default_resp_width() -> usize {
        defaults::RESP_WIDTH
    }
}

impl Default for AxiConfig {
    /// Creates the default AXI4 field widths (64-bit data and address buses).
    fn default() -> Self {
        Self {
            id_width: defaults::ID_WIDTH,
            addr_width: defaults::ADDR_WIDTH,
            data_width: defaults::DATA_WIDTH,
            len_width: defaults::LEN_WIDTH,
            size_width: defaults::SIZE_WIDTH,
            burst_width: defaults::BURST_WIDTH,
            lock_width: defaults::LOCK_WIDTH,
            cache_width: defaults::CACHE_WIDTH,
            prot_width: defaults::PROT_WIDTH,
            resp_width: defaults::RESP_WIDTH,
        }
    }
}
