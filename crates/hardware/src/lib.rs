//! Elastic valid/ready bus pipeline simulator library.
//!
//! This crate implements a cycle-accurate simulation of pipelined valid/ready
//! handshake relays with the following:
//! 1. **Pipeline:** A configurable-depth elastic relay (`BusPipeline`) advanced by a per-cycle tick.
//! 2. **AXI4 composition:** Five independent relays forming a full-bus register pipeline (`AxiPipeline`).
//! 3. **Payload:** An arbitrary-width, width-masked payload word shared by all channels.
//! 4. **Configuration:** Pipeline depth and AXI4 field widths (defaults, JSON deserialization, validation).
//! 5. **Statistics:** Per-relay transfer, stall, and reset counters.

/// AXI4 channel definitions and the five-channel composed pipeline.
pub mod axi;
/// Common types shared across the simulator (payload words).
pub mod common;
/// Simulator configuration (defaults, pipeline depth, AXI4 field widths).
pub mod config;
/// The elastic relay: per-tick handshake signals and the pipeline state machine.
pub mod pipeline;
/// Transfer and stall statistics collection.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Arbitrary-width payload word carried by a pipeline.
pub use crate::common::Payload;
/// Single elastic relay; construct with `BusPipeline::new(depth, width)`.
pub use crate::pipeline::BusPipeline;
/// Five-channel AXI4 pipeline; construct with `AxiPipeline::new(&config)`.
pub use crate::axi::AxiPipeline;
