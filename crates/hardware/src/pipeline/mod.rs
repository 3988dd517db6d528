//! The elastic relay pipeline.
//!
//! This module implements a single valid/ready handshake relay. It includes:
//! 1. **Signals:** Per-tick wire samples exchanged with the producer and consumer.
//! 2. **Bus Pipeline:** The configurable-depth register chain and its advance logic.

/// The pipeline state machine.
pub mod bus;

/// Per-tick handshake signal bundles.
pub mod signals;

pub use bus::BusPipeline;
pub use signals::{StageInput, StageOutput};
