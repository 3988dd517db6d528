//! Common types used throughout the bus pipeline simulator.
//!
//! This module provides the building blocks shared by the relay and the AXI4
//! composition. It includes:
//! 1. **Payload Words:** An arbitrary-width, width-masked payload type carried by every channel.

/// Arbitrary-width payload word type.
pub mod payload;

pub use payload::Payload;
