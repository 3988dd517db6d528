//! AXI4 five-channel bus pipeline.
//!
//! This module composes five independent relays into a full AXI4 register
//! pipeline. It includes:
//! 1. **Channels:** The five AXI4 sub-buses (AW, W, B, AR, R) and their payload widths.
//! 2. **Composition:** A structural aggregate that ticks all five relays in lockstep.

/// Channel identities and payload width derivation.
pub mod channel;

/// The composed five-channel pipeline.
pub mod pipeline;

pub use channel::AxiChannel;
pub use pipeline::{AxiInputs, AxiOutputs, AxiPipeline};
