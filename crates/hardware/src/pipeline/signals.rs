//! Per-tick handshake signal bundles.
//!
//! This module defines the wire samples exchanged with a [`crate::pipeline::BusPipeline`]
//! on every clock edge:
//! 1. **Input Sample:** The upstream payload/valid pair and the downstream ready.
//! 2. **Output Sample:** The upstream ready and the downstream payload/valid pair.
//!
//! A transfer is accepted upstream exactly when `din_vld && din_rdy` in one
//! tick, and delivered downstream exactly when `dout_vld && dout_rdy`.

use crate::common::Payload;

/// Signals driven into a pipeline for one clock cycle.
#[derive(Clone, Debug)]
pub struct StageInput {
    /// Upstream payload bus. Like a hardware bus, it always carries bits;
    /// they are meaningful only while `din_vld` is asserted.
    pub din: Payload,
    /// Upstream validity: the producer is presenting `din` this cycle.
    pub din_vld: bool,
    /// Downstream readiness: the consumer will take a beat this cycle.
    pub dout_rdy: bool,
}

impl StageInput {
    /// An idle cycle: no payload presented, consumer not ready.
    pub fn idle(width: usize) -> Self {
        Self {
            din: Payload::zero(width),
            din_vld: false,
            dout_rdy: false,
        }
    }

    /// Presents a payload upstream (consumer not ready).
    pub const fn offer(din: Payload) -> Self {
        Self {
            din,
            din_vld: true,
            dout_rdy: false,
        }
    }

    /// Sets the downstream ready signal for this cycle.
    #[must_use]
    pub const fn with_ready(mut self, dout_rdy: bool) -> Self {
        self.dout_rdy = dout_rdy;
        self
    }
}

/// Signals driven by a pipeline during one clock cycle.
#[derive(Clone, Debug)]
pub struct StageOutput {
    /// Upstream readiness: the stage will capture `din` this cycle if the
    /// producer asserts `din_vld`.
    pub din_rdy: bool,
    /// Downstream payload bus. Carries bits every cycle; consumers must read
    /// it only while `dout_vld` is asserted (after a reset it may still hold
    /// stale data from a flushed transfer).
    pub dout: Payload,
    /// Downstream validity: a beat is presented this cycle and will be held
    /// unchanged until the consumer asserts ready.
    pub dout_vld: bool,
}
