//! Transfer and stall statistics collection.
//!
//! This module tracks observability counters for the bus pipelines. It provides:
//! 1. **Transfer counts:** Beats accepted from the producer and delivered to the consumer.
//! 2. **Stalls:** Cycles a side presented a beat the other side did not take.
//! 3. **Resets:** Reset assertions observed.
//!
//! Counters never influence handshake behavior; they exist for analysis only.

/// Counters accumulated by one relay across its lifetime.
///
/// All counts are per-tick events: a multi-cycle stall contributes one count
/// per stalled cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelayStats {
    /// Total tick invocations (including reset cycles).
    pub ticks: u64,
    /// Transfers captured from the producer (`din_vld && din_rdy` cycles).
    pub accepted: u64,
    /// Beats taken by the consumer (`dout_vld && dout_rdy` cycles).
    pub delivered: u64,
    /// Cycles the producer presented a beat the pipeline could not take.
    pub upstream_stalls: u64,
    /// Cycles the pipeline presented a beat the consumer did not take.
    pub downstream_stalls: u64,
    /// Reset cycles observed.
    pub resets: u64,
}

impl RelayStats {
    /// Transfers accepted but not yet delivered.
    ///
    /// Transfers flushed by a reset remain counted as accepted, so this can
    /// exceed the pipeline occupancy after a mid-flight reset.
    pub const fn in_flight(&self) -> u64 {
        self.accepted - self.delivered
    }

    /// Delivered beats per tick over the whole run (1.0 is full throughput).
    pub fn throughput(&self) -> f64 {
        if self.ticks == 0 {
            0.0
        } else {
            self.delivered as f64 / self.ticks as f64
        }
    }
}

/// Per-channel counter snapshot for a composed AXI4 pipeline.
#[derive(Clone, Debug, Default)]
pub struct AxiStats {
    /// Write address channel counters.
    pub aw: RelayStats,
    /// Write data channel counters.
    pub w: RelayStats,
    /// Write response channel counters.
    pub b: RelayStats,
    /// Read address channel counters.
    pub ar: RelayStats,
    /// Read data channel counters.
    pub r: RelayStats,
}
