//! Elastic bus pipeline state machine.
//!
//! This module implements the relay at the heart of the simulator: a chain of
//! register stages that decouples a valid/ready producer from a valid/ready
//! consumer. It provides:
//! 1. **Elastic Buffering:** Up to `depth` in-flight transfers, strict FIFO order.
//! 2. **Bubble Propagation:** A single back-to-front pass per tick decides which
//!    stages advance, so backpressure reaches the producer without data loss.
//! 3. **Passthrough:** Depth 0 degenerates to a purely combinational wire.
//! 4. **Reset Dominance:** Reset is checked first in every tick and flushes all
//!    validity bits in the same evaluation.

use tracing::trace;

use crate::common::Payload;
use crate::pipeline::signals::{StageInput, StageOutput};
use crate::stats::RelayStats;

/// One register stage: a payload word plus its validity bit.
///
/// The validity bit is the sole source of truth for live data. Clearing it
/// leaves the payload register holding its last contents, exactly as a
/// hardware register without a reset term on the data path would.
#[derive(Clone, Debug)]
struct Slot {
    data: Payload,
    valid: bool,
}

/// A pipelined valid/ready relay of fixed depth and payload width.
///
/// The pipeline obeys the AXI-style handshake contract on both boundaries:
/// `dout_vld` is never asserted without content and holds the same beat until
/// `dout_rdy` is observed high in the same cycle; `din_rdy` may drop at any
/// time to exert backpressure. Transfers exit unmodified, exactly once, in
/// the order they entered. The producer must hold `din`/`din_vld` stable
/// until it observes `din_rdy`; violating that is outside the contract.
///
/// Advance the pipeline by calling [`BusPipeline::tick`] exactly once per
/// global clock cycle.
#[derive(Clone, Debug)]
pub struct BusPipeline {
    depth: usize,
    width: usize,
    /// Register chain; slot 0 is nearest the input, the last slot drives the output.
    slots: Vec<Slot>,
    stats: RelayStats,
}

impl BusPipeline {
    /// Creates an empty pipeline.
    ///
    /// # Arguments
    ///
    /// * `depth` - Number of register stages; 0 selects combinational passthrough.
    /// * `width` - Payload width in bits; must be at least 1.
    pub fn new(depth: usize, width: usize) -> Self {
        debug_assert!(width > 0, "payload width must be positive");
        Self {
            depth,
            width,
            slots: vec![
                Slot {
                    data: Payload::zero(width),
                    valid: false,
                };
                depth
            ],
            stats: RelayStats::default(),
        }
    }

    /// Returns the configured depth.
    #[inline(always)]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the payload width in bits.
    #[inline(always)]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of transfers currently buffered.
    pub fn occupancy(&self) -> usize {
        self.slots.iter().filter(|slot| slot.valid).count()
    }

    /// Returns true when no transfer is buffered.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| !slot.valid)
    }

    /// Returns true when the output stage holds a beat.
    ///
    /// Always false for depth 0, which holds nothing between ticks.
    pub fn output_valid(&self) -> bool {
        self.slots.last().is_some_and(|slot| slot.valid)
    }

    /// Transfer and stall counters accumulated so far.
    pub const fn stats(&self) -> &RelayStats {
        &self.stats
    }

    /// Would a beat presented this cycle be accepted, given the consumer's
    /// readiness?
    ///
    /// This is the same value `tick` returns as `din_rdy` for the current
    /// state. The back-to-front advance chain collapses to a closed form: a
    /// bubble anywhere in the chain absorbs one beat this edge, and a full
    /// chain accepts exactly when the consumer takes one.
    pub fn can_accept(&self, dout_rdy: bool) -> bool {
        if self.depth == 0 {
            return dout_rdy;
        }
        self.slots.iter().any(|slot| !slot.valid) || dout_rdy
    }

    /// Flushes all validity bits, discarding in-flight transfers.
    ///
    /// Payload registers are deliberately left holding their last contents;
    /// only the validity bits are cleared. Consumers must gate payload reads
    /// on `dout_vld`.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.valid = false;
        }
    }

    /// Advances the pipeline by one clock cycle.
    ///
    /// Outputs are sampled from pre-edge state (`dout`/`dout_vld` are
    /// registered), except `din_rdy`, which folds the consumer's readiness
    /// through the occupancy chain the way the combinational ready path does
    /// in hardware. A transfer is captured exactly when `din_vld && din_rdy`
    /// and a beat leaves exactly when `dout_vld && dout_rdy`, both within
    /// this cycle.
    ///
    /// # Arguments
    ///
    /// * `rst` - Reset, dominant over all other logic: every validity bit is
    ///   forced low and both `dout_vld` and `din_rdy` are held low this cycle.
    /// * `input` - The producer/consumer wire sample for this cycle.
    pub fn tick(&mut self, rst: bool, input: &StageInput) -> StageOutput {
        debug_assert_eq!(
            input.din.width(),
            self.width,
            "input payload width does not match the pipeline"
        );
        self.stats.ticks += 1;

        if rst {
            return self.tick_reset(input);
        }
        if self.depth == 0 {
            return self.tick_passthrough(input);
        }
        self.tick_registered(input)
    }

    /// Reset cycle: flush validity, hold both handshake outputs low.
    ///
    /// A low `din_rdy` during reset can never be misread as an accept. The
    /// output payload bus still carries bits (stale ones, for a registered
    /// pipeline), gated by the forced-low `dout_vld`.
    fn tick_reset(&mut self, input: &StageInput) -> StageOutput {
        if !self.is_empty() {
            trace!(
                depth = self.depth,
                flushed = self.occupancy(),
                "reset flushed in-flight transfers"
            );
        }
        self.stats.resets += 1;
        self.reset();
        let dout = self
            .slots
            .last()
            .map_or_else(|| input.din.clone(), |slot| slot.data.clone());
        StageOutput {
            din_rdy: false,
            dout,
            dout_vld: false,
        }
    }

    /// Depth-0 cycle: ready, valid, and payload propagate combinationally.
    fn tick_passthrough(&mut self, input: &StageInput) -> StageOutput {
        if input.din_vld {
            if input.dout_rdy {
                self.stats.accepted += 1;
                self.stats.delivered += 1;
            } else {
                // One stalled cycle blocks the producer and holds the beat
                // toward the consumer simultaneously.
                self.stats.upstream_stalls += 1;
                self.stats.downstream_stalls += 1;
            }
        }
        StageOutput {
            din_rdy: input.dout_rdy,
            dout: input.din.clone(),
            dout_vld: input.din_vld,
        }
    }

    /// Registered cycle: one back-to-front sweep decides and applies every
    /// stage's advance for this edge.
    fn tick_registered(&mut self, input: &StageInput) -> StageOutput {
        let last = self.depth - 1;

        // Registered outputs: the beat presented this cycle is the pre-edge
        // content of the output stage.
        let dout_vld = self.slots[last].valid;
        let dout = self.slots[last].data.clone();

        // Output stage leaves the pipeline when the consumer takes it.
        if self.slots[last].valid && input.dout_rdy {
            self.slots[last].valid = false;
            self.stats.delivered += 1;
        } else if self.slots[last].valid {
            self.stats.downstream_stalls += 1;
        }

        // Back-to-front sweep: once slot i+1 has been processed, its validity
        // bit already reflects this edge's vacancy, so slot i advances exactly
        // when that bit is clear. Copying (not moving) the payload mirrors the
        // hardware register chain, where the source register keeps its value.
        for i in (0..last).rev() {
            if self.slots[i].valid && !self.slots[i + 1].valid {
                self.slots[i + 1].data = self.slots[i].data.clone();
                self.slots[i + 1].valid = true;
                self.slots[i].valid = false;
            }
        }

        // Input stage: ready exactly when slot 0 is empty or vacated this edge.
        let din_rdy = !self.slots[0].valid;
        if input.din_vld {
            if din_rdy {
                self.slots[0].data = input.din.clone();
                self.slots[0].valid = true;
                self.stats.accepted += 1;
            } else {
                self.stats.upstream_stalls += 1;
            }
        }

        StageOutput {
            din_rdy,
            dout,
            dout_vld,
        }
    }
}
