//! Five-channel composed AXI4 pipeline.
//!
//! This module assembles one relay per AXI4 channel into a structural
//! aggregate. There is no state machine here and no data flow between
//! channels: each channel independently owns its slots, and the aggregate's
//! correctness reduces to each relay honoring the handshake contract on its
//! own. The only shared signal is reset, which flushes all five channels in
//! the same cycle.

use tracing::debug;

use crate::axi::channel::AxiChannel;
use crate::config::Config;
use crate::pipeline::{BusPipeline, StageInput, StageOutput};
use crate::stats::AxiStats;

/// Wire samples driven into all five channels for one clock cycle.
#[derive(Clone, Debug)]
pub struct AxiInputs {
    /// Write address channel sample.
    pub aw: StageInput,
    /// Write data channel sample.
    pub w: StageInput,
    /// Write response channel sample.
    pub b: StageInput,
    /// Read address channel sample.
    pub ar: StageInput,
    /// Read data channel sample.
    pub r: StageInput,
}

impl AxiInputs {
    /// An all-idle cycle: no channel presents a beat, no consumer is ready.
    ///
    /// Payload buses are sized from the configured field widths.
    pub fn idle(config: &Config) -> Self {
        let sample = |ch: AxiChannel| StageInput::idle(ch.payload_width(&config.axi));
        Self {
            aw: sample(AxiChannel::Aw),
            w: sample(AxiChannel::W),
            b: sample(AxiChannel::B),
            ar: sample(AxiChannel::Ar),
            r: sample(AxiChannel::R),
        }
    }

    /// Marks every channel's consumer as ready for this cycle.
    #[must_use]
    pub const fn with_all_ready(mut self) -> Self {
        self.aw.dout_rdy = true;
        self.w.dout_rdy = true;
        self.b.dout_rdy = true;
        self.ar.dout_rdy = true;
        self.r.dout_rdy = true;
        self
    }

    /// Borrows the sample for the given channel.
    pub const fn channel(&self, ch: AxiChannel) -> &StageInput {
        match ch {
            AxiChannel::Aw => &self.aw,
            AxiChannel::W => &self.w,
            AxiChannel::B => &self.b,
            AxiChannel::Ar => &self.ar,
            AxiChannel::R => &self.r,
        }
    }

    /// Mutably borrows the sample for the given channel.
    pub const fn channel_mut(&mut self, ch: AxiChannel) -> &mut StageInput {
        match ch {
            AxiChannel::Aw => &mut self.aw,
            AxiChannel::W => &mut self.w,
            AxiChannel::B => &mut self.b,
            AxiChannel::Ar => &mut self.ar,
            AxiChannel::R => &mut self.r,
        }
    }
}

/// Wire samples driven by all five channels during one clock cycle.
#[derive(Clone, Debug)]
pub struct AxiOutputs {
    /// Write address channel sample.
    pub aw: StageOutput,
    /// Write data channel sample.
    pub w: StageOutput,
    /// Write response channel sample.
    pub b: StageOutput,
    /// Read address channel sample.
    pub ar: StageOutput,
    /// Read data channel sample.
    pub r: StageOutput,
}

impl AxiOutputs {
    /// Borrows the sample for the given channel.
    pub const fn channel(&self, ch: AxiChannel) -> &StageOutput {
        match ch {
            AxiChannel::Aw => &self.aw,
            AxiChannel::W => &self.w,
            AxiChannel::B => &self.b,
            AxiChannel::Ar => &self.ar,
            AxiChannel::R => &self.r,
        }
    }
}

/// A register pipeline across a full AXI4 interface.
///
/// Five independent [`BusPipeline`] instances, one per channel, each sized to
/// its channel's payload width and all sharing the configured depth. Advance
/// with [`AxiPipeline::tick`] exactly once per global clock cycle.
#[derive(Clone, Debug)]
pub struct AxiPipeline {
    aw: BusPipeline,
    w: BusPipeline,
    b: BusPipeline,
    ar: BusPipeline,
    r: BusPipeline,
}

impl AxiPipeline {
    /// Creates an empty pipeline from a validated configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Pipeline depth and AXI4 field widths; validate with
    ///   [`Config::validate`] first when the values come from outside.
    pub fn new(config: &Config) -> Self {
        let depth = config.pipeline.depth;
        let relay = |ch: AxiChannel| BusPipeline::new(depth, ch.payload_width(&config.axi));
        debug!(
            depth,
            aw_width = AxiChannel::Aw.payload_width(&config.axi),
            w_width = AxiChannel::W.payload_width(&config.axi),
            b_width = AxiChannel::B.payload_width(&config.axi),
            r_width = AxiChannel::R.payload_width(&config.axi),
            "constructed AXI pipeline"
        );
        Self {
            aw: relay(AxiChannel::Aw),
            w: relay(AxiChannel::W),
            b: relay(AxiChannel::B),
            ar: relay(AxiChannel::Ar),
            r: relay(AxiChannel::R),
        }
    }

    /// Advances all five channels by one clock cycle.
    ///
    /// The reset input is shared: when asserted, every channel flushes in the
    /// same evaluation. Handshake samples are forwarded to each channel
    /// untouched; nothing crosses between channels.
    pub fn tick(&mut self, rst: bool, inputs: &AxiInputs) -> AxiOutputs {
        AxiOutputs {
            aw: self.aw.tick(rst, &inputs.aw),
            w: self.w.tick(rst, &inputs.w),
            b: self.b.tick(rst, &inputs.b),
            ar: self.ar.tick(rst, &inputs.ar),
            r: self.r.tick(rst, &inputs.r),
        }
    }

    /// Flushes every channel's validity bits.
    pub fn reset(&mut self) {
        self.aw.reset();
        self.w.reset();
        self.b.reset();
        self.ar.reset();
        self.r.reset();
    }

    /// Returns true when no channel buffers a transfer.
    pub fn is_empty(&self) -> bool {
        AxiChannel::ALL.iter().all(|&ch| self.channel(ch).is_empty())
    }

    /// Borrows the relay for the given channel.
    pub const fn channel(&self, ch: AxiChannel) -> &BusPipeline {
        match ch {
            AxiChannel::Aw => &self.aw,
            AxiChannel::W => &self.w,
            AxiChannel::B => &self.b,
            AxiChannel::Ar => &self.ar,
            AxiChannel::R => &self.r,
        }
    }

    /// Write address channel relay.
    pub const fn aw(&self) -> &BusPipeline {
        &self.aw
    }

    /// Write data channel relay.
    pub const fn w(&self) -> &BusPipeline {
        &self.w
    }

    /// Write response channel relay.
    pub const fn b(&self) -> &BusPipeline {
        &self.b
    }

    /// Read address channel relay.
    pub const fn ar(&self) -> &BusPipeline {
        &self.ar
    }

    /// Read data channel relay.
    pub const fn r(&self) -> &BusPipeline {
        &self.r
    }

    /// Snapshot of every channel's counters.
    pub fn stats(&self) -> AxiStats {
        AxiStats {
            aw: self.aw.stats().clone(),
            w: self.w.stats().clone(),
            b: self.b.stats().clone(),
            ar: self.ar.stats().clone(),
            r: self.r.stats().clone(),
        }
    }
}
