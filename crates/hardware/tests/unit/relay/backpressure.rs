//! Backpressure safety tests.
//!
//! A stalled consumer must never cost a buffered transfer: the oldest beat
//! stays presented and unchanged for arbitrarily many cycles, and the whole
//! buffer drains oldest-first once the stall lifts.

use axipipe_core::{BusPipeline, Payload};
use axipipe_core::pipeline::StageInput;
use pretty_assertions::assert_eq;

use crate::common::harness::RelayHarness;

fn fill(pipe: &mut BusPipeline, values: &[u64]) {
    for &value in values {
        let out = pipe.tick(false, &StageInput::offer(Payload::from_u64(value, pipe.width())));
        assert!(out.din_rdy, "fill should be accepted while the pipeline has room");
    }
}

#[test]
fn oldest_beat_survives_long_stall() {
    let mut pipe = BusPipeline::new(4, 16);
    fill(&mut pipe, &[0xAAAA, 0xBBBB]);

    for _ in 0..200 {
        let out = pipe.tick(false, &StageInput::idle(16));
        if out.dout_vld {
            assert_eq!(out.dout.low_u64(), 0xAAAA);
        }
    }
    assert_eq!(pipe.occupancy(), 2);
    assert_eq!(pipe.stats().delivered, 0);
}

#[test]
fn drains_oldest_first_after_release() {
    let mut pipe = BusPipeline::new(4, 16);
    fill(&mut pipe, &[1, 2, 3, 4]);

    // Pipeline is full and the consumer is stalled.
    for _ in 0..10 {
        let out = pipe.tick(false, &StageInput::idle(16));
        assert!(!out.din_rdy);
    }

    let mut drained = Vec::new();
    for _ in 0..8 {
        let out = pipe.tick(false, &StageInput::idle(16).with_ready(true));
        if out.dout_vld {
            drained.push(out.dout.low_u64());
        }
    }
    assert_eq!(drained, vec![1, 2, 3, 4]);
    assert!(pipe.is_empty());
}

#[test]
fn producer_sees_not_ready_while_full_and_stalled() {
    let mut pipe = BusPipeline::new(2, 8);
    fill(&mut pipe, &[7, 8]);

    let before = pipe.stats().accepted;
    for _ in 0..5 {
        let out = pipe.tick(false, &StageInput::offer(Payload::from_u64(9, 8)));
        assert!(!out.din_rdy);
    }
    assert_eq!(pipe.stats().accepted, before);
    assert_eq!(pipe.stats().upstream_stalls, 5);
}

/// A very sparse consumer: one ready cycle in eleven, against a continuously
/// pushing producer.
#[test]
fn sparse_ready_pattern_preserves_sequence() {
    let data: Vec<u64> = (0..64u64).map(|i| i.wrapping_mul(0x1111_1111)).collect();
    let mut ready = vec![false; 10];
    ready.push(true);

    for depth in [1usize, 2, 4, 8] {
        let mut harness = RelayHarness::new(depth, 32);
        let masked: Vec<u64> = data.iter().map(|v| v & 0xFFFF_FFFF).collect();
        let received = harness.run_stream(&masked, &[], &ready);
        assert_eq!(received, masked, "depth {depth}");
    }
}

#[test]
fn downstream_stalls_are_counted() {
    let mut pipe = BusPipeline::new(1, 8);
    fill(&mut pipe, &[5]);
    for _ in 0..3 {
        let _ = pipe.tick(false, &StageInput::idle(8));
    }
    assert_eq!(pipe.stats().downstream_stalls, 3);
}
