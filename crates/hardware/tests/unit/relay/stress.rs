//! Randomized stress tests.
//!
//! Property: for any compliant producer pattern (arbitrary idle gaps) and any
//! consumer pattern (arbitrary backpressure), the delivered sequence equals
//! the presented sequence — no loss, no duplication, no reordering — at every
//! depth including passthrough.

use proptest::prelude::*;

use crate::common::harness::RelayHarness;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn no_loss_no_duplication_no_reorder(
        depth in 0usize..5,
        data in proptest::collection::vec(any::<u64>(), 1..64),
        idle in proptest::collection::vec(0usize..4, 1..8),
        ready in proptest::collection::vec(any::<bool>(), 1..12),
    ) {
        // The consumer must be ready eventually or nothing ever drains.
        let mut ready = ready;
        if !ready.contains(&true) {
            ready.push(true);
        }

        let masked: Vec<u64> = data.iter().map(|v| v & 0xFFFF_FFFF).collect();
        let mut harness = RelayHarness::new(depth, 32);
        let received = harness.run_stream(&masked, &idle, &ready);
        prop_assert_eq!(received, masked);

        // Acceptance bookkeeping must agree with the drained stream.
        prop_assert_eq!(harness.pipe.stats().accepted, data.len() as u64);
        prop_assert_eq!(harness.pipe.stats().delivered, data.len() as u64);
    }

    #[test]
    fn extreme_bit_patterns_survive(depth in 0usize..5) {
        let patterns: Vec<u64> = vec![
            0,
            u64::MAX & 0xFFFF_FFFF,
            0x5555_5555,
            0xAAAA_AAAA,
            1,
            0x8000_0000,
        ];
        let data: Vec<u64> = patterns.iter().cycle().take(30).copied().collect();
        let mut harness = RelayHarness::new(depth, 32);
        let received = harness.run_stream(&data, &[0, 1, 0, 2], &[true, false, true]);
        prop_assert_eq!(received, data);
    }
}
