// Block subsidy schedule

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::constants::FIFTY_COINS;

/// Reward for the block at `height` under the given halving interval.
///
/// The base reward is shifted right once per elapsed halving interval, in
/// arbitrary precision: once the shift count passes the value's width the
/// reward is exactly zero, with no wrap and no floating-point drift.
pub fn reward_at(height: u64, halving_interval: u64) -> u64 {
    let halvings = (height + 1) / halving_interval;
    let reward = BigUint::from(FIFTY_COINS) >> halvings;
    // The shifted value can only shrink below FIFTY_COINS.
    reward.to_u64().expect("shifted reward fits in 64 bits")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SUBSIDY_DECREASE_BLOCK_COUNT, SUBSIDY_DECREASE_BLOCK_COUNT_REGTEST};

    const MAIN_INTERVAL: u64 = SUBSIDY_DECREASE_BLOCK_COUNT as u64;
    const REGTEST_INTERVAL: u64 = SUBSIDY_DECREASE_BLOCK_COUNT_REGTEST as u64;

    #[test]
    fn production_schedule() {
        assert_eq!(reward_at(0, MAIN_INTERVAL), 50 * 100_000_000);
        assert_eq!(reward_at(210_000, MAIN_INTERVAL), 25 * 100_000_000);
        assert_eq!(reward_at(420_000, MAIN_INTERVAL), 1_250_000_000);
    }

    #[test]
    fn regtest_halves_quickly() {
        assert_eq!(reward_at(0, REGTEST_INTERVAL), 50 * 100_000_000);
        assert_eq!(reward_at(150, REGTEST_INTERVAL), 25 * 100_000_000);
        assert_eq!(reward_at(300, REGTEST_INTERVAL), 1_250_000_000);
    }

    #[test]
    fn reward_is_monotonically_non_increasing() {
        let mut previous = u64::MAX;
        for height in (0u64..2_000_000).step_by(10_007) {
            let reward = reward_at(height, MAIN_INTERVAL);
            assert!(reward <= previous, "reward rose at height {height}");
            previous = reward;
        }
    }

    #[test]
    fn reward_reaches_exact_zero() {
        // 50 BTC in satoshis fits in 33 bits, so 33 halvings exhaust it.
        assert_eq!(reward_at(32 * 210_000, MAIN_INTERVAL), 1);
        assert_eq!(reward_at(33 * 210_000, MAIN_INTERVAL), 0);
        // Far past any representable shift width, still exactly zero.
        assert_eq!(reward_at(u64::MAX / 2, MAIN_INTERVAL), 0);
    }
}
