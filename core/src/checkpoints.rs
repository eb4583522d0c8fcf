// Checkpoint Ledger Verification
// ==============================
//
// The host library builds and loads checkpoint files; this module supplies
// the hard-coded facts used to cross-check a loaded ledger once at startup.
// Any violation means the ledger is corrupt or tampered with, so failures
// are fatal to startup and never retried.

use serde::{Deserialize, Serialize};

use crate::hashes::BlockHash;
use crate::network::NetworkId;
use crate::params::BitcoinDefinition;
use crate::{Error, Result};

/// One (height, hash) fact asserted a priori to be part of the canonical
/// chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub height: u32,
    pub hash: BlockHash,
}

/// Read access to an externally loaded checkpoint ledger.
///
/// Heights are strictly increasing and each height maps to one hash; the
/// store owns that invariant, this crate only reads.
pub trait CheckpointStore {
    /// Number of checkpoints the store holds.
    fn checkpoint_count(&self) -> usize;

    /// The latest checkpoint strictly before `time` (seconds since epoch).
    fn checkpoint_before(&self, time: u64) -> Option<Checkpoint>;
}

/// Sink the definition writes its built-in checkpoint table into.
pub trait CheckpointContainer {
    fn put(&mut self, height: u32, hash: &str);
}

impl CheckpointContainer for Vec<(u32, String)> {
    fn put(&mut self, height: u32, hash: &str) {
        self.push((height, hash.to_string()));
    }
}

/// Built-in production-network checkpoints: the four blocks around the 2010
/// duplicate-coinbase incident plus one round-number anchor.
pub const MAINNET_CHECKPOINTS: [(u32, &str); 5] = [
    (91_722, "00000000000271a2dc26e7667f8419f2e15416dc6955e5a6c6cdf3f2574dd08e"),
    (91_812, "00000000000af0aed4792b1acee3d966af36cf5def14935db8de83d6f9306f2f"),
    (91_842, "00000000000a4d0a398161ffc163c503763b1f4360639393e0e4c8e300e0caec"),
    (91_880, "00000000000743f190a18c5577a3c2d2a1f610ae9601ac046a38084ccb7cd721"),
    (200_000, "000000000000034a7dedef4a161fa058a2d67a173a90155f3a2fe6fc132e0ebf"),
];

// Anchor facts for the boot-time ledger check; the timestamp is
// Thu Jan 23 19:00:00 CET 2014.
const ANCHOR_TIME: u64 = 1_390_500_000;
const MAIN_ANCHOR_HEIGHT: u32 = 280_224;
const MAIN_ANCHOR_HASH: &str = "00000000000000000b5d59a15f831e1c45cb688a4db6b0a60054d49a9997fa34";
const TEST_ANCHOR_HEIGHT: u32 = 167_328;
const TEST_ANCHOR_HASH: &str = "0000000000035ae7d5025c2538067fe7adb1cf5d5d9c31b024137d9090ed13a9";

impl BitcoinDefinition {
    /// Copies the built-in checkpoint table into `container`. Only the
    /// production network ships literal checkpoints.
    pub fn init_checkpoints<C: CheckpointContainer>(&self, container: &mut C) {
        for (height, hash) in MAINNET_CHECKPOINTS {
            container.put(height, hash);
        }
    }

    /// Boot-time integrity check of an externally loaded checkpoint ledger.
    ///
    /// The store's count must match the externally declared count on every
    /// variant. On the production and public test networks the latest
    /// checkpoint before a fixed historical timestamp must additionally
    /// equal a hard-coded anchor; the other variants have no meaningful
    /// checkpoint history to anchor against.
    pub fn checkpoints_sanity_check(
        &self,
        store: &impl CheckpointStore,
        external_count: usize,
        network: NetworkId,
    ) -> Result<()> {
        let stored = store.checkpoint_count();
        if stored != external_count {
            return Err(Error::CheckpointCountMismatch {
                stored,
                expected: external_count,
            });
        }

        let anchor = if network == NetworkId::MAIN {
            Some((MAIN_ANCHOR_HEIGHT, MAIN_ANCHOR_HASH))
        } else if network == NetworkId::TEST {
            Some((TEST_ANCHOR_HEIGHT, TEST_ANCHOR_HASH))
        } else {
            None
        };

        if let Some((expected_height, expected_hash)) = anchor {
            let checkpoint = store
                .checkpoint_before(ANCHOR_TIME)
                .ok_or(Error::CheckpointMissing(ANCHOR_TIME))?;
            if checkpoint.height != expected_height || checkpoint.hash.to_hex() != expected_hash {
                return Err(Error::CheckpointAnchorMismatch {
                    timestamp: ANCHOR_TIME,
                    height: checkpoint.height,
                    hash: checkpoint.hash.to_hex(),
                    expected_height,
                    expected_hash: expected_hash.to_string(),
                });
            }
        }

        Ok(())
    }
}
