// Per-Coin Extension Hooks
// ========================
//
// The host library consults a fixed set of hook points while processing
// blocks, transactions, peers and wallets. Bitcoin needs real behavior at
// exactly two of them: block hashing and the difficulty-rule cut-over on the
// chain extension. Every other hook resolves to a stateless empty value that
// is safe to share between threads and calls. Hooks are plain values
// selected here at construction time, not a subclass hierarchy.

use crate::hashes::{calculate_double_sha256, BlockHash};
use crate::params::BitcoinDefinition;

/// Computes the consensus hash of a serialized block header.
pub trait BlockHasher {
    fn block_hash(&self, header: &[u8]) -> BlockHash;
}

/// Bitcoin block hashing: two rounds of SHA-256 over the 80-byte header.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleSha256BlockHasher;

impl BlockHasher for DoubleSha256BlockHasher {
    fn block_hash(&self, header: &[u8]) -> BlockHash {
        BlockHash::from_bytes(calculate_double_sha256(header))
    }
}

/// Chain-extension policy decisions the host defers to the coin.
pub trait BlockChainExtension {
    /// True once `time` (milliseconds since epoch) falls on or after the
    /// date the test networks switched difficulty-retarget rules.
    fn difficulty_rule_changed(&self, time: u64) -> bool;
}

// 2012-02-15, the testnet difficulty-algorithm change date, in milliseconds.
const TESTNET_DIFF_DATE: u64 = 1_329_264_000_000;

/// Linear (non-forking) chain extension pinned to the fixed historical
/// rule-change date.
#[derive(Debug, Clone, Copy)]
pub struct LinearBlockChainExtension {
    diff_change_time: u64,
}

impl LinearBlockChainExtension {
    pub const fn new(diff_change_time: u64) -> Self {
        LinearBlockChainExtension { diff_change_time }
    }

    pub const fn diff_change_time(&self) -> u64 {
        self.diff_change_time
    }
}

impl BlockChainExtension for LinearBlockChainExtension {
    fn difficulty_rule_changed(&self, time: u64) -> bool {
        time >= self.diff_change_time
    }
}

/// Stateless placeholders for the hook points Bitcoin leaves empty. Each
/// hook keeps its own type so call sites stay strongly typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyBlockExtension;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyTransactionExtension;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyCoinSerializerExtension;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyPeerExtension;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyPeerGroupExtension;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyTransactionConfidenceExtension;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyWalletCoinSpecifics;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyWalletSerializerExtension;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyNetworkExtensions;

impl BitcoinDefinition {
    pub fn create_block_hasher(&self) -> DoubleSha256BlockHasher {
        DoubleSha256BlockHasher
    }

    /// The one hook besides hashing with real behavior: a linear chain
    /// extension carrying the difficulty-rule change date.
    pub fn create_block_chain_extension<C>(&self, _block_chain: &C) -> LinearBlockChainExtension {
        LinearBlockChainExtension::new(TESTNET_DIFF_DATE)
    }

    pub fn create_block_extension<B>(&self, _block: &B) -> EmptyBlockExtension {
        EmptyBlockExtension
    }

    pub fn create_transaction_extension<T>(&self, _transaction: &T) -> EmptyTransactionExtension {
        EmptyTransactionExtension
    }

    pub fn create_coin_serializer_extension(&self) -> EmptyCoinSerializerExtension {
        EmptyCoinSerializerExtension
    }

    pub fn create_peer_extension<P>(&self, _peer: &P) -> EmptyPeerExtension {
        EmptyPeerExtension
    }

    pub fn create_peer_group_extension<G>(&self, _peer_group: &G) -> EmptyPeerGroupExtension {
        EmptyPeerGroupExtension
    }

    pub fn create_transaction_confidence_extension<T>(
        &self,
        _confidence: &T,
    ) -> EmptyTransactionConfidenceExtension {
        EmptyTransactionConfidenceExtension
    }

    pub fn create_wallet_coin_specifics<W>(&self, _wallet: &W) -> EmptyWalletCoinSpecifics {
        EmptyWalletCoinSpecifics
    }

    pub fn create_wallet_serializer_extension<S>(
        &self,
        _serializer: &S,
    ) -> EmptyWalletSerializerExtension {
        EmptyWalletSerializerExtension
    }

    pub fn create_network_extensions_container(&self) -> EmptyNetworkExtensions {
        EmptyNetworkExtensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEF: BitcoinDefinition = BitcoinDefinition::new();

    #[test]
    fn hasher_reproduces_the_genesis_hash() {
        let header = hex::decode(
            "0100000000000000000000000000000000000000000000000000000000000000\
             000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa\
             4b1e5e4a29ab5f49ffff001d1dac2b7c",
        )
        .unwrap();
        let hasher = DEF.create_block_hasher();
        assert_eq!(
            hasher.block_hash(&header).to_hex(),
            "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
        );
    }

    #[test]
    fn chain_extension_switches_at_the_diff_date() {
        let extension = DEF.create_block_chain_extension(&());
        assert_eq!(extension.diff_change_time(), 1_329_264_000_000);
        assert!(!extension.difficulty_rule_changed(1_329_263_999_999));
        assert!(extension.difficulty_rule_changed(1_329_264_000_000));
        assert!(extension.difficulty_rule_changed(1_400_000_000_000));
    }

    #[test]
    fn empty_hooks_are_shareable_values() {
        // Zero-sized and Copy: handing them out per call costs nothing.
        assert_eq!(std::mem::size_of::<EmptyPeerExtension>(), 0);
        let a = DEF.create_block_extension(&());
        let b = DEF.create_block_extension(&"another host block type");
        assert_eq!(a, b);
        let _ = DEF.create_transaction_extension(&());
        let _ = DEF.create_coin_serializer_extension();
        let _ = DEF.create_peer_group_extension(&());
        let _ = DEF.create_transaction_confidence_extension(&());
        let _ = DEF.create_wallet_coin_specifics(&());
        let _ = DEF.create_wallet_serializer_extension(&());
        let _ = DEF.create_network_extensions_container();
    }
}
