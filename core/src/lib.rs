// Bitcoin Coin Definition
// =======================
//
// This crate supplies the consensus-relevant parameter set for the Bitcoin
// network family: the production network, the public test network, the local
// regression-test network and the deprecated second test network. A host
// chain library selects a `NetworkId` once at startup and calls into
// `BitcoinDefinition` whenever it needs a constant, the genesis block
// description, a subsidy amount, a checkpoint integrity check, a peer
// feature gate or an extension-hook object.
//
// Everything here is constant data plus pure dispatch. No operation performs
// I/O, and all values are immutable after construction, so one definition
// value can be shared across any number of threads.

pub mod checkpoints;
pub mod constants;
pub mod extensions;
pub mod features;
pub mod genesis;
pub mod hashes;
pub mod network;
pub mod params;
pub mod subsidy;

pub use checkpoints::{Checkpoint, CheckpointContainer, CheckpointStore};
pub use extensions::{BlockChainExtension, BlockHasher, DoubleSha256BlockHasher};
pub use features::{PeerVersionInfo, ServiceFlags};
pub use genesis::GenesisBlockInfo;
pub use hashes::BlockHash;
pub use network::NetworkId;
pub use params::{BitcoinDefinition, ConsensusParameters};

/// Errors surfaced by dispatch and integrity checks.
///
/// Every variant is fatal to the operation that raised it: an unrecognized
/// network is a host configuration bug, and a checkpoint violation means the
/// loaded ledger is corrupt or tampered with. Nothing here is transient or
/// worth retrying.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A network id outside the known closed set was presented to a dispatch
    /// function.
    #[error("unrecognized network variant: {0}")]
    UnrecognizedNetwork(&'static str),

    /// The checkpoint ledger and its externally declared size diverged.
    #[error("checkpoint store holds {stored} checkpoints, expected {expected}")]
    CheckpointCountMismatch { stored: usize, expected: usize },

    /// The ledger has no checkpoint before the anchor timestamp at all.
    #[error("no checkpoint found before timestamp {0}")]
    CheckpointMissing(u64),

    /// The checkpoint before the anchor timestamp does not match the
    /// hard-coded known-good fact.
    #[error(
        "checkpoint before {timestamp} is ({height}, {hash}), \
         expected ({expected_height}, {expected_hash})"
    )]
    CheckpointAnchorMismatch {
        timestamp: u64,
        height: u32,
        hash: String,
        expected_height: u32,
        expected_hash: String,
    },

    /// A string that should have been 64 hex digits of block hash was not.
    #[error("invalid block hash hex: {0}")]
    InvalidBlockHash(String),
}

pub type Result<T> = std::result::Result<T, Error>;
