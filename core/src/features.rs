// Peer Feature Gates
// ==================
//
// Pure predicates over what a peer announced in its version handshake. The
// thresholds live here so the host library never hard-codes protocol
// versions per coin.

use bitflags::bitflags;

use crate::params::BitcoinDefinition;

bitflags! {
    /// Service bits a peer announces in its version message.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ServiceFlags: u64 {
        /// The peer keeps a full copy of the block chain.
        const NODE_NETWORK = 1;
        /// The peer answers getutxos queries.
        const NODE_GETUTXOS = 2;
    }
}

/// Smallest protocol version that understands bloom-filtered connections.
pub const BLOOM_FILTERING_MIN_PROTOCOL_VERSION: u32 = 70000;
/// Smallest protocol version that may answer getutxos queries.
pub const GETUTXOS_MIN_PROTOCOL_VERSION: u32 = 70003;
/// Smallest protocol version that answers ping with pong (BIP 31); anything
/// beyond 60000.
pub const PONG_MIN_PROTOCOL_VERSION: u32 = 60001;

/// What a negotiated peer announced about itself. Implemented by the host's
/// version-message type.
pub trait PeerVersionInfo {
    /// The peer's protocol version integer.
    fn client_version(&self) -> u32;

    /// The peer's announced service bits.
    fn services(&self) -> ServiceFlags;
}

impl BitcoinDefinition {
    pub fn is_bloom_filtering_supported(&self, peer: &impl PeerVersionInfo) -> bool {
        peer.client_version() >= BLOOM_FILTERING_MIN_PROTOCOL_VERSION
    }

    /// Whether the peer has a full copy of the block chain.
    pub fn has_block_chain(&self, peer: &impl PeerVersionInfo) -> bool {
        peer.services().contains(ServiceFlags::NODE_NETWORK)
    }

    /// getutxos needs both the protocol version and the service bit.
    pub fn is_getutxos_supported(&self, peer: &impl PeerVersionInfo) -> bool {
        peer.client_version() >= GETUTXOS_MIN_PROTOCOL_VERSION
            && peer.services().contains(ServiceFlags::NODE_GETUTXOS)
    }

    pub fn is_ping_pong_supported(&self, peer: &impl PeerVersionInfo) -> bool {
        peer.client_version() >= PONG_MIN_PROTOCOL_VERSION
    }

    /// Service bit a full-chain node advertises.
    pub const fn node_network_constant(&self) -> Option<ServiceFlags> {
        Some(ServiceFlags::NODE_NETWORK)
    }

    /// Service bit a getutxos-capable node advertises.
    pub const fn node_getutxos_constant(&self) -> Option<ServiceFlags> {
        Some(ServiceFlags::NODE_GETUTXOS)
    }

    /// Bloom support is gated by protocol version alone, not a service bit.
    pub const fn node_bloom_constant(&self) -> Option<ServiceFlags> {
        None
    }

    /// Pong support is gated by protocol version alone, not a service bit.
    pub const fn node_pong_constant(&self) -> Option<ServiceFlags> {
        None
    }

    pub const fn min_bloom_protocol_version(&self) -> u32 {
        BLOOM_FILTERING_MIN_PROTOCOL_VERSION
    }

    pub const fn min_pong_protocol_version(&self) -> u32 {
        PONG_MIN_PROTOCOL_VERSION
    }
}
