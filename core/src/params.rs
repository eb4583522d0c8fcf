// Bitcoin Network Parameters
// ==========================
//
// One `BitcoinDefinition` value supplies every consensus-relevant constant
// for the four supported network variants. All per-variant values resolve
// through a single four-slot dispatch table; the deprecated second test
// network occupies the fourth slot and pre-empts the generic selector
// wherever its values differ from the modern public test network (packet
// magic, proof-of-work ceiling, DNS seeds, payment-protocol id).

use std::hash::{Hash, Hasher};

use num_bigint::BigUint;

use crate::constants::{
    ALLOWED_TIME_DRIFT, EASIEST_DIFFICULTY_TARGET, INTERVAL, MAX_BLOCK_SIZE, MAX_COINS,
    MIN_NONDUST_OUTPUT, PROTOCOL_VERSION, REFERENCE_DEFAULT_MIN_TX_FEE,
    SPENDABLE_COINBASE_DEPTH, SUBSIDY_DECREASE_BLOCK_COUNT,
    SUBSIDY_DECREASE_BLOCK_COUNT_REGTEST, TARGET_SPACING, TARGET_TIMESPAN,
};
use crate::network::{self, NetworkId};
use crate::subsidy;
use crate::{Error, Result};

/// Coin name, the identity host registries deduplicate on.
pub const NAME: &str = "bitcoin";
/// Name used when signing human-readable messages.
pub const SIGNING_NAME: &str = "Bitcoin";
/// Ticker symbol.
pub const TICKER: &str = "BTC";
/// Scheme of payment URIs.
pub const URI_SCHEME: &str = "bitcoin";

/// Whether checkpoint files are supported at all.
pub const CHECKPOINTING_SUPPORT: bool = true;
/// Days of recent history a freshly built checkpoint file leaves uncovered.
pub const CHECKPOINT_DAYS_BACK: u32 = 30;

const PORT: u16 = 8333;
const TEST_PORT: u16 = 18333;
const REGTEST_PORT: u16 = 18444;

const PUBKEY_ADDRESS_HEADER: u8 = 0;
const TEST_PUBKEY_ADDRESS_HEADER: u8 = 111;
const DUMPED_PRIVATE_KEY_HEADER: u8 = 128;
const TEST_DUMPED_PRIVATE_KEY_HEADER: u8 = 239;
const P2SH_ADDRESS_HEADER: u8 = 5;
const TEST_P2SH_ADDRESS_HEADER: u8 = 196;

const MAIN_PACKET_MAGIC: u32 = 0xf9be_b4d9;
const TEST_PACKET_MAGIC: u32 = 0x0b11_0907;
const OLD_TEST_PACKET_MAGIC: u32 = 0xfabf_b5da;
const REGTEST_PACKET_MAGIC: u32 = 0xfabf_b5da;

const MAIN_DNS_SEEDS: &[&str] = &[
    "seed.bitcoin.sipa.be",       // Pieter Wuille
    "dnsseed.bluematt.me",        // Matt Corallo
    "dnsseed.bitcoin.dashjr.org", // Luke Dashjr
    "seed.bitcoinstats.com",      // Chris Decker
    "seed.bitnodes.io",           // Addy Yeow
];
const TEST_DNS_SEEDS: &[&str] = &[
    "testnet-seed.alexykot.me",
    "testnet-seed.bitcoin.schildbach.de",
    "testnet-seed.bitcoin.petertodd.org",
];

const MAIN_ALERT_KEY: &str = "04fc9702847840aaf195de8442ebecedf5b095cdbb9bc716bda9110971b28a49e0ead8564ff0db22209e0374782c093bb899692d524e9d6a6956e7c5ecbcd68284";
const TEST_ALERT_KEY: &str = "04302390343f91cc401d56d68b123028bf52e5fca1939df127f63c6467cdf9c8e2c14b61104cf817d0b780da337893ecc4aaff1309e536162dabbdb45200ca2b0a";

const PAYMENT_PROTOCOL_ID_MAINNET: &str = "main";
const PAYMENT_PROTOCOL_ID_TESTNET: &str = "test";

const MIN_BROADCAST_CONNECTIONS: u32 = 0;

// Compact-encoded proof-of-work ceilings. The test ceiling matches the
// production one; the old second testnet ran with a wider ceiling.
const MAIN_MAX_TARGET_BITS: u32 = 0x1d00_ffff;
const TEST_MAX_TARGET_BITS: u32 = 0x1d00_ffff;
const OLD_TEST_MAX_TARGET_BITS: u32 = 0x1d0f_ffff;

// Ceilings that never had a compact encoding. The regtest ceiling is 33
// bytes (263 bits) and the unit-test ceiling is the full 256-bit range, so
// both stay in arbitrary precision end to end.
const REGTEST_MAX_TARGET_HEX: &[u8] =
    b"7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";
const UNITTEST_MAX_TARGET_HEX: &[u8] =
    b"00ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

/// Expands the compact "nBits" difficulty encoding into the full target.
pub fn decode_compact_bits(compact: u32) -> BigUint {
    let size = (compact >> 24) as usize;
    let mantissa = BigUint::from(compact & 0x007f_ffff);
    if size <= 3 {
        mantissa >> (8 * (3 - size))
    } else {
        mantissa << (8 * (size - 3))
    }
}

fn parse_target_hex(hex: &[u8]) -> BigUint {
    // A failure here is a defect in this table, not a runtime condition.
    BigUint::parse_bytes(hex, 16).expect("malformed proof-of-work ceiling literal")
}

/// The Bitcoin coin definition.
///
/// Carries no state; every accessor is a pure function over the built-in
/// tables. Construct one at startup and pass it by reference wherever the
/// host needs it. Equality and hashing derive solely from the coin name so
/// registries can deduplicate definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcoinDefinition;

impl BitcoinDefinition {
    pub const fn new() -> Self {
        BitcoinDefinition
    }

    // Identity.

    pub const fn name(&self) -> &'static str {
        NAME
    }

    pub const fn signed_message_name(&self) -> &'static str {
        SIGNING_NAME
    }

    pub const fn ticker(&self) -> &'static str {
        TICKER
    }

    pub const fn uri_scheme(&self) -> &'static str {
        URI_SCHEME
    }

    pub const fn protocol_version(&self) -> u32 {
        PROTOCOL_VERSION
    }

    pub const fn is_checkpointing_supported(&self) -> bool {
        CHECKPOINTING_SUPPORT
    }

    pub const fn checkpoint_days_back(&self) -> u32 {
        CHECKPOINT_DAYS_BACK
    }

    // Consensus schedule. These hold on every variant.

    pub const fn target_timespan(&self) -> u32 {
        TARGET_TIMESPAN
    }

    pub const fn target_spacing(&self) -> u32 {
        TARGET_SPACING
    }

    pub const fn interval(&self) -> u32 {
        INTERVAL
    }

    /// Spacing of checkpoint entries a builder should emit; one per
    /// difficulty cycle.
    pub const fn interval_checkpoints(&self) -> u32 {
        INTERVAL
    }

    pub const fn allowed_block_time_drift(&self) -> u32 {
        ALLOWED_TIME_DRIFT
    }

    pub const fn max_coins(&self) -> u64 {
        MAX_COINS
    }

    pub const fn default_min_transaction_fee(&self) -> u64 {
        REFERENCE_DEFAULT_MIN_TX_FEE
    }

    pub const fn dust_limit(&self) -> u64 {
        MIN_NONDUST_OUTPUT
    }

    pub const fn max_block_size(&self) -> u32 {
        MAX_BLOCK_SIZE
    }

    pub const fn spendable_coinbase_depth(&self) -> u32 {
        SPENDABLE_COINBASE_DEPTH
    }

    pub const fn easiest_difficulty_target(&self) -> u32 {
        EASIEST_DIFFICULTY_TARGET
    }

    pub const fn min_broadcast_connections(&self) -> u32 {
        MIN_BROADCAST_CONNECTIONS
    }

    /// Blocks between subsidy halvings on `network`.
    pub fn subsidy_decrease_block_count(&self, network: NetworkId) -> Result<u32> {
        self.network_check(
            SUBSIDY_DECREASE_BLOCK_COUNT,
            SUBSIDY_DECREASE_BLOCK_COUNT,
            SUBSIDY_DECREASE_BLOCK_COUNT_REGTEST,
            SUBSIDY_DECREASE_BLOCK_COUNT,
            network,
        )
    }

    /// Reward paid to the producer of the block at `height` on `network`.
    pub fn block_reward(&self, height: u64, network: NetworkId) -> Result<u64> {
        let interval = self.subsidy_decrease_block_count(network)?;
        Ok(subsidy::reward_at(height, u64::from(interval)))
    }

    /// The largest hash value a valid block may have on `network`.
    ///
    /// The unit-test network is special-cased ahead of the dispatch table,
    /// as it only exists for this one lookup.
    pub fn proof_of_work_limit(&self, network: NetworkId) -> Result<BigUint> {
        if network == NetworkId::UNIT_TEST {
            return Ok(parse_target_hex(UNITTEST_MAX_TARGET_HEX));
        }
        self.network_check(
            decode_compact_bits(MAIN_MAX_TARGET_BITS),
            decode_compact_bits(TEST_MAX_TARGET_BITS),
            parse_target_hex(REGTEST_MAX_TARGET_HEX),
            decode_compact_bits(OLD_TEST_MAX_TARGET_BITS),
            network,
        )
    }

    // Network identity.

    pub fn port(&self, network: NetworkId) -> Result<u16> {
        self.network_check(PORT, TEST_PORT, REGTEST_PORT, TEST_PORT, network)
    }

    pub fn packet_magic(&self, network: NetworkId) -> Result<u32> {
        self.network_check(
            MAIN_PACKET_MAGIC,
            TEST_PACKET_MAGIC,
            REGTEST_PACKET_MAGIC,
            OLD_TEST_PACKET_MAGIC,
            network,
        )
    }

    pub fn pubkey_address_header(&self, network: NetworkId) -> Result<u8> {
        self.network_check(
            PUBKEY_ADDRESS_HEADER,
            TEST_PUBKEY_ADDRESS_HEADER,
            TEST_PUBKEY_ADDRESS_HEADER,
            TEST_PUBKEY_ADDRESS_HEADER,
            network,
        )
    }

    pub fn dumped_private_key_header(&self, network: NetworkId) -> Result<u8> {
        self.network_check(
            DUMPED_PRIVATE_KEY_HEADER,
            TEST_DUMPED_PRIVATE_KEY_HEADER,
            TEST_DUMPED_PRIVATE_KEY_HEADER,
            TEST_DUMPED_PRIVATE_KEY_HEADER,
            network,
        )
    }

    pub fn p2sh_address_header(&self, network: NetworkId) -> Result<u8> {
        self.network_check(
            P2SH_ADDRESS_HEADER,
            TEST_P2SH_ADDRESS_HEADER,
            TEST_P2SH_ADDRESS_HEADER,
            TEST_P2SH_ADDRESS_HEADER,
            network,
        )
    }

    /// Seed hostnames for initial peer discovery; `None` on networks whose
    /// peers are configured by hand.
    pub fn dns_seeds(&self, network: NetworkId) -> Result<Option<&'static [&'static str]>> {
        self.network_check(Some(MAIN_DNS_SEEDS), Some(TEST_DNS_SEEDS), None, None, network)
    }

    pub fn alert_key(&self, network: NetworkId) -> Result<&'static str> {
        self.network_check(MAIN_ALERT_KEY, TEST_ALERT_KEY, MAIN_ALERT_KEY, MAIN_ALERT_KEY, network)
    }

    /// BIP 70 network identifier; `None` where the payment protocol is not
    /// served.
    pub fn payment_protocol_id(&self, network: NetworkId) -> Result<Option<&'static str>> {
        self.network_check(
            Some(PAYMENT_PROTOCOL_ID_MAINNET),
            Some(PAYMENT_PROTOCOL_ID_TESTNET),
            None,
            None,
            network,
        )
    }

    pub const fn id_main_net(&self) -> &'static str {
        network::ID_MAINNET
    }

    pub const fn id_test_net(&self) -> &'static str {
        network::ID_TESTNET
    }

    pub const fn id_reg_test(&self) -> &'static str {
        network::ID_REGTEST
    }

    pub const fn id_old_test_net2(&self) -> &'static str {
        network::ID_OLD_TESTNET2
    }

    pub const fn id_unit_test_net(&self) -> &'static str {
        network::ID_UNITTESTNET
    }

    /// Assembles the full immutable parameter row for `network`.
    pub fn parameters(&self, network: NetworkId) -> Result<ConsensusParameters> {
        Ok(ConsensusParameters {
            network,
            port: self.port(network)?,
            packet_magic: self.packet_magic(network)?,
            pubkey_address_header: self.pubkey_address_header(network)?,
            dumped_private_key_header: self.dumped_private_key_header(network)?,
            p2sh_address_header: self.p2sh_address_header(network)?,
            proof_of_work_limit: self.proof_of_work_limit(network)?,
            dns_seeds: self.dns_seeds(network)?.unwrap_or(&[]),
            alert_key: self.alert_key(network)?,
            payment_protocol_id: self.payment_protocol_id(network)?,
            spendable_coinbase_depth: self.spendable_coinbase_depth(),
            subsidy_decrease_block_count: self.subsidy_decrease_block_count(network)?,
        })
    }

    /// Four-slot dispatch over the variant tag.
    ///
    /// The old second testnet wins the fourth slot unconditionally; every
    /// other known tag falls through to the three-way selector. Many fields
    /// pass the same value in the second and fourth slot, which is how the
    /// two test networks share most of their configuration.
    fn network_check<T>(
        &self,
        main: T,
        test: T,
        regtest: T,
        old_test: T,
        network: NetworkId,
    ) -> Result<T> {
        match network.tag() {
            network::OLD_TEST_NET2_TAG => Ok(old_test),
            network::MAIN_TAG => Ok(main),
            network::TEST_TAG => Ok(test),
            network::REG_TEST_TAG => Ok(regtest),
            other => Err(Error::UnrecognizedNetwork(other)),
        }
    }
}

impl PartialEq for BitcoinDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for BitcoinDefinition {}

impl Hash for BitcoinDefinition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

/// The full parameter row of one network variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsensusParameters {
    pub network: NetworkId,
    pub port: u16,
    pub packet_magic: u32,
    pub pubkey_address_header: u8,
    pub dumped_private_key_header: u8,
    pub p2sh_address_header: u8,
    pub proof_of_work_limit: BigUint,
    /// Possibly empty; regtest and the old second testnet have no seeds.
    pub dns_seeds: &'static [&'static str],
    pub alert_key: &'static str,
    pub payment_protocol_id: Option<&'static str>,
    pub spendable_coinbase_depth: u32,
    pub subsidy_decrease_block_count: u32,
}
