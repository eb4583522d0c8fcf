// Bitcoin Protocol Constants
// ==========================
//
// Values in this module are identical on every network variant. Anything
// that differs between variants lives in the dispatch table in `params`.

/// Number of satoshis in one bitcoin.
pub const COIN: u64 = 100_000_000;

/// The coinbase value of the earliest blocks, 50 BTC in satoshis.
///
/// This is also the base value the subsidy schedule halves from, and the
/// value of the genesis coinbase output.
pub const FIFTY_COINS: u64 = 50 * COIN;

/// Length of one difficulty cycle: two weeks, in seconds.
///
/// After each cycle the network retargets so that blocks keep arriving every
/// `TARGET_SPACING` seconds on average.
pub const TARGET_TIMESPAN: u32 = 14 * 24 * 60 * 60;

/// Ten minutes per block, in seconds.
pub const TARGET_SPACING: u32 = 10 * 60;

/// Number of blocks in one difficulty cycle.
pub const INTERVAL: u32 = TARGET_TIMESPAN / TARGET_SPACING;

/// Blocks between subsidy halvings on the production and test networks,
/// roughly four years of ten-minute blocks.
pub const SUBSIDY_DECREASE_BLOCK_COUNT: u32 = 210_000;

/// Halving interval on regtest, short enough that a halving is observable in
/// a locally mined chain.
pub const SUBSIDY_DECREASE_BLOCK_COUNT_REGTEST: u32 = 150;

/// Ceiling on the number of coins that will ever exist, in whole coins.
pub const MAX_COINS: u64 = 21_000_000;

/// Default minimum transaction fee in satoshis, mirroring the reference
/// client.
pub const REFERENCE_DEFAULT_MIN_TX_FEE: u64 = 1000;

/// Outputs below this many satoshis are considered dust and not relayed.
pub const MIN_NONDUST_OUTPUT: u64 = 546;

/// Hard cap on the serialized size of a block, in bytes.
pub const MAX_BLOCK_SIZE: u32 = 1_000_000;

/// Number of confirmations before a coinbase output may be spent.
pub const SPENDABLE_COINBASE_DEPTH: u32 = 100;

/// How far a block timestamp may run ahead of local time, in seconds. Same
/// value as the official client.
pub const ALLOWED_TIME_DRIFT: u32 = 2 * 60 * 60;

/// The protocol version this definition speaks.
pub const PROTOCOL_VERSION: u32 = 70001;

/// A compact difficulty target that admits half of all possible hash
/// solutions. Used by tests that need to mine blocks instantly.
pub const EASIEST_DIFFICULTY_TARGET: u32 = 0x207f_ffff;
