// Genesis Block Descriptions
// ==========================
//
// Fixed descriptions of each variant's genesis block. The builder performs
// no hashing; the expected hash is supplied as a literal so the host can
// verify the block it assembles against it.

use serde::{Deserialize, Serialize};

use crate::constants::FIFTY_COINS;
use crate::hashes::BlockHash;
use crate::network::{self, NetworkId};
use crate::params::BitcoinDefinition;
use crate::{Error, Result};

// Coinbase input script: the difficulty bits, a height placeholder push and
// the Times headline the chain launched with.
const GENESIS_TX_IN_BYTES: &str = "04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73";
// Coinbase output script: a push of the original public key, then OP_CHECKSIG.
const GENESIS_TX_OUT_BYTES: &str = "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";

const GENESIS_BLOCK_VALUE: u64 = FIFTY_COINS;
// Shared by the production and modern test networks.
const GENESIS_BLOCK_DIFFICULTY_TARGET: u32 = 0x1d00_ffff;

const MAIN_GENESIS_BLOCK_TIME: u64 = 1_231_006_505;
const MAIN_GENESIS_BLOCK_NONCE: u32 = 2_083_236_893;
const MAIN_GENESIS_HASH: &str = "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";

const TEST_GENESIS_BLOCK_TIME: u64 = 1_296_688_602;
const TEST_GENESIS_BLOCK_NONCE: u32 = 414_098_458;
const TEST_GENESIS_HASH: &str = "000000000933ea01ad0ee984209779baaec3ced90fa3f408719526f8d77f4943";

const OLD_TEST_GENESIS_BLOCK_DIFFICULTY_TARGET: u32 = 0x1d07_fff8;
const OLD_TEST_GENESIS_BLOCK_TIME: u64 = 1_296_688_602;
const OLD_TEST_GENESIS_BLOCK_NONCE: u32 = 384_568_319;
const OLD_TEST_GENESIS_HASH: &str = "00000007199508e34a9ff81e6ec0c477a4cccff2a4767a8eee39c11db367b008";

// Regtest mines its genesis at the easiest possible difficulty; the nonce is
// simply the first one that works.
const REGTEST_GENESIS_BLOCK_DIFFICULTY_TARGET: u32 = 0x207f_ffff;
const REGTEST_GENESIS_BLOCK_TIME: u64 = 1_296_688_602;
const REGTEST_GENESIS_BLOCK_NONCE: u32 = 2;
const REGTEST_GENESIS_HASH: &str = "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206";

/// Everything needed to reconstruct and self-verify one variant's genesis
/// block. Built on demand from literals; cheap to rebuild, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisBlockInfo {
    /// Serialized coinbase input script.
    pub tx_in_bytes: Vec<u8>,
    /// Serialized coinbase output script.
    pub tx_out_bytes: Vec<u8>,
    /// Coinbase output value in satoshis.
    pub value: u64,
    /// Compact difficulty target of the genesis header.
    pub difficulty_target: u32,
    /// Header timestamp, seconds since epoch.
    pub time: u64,
    /// Header nonce.
    pub nonce: u32,
    /// The hash the assembled block must have.
    pub expected_hash: BlockHash,
}

impl BitcoinDefinition {
    /// Builds the genesis block description for `network`.
    pub fn genesis_block_info(&self, network: NetworkId) -> Result<GenesisBlockInfo> {
        let (difficulty_target, time, nonce, hash) = match network.tag() {
            network::MAIN_TAG => (
                GENESIS_BLOCK_DIFFICULTY_TARGET,
                MAIN_GENESIS_BLOCK_TIME,
                MAIN_GENESIS_BLOCK_NONCE,
                MAIN_GENESIS_HASH,
            ),
            network::TEST_TAG => (
                GENESIS_BLOCK_DIFFICULTY_TARGET,
                TEST_GENESIS_BLOCK_TIME,
                TEST_GENESIS_BLOCK_NONCE,
                TEST_GENESIS_HASH,
            ),
            network::REG_TEST_TAG => (
                REGTEST_GENESIS_BLOCK_DIFFICULTY_TARGET,
                REGTEST_GENESIS_BLOCK_TIME,
                REGTEST_GENESIS_BLOCK_NONCE,
                REGTEST_GENESIS_HASH,
            ),
            network::OLD_TEST_NET2_TAG => (
                OLD_TEST_GENESIS_BLOCK_DIFFICULTY_TARGET,
                OLD_TEST_GENESIS_BLOCK_TIME,
                OLD_TEST_GENESIS_BLOCK_NONCE,
                OLD_TEST_GENESIS_HASH,
            ),
            other => return Err(Error::UnrecognizedNetwork(other)),
        };

        Ok(GenesisBlockInfo {
            tx_in_bytes: decode_script_literal(GENESIS_TX_IN_BYTES),
            tx_out_bytes: decode_script_literal(GENESIS_TX_OUT_BYTES),
            value: GENESIS_BLOCK_VALUE,
            difficulty_target,
            time,
            nonce,
            expected_hash: hash.parse().expect("malformed genesis hash literal"),
        })
    }
}

fn decode_script_literal(hex: &str) -> Vec<u8> {
    // A failure here is a defect in the literals above, not a runtime
    // condition.
    hex::decode(hex).expect("malformed genesis script literal")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const DEF: BitcoinDefinition = BitcoinDefinition::new();

    #[test]
    fn production_genesis() {
        let info = DEF.genesis_block_info(NetworkId::MAIN).unwrap();
        assert_eq!(info.difficulty_target, 0x1d00_ffff);
        assert_eq!(info.time, 1_231_006_505);
        assert_eq!(info.nonce, 2_083_236_893);
        assert_eq!(info.value, 5_000_000_000);
        assert_eq!(
            info.expected_hash.to_hex(),
            "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
        );
        // The input script embeds the headline after the bits and the push
        // opcodes.
        assert_eq!(info.tx_in_bytes[..5], hex!("04ffff001d"));
        assert_eq!(
            &info.tx_in_bytes[8..],
            b"The Times 03/Jan/2009 Chancellor on brink of second bailout for banks"
        );
        // Output script: one 65-byte key push plus its length prefix would be
        // added by the host; the literal is the bare key material.
        assert_eq!(info.tx_out_bytes.len(), 65);
        assert_eq!(info.tx_out_bytes[0], 0x04);
    }

    #[test]
    fn test_network_genesis_shares_the_coinbase() {
        let main = DEF.genesis_block_info(NetworkId::MAIN).unwrap();
        let test = DEF.genesis_block_info(NetworkId::TEST).unwrap();
        assert_eq!(main.tx_in_bytes, test.tx_in_bytes);
        assert_eq!(main.tx_out_bytes, test.tx_out_bytes);
        assert_eq!(main.difficulty_target, test.difficulty_target);
        assert_eq!(test.time, 1_296_688_602);
        assert_eq!(test.nonce, 414_098_458);
        assert_eq!(
            test.expected_hash.to_hex(),
            "000000000933ea01ad0ee984209779baaec3ced90fa3f408719526f8d77f4943"
        );
    }

    #[test]
    fn regtest_genesis_is_trivially_mineable() {
        let info = DEF.genesis_block_info(NetworkId::REG_TEST).unwrap();
        assert_eq!(info.difficulty_target, DEF.easiest_difficulty_target());
        assert_eq!(info.nonce, 2);
        assert_eq!(
            info.expected_hash.to_hex(),
            "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206"
        );
    }

    #[test]
    fn old_testnet_keeps_its_historical_triple() {
        let info = DEF.genesis_block_info(NetworkId::new("oldTestNet2")).unwrap();
        assert_eq!(info.difficulty_target, 0x1d07_fff8);
        assert_eq!(info.time, 1_296_688_602);
        assert_eq!(info.nonce, 384_568_319);
        assert_eq!(
            info.expected_hash.to_hex(),
            "00000007199508e34a9ff81e6ec0c477a4cccff2a4767a8eee39c11db367b008"
        );
    }

    #[test]
    fn unknown_network_is_unsupported() {
        let err = DEF.genesis_block_info(NetworkId::new("signet")).unwrap_err();
        assert!(matches!(err, crate::Error::UnrecognizedNetwork("signet")));
        // The unit-test network has no genesis block of its own either.
        assert!(DEF.genesis_block_info(NetworkId::UNIT_TEST).is_err());
    }
}
