// Bitcoin Network Identities
// ==========================
//
// A network variant is identified by a stable string tag. Equality and
// hashing go through the tag alone, so two separately constructed ids with
// the same tag select the same parameter row everywhere.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Tag of the production network.
pub const MAIN_TAG: &str = "main";
/// Tag of the public test network (testnet3).
pub const TEST_TAG: &str = "test";
/// Tag of the local regression-test network.
pub const REG_TEST_TAG: &str = "regTest";
/// Tag of the deprecated second test network.
pub const OLD_TEST_NET2_TAG: &str = "oldTestNet2";
/// Tag of the in-memory network used by unit tests.
pub const UNIT_TEST_TAG: &str = "unitTest";

/// Canonical id string of the production network.
pub const ID_MAINNET: &str = "org.bitcoin.production";
/// Canonical id string of the public test network.
pub const ID_TESTNET: &str = "org.bitcoin.test";
/// Canonical id string of the regression-test network.
pub const ID_REGTEST: &str = "org.bitcoin.regtest";
/// Canonical id string of the deprecated second test network.
pub const ID_OLD_TESTNET2: &str = "org.bitcoin.oldtest2";
/// Canonical id string of the unit-test network.
pub const ID_UNITTESTNET: &str = "org.bitcoinj.unittest";

/// Identifies one network variant by its stable tag.
///
/// Construction cannot fail. Host libraries may build ids with tags outside
/// the standard set; dispatch functions reject tags they do not know.
#[derive(Debug, Clone, Copy, Eq)]
pub struct NetworkId {
    tag: &'static str,
}

impl NetworkId {
    /// The production network.
    pub const MAIN: NetworkId = NetworkId::new(MAIN_TAG);
    /// The public test network.
    pub const TEST: NetworkId = NetworkId::new(TEST_TAG);
    /// The local regression-test network.
    pub const REG_TEST: NetworkId = NetworkId::new(REG_TEST_TAG);
    /// The deprecated second test network. Not useful for new deployments;
    /// it exists because stored wallets and old unit tests reference it.
    pub const OLD_TEST_NET2: NetworkId = NetworkId::new(OLD_TEST_NET2_TAG);
    /// The in-memory unit-test network.
    pub const UNIT_TEST: NetworkId = NetworkId::new(UNIT_TEST_TAG);

    pub const fn new(tag: &'static str) -> Self {
        NetworkId { tag }
    }

    /// The stable tag this id is known by.
    pub const fn tag(&self) -> &'static str {
        self.tag
    }
}

impl PartialEq for NetworkId {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Hash for NetworkId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn equal_tags_compare_equal() {
        let fresh = NetworkId::new("oldTestNet2");
        assert_eq!(fresh, NetworkId::OLD_TEST_NET2);
        assert_ne!(fresh, NetworkId::TEST);
    }

    #[test]
    fn hashing_follows_the_tag() {
        let mut table = HashMap::new();
        table.insert(NetworkId::MAIN, 8333u16);
        table.insert(NetworkId::OLD_TEST_NET2, 18333u16);

        // A freshly constructed id must find the entry keyed by the constant.
        assert_eq!(table.get(&NetworkId::new("main")), Some(&8333));
        assert_eq!(table.get(&NetworkId::new("oldTestNet2")), Some(&18333));
        assert_eq!(table.get(&NetworkId::new("nonsense")), None);
    }

    #[test]
    fn display_is_the_tag() {
        assert_eq!(NetworkId::REG_TEST.to_string(), "regTest");
    }
}
