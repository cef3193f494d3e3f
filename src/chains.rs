use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::utils::errors::ChartError;

lazy_static! {
    /// Poly bridge chain ids and their names
    static ref BUILTIN_CHAIN_NAMES: HashMap<u64, &'static str> = {
        let mut m = HashMap::new();
        m.insert(0, "Poly");
        m.insert(1, "Btc");
        m.insert(2, "Ethereum");
        m.insert(3, "Ontology");
        m.insert(4, "Neo");
        m.insert(5, "Switcheo");
        m.insert(6, "Bsc");
        m.insert(7, "Heco");
        m.insert(8, "Palette");
        m.insert(10, "O3");
        m.insert(12, "OKex");
        m.insert(14, "Neo3");
        m.insert(15, "Heimdall");
        m.insert(17, "Polygon");
        m.insert(18, "Zilliqa");
        m.insert(19, "Arbitrum");
        m.insert(20, "Xdai");
        m.insert(21, "Avalanche");
        m.insert(22, "Fantom");
        m.insert(23, "Optimism");
        m.insert(24, "Metis");
        m.insert(25, "Boba");
        m.insert(26, "Oasis");
        m.insert(27, "Harmony");
        m
    };
}

/// Lookup of a chain id to a human readable chain name
pub trait ChainNameResolver {
    fn chain_name(&self, chain: u64) -> String;
}

/// On-disk format of the chain name override file
#[derive(Debug, Default, Deserialize)]
pub struct ChainNameOverrides {
    #[serde(default)]
    pub names: HashMap<u64, String>,
}

/// Built-in chain table with optional overrides on top
#[derive(Debug, Default)]
pub struct ChainNames {
    overrides: HashMap<u64, String>,
}

impl ChainNames {
    pub fn builtin() -> Self {
        ChainNames::default()
    }

    pub fn with_overrides(overrides: ChainNameOverrides) -> Self {
        ChainNames {
            overrides: overrides.names,
        }
    }

    /// Load overrides from a JSON file like `{"names": {"2": "Ethereum"}}`
    pub fn from_file(path: &Path) -> Result<Self, ChartError> {
        let data = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let overrides: ChainNameOverrides = serde_json::from_str(&data)
            .map_err(|e| ChartError::ChainNames(format!("{}: {}", path.display(), e)))?;
        Ok(ChainNames::with_overrides(overrides))
    }
}

impl ChainNameResolver for ChainNames {
    fn chain_name(&self, chain: u64) -> String {
        if let Some(name) = self.overrides.get(&chain) {
            return name.clone();
        }
        match BUILTIN_CHAIN_NAMES.get(&chain) {
            Some(name) => name.to_string(),
            None => format!("Unknown({})", chain),
        }
    }
}
