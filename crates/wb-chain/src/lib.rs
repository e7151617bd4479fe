use serde::Serialize;
use thiserror::Error;

/// Domain the derived devnet/testnet endpoints live under.
pub const DEFAULT_ENDPOINT_DOMAIN: &str = "nibiru.fi";

/// BIP-44 coin type shared by Cosmos-family chains.
pub const COSMOS_COIN_TYPE: u32 = 118;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("chain prefix cannot be blank")]
    BlankPrefix,
    #[error("chain short name cannot be blank")]
    BlankShortName,
    #[error("chain number cannot be negative, got {0}")]
    NegativeNumber(i64),
    #[error("chain endpoint cannot be blank")]
    BlankEndpoint,
}

/// RPC entry points for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEndpoints {
    pub tendermint_rpc: String,
    pub rest: String,
}

/// Static identity and endpoint configuration for a target network.
///
/// The chain id is a pure function of prefix, short name, and number;
/// the descriptor is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainDescriptor {
    prefix: String,
    short_name: String,
    number: i64,
    chain_id: String,
    endpoints: ChainEndpoints,
}

impl ChainDescriptor {
    /// Build a descriptor with endpoints derived from the chain parts,
    /// e.g. `custom("nibiru", "devnet", 2)` talks to
    /// `https://rpc.devnet-2.nibiru.fi`.
    pub fn custom(prefix: &str, short_name: &str, number: i64) -> Result<Self, ConfigError> {
        let endpoints = ChainEndpoints {
            tendermint_rpc: format!("https://rpc.{short_name}-{number}.{DEFAULT_ENDPOINT_DOMAIN}"),
            rest: format!("https://lcd.{short_name}-{number}.{DEFAULT_ENDPOINT_DOMAIN}"),
        };
        Self::with_endpoints(prefix, short_name, number, endpoints)
    }

    /// Build a descriptor against explicit endpoint URLs.
    pub fn with_endpoints(
        prefix: &str,
        short_name: &str,
        number: i64,
        endpoints: ChainEndpoints,
    ) -> Result<Self, ConfigError> {
        if prefix.trim().is_empty() {
            return Err(ConfigError::BlankPrefix);
        }
        if short_name.trim().is_empty() {
            return Err(ConfigError::BlankShortName);
        }
        if number < 0 {
            return Err(ConfigError::NegativeNumber(number));
        }
        if endpoints.tendermint_rpc.trim().is_empty() || endpoints.rest.trim().is_empty() {
            return Err(ConfigError::BlankEndpoint);
        }

        Ok(Self {
            prefix: prefix.to_owned(),
            short_name: short_name.to_owned(),
            number,
            chain_id: format!("{prefix}-{short_name}-{number}"),
            endpoints,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn endpoints(&self) -> &ChainEndpoints {
        &self.endpoints
    }

    /// Registration payload handed to a wallet extension when asking it
    /// to recognize this chain.
    pub fn chain_info(&self) -> ChainInfo {
        let native = Currency {
            coin_denom: "NIBI".to_owned(),
            coin_minimal_denom: "unibi".to_owned(),
            coin_decimals: 6,
        };

        ChainInfo {
            chain_id: self.chain_id.clone(),
            chain_name: self.chain_id.clone(),
            rpc: self.endpoints.tendermint_rpc.clone(),
            rest: self.endpoints.rest.clone(),
            bip44: Bip44 {
                coin_type: COSMOS_COIN_TYPE,
            },
            bech32_config: Bech32Config::for_prefix(&self.prefix),
            currencies: vec![native.clone()],
            fee_currencies: vec![FeeCurrency {
                currency: native.clone(),
                gas_price_step: GasPriceStep {
                    low: 0.01,
                    average: 0.025,
                    high: 0.03,
                },
            }],
            stake_currency: native,
        }
    }
}

// ── Suggest-chain payload ──
//
// The consuming side of this contract is the extension's JavaScript API,
// so the payload serializes camelCase.

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    pub chain_id: String,
    pub chain_name: String,
    pub rpc: String,
    pub rest: String,
    pub bip44: Bip44,
    pub bech32_config: Bech32Config,
    pub currencies: Vec<Currency>,
    pub fee_currencies: Vec<FeeCurrency>,
    pub stake_currency: Currency,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bip44 {
    pub coin_type: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bech32Config {
    pub bech32_prefix_acc_addr: String,
    pub bech32_prefix_acc_pub: String,
    pub bech32_prefix_val_addr: String,
    pub bech32_prefix_val_pub: String,
    pub bech32_prefix_cons_addr: String,
    pub bech32_prefix_cons_pub: String,
}

impl Bech32Config {
    pub fn for_prefix(prefix: &str) -> Self {
        Self {
            bech32_prefix_acc_addr: prefix.to_owned(),
            bech32_prefix_acc_pub: format!("{prefix}pub"),
            bech32_prefix_val_addr: format!("{prefix}valoper"),
            bech32_prefix_val_pub: format!("{prefix}valoperpub"),
            bech32_prefix_cons_addr: format!("{prefix}valcons"),
            bech32_prefix_cons_pub: format!("{prefix}valconspub"),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub coin_denom: String,
    pub coin_minimal_denom: String,
    pub coin_decimals: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeeCurrency {
    #[serde(flatten)]
    pub currency: Currency,
    pub gas_price_step: GasPriceStep,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GasPriceStep {
    pub low: f64,
    pub average: f64,
    pub high: f64,
}
