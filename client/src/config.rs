//! Client configuration
//!
//! Network and wallet are chosen here and passed explicitly into the client, never read from
//! ambient state.

use anchor_lang::prelude::Pubkey;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::{ClientError, Result};

/// Target network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Testnet,
    Mainnet,
}

impl Network {
    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Network::Testnet => "https://api.testnet.solana.com",
            Network::Mainnet => "https://api.mainnet-beta.solana.com",
        }
    }
}

/// Wallet selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WalletConfig {
    /// Local ed25519 keypair, 32-byte secret as hex
    Keypair { secret_key: String },

    /// Address only, cannot sign
    WatchOnly { address: String },
}

/// Submission policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Delay between status polls (milliseconds)
    pub poll_interval_ms: u64,

    /// Polls before giving up with a timeout
    pub max_polls: u32,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1_000,
            max_polls: 60,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub network: Network,

    /// RPC endpoint, the network default when absent
    #[serde(default)]
    pub rpc_url: Option<String>,

    /// Deployed program, the built-in id when absent
    #[serde(default)]
    pub program_id: Option<String>,

    pub wallet: WalletConfig,

    #[serde(default)]
    pub submission: SubmissionConfig,
}

impl ClientConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: ClientConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn rpc_url(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.default_rpc_url())
    }

    pub fn program_id(&self) -> Result<Pubkey> {
        match &self.program_id {
            Some(id) => parse_pubkey(id),
            None => Ok(star_launch::ID),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.program_id()?;

        if self.submission.max_polls == 0 {
            return Err(ClientError::Config("max_polls must be at least 1".to_string()));
        }

        if let WalletConfig::WatchOnly { address } = &self.wallet {
            parse_pubkey(address)?;
        }

        Ok(())
    }
}

pub(crate) fn parse_pubkey(value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value)
        .map_err(|err| ClientError::Config(format!("invalid address {value}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_defaults() {
        let config = ClientConfig::from_toml_str(
            r#"
            [wallet]
            kind = "watch_only"
            address = "11111111111111111111111111111111"
            "#,
        )
        .unwrap();

        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.rpc_url(), Network::Testnet.default_rpc_url());
        assert_eq!(config.program_id().unwrap(), star_launch::ID);
        assert_eq!(config.submission.max_polls, 60);
    }

    #[test]
    fn test_parse_overrides() {
        let config = ClientConfig::from_toml_str(
            r#"
            network = "mainnet"
            rpc_url = "http://127.0.0.1:8899"

            [wallet]
            kind = "keypair"
            secret_key = "0101010101010101010101010101010101010101010101010101010101010101"

            [submission]
            poll_interval_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.rpc_url(), "http://127.0.0.1:8899");
        assert_eq!(config.submission.poll_interval_ms, 250);
        assert_eq!(config.submission.max_polls, 60);
    }

    #[test]
    fn test_invalid_config() {
        let bad_address = r#"
            [wallet]
            kind = "watch_only"
            address = "not-an-address"
        "#;
        assert!(matches!(
            ClientConfig::from_toml_str(bad_address),
            Err(ClientError::Config(_))
        ));

        let no_polls = r#"
            [wallet]
            kind = "watch_only"
            address = "11111111111111111111111111111111"

            [submission]
            max_polls = 0
        "#;
        assert!(matches!(
            ClientConfig::from_toml_str(no_polls),
            Err(ClientError::Config(_))
        ));
    }
}
