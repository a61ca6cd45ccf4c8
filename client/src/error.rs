//! Error types for the client

use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Wallet failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignerError {
    /// Wallet cannot sign (watch-only, hardware not connected)
    #[error("Signing unsupported: {0}")]
    Unsupported(String),

    /// Key material could not be decoded
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Transaction could not be encoded for signing
    #[error("Message encoding failed: {0}")]
    Message(String),

    /// Transaction payer is not this wallet
    #[error("Payer {payer} does not match wallet {wallet}")]
    PayerMismatch { payer: String, wallet: String },
}

/// Client errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// Wallet error
    #[error("Signer error: {0}")]
    Signer(#[from] SignerError),

    /// Network or RPC service error
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Ledger refused or failed the transaction
    #[error("Transaction {hash} rejected: {reason}")]
    Rejected { hash: String, reason: String },

    /// No terminal status within the poll budget
    #[error("Transaction {hash} not confirmed after {polls} polls")]
    Timeout { hash: String, polls: u32 },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Local validation by the program rules
    #[error("Program error: {0}")]
    Program(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Wallet and network failures, surfaced to the caller unchanged
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            ClientError::Signer(_) | ClientError::Rpc(_) | ClientError::Timeout { .. }
        )
    }
}

impl From<anchor_lang::error::Error> for ClientError {
    fn from(err: anchor_lang::error::Error) -> Self {
        ClientError::Program(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::Config(err.to_string())
    }
}
