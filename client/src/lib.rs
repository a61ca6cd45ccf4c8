//! Off-chain side of the STAR launch platform.
//!
//! Builds instructions for every program entry point, signs them through a [`WalletSigner`] and
//! submits them with [`Submitter`], which polls until the ledger reports a terminal status.

pub mod config;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod submit;
pub mod transaction;
pub mod wallet;

pub use config::{ClientConfig, Network, SubmissionConfig, WalletConfig};
pub use error::{ClientError, Result, SignerError};
pub use instructions::{preview_tokenomics, InstructionBuilder, ProjectDraft};
pub use pda::ProgramAddresses;
pub use submit::{Confirmation, LedgerRpc, SendStatus, Submitter};
pub use transaction::{SignedTransaction, TxStatus, UnsignedTransaction};
pub use wallet::{verify_signature, KeypairWallet, Wallet, WalletSigner};
