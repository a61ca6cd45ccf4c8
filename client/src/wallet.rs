//! Wallet capability: an address and the ability to sign.
//!
//! Providers are variants of [`Wallet`], selected by [`WalletConfig`].

use anchor_lang::prelude::Pubkey;
use ed25519_dalek::{Signer as _, SigningKey, Verifier, VerifyingKey};

use crate::config::{parse_pubkey, WalletConfig};
use crate::error::{Result, SignerError};
use crate::transaction::{SignedTransaction, UnsignedTransaction};

pub trait WalletSigner {
    fn address(&self) -> Pubkey;

    fn sign_transaction(
        &self,
        transaction: &UnsignedTransaction,
    ) -> std::result::Result<SignedTransaction, SignerError>;
}

/// In-memory ed25519 keypair
pub struct KeypairWallet {
    signing_key: SigningKey,
}

impl KeypairWallet {
    pub fn from_secret_bytes(secret: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&secret),
        }
    }

    pub fn from_hex(secret: &str) -> std::result::Result<Self, SignerError> {
        let bytes = hex::decode(secret.trim())
            .map_err(|err| SignerError::InvalidKey(err.to_string()))?;
        let secret: [u8; 32] = bytes
            .try_into()
            .map_err(|_| SignerError::InvalidKey("expected 32 bytes".to_string()))?;
        Ok(Self::from_secret_bytes(secret))
    }

    pub fn pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.signing_key.verifying_key().to_bytes())
    }
}

impl std::fmt::Debug for KeypairWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeypairWallet")
            .field("address", &self.pubkey())
            .finish()
    }
}

impl WalletSigner for KeypairWallet {
    fn address(&self) -> Pubkey {
        self.pubkey()
    }

    fn sign_transaction(
        &self,
        transaction: &UnsignedTransaction,
    ) -> std::result::Result<SignedTransaction, SignerError> {
        if transaction.payer != self.pubkey() {
            return Err(SignerError::PayerMismatch {
                payer: transaction.payer.to_string(),
                wallet: self.pubkey().to_string(),
            });
        }

        let message = transaction
            .message_bytes()
            .map_err(|err| SignerError::Message(err.to_string()))?;
        let signature = self.signing_key.sign(&message).to_bytes();

        Ok(SignedTransaction {
            signer: self.pubkey(),
            sequence: transaction.sequence,
            message,
            signature,
        })
    }
}

/// Configured wallet provider
#[derive(Debug)]
pub enum Wallet {
    Keypair(KeypairWallet),
    WatchOnly(Pubkey),
}

impl Wallet {
    pub fn from_config(config: &WalletConfig) -> Result<Self> {
        match config {
            WalletConfig::Keypair { secret_key } => {
                Ok(Wallet::Keypair(KeypairWallet::from_hex(secret_key)?))
            }
            WalletConfig::WatchOnly { address } => Ok(Wallet::WatchOnly(parse_pubkey(address)?)),
        }
    }

    pub fn can_sign(&self) -> bool {
        matches!(self, Wallet::Keypair(_))
    }
}

impl WalletSigner for Wallet {
    fn address(&self) -> Pubkey {
        match self {
            Wallet::Keypair(keypair) => keypair.address(),
            Wallet::WatchOnly(address) => *address,
        }
    }

    fn sign_transaction(
        &self,
        transaction: &UnsignedTransaction,
    ) -> std::result::Result<SignedTransaction, SignerError> {
        match self {
            Wallet::Keypair(keypair) => keypair.sign_transaction(transaction),
            Wallet::WatchOnly(_) => Err(SignerError::Unsupported(
                "watch-only wallet cannot sign".to_string(),
            )),
        }
    }
}

/// Check a signature against its signer and message
pub fn verify_signature(transaction: &SignedTransaction) -> bool {
    let Ok(key) = VerifyingKey::from_bytes(&transaction.signer.to_bytes()) else {
        return false;
    };
    let signature = ed25519_dalek::Signature::from_bytes(&transaction.signature);
    key.verify(&transaction.message, &signature).is_ok()
}
