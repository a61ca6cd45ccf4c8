//! Transaction envelopes
//!
//! Building and signing are local and side-effect free. Nothing reaches the ledger until a
//! [`SignedTransaction`] is handed to the submitter.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use sha2::{Digest, Sha256};

use crate::error::{ClientError, Result};

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, PartialEq, Eq)]
struct WireAccountMeta {
    pubkey: Pubkey,
    is_signer: bool,
    is_writable: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, PartialEq, Eq)]
struct WireInstruction {
    program_id: Pubkey,
    accounts: Vec<WireAccountMeta>,
    data: Vec<u8>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, PartialEq, Eq)]
struct WireMessage {
    payer: Pubkey,
    sequence: u64,
    instructions: Vec<WireInstruction>,
}

/// Instructions bound to a payer and its next account sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedTransaction {
    pub payer: Pubkey,
    pub sequence: u64,
    pub instructions: Vec<Instruction>,
}

impl UnsignedTransaction {
    pub fn new(payer: Pubkey, sequence: u64, instructions: Vec<Instruction>) -> Self {
        Self {
            payer,
            sequence,
            instructions,
        }
    }

    /// Canonical bytes covered by the signature
    pub fn message_bytes(&self) -> Result<Vec<u8>> {
        let message = WireMessage {
            payer: self.payer,
            sequence: self.sequence,
            instructions: self
                .instructions
                .iter()
                .map(|ix| WireInstruction {
                    program_id: ix.program_id,
                    accounts: ix
                        .accounts
                        .iter()
                        .map(|meta| WireAccountMeta {
                            pubkey: meta.pubkey,
                            is_signer: meta.is_signer,
                            is_writable: meta.is_writable,
                        })
                        .collect(),
                    data: ix.data.clone(),
                })
                .collect(),
        };

        let mut bytes = Vec::new();
        message
            .serialize(&mut bytes)
            .map_err(|err| ClientError::Serialization(err.to_string()))?;
        Ok(bytes)
    }
}

/// Signed message ready for submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    pub signer: Pubkey,
    pub sequence: u64,
    pub message: Vec<u8>,
    pub signature: [u8; 64],
}

impl SignedTransaction {
    /// Submission id: hex SHA-256 of message and signature
    pub fn hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.message);
        hasher.update(self.signature);
        hex::encode(hasher.finalize())
    }
}

/// Ledger-side status of a submitted transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxStatus {
    /// Accepted for processing, not yet in a ledger
    Submitted,

    /// Unknown to the ledger (not yet propagated, or dropped)
    NotFound,

    /// Included and succeeded, with the program's return data (empty if none)
    Confirmed { slot: u64, return_data: Vec<u8> },

    /// Included and failed
    Failed { reason: String },
}

impl TxStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TxStatus::Confirmed { .. } | TxStatus::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::solana_program::instruction::AccountMeta;

    fn transfer_like(payer: Pubkey) -> Instruction {
        Instruction {
            program_id: star_launch::ID,
            accounts: vec![AccountMeta::new(payer, true)],
            data: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_message_binds_sequence() {
        let payer = Pubkey::new_unique();
        let first = UnsignedTransaction::new(payer, 1, vec![transfer_like(payer)]);
        let second = UnsignedTransaction::new(payer, 2, vec![transfer_like(payer)]);

        let bytes = first.message_bytes().unwrap();
        assert_ne!(bytes, second.message_bytes().unwrap());

        let decoded = WireMessage::try_from_slice(&bytes).unwrap();
        assert_eq!(decoded.payer, payer);
        assert_eq!(decoded.sequence, 1);
        assert_eq!(decoded.instructions[0].data, vec![1, 2, 3]);
        assert!(decoded.instructions[0].accounts[0].is_signer);
    }

    #[test]
    fn test_hash_covers_signature() {
        let signed = SignedTransaction {
            signer: Pubkey::new_unique(),
            sequence: 1,
            message: vec![9; 16],
            signature: [0; 64],
        };
        let mut resigned = signed.clone();
        resigned.signature[0] = 1;

        assert_eq!(signed.hash().len(), 64);
        assert_ne!(signed.hash(), resigned.hash());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!TxStatus::Submitted.is_terminal());
        assert!(!TxStatus::NotFound.is_terminal());
        assert!(TxStatus::Confirmed {
            slot: 5,
            return_data: vec![]
        }
        .is_terminal());
        assert!(TxStatus::Failed { reason: "x".into() }.is_terminal());
    }
}
