//! Submission and confirmation against the ledger RPC
//!
//! One transaction is sent per account sequence. A `Duplicate` answer means the same signed
//! transaction is already known, so a retry after a dropped response is safe.

use anchor_lang::prelude::{AnchorDeserialize, Pubkey};
use anchor_lang::solana_program::instruction::Instruction;
use async_trait::async_trait;
use star_launch::state::{ParticipantPosition, Project};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::SubmissionConfig;
use crate::error::{ClientError, Result};
use crate::instructions::InstructionBuilder;
use crate::transaction::{SignedTransaction, TxStatus, UnsignedTransaction};
use crate::wallet::WalletSigner;

/// Answer to a send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendStatus {
    /// Accepted, awaiting inclusion
    Pending,

    /// Already received earlier
    Duplicate,

    /// Refused before inclusion
    Rejected { reason: String },
}

/// Opaque ledger service
#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// Last sequence used by `address`
    async fn account_sequence(&self, address: &Pubkey) -> Result<u64>;

    async fn send_transaction(&self, transaction: &SignedTransaction) -> Result<SendStatus>;

    async fn get_transaction(&self, hash: &str) -> Result<TxStatus>;

    /// Execute without committing and return the program's return data
    async fn simulate(&self, payer: &Pubkey, instruction: &Instruction) -> Result<Vec<u8>>;
}

/// Terminal success of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub hash: String,
    pub slot: u64,
    pub return_data: Vec<u8>,
}

impl Confirmation {
    /// Decode the value the program returned
    pub fn return_value<T: AnchorDeserialize>(&self) -> Result<T> {
        decode_return(&self.return_data)
    }
}

pub struct Submitter<R> {
    rpc: R,
    policy: SubmissionConfig,
}

impl<R: LedgerRpc> Submitter<R> {
    pub fn new(rpc: R, policy: SubmissionConfig) -> Self {
        Self { rpc, policy }
    }

    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    /// Bind instructions to the signer's next sequence and sign them
    pub async fn prepare(
        &self,
        signer: &dyn WalletSigner,
        instructions: Vec<Instruction>,
    ) -> Result<SignedTransaction> {
        let payer = signer.address();
        let sequence = self
            .rpc
            .account_sequence(&payer)
            .await?
            .checked_add(1)
            .ok_or_else(|| ClientError::Rpc(format!("sequence overflow for {payer}")))?;

        let transaction = UnsignedTransaction::new(payer, sequence, instructions);
        Ok(signer.sign_transaction(&transaction)?)
    }

    /// Send once and poll until the ledger reports a terminal status
    pub async fn submit_and_confirm(&self, transaction: &SignedTransaction) -> Result<Confirmation> {
        let hash = transaction.hash();

        match self.rpc.send_transaction(transaction).await? {
            SendStatus::Pending => debug!(%hash, "transaction submitted"),
            SendStatus::Duplicate => debug!(%hash, "transaction already pending"),
            SendStatus::Rejected { reason } => {
                warn!(%hash, %reason, "transaction rejected");
                return Err(ClientError::Rejected { hash, reason });
            }
        }

        let interval = Duration::from_millis(self.policy.poll_interval_ms);
        for poll in 1..=self.policy.max_polls {
            match self.rpc.get_transaction(&hash).await? {
                TxStatus::Confirmed { slot, return_data } => {
                    info!(%hash, slot, "transaction confirmed");
                    return Ok(Confirmation {
                        hash,
                        slot,
                        return_data,
                    });
                }
                TxStatus::Failed { reason } => {
                    warn!(%hash, %reason, "transaction failed");
                    return Err(ClientError::Rejected { hash, reason });
                }
                status => debug!(%hash, poll, ?status, "waiting for confirmation"),
            }

            if poll < self.policy.max_polls {
                tokio::time::sleep(interval).await;
            }
        }

        warn!(%hash, polls = self.policy.max_polls, "confirmation timed out");
        Err(ClientError::Timeout {
            hash,
            polls: self.policy.max_polls,
        })
    }

    /// Prepare, submit and confirm in one call
    pub async fn execute(
        &self,
        signer: &dyn WalletSigner,
        instructions: Vec<Instruction>,
    ) -> Result<Confirmation> {
        let transaction = self.prepare(signer, instructions).await?;
        self.submit_and_confirm(&transaction).await
    }

    /// Execute one instruction and decode its return data
    pub async fn execute_returning<T: AnchorDeserialize>(
        &self,
        signer: &dyn WalletSigner,
        instruction: Instruction,
    ) -> Result<T> {
        self.execute(signer, vec![instruction]).await?.return_value()
    }

    /// Submit a `mint_star_points` instruction, returning the recipient's new balance
    pub async fn mint_star_points(
        &self,
        signer: &dyn WalletSigner,
        instruction: Instruction,
    ) -> Result<i128> {
        self.execute_returning(signer, instruction).await
    }

    /// Submit a `create_project` instruction, returning the new project id
    pub async fn create_project(
        &self,
        signer: &dyn WalletSigner,
        instruction: Instruction,
    ) -> Result<u64> {
        self.execute_returning(signer, instruction).await
    }

    /// Submit a `participate_in_project` instruction, returning the updated position
    pub async fn participate_in_project(
        &self,
        signer: &dyn WalletSigner,
        instruction: Instruction,
    ) -> Result<ParticipantPosition> {
        self.execute_returning(signer, instruction).await
    }

    /// STAR points balance of `address` (7-decimal mantissa)
    pub async fn star_points(
        &self,
        builder: &InstructionBuilder,
        address: Pubkey,
    ) -> Result<i128> {
        let data = self
            .rpc
            .simulate(&address, &builder.get_star_points(address))
            .await?;
        decode_return(&data)
    }

    pub async fn project(
        &self,
        builder: &InstructionBuilder,
        payer: Pubkey,
        project_id: u64,
    ) -> Result<Project> {
        let data = self
            .rpc
            .simulate(&payer, &builder.get_project(project_id))
            .await?;
        decode_return(&data)
    }
}

fn decode_return<T: AnchorDeserialize>(data: &[u8]) -> Result<T> {
    T::try_from_slice(data).map_err(|err| ClientError::Serialization(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::{KeypairWallet, Wallet};
    use anchor_lang::prelude::AnchorSerialize;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockRpc {
        sequence: u64,
        send_status: Mutex<VecDeque<SendStatus>>,
        statuses: Mutex<VecDeque<TxStatus>>,
        sent: Mutex<Vec<SignedTransaction>>,
        polls: Mutex<u32>,
        return_data: HashMap<Pubkey, Vec<u8>>,
    }

    impl MockRpc {
        fn with_statuses(statuses: Vec<TxStatus>) -> Self {
            Self {
                sequence: 41,
                statuses: Mutex::new(statuses.into()),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl LedgerRpc for MockRpc {
        async fn account_sequence(&self, _address: &Pubkey) -> Result<u64> {
            Ok(self.sequence)
        }

        async fn send_transaction(&self, transaction: &SignedTransaction) -> Result<SendStatus> {
            self.sent.lock().unwrap().push(transaction.clone());
            Ok(self
                .send_status
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(SendStatus::Pending))
        }

        async fn get_transaction(&self, _hash: &str) -> Result<TxStatus> {
            *self.polls.lock().unwrap() += 1;
            Ok(self
                .statuses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(TxStatus::NotFound))
        }

        async fn simulate(&self, _payer: &Pubkey, instruction: &Instruction) -> Result<Vec<u8>> {
            let account = instruction.accounts[0].pubkey;
            self.return_data
                .get(&account)
                .cloned()
                .ok_or_else(|| ClientError::Rpc("account not found".to_string()))
        }
    }

    fn policy(max_polls: u32) -> SubmissionConfig {
        SubmissionConfig {
            poll_interval_ms: 1,
            max_polls,
        }
    }

    fn confirmed(slot: u64, return_data: Vec<u8>) -> TxStatus {
        TxStatus::Confirmed { slot, return_data }
    }

    fn encoded<T: AnchorSerialize>(value: &T) -> Vec<u8> {
        let mut bytes = Vec::new();
        value.serialize(&mut bytes).unwrap();
        bytes
    }

    fn wallet() -> Wallet {
        Wallet::Keypair(KeypairWallet::from_secret_bytes([7; 32]))
    }

    #[tokio::test]
    async fn test_confirms_after_pending_polls() {
        let rpc = MockRpc::with_statuses(vec![
            TxStatus::NotFound,
            TxStatus::Submitted,
            confirmed(99, vec![]),
        ]);
        let submitter = Submitter::new(rpc, policy(10));

        let confirmation = submitter.execute(&wallet(), vec![]).await.unwrap();

        assert_eq!(confirmation.slot, 99);
        assert_eq!(*submitter.rpc().polls.lock().unwrap(), 3);

        let sent = submitter.rpc().sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].sequence, 42);
        assert_eq!(confirmation.hash, sent[0].hash());
    }

    #[tokio::test]
    async fn test_duplicate_is_treated_as_pending() {
        let rpc = MockRpc::with_statuses(vec![confirmed(5, vec![])]);
        rpc.send_status.lock().unwrap().push_back(SendStatus::Duplicate);
        let submitter = Submitter::new(rpc, policy(3));

        let confirmation = submitter.execute(&wallet(), vec![]).await.unwrap();
        assert_eq!(confirmation.slot, 5);
    }

    #[tokio::test]
    async fn test_rejected_and_failed() {
        let rpc = MockRpc::with_statuses(vec![]);
        rpc.send_status.lock().unwrap().push_back(SendStatus::Rejected {
            reason: "bad sequence".to_string(),
        });
        let submitter = Submitter::new(rpc, policy(3));

        let err = submitter.execute(&wallet(), vec![]).await.unwrap_err();
        assert!(matches!(err, ClientError::Rejected { ref reason, .. } if reason == "bad sequence"));
        assert!(!err.is_external());
        assert_eq!(*submitter.rpc().polls.lock().unwrap(), 0);

        let rpc = MockRpc::with_statuses(vec![TxStatus::Failed {
            reason: "InsufficientBalance".to_string(),
        }]);
        let submitter = Submitter::new(rpc, policy(3));

        let err = submitter.execute(&wallet(), vec![]).await.unwrap_err();
        assert!(matches!(err, ClientError::Rejected { .. }));
    }

    #[tokio::test]
    async fn test_times_out_without_terminal_status() {
        let submitter = Submitter::new(MockRpc::with_statuses(vec![]), policy(4));

        let err = submitter.execute(&wallet(), vec![]).await.unwrap_err();

        assert!(matches!(err, ClientError::Timeout { polls: 4, .. }));
        assert!(err.is_external());
        assert_eq!(*submitter.rpc().polls.lock().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_watch_only_never_submits() {
        let submitter = Submitter::new(MockRpc::with_statuses(vec![]), policy(1));
        let watch_only = Wallet::WatchOnly(Pubkey::new_unique());

        let err = submitter.execute(&watch_only, vec![]).await.unwrap_err();

        assert!(matches!(err, ClientError::Signer(_)));
        assert!(submitter.rpc().sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_decodes_operation_results() {
        let participant = Pubkey::new_unique();
        let position = ParticipantPosition {
            participant,
            project: Pubkey::new_unique(),
            contributed_native: 50 * 10_000_000,
            contributed_value: 60 * 10_000_000,
            points_spent: 100 * 10_000_000,
            participation_count: 2,
            ..Default::default()
        };
        let rpc = MockRpc::with_statuses(vec![
            confirmed(1, encoded(&10_000_000_000i128)),
            confirmed(2, encoded(&7u64)),
            confirmed(3, encoded(&position)),
        ]);
        let submitter = Submitter::new(rpc, policy(1));
        let ix = Instruction::new_with_bytes(star_launch::ID, &[], vec![]);

        assert_eq!(
            submitter.mint_star_points(&wallet(), ix.clone()).await.unwrap(),
            10_000_000_000
        );
        assert_eq!(submitter.create_project(&wallet(), ix.clone()).await.unwrap(), 7);
        assert_eq!(
            submitter.participate_in_project(&wallet(), ix).await.unwrap(),
            position
        );
    }

    #[tokio::test]
    async fn test_missing_return_data_is_a_decode_error() {
        let rpc = MockRpc::with_statuses(vec![confirmed(1, vec![])]);
        let submitter = Submitter::new(rpc, policy(1));
        let ix = Instruction::new_with_bytes(star_launch::ID, &[], vec![]);

        assert!(matches!(
            submitter.create_project(&wallet(), ix).await,
            Err(ClientError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_reads_star_points() {
        let builder = InstructionBuilder::default();
        let holder = Pubkey::new_unique();
        let mut rpc = MockRpc::default();
        rpc.return_data.insert(
            builder.addresses.star_account(&holder),
            10_000_000_000i128.to_le_bytes().to_vec(),
        );
        let submitter = Submitter::new(rpc, policy(1));

        assert_eq!(
            submitter.star_points(&builder, holder).await.unwrap(),
            10_000_000_000
        );
        assert!(matches!(
            submitter.project(&builder, holder, 9).await,
            Err(ClientError::Rpc(_))
        ));
    }
}
