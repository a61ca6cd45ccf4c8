//! Instruction builders for every program entry point

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{system_program, InstructionData};
use anchor_spl::token;
use star_launch::constants::*;
use star_launch::instructions::{InitializeConfigParams, UpdateConfigParams};
use star_launch::state::{ProjectParams, Timing, Tokenomics, TokenomicsParams};
use star_launch::utils::{derive_tokenomics, validate_tokenomics, FixedPointAmount};
use star_launch::{accounts, instruction};

use crate::error::{ClientError, Result};
use crate::pda::ProgramAddresses;

const DAY: u64 = 24 * 60 * 60;

/// Derive the tokenomics sent to `create_project`, failing exactly as the program would
pub fn preview_tokenomics(
    total_supply: FixedPointAmount,
    params: &TokenomicsParams,
    min_target_amount: FixedPointAmount,
) -> Result<Tokenomics> {
    let tokenomics = derive_tokenomics(total_supply, params)?;
    validate_tokenomics(total_supply, &tokenomics, min_target_amount)?;
    Ok(tokenomics)
}

fn days_to_seconds(days: u64) -> Result<u64> {
    days.checked_mul(DAY)
        .ok_or_else(|| ClientError::Program(format!("{days} days overflows the clock")))
}

/// Human-entered project form: decimal strings, percentages and days
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub symbol: String,
    pub token_address: Pubkey,
    pub total_supply: String,
    pub airdrop_percent: u8,
    pub creator_percent: u8,
    pub liquidity_percent: u8,
    pub minimum_liquidity: String,
    pub participation_period_days: u64,
    /// `None` for no vesting
    pub vesting_period_days: Option<u64>,
}

impl ProjectDraft {
    /// Convert into `create_project` arguments, opening the window at `now`.
    ///
    /// The symbol is uppercased, which is the only spelling the program accepts.
    pub fn to_launch_args(&self, now: u64) -> Result<(ProjectParams, Tokenomics, Timing)> {
        let total_supply = FixedPointAmount::parse(&self.total_supply)?;
        let target_amount = FixedPointAmount::parse(&self.minimum_liquidity)?;

        let params = ProjectParams {
            name: self.name.clone(),
            symbol: self.symbol.trim().to_ascii_uppercase(),
            token_address: self.token_address,
            total_supply: total_supply.mantissa(),
        };

        let tokenomics = derive_tokenomics(
            total_supply,
            &TokenomicsParams {
                airdrop_percent: self.airdrop_percent,
                creator_percent: self.creator_percent,
                liquidity_percent: self.liquidity_percent,
                max_contribution: DEFAULT_MAX_CONTRIBUTION,
                min_contribution: DEFAULT_MIN_CONTRIBUTION,
                price_per_token: DEFAULT_PRICE_PER_TOKEN,
                target_amount: target_amount.mantissa(),
            },
        )?;

        let end_time = now
            .checked_add(days_to_seconds(self.participation_period_days)?)
            .ok_or_else(|| {
                ClientError::Program("participation period overflows the clock".to_string())
            })?;

        let timing = Timing {
            end_time,
            start_time: now,
            vesting_cliff: 0,
            vesting_duration: days_to_seconds(self.vesting_period_days.unwrap_or(0))?,
        };

        Ok((params, tokenomics, timing))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InstructionBuilder {
    pub addresses: ProgramAddresses,
}

impl InstructionBuilder {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            addresses: ProgramAddresses::new(program_id),
        }
    }

    fn build(&self, accounts: impl ToAccountMetas, data: impl InstructionData) -> Instruction {
        Instruction {
            program_id: self.addresses.program_id,
            accounts: accounts.to_account_metas(None),
            data: data.data(),
        }
    }

    pub fn initialize_config(
        &self,
        admin: Pubkey,
        quote_mint: Pubkey,
        params: InitializeConfigParams,
    ) -> Instruction {
        self.build(
            accounts::InitializeConfig {
                admin,
                global_config: self.addresses.global_config(),
                quote_mint,
                vault_authority: self.addresses.vault_authority(),
                treasury_vault: self.addresses.treasury_vault(&quote_mint),
                token_program: token::ID,
                system_program: system_program::ID,
            },
            instruction::InitializeConfig { params },
        )
    }

    pub fn update_config(&self, admin: Pubkey, params: UpdateConfigParams) -> Instruction {
        self.build(
            accounts::UpdateConfig {
                admin,
                global_config: self.addresses.global_config(),
            },
            instruction::UpdateConfig { params },
        )
    }

    pub fn withdraw_treasury(
        &self,
        admin: Pubkey,
        quote_mint: Pubkey,
        destination: Pubkey,
        amount: FixedPointAmount,
    ) -> Instruction {
        self.build(
            accounts::WithdrawTreasury {
                admin,
                global_config: self.addresses.global_config(),
                vault_authority: self.addresses.vault_authority(),
                treasury_vault: self.addresses.treasury_vault(&quote_mint),
                destination,
                token_program: token::ID,
            },
            instruction::WithdrawTreasury {
                amount: amount.mantissa(),
            },
        )
    }

    pub fn register_referrer(&self, user: Pubkey, referrer: Pubkey) -> Instruction {
        self.build(
            accounts::RegisterReferrer {
                user,
                star_account: self.addresses.star_account(&user),
                referrer_account: self.addresses.star_account(&referrer),
                system_program: system_program::ID,
            },
            instruction::RegisterReferrer { referrer },
        )
    }

    /// `referrer` must be the recipient's registered referrer, if any
    pub fn mint_star_points(
        &self,
        depositor: Pubkey,
        depositor_token_account: Pubkey,
        quote_mint: Pubkey,
        recipient: Pubkey,
        referrer: Option<Pubkey>,
        amount: FixedPointAmount,
    ) -> Instruction {
        self.build(
            accounts::MintStarPoints {
                depositor,
                global_config: self.addresses.global_config(),
                recipient_account: self.addresses.star_account(&recipient),
                referrer_account: referrer.map(|referrer| self.addresses.star_account(&referrer)),
                depositor_token_account,
                treasury_vault: self.addresses.treasury_vault(&quote_mint),
                token_program: token::ID,
                system_program: system_program::ID,
            },
            instruction::MintStarPoints {
                recipient,
                amount: amount.mantissa(),
            },
        )
    }

    /// `project_id` must be the registry's current project count
    #[allow(clippy::too_many_arguments)]
    pub fn create_project(
        &self,
        creator: Pubkey,
        creator_token_account: Pubkey,
        quote_mint: Pubkey,
        project_id: u64,
        params: ProjectParams,
        tokenomics: Tokenomics,
        timing: Timing,
    ) -> Instruction {
        let project = self.addresses.project(project_id);

        self.build(
            accounts::CreateProject {
                creator,
                global_config: self.addresses.global_config(),
                project,
                symbol_guard: self.addresses.symbol_guard(&creator, &params.symbol),
                vault_authority: self.addresses.vault_authority(),
                token_mint: params.token_address,
                quote_mint,
                token_vault: self.addresses.token_vault(&project),
                native_vault: self.addresses.native_vault(&project),
                creator_token_account,
                token_program: token::ID,
                system_program: system_program::ID,
            },
            instruction::CreateProject {
                params,
                tokenomics,
                timing,
            },
        )
    }

    /// `participation_index` is the position's current participation count
    pub fn participate_in_project(
        &self,
        participant: Pubkey,
        participant_token_account: Pubkey,
        project_id: u64,
        participation_index: u32,
        native_amount: FixedPointAmount,
        points_amount: FixedPointAmount,
    ) -> Instruction {
        let project = self.addresses.project(project_id);

        self.build(
            accounts::ParticipateInProject {
                participant,
                project,
                star_account: self.addresses.star_account(&participant),
                position: self.addresses.position(&project, &participant),
                participation: self.addresses.participation(
                    &project,
                    &participant,
                    participation_index,
                ),
                native_vault: self.addresses.native_vault(&project),
                participant_token_account,
                token_program: token::ID,
                system_program: system_program::ID,
            },
            instruction::ParticipateInProject {
                project_id,
                native_amount: native_amount.mantissa(),
                points_amount: points_amount.mantissa(),
            },
        )
    }

    pub fn finalize_project(
        &self,
        authority: Pubkey,
        project_id: u64,
        creator: Pubkey,
        symbol: &str,
    ) -> Instruction {
        self.build(
            accounts::FinalizeProject {
                authority,
                project: self.addresses.project(project_id),
                symbol_guard: self.addresses.symbol_guard(&creator, symbol),
            },
            instruction::FinalizeProject {},
        )
    }

    pub fn claim_creator_tokens(
        &self,
        creator: Pubkey,
        creator_token_account: Pubkey,
        project_id: u64,
    ) -> Instruction {
        let project = self.addresses.project(project_id);

        self.build(
            accounts::ClaimCreatorTokens {
                creator,
                vault_authority: self.addresses.vault_authority(),
                project,
                token_vault: self.addresses.token_vault(&project),
                creator_token_account,
                token_program: token::ID,
            },
            instruction::ClaimCreatorTokens {},
        )
    }

    pub fn claim_creator_proceeds(
        &self,
        creator: Pubkey,
        creator_token_account: Pubkey,
        creator_native_account: Pubkey,
        project_id: u64,
    ) -> Instruction {
        let project = self.addresses.project(project_id);

        self.build(
            accounts::ClaimCreatorProceeds {
                creator,
                vault_authority: self.addresses.vault_authority(),
                project,
                creator_star_account: self.addresses.star_account(&creator),
                token_vault: self.addresses.token_vault(&project),
                native_vault: self.addresses.native_vault(&project),
                creator_token_account,
                creator_native_account,
                token_program: token::ID,
                system_program: system_program::ID,
            },
            instruction::ClaimCreatorProceeds {},
        )
    }

    pub fn claim_airdrop(
        &self,
        participant: Pubkey,
        participant_token_account: Pubkey,
        project_id: u64,
    ) -> Instruction {
        let project = self.addresses.project(project_id);

        self.build(
            accounts::ClaimAirdrop {
                participant,
                vault_authority: self.addresses.vault_authority(),
                project,
                position: self.addresses.position(&project, &participant),
                token_vault: self.addresses.token_vault(&project),
                participant_token_account,
                token_program: token::ID,
            },
            instruction::ClaimAirdrop {},
        )
    }

    pub fn claim_refund(
        &self,
        participant: Pubkey,
        participant_native_account: Pubkey,
        project_id: u64,
    ) -> Instruction {
        let project = self.addresses.project(project_id);

        self.build(
            accounts::ClaimRefund {
                participant,
                vault_authority: self.addresses.vault_authority(),
                project,
                position: self.addresses.position(&project, &participant),
                star_account: self.addresses.star_account(&participant),
                native_vault: self.addresses.native_vault(&project),
                participant_native_account,
                token_program: token::ID,
            },
            instruction::ClaimRefund {},
        )
    }

    pub fn reclaim_project_tokens(
        &self,
        creator: Pubkey,
        creator_token_account: Pubkey,
        project_id: u64,
    ) -> Instruction {
        let project = self.addresses.project(project_id);

        self.build(
            accounts::ReclaimProjectTokens {
                creator,
                vault_authority: self.addresses.vault_authority(),
                project,
                token_vault: self.addresses.token_vault(&project),
                creator_token_account,
                token_program: token::ID,
            },
            instruction::ReclaimProjectTokens {},
        )
    }

    /// Read-only, meant for simulation
    pub fn get_star_points(&self, address: Pubkey) -> Instruction {
        self.build(
            accounts::GetStarPoints {
                star_account: self.addresses.star_account(&address),
            },
            instruction::GetStarPoints { address },
        )
    }

    /// Read-only, meant for simulation
    pub fn get_project(&self, project_id: u64) -> Instruction {
        self.build(
            accounts::GetProject {
                project: self.addresses.project(project_id),
            },
            instruction::GetProject { project_id },
        )
    }
}
