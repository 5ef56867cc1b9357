use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("HQGvGh68UfQrsqyxFRRjfWoTru12qbAE5d2TfAJgscdJ");

#[program]
pub mod holder_rewards {
    use super::*;

    // Genesis

    pub fn initialize_genesis(ctx: Context<InitializeGenesis>) -> Result<()> {
        instructions::initialize_genesis(ctx)
    }

    pub fn distribute_genesis(ctx: Context<DistributeGenesis>) -> Result<()> {
        instructions::distribute_genesis(ctx)
    }

    // Treasury

    pub fn create_treasury(ctx: Context<CreateTreasury>) -> Result<()> {
        instructions::create_treasury(ctx)
    }

    pub fn initiate_treasury(ctx: Context<InitiateTreasury>) -> Result<()> {
        instructions::initiate_treasury(ctx)
    }

    pub fn treasury_withdraw(ctx: Context<TreasuryWithdraw>, amount: u64) -> Result<()> {
        instructions::treasury_withdraw(ctx, amount)
    }

    pub fn update_grace_period(ctx: Context<UpdateGracePeriod>, new_period: i64) -> Result<()> {
        instructions::update_grace_period(ctx, new_period)
    }

    // Airdrop

    pub fn create_airdrop(ctx: Context<CreateAirdrop>) -> Result<()> {
        instructions::create_airdrop(ctx)
    }

    pub fn initiate_airdrop(ctx: Context<InitiateAirdrop>) -> Result<()> {
        instructions::initiate_airdrop(ctx)
    }

    pub fn claim_airdrop(ctx: Context<ClaimAirdrop>, asset_id: u32) -> Result<()> {
        instructions::claim_airdrop(ctx, asset_id)
    }

    pub fn burn_remaining(ctx: Context<BurnRemaining>) -> Result<()> {
        instructions::burn_remaining(ctx)
    }

    // Vesting

    pub fn create_distributor(ctx: Context<CreateDistributor>) -> Result<()> {
        instructions::create_distributor(ctx)
    }

    pub fn initiate_distributor(ctx: Context<InitiateDistributor>) -> Result<()> {
        instructions::initiate_distributor(ctx)
    }

    pub fn claim_vesting(ctx: Context<ClaimVesting>, asset_id: u32) -> Result<()> {
        instructions::claim_vesting(ctx, asset_id)
    }

    pub fn claim_for_all_assets(ctx: Context<ClaimForAllAssets>) -> Result<()> {
        instructions::claim_for_all_assets(ctx)
    }

    pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, asset_id: u32) -> Result<()> {
        instructions::emit_claim_quote(ctx, asset_id)
    }

    // Collectible registry

    pub fn create_registry(ctx: Context<CreateRegistry>) -> Result<()> {
        instructions::create_registry(ctx)
    }

    pub fn mint_asset(ctx: Context<MintAsset>, to: Pubkey) -> Result<()> {
        instructions::mint_asset(ctx, to)
    }

    pub fn transfer_asset(ctx: Context<TransferAsset>, asset_id: u32, to: Pubkey) -> Result<()> {
        instructions::transfer_asset(ctx, asset_id, to)
    }
}
