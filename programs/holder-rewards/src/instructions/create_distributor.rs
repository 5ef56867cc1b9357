use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{ANNUAL_ALLOCATION_PER_ASSET, DISTRIBUTOR_SEED, DISTRIBUTOR_VAULT_SEED, MINT_SEED};
use crate::error::RewardsError;
use crate::state::{Distributor, VestingLedger};

/// Creates the distributor and binds its pre-allocated vesting ledger to the
/// registry that will report transfers into it.
pub fn create_distributor(ctx: Context<CreateDistributor>) -> Result<()> {
    let registry_key = ctx.accounts.registry.key();
    require!(registry_key != Pubkey::default(), RewardsError::InvalidPubkey);

    let distributor_key = ctx.accounts.distributor.key();
    let mut ledger = ctx.accounts.vesting_ledger.load_init()?;
    ledger.distributor = distributor_key;
    ledger.registry = registry_key;

    let distributor = &mut ctx.accounts.distributor;
    distributor.set_inner(Distributor {
        authority: ctx.accounts.authority.key(),
        mint: ctx.accounts.mint.key(),
        registry: registry_key,
        vesting_ledger: ctx.accounts.vesting_ledger.key(),
        initialized: false,
        start_ts: 0,
        annual_allocation_per_asset: ANNUAL_ALLOCATION_PER_ASSET,
        total_claimed: 0,
    });

    emit!(DistributorCreated {
        authority: distributor.authority,
        registry: registry_key,
        vesting_ledger: distributor.vesting_ledger,
        annual_allocation_per_asset: ANNUAL_ALLOCATION_PER_ASSET,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateDistributor<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Distributor::SIZE,
        seeds = [DISTRIBUTOR_SEED],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    #[account(
        init,
        payer = authority,
        token::mint = mint,
        token::authority = distributor,
        seeds = [DISTRIBUTOR_VAULT_SEED, distributor.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(zero)]
    pub vesting_ledger: AccountLoader<'info, VestingLedger>,

    /// CHECK: Pre-allocated registry account; only its address is recorded here.
    /// `create_registry` verifies the binding from the other side.
    pub registry: UncheckedAccount<'info>,

    #[account(seeds = [MINT_SEED], bump)]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct DistributorCreated {
    pub authority: Pubkey,
    pub registry: Pubkey,
    pub vesting_ledger: Pubkey,
    pub annual_allocation_per_asset: u64,
}
