use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{AIRDROP_SEED, AIRDROP_VAULT_SEED};
use crate::error::RewardsError;
use crate::state::{Airdrop, AssetRegistry};

pub fn claim_airdrop(ctx: Context<ClaimAirdrop>, asset_id: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let claimant = ctx.accounts.claimant.key();

    let amount = {
        let registry = ctx.accounts.registry.load()?;
        ctx.accounts
            .airdrop
            .record_claim(&registry, &claimant, asset_id, now)?
    };

    require_keys_eq!(
        ctx.accounts.claimant_token_account.mint,
        ctx.accounts.airdrop.mint,
        RewardsError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.claimant_token_account.owner,
        claimant,
        RewardsError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.vault.amount >= amount,
        RewardsError::InsufficientFunds
    );

    let signer_seeds: &[&[&[u8]]] = &[&[AIRDROP_SEED, &[ctx.bumps.airdrop]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.claimant_token_account.to_account_info(),
                authority: ctx.accounts.airdrop.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(AirdropClaimed {
        asset_id,
        claimant,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimAirdrop<'info> {
    #[account(mut, seeds = [AIRDROP_SEED], bump)]
    pub airdrop: Box<Account<'info, Airdrop>>,

    #[account(address = airdrop.registry @ RewardsError::RegistryMismatch)]
    pub registry: AccountLoader<'info, AssetRegistry>,

    #[account(
        mut,
        seeds = [AIRDROP_VAULT_SEED, airdrop.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub claimant_token_account: Account<'info, TokenAccount>,

    pub claimant: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AirdropClaimed {
    pub asset_id: u32,
    pub claimant: Pubkey,
    pub amount: u64,
}
