use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{AIRDROP_SEED, AIRDROP_VAULT_SEED, MINT_SEED};
use crate::state::{Airdrop, AssetRegistry};

pub fn create_airdrop(ctx: Context<CreateAirdrop>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.set_inner(Airdrop::new(
        ctx.accounts.authority.key(),
        ctx.accounts.mint.key(),
        ctx.accounts.registry.key(),
        now,
    ));

    emit!(AirdropCreated {
        authority: airdrop.authority,
        registry: airdrop.registry,
        vault: ctx.accounts.vault.key(),
        created_ts: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateAirdrop<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Airdrop::SIZE,
        seeds = [AIRDROP_SEED],
        bump
    )]
    pub airdrop: Box<Account<'info, Airdrop>>,

    #[account(
        init,
        payer = authority,
        token::mint = mint,
        token::authority = airdrop,
        seeds = [AIRDROP_VAULT_SEED, airdrop.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(seeds = [MINT_SEED], bump)]
    pub mint: Account<'info, Mint>,

    pub registry: AccountLoader<'info, AssetRegistry>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct AirdropCreated {
    pub authority: Pubkey,
    pub registry: Pubkey,
    pub vault: Pubkey,
    pub created_ts: i64,
}
