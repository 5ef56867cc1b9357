use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::constants::{AIRDROP_SEED, AIRDROP_VAULT_SEED};
use crate::error::RewardsError;
use crate::state::Airdrop;

/// Burns whatever the airdrop vault still holds once the window is over.
pub fn burn_remaining(ctx: Context<BurnRemaining>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .airdrop
        .authorize_burn(&ctx.accounts.authority.key(), now)?;

    let amount = ctx.accounts.vault.amount;
    if amount > 0 {
        let signer_seeds: &[&[&[u8]]] = &[&[AIRDROP_SEED, &[ctx.bumps.airdrop]]];
        token::burn(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Burn {
                    mint: ctx.accounts.mint.to_account_info(),
                    from: ctx.accounts.vault.to_account_info(),
                    authority: ctx.accounts.airdrop.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;
    }

    msg!("Burned {} unclaimed airdrop units", amount);
    emit!(AirdropRemainingBurned {
        amount,
        claimed_count: ctx.accounts.airdrop.claimed_count,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct BurnRemaining<'info> {
    #[account(mut, seeds = [AIRDROP_SEED], bump)]
    pub airdrop: Box<Account<'info, Airdrop>>,

    #[account(
        mut,
        seeds = [AIRDROP_VAULT_SEED, airdrop.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut, address = airdrop.mint @ RewardsError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AirdropRemainingBurned {
    pub amount: u64,
    pub claimed_count: u32,
}
