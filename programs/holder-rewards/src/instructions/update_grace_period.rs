use anchor_lang::prelude::*;

use crate::constants::TREASURY_SEED;
use crate::state::Treasury;

pub fn update_grace_period(ctx: Context<UpdateGracePeriod>, new_period: i64) -> Result<()> {
    let treasury = &mut ctx.accounts.treasury;
    let old = treasury.grace_period;
    treasury.update_grace_period(&ctx.accounts.authority.key(), new_period)?;

    emit!(GracePeriodUpdated {
        old_period: old,
        new_period,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateGracePeriod<'info> {
    #[account(mut, seeds = [TREASURY_SEED], bump)]
    pub treasury: Account<'info, Treasury>,

    pub authority: Signer<'info>,
}

#[event]
pub struct GracePeriodUpdated {
    pub old_period: i64,
    pub new_period: i64,
}
