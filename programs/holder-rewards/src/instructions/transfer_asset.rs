use anchor_lang::prelude::*;

use crate::error::RewardsError;
use crate::state::{AssetRegistry, VestingLedger};

/// Moves an asset and, in the same instruction, restarts its vesting clock.
pub fn transfer_asset(ctx: Context<TransferAsset>, asset_id: u32, to: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let from = ctx.accounts.owner.key();

    let mut registry = ctx.accounts.registry.load_mut()?;
    require_keys_eq!(
        ctx.accounts.vesting_ledger.key(),
        registry.transfer_observer,
        RewardsError::ObserverMismatch
    );
    let mut ledger = ctx.accounts.vesting_ledger.load_mut()?;
    registry.transfer(&from, to, asset_id, now, &mut *ledger)?;

    emit!(AssetTransferred { asset_id, from, to });
    emit!(VestingClockReset {
        asset_id,
        reset_at: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferAsset<'info> {
    #[account(mut)]
    pub registry: AccountLoader<'info, AssetRegistry>,

    #[account(mut)]
    pub vesting_ledger: AccountLoader<'info, VestingLedger>,

    pub owner: Signer<'info>,
}

#[event]
pub struct AssetTransferred {
    pub asset_id: u32,
    pub from: Pubkey,
    pub to: Pubkey,
}

#[event]
pub struct VestingClockReset {
    pub asset_id: u32,
    pub reset_at: i64,
}
