use anchor_lang::prelude::*;

use crate::constants::MAX_ASSETS;
use crate::error::RewardsError;

/// Receives ownership changes from the registry inside the transfer itself.
pub trait TransferObserver {
    fn on_asset_transferred(&mut self, asset_id: u32, now_ts: i64) -> std::result::Result<(), RewardsError>;
}

/// Collectible ownership table. Ids run from 1 to `max_supply`; slot `id - 1`
/// holds the owner. Pre-allocated by the client (too large for CPI init).
#[account(zero_copy)]
pub struct AssetRegistry {
    /// Minting authority.
    pub authority: Pubkey,
    /// Vesting ledger notified on every transfer; registered at creation.
    pub transfer_observer: Pubkey,
    pub max_supply: u32,
    /// Highest id minted so far.
    pub minted: u32,
    pub owners: [Pubkey; MAX_ASSETS],
}

impl AssetRegistry {
    pub const SIZE: usize = core::mem::size_of::<AssetRegistry>();

    pub fn space() -> usize {
        8 + Self::SIZE
    }

    pub fn init(&mut self, authority: Pubkey, transfer_observer: Pubkey) {
        self.authority = authority;
        self.transfer_observer = transfer_observer;
        self.max_supply = MAX_ASSETS as u32;
        self.minted = 0;
    }

    pub fn owner_of(&self, asset_id: u32) -> std::result::Result<Pubkey, RewardsError> {
        let idx = slot_index(asset_id)?;
        if asset_id > self.minted {
            return Err(RewardsError::AssetNotMinted);
        }
        Ok(self.owners[idx])
    }

    /// Assigns the next id to `to` and returns it.
    pub fn mint_to(&mut self, caller: &Pubkey, to: Pubkey) -> std::result::Result<u32, RewardsError> {
        crate::utils::access::only_owner(&self.authority, caller)?;
        if to == Pubkey::default() {
            return Err(RewardsError::InvalidPubkey);
        }
        if self.minted >= self.max_supply {
            return Err(RewardsError::MaxSupplyReached);
        }
        let asset_id = self.minted.checked_add(1).ok_or(RewardsError::MathOverflow)?;
        self.owners[slot_index(asset_id)?] = to;
        self.minted = asset_id;
        Ok(asset_id)
    }

    /// Moves `asset_id` from `caller` to `to`. The observer runs first so a
    /// failing hook leaves ownership untouched.
    pub fn transfer(
        &mut self,
        caller: &Pubkey,
        to: Pubkey,
        asset_id: u32,
        now_ts: i64,
        observer: &mut dyn TransferObserver,
    ) -> std::result::Result<(), RewardsError> {
        if self.owner_of(asset_id)? != *caller {
            return Err(RewardsError::NotOwner);
        }
        if to == Pubkey::default() {
            return Err(RewardsError::InvalidPubkey);
        }
        observer.on_asset_transferred(asset_id, now_ts)?;
        self.owners[slot_index(asset_id)?] = to;
        Ok(())
    }

    /// Ids currently held by `owner`, ascending.
    pub fn ids_owned_by<'a>(&'a self, owner: &'a Pubkey) -> impl Iterator<Item = u32> + 'a {
        self.owners
            .iter()
            .take(self.minted as usize)
            .enumerate()
            .filter(move |(_, o)| *o == owner)
            .map(|(idx, _)| idx as u32 + 1)
    }
}

/// Table slot of a 1-based asset id.
pub fn slot_index(asset_id: u32) -> std::result::Result<usize, RewardsError> {
    if asset_id == 0 || asset_id as usize > MAX_ASSETS {
        return Err(RewardsError::InvalidAssetId);
    }
    Ok(asset_id as usize - 1)
}
