use anchor_lang::prelude::Pubkey;

use crate::error::RewardsError;

/// Owner gate: the caller must be the owner stored by the component.
pub fn only_owner(owner: &Pubkey, caller: &Pubkey) -> Result<(), RewardsError> {
    if owner != caller {
        return Err(RewardsError::PermissionDenied);
    }
    Ok(())
}
