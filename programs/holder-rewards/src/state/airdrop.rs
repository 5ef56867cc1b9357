use anchor_lang::prelude::*;

use crate::constants::{AIRDROP_ALLOCATION, AIRDROP_WINDOW, CLAIM_BITMAP_LEN, MAX_ASSETS};
use crate::error::RewardsError;
use crate::state::registry::{slot_index, AssetRegistry};
use crate::utils::access::only_owner;
use crate::utils::time;

/// Time-boxed, one-claim-per-asset airdrop PDA.
#[account]
pub struct Airdrop {
    /// Owner authority.
    pub authority: Pubkey,
    /// Token mint.
    pub mint: Pubkey,
    /// Collectible registry consulted for ownership.
    pub registry: Pubkey,
    /// Creation time; stands in for `start_ts` until initiation.
    pub created_ts: i64,
    pub initialized: bool,
    /// Window opens here (Unix seconds).
    pub start_ts: i64,
    /// Fixed payout per asset id.
    pub per_claim_amount: u64,
    pub claimed_count: u32,
    /// Set once the unclaimed remainder has been burned.
    pub swept: bool,
    /// One bit per asset id; bit `id - 1`.
    pub claimed: [u8; CLAIM_BITMAP_LEN],
}

impl Airdrop {
    pub const SIZE: usize =
        32 + // authority
        32 + // mint
        32 + // registry
        8 +  // created_ts
        1 +  // initialized
        8 +  // start_ts
        8 +  // per_claim_amount
        4 +  // claimed_count
        1 +  // swept
        CLAIM_BITMAP_LEN; // claimed

    pub fn new(authority: Pubkey, mint: Pubkey, registry: Pubkey, created_ts: i64) -> Self {
        Self {
            authority,
            mint,
            registry,
            created_ts,
            initialized: false,
            start_ts: 0,
            per_claim_amount: 0,
            claimed_count: 0,
            swept: false,
            claimed: [0u8; CLAIM_BITMAP_LEN],
        }
    }

    pub fn initiate(&mut self, vault_balance: u64, now_ts: i64) -> std::result::Result<(), RewardsError> {
        if self.initialized {
            return Err(RewardsError::AlreadyInitialized);
        }
        if vault_balance < AIRDROP_ALLOCATION {
            return Err(RewardsError::InsufficientFunds);
        }
        self.initialized = true;
        self.start_ts = now_ts;
        self.per_claim_amount = AIRDROP_ALLOCATION / MAX_ASSETS as u64;
        Ok(())
    }

    /// Window start: initiation time, or creation time if never initiated.
    pub fn window_start(&self) -> i64 {
        if self.initialized {
            self.start_ts
        } else {
            self.created_ts
        }
    }

    pub fn window_closed(&self, now_ts: i64) -> std::result::Result<bool, RewardsError> {
        time::has_elapsed(now_ts, self.window_start(), AIRDROP_WINDOW)
    }

    pub fn is_claimed(&self, asset_id: u32) -> std::result::Result<bool, RewardsError> {
        let idx = slot_index(asset_id)?;
        Ok(self.claimed[idx / 8] & (1 << (idx % 8)) != 0)
    }

    /// Checks eligibility against current registry ownership and marks the
    /// id claimed. Returns the amount to pay out.
    pub fn record_claim(
        &mut self,
        registry: &AssetRegistry,
        caller: &Pubkey,
        asset_id: u32,
        now_ts: i64,
    ) -> std::result::Result<u64, RewardsError> {
        if !self.initialized {
            return Err(RewardsError::NotInitialized);
        }
        if self.window_closed(now_ts)? {
            return Err(RewardsError::WindowClosed);
        }
        if registry.owner_of(asset_id)? != *caller {
            return Err(RewardsError::NotOwner);
        }
        if self.is_claimed(asset_id)? {
            return Err(RewardsError::AlreadyClaimed);
        }
        let idx = slot_index(asset_id)?;
        self.claimed[idx / 8] |= 1 << (idx % 8);
        self.claimed_count = self
            .claimed_count
            .checked_add(1)
            .ok_or(RewardsError::MathOverflow)?;
        Ok(self.per_claim_amount)
    }

    /// Terminal sweep of the unclaimed remainder after the window closes.
    pub fn authorize_burn(&mut self, caller: &Pubkey, now_ts: i64) -> std::result::Result<(), RewardsError> {
        only_owner(&self.authority, caller)?;
        if !self.window_closed(now_ts)? {
            return Err(RewardsError::WindowStillOpen);
        }
        if self.swept {
            return Err(RewardsError::AlreadySwept);
        }
        self.swept = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ONE_TOKEN, SECONDS_PER_DAY};

    const START: i64 = 1_767_225_600;

    struct Fixture {
        airdrop: Airdrop,
        registry: Box<AssetRegistry>,
        owner: Pubkey,
        alice: Pubkey,
        bob: Pubkey,
    }

    fn fixture() -> Fixture {
        let owner = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let mut registry: Box<AssetRegistry> = bytemuck::zeroed_box();
        registry.init(owner, Pubkey::new_unique());
        registry.mint_to(&owner, alice).unwrap();
        registry.mint_to(&owner, bob).unwrap();
        let mut airdrop = Airdrop::new(owner, Pubkey::new_unique(), Pubkey::new_unique(), START);
        airdrop.initiate(AIRDROP_ALLOCATION, START).unwrap();
        Fixture {
            airdrop,
            registry,
            owner,
            alice,
            bob,
        }
    }

    struct NoOp;

    impl crate::state::registry::TransferObserver for NoOp {
        fn on_asset_transferred(&mut self, _: u32, _: i64) -> std::result::Result<(), RewardsError> {
            Ok(())
        }
    }

    #[test]
    fn initiate_once_and_funded() {
        let mut a = Airdrop::new(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique(), START);
        assert!(matches!(
            a.initiate(AIRDROP_ALLOCATION - 1, START),
            Err(RewardsError::InsufficientFunds)
        ));
        a.initiate(AIRDROP_ALLOCATION, START).unwrap();
        assert_eq!(a.start_ts, START);
        assert!(matches!(
            a.initiate(AIRDROP_ALLOCATION, START + 1),
            Err(RewardsError::AlreadyInitialized)
        ));
    }

    #[test]
    fn each_holder_claims_pool_share() {
        let mut f = fixture();
        let paid = f.airdrop.record_claim(&f.registry, &f.alice, 1, START).unwrap();
        assert_eq!(paid, AIRDROP_ALLOCATION / MAX_ASSETS as u64);
        assert!(paid > 1_000 * ONE_TOKEN);
        assert!(f.airdrop.record_claim(&f.registry, &f.bob, 2, START).is_ok());
        assert_eq!(f.airdrop.claimed_count, 2);
    }

    #[test]
    fn window_boundary() {
        let mut f = fixture();
        let end = START + 30 * SECONDS_PER_DAY;
        assert!(matches!(
            f.airdrop.record_claim(&f.registry, &f.alice, 1, end),
            Err(RewardsError::WindowClosed)
        ));
        // Window is checked before the id is looked up.
        assert!(matches!(
            f.airdrop.record_claim(&f.registry, &f.alice, 0, end),
            Err(RewardsError::WindowClosed)
        ));
        assert!(f
            .airdrop
            .record_claim(&f.registry, &f.alice, 1, end - 1)
            .is_ok());
    }

    #[test]
    fn must_hold_the_asset() {
        let mut f = fixture();
        assert!(matches!(
            f.airdrop.record_claim(&f.registry, &f.alice, 2, START),
            Err(RewardsError::NotOwner)
        ));
        assert!(matches!(
            f.airdrop.record_claim(&f.registry, &f.alice, 3, START),
            Err(RewardsError::AssetNotMinted)
        ));
        assert!(!f.airdrop.is_claimed(2).unwrap());
    }

    #[test]
    fn claim_flag_travels_with_the_id() {
        let mut f = fixture();
        f.airdrop.record_claim(&f.registry, &f.alice, 1, START).unwrap();
        assert!(matches!(
            f.airdrop.record_claim(&f.registry, &f.alice, 1, START + 1),
            Err(RewardsError::AlreadyClaimed)
        ));

        f.registry
            .transfer(&f.alice, f.bob, 1, START + 2, &mut NoOp)
            .unwrap();
        assert!(matches!(
            f.airdrop.record_claim(&f.registry, &f.bob, 1, START + 3),
            Err(RewardsError::AlreadyClaimed)
        ));
    }

    #[test]
    fn eligibility_follows_mid_window_transfer() {
        let mut f = fixture();
        f.registry
            .transfer(&f.alice, f.bob, 1, START + 10, &mut NoOp)
            .unwrap();
        assert!(matches!(
            f.airdrop.record_claim(&f.registry, &f.alice, 1, START + 11),
            Err(RewardsError::NotOwner)
        ));
        assert!(f.airdrop.record_claim(&f.registry, &f.bob, 1, START + 11).is_ok());
    }

    #[test]
    fn bitmap_covers_last_id() {
        let mut a = Airdrop::new(Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique(), START);
        let last = MAX_ASSETS as u32;
        assert!(!a.is_claimed(last).unwrap());
        let idx = last as usize - 1;
        a.claimed[idx / 8] |= 1 << (idx % 8);
        assert!(a.is_claimed(last).unwrap());
        assert!(!a.is_claimed(last - 1).unwrap());
        assert!(matches!(a.is_claimed(last + 1), Err(RewardsError::InvalidAssetId)));
    }

    #[test]
    fn burn_only_after_window_and_once() {
        let mut f = fixture();
        let end = START + 30 * SECONDS_PER_DAY;
        assert!(matches!(
            f.airdrop.authorize_burn(&f.owner, end - 1),
            Err(RewardsError::WindowStillOpen)
        ));
        assert!(matches!(
            f.airdrop.authorize_burn(&f.alice, end),
            Err(RewardsError::PermissionDenied)
        ));
        f.airdrop.authorize_burn(&f.owner, end).unwrap();
        assert!(matches!(
            f.airdrop.authorize_burn(&f.owner, end + 1),
            Err(RewardsError::AlreadySwept)
        ));
    }

    #[test]
    fn burn_without_initiation_counts_from_creation() {
        let owner = Pubkey::new_unique();
        let created = START - 10 * SECONDS_PER_DAY;
        let mut a = Airdrop::new(owner, Pubkey::new_unique(), Pubkey::new_unique(), created);
        let end = created + 30 * SECONDS_PER_DAY;
        assert!(matches!(
            a.authorize_burn(&owner, end - 1),
            Err(RewardsError::WindowStillOpen)
        ));
        assert!(matches!(
            a.authorize_burn(&Pubkey::new_unique(), end),
            Err(RewardsError::PermissionDenied)
        ));
        a.authorize_burn(&owner, end).unwrap();
        assert!(matches!(
            a.authorize_burn(&owner, end + 1),
            Err(RewardsError::AlreadySwept)
        ));
    }

    #[test]
    fn initiation_moves_window_start() {
        let owner = Pubkey::new_unique();
        let created = START - 20 * SECONDS_PER_DAY;
        let mut a = Airdrop::new(owner, Pubkey::new_unique(), Pubkey::new_unique(), created);
        a.initiate(AIRDROP_ALLOCATION, START).unwrap();
        assert_eq!(a.window_start(), START);
        assert!(matches!(
            a.authorize_burn(&owner, created + 30 * SECONDS_PER_DAY),
            Err(RewardsError::WindowStillOpen)
        ));
        assert!(a.authorize_burn(&owner, START + 30 * SECONDS_PER_DAY).is_ok());
    }
}
