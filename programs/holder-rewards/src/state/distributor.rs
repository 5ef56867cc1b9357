use anchor_lang::prelude::*;

use crate::constants::{
    MAX_ASSETS, MONTHS_PER_YEAR, SECONDS_PER_MONTH, VESTING_ACTIVE_DURATION, VESTING_ALLOCATION,
};
use crate::error::RewardsError;
use crate::state::registry::{slot_index, AssetRegistry, TransferObserver};
use crate::utils::access::only_owner;
use crate::utils::time;

/// Holder vesting stream state PDA.
#[account]
pub struct Distributor {
    /// Owner authority.
    pub authority: Pubkey,
    /// Token mint.
    pub mint: Pubkey,
    /// Collectible registry consulted for ownership on every claim.
    pub registry: Pubkey,
    /// Per-asset last-claim table.
    pub vesting_ledger: Pubkey,
    pub initialized: bool,
    /// Initiation timestamp (Unix seconds); every asset's clock starts here.
    pub start_ts: i64,
    /// Amount one asset accrues per full year.
    pub annual_allocation_per_asset: u64,
    /// Sum of every payout so far.
    pub total_claimed: u64,
}

impl Distributor {
    pub const SIZE: usize =
        32 + // authority
        32 + // mint
        32 + // registry
        32 + // vesting_ledger
        1 +  // initialized
        8 +  // start_ts
        8 +  // annual_allocation_per_asset
        8;   // total_claimed

    pub fn initiate(&mut self, vault_balance: u64, now_ts: i64) -> std::result::Result<(), RewardsError> {
        if self.initialized {
            return Err(RewardsError::AlreadyInitialized);
        }
        if vault_balance < VESTING_ALLOCATION {
            return Err(RewardsError::InsufficientFunds);
        }
        self.initialized = true;
        self.start_ts = now_ts;
        Ok(())
    }

    /// Registry setup is reserved for the distributor owner and must target
    /// the registry and ledger bound at creation.
    pub fn authorize_registry(
        &self,
        caller: &Pubkey,
        registry: &Pubkey,
        ledger: &Pubkey,
    ) -> std::result::Result<(), RewardsError> {
        only_owner(&self.authority, caller)?;
        if *registry != self.registry {
            return Err(RewardsError::RegistryMismatch);
        }
        if *ledger != self.vesting_ledger {
            return Err(RewardsError::LedgerMismatch);
        }
        Ok(())
    }

    pub fn is_active(&self, now_ts: i64) -> std::result::Result<bool, RewardsError> {
        Ok(!time::has_elapsed(now_ts, self.start_ts, VESTING_ACTIVE_DURATION)?)
    }

    /// Guard applied to every claim path.
    pub fn ensure_active(&self, now_ts: i64) -> std::result::Result<(), RewardsError> {
        if !self.initialized {
            return Err(RewardsError::NotInitialized);
        }
        if !self.is_active(now_ts)? {
            return Err(RewardsError::Inactive);
        }
        Ok(())
    }

    /// Amount payable for `months` whole months.
    pub fn payable_for(&self, months: u64) -> std::result::Result<u64, RewardsError> {
        let v = (self.annual_allocation_per_asset as u128)
            .checked_mul(months as u128)
            .ok_or(RewardsError::MathOverflow)?
            / MONTHS_PER_YEAR as u128;
        u64::try_from(v).map_err(|_| RewardsError::MathOverflow)
    }

    /// Whole months and payable amount for `asset_id` without touching state.
    pub fn accrued(
        &self,
        ledger: &VestingLedger,
        asset_id: u32,
        now_ts: i64,
    ) -> std::result::Result<Accrual, RewardsError> {
        let anchor_ts = ledger.anchor_of(asset_id, self.start_ts)?;
        let months = time::whole_periods(now_ts, anchor_ts, SECONDS_PER_MONTH)?;
        Ok(Accrual {
            anchor_ts,
            months,
            amount: self.payable_for(months)?,
        })
    }

    /// Single-asset claim. Returns the amount to pay out.
    pub fn claim(
        &mut self,
        ledger: &mut VestingLedger,
        registry: &AssetRegistry,
        caller: &Pubkey,
        asset_id: u32,
        now_ts: i64,
    ) -> std::result::Result<Accrual, RewardsError> {
        self.ensure_active(now_ts)?;
        if registry.owner_of(asset_id)? != *caller {
            return Err(RewardsError::NotOwner);
        }
        let accrual = self.accrued(ledger, asset_id, now_ts)?;
        if accrual.months == 0 {
            return Err(RewardsError::NoClaimableRewards);
        }
        self.settle(ledger, asset_id, &accrual)?;
        Ok(accrual)
    }

    /// Claims every asset `caller` holds; assets with no whole month are skipped.
    pub fn claim_all(
        &mut self,
        ledger: &mut VestingLedger,
        registry: &AssetRegistry,
        caller: &Pubkey,
        now_ts: i64,
    ) -> std::result::Result<BatchClaim, RewardsError> {
        self.ensure_active(now_ts)?;
        let mut batch = BatchClaim::default();
        for asset_id in registry.ids_owned_by(caller) {
            let accrual = self.accrued(ledger, asset_id, now_ts)?;
            if accrual.months == 0 {
                continue;
            }
            self.settle(ledger, asset_id, &accrual)?;
            batch.amount = batch
                .amount
                .checked_add(accrual.amount)
                .ok_or(RewardsError::MathOverflow)?;
            batch.assets_claimed += 1;
        }
        if batch.amount == 0 {
            return Err(RewardsError::NoClaimableRewards);
        }
        Ok(batch)
    }

    // Moves the anchor forward by whole months so the fraction carries over.
    fn settle(
        &mut self,
        ledger: &mut VestingLedger,
        asset_id: u32,
        accrual: &Accrual,
    ) -> std::result::Result<(), RewardsError> {
        let next = time::advance_periods(accrual.anchor_ts, accrual.months, SECONDS_PER_MONTH)?;
        ledger.set_last_claim(asset_id, next)?;
        self.total_claimed = self
            .total_claimed
            .checked_add(accrual.amount)
            .ok_or(RewardsError::MathOverflow)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accrual {
    /// Timestamp the whole months are counted from.
    pub anchor_ts: i64,
    pub months: u64,
    pub amount: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchClaim {
    pub amount: u64,
    pub assets_claimed: u32,
}

/// Per-asset last-claim timestamps, slot `id - 1`. Zero means "never
/// touched" and reads as the distributor start. Pre-allocated by the client.
#[account(zero_copy)]
pub struct VestingLedger {
    pub distributor: Pubkey,
    /// Registry whose transfers reset this ledger.
    pub registry: Pubkey,
    pub last_claim: [i64; MAX_ASSETS],
}

impl VestingLedger {
    pub const SIZE: usize = core::mem::size_of::<VestingLedger>();

    pub fn space() -> usize {
        8 + Self::SIZE
    }

    /// Effective accrual anchor; never earlier than `start_ts`.
    pub fn anchor_of(&self, asset_id: u32, start_ts: i64) -> std::result::Result<i64, RewardsError> {
        Ok(self.last_claim[slot_index(asset_id)?].max(start_ts))
    }

    pub fn set_last_claim(&mut self, asset_id: u32, ts: i64) -> std::result::Result<(), RewardsError> {
        self.last_claim[slot_index(asset_id)?] = ts;
        Ok(())
    }
}

impl TransferObserver for VestingLedger {
    // New holder starts a fresh clock; unclaimed accrual is forfeited.
    fn on_asset_transferred(&mut self, asset_id: u32, now_ts: i64) -> std::result::Result<(), RewardsError> {
        self.set_last_claim(asset_id, now_ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ANNUAL_ALLOCATION_PER_ASSET, ONE_TOKEN, SECONDS_PER_DAY};

    const START: i64 = 1_767_225_600;
    const MONTH: i64 = SECONDS_PER_MONTH;

    struct Fixture {
        distributor: Distributor,
        ledger: Box<VestingLedger>,
        registry: Box<AssetRegistry>,
        admin: Pubkey,
        alice: Pubkey,
        bob: Pubkey,
    }

    impl Fixture {
        fn new() -> Self {
            let admin = Pubkey::new_unique();
            let registry_key = Pubkey::new_unique();
            let ledger_key = Pubkey::new_unique();
            let mut ledger: Box<VestingLedger> = bytemuck::zeroed_box();
            let mut registry: Box<AssetRegistry> = bytemuck::zeroed_box();
            ledger.registry = registry_key;
            registry.init(admin, ledger_key);
            let mut distributor = Distributor {
                authority: admin,
                mint: Pubkey::new_unique(),
                registry: registry_key,
                vesting_ledger: ledger_key,
                initialized: false,
                start_ts: 0,
                annual_allocation_per_asset: ANNUAL_ALLOCATION_PER_ASSET,
                total_claimed: 0,
            };
            distributor.initiate(VESTING_ALLOCATION, START).unwrap();
            Self {
                distributor,
                ledger,
                registry,
                admin,
                alice: Pubkey::new_unique(),
                bob: Pubkey::new_unique(),
            }
        }

        fn mint(&mut self, to: Pubkey) -> u32 {
            let admin = self.admin;
            self.registry.mint_to(&admin, to).unwrap()
        }

        fn claim(&mut self, caller: Pubkey, id: u32, now: i64) -> std::result::Result<Accrual, RewardsError> {
            self.distributor
                .claim(&mut self.ledger, &self.registry, &caller, id, now)
        }

        fn transfer(&mut self, from: Pubkey, to: Pubkey, id: u32, now: i64) {
            self.registry
                .transfer(&from, to, id, now, &mut *self.ledger)
                .unwrap();
        }
    }

    fn one_month() -> u64 {
        ANNUAL_ALLOCATION_PER_ASSET / 12
    }

    #[test]
    fn initiate_once_and_funded() {
        let mut d = Fixture::new().distributor;
        assert!(matches!(
            d.initiate(VESTING_ALLOCATION, START),
            Err(RewardsError::AlreadyInitialized)
        ));

        d.initialized = false;
        assert!(matches!(
            d.initiate(VESTING_ALLOCATION - 1, START),
            Err(RewardsError::InsufficientFunds)
        ));
    }

    #[test]
    fn uninitiated_rejects_claims() {
        let mut f = Fixture::new();
        let id = f.mint(f.alice);
        f.distributor.initialized = false;
        assert!(matches!(
            f.claim(f.alice, id, START + MONTH),
            Err(RewardsError::NotInitialized)
        ));
    }

    #[test]
    fn one_month_pays_a_twelfth() {
        let mut f = Fixture::new();
        let id = f.mint(f.alice);
        let paid = f.claim(f.alice, id, START + MONTH).unwrap();
        assert_eq!(paid.months, 1);
        assert_eq!(paid.amount, one_month());
        // 1000 tokens a year is about 83.33 tokens a month.
        assert!(paid.amount > 83 * ONE_TOKEN && paid.amount < 84 * ONE_TOKEN);
    }

    #[test]
    fn three_months_in_one_claim() {
        let mut f = Fixture::new();
        let id = f.mint(f.alice);
        let paid = f.claim(f.alice, id, START + 3 * MONTH + 5).unwrap();
        assert_eq!(paid.months, 3);
        assert_eq!(paid.amount, ANNUAL_ALLOCATION_PER_ASSET * 3 / 12);
        assert_eq!(paid.amount, 250 * ONE_TOKEN);
    }

    #[test]
    fn nothing_before_first_month() {
        let mut f = Fixture::new();
        let id = f.mint(f.alice);
        assert!(matches!(
            f.claim(f.alice, id, START + MONTH - 1),
            Err(RewardsError::NoClaimableRewards)
        ));
    }

    #[test]
    fn second_claim_same_month_rejected() {
        let mut f = Fixture::new();
        let id = f.mint(f.alice);
        f.claim(f.alice, id, START + MONTH).unwrap();
        assert!(matches!(
            f.claim(f.alice, id, START + MONTH + 10),
            Err(RewardsError::NoClaimableRewards)
        ));
    }

    #[test]
    fn fractional_month_carries_to_next_claim() {
        let mut f = Fixture::new();
        let id = f.mint(f.alice);

        // Day 45: one whole month, fifteen days banked.
        let first = f.claim(f.alice, id, START + 45 * SECONDS_PER_DAY).unwrap();
        assert_eq!(first.months, 1);
        assert_eq!(f.ledger.anchor_of(id, START).unwrap(), START + MONTH);

        // Day 75: 45 days past the day-30 anchor, one whole month again.
        let second = f.claim(f.alice, id, START + 75 * SECONDS_PER_DAY).unwrap();
        assert_eq!(second.months, 1);
        assert_eq!(f.ledger.anchor_of(id, START).unwrap(), START + 2 * MONTH);

        // Day 89: the banked fraction is not yet a whole month.
        assert!(matches!(
            f.claim(f.alice, id, START + 89 * SECONDS_PER_DAY),
            Err(RewardsError::NoClaimableRewards)
        ));
        let third = f.claim(f.alice, id, START + 90 * SECONDS_PER_DAY).unwrap();
        assert_eq!(third.months, 1);
    }

    #[test]
    fn non_owner_cannot_claim() {
        let mut f = Fixture::new();
        let id = f.mint(f.alice);
        assert!(matches!(
            f.claim(f.bob, id, START + MONTH),
            Err(RewardsError::NotOwner)
        ));
        assert!(matches!(
            f.claim(f.bob, 77, START + MONTH),
            Err(RewardsError::AssetNotMinted)
        ));
    }

    #[test]
    fn transfer_resets_accrual_clock() {
        let mut f = Fixture::new();
        let id = f.mint(f.alice);

        // Alice accrues almost two months, then sells.
        let sold_at = START + 2 * MONTH - 1;
        f.transfer(f.alice, f.bob, id, sold_at);

        assert!(matches!(
            f.claim(f.alice, id, sold_at + MONTH),
            Err(RewardsError::NotOwner)
        ));
        assert!(matches!(
            f.claim(f.bob, id, sold_at + MONTH - 1),
            Err(RewardsError::NoClaimableRewards)
        ));
        let paid = f.claim(f.bob, id, sold_at + MONTH).unwrap();
        assert_eq!(paid.months, 1);
        assert_eq!(paid.amount, one_month());
    }

    #[test]
    fn claimed_then_transferred_within_month() {
        let mut f = Fixture::new();
        let id = f.mint(f.alice);
        f.claim(f.alice, id, START + MONTH).unwrap();
        f.transfer(f.alice, f.bob, id, START + MONTH + 1);
        assert!(matches!(
            f.claim(f.bob, id, START + MONTH + 2),
            Err(RewardsError::NoClaimableRewards)
        ));
        assert!(f.claim(f.bob, id, START + 2 * MONTH + 1).is_ok());
    }

    #[test]
    fn transfer_before_initiation_does_not_backdate() {
        let mut f = Fixture::new();
        let id = f.mint(f.alice);
        f.transfer(f.alice, f.bob, id, START - 5 * MONTH);
        assert_eq!(f.ledger.anchor_of(id, START).unwrap(), START);
        let paid = f.claim(f.bob, id, START + MONTH).unwrap();
        assert_eq!(paid.months, 1);
    }

    #[test]
    fn inactive_after_a_year() {
        let mut f = Fixture::new();
        let id = f.mint(f.alice);
        let end = START + VESTING_ACTIVE_DURATION;
        assert!(f.claim(f.alice, id, end - 1).is_ok());

        let other = f.mint(f.alice);
        assert!(matches!(
            f.claim(f.alice, other, end),
            Err(RewardsError::Inactive)
        ));
        assert!(matches!(
            f.distributor
                .claim_all(&mut f.ledger, &f.registry, &f.alice, end),
            Err(RewardsError::Inactive)
        ));
    }

    #[test]
    fn full_year_is_twelve_months_at_most() {
        let mut f = Fixture::new();
        let id = f.mint(f.alice);
        let paid = f
            .claim(f.alice, id, START + VESTING_ACTIVE_DURATION - 1)
            .unwrap();
        assert_eq!(paid.months, 12);
        assert_eq!(paid.amount, ANNUAL_ALLOCATION_PER_ASSET);
    }

    #[test]
    fn claim_all_sums_each_asset() {
        let mut f = Fixture::new();
        let a = f.mint(f.alice);
        let b = f.mint(f.alice);
        let c = f.mint(f.alice);
        f.mint(f.bob);

        let batch = f
            .distributor
            .claim_all(&mut f.ledger, &f.registry, &f.alice, START + MONTH)
            .unwrap();
        assert_eq!(batch.assets_claimed, 3);
        assert_eq!(batch.amount, 3 * one_month());
        for id in [a, b, c] {
            assert_eq!(f.ledger.anchor_of(id, START).unwrap(), START + MONTH);
        }
        assert_eq!(f.distributor.total_claimed, 3 * one_month());
    }

    #[test]
    fn claim_all_skips_freshly_claimed_assets() {
        let mut f = Fixture::new();
        let a = f.mint(f.alice);
        let b = f.mint(f.alice);
        let now = START + 2 * MONTH;

        let single = f.claim(f.alice, a, now).unwrap();
        assert_eq!(single.months, 2);

        let batch = f
            .distributor
            .claim_all(&mut f.ledger, &f.registry, &f.alice, now)
            .unwrap();
        assert_eq!(batch.assets_claimed, 1);
        assert_eq!(batch.amount, f.distributor.payable_for(2).unwrap());
        assert_eq!(f.ledger.anchor_of(b, START).unwrap(), now);
    }

    #[test]
    fn claim_all_rejects_when_nothing_to_transfer() {
        let mut f = Fixture::new();
        f.mint(f.alice);
        assert!(matches!(
            f.distributor
                .claim_all(&mut f.ledger, &f.registry, &f.alice, START + 10),
            Err(RewardsError::NoClaimableRewards)
        ));
        assert!(matches!(
            f.distributor
                .claim_all(&mut f.ledger, &f.registry, &f.bob, START + MONTH),
            Err(RewardsError::NoClaimableRewards)
        ));
    }

    #[test]
    fn only_owner_sets_up_the_bound_registry() {
        let f = Fixture::new();
        let registry = f.distributor.registry;
        let ledger = f.distributor.vesting_ledger;
        assert!(matches!(
            f.distributor.authorize_registry(&f.alice, &registry, &ledger),
            Err(RewardsError::PermissionDenied)
        ));
        assert!(matches!(
            f.distributor
                .authorize_registry(&f.admin, &Pubkey::new_unique(), &ledger),
            Err(RewardsError::RegistryMismatch)
        ));
        assert!(matches!(
            f.distributor
                .authorize_registry(&f.admin, &registry, &Pubkey::new_unique()),
            Err(RewardsError::LedgerMismatch)
        ));
        assert!(f.distributor.authorize_registry(&f.admin, &registry, &ledger).is_ok());
    }
}
