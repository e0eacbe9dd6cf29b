use anchor_lang::prelude::*;
use crate::constants::{
    DEFAULT_MINIMUM_TRANSFER_LAMPORTS, DEFAULT_SHARE_A_BPS, DEFAULT_SHARE_B_BPS, DEFAULT_SHARE_C_BPS,
};
use crate::errors::ErrorCode;
use crate::math::{self, Split};

/// Payout destinations the owner may repoint after initialization
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayoutSlot {
    B,
    C,
}

/// Singleton configuration and running totals for one deployment
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct DistributionState {
    /// Identity allowed to call the owner-only setters
    pub owner: Pubkey,
    /// Receives `share_a_bps` of every contribution
    pub payout_destination_a: Pubkey,
    /// Receives `share_b_bps` of every contribution
    pub payout_destination_b: Pubkey,
    /// Receives `share_c_bps` of every contribution
    pub payout_destination_c: Pubkey,
    /// Smallest accepted contribution (in lamports)
    pub minimum_transfer: u64,
    /// Sum of every accepted contribution amount
    pub total_points: u64,
    /// Share numerators in basis points, sum <= 10_000
    pub share_a_bps: u16,
    pub share_b_bps: u16,
    pub share_c_bps: u16,
    /// Set once by `initialize`
    pub is_initialized: bool,
}

impl DistributionState {
    /// Populates a fresh state with default shares and no minimum
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        payout_destination_a: Pubkey,
        payout_destination_b: Pubkey,
        payout_destination_c: Pubkey,
    ) -> Result<()> {
        require!(!self.is_initialized, ErrorCode::AlreadyInitialized);

        self.owner = owner;
        self.payout_destination_a = payout_destination_a;
        self.payout_destination_b = payout_destination_b;
        self.payout_destination_c = payout_destination_c;
        self.minimum_transfer = DEFAULT_MINIMUM_TRANSFER_LAMPORTS;
        self.total_points = 0;
        self.share_a_bps = DEFAULT_SHARE_A_BPS;
        self.share_b_bps = DEFAULT_SHARE_B_BPS;
        self.share_c_bps = DEFAULT_SHARE_C_BPS;
        self.is_initialized = true;

        Ok(())
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        &self.owner == key
    }

    pub fn check_minimum_transfer(&self, amount: u64) -> Result<()> {
        require!(amount >= self.minimum_transfer, ErrorCode::BelowMinimumTransfer);
        Ok(())
    }

    /// Splits `amount` using the current share numerators
    pub fn split(&self, amount: u64) -> Result<Split> {
        math::split(amount, self.share_a_bps, self.share_b_bps, self.share_c_bps)
    }

    /// Points the total would hold after accepting `amount`
    pub fn points_after(&self, amount: u64) -> Result<u64> {
        let total = self.total_points
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(total)
    }

    pub fn add_points(&mut self, amount: u64) -> Result<()> {
        self.total_points = self.points_after(amount)?;
        Ok(())
    }

    /// Returns the previous destination
    pub fn set_payout_destination(&mut self, slot: PayoutSlot, destination: Pubkey) -> Pubkey {
        let target = match slot {
            PayoutSlot::B => &mut self.payout_destination_b,
            PayoutSlot::C => &mut self.payout_destination_c,
        };
        std::mem::replace(target, destination)
    }

    pub fn set_distribution_shares(&mut self, share_a_bps: u16, share_b_bps: u16, share_c_bps: u16) -> Result<()> {
        math::validate_shares(share_a_bps, share_b_bps, share_c_bps)?;

        self.share_a_bps = share_a_bps;
        self.share_b_bps = share_b_bps;
        self.share_c_bps = share_c_bps;
        Ok(())
    }

    /// Returns the previous minimum
    pub fn set_minimum_transfer(&mut self, minimum_transfer: u64) -> u64 {
        std::mem::replace(&mut self.minimum_transfer, minimum_transfer)
    }

    /// Hands off authority in a single step. There is no accept handshake: an
    /// unreachable `new_owner` permanently locks the setters.
    pub fn transfer_ownership(&mut self, new_owner: Pubkey) -> Pubkey {
        std::mem::replace(&mut self.owner, new_owner)
    }
}
