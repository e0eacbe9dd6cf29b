use anchor_lang::prelude::*;
use crate::states::PayoutSlot;

/// Event emitted when a distribution state is initialized
#[event]
pub struct StateInitialized {
    /// The state account address
    pub state: Pubkey,
    /// Owner allowed to run the setters
    pub owner: Pubkey,
    /// Payout destination A
    pub payout_destination_a: Pubkey,
    /// Payout destination B
    pub payout_destination_b: Pubkey,
    /// Payout destination C (the funding signer)
    pub payout_destination_c: Pubkey,
    /// Share numerators in basis points
    pub share_a_bps: u16,
    pub share_b_bps: u16,
    pub share_c_bps: u16,
    /// Timestamp of initialization
    pub timestamp: i64,
}

/// Event emitted for every accepted contribution
#[event]
pub struct ContributionRecorded {
    /// The state account address
    pub state: Pubkey,
    /// Contributor's wallet address
    pub contributor: Pubkey,
    /// Declared contribution amount
    pub amount: u64,
    /// Lamports sent to payout destination A
    pub share_a: u64,
    /// Lamports sent to payout destination B
    pub share_b: u64,
    /// Lamports sent to payout destination C
    pub share_c: u64,
    /// Part of the amount that was not transferred
    pub remainder: u64,
    /// Contributor's points after this contribution
    pub contributor_points: u64,
    /// State total points after this contribution
    pub total_points: u64,
    /// Timestamp of contribution
    pub timestamp: i64,
}

/// Event emitted when the owner repoints a payout destination
#[event]
pub struct PayoutDestinationUpdated {
    pub state: Pubkey,
    pub slot: PayoutSlot,
    pub previous: Pubkey,
    pub current: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when the owner changes the share numerators
#[event]
pub struct DistributionSharesUpdated {
    pub state: Pubkey,
    pub previous_share_a_bps: u16,
    pub previous_share_b_bps: u16,
    pub previous_share_c_bps: u16,
    pub share_a_bps: u16,
    pub share_b_bps: u16,
    pub share_c_bps: u16,
    pub timestamp: i64,
}

/// Event emitted when the owner changes the minimum transfer
#[event]
pub struct MinimumTransferUpdated {
    pub state: Pubkey,
    pub previous: u64,
    pub current: u64,
    pub timestamp: i64,
}

/// Event emitted when ownership changes hands
#[event]
pub struct OwnershipTransferred {
    pub state: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}
