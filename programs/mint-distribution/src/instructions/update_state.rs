use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::events::{
    DistributionSharesUpdated, MinimumTransferUpdated, OwnershipTransferred, PayoutDestinationUpdated,
};
use crate::states::{DistributionState, PayoutSlot};

/// Owner-only mutation of the distribution state
#[derive(Accounts)]
pub struct UpdateState<'info> {
    #[account(mut)]
    pub state: Account<'info, DistributionState>,

    /// Must be the owner recorded in state
    #[account(constraint = state.is_owner(&owner.key()) @ ErrorCode::Unauthorized)]
    pub owner: Signer<'info>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct DistributionSharesParams {
    /// Share of payout destination A in basis points
    pub share_a_bps: u16,
    /// Share of payout destination B in basis points
    pub share_b_bps: u16,
    /// Share of payout destination C in basis points
    pub share_c_bps: u16,
}

impl<'info> UpdateState<'info> {
    pub fn set_payout_destination(ctx: Context<UpdateState>, slot: PayoutSlot, destination: Pubkey) -> Result<()> {
        msg!("Setting payout destination {:?}: {}", slot, destination);

        let state_key = ctx.accounts.state.key();
        let previous = ctx.accounts.state.set_payout_destination(slot, destination);

        emit!(PayoutDestinationUpdated {
            state: state_key,
            slot,
            previous,
            current: destination,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    pub fn set_distribution_shares(ctx: Context<UpdateState>, params: DistributionSharesParams) -> Result<()> {
        msg!(
            "Setting distribution shares: {}/{}/{} bps",
            params.share_a_bps,
            params.share_b_bps,
            params.share_c_bps
        );

        let state_key = ctx.accounts.state.key();
        let state = &mut ctx.accounts.state;
        let (previous_a, previous_b, previous_c) = (state.share_a_bps, state.share_b_bps, state.share_c_bps);

        state.set_distribution_shares(params.share_a_bps, params.share_b_bps, params.share_c_bps)?;

        emit!(DistributionSharesUpdated {
            state: state_key,
            previous_share_a_bps: previous_a,
            previous_share_b_bps: previous_b,
            previous_share_c_bps: previous_c,
            share_a_bps: params.share_a_bps,
            share_b_bps: params.share_b_bps,
            share_c_bps: params.share_c_bps,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    pub fn set_minimum_transfer(ctx: Context<UpdateState>, minimum_transfer: u64) -> Result<()> {
        msg!("Setting minimum transfer: {} lamports", minimum_transfer);

        let state_key = ctx.accounts.state.key();
        let previous = ctx.accounts.state.set_minimum_transfer(minimum_transfer);

        emit!(MinimumTransferUpdated {
            state: state_key,
            previous,
            current: minimum_transfer,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    /// Single-step handoff: the new owner does not confirm, so a wrong key
    /// locks administration for good.
    pub fn transfer_ownership(ctx: Context<UpdateState>, new_owner: Pubkey) -> Result<()> {
        msg!("Transferring ownership to: {}", new_owner);

        let state_key = ctx.accounts.state.key();
        let previous_owner = ctx.accounts.state.transfer_ownership(new_owner);

        emit!(OwnershipTransferred {
            state: state_key,
            previous_owner,
            new_owner,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
