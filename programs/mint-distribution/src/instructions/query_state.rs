use anchor_lang::prelude::*;
use crate::constants::CONTRIBUTOR_RECORD_SEED;
use crate::states::{ContributorRecord, DistributionState};

/// Query instruction to read the distribution state
#[derive(Accounts)]
pub struct QueryState<'info> {
    pub state: Account<'info, DistributionState>,
}

/// Query instruction to read one contributor's points
#[derive(Accounts)]
pub struct QueryContributor<'info> {
    /// CHECK: only used to derive the record address
    pub contributor: UncheckedAccount<'info>,

    #[account(
        seeds = [CONTRIBUTOR_RECORD_SEED, contributor.key().as_ref()],
        bump = contributor_record.bump,
        has_one = contributor
    )]
    pub contributor_record: Account<'info, ContributorRecord>,
}

/// Response structure for state query
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct StateInfo {
    pub owner: Pubkey,
    pub payout_destination_a: Pubkey,
    pub payout_destination_b: Pubkey,
    pub payout_destination_c: Pubkey,
    pub minimum_transfer: u64,
    pub total_points: u64,
    pub share_a_bps: u16,
    pub share_b_bps: u16,
    pub share_c_bps: u16,
}

/// Response structure for contributor query
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ContributorInfo {
    pub contributor: Pubkey,
    pub points: u64,
    pub contribution_count: u32,
    pub last_contribution_timestamp: i64,
}

impl<'info> QueryState<'info> {
    pub fn handle(ctx: Context<QueryState>) -> Result<StateInfo> {
        let state = &ctx.accounts.state;

        let state_info = StateInfo {
            owner: state.owner,
            payout_destination_a: state.payout_destination_a,
            payout_destination_b: state.payout_destination_b,
            payout_destination_c: state.payout_destination_c,
            minimum_transfer: state.minimum_transfer,
            total_points: state.total_points,
            share_a_bps: state.share_a_bps,
            share_b_bps: state.share_b_bps,
            share_c_bps: state.share_c_bps,
        };

        msg!("State info for: {}", state.key());
        msg!("Owner: {}", state_info.owner);
        msg!("Minimum transfer: {} lamports", state_info.minimum_transfer);
        msg!("Total points: {}", state_info.total_points);
        msg!(
            "Shares: {}/{}/{} bps",
            state_info.share_a_bps,
            state_info.share_b_bps,
            state_info.share_c_bps
        );

        Ok(state_info)
    }
}

impl<'info> QueryContributor<'info> {
    pub fn handle(ctx: Context<QueryContributor>) -> Result<ContributorInfo> {
        let record = &ctx.accounts.contributor_record;

        let contributor_info = ContributorInfo {
            contributor: record.contributor,
            points: record.points,
            contribution_count: record.contribution_count,
            last_contribution_timestamp: record.last_contribution_timestamp,
        };

        msg!("Contributor info for: {}", contributor_info.contributor);
        msg!("Points: {}", contributor_info.points);
        msg!("Contribution count: {}", contributor_info.contribution_count);

        Ok(contributor_info)
    }
}
