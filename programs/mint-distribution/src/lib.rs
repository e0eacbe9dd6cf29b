use anchor_lang::prelude::*;

declare_id!("uUFps28eb2Br6L8Yp3M8xZsgocyGBwwLBp39TDE4VfV");

pub mod instructions;
pub mod errors;
pub mod constants;
pub mod math;
pub mod states;
pub mod events;

pub use instructions::*;
pub use events::*;
pub use states::PayoutSlot;

#[program]
pub mod mint_distribution {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        Initialize::handle(ctx, params)
    }

    pub fn contribute(ctx: Context<Contribute>, params: ContributeParams) -> Result<()> {
        Contribute::handle(ctx, params)
    }

    pub fn set_payout_destination_b(ctx: Context<UpdateState>, destination: Pubkey) -> Result<()> {
        UpdateState::set_payout_destination(ctx, PayoutSlot::B, destination)
    }

    pub fn set_payout_destination_c(ctx: Context<UpdateState>, destination: Pubkey) -> Result<()> {
        UpdateState::set_payout_destination(ctx, PayoutSlot::C, destination)
    }

    pub fn set_distribution_shares(
        ctx: Context<UpdateState>,
        params: DistributionSharesParams
    ) -> Result<()> {
        UpdateState::set_distribution_shares(ctx, params)
    }

    pub fn set_minimum_transfer(ctx: Context<UpdateState>, minimum_transfer: u64) -> Result<()> {
        UpdateState::set_minimum_transfer(ctx, minimum_transfer)
    }

    pub fn transfer_ownership(ctx: Context<UpdateState>, new_owner: Pubkey) -> Result<()> {
        UpdateState::transfer_ownership(ctx, new_owner)
    }

    pub fn query_state(ctx: Context<QueryState>) -> Result<StateInfo> {
        QueryState::handle(ctx)
    }

    pub fn query_contributor(ctx: Context<QueryContributor>) -> Result<ContributorInfo> {
        QueryContributor::handle(ctx)
    }
}
