use anchor_lang::prelude::*;
use crate::states::DistributionState;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Funds the state account and becomes payout destination C
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Freshly generated state account. A second call against an existing
    /// state reaches the handler and is rejected there. An account owned by
    /// this program that holds anything else (a contributor record, say)
    /// fails deserialization with `AccountDiscriminatorMismatch` instead.
    #[account(
        init_if_needed,
        payer = payer,
        space = DistributionState::DISCRIMINATOR.len() + DistributionState::INIT_SPACE,
    )]
    pub state: Account<'info, DistributionState>,

    /// System program
    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    /// Identity allowed to run the owner-only setters
    pub owner: Pubkey,
    /// Payout destination A
    pub payout_destination_a: Pubkey,
    /// Payout destination B
    pub payout_destination_b: Pubkey,
}

impl<'info> Initialize<'info> {
    pub fn handle(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        msg!("Initializing distribution state: {}", ctx.accounts.state.key());

        let state_key = ctx.accounts.state.key();
        let payer_key = ctx.accounts.payer.key();
        let state = &mut ctx.accounts.state;

        state.initialize(
            params.owner,
            params.payout_destination_a,
            params.payout_destination_b,
            payer_key,
        )?;

        msg!("Owner: {}", state.owner);
        msg!("Payout destination A: {}", state.payout_destination_a);
        msg!("Payout destination B: {}", state.payout_destination_b);
        msg!("Payout destination C: {}", state.payout_destination_c);
        msg!("Shares: {}/{}/{} bps", state.share_a_bps, state.share_b_bps, state.share_c_bps);

        emit!(crate::events::StateInitialized {
            state: state_key,
            owner: state.owner,
            payout_destination_a: state.payout_destination_a,
            payout_destination_b: state.payout_destination_b,
            payout_destination_c: state.payout_destination_c,
            share_a_bps: state.share_a_bps,
            share_b_bps: state.share_b_bps,
            share_c_bps: state.share_c_bps,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
