use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::constants::CONTRIBUTOR_RECORD_SEED;
use crate::math::Split;
use crate::states::{ContributorRecord, DistributionState};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ContributeParams {
    /// Declared contribution (in lamports)
    pub amount: u64,
}

#[derive(Accounts)]
pub struct Contribute<'info> {
    /// Pays every share and the rent of a new contributor record
    #[account(mut)]
    pub contributor: Signer<'info>,

    #[account(mut)]
    pub state: Account<'info, DistributionState>,

    #[account(
        init_if_needed,
        payer = contributor,
        space = ContributorRecord::DISCRIMINATOR.len() + ContributorRecord::INIT_SPACE,
        seeds = [CONTRIBUTOR_RECORD_SEED, contributor.key().as_ref()],
        bump
    )]
    pub contributor_record: Account<'info, ContributorRecord>,

    /// CHECK: must equal the destination recorded in state
    #[account(mut, address = state.payout_destination_a @ ErrorCode::DestinationMismatch)]
    pub payout_destination_a: UncheckedAccount<'info>,

    /// CHECK: must equal the destination recorded in state
    #[account(mut, address = state.payout_destination_b @ ErrorCode::DestinationMismatch)]
    pub payout_destination_b: UncheckedAccount<'info>,

    /// CHECK: must equal the destination recorded in state
    #[account(mut, address = state.payout_destination_c @ ErrorCode::DestinationMismatch)]
    pub payout_destination_c: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Contribute<'info> {
    pub fn handle(mut ctx: Context<Contribute>, params: ContributeParams) -> Result<()> {
        msg!("Processing contribution from: {}", ctx.accounts.contributor.key());
        msg!("Amount: {} lamports", params.amount);

        let split = validate_contribution(&ctx, params.amount)?;

        msg!("Shares: {} / {} / {} lamports", split.share_a, split.share_b, split.share_c);

        transfer_shares(&ctx, &split)?;

        let timestamp = Clock::get()?.unix_timestamp;
        record_points(&mut ctx, params.amount, timestamp)?;

        msg!("Contribution completed successfully!");

        let state = &ctx.accounts.state;
        emit!(crate::events::ContributionRecorded {
            state: state.key(),
            contributor: ctx.accounts.contributor.key(),
            amount: params.amount,
            share_a: split.share_a,
            share_b: split.share_b,
            share_c: split.share_c,
            remainder: split.remainder(params.amount)?,
            contributor_points: ctx.accounts.contributor_record.points,
            total_points: state.total_points,
            timestamp,
        });

        Ok(())
    }
}

/// Runs every fallible check before any lamports move
fn validate_contribution(ctx: &Context<Contribute>, amount: u64) -> Result<Split> {
    let state = &ctx.accounts.state;

    state.check_minimum_transfer(amount)?;

    let split = state.split(amount)?;
    state.points_after(amount)?;

    // Whatever stays behind must be zero or rent exempt
    let remaining = ctx.accounts.contributor
        .lamports()
        .checked_sub(split.total()?)
        .ok_or(ErrorCode::InsufficientFunds)?;
    require!(
        remaining == 0 || remaining >= Rent::get()?.minimum_balance(0),
        ErrorCode::InsufficientFunds
    );

    Ok(split)
}

fn transfer_shares(ctx: &Context<Contribute>, split: &Split) -> Result<()> {
    let destinations = [
        (ctx.accounts.payout_destination_a.to_account_info(), split.share_a),
        (ctx.accounts.payout_destination_b.to_account_info(), split.share_b),
        (ctx.accounts.payout_destination_c.to_account_info(), split.share_c),
    ];

    for (destination, lamports) in destinations {
        if lamports == 0 {
            continue;
        }

        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.contributor.to_account_info(),
                    to: destination,
                },
            ),
            lamports,
        )?;
    }

    Ok(())
}

fn record_points(ctx: &mut Context<Contribute>, amount: u64, timestamp: i64) -> Result<()> {
    let contributor = ctx.accounts.contributor.key();
    let bump = ctx.bumps.contributor_record;

    let contributor_record = &mut ctx.accounts.contributor_record;
    contributor_record.add_contribution(contributor, bump, amount, timestamp)?;

    let state = &mut ctx.accounts.state;
    state.add_points(amount)?;

    msg!("Contributor points: {}", contributor_record.points);
    msg!("Total points: {}", state.total_points);

    Ok(())
}
