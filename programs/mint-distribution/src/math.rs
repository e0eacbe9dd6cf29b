use anchor_lang::prelude::*;
use crate::constants::BPS_DENOMINATOR;
use crate::errors::ErrorCode;

/// Lamports owed to each payout destination for a single contribution
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Split {
    /// Amount routed to payout destination A
    pub share_a: u64,
    /// Amount routed to payout destination B
    pub share_b: u64,
    /// Amount routed to payout destination C
    pub share_c: u64,
}

impl Split {
    /// Total debited from the contributor
    pub fn total(&self) -> Result<u64> {
        let total = self.share_a
            .checked_add(self.share_b)
            .and_then(|sum| sum.checked_add(self.share_c))
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(total)
    }

    /// Part of `amount` that is not transferred (numerators below 100% plus floor dust)
    pub fn remainder(&self, amount: u64) -> Result<u64> {
        let remainder = amount
            .checked_sub(self.total()?)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(remainder)
    }
}

/// Rejects numerators whose sum exceeds 10_000 bps
pub fn validate_shares(share_a_bps: u16, share_b_bps: u16, share_c_bps: u16) -> Result<()> {
    let total = share_a_bps as u64 + share_b_bps as u64 + share_c_bps as u64;
    require!(total <= BPS_DENOMINATOR, ErrorCode::InvalidDistribution);
    Ok(())
}

/// floor(amount * numerator_bps / 10_000) with a u128 intermediate
pub fn share_of(amount: u64, numerator_bps: u16) -> Result<u64> {
    let scaled = (amount as u128)
        .checked_mul(numerator_bps as u128)
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    let share = scaled
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    let share = u64::try_from(share).map_err(|_| ErrorCode::ArithmeticOverflow)?;
    Ok(share)
}

/// Three-way split of `amount`. Any remainder is left with the caller.
pub fn split(amount: u64, share_a_bps: u16, share_b_bps: u16, share_c_bps: u16) -> Result<Split> {
    validate_shares(share_a_bps, share_b_bps, share_c_bps)?;

    Ok(Split {
        share_a: share_of(amount, share_a_bps)?,
        share_b: share_of(amount, share_b_bps)?,
        share_c: share_of(amount, share_c_bps)?,
    })
}
