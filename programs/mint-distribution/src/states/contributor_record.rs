use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Per-contributor point ledger, addressed by PDA from the contributor's key
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct ContributorRecord {
    /// The contributor's public key
    pub contributor: Pubkey,
    /// Sum of every amount this contributor declared (in lamports)
    pub points: u64,
    /// Number of accepted contributions
    pub contribution_count: u32,
    /// Timestamp of the latest contribution
    pub last_contribution_timestamp: i64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl ContributorRecord {
    /// Whether the record was created by the current instruction
    pub fn is_new(&self) -> bool {
        self.contribution_count == 0
    }

    /// Credits `amount` points; binds the record to its contributor on first use
    pub fn add_contribution(&mut self, contributor: Pubkey, bump: u8, amount: u64, timestamp: i64) -> Result<()> {
        if self.is_new() {
            self.contributor = contributor;
            self.bump = bump;
        }

        self.points = self.points
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        self.contribution_count = self.contribution_count
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        self.last_contribution_timestamp = timestamp;

        Ok(())
    }
}
