use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("State account is already initialized")]
    AlreadyInitialized,
    #[msg("Signer is not the state owner")]
    Unauthorized,
    #[msg("Invalid distribution - share numerators must sum to at most 10000 bps")]
    InvalidDistribution,
    #[msg("Contribution amount is below the minimum transfer")]
    BelowMinimumTransfer,
    #[msg("Payout destination does not match the state account")]
    DestinationMismatch,
    #[msg("Insufficient lamports to cover the contribution")]
    InsufficientFunds,
    #[msg("Arithmetic overflow occurred during calculation")]
    ArithmeticOverflow,
}

/// Custom error number carried by an anchor `Error`
#[cfg(test)]
pub(crate) fn error_code_number(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        anchor_lang::error::Error::ProgramError(e) => panic!("unexpected program error: {:?}", e),
    }
}
