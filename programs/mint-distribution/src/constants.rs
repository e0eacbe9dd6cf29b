// PDA Seeds
pub const CONTRIBUTOR_RECORD_SEED: &[u8] = b"contributor_record";

// Share arithmetic
pub const BPS_DENOMINATOR: u64 = 10_000; // 100%

// Default policy parameters
pub const DEFAULT_SHARE_A_BPS: u16 = 4_500; // 45%
pub const DEFAULT_SHARE_B_BPS: u16 = 4_500; // 45%
pub const DEFAULT_SHARE_C_BPS: u16 = 1_000; // 10%
pub const DEFAULT_MINIMUM_TRANSFER_LAMPORTS: u64 = 0; // no minimum
