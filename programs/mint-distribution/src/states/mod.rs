pub mod distribution_state;
pub mod contributor_record;

pub use distribution_state::*;
pub use contributor_record::*;
