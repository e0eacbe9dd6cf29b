pub mod initialize;
pub use initialize::*;

pub mod contribute;
pub use contribute::*;

pub mod update_state;
pub use update_state::*;

pub mod query_state;
pub use query_state::*;
