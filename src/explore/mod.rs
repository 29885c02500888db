//! Exploration of the space of deals.
//!
//! The arena answers "what happens with this deal"; this module decides
//! which deals to ask about and reports the records found so far:
//!
//! - **Exhaustive**: every distinct deal once, via `next_permutation`
//! - **Random**: seeded shuffles, reproducible from the reported seed

pub mod config;
pub mod driver;
pub mod permutation;

pub use config::{ExploreConfig, ExploreMode};
pub use driver::Explorer;
pub use permutation::next_permutation;
