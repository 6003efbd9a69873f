//! Call history model
//!
//! - `call` - the immutable `Call` record and `CallType`
//! - `seed` - the sample history shown by the Calls screen

pub mod call;
pub mod seed;

pub use call::{Call, CallType};
pub use seed::{missed_subset, seed_calls};
