//! Freight dispatch core.
//!
//! Clients submit orders, administrators bundle pending orders into itineraries
//! bound to a driver and a vehicle. Assignment is gated by license eligibility
//! and cargo compatibility; vehicles carry a rolling inspection score.

pub mod app;
pub mod domain;
pub mod infra;
pub mod util;

pub use app::{AssignError, Dispatch, DispatchError};
