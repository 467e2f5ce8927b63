//! A tiny animal taxonomy and a harness that verifies it.
//!
//! [`Animal`] is a closed sum over species; each capability is one exhaustive
//! match. [`harness`] checks animals against expectations declared as data.

pub mod animal;
pub mod error;
pub mod harness;
pub mod output;
pub mod suites;
pub mod types;

pub use animal::{Animal, Dog, Species};
pub use error::CapabilityError;
pub use harness::{Check, Expectations, Fixture, Outcome, Report, Suite};
pub use types::{Breed, Capability, Food, SpeciesKind, Trick};
