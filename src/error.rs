use thiserror::Error;

use crate::types::{Capability, SpeciesKind};

/// Raised when an animal is asked for something its species cannot do.
///
/// This marks a programming defect (asking the generic base for a sound,
/// teaching a cat a trick). The harness never turns it into a failed case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("{} is not implemented for {} animals", .capability.as_str(), .species.as_str())]
    Unimplemented {
        capability: Capability,
        species: SpeciesKind,
    },
}

impl CapabilityError {
    pub fn unimplemented(capability: Capability, species: SpeciesKind) -> Self {
        CapabilityError::Unimplemented { capability, species }
    }
}
