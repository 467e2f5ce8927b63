use serde::{Deserialize, Serialize};

/// Favourite food enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Food {
    Fish,
    Bone,
}

impl Food {
    pub fn as_str(&self) -> &'static str {
        match self {
            Food::Fish => "fish",
            Food::Bone => "bone",
        }
    }
}

/// Dog breed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breed {
    Labrador,
    Beagle,
    Poodle,
}

impl Breed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Breed::Labrador => "labrador",
            Breed::Beagle => "beagle",
            Breed::Poodle => "poodle",
        }
    }
}

/// Trick enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trick {
    #[serde(rename = "paw")]
    ShakePaw,
    #[serde(rename = "roll")]
    RollOver,
    #[serde(rename = "sit")]
    Sit,
}

impl Trick {
    pub const ALL: [Trick; 3] = [Trick::ShakePaw, Trick::RollOver, Trick::Sit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Trick::ShakePaw => "paw",
            Trick::RollOver => "roll",
            Trick::Sit => "sit",
        }
    }
}

/// Species tag without any per-animal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeciesKind {
    Generic,
    Cat,
    Dog,
}

impl SpeciesKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeciesKind::Generic => "generic",
            SpeciesKind::Cat => "cat",
            SpeciesKind::Dog => "dog",
        }
    }
}

/// Operations that some species lack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    MakeSound,
    FavouriteFood,
    TeachTrick,
    ZoomAround,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::MakeSound => "make_sound",
            Capability::FavouriteFood => "favourite_food",
            Capability::TeachTrick => "teach_trick",
            Capability::ZoomAround => "zoom_around",
        }
    }
}
