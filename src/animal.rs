use serde::Serialize;

use crate::error::CapabilityError;
use crate::types::{Breed, Capability, Food, SpeciesKind, Trick};

pub const CAT_SOUND: &str = "mňau";
pub const DOG_SOUND: &str = "haf";
pub const ZOOMIES: &str = "zoom zoom";

/// Dog-only state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dog {
    breed: Breed,
    tricks: Vec<Trick>,
}

impl Dog {
    pub fn new(breed: Breed) -> Self {
        Dog { breed, tricks: Vec::new() }
    }

    pub fn breed(&self) -> Breed {
        self.breed
    }

    // Insertion order, duplicates kept
    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    pub fn teach_trick(&mut self, trick: Trick) {
        self.tricks.push(trick);
    }

    pub fn can_do_tricks(&self) -> bool {
        !self.tricks.is_empty()
    }
}

/// The closed set of variants. `Generic` stands for the bare base animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "species", rename_all = "lowercase")]
pub enum Species {
    Generic,
    Cat,
    Dog(Dog),
}

impl Species {
    pub fn kind(&self) -> SpeciesKind {
        match self {
            Species::Generic => SpeciesKind::Generic,
            Species::Cat => SpeciesKind::Cat,
            Species::Dog(_) => SpeciesKind::Dog,
        }
    }
}

/// A named animal. The name is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Animal {
    name: String,
    #[serde(flatten)]
    species: Species,
}

impl Animal {
    /// Build the bare base animal, which has no sound or food of its own.
    pub fn new(name: impl Into<String>) -> Self {
        Animal { name: name.into(), species: Species::Generic }
    }

    pub fn cat(name: impl Into<String>) -> Self {
        Animal { name: name.into(), species: Species::Cat }
    }

    pub fn dog(name: impl Into<String>, breed: Breed) -> Self {
        Animal { name: name.into(), species: Species::Dog(Dog::new(breed)) }
    }

    pub fn with_species(name: impl Into<String>, species: Species) -> Self {
        Animal { name: name.into(), species }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &Species {
        &self.species
    }

    pub fn kind(&self) -> SpeciesKind {
        self.species.kind()
    }

    pub fn breed(&self) -> Option<Breed> {
        match &self.species {
            Species::Dog(dog) => Some(dog.breed()),
            Species::Generic | Species::Cat => None,
        }
    }

    pub fn tricks(&self) -> &[Trick] {
        match &self.species {
            Species::Dog(dog) => dog.tricks(),
            Species::Generic | Species::Cat => &[],
        }
    }

    pub fn make_sound(&self) -> Result<&'static str, CapabilityError> {
        match &self.species {
            Species::Generic => Err(self.unimplemented(Capability::MakeSound)),
            Species::Cat => Ok(CAT_SOUND),
            Species::Dog(_) => Ok(DOG_SOUND),
        }
    }

    pub fn favourite_food(&self) -> Result<Food, CapabilityError> {
        match &self.species {
            Species::Generic => Err(self.unimplemented(Capability::FavouriteFood)),
            Species::Cat => Ok(Food::Fish),
            Species::Dog(_) => Ok(Food::Bone),
        }
    }

    pub fn can_do_tricks(&self) -> bool {
        match &self.species {
            Species::Generic | Species::Cat => false,
            Species::Dog(dog) => dog.can_do_tricks(),
        }
    }

    /// Append a trick to a dog's repertoire. Other species cannot learn.
    pub fn teach_trick(&mut self, trick: Trick) -> Result<(), CapabilityError> {
        let kind = self.kind();
        match &mut self.species {
            Species::Dog(dog) => {
                dog.teach_trick(trick);
                Ok(())
            }
            Species::Generic | Species::Cat => {
                Err(CapabilityError::unimplemented(Capability::TeachTrick, kind))
            }
        }
    }

    pub fn zoom_around(&self) -> Result<&'static str, CapabilityError> {
        match &self.species {
            Species::Dog(_) => Ok(ZOOMIES),
            Species::Generic | Species::Cat => Err(self.unimplemented(Capability::ZoomAround)),
        }
    }

    fn unimplemented(&self, capability: Capability) -> CapabilityError {
        CapabilityError::unimplemented(capability, self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn micka() -> Animal {
        Animal::cat("Micka")
    }

    #[fixture]
    fn max() -> Animal {
        let mut dog = Animal::dog("Max", Breed::Labrador);
        dog.teach_trick(Trick::ShakePaw).unwrap();
        dog
    }

    #[rstest]
    fn cat_behaviour(micka: Animal) {
        assert_eq!(micka.name(), "Micka");
        assert_eq!(micka.make_sound(), Ok(CAT_SOUND));
        assert_eq!(micka.favourite_food(), Ok(Food::Fish));
        assert!(!micka.can_do_tricks());
    }

    #[rstest]
    fn trained_dog_behaviour(max: Animal) {
        assert_eq!(max.name(), "Max");
        assert_eq!(max.breed(), Some(Breed::Labrador));
        assert_eq!(max.make_sound(), Ok("haf"));
        assert_eq!(max.favourite_food(), Ok(Food::Bone));
        assert!(max.can_do_tricks());
        assert_eq!(max.zoom_around(), Ok("zoom zoom"));
    }

    #[rstest]
    #[case::cat(Animal::cat("Micka"), CAT_SOUND, Food::Fish)]
    #[case::dog(Animal::dog("Max", Breed::Beagle), DOG_SOUND, Food::Bone)]
    fn sound_and_food_per_species(#[case] animal: Animal, #[case] sound: &str, #[case] food: Food) {
        assert_eq!(animal.make_sound(), Ok(sound));
        assert_eq!(animal.favourite_food(), Ok(food));
    }

    #[test]
    fn untrained_dog_cannot_do_tricks() {
        let dog = Animal::dog("Rex", Breed::Poodle);
        assert!(!dog.can_do_tricks());
        assert!(dog.tricks().is_empty());
    }

    #[rstest]
    #[case::make_sound(Capability::MakeSound)]
    #[case::favourite_food(Capability::FavouriteFood)]
    fn generic_animal_has_no_sound_or_food(#[case] capability: Capability) {
        let animal = Animal::new("Nobody");
        let err = match capability {
            Capability::MakeSound => animal.make_sound().unwrap_err(),
            _ => animal.favourite_food().unwrap_err(),
        };
        assert_eq!(err, CapabilityError::unimplemented(capability, SpeciesKind::Generic));
        assert!(!animal.can_do_tricks());
    }

    #[test]
    fn generic_error_message_names_capability() {
        let err = Animal::new("Nobody").make_sound().unwrap_err();
        assert_eq!(err.to_string(), "make_sound is not implemented for generic animals");
    }

    #[rstest]
    fn cats_cannot_learn_or_zoom(mut micka: Animal) {
        assert_eq!(
            micka.teach_trick(Trick::Sit),
            Err(CapabilityError::unimplemented(Capability::TeachTrick, SpeciesKind::Cat))
        );
        assert!(micka.zoom_around().is_err());
        assert!(!micka.can_do_tricks());
    }

    #[test]
    fn tricks_keep_insertion_order_and_duplicates() {
        let mut dog = Animal::dog("Max", Breed::Labrador);
        for trick in [Trick::Sit, Trick::ShakePaw, Trick::Sit] {
            dog.teach_trick(trick).unwrap();
        }
        assert_eq!(dog.tricks(), &[Trick::Sit, Trick::ShakePaw, Trick::Sit]);
    }

    #[test]
    fn serializes_with_species_tag() {
        let json = serde_json::to_value(Animal::dog("Max", Breed::Labrador)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Max",
                "species": "dog",
                "breed": "labrador",
                "tricks": []
            })
        );
    }

    fn any_trick() -> impl Strategy<Value = Trick> {
        proptest::sample::select(Trick::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn any_taught_trick_enables_tricks(
            first in any_trick(),
            rest in proptest::collection::vec(any_trick(), 0..8),
        ) {
            let mut dog = Animal::dog("Max", Breed::Labrador);
            dog.teach_trick(first).unwrap();
            prop_assert!(dog.can_do_tricks());
            for trick in &rest {
                dog.teach_trick(*trick).unwrap();
                prop_assert!(dog.can_do_tricks());
            }
            prop_assert_eq!(dog.tricks().len(), rest.len() + 1);
        }

        #[test]
        fn teaching_never_changes_food_or_sound(
            tricks in proptest::collection::vec(any_trick(), 0..8),
        ) {
            let mut dog = Animal::dog("Max", Breed::Beagle);
            for trick in tricks {
                dog.teach_trick(trick).unwrap();
                prop_assert_eq!(dog.favourite_food(), Ok(Food::Bone));
                prop_assert_eq!(dog.make_sound(), Ok(DOG_SOUND));
                prop_assert_eq!(dog.name(), "Max");
            }
        }
    }
}
