//! Data-driven verification of animal behaviour.
//!
//! A [`Suite`] pairs a [`Fixture`] (how to build the animal under test) with
//! [`Expectations`] (what it should do). The checks themselves are written
//! once, against the capability set, and never per species.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};

use crate::animal::{Animal, Dog, Species};
use crate::error::CapabilityError;
use crate::types::{Breed, Food, Trick};

/// How to build the animal a suite runs against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "species", rename_all = "lowercase")]
pub enum Fixture {
    Generic {
        name: String,
    },
    Cat {
        name: String,
    },
    Dog {
        name: String,
        breed: Breed,
        #[serde(default)]
        tricks: Vec<Trick>,
    },
}

impl Fixture {
    /// Build a fresh animal. Dogs are taught their tricks in listed order.
    pub fn acquire(&self) -> Animal {
        match self {
            Fixture::Generic { name } => Animal::new(name.as_str()),
            Fixture::Cat { name } => Animal::cat(name.as_str()),
            Fixture::Dog { name, breed, tricks } => {
                let mut dog = Dog::new(*breed);
                for trick in tricks {
                    dog.teach_trick(*trick);
                }
                Animal::with_species(name.as_str(), Species::Dog(dog))
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Fixture::Generic { name } | Fixture::Cat { name } | Fixture::Dog { name, .. } => name,
        }
    }

    // One-line summary for reports, e.g. `dog "Max" (labrador; paw)`
    pub fn describe(&self) -> String {
        match self {
            Fixture::Generic { name } => format!("generic \"{}\"", name),
            Fixture::Cat { name } => format!("cat \"{}\"", name),
            Fixture::Dog { name, breed, tricks } if tricks.is_empty() => {
                format!("dog \"{}\" ({})", name, breed.as_str())
            }
            Fixture::Dog { name, breed, tricks } => {
                let tricks: Vec<_> = tricks.iter().map(Trick::as_str).collect();
                format!("dog \"{}\" ({}; {})", name, breed.as_str(), tricks.join(", "))
            }
        }
    }
}

/// Expected behaviour of the animal under test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectations {
    pub sound: String,
    pub favourite_food: Food,
    #[serde(default)]
    pub can_do_tricks: bool,
}

/// A single generic check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Sound,
    FavouriteFood,
    CanDoTricks,
    Zoomies,
}

impl Check {
    /// Checks every suite runs unless it lists its own
    pub const BASE: [Check; 3] = [Check::Sound, Check::FavouriteFood, Check::CanDoTricks];

    pub fn as_str(&self) -> &'static str {
        match self {
            Check::Sound => "sound",
            Check::FavouriteFood => "favourite_food",
            Check::CanDoTricks => "can_do_tricks",
            Check::Zoomies => "zoomies",
        }
    }
}

fn default_checks() -> Vec<Check> {
    Check::BASE.to_vec()
}

/// A named fixture with the expectations it is checked against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    pub name: String,
    pub fixture: Fixture,
    pub expect: Expectations,
    #[serde(default = "default_checks")]
    pub checks: Vec<Check>,
}

impl Suite {
    pub fn new(name: impl Into<String>, fixture: Fixture, expect: Expectations) -> Self {
        Suite {
            name: name.into(),
            fixture,
            expect,
            checks: default_checks(),
        }
    }

    pub fn with_check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed { expected: String, observed: String },
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub check: Check,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    pub suite: String,
    pub fixture: Fixture,
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn failed(&self) -> usize {
        self.cases.iter().filter(|c| !c.outcome.is_passed()).count()
    }
}

/// Results of a whole run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub suites: Vec<SuiteReport>,
    pub passed: usize,
    pub failed: usize,
}

impl Report {
    pub fn new(suites: Vec<SuiteReport>) -> Self {
        let total: usize = suites.iter().map(|s| s.cases.len()).sum();
        let failed: usize = suites.iter().map(SuiteReport::failed).sum();
        Report { suites, passed: total - failed, failed }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

fn compare<T: PartialEq + Display>(expected: T, observed: T) -> Outcome {
    if expected == observed {
        Outcome::Passed
    } else {
        Outcome::Failed {
            expected: expected.to_string(),
            observed: observed.to_string(),
        }
    }
}

/// Compare one observed behaviour of `animal` with `expect`.
///
/// A mismatch is an `Ok(Outcome::Failed)`. An `Err` means the check asked the
/// animal for a capability its species lacks, which is a defect in the suite
/// and not a failed case.
pub fn check(
    animal: &Animal,
    expect: &Expectations,
    check: Check,
) -> Result<Outcome, CapabilityError> {
    let outcome = match check {
        Check::Sound => compare(expect.sound.as_str(), animal.make_sound()?),
        Check::FavouriteFood => {
            compare(expect.favourite_food.as_str(), animal.favourite_food()?.as_str())
        }
        Check::CanDoTricks => compare(expect.can_do_tricks, animal.can_do_tricks()),
        Check::Zoomies => {
            animal.zoom_around()?;
            Outcome::Passed
        }
    };
    Ok(outcome)
}

/// Run every check of a suite against a single fixture instance.
pub fn run_suite(suite: &Suite) -> Result<SuiteReport, CapabilityError> {
    let animal = suite.fixture.acquire();
    debug!(suite = %suite.name, fixture = %suite.fixture.describe(), "fixture acquired");

    let mut cases = Vec::with_capacity(suite.checks.len());
    for &c in &suite.checks {
        let outcome = check(&animal, &suite.expect, c).map_err(|err| {
            error!(
                suite = %suite.name,
                check = c.as_str(),
                %err,
                "suite asked for a missing capability"
            );
            err
        })?;
        trace!(
            suite = %suite.name,
            check = c.as_str(),
            passed = outcome.is_passed(),
            "case finished"
        );
        cases.push(CaseReport { check: c, outcome });
    }

    drop(animal);
    debug!(suite = %suite.name, "fixture released");

    Ok(SuiteReport {
        suite: suite.name.clone(),
        fixture: suite.fixture.clone(),
        cases,
    })
}

pub fn run_all(suites: &[Suite]) -> Result<Report, CapabilityError> {
    let reports = suites.iter().map(run_suite).collect::<Result<Vec<_>, _>>()?;
    let report = Report::new(reports);
    debug!(passed = report.passed, failed = report.failed, "run finished");
    Ok(report)
}

/// The suites run when no suite files are given
pub fn builtin_suites() -> Vec<Suite> {
    vec![
        Suite::new(
            "TestCat",
            Fixture::Cat { name: "Micka".to_string() },
            Expectations {
                sound: crate::animal::CAT_SOUND.to_string(),
                favourite_food: Food::Fish,
                can_do_tricks: false,
            },
        ),
        Suite::new(
            "TestDog",
            Fixture::Dog {
                name: "Max".to_string(),
                breed: Breed::Labrador,
                tricks: vec![Trick::ShakePaw],
            },
            Expectations {
                sound: crate::animal::DOG_SOUND.to_string(),
                favourite_food: Food::Bone,
                can_do_tricks: true,
            },
        )
        .with_check(Check::Zoomies),
    ]
}
