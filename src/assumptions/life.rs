//! Life expectancy assumptions used to size the projection horizon

use crate::profile::Gender;

/// Default life expectancies by gender, with an extended planning age for
/// households that want to provision all the way to 100.
#[derive(Debug, Clone)]
pub struct LifeExpectancy {
    /// Planning age for female households
    pub female: u8,

    /// Planning age for male households
    pub male: u8,

    /// Planning age when the "plan to 100" option is selected
    pub extended: u8,
}

impl LifeExpectancy {
    /// Population-average defaults (female 86, male 80, extended 100)
    pub fn population_defaults() -> Self {
        Self {
            female: 86,
            male: 80,
            extended: 100,
        }
    }

    /// Resolve the planning age for a household.
    ///
    /// An explicit override always wins, then the extended flag, then the
    /// gender default.
    pub fn resolve(&self, gender: Gender, plan_to_100: bool, override_age: Option<u8>) -> u8 {
        if let Some(age) = override_age {
            return age;
        }
        if plan_to_100 {
            return self.extended;
        }
        match gender {
            Gender::Female => self.female,
            Gender::Male => self.male,
        }
    }
}

impl Default for LifeExpectancy {
    fn default() -> Self {
        Self::population_defaults()
    }
}
