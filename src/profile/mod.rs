//! Household profile types and input collectors

mod data;
pub mod interview;
mod loader;

pub use data::{
    Gender, IncomeBracket, MonthlyExpenses, PensionInput, Profile, ProfileError,
    MAX_HORIZON_YEARS,
};
pub use loader::{load_profiles, load_profiles_from_reader};
