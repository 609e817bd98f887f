//! Load household profiles from a cohort CSV

use super::{Gender, IncomeBracket, MonthlyExpenses, PensionInput, Profile};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the cohort file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ProfileID")]
    profile_id: u32,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "CurrentAge")]
    current_age: u8,
    #[serde(rename = "RetirementAge")]
    retirement_age: u8,
    #[serde(rename = "PlanTo100")]
    plan_to_100: u8,
    #[serde(rename = "Bracket")]
    bracket: String,
    #[serde(rename = "FoodMonthly")]
    food: f64,
    #[serde(rename = "HousingMonthly")]
    housing: f64,
    #[serde(rename = "MedicalMonthly")]
    medical: f64,
    #[serde(rename = "LeisureMonthly")]
    leisure: f64,
    #[serde(rename = "PensionMonthly")]
    pension_monthly: Option<f64>,
    #[serde(rename = "AnnualIncomeLevel")]
    annual_income_level: Option<f64>,
    #[serde(rename = "ReserveFund")]
    reserve_fund: f64,
    #[serde(rename = "InflationRate")]
    inflation_rate: f64,
    #[serde(rename = "Assets")]
    assets: f64,
    #[serde(rename = "Debt")]
    debt: f64,
    #[serde(rename = "LoanInterestRate", default)]
    loan_interest_rate: f64,
    #[serde(rename = "RepaymentTermYears", default)]
    repayment_term_years: u32,
}

impl CsvRow {
    fn to_profile(self) -> Result<Profile, Box<dyn Error>> {
        let gender = match self.gender.as_str() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            other => return Err(format!("Unknown Gender: {}", other).into()),
        };

        let bracket = match self.bracket.as_str() {
            "First" => IncomeBracket::First,
            "Third" => IncomeBracket::Third,
            "Fifth" => IncomeBracket::Fifth,
            other => return Err(format!("Unknown Bracket: {}", other).into()),
        };

        // Direct pension entry wins when both columns are populated
        let pension = match (self.pension_monthly, self.annual_income_level) {
            (Some(monthly), _) => PensionInput::DirectMonthly(monthly),
            (None, Some(level)) => PensionInput::DerivedFromIncome {
                annual_income_level: level,
            },
            (None, None) => {
                return Err(format!(
                    "Profile {}: either PensionMonthly or AnnualIncomeLevel is required",
                    self.profile_id
                )
                .into())
            }
        };

        Ok(Profile {
            profile_id: self.profile_id,
            gender,
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            plan_to_100: self.plan_to_100 != 0,
            life_expectancy_override: None,
            bracket,
            expenses: MonthlyExpenses {
                food: self.food,
                housing: self.housing,
                medical: self.medical,
                leisure: self.leisure,
            },
            pension,
            reserve_fund: self.reserve_fund,
            inflation_rate: self.inflation_rate,
            assets: self.assets,
            debt: self.debt,
            loan_interest_rate: self.loan_interest_rate,
            repayment_term_years: self.repayment_term_years,
        })
    }
}

/// Load all profiles from a CSV file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<Profile>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut profiles = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.to_profile()?);
    }

    log::debug!("loaded {} profiles", profiles.len());
    Ok(profiles)
}

/// Load profiles from any reader (e.g., string buffer)
pub fn load_profiles_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<Profile>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut profiles = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.to_profile()?);
    }

    Ok(profiles)
}
