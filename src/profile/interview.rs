//! Interactive prompt-based input collector
//!
//! Walks the planner through the same form the projection contract expects:
//! demographics, expense level, pension entry, reserve and balance-sheet
//! figures. Reads from any `BufRead` so the flow is unit-testable. Blank
//! answers accept the suggested default shown in the prompt.

use std::error::Error;
use std::io::{BufRead, Write};

use super::{Gender, IncomeBracket, MonthlyExpenses, PensionInput, Profile};
use crate::assumptions::Assumptions;

fn read_line<R: BufRead>(input: &mut R) -> Result<String, Box<dyn Error>> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err("unexpected end of input".into());
    }
    Ok(line.trim().to_string())
}

fn prompt_parsed<R, W, T>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: T,
) -> Result<T, Box<dyn Error>>
where
    R: BufRead,
    W: Write,
    T: std::str::FromStr + std::fmt::Display + Copy,
    T::Err: std::fmt::Display,
{
    write!(output, "{} [{}]: ", prompt, default)?;
    output.flush()?;
    let answer = read_line(input)?;
    if answer.is_empty() {
        return Ok(default);
    }
    answer
        .parse::<T>()
        .map_err(|e| format!("invalid value {:?}: {}", answer, e).into())
}

fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: bool,
) -> Result<bool, Box<dyn Error>> {
    let hint = if default { "Y/n" } else { "y/N" };
    write!(output, "{} [{}]: ", prompt, hint)?;
    output.flush()?;
    let answer = read_line(input)?.to_lowercase();
    match answer.as_str() {
        "" => Ok(default),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(format!("expected y or n, got {:?}", other).into()),
    }
}

/// Run the full interview and return a validated profile
pub fn collect_profile<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    assumptions: &Assumptions,
) -> Result<Profile, Box<dyn Error>> {
    writeln!(output, "Retirement funding interview")?;
    writeln!(output, "{}", "-".repeat(40))?;

    write!(output, "Gender (m/f) [f]: ")?;
    output.flush()?;
    let gender = match read_line(input)?.to_lowercase().as_str() {
        "" | "f" | "female" => Gender::Female,
        "m" | "male" => Gender::Male,
        other => return Err(format!("expected m or f, got {:?}", other).into()),
    };

    let plan_to_100 = prompt_yes_no(input, output, "Provision all the way to age 100?", false)?;
    let default_expectancy = assumptions.life.resolve(gender, plan_to_100, None);
    writeln!(output, "Planning age: {}", default_expectancy)?;

    let current_age: u8 = prompt_parsed(input, output, "Current age", 30)?;
    let retirement_age: u8 = prompt_parsed(input, output, "Retirement age", 65)?;

    write!(output, "Income bracket (1/3/5) [3]: ")?;
    output.flush()?;
    let bracket = match read_line(input)?.as_str() {
        "" | "3" => IncomeBracket::Third,
        "1" => IncomeBracket::First,
        "5" => IncomeBracket::Fifth,
        other => return Err(format!("expected 1, 3 or 5, got {:?}", other).into()),
    };
    let suggested = assumptions.expense.default_categories(bracket);
    let split = assumptions.expense.split();
    writeln!(
        output,
        "Suggested monthly expense for {}: {:.0} (food {:.0}%, housing {:.0}%, medical {:.0}%, leisure {:.0}%)",
        bracket.as_str(),
        suggested.total(),
        split.food * 100.0,
        split.housing * 100.0,
        split.medical * 100.0,
        split.leisure * 100.0,
    )?;

    let expenses = MonthlyExpenses {
        food: prompt_parsed(input, output, "Monthly food expense", suggested.food)?,
        housing: prompt_parsed(input, output, "Monthly housing expense", suggested.housing)?,
        medical: prompt_parsed(input, output, "Monthly medical expense", suggested.medical)?,
        leisure: prompt_parsed(input, output, "Monthly leisure expense", suggested.leisure)?,
    };

    let direct_pension = prompt_yes_no(input, output, "Enter pension amount directly?", true)?;
    let pension = if direct_pension {
        let monthly = prompt_parsed(input, output, "Monthly pension amount", 1_000_000.0)?;
        PensionInput::DirectMonthly(monthly)
    } else {
        let level = prompt_parsed(input, output, "Annual income level", 30_000_000.0)?;
        let derived = PensionInput::DerivedFromIncome {
            annual_income_level: level,
        };
        writeln!(
            output,
            "Estimated monthly pension: {:.0}",
            derived.monthly_amount()
        )?;
        derived
    };

    let reserve_fund = prompt_parsed(
        input,
        output,
        "Reserve fund for medical and long-term care",
        30_000_000.0,
    )?;
    let inflation_pct: f64 = prompt_parsed(input, output, "Annual inflation (%)", 2.4)?;
    let assets = prompt_parsed(input, output, "Current assets", 0.0)?;
    let debt = prompt_parsed(input, output, "Current debt", 0.0)?;
    let loan_pct: f64 = prompt_parsed(input, output, "Loan interest rate (%)", 0.0)?;
    let repayment_term_years: u32 =
        prompt_parsed(input, output, "Repayment term (years)", 0)?;

    let profile = Profile {
        profile_id: 0,
        gender,
        current_age,
        retirement_age,
        plan_to_100,
        life_expectancy_override: None,
        bracket,
        expenses,
        pension,
        reserve_fund,
        inflation_rate: inflation_pct / 100.0,
        assets,
        debt,
        loan_interest_rate: loan_pct / 100.0,
        repayment_term_years,
    };

    profile.validate(&assumptions.life)?;
    Ok(profile)
}
