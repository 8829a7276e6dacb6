//! The six command handlers behind the main menu.
//!
//! Each handler reads its own input, runs one statement and prints the result.
//! Input format errors and database errors are reported here and never leave
//! the handler; only terminal I/O failures are returned.

use crate::error::ConsoleError;
use crate::terminal::Terminal;
use core_types::{parse_input, NewAccount};
use database::MissionStore;
use std::io::{BufRead, Write};

/// Prints every spacecraft, ordered by launch date.
pub async fn list_missions<S, R, W, E>(
    store: &S,
    term: &mut Terminal<R, W, E>,
) -> Result<(), ConsoleError>
where
    S: MissionStore + ?Sized,
    R: BufRead,
    W: Write,
    E: Write,
{
    match store.list_missions().await {
        Ok(missions) => {
            term.say("\n=== Moon Missions ===")?;
            for mission in &missions {
                term.say(&mission.spacecraft)?;
            }
            tracing::debug!(count = missions.len(), "Listed moon missions.");
        }
        Err(e) => {
            tracing::error!(error = %e, "Listing moon missions failed.");
            term.warn(format_args!("Database error: {e}"))?;
        }
    }
    Ok(())
}

pub async fn get_mission<S, R, W, E>(
    store: &S,
    term: &mut Terminal<R, W, E>,
) -> Result<(), ConsoleError>
where
    S: MissionStore + ?Sized,
    R: BufRead,
    W: Write,
    E: Write,
{
    let raw = term.prompt("Enter mission ID: ")?;
    let Ok(mission_id) = parse_input::<i64>("mission ID", &raw) else {
        return term.say("Invalid mission ID format");
    };

    match store.find_mission(mission_id).await {
        Ok(Some(mission)) => {
            term.say(format_args!("\nMission ID: {}", mission.mission_id))?;
            term.say(format_args!("Spacecraft: {}", mission.spacecraft))?;
            term.say(format_args!("Launch date: {}", mission.launch_date))?;
            term.say(format_args!("Operator: {}", mission.operator))?;
            term.say(format_args!("Mission type: {}", mission.mission_type))?;
            term.say(format_args!("Outcome: {}", mission.outcome))?;
        }
        Ok(None) => term.say(format_args!("No mission found with ID: {mission_id}"))?,
        Err(e) => {
            tracing::error!(error = %e, mission_id, "Mission lookup failed.");
            term.warn(format_args!("Database error: {e}"))?;
        }
    }
    Ok(())
}

pub async fn count_missions_by_year<S, R, W, E>(
    store: &S,
    term: &mut Terminal<R, W, E>,
) -> Result<(), ConsoleError>
where
    S: MissionStore + ?Sized,
    R: BufRead,
    W: Write,
    E: Write,
{
    let raw = term.prompt("Enter year: ")?;
    let Ok(year) = parse_input::<i32>("year", &raw) else {
        return term.say("Invalid year format");
    };

    match store.count_missions_in_year(year).await {
        Ok(count) => term.say(format_args!("Number of missions in {year}: {count}"))?,
        Err(e) => {
            tracing::error!(error = %e, year, "Mission count failed.");
            term.warn(format_args!("Database error: {e}"))?;
        }
    }
    Ok(())
}

/// Reads the four account fields in a fixed order and inserts the account.
pub async fn create_account<S, R, W, E>(
    store: &S,
    term: &mut Terminal<R, W, E>,
) -> Result<(), ConsoleError>
where
    S: MissionStore + ?Sized,
    R: BufRead,
    W: Write,
    E: Write,
{
    let first_name = term.prompt("Enter first name: ")?;
    let last_name = term.prompt("Enter last name: ")?;
    let ssn = term.prompt("Enter SSN: ")?;
    let password = term.prompt("Enter password: ")?;

    let account = NewAccount::new(first_name, last_name, ssn, password);

    match store.create_account(&account).await {
        Ok(rows) if rows > 0 => {
            tracing::info!(name = %account.name, "Account created.");
            term.say("Account created successfully")?;
        }
        Ok(_) => {
            tracing::warn!(name = %account.name, "Account insert affected no rows.");
            term.say("Failed to create account")?;
        }
        Err(e) => {
            tracing::error!(error = %e, "Account creation failed.");
            term.warn(format_args!("Database error: {e}"))?;
        }
    }
    Ok(())
}

/// Reads a user id and a new password, then updates that account.
///
/// The password is read even when the id turns out to be malformed.
pub async fn update_password<S, R, W, E>(
    store: &S,
    term: &mut Terminal<R, W, E>,
) -> Result<(), ConsoleError>
where
    S: MissionStore + ?Sized,
    R: BufRead,
    W: Write,
    E: Write,
{
    let raw = term.prompt("Enter user ID: ")?;
    let new_password = term.prompt("Enter new password: ")?;
    let Ok(user_id) = parse_input::<i64>("user ID", &raw) else {
        return term.say("Invalid user ID format");
    };

    match store.update_password(user_id, &new_password).await {
        Ok(0) => term.say(format_args!("No account found with ID: {user_id}"))?,
        Ok(rows) => {
            tracing::info!(user_id, rows_affected = rows, "Password updated.");
            term.say("Password updated successfully")?;
        }
        Err(e) => {
            tracing::error!(error = %e, user_id, "Password update failed.");
            term.warn(format_args!("Database error: {e}"))?;
        }
    }
    Ok(())
}

pub async fn delete_account<S, R, W, E>(
    store: &S,
    term: &mut Terminal<R, W, E>,
) -> Result<(), ConsoleError>
where
    S: MissionStore + ?Sized,
    R: BufRead,
    W: Write,
    E: Write,
{
    let raw = term.prompt("Enter user ID: ")?;
    let Ok(user_id) = parse_input::<i64>("user ID", &raw) else {
        return term.say("Invalid user ID format");
    };

    match store.delete_account(user_id).await {
        Ok(0) => term.say(format_args!("No account found with ID: {user_id}"))?,
        Ok(rows) => {
            tracing::info!(user_id, rows_affected = rows, "Account deleted.");
            term.say("Account deleted successfully")?;
        }
        Err(e) => {
            tracing::error!(error = %e, user_id, "Account deletion failed.");
            term.warn(format_args!("Database error: {e}"))?;
        }
    }
    Ok(())
}
