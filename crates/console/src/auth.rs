use crate::error::ConsoleError;
use crate::session::Session;
use crate::terminal::Terminal;
use core_types::PasswordVerifier;
use database::MissionStore;
use std::io::{BufRead, Write};

/// How the login loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated,
    Aborted,
}

/// Prompts for credentials until they match an account or the user gives up.
///
/// There is no retry limit. On success the session is marked as logged in.
pub async fn authenticate<S, R, W, E>(
    store: &S,
    verifier: &dyn PasswordVerifier,
    session: &mut Session,
    term: &mut Terminal<R, W, E>,
) -> Result<AuthOutcome, ConsoleError>
where
    S: MissionStore + ?Sized,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut attempts: u32 = 0;
    loop {
        let username = term.prompt("Username: ")?;
        let password = term.prompt("Password: ")?;
        attempts += 1;

        if store.check_credentials(&username, &password, verifier).await {
            tracing::info!(username = %username, attempts, "Login succeeded.");
            session.mark_logged_in();
            return Ok(AuthOutcome::Authenticated);
        }

        tracing::warn!(attempts, "Login failed.");
        term.say("Invalid username or password")?;
        let choice = term.prompt("Enter 0 to exit or any key to try again: ")?;
        if choice.trim() == "0" {
            tracing::info!(attempts, "Login aborted.");
            return Ok(AuthOutcome::Aborted);
        }
    }
}
