//! # Mission Control Console
//!
//! The interactive half of the application: the login gate, the main menu and
//! the command handlers behind it. Everything here talks to the database only
//! through [`database::MissionStore`] and to the user only through a
//! [`Terminal`], so a whole session can be driven from byte buffers.

use core_types::PasswordVerifier;
use database::MissionStore;
use std::io::{BufRead, Write};

pub mod auth;
pub mod error;
pub mod handlers;
pub mod menu;
pub mod session;
pub mod terminal;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::{authenticate, AuthOutcome};
pub use error::ConsoleError;
pub use menu::{run_menu, Command};
pub use session::Session;
pub use terminal::{stdio, StdTerminal, Terminal};

/// Runs one interactive session: the login loop, then the main menu.
///
/// Returns the login outcome. The menu only runs after a successful login.
pub async fn run_session<S, R, W, E>(
    store: &S,
    verifier: &dyn PasswordVerifier,
    term: &mut Terminal<R, W, E>,
) -> Result<AuthOutcome, ConsoleError>
where
    S: MissionStore + ?Sized,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut session = Session::new();
    let outcome = authenticate(store, verifier, &mut session, term).await?;
    if outcome == AuthOutcome::Authenticated {
        run_menu(store, &session, term).await?;
    }
    Ok(outcome)
}
