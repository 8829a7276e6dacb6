use crate::error::ConsoleError;
use crate::handlers;
use crate::session::Session;
use crate::terminal::Terminal;
use database::MissionStore;
use std::io::{BufRead, Write};
use strum::{EnumIter, IntoEnumIterator};

/// Every entry of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Command {
    ListMissions,
    GetMission,
    CountMissionsByYear,
    CreateAccount,
    UpdatePassword,
    DeleteAccount,
    Exit,
}

impl Command {
    /// The exact input that selects this command.
    pub fn token(&self) -> &'static str {
        match self {
            Command::ListMissions => "1",
            Command::GetMission => "2",
            Command::CountMissionsByYear => "3",
            Command::CreateAccount => "4",
            Command::UpdatePassword => "5",
            Command::DeleteAccount => "6",
            Command::Exit => "0",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::ListMissions => "List moon missions",
            Command::GetMission => "Get a moon mission by mission_id",
            Command::CountMissionsByYear => "Count missions for a given year",
            Command::CreateAccount => "Create an account",
            Command::UpdatePassword => "Update an account password",
            Command::DeleteAccount => "Delete an account",
            Command::Exit => "Exit",
        }
    }

    /// Maps a raw menu line to a command. The match is exact, with no trimming.
    pub fn from_token(input: &str) -> Option<Self> {
        Command::iter().find(|command| command.token() == input)
    }
}

/// Runs the main menu until the user picks `0`.
///
/// Commands run one at a time, each to completion before the menu is shown
/// again.
pub async fn run_menu<S, R, W, E>(
    store: &S,
    session: &Session,
    term: &mut Terminal<R, W, E>,
) -> Result<(), ConsoleError>
where
    S: MissionStore + ?Sized,
    R: BufRead,
    W: Write,
    E: Write,
{
    if !session.is_logged_in() {
        return Err(ConsoleError::NotAuthenticated);
    }

    loop {
        term.say("\n=== MAIN MENU ===")?;
        for command in Command::iter() {
            term.say(format_args!("{}) {}", command.token(), command.label()))?;
        }
        let selection = term.prompt("Choose option: ")?;

        let Some(command) = Command::from_token(&selection) else {
            term.say("Invalid option. Please try again.")?;
            continue;
        };
        tracing::debug!(?command, "Dispatching menu command.");

        match command {
            Command::ListMissions => handlers::list_missions(store, term).await?,
            Command::GetMission => handlers::get_mission(store, term).await?,
            Command::CountMissionsByYear => handlers::count_missions_by_year(store, term).await?,
            Command::CreateAccount => handlers::create_account(store, term).await?,
            Command::UpdatePassword => handlers::update_password(store, term).await?,
            Command::DeleteAccount => handlers::delete_account(store, term).await?,
            Command::Exit => {
                term.say("Exiting...")?;
                return Ok(());
            }
        }
    }
}
