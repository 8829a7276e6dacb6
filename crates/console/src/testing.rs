//! In-memory `MissionStore` and terminal helpers for the console tests.

use crate::terminal::Terminal;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use core_types::{Account, MoonMission, NewAccount};
use database::{DbError, MissionStore};
use std::io::Cursor;
use std::sync::Mutex;

pub(crate) type TestTerminal = Terminal<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

pub(crate) fn terminal(input: &str) -> TestTerminal {
    Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new())
}

/// Splits a finished terminal into (stdout, stderr).
pub(crate) fn output(term: TestTerminal) -> (String, String) {
    let (_, out, err) = term.into_parts();
    (
        String::from_utf8(out).expect("stdout is utf-8"),
        String::from_utf8(err).expect("stderr is utf-8"),
    )
}

fn mission(id: i64, spacecraft: &str, date: (i32, u32, u32), mission_type: &str) -> MoonMission {
    MoonMission {
        mission_id: id,
        spacecraft: spacecraft.to_string(),
        launch_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid date"),
        operator: "NASA".to_string(),
        mission_type: mission_type.to_string(),
        outcome: "Successful".to_string(),
    }
}

/// Missions launched in 1968, 1969, 1969 and 1972, stored out of launch order.
pub(crate) fn fixture_missions() -> Vec<MoonMission> {
    vec![
        mission(17, "Apollo 17", (1972, 12, 7), "Crewed lander"),
        mission(11, "Apollo 11", (1969, 7, 16), "Crewed lander"),
        mission(8, "Apollo 8", (1968, 12, 21), "Crewed orbiter"),
        mission(10, "Apollo 10", (1969, 5, 18), "Crewed orbiter"),
    ]
}

#[derive(Default)]
struct FakeState {
    missions: Vec<MoonMission>,
    accounts: Vec<Account>,
    next_user_id: i64,
    offline: bool,
}

#[derive(Default)]
pub(crate) struct FakeStore {
    state: Mutex<FakeState>,
}

impl FakeStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_fixtures() -> Self {
        let store = Self::new();
        store.state.lock().unwrap().missions = fixture_missions();
        store
    }

    /// Inserts an account directly and returns its id.
    pub(crate) fn add_account(&self, first: &str, last: &str, password: &str) -> i64 {
        let mut state = self.state.lock().unwrap();
        state.next_user_id += 1;
        let id = state.next_user_id;
        let account = NewAccount::new(
            first.to_string(),
            last.to_string(),
            "000-00-0000".to_string(),
            password.to_string(),
        );
        state.accounts.push(account.into_account(id));
        id
    }

    pub(crate) fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    pub(crate) fn accounts(&self) -> Vec<Account> {
        self.state.lock().unwrap().accounts.clone()
    }

    fn online(&self) -> Result<std::sync::MutexGuard<'_, FakeState>, DbError> {
        let state = self.state.lock().unwrap();
        if state.offline {
            return Err(DbError::QueryError(sqlx::Error::PoolTimedOut));
        }
        Ok(state)
    }
}

#[async_trait]
impl MissionStore for FakeStore {
    async fn find_passwords_for(&self, name: &str) -> Result<Vec<String>, DbError> {
        let state = self.online()?;
        Ok(state
            .accounts
            .iter()
            .filter(|a| a.name == name)
            .map(|a| a.password.clone())
            .collect())
    }

    async fn list_missions(&self) -> Result<Vec<MoonMission>, DbError> {
        let state = self.online()?;
        let mut missions = state.missions.clone();
        missions.sort_by_key(|m| m.launch_date);
        Ok(missions)
    }

    async fn find_mission(&self, mission_id: i64) -> Result<Option<MoonMission>, DbError> {
        let state = self.online()?;
        Ok(state
            .missions
            .iter()
            .find(|m| m.mission_id == mission_id)
            .cloned())
    }

    async fn count_missions_in_year(&self, year: i32) -> Result<i64, DbError> {
        let state = self.online()?;
        Ok(state
            .missions
            .iter()
            .filter(|m| m.launch_date.year() == year)
            .count() as i64)
    }

    async fn create_account(&self, account: &NewAccount) -> Result<u64, DbError> {
        let mut state = self.online()?;
        state.next_user_id += 1;
        let id = state.next_user_id;
        state.accounts.push(account.clone().into_account(id));
        Ok(1)
    }

    async fn update_password(&self, user_id: i64, password: &str) -> Result<u64, DbError> {
        let mut state = self.online()?;
        let mut updated = 0;
        for account in state.accounts.iter_mut().filter(|a| a.user_id == user_id) {
            account.password = password.to_string();
            updated += 1;
        }
        Ok(updated)
    }

    async fn delete_account(&self, user_id: i64) -> Result<u64, DbError> {
        let mut state = self.online()?;
        let before = state.accounts.len();
        state.accounts.retain(|a| a.user_id != user_id);
        Ok((before - state.accounts.len()) as u64)
    }
}
