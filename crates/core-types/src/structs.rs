use crate::handle::derive_login_handle;
use chrono::NaiveDate;
use sqlx::FromRow;

/// A row of the read-only `moon_mission` reference table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MoonMission {
    pub mission_id: i64,
    pub spacecraft: String,
    pub launch_date: NaiveDate,
    pub operator: String,
    pub mission_type: String,
    pub outcome: String,
}

/// A row of the `account` table.
///
/// `name` is the login handle, derived once from the first and last name when
/// the account is created. Nothing enforces its uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Account {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub ssn: String,
    pub name: String,
    pub password: String,
}

/// An account that has not been inserted yet. The database assigns `user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub ssn: String,
    pub name: String,
    pub password: String,
}

impl NewAccount {
    /// Builds a new account, deriving the login handle from the name fragments.
    pub fn new(first_name: String, last_name: String, ssn: String, password: String) -> Self {
        let name = derive_login_handle(&first_name, &last_name);
        Self {
            first_name,
            last_name,
            ssn,
            name,
            password,
        }
    }

    /// Attaches a generated id, producing the stored form of this account.
    pub fn into_account(self, user_id: i64) -> Account {
        Account {
            user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            ssn: self.ssn,
            name: self.name,
            password: self.password,
        }
    }
}
