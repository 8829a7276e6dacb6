use crate::error::DbError;
use async_trait::async_trait;
use core_types::{MoonMission, NewAccount, PasswordVerifier};

/// The query and execute primitives the console is built on.
///
/// Write operations report the number of affected rows and leave it to the
/// caller to decide what zero means.
#[async_trait]
pub trait MissionStore: Send + Sync {
    /// Stored passwords of every account whose login handle is exactly `name`.
    async fn find_passwords_for(&self, name: &str) -> Result<Vec<String>, DbError>;

    /// All missions, ordered by launch date ascending.
    async fn list_missions(&self) -> Result<Vec<MoonMission>, DbError>;

    async fn find_mission(&self, mission_id: i64) -> Result<Option<MoonMission>, DbError>;

    /// Number of missions launched in the given calendar year.
    async fn count_missions_in_year(&self, year: i32) -> Result<i64, DbError>;

    async fn create_account(&self, account: &NewAccount) -> Result<u64, DbError>;

    async fn update_password(&self, user_id: i64, password: &str) -> Result<u64, DbError>;

    async fn delete_account(&self, user_id: i64) -> Result<u64, DbError>;

    /// Returns true iff at least one account matches both `username` and
    /// `password` exactly.
    ///
    /// A database failure is reported as a non-match, never as an error. The
    /// failure is still logged at error level.
    async fn check_credentials(
        &self,
        username: &str,
        password: &str,
        verifier: &dyn PasswordVerifier,
    ) -> bool {
        match self.find_passwords_for(username).await {
            Ok(stored) => stored.iter().any(|s| verifier.verify(password, s)),
            Err(e) => {
                tracing::error!(error = %e, "Credential check failed; treating as a mismatch.");
                false
            }
        }
    }
}
