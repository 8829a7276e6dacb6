/// Authentication state of the current interactive run.
///
/// Only the fact that a login succeeded is kept. Commands that act on an
/// account take the account id as input instead of using the logged-in one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub(crate) fn mark_logged_in(&mut self) {
        self.logged_in = true;
    }
}
