/// Number of characters each name fragment contributes to a login handle.
const FRAGMENT_LEN: usize = 3;

/// Derives the login handle of an account from its first and last name.
///
/// The handle is the first up-to-three characters of the first name followed by
/// the first up-to-three characters of the last name. Shorter names contribute
/// fewer characters. There is no padding and no collision handling, so two
/// accounts can end up with the same handle.
pub fn derive_login_handle(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .take(FRAGMENT_LEN)
        .chain(last_name.chars().take(FRAGMENT_LEN))
        .collect()
}
