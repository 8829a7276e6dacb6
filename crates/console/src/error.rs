use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("The input stream was closed.")]
    InputClosed,

    #[error("The menu requires a logged-in session.")]
    NotAuthenticated,
}
