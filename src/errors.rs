use std::fmt;

pub const EXIT_CONFIG: i32 = 3;
pub const EXIT_AUTH: i32 = 4;
pub const EXIT_INPUT: i32 = 5;
pub const EXIT_FETCH: i32 = 6;
pub const EXIT_WRITE: i32 = 7;

/// Terminal failure of an export run.
///
/// Every variant aborts the run. The kind decides the process exit code so
/// an operator can tell the failures apart without parsing the output.
#[derive(Debug)]
pub enum RunError {
    /// Credentials file missing, unparsable or with an empty field.
    Config(String),
    /// Token request failed or returned no access token.
    Auth(String),
    /// Unrecognized URL/URI shape or no playlist ID in the input.
    Input(String),
    /// Transport failure or unusable playlist body.
    Fetch(String),
    /// The output file could not be written.
    Write(String),
}

impl RunError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Config(_) => EXIT_CONFIG,
            RunError::Auth(_) => EXIT_AUTH,
            RunError::Input(_) => EXIT_INPUT,
            RunError::Fetch(_) => EXIT_FETCH,
            RunError::Write(_) => EXIT_WRITE,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RunError::Config(msg)
            | RunError::Auth(msg)
            | RunError::Input(msg)
            | RunError::Fetch(msg)
            | RunError::Write(msg) => msg,
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RunError {}

impl From<reqwest::Error> for RunError {
    fn from(err: reqwest::Error) -> Self {
        RunError::Fetch(format!("There was an error making call request: {}", err))
    }
}
