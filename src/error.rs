use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no deployment mode selected")]
    NoModeSelected,

    #[error("compose input is required")]
    ComposeRequired,

    #[error("invalid KEY=VALUE pair: {0}")]
    InvalidPair(String),

    #[error("unknown secret field: {0}")]
    UnknownField(String),

    #[error("invalid mode name: {0}")]
    InvalidMode(String),

    #[error("{action} request already in flight")]
    RequestInFlight { action: &'static str },

    #[error("{}", .0.join("\n"))]
    Backend(Vec<String>),

    #[error("apply was rejected by the server")]
    ApplyRejected,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid server url: {0}")]
    InvalidUrl(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("prompt error: {0}")]
    Prompt(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Local validation failures: blocked before any network request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::NoModeSelected
                | Error::ComposeRequired
                | Error::InvalidPair(_)
                | Error::UnknownField(_)
        )
    }

    /// Transport-level failures (the request never produced a usable body).
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
