//! Backend HTTP contract (generate / parse / apply).
//!
//! The generator backend exposes three JSON endpoints. The transport
//! sits behind the [`Backend`] trait so the round-trip logic can be
//! exercised against a stub in tests.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::rt;
use crate::error::{Error, Result};

/// A form option value: checkboxes submit booleans, everything else text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

/// Options submitted with a generate request.
///
/// Named options are flattened next to the nested env override map, as
/// the backend expects.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormOptions {
    #[serde(flatten)]
    pub values: BTreeMap<String, OptionValue>,
    #[serde(rename = "envOverrides")]
    pub env_overrides: BTreeMap<String, String>,
}

/// `POST /api/generate` request body.
#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub modes: Vec<String>,
    pub options: FormOptions,
}

/// `POST /api/generate` response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    /// Compose file text keyed by mode.
    #[serde(default)]
    pub composes: BTreeMap<String, String>,
    /// Generated .env file text.
    #[serde(default)]
    pub env: String,
}

/// `POST /api/parse` request body.
#[derive(Debug, Serialize)]
pub struct ParseRequest {
    pub compose: String,
    pub env: String,
}

/// `POST /api/apply` shares the parse request body.
pub type ApplyRequest = ParseRequest;

/// `POST /api/parse` response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseResponse {
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default, rename = "envVars")]
    pub env_vars: BTreeMap<String, String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// `POST /api/apply` response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplyResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, rename = "envVars")]
    pub env_vars: BTreeMap<String, String>,
    #[serde(default, rename = "suggestedModes")]
    pub suggested_modes: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Generator backend transport.
pub trait Backend {
    fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse>;
    fn parse(&self, req: &ParseRequest) -> Result<ParseResponse>;
    fn apply(&self, req: &ApplyRequest) -> Result<ApplyResponse>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse> {
        (**self).generate(req)
    }

    fn parse(&self, req: &ParseRequest) -> Result<ParseResponse> {
        (**self).parse(req)
    }

    fn apply(&self, req: &ApplyRequest) -> Result<ApplyResponse> {
        (**self).apply(req)
    }
}

/// HTTP transport over reqwest.
pub struct HttpBackend {
    base: reqwest::Url,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Build a transport for the given server base URL.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` for an unparsable base URL.
    pub fn new(base: &str) -> Result<Self> {
        let base = reqwest::Url::parse(base).map_err(|_| Error::InvalidUrl(base.to_string()))?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { base, client })
    }

    fn url(&self, path: &str) -> Result<reqwest::Url> {
        self.base
            .join(path)
            .map_err(|_| Error::InvalidUrl(format!("{}{}", self.base, path)))
    }

    /// POST expecting a well-formed body only on success.
    fn post_strict<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        debug!(%url, "post");
        rt::sync_await(async {
            let resp = self.client.post(url).json(body).send().await?;
            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(Error::Status {
                    status,
                    body: body.trim().to_string(),
                });
            }
            Ok(resp.json::<T>().await?)
        })
    }

    /// POST that decodes the body even on error statuses.
    ///
    /// The parse/apply endpoints report domain failures through an
    /// `errors` list in the body regardless of status code; only an
    /// undecodable body is treated as a transport failure.
    fn post_tolerant<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        debug!(%url, "post");
        rt::sync_await(async {
            let resp = self.client.post(url).json(body).send().await?;
            let status = resp.status();
            let bytes = resp.bytes().await?;
            match serde_json::from_slice::<T>(&bytes) {
                Ok(value) => Ok(value),
                Err(_) if !status.is_success() => Err(Error::Status {
                    status,
                    body: String::from_utf8_lossy(&bytes).trim().to_string(),
                }),
                Err(e) => Err(Error::Json(e)),
            }
        })
    }
}

impl Backend for HttpBackend {
    fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse> {
        self.post_strict("/api/generate", req)
    }

    fn parse(&self, req: &ParseRequest) -> Result<ParseResponse> {
        self.post_tolerant("/api/parse", req)
    }

    fn apply(&self, req: &ApplyRequest) -> Result<ApplyResponse> {
        self.post_tolerant("/api/apply", req)
    }
}
