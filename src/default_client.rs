// Copyright (c) 2020-2025 Dropbox, Inc.

//! The default HTTP client.
//!
//! Use this client if you're not particularly picky about implementation details, as the specific
//! implementation is not exposed, and may be changed in the future.
//!
//! If you have a need for a specific HTTP client implementation, or your program is already using
//! some HTTP client crate, you probably want to have this Dropbox SDK crate use it as well. To do
//! that, you should implement the traits in `crate::client_trait` for it and use it instead.
//!
//! This code (and its dependencies) are only built if you use the `default_client` Cargo feature.

use std::str::FromStr;
use crate::Error;
use crate::client_trait::{AppAuthClient, HttpRequestResultRaw, NoauthClient, TeamAuthClient, UserAuthClient};
use crate::client_trait_common::{HttpRequest, TeamSelect};
use crate::config::{AppKey, Config};
use crate::default_client_common::{impl_config_methods, impl_http_client};

/// Default HTTP client using User authorization.
#[derive(Debug)]
pub struct UserAuthDefaultClient {
    inner: UreqClient,
    config: Config,
}

impl UserAuthDefaultClient {
    /// Create a new client using the given OAuth2 access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_config(Config::new().with_token(token))
    }

    /// Create a new client from a complete configuration. It should include a token.
    pub fn with_config(config: Config) -> Self {
        Self {
            inner: UreqClient::default(),
            config,
        }
    }

    impl_config_methods!(self);
}

impl_http_client!(sync UserAuthDefaultClient, UreqRequest);
impl UserAuthClient for UserAuthDefaultClient {}

/// Default HTTP client using Team authorization.
#[derive(Debug)]
pub struct TeamAuthDefaultClient {
    inner: UreqClient,
    config: Config,
}

impl TeamAuthDefaultClient {
    /// Create a new client using the given OAuth2 token, with no user/admin context selected.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_config(Config::new().with_token(token))
    }

    /// Create a new client from a complete configuration. It should include a token.
    pub fn with_config(config: Config) -> Self {
        Self {
            inner: UreqClient::default(),
            config,
        }
    }

    /// Select a user or team context to operate in.
    pub fn select(&mut self, team_select: Option<TeamSelect>) {
        self.config.set_team_select(team_select);
    }

    impl_config_methods!(self);
}

impl_http_client!(sync TeamAuthDefaultClient, UreqRequest);
impl TeamAuthClient for TeamAuthDefaultClient {}

/// Default HTTP client using App authorization.
#[derive(Debug)]
pub struct AppAuthDefaultClient {
    inner: UreqClient,
    config: Config,
}

impl AppAuthDefaultClient {
    /// Create a new client using the given app key and secret.
    pub fn new(app_key: AppKey) -> Self {
        Self {
            inner: UreqClient::default(),
            config: Config::new().with_app_key(app_key),
        }
    }

    impl_config_methods!(self);
}

impl_http_client!(sync AppAuthDefaultClient, UreqRequest);
impl AppAuthClient for AppAuthDefaultClient {}

/// Default HTTP client for unauthenticated API calls.
#[derive(Debug, Default)]
pub struct NoauthDefaultClient {
    inner: UreqClient,
    config: Config,
}

impl NoauthDefaultClient {
    /// Create a new client with the given configuration. Credentials in it are never sent.
    pub fn with_config(config: Config) -> Self {
        Self {
            inner: UreqClient::default(),
            config,
        }
    }

    impl_config_methods!(self);
}

impl_http_client!(sync NoauthDefaultClient, UreqRequest);
impl NoauthClient for NoauthDefaultClient {}

#[derive(Debug)]
struct UreqClient {
    agent: ureq::Agent,
}

impl Default for UreqClient {
    fn default() -> Self {
        Self {
            // Error statuses are classified by the caller, so they must come back as responses.
            agent: ureq::Agent::config_builder()
                .http_status_as_error(false)
                .build()
                .into(),
        }
    }
}

impl UreqClient {
    fn execute(&self, request: UreqRequest, body: &[u8]) -> crate::Result<HttpRequestResultRaw> {
        let resp = if body.is_empty() {
            request.req.send_empty()
        } else {
            request.req.send(body)
        }.map_err(|e| RequestError { inner: e })?;

        let status = resp.status().as_u16();

        let result_header = resp.headers()
            .get("Dropbox-API-Result")
            .map(|v| {
                v.to_str()
                    .map(String::from)
                    .map_err(|e| Error::UnexpectedResponse(
                        format!("invalid Dropbox-API-Result header: {e}")))
            })
            .transpose()?;

        let content_length = resp.headers()
            .get("Content-Length")
            .map(|v| {
                v.to_str()
                    .ok()
                    .and_then(|s| u64::from_str(s).ok())
                    .ok_or_else(|| Error::UnexpectedResponse(
                        format!("invalid Content-Length {v:?}")))
            })
            .transpose()?;

        Ok(HttpRequestResultRaw {
            status,
            result_header,
            content_length,
            body: Box::new(resp.into_body().into_reader()),
        })
    }

    fn new_request(&self, url: &str) -> UreqRequest {
        UreqRequest {
            req: self.agent.post(url),
        }
    }
}

/// This is an implementation detail of the HTTP client.
pub struct UreqRequest {
    req: ureq::RequestBuilder<ureq::typestate::WithBody>,
}

impl HttpRequest for UreqRequest {
    fn set_header(mut self, name: &str, value: &str) -> Self {
        self.req = self.req.header(name, value);
        self
    }
}

/// Errors from the HTTP client encountered in the course of making a request.
#[derive(thiserror::Error, Debug)]
pub enum DefaultClientError {
    /// The HTTP client encountered some I/O error.
    #[error("I/O error: {0}")]
    #[allow(clippy::upper_case_acronyms)]
    IO(#[from] std::io::Error),

    /// Some other error from the HTTP client implementation.
    #[error(transparent)]
    Request(#[from] RequestError),
}

macro_rules! wrap_error {
    ($e:ty) => {
        impl From<$e> for crate::Error {
            fn from(e: $e) -> Self {
                Self::HttpClient(Box::new(DefaultClientError::from(e)))
            }
        }
    }
}

wrap_error!(std::io::Error);
wrap_error!(RequestError);

/// Something went wrong making the request, or the server returned a response we didn't expect.
/// Use the `Display` or `Debug` impls to see more details.
/// Note that this type is intentionally vague about the details beyond these string
/// representations, to allow implementation changes in the future.
pub struct RequestError {
    inner: ureq::Error,
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <ureq::Error as std::fmt::Display>::fmt(&self.inner, f)
    }
}

impl std::fmt::Debug for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <ureq::Error as std::fmt::Debug>::fmt(&self.inner, f)
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}
