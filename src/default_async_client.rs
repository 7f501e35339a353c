// Copyright (c) 2024-2025 Dropbox, Inc.

//! The default async HTTP client.
//!
//! Use this client if you're not particularly picky about implementation details, as the specific
//! implementation is not exposed, and may be changed in the future.
//!
//! If you have a need for a specific HTTP client implementation, or your program is already using
//! some HTTP client crate, you probably want to have this Dropbox SDK crate use it as well. To do
//! that, you should implement the traits in `crate::async_client_trait` for it and use it
//! instead.
//!
//! This code (and its dependencies) are only built if you use the `default_async_client` Cargo
//! feature.

use std::future::{Future, ready};
use std::str::FromStr;
use bytes::Bytes;
use futures::{FutureExt, TryFutureExt, TryStreamExt};
use crate::async_client_trait::{AppAuthClient, HttpRequestResultRaw, NoauthClient, TeamAuthClient, UserAuthClient};
use crate::client_trait_common::{HttpRequest, TeamSelect};
use crate::config::{AppKey, Config};
use crate::default_client_common::{impl_config_methods, impl_http_client};

/// Default HTTP client using User authorization.
#[derive(Debug)]
pub struct UserAuthDefaultClient {
    inner: ReqwestClient,
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
            inner: Default::default(),
            config,
        }
    }

    impl_config_methods!(self);
}

impl_http_client!(async UserAuthDefaultClient, ReqwestRequest);
impl UserAuthClient for UserAuthDefaultClient {}

/// Default HTTP client using Team authorization.
#[derive(Debug)]
pub struct TeamAuthDefaultClient {
    inner: ReqwestClient,
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
            inner: Default::default(),
            config,
        }
    }

    /// Select a user or team context to operate in.
    pub fn select(&mut self, team_select: Option<TeamSelect>) {
        self.config.set_team_select(team_select);
    }

    impl_config_methods!(self);
}

impl_http_client!(async TeamAuthDefaultClient, ReqwestRequest);
impl TeamAuthClient for TeamAuthDefaultClient {}

/// Default HTTP client using App authorization.
#[derive(Debug)]
pub struct AppAuthDefaultClient {
    inner: ReqwestClient,
    config: Config,
}

impl AppAuthDefaultClient {
    /// Create a new client using the given app key and secret.
    pub fn new(app_key: AppKey) -> Self {
        Self {
            inner: Default::default(),
            config: Config::new().with_app_key(app_key),
        }
    }

    impl_config_methods!(self);
}

impl_http_client!(async AppAuthDefaultClient, ReqwestRequest);
impl AppAuthClient for AppAuthDefaultClient {}

/// Default HTTP client for unauthenticated API calls.
#[derive(Debug, Default)]
pub struct NoauthDefaultClient {
    inner: ReqwestClient,
    config: Config,
}

impl NoauthDefaultClient {
    /// Create a new client with the given configuration. Credentials in it are never sent.
    pub fn with_config(config: Config) -> Self {
        Self {
            inner: Default::default(),
            config,
        }
    }

    impl_config_methods!(self);
}

impl_http_client!(async NoauthDefaultClient, ReqwestRequest);
impl NoauthClient for NoauthDefaultClient {}

#[derive(Debug)]
struct ReqwestClient {
    inner: reqwest::Client,
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self {
            inner: reqwest::Client::builder()
                .https_only(true)
                .http2_prior_knowledge()
                .build()
                .unwrap()
        }
    }
}

fn unexpected<T: std::error::Error + Send + Sync>(e: T, msg: &str) -> crate::Error {
    crate::Error::UnexpectedResponse(format!("{msg}: {e}"))
}

impl ReqwestClient {
    fn execute(
        &self,
        request: ReqwestRequest,
        body: Bytes,
    ) -> impl Future<Output = crate::Result<HttpRequestResultRaw>> + Send {
        let mut req = match request.req.build() {
            Ok(req) => req,
            Err(e) => {
                return ready(Err(crate::Error::HttpClient(Box::new(e)))).boxed();
            }
        };
        trace!("request for {}", req.url());
        if !body.is_empty() {
            *req.body_mut() = Some(reqwest::Body::from(body));
        }
        self.inner.execute(req)
            .map_ok_or_else(
                |e| Err(crate::Error::HttpClient(Box::new(e))),
                |resp| {
                    let status = resp.status().as_u16();

                    let result_header = resp
                        .headers()
                        .get("Dropbox-API-Result")
                        .map(|v| v.to_str())
                        .transpose()
                        .map_err(|e| unexpected(e, "invalid Dropbox-API-Result header"))?
                        .map(ToOwned::to_owned);

                    let content_length = resp
                        .headers()
                        .get("Content-Length")
                        .map(|v| {
                            v.to_str()
                                .map_err(|e| unexpected(e, "invalid Content-Length"))
                                .and_then(|s| {
                                    u64::from_str(s)
                                        .map_err(|e| unexpected(e, "invalid Content-Length"))
                                })
                        })
                        .transpose()?;

                    let body = resp.bytes_stream()
                        .map_err(futures::io::Error::other)
                        .into_async_read();

                    Ok(HttpRequestResultRaw {
                        status,
                        result_header,
                        content_length,
                        body: Box::new(body),
                    })
                }
            )
            .boxed()
    }

    fn new_request(&self, url: &str) -> ReqwestRequest {
        ReqwestRequest {
            req: self.inner.post(url),
        }
    }
}

/// This is an implementation detail of the HTTP client.
pub struct ReqwestRequest {
    req: reqwest::RequestBuilder,
}

impl HttpRequest for ReqwestRequest {
    fn set_header(mut self, name: &str, value: &str) -> Self {
        self.req = self.req.header(name, value);
        self
    }
}
