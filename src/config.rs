// Copyright (c) 2025 Dropbox, Inc.

//! Credentials and per-client settings read by the route invoker.
//!
//! A [`Config`] is read-only while requests are in flight. If several clients or threads share
//! one, build it up front and don't mutate it afterwards.

use std::fmt;
use std::sync::Arc;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use crate::client_trait_common::{Endpoint, TeamSelect};
use crate::route::RouteDescriptor;

/// Builds the full URL for a route from its host class, namespace, and route name.
pub type UrlGenerator = Arc<dyn Fn(Endpoint, &str, &str) -> String + Send + Sync>;

/// Hooks called by the route invoker around every request.
///
/// The default implementation of each hook does nothing.
pub trait Observer: Send + Sync {
    /// Called with the serialized arguments, just before the request is sent.
    fn request(&self, _route: &RouteDescriptor, _params: &str) {}

    /// Called once a response arrives. `result` is the JSON result or error body, when it has been
    /// read; it is `None` for the content stream of a download.
    fn response(&self, _route: &RouteDescriptor, _status: u16, _result: Option<&str>) {}
}

/// The default observer: writes requests and responses to the `log` crate.
#[derive(Debug, Copy, Clone)]
pub struct LogObserver {
    /// Level to log at.
    pub level: log::Level,
}

impl Observer for LogObserver {
    fn request(&self, route: &RouteDescriptor, params: &str) {
        log!(self.level, "{route}: {params}");
    }

    fn response(&self, route: &RouteDescriptor, status: u16, result: Option<&str>) {
        match result {
            Some(body) => log!(self.level, "{route}: HTTP {status}: {body}"),
            None => log!(self.level, "{route}: HTTP {status}"),
        }
    }
}

static DEFAULT_OBSERVER: LogObserver = LogObserver { level: log::Level::Debug };

/// App key and secret, used for routes with App authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct AppKey {
    pub key: String,
    pub secret: String,
}

impl AppKey {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { key: key.into(), secret: secret.into() }
    }

    /// The value of the `Authorization` header for App authentication.
    pub fn authorization_header(&self) -> String {
        format!("Basic {}", BASE64.encode(format!("{}:{}", self.key, self.secret)))
    }
}

impl fmt::Debug for AppKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppKey")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Everything the route invoker needs to know about the caller, besides the HTTP transport.
#[derive(Clone, Default)]
pub struct Config {
    token: Option<String>,
    app_key: Option<AppKey>,
    team_select: Option<TeamSelect>,
    path_root: Option<String>, // a serialized PathRoot enum
    url_generator: Option<UrlGenerator>,
    observer: Option<Arc<dyn Observer>>,
}

static UNCONFIGURED: Config = Config::new();

impl Config {
    /// A configuration with no credentials and default behavior.
    pub const fn new() -> Self {
        Self {
            token: None,
            app_key: None,
            team_select: None,
            path_root: None,
            url_generator: None,
            observer: None,
        }
    }

    /// A shared empty configuration, for clients which don't carry one.
    pub fn unconfigured() -> &'static Config {
        &UNCONFIGURED
    }

    /// Use the given OAuth2 access token for User and Team authentication.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Use the given app key and secret for App authentication.
    pub fn with_app_key(mut self, app_key: AppKey) -> Self {
        self.app_key = Some(app_key);
        self
    }

    /// Act as the given team member or admin. Only meaningful with a team token.
    pub fn with_team_select(mut self, team_select: TeamSelect) -> Self {
        self.team_select = Some(team_select);
        self
    }

    /// Replace the URL generator. The default sends requests to the production Dropbox hosts.
    pub fn with_url_generator(
        mut self,
        generator: impl Fn(Endpoint, &str, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.url_generator = Some(Arc::new(generator));
        self
    }

    /// Replace the observer. The default logs at [`log::Level::Debug`].
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Shorthand for using a [`LogObserver`] at a different level.
    pub fn with_log_level(self, level: log::Level) -> Self {
        self.with_observer(Arc::new(LogObserver { level }))
    }

    /// Select a user or team context to operate in, or clear it.
    pub fn set_team_select(&mut self, team_select: Option<TeamSelect>) {
        self.team_select = team_select;
    }

    /// Set a root which all subsequent paths are evaluated relative to.
    ///
    /// The default, if this function is not called, is to behave as if it was called with
    /// [`PathRoot::Home`](crate::types::common::PathRoot::Home).
    ///
    /// See <https://www.dropbox.com/developers/reference/path-root-header-modes> for more
    /// information.
    #[cfg(feature = "dbx_common")]
    pub fn set_path_root(
        &mut self,
        path_root: &crate::types::common::PathRoot,
    ) -> Result<(), serde_json::Error> {
        // Fails for PathRoot::Other, which has nothing to send.
        self.path_root = Some(serde_json::to_string(path_root)?);
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn app_key(&self) -> Option<&AppKey> {
        self.app_key.as_ref()
    }

    pub fn team_select(&self) -> Option<&TeamSelect> {
        self.team_select.as_ref()
    }

    /// The serialized path root, if one was set.
    pub fn path_root(&self) -> Option<&str> {
        self.path_root.as_deref()
    }

    pub fn observer(&self) -> &dyn Observer {
        self.observer.as_deref().unwrap_or(&DEFAULT_OBSERVER)
    }

    /// The URL for a route, from the configured generator or the default one.
    pub fn url(&self, endpoint: Endpoint, namespace: &str, route: &str) -> String {
        match &self.url_generator {
            Some(generator) => generator(endpoint, namespace, route),
            None => format!("{}{namespace}/{route}", endpoint.url()),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("app_key", &self.app_key)
            .field("team_select", &self.team_select)
            .field("path_root", &self.path_root)
            .field("url_generator", &self.url_generator.as_ref().map(|_| "<custom>"))
            .field("observer", &self.observer.as_ref().map(|_| "<custom>"))
            .finish()
    }
}
