// Copyright (c) 2019-2025 Dropbox, Inc.

//! Helpers for requesting OAuth2 tokens.
//!
//! OAuth2 has a few possible ways to authenticate, and the right choice depends on how your app
//! operates and is deployed.
//!
//! For an overview, see the [Dropbox OAuth Guide].
//!
//! For a description of the API, see the [OAuth2 API documentation].
//!
//! [Dropbox OAuth Guide]: https://developers.dropbox.com/oauth-guide
//! [OAuth2 API documentation]: https://www.dropbox.com/developers/documentation/http/documentation#oauth2-authorize

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use bytes::Bytes;
use ring::rand::{SecureRandom, SystemRandom};
use serde::Deserialize;
use url::form_urlencoded::Serializer as UrlEncoder;
use url::Url;
use crate::async_client_trait::{HttpClient, HttpRequestResultRaw};
use crate::client_helpers::{body_to_string, classify_error, prepare_request, unwrap_async};
use crate::client_trait_common::{Auth, Endpoint, ParamsType, Style};
use crate::route::RouteDescriptor;

const TOKEN_ROUTE: RouteDescriptor = RouteDescriptor {
    endpoint: Endpoint::OAuth2,
    namespace: "oauth2",
    name: "token",
    style: Style::Rpc,
    // Client credentials go in the form body instead.
    auth: Auth::Noauth,
};

/// Which type of OAuth2 flow to use.
#[derive(Debug, Clone)]
pub enum Oauth2Type {
    /// Authorization yields a temporary authorization code which must be turned into an OAuth2
    /// token by making another call, authenticated with the app's client secret. This can be used
    /// without a redirect URI, where the user inputs the code directly into the program.
    AuthorizationCode,

    /// Like `AuthorizationCode`, but the code exchange is protected by a one-time PKCE code
    /// instead of the app secret, so it is safe to use in apps which can't keep a secret, like
    /// desktop and mobile apps.
    PKCE(PkceCode),

    /// Authorization directly returns an OAuth2 token. This can only be used with a redirect URI
    /// where the Dropbox server redirects the user's web browser to the program.
    ImplicitGrant,
}

impl Oauth2Type {
    /// The value to put in the `response_type` parameter to request the given token type.
    pub fn response_type_str(&self) -> &'static str {
        match self {
            Oauth2Type::AuthorizationCode | Oauth2Type::PKCE(_) => "code",
            Oauth2Type::ImplicitGrant => "token",
        }
    }
}

/// What kind of access token to request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenAccessType {
    /// A short-lived access token only.
    Online,

    /// A short-lived access token plus a refresh token which can be used to get more.
    Offline,

    /// Whatever the app's permission settings default to.
    Legacy,
}

impl TokenAccessType {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenAccessType::Online => "online",
            TokenAccessType::Offline => "offline",
            TokenAccessType::Legacy => "legacy",
        }
    }
}

/// A proof key for OAuth2 PKCE ("Proof Key for Code Exchange") flow.
#[derive(Debug, Clone)]
pub struct PkceCode {
    /// The code verifier. It is sent in plain form only when exchanging the authorization code.
    pub code: String,
}

impl PkceCode {
    /// Generate a new random code string.
    pub fn new() -> Self {
        let mut bytes = [0u8; 32];
        SystemRandom::new()
            .fill(&mut bytes)
            .expect("system random number generator failed");
        Self { code: URL_SAFE_NO_PAD.encode(bytes) }
    }

    /// Get the SHA-256 hash of the code, encoded as base64url. This is the `code_challenge` sent
    /// with the authorize request.
    pub fn s256(&self) -> String {
        let digest = ring::digest::digest(&ring::digest::SHA256, self.code.as_bytes());
        URL_SAFE_NO_PAD.encode(digest.as_ref())
    }
}

impl Default for PkceCode {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a URL that can be given to the user to visit to have Dropbox authorize your app.
#[derive(Debug)]
pub struct Oauth2AuthorizeUrlBuilder<'a> {
    client_id: &'a str,
    flow_type: &'a Oauth2Type,
    token_access_type: Option<TokenAccessType>,
    force_reapprove: bool,
    force_reauthentication: bool,
    disable_signup: bool,
    redirect_uri: Option<&'a str>,
    state: Option<&'a str>,
    require_role: Option<&'a str>,
    locale: Option<&'a str>,
    scope: Option<&'a str>,
}

impl<'a> Oauth2AuthorizeUrlBuilder<'a> {
    pub fn new(client_id: &'a str, flow_type: &'a Oauth2Type) -> Self {
        Self {
            client_id,
            flow_type,
            token_access_type: None,
            force_reapprove: false,
            force_reauthentication: false,
            disable_signup: false,
            redirect_uri: None,
            state: None,
            require_role: None,
            locale: None,
            scope: None,
        }
    }

    pub fn token_access_type(mut self, value: TokenAccessType) -> Self {
        self.token_access_type = Some(value);
        self
    }

    pub fn force_reapprove(mut self, value: bool) -> Self {
        self.force_reapprove = value;
        self
    }

    pub fn force_reauthentication(mut self, value: bool) -> Self {
        self.force_reauthentication = value;
        self
    }

    pub fn disable_signup(mut self, value: bool) -> Self {
        self.disable_signup = value;
        self
    }

    pub fn redirect_uri(mut self, value: &'a str) -> Self {
        self.redirect_uri = Some(value);
        self
    }

    pub fn state(mut self, value: &'a str) -> Self {
        self.state = Some(value);
        self
    }

    pub fn require_role(mut self, value: &'a str) -> Self {
        self.require_role = Some(value);
        self
    }

    pub fn locale(mut self, value: &'a str) -> Self {
        self.locale = Some(value);
        self
    }

    /// Space-separated list of scopes to request. If omitted, all of the app's scopes are
    /// requested.
    pub fn scope(mut self, value: &'a str) -> Self {
        self.scope = Some(value);
        self
    }

    pub fn build(self) -> Url {
        let mut url = Url::parse("https://www.dropbox.com/oauth2/authorize").unwrap();
        {
            let mut params = url.query_pairs_mut();
            params.append_pair("response_type", self.flow_type.response_type_str());
            params.append_pair("client_id", self.client_id);
            if let Oauth2Type::PKCE(code) = self.flow_type {
                params.append_pair("code_challenge", &code.s256());
                params.append_pair("code_challenge_method", "S256");
            }
            if let Some(value) = self.token_access_type {
                params.append_pair("token_access_type", value.as_str());
            }
            if self.force_reapprove {
                params.append_pair("force_reapprove", "true");
            }
            if self.force_reauthentication {
                params.append_pair("force_reauthentication", "true");
            }
            if self.disable_signup {
                params.append_pair("disable_signup", "true");
            }
            if let Some(value) = self.redirect_uri {
                params.append_pair("redirect_uri", value);
            }
            if let Some(value) = self.state {
                params.append_pair("state", value);
            }
            if let Some(value) = self.require_role {
                params.append_pair("require_role", value);
            }
            if let Some(value) = self.locale {
                params.append_pair("locale", value);
            }
            if let Some(value) = self.scope {
                params.append_pair("scope", value);
            }
        }
        url
    }
}

/// How the app proves its identity when exchanging an authorization code.
#[derive(Debug, Clone, Copy)]
pub enum ClientAuth<'a> {
    /// The app's client secret, for the [`Oauth2Type::AuthorizationCode`] flow.
    Secret(&'a str),

    /// The PKCE code the authorize URL was built with, for the [`Oauth2Type::PKCE`] flow.
    Pkce(&'a PkceCode),
}

/// The response to a successful token request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    /// The access token to use for API calls.
    pub access_token: String,

    /// Always `bearer`.
    pub token_type: String,

    /// Seconds until the access token expires, for short-lived tokens.
    #[serde(default)]
    pub expires_in: Option<u64>,

    /// A long-lived token for getting new access tokens, if offline access was requested.
    #[serde(default)]
    pub refresh_token: Option<String>,

    /// The scopes granted, space-separated.
    #[serde(default)]
    pub scope: Option<String>,

    /// The account the token is for, if it is a user token.
    #[serde(default)]
    pub account_id: Option<String>,

    /// The team the token is for, if it is a team token.
    #[serde(default)]
    pub team_id: Option<String>,
}

fn authorization_code_params(
    client_id: &str,
    client_auth: ClientAuth<'_>,
    authorization_code: &str,
    redirect_uri: Option<&str>,
) -> String {
    let mut params = UrlEncoder::new(String::new());
    params.append_pair("code", authorization_code);
    params.append_pair("grant_type", "authorization_code");
    params.append_pair("client_id", client_id);
    match client_auth {
        ClientAuth::Secret(secret) => {
            params.append_pair("client_secret", secret);
        }
        ClientAuth::Pkce(pkce) => {
            params.append_pair("code_verifier", &pkce.code);
        }
    }
    if let Some(value) = redirect_uri {
        params.append_pair("redirect_uri", value);
    }
    params.finish()
}

/// Given an authorization code, request an OAuth2 token from Dropbox API.
///
/// Requires the app's client ID and either its secret or the PKCE code used in the authorize
/// URL, as well as the redirect URI used in the prior authorize request, if there was one.
pub async fn oauth2_token_from_authorization_code_async(
    client: &impl HttpClient,
    client_id: &str,
    client_auth: ClientAuth<'_>,
    authorization_code: &str,
    redirect_uri: Option<&str>,
) -> crate::Result<TokenResponse> {
    let params = authorization_code_params(
        client_id, client_auth, authorization_code, redirect_uri);

    // The parameters hold credentials, so they don't go to the observer.
    debug!("Requesting OAuth2 token");
    let req = prepare_request(client, &TOKEN_ROUTE, &params, ParamsType::Form, None, None);
    let HttpRequestResultRaw { status, mut body, .. } =
        client.execute(req, Bytes::from(params)).await?;

    let response = body_to_string(&mut body).await?;
    if status != 200 {
        return Err(classify_error(status, response));
    }

    let token = serde_json::from_str::<TokenResponse>(&response)?;
    debug!("OAuth2 token received for account {:?}", token.account_id);
    Ok(token)
}

/// Blocking version of [`oauth2_token_from_authorization_code_async`].
pub fn oauth2_token_from_authorization_code(
    client: &impl crate::client_trait::HttpClient,
    client_id: &str,
    client_auth: ClientAuth<'_>,
    authorization_code: &str,
    redirect_uri: Option<&str>,
) -> crate::Result<TokenResponse> {
    unwrap_async(oauth2_token_from_authorization_code_async(
        client, client_id, client_auth, authorization_code, redirect_uri))
}
