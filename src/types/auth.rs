// Copyright (c) 2025 Dropbox, Inc.

//! Types from the `auth` namespace: the cross-cutting errors every route can return, and the
//! OAuth 1 token migration route.

use std::fmt;
use serde::{Deserialize, Serialize};

tagged_union! {
    /// Errors occurred during authentication.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum AuthError: open {
        /// The access token is invalid.
        "invalid_access_token" => InvalidAccessToken,
        /// The user specified in 'Dropbox-API-Select-User' is no longer on the team.
        "invalid_select_user" => InvalidSelectUser,
        /// The user specified in 'Dropbox-API-Select-Admin' is not a Dropbox Business team admin.
        "invalid_select_admin" => InvalidSelectAdmin,
        /// The user has been suspended.
        "user_suspended" => UserSuspended,
        /// The access token has expired.
        "expired_access_token" => ExpiredAccessToken,
        /// The access token does not have the required scope to access the route.
        "missing_scope" => MissingScope(flat TokenScopeError),
        /// The route is not available to public.
        "route_access_denied" => RouteAccessDenied,
    }
}

impl std::error::Error for AuthError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenScopeError {
    /// The required scope to access the route.
    pub required_scope: String,
}

tagged_union! {
    /// Error occurred because the account doesn't have permission to access the resource.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum AccessError: open {
        /// Current account type cannot access the resource.
        "invalid_account_type" => InvalidAccountType(nested InvalidAccountTypeError),
        /// Current account cannot access Paper.
        "paper_access_denied" => PaperAccessDenied(nested PaperAccessError),
        /// The team doesn't allow this API call.
        "team_access_denied" => TeamAccessDenied,
    }
}

impl std::error::Error for AccessError {}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum InvalidAccountTypeError: open {
        /// Current account type doesn't have permission to access this route endpoint.
        "endpoint" => Endpoint,
        /// Current account type doesn't have permission to access this feature.
        "feature" => Feature,
    }
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PaperAccessError: open {
        /// Paper is disabled.
        "paper_disabled" => PaperDisabled,
        /// The provided user has not used Paper yet.
        "not_paper_user" => NotPaperUser,
    }
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RateLimitReason: open {
        /// You are making too many requests in the past few minutes.
        "too_many_requests" => TooManyRequests,
        /// There are currently too many write operations happening in the user's Dropbox.
        "too_many_write_operations" => TooManyWriteOperations,
    }
}

/// Error occurred because the app is being rate limited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitError {
    /// The reason why the app is being rate limited.
    pub reason: RateLimitReason,

    /// The number of seconds that the app should wait before making another request.
    // Not every rate-limit response includes it.
    #[serde(default = "default_retry_after")]
    pub retry_after: u32,
}

fn default_retry_after() -> u32 {
    1
}

impl fmt::Display for RateLimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rate limited ({}), retry after {}s", self.reason, self.retry_after)
    }
}

impl std::error::Error for RateLimitError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFromOAuth1Arg {
    /// The supplied OAuth 1.0 access token.
    pub oauth1_token: String,
    /// The token secret associated with the supplied access token.
    pub oauth1_token_secret: String,
}

impl TokenFromOAuth1Arg {
    pub fn new(oauth1_token: String, oauth1_token_secret: String) -> Self {
        TokenFromOAuth1Arg { oauth1_token, oauth1_token_secret }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFromOAuth1Result {
    /// The OAuth 2.0 token generated from the supplied OAuth 1.0 token.
    pub oauth2_token: String,
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum TokenFromOAuth1Error: open {
        /// Part or all of the OAuth 1.0 access token info is invalid.
        "invalid_oauth1_token_info" => InvalidOauth1TokenInfo,
        /// The authorized app does not match the app associated with the supplied access token.
        "app_id_mismatch" => AppIdMismatch,
    }
}

impl std::error::Error for TokenFromOAuth1Error {}
