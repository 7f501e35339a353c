// Copyright (c) 2025 Dropbox, Inc.

pub use crate::types::auth::*;
use crate::client_helpers::request;
use crate::route_table::auth as routes;

/// Creates an OAuth 2.0 access token from the supplied OAuth 1.0 access token.
pub async fn token_from_oauth1(
    client: &impl crate::async_client_trait::AppAuthClient,
    arg: &TokenFromOAuth1Arg,
) -> Result<TokenFromOAuth1Result, crate::Error<TokenFromOAuth1Error>> {
    request(client, &routes::TOKEN_FROM_OAUTH1, arg).await
}

/// Disables the access token used to authenticate the call. If there is a corresponding refresh
/// token for the access token, this disables that refresh token, as well as any other access
/// tokens for that refresh token.
pub async fn token_revoke(
    client: &impl crate::async_client_trait::UserAuthClient,
) -> Result<(), crate::Error<crate::NoError>> {
    request(client, &routes::TOKEN_REVOKE, &()).await
}
