// Copyright (c) 2025 Dropbox, Inc.

pub use crate::types::users::*;
use crate::client_helpers::request;
use crate::route_table::users as routes;

/// Get information about a user's account.
pub async fn get_account(
    client: &impl crate::async_client_trait::UserAuthClient,
    arg: &GetAccountArg,
) -> Result<BasicAccount, crate::Error<GetAccountError>> {
    request(client, &routes::GET_ACCOUNT, arg).await
}

/// Get information about the current user's account.
pub async fn get_current_account(
    client: &impl crate::async_client_trait::UserAuthClient,
) -> Result<FullAccount, crate::Error<crate::NoError>> {
    request(client, &routes::GET_CURRENT_ACCOUNT, &()).await
}

/// Get the space usage information for the current user's account.
pub async fn get_space_usage(
    client: &impl crate::async_client_trait::UserAuthClient,
) -> Result<SpaceUsage, crate::Error<crate::NoError>> {
    request(client, &routes::GET_SPACE_USAGE, &()).await
}
