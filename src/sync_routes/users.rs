// Copyright (c) 2025 Dropbox, Inc.

pub use crate::types::users::*;
use crate::client_helpers::{request, unwrap_async};
use crate::route_table::users as routes;

/// Get information about a user's account.
pub fn get_account(
    client: &impl crate::client_trait::UserAuthClient,
    arg: &GetAccountArg,
) -> Result<BasicAccount, crate::Error<GetAccountError>> {
    unwrap_async(request(client, &routes::GET_ACCOUNT, arg))
}

/// Get information about the current user's account.
pub fn get_current_account(
    client: &impl crate::client_trait::UserAuthClient,
) -> Result<FullAccount, crate::Error<crate::NoError>> {
    unwrap_async(request(client, &routes::GET_CURRENT_ACCOUNT, &()))
}

/// Get the space usage information for the current user's account.
pub fn get_space_usage(
    client: &impl crate::client_trait::UserAuthClient,
) -> Result<SpaceUsage, crate::Error<crate::NoError>> {
    unwrap_async(request(client, &routes::GET_SPACE_USAGE, &()))
}
