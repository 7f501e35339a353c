// Copyright (c) 2025 Dropbox, Inc.

use crate::NoError;
use crate::client_trait_common::Auth;
use crate::route::{Route, RouteDescriptor};
use crate::types::users::*;

/// Get information about a user's account.
pub const GET_ACCOUNT: Route<GetAccountArg, BasicAccount, GetAccountError> =
    Route::rpc("users", "get_account", Auth::User);

/// Get information about the current user's account.
pub const GET_CURRENT_ACCOUNT: Route<(), FullAccount, NoError> =
    Route::rpc("users", "get_current_account", Auth::User);

/// Get the space usage information for the current user's account.
pub const GET_SPACE_USAGE: Route<(), SpaceUsage, NoError> =
    Route::rpc("users", "get_space_usage", Auth::User);

pub const ALL: &[RouteDescriptor] = &[
    GET_ACCOUNT.descriptor,
    GET_CURRENT_ACCOUNT.descriptor,
    GET_SPACE_USAGE.descriptor,
];
