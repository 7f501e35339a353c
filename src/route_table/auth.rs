// Copyright (c) 2025 Dropbox, Inc.

use crate::NoError;
use crate::client_trait_common::Auth;
use crate::route::{Route, RouteDescriptor};
use crate::types::auth::*;

/// Creates an OAuth 2.0 access token from the supplied OAuth 1.0 access token.
pub const TOKEN_FROM_OAUTH1: Route<TokenFromOAuth1Arg, TokenFromOAuth1Result, TokenFromOAuth1Error> =
    Route::rpc("auth", "token/from_oauth1", Auth::App);

/// Disables the access token used to authenticate the call.
pub const TOKEN_REVOKE: Route<(), (), NoError> = Route::rpc("auth", "token/revoke", Auth::User);

pub const ALL: &[RouteDescriptor] = &[
    TOKEN_FROM_OAUTH1.descriptor,
    TOKEN_REVOKE.descriptor,
];
