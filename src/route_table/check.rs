// Copyright (c) 2025 Dropbox, Inc.

use crate::NoError;
use crate::client_trait_common::Auth;
use crate::route::{Route, RouteDescriptor};
use crate::types::check::*;

/// This endpoint performs App Authentication, validating the supplied app key and secret, and
/// returns the supplied string, to allow you to test your code and connection to the Dropbox API.
pub const APP: Route<EchoArg, EchoResult, NoError> = Route::rpc("check", "app", Auth::App);

/// This endpoint performs User Authentication, validating the supplied access token, and returns
/// the supplied string, to allow you to test your code and connection to the Dropbox API.
pub const USER: Route<EchoArg, EchoResult, NoError> = Route::rpc("check", "user", Auth::User);

pub const ALL: &[RouteDescriptor] = &[
    APP.descriptor,
    USER.descriptor,
];
