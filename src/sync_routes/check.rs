// Copyright (c) 2025 Dropbox, Inc.

pub use crate::types::check::*;
use crate::client_helpers::{request, unwrap_async};
use crate::route_table::check as routes;

/// This endpoint performs App Authentication, validating the supplied app key and secret, and
/// returns the supplied string, to allow you to test your code and connection to the Dropbox API.
/// It has no other effect. If you receive an HTTP 200 response with the supplied query, it
/// indicates at least part of the Dropbox API infrastructure is working and that the app key and
/// secret valid.
pub fn app(
    client: &impl crate::client_trait::AppAuthClient,
    arg: &EchoArg,
) -> Result<EchoResult, crate::Error<crate::NoError>> {
    unwrap_async(request(client, &routes::APP, arg))
}

/// This endpoint performs User Authentication, validating the supplied access token, and returns
/// the supplied string, to allow you to test your code and connection to the Dropbox API. It has
/// no other effect. If you receive an HTTP 200 response with the supplied query, it indicates at
/// least part of the Dropbox API infrastructure is working and that the access token is valid.
pub fn user(
    client: &impl crate::client_trait::UserAuthClient,
    arg: &EchoArg,
) -> Result<EchoResult, crate::Error<crate::NoError>> {
    unwrap_async(request(client, &routes::USER, arg))
}
