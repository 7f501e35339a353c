// Copyright (c) 2025 Dropbox, Inc.

//! Every route this crate can call, as constant [`Route`](crate::route::Route) descriptors.
//!
//! The functions in [`sync_routes`](crate::sync_routes) and [`async_routes`](crate::async_routes)
//! are thin wrappers around these. They can also be passed directly to
//! [`request`](crate::client_helpers::request) and
//! [`request_with_body`](crate::client_helpers::request_with_body).

if_feature! { "dbx_auth", pub mod auth; }
if_feature! { "dbx_check", pub mod check; }
if_feature! { "dbx_files", pub mod files; }
if_feature! { "dbx_users", pub mod users; }
