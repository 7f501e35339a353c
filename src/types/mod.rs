// Copyright (c) 2025 Dropbox, Inc.

//! Argument, result, and error types, one module per API namespace.
//!
//! Structs use plain serde derives; unions are declared with
//! [`tagged_union!`](crate::tagged_union) so that open unions tolerate new variants from the
//! server.

// The cross-cutting errors live here, so this one is always built. The `dbx_auth` feature only
// controls its routes.
pub mod auth;

if_feature! { "dbx_async", pub mod dbx_async; }
if_feature! { "dbx_check", pub mod check; }
if_feature! { "dbx_common", pub mod common; }
if_feature! { "dbx_files", pub mod files; }
if_feature! { "dbx_users", pub mod users; }
