// Copyright (c) 2025 Dropbox, Inc.

//! Blocking route functions, one module per namespace.
//!
//! Each module also re-exports its namespace's types, so `sync_routes::files::ListFolderArg`
//! works as well as `types::files::ListFolderArg`.

if_feature! { "dbx_auth", pub mod auth; }
if_feature! { "dbx_check", pub mod check; }
if_feature! { "dbx_files", pub mod files; }
if_feature! { "dbx_users", pub mod users; }

if_feature! { "dbx_async", pub use crate::types::dbx_async; }
if_feature! { "dbx_common", pub use crate::types::common; }
