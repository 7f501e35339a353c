// Copyright (c) 2019-2025 Dropbox, Inc.

#![deny(
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms,
)]

#![cfg_attr(docsrs, doc = include_str!("../README.md"))]
#![cfg_attr(not(docsrs), doc = "Dropbox SDK for Rust. See README.md for more details.")]

// Enable a nightly feature for docs.rs which enables decorating feature-gated items.
// To enable this manually, run e.g. `cargo rustdoc --all-features -- --cfg docsrs`.
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Feature-gate something and also decorate it with the feature name on docs.rs.
macro_rules! if_feature {
    ($feature_name:expr, $($item:item)*) => {
        $(
            #[cfg(feature = $feature_name)]
            #[cfg_attr(docsrs, doc(cfg(feature = $feature_name)))]
            $item
        )*
    }
}

#[macro_use] extern crate log;

#[macro_use]
pub mod tagged;

mod error;
pub use error::{ApiError, BoxedError, Error, LocalizedText, NoError};

/// Shorthand for a result whose error has no API-specific part.
pub type Result<T> = std::result::Result<T, Error>;

pub mod client_trait_common;
pub mod client_trait;
pub mod async_client_trait;
pub mod config;
pub mod route;
pub mod client_helpers;
pub mod oauth2;

pub mod types;
pub mod route_table;

#[cfg(any(feature = "default_client", feature = "default_async_client"))]
mod default_client_common;

if_feature! { "default_client", pub mod default_client; }
if_feature! { "default_async_client", pub mod default_async_client; }

if_feature! { "sync_routes", pub mod sync_routes; }
if_feature! { "async_routes", pub mod async_routes; }

if_feature! { "sync_routes_in_root", pub use sync_routes::*; }

#[cfg(all(feature = "async_routes", not(feature = "sync_routes_in_root")))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "async_routes", not(feature = "sync_routes_in_root")))))]
pub use async_routes::*;
