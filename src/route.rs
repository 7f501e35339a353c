// Copyright (c) 2025 Dropbox, Inc.

//! Static descriptions of API routes.
//!
//! Every remote operation is described once, as a constant [`Route`], and invoked through the
//! generic machinery in [`client_helpers`](crate::client_helpers). The per-namespace constants
//! live in [`route_table`](crate::route_table).

use std::fmt;
use std::marker::PhantomData;
use crate::client_trait_common::{Auth, Endpoint, Style};

/// The untyped part of a route: where it lives and how to call it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Which host the route is served from.
    pub endpoint: Endpoint,

    /// The namespace the route belongs to, e.g. `files`.
    pub namespace: &'static str,

    /// The route's name within its namespace, e.g. `list_folder/longpoll` or `delete_v2`.
    pub name: &'static str,

    /// How arguments and results are transferred.
    pub style: Style,

    /// Which credential is attached to the request.
    pub auth: Auth,
}

impl fmt::Display for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// A route together with its argument type `A`, success type `S`, and error type `E`.
pub struct Route<A, S, E> {
    /// Where and how the route is called.
    pub descriptor: RouteDescriptor,
    types: PhantomData<fn(&A) -> Result<S, E>>,
}

impl<A, S, E> Route<A, S, E> {
    pub const fn new(
        endpoint: Endpoint,
        namespace: &'static str,
        name: &'static str,
        style: Style,
        auth: Auth,
    ) -> Self {
        Self {
            descriptor: RouteDescriptor { endpoint, namespace, name, style, auth },
            types: PhantomData,
        }
    }

    /// A RPC-style route on the main API host.
    pub const fn rpc(namespace: &'static str, name: &'static str, auth: Auth) -> Self {
        Self::new(Endpoint::Api, namespace, name, Style::Rpc, auth)
    }

    /// An upload-style route on the content host.
    pub const fn upload(namespace: &'static str, name: &'static str, auth: Auth) -> Self {
        Self::new(Endpoint::Content, namespace, name, Style::Upload, auth)
    }

    /// A download-style route on the content host.
    pub const fn download(namespace: &'static str, name: &'static str, auth: Auth) -> Self {
        Self::new(Endpoint::Content, namespace, name, Style::Download, auth)
    }
}

// Implemented by hand so that A, S, and E don't need to be Clone / Copy / Debug themselves.

impl<A, S, E> Clone for Route<A, S, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, S, E> Copy for Route<A, S, E> {}

impl<A, S, E> fmt::Debug for Route<A, S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("descriptor", &self.descriptor)
            .field("arg", &std::any::type_name::<A>())
            .field("result", &std::any::type_name::<S>())
            .field("error", &std::any::type_name::<E>())
            .finish()
    }
}
