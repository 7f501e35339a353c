// Copyright (c) 2021-2025 Dropbox, Inc.

//! Everything needed to implement your async HTTP client.

use std::future::{Future, ready};
use std::io::{IoSliceMut, Read};
use std::pin::Pin;
use std::task::{Context, Poll};
use bytes::Bytes;
use futures::AsyncRead;
use crate::client_trait as sync;
use crate::client_trait_common::HttpRequest;
use crate::config::Config;

/// The base HTTP asynchronous client trait.
pub trait HttpClient {
    /// The concrete type of request supported by the client.
    type Request: HttpRequest;

    /// Make a HTTP request. Any status code is a successful request at this level; only failures
    /// to get a response at all should be returned as errors.
    fn execute(
        &self,
        request: Self::Request,
        body: Bytes,
    ) -> impl Future<Output = crate::Result<HttpRequestResultRaw>> + Send;

    /// Create a new request instance for the given URL. It should be a POST request.
    fn new_request(&self, url: &str) -> Self::Request;

    /// Credentials and settings to apply to every request made with this client.
    fn config(&self) -> &Config {
        Config::unconfigured()
    }
}

/// The raw response from the server, including an async streaming response body.
pub struct HttpRequestResultRaw {
    /// HTTP response code.
    pub status: u16,

    /// The value of the `Dropbox-API-Result` header, if present.
    pub result_header: Option<String>,

    /// The value of the `Content-Length` header, if present.
    pub content_length: Option<u64>,

    /// The response body stream.
    pub body: Box<dyn AsyncRead + Unpin + Send>,
}

/// The response from the server, parsed into a given type, including a body stream if it is from
/// a Download style request.
pub struct HttpRequestResult<T> {
    /// The API result, parsed into the given type.
    pub result: T,

    /// The value of the `Content-Length` header in the response, if any. Only expected to not be
    /// `None` if `body` is also not `None`.
    pub content_length: Option<u64>,

    /// The response body stream, if any. Only expected to not be `None` for
    /// [`Style::Download`](crate::client_trait_common::Style::Download) endpoints.
    pub body: Option<Box<dyn AsyncRead + Unpin + Send>>,
}

/// Blanket implementation of the async interface for all sync clients.
/// This is necessary because all the machinery is actually implemented in terms of the async
/// client.
impl<T: sync::HttpClient> HttpClient for T {
    type Request = T::Request;

    fn execute(
        &self,
        request: Self::Request,
        body: Bytes,
    ) -> impl Future<Output = crate::Result<HttpRequestResultRaw>> + Send {
        ready(sync::HttpClient::execute(self, request, &body).map(|r| {
            HttpRequestResultRaw {
                status: r.status,
                result_header: r.result_header,
                content_length: r.content_length,
                body: Box::new(SyncReadAdapter { inner: r.body }),
            }
        }))
    }

    fn new_request(&self, url: &str) -> Self::Request {
        sync::HttpClient::new_request(self, url)
    }

    fn config(&self) -> &Config {
        sync::HttpClient::config(self)
    }
}

/// Marker trait to indicate that a HTTP client supports unauthenticated routes.
pub trait NoauthClient: HttpClient {}

/// Marker trait to indicate that a HTTP client supports User authentication.
/// User authentication works by adding a `Authorization: Bearer <TOKEN>` header.
pub trait UserAuthClient: HttpClient {}

/// Marker trait to indicate that a HTTP client supports Team authentication.
/// Team authentication works by adding a `Authorization: Bearer <TOKEN>` header, and optionally a
/// `Dropbox-API-Select-Admin` or `Dropbox-API-Select-User` header.
pub trait TeamAuthClient: HttpClient {}

/// Marker trait to indicate that a HTTP client supports App authentication.
/// App authentication works by adding a `Authorization: Basic <base64(APP_KEY:APP_SECRET)>` header
/// to the HTTP request.
pub trait AppAuthClient: HttpClient {}

// Sync clients keep their auth capabilities when used through the async interface.
impl<T: sync::NoauthClient> NoauthClient for T {}
impl<T: sync::UserAuthClient> UserAuthClient for T {}
impl<T: sync::TeamAuthClient> TeamAuthClient for T {}
impl<T: sync::AppAuthClient> AppAuthClient for T {}

pub(crate) struct SyncReadAdapter {
    pub inner: Box<dyn Read + Send>,
}

impl AsyncRead for SyncReadAdapter {
    fn poll_read(mut self: Pin<&mut Self>, _cx: &mut Context<'_>, buf: &mut [u8]) -> Poll<std::io::Result<usize>> {
        Poll::Ready(self.inner.read(buf))
    }

    fn poll_read_vectored(mut self: Pin<&mut Self>, _cx: &mut Context<'_>, bufs: &mut [IoSliceMut<'_>]) -> Poll<std::io::Result<usize>> {
        Poll::Ready(self.inner.read_vectored(bufs))
    }
}
