// Copyright (c) 2025 Dropbox, Inc.

//! Pieces shared by the sync and async default clients.

/// Methods every default client has for adjusting its [`Config`](crate::config::Config).
macro_rules! impl_config_methods {
    ($self:ident) => {
        /// The configuration applied to every request made with this client. Change it only
        /// while no requests are in flight.
        pub fn config_mut(&mut $self) -> &mut $crate::config::Config {
            &mut $self.config
        }

        /// Set a root which all subsequent paths are evaluated relative to.
        ///
        /// The default, if this function is not called, is to behave as if it was called with
        /// [`PathRoot::Home`](crate::types::common::PathRoot::Home).
        ///
        /// See <https://www.dropbox.com/developers/reference/path-root-header-modes> for more
        /// information.
        ///
        /// Fails only for `PathRoot::Other`, which has no wire form.
        #[cfg(feature = "dbx_common")]
        pub fn set_path_root(
            &mut $self,
            path_root: &$crate::types::common::PathRoot,
        ) -> Result<(), serde_json::Error> {
            $self.config.set_path_root(path_root)
        }
    }
}
pub(crate) use impl_config_methods;

/// Forwards the transport half of `HttpClient` to an inner client, and serves the outer client's
/// own config.
macro_rules! impl_http_client {
    (sync $client:ty, $request:ty) => {
        impl $crate::client_trait::HttpClient for $client {
            type Request = $request;

            fn execute(&self, request: Self::Request, body: &[u8])
                -> $crate::Result<$crate::client_trait::HttpRequestResultRaw>
            {
                self.inner.execute(request, body)
            }

            fn new_request(&self, url: &str) -> Self::Request {
                self.inner.new_request(url)
            }

            fn config(&self) -> &$crate::config::Config {
                &self.config
            }
        }
    };
    (async $client:ty, $request:ty) => {
        impl $crate::async_client_trait::HttpClient for $client {
            type Request = $request;

            fn execute(&self, request: Self::Request, body: ::bytes::Bytes)
                -> impl ::std::future::Future<
                    Output = $crate::Result<$crate::async_client_trait::HttpRequestResultRaw>,
                > + Send
            {
                self.inner.execute(request, body)
            }

            fn new_request(&self, url: &str) -> Self::Request {
                self.inner.new_request(url)
            }

            fn config(&self) -> &$crate::config::Config {
                &self.config
            }
        }
    };
}
pub(crate) use impl_http_client;
