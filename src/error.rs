use serde::Deserialize;
use crate::types;

/// An error occurred in the process of making an API call.
/// This is different from the case where your call succeeded, but the operation returned an error.
#[derive(thiserror::Error, Debug)]
pub enum Error<E = NoError> {
    /// An error returned by the API. Its type depends on the endpoint being called.
    #[error("Dropbox API endpoint returned an error: {0}")]
    Api(#[source] ApiError<E>),

    /// Some error from the internals of the HTTP client.
    #[error("error from HTTP client: {0}")]
    HttpClient(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Something went wrong in the process of transforming your arguments into a JSON string, or
    /// the response JSON into a value.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The Dropbox API response was unexpected or malformed in some way.
    #[error("Dropbox API returned something unexpected: {0}")]
    UnexpectedResponse(String),

    /// The Dropbox API indicated that your request was malformed in some way.
    #[error("Dropbox API indicated that the request was malformed: {0}")]
    BadRequest(String),

    /// Errors occurred during authentication.
    #[error("Dropbox API indicated a problem with authentication: {}", .0.error)]
    Authentication(#[source] ApiError<types::auth::AuthError>),

    /// The user or team account doesn't have access to the endpoint or feature.
    #[error("Dropbox API denied access to the resource: {}", .0.error)]
    AccessDenied(#[source] ApiError<types::auth::AccessError>),

    /// Your request was rejected due to rate-limiting. You can retry it later.
    #[error("Dropbox API declined the request due to rate-limiting ({}), retry after {}s",
        .0.error.reason, .0.error.retry_after)]
    RateLimited(#[source] ApiError<types::auth::RateLimitError>),

    /// The Dropbox API server had an internal error.
    #[error("Dropbox API had an internal server error: {0}")]
    ServerError(String),

    /// The Dropbox API returned an unexpected HTTP response code.
    #[error("Dropbox API returned HTTP {code} - {summary}")]
    UnexpectedHttpError {
        /// HTTP status code returned.
        code: u16,

        /// The `error_summary` field of the response, if it had one.
        summary: String,

        /// The response body.
        response: String,
    },
}

/// The JSON envelope Dropbox wraps around every structured error response: a summary meant for
/// logs, an optional message meant for the user, and the error value itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiError<E> {
    /// A developer-facing description of the error, like `path/not_found/..`.
    #[serde(default)]
    pub error_summary: String,

    /// A message which can be shown to the end user, if Dropbox provided one.
    #[serde(default)]
    pub user_message: Option<LocalizedText>,

    /// The structured cause.
    pub error: E,
}

impl<E> ApiError<E> {
    /// Apply a function to the structured cause, keeping the rest of the envelope.
    pub fn map<E2>(self, f: impl FnOnce(E) -> E2) -> ApiError<E2> {
        ApiError {
            error_summary: self.error_summary,
            user_message: self.user_message,
            error: f(self.error),
        }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for ApiError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.error_summary.is_empty() {
            write!(f, "{}", self.error)
        } else {
            f.write_str(&self.error_summary)
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for ApiError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Text with the locale it is written in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalizedText {
    /// The text itself.
    pub text: String,

    /// The IETF language tag of the text.
    pub locale: String,
}

/// An [`Error`] without a single concrete type for the API error response, using a boxed trait
/// object instead.
///
/// This is useful if a function needs to return some combination of different error types. They
/// can be extracted later by using
/// [`std::error::Error::downcast_ref`](https://doc.rust-lang.org/std/error/trait.Error.html#method.downcast_ref)
/// or [`Error::downcast_ref_inner`] if desired.
///
/// See [`Error::boxed`] for how to convert a concretely-typed version of [`Error`] into this.
pub type BoxedError = Error<Box<dyn std::error::Error>>;

impl<E> Error<E> {
    /// If the server rate-limited the request, the number of seconds it asked to wait.
    pub fn retry_after_seconds(&self) -> Option<u32> {
        match self {
            Error::RateLimited(e) => Some(e.error.retry_after),
            _ => None,
        }
    }

    /// The `error_summary` of the response envelope, for errors that carried one.
    pub fn error_summary(&self) -> Option<&str> {
        match self {
            Error::Api(e) => Some(&e.error_summary),
            Error::Authentication(e) => Some(&e.error_summary),
            Error::AccessDenied(e) => Some(&e.error_summary),
            Error::RateLimited(e) => Some(&e.error_summary),
            Error::UnexpectedHttpError { summary, .. } => Some(summary),
            _ => None,
        }
    }
}

impl<E: std::error::Error + 'static> Error<E> {
    /// Look for an inner error of the given type anywhere within this error, by walking the chain
    /// of [`std::error::Error::source`] recursively until something matches the desired type.
    pub fn downcast_ref_inner<E2: std::error::Error + 'static>(&self) -> Option<&E2> {
        let mut inner = Some(self as &dyn std::error::Error);
        while let Some(e) = inner {
            if let Some(e) = e.downcast_ref() {
                return Some(e);
            }
            inner = e.source();
        }
        None
    }

    /// Change the concretely-typed API error, if any, into a boxed trait object.
    ///
    /// This makes it possible to combine dissimilar errors into one type, which can be broken out
    /// later using
    /// [`std::error::Error::downcast_ref`](https://doc.rust-lang.org/std/error/trait.Error.html#method.downcast_ref)
    /// if desired.
    pub fn boxed(self) -> BoxedError {
        match self {
            Error::Api(e) => Error::Api(e.map(|e| Box::new(e) as Box<dyn std::error::Error>)),

            // Other variants unchanged.
            // These have to be actually re-stated, because the (unstated) generic type of `Error`
            // is different on the left vs the right.
            Error::HttpClient(e) => Error::HttpClient(e),
            Error::Json(e) => Error::Json(e),
            Error::UnexpectedResponse(e) => Error::UnexpectedResponse(e),
            Error::BadRequest(e) => Error::BadRequest(e),
            Error::Authentication(e) => Error::Authentication(e),
            Error::AccessDenied(e) => Error::AccessDenied(e),
            Error::RateLimited(e) => Error::RateLimited(e),
            Error::ServerError(e) => Error::ServerError(e),
            Error::UnexpectedHttpError { code, summary, response } =>
                Error::UnexpectedHttpError { code, summary, response },
        }
    }
}

impl Error<NoError> {
    /// Lift an error with no possible API error value to a typed error of any type.
    ///
    /// Ideally this would just be `impl<E> From<Error<NoError>> for Error<E>` but that conflicts
    /// with the reflexive conversion (E could be NoError), and Rust doesn't have negative type
    /// bounds or specialization, so it has to be this method instead.
    pub fn typed<E>(self) -> Error<E> {
        match self {
            Error::Api(x) => unreachable(x.error),
            Error::HttpClient(e) => Error::HttpClient(e),
            Error::Json(e) => Error::Json(e),
            Error::UnexpectedResponse(e) => Error::UnexpectedResponse(e),
            Error::BadRequest(e) => Error::BadRequest(e),
            Error::Authentication(e) => Error::Authentication(e),
            Error::AccessDenied(e) => Error::AccessDenied(e),
            Error::RateLimited(e) => Error::RateLimited(e),
            Error::ServerError(e) => Error::ServerError(e),
            Error::UnexpectedHttpError { code, summary, response } =>
                Error::UnexpectedHttpError { code, summary, response },
        }
    }
}

/// A special error type for a method that doesn't have any defined error return. You can't
/// actually encounter a value of this type in real life; it's here to satisfy type requirements.
#[derive(Copy, Clone)]
pub enum NoError {}

impl PartialEq<NoError> for NoError {
    fn eq(&self, _: &NoError) -> bool {
        unreachable(*self)
    }
}

impl std::error::Error for NoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        unreachable(*self)
    }
}

impl std::fmt::Debug for NoError {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        unreachable(*self)
    }
}

impl std::fmt::Display for NoError {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        unreachable(*self)
    }
}

// This is the reason we can't just use the otherwise-identical `void` crate's Void type: we need
// to implement this trait.
impl<'de> serde::de::Deserialize<'de> for NoError {
    fn deserialize<D: serde::de::Deserializer<'de>>(_: D)
        -> Result<Self, D::Error>
    {
        Err(serde::de::Error::custom(
            "method has no defined error type, but an error was returned"))
    }
}

#[inline(always)]
fn unreachable(x: NoError) -> ! {
    match x {}
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::auth::{AuthError, RateLimitError, RateLimitReason};

    #[test]
    fn test_envelope_display() {
        let with_summary = ApiError {
            error_summary: "expired_access_token/..".to_owned(),
            user_message: None,
            error: AuthError::ExpiredAccessToken,
        };
        assert_eq!("expired_access_token/..", with_summary.to_string());

        let without = ApiError { error_summary: String::new(), ..with_summary };
        assert_eq!("expired_access_token", without.to_string());
    }

    #[test]
    fn test_envelope_user_message() {
        let e = serde_json::from_str::<ApiError<AuthError>>(r#"{
            "error_summary": "user_suspended/..",
            "user_message": {"text": "Your account is suspended.", "locale": "en"},
            "error": {".tag": "user_suspended"}
        }"#).unwrap();
        assert_eq!(AuthError::UserSuspended, e.error);
        assert_eq!("en", e.user_message.unwrap().locale);
    }

    #[test]
    fn test_retry_after() {
        let e: Error = Error::RateLimited(ApiError {
            error_summary: "too_many_requests/..".to_owned(),
            user_message: None,
            error: RateLimitError {
                reason: RateLimitReason::TooManyRequests,
                retry_after: 300,
            },
        });
        assert_eq!(Some(300), e.retry_after_seconds());
        assert_eq!(Some("too_many_requests/.."), e.error_summary());
        assert!(e.to_string().contains("retry after 300s"), "{e}");
        assert_eq!(None, Error::<NoError>::ServerError(String::new()).retry_after_seconds());
    }

    #[test]
    fn test_downcast_through_envelope() {
        let e: Error<AuthError> = Error::Api(ApiError {
            error_summary: String::new(),
            user_message: None,
            error: AuthError::InvalidAccessToken,
        });
        assert_eq!(Some(&AuthError::InvalidAccessToken), e.downcast_ref_inner::<AuthError>());

        let boxed = e.boxed();
        match boxed {
            Error::Api(ref inner) => assert_eq!(
                Some(&AuthError::InvalidAccessToken),
                inner.error.downcast_ref::<AuthError>()),
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_no_error_never_decodes() {
        serde_json::from_str::<ApiError<NoError>>(r#"{"error": {".tag": "x"}}"#).unwrap_err();
    }
}
