// Copyright (c) 2019-2025 Dropbox, Inc.

//! The route invoker: turns a [`Route`] and its argument into a HTTP request, and the response
//! into a typed result or error.

use std::borrow::Cow;
use std::fmt::Write;
use std::future::Future;
use std::io::ErrorKind;
use bytes::Bytes;
use futures::{AsyncRead, AsyncReadExt, FutureExt};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde::ser::Serialize;
use crate::{ApiError, Error};
use crate::async_client_trait::{HttpClient, HttpRequestResult, HttpRequestResultRaw, SyncReadAdapter};
use crate::client_trait as sync;
use crate::client_trait_common::{Auth, HttpRequest, ParamsType, Style};
use crate::route::{Route, RouteDescriptor};

/// The fields every Dropbox error body has, whatever its status code.
#[derive(Debug, Deserialize)]
struct GenericEnvelope {
    #[serde(default)]
    error_summary: String,
}

/// Build a request for the given route: URL, credentials, and the headers its style calls for.
///
/// The body is not part of the request; it is passed to [`HttpClient::execute`] separately.
pub(crate) fn prepare_request<T: HttpClient>(
    client: &T,
    route: &RouteDescriptor,
    params: &str,
    params_type: ParamsType,
    range_start: Option<u64>,
    range_end: Option<u64>,
) -> T::Request {
    let config = client.config();
    let url = config.url(route.endpoint, route.namespace, route.name);

    let mut req = client.new_request(&url);
    req = req.set_header("User-Agent", concat!("Dropbox-SDK-Rust/", env!("CARGO_PKG_VERSION")));

    match route.auth {
        Auth::Noauth => (),
        Auth::App => match config.app_key() {
            Some(app_key) => {
                req = req.set_header("Authorization", &app_key.authorization_header());
            }
            None => warn!("{route}: route requires app auth, but no app key is configured"),
        },
        Auth::User | Auth::Team => match config.token() {
            Some(token) => {
                req = req.set_header("Authorization", &format!("Bearer {token}"));
            }
            None => warn!("{route}: route requires a token, but none is configured"),
        },
    }

    if route.auth != Auth::Noauth {
        if let Some(path_root) = config.path_root() {
            req = req.set_header("Dropbox-API-Path-Root", path_root);
        }

        if let Some(team_select) = config.team_select() {
            req = req.set_header(team_select.header_name(), team_select.id());
        }
    }

    req = match (range_start, range_end) {
        (Some(start), Some(end)) => req.set_header("Range", &format!("bytes={start}-{end}")),
        (Some(start), None) => req.set_header("Range", &format!("bytes={start}-")),
        (None, Some(end)) => req.set_header("Range", &format!("bytes=-{end}")),
        (None, None) => req,
    };

    match route.style {
        Style::Rpc => {
            // Params go in the body.
            if !params.is_empty() {
                req = req.set_header("Content-Type", params_type.content_type());
            }
        }
        Style::Upload => {
            req = req.set_header("Dropbox-API-Arg", &json_escape_header(params));
            req = req.set_header("Content-Type", "application/octet-stream");
        }
        Style::Download => {
            req = req.set_header("Dropbox-API-Arg", &json_escape_header(params));
        }
    }

    req
}

pub(crate) async fn body_to_string(body: &mut (dyn AsyncRead + Unpin + Send)) -> crate::Result<String> {
    let mut s = String::new();
    match body.read_to_string(&mut s).await {
        Ok(_) => Ok(s),
        Err(e) => {
            if e.kind() == ErrorKind::InvalidData {
                Err(Error::UnexpectedResponse(format!("invalid response: {e}")))
            } else {
                Err(Error::HttpClient(Box::new(e)))
            }
        }
    }
}

/// Turn a non-200 response into the matching error. The status code alone decides which shape
/// the body is parsed as.
pub(crate) fn classify_error<E: DeserializeOwned>(code: u16, response: String) -> Error<E> {
    error!("HTTP {code}: {response}");

    fn structured<X: DeserializeOwned, E>(
        response: &str,
        wrap: impl FnOnce(ApiError<X>) -> Error<E>,
    ) -> Error<E> {
        match serde_json::from_str::<ApiError<X>>(response) {
            Ok(deserialized) => wrap(deserialized),
            Err(de_error) => {
                error!("Failed to deserialize JSON from API error: {de_error}");
                Error::Json(de_error)
            }
        }
    }

    match code {
        400 => Error::BadRequest(response),
        401 => structured(&response, Error::Authentication),
        403 => structured(&response, Error::AccessDenied),
        409 => structured(&response, Error::Api),
        429 => structured(&response, Error::RateLimited),
        500 => Error::ServerError(response),
        _ => match serde_json::from_str::<GenericEnvelope>(&response) {
            Ok(envelope) => Error::UnexpectedHttpError {
                code,
                summary: envelope.error_summary,
                response,
            },
            Err(de_error) => {
                error!("Failed to deserialize JSON from HTTP {code} response: {de_error}");
                Error::Json(de_error)
            }
        },
    }
}

/// Call a route, returning its decoded result and, for download-style routes, the content stream.
///
/// `body` is the upload content; it must be empty for any other style.
pub async fn request_with_body<A, S, E, C>(
    client: &C,
    route: &Route<A, S, E>,
    arg: &A,
    body: Bytes,
    range_start: Option<u64>,
    range_end: Option<u64>,
) -> Result<HttpRequestResult<S>, Error<E>>
where
    A: Serialize,
    S: DeserializeOwned,
    E: DeserializeOwned,
    C: HttpClient,
{
    let route = &route.descriptor;
    assert!(body.is_empty() || route.style == Style::Upload,
        "body can only be set for Style::Upload request");

    let params = serde_json::to_string(arg)?;
    let config = client.config();
    config.observer().request(route, &params);

    let req = prepare_request(client, route, &params, ParamsType::Json, range_start, range_end);
    let body = match route.style {
        Style::Rpc => Bytes::from(params),
        Style::Upload => body,
        Style::Download => Bytes::new(),
    };

    let HttpRequestResultRaw { status, result_header, content_length, mut body } =
        client.execute(req, body).await.map_err(Error::typed)?;

    // A ranged download is answered with 206 Partial Content.
    let ranged = route.style == Style::Download
        && (range_start.is_some() || range_end.is_some());
    if status != 200 && !(ranged && status == 206) {
        let response = body_to_string(&mut body).await.map_err(Error::typed)?;
        config.observer().response(route, status, Some(&response));
        return Err(classify_error(status, response));
    }

    match route.style {
        Style::Rpc | Style::Upload => {
            if let Some(header) = result_header {
                return Err(Error::UnexpectedResponse(format!(
                    "unexpected response in header, expected it in the body: {header}")));
            }
            let response = body_to_string(&mut body).await.map_err(Error::typed)?;
            config.observer().response(route, status, Some(&response));
            Ok(HttpRequestResult {
                result: serde_json::from_str(&response)?,
                content_length,
                body: None,
            })
        }
        Style::Download => {
            let Some(header) = result_header else {
                return Err(Error::UnexpectedResponse(
                    "expected a Dropbox-API-Result header".to_owned()));
            };
            config.observer().response(route, status, Some(&header));
            Ok(HttpRequestResult {
                result: serde_json::from_str(&header)?,
                content_length,
                body: Some(body),
            })
        }
    }
}

/// Call a route which has no content stream in either direction.
pub async fn request<A, S, E, C>(
    client: &C,
    route: &Route<A, S, E>,
    arg: &A,
) -> Result<S, Error<E>>
where
    A: Serialize,
    S: DeserializeOwned,
    E: DeserializeOwned,
    C: HttpClient,
{
    request_with_body(client, route, arg, Bytes::new(), None, None)
        .await
        .map(|HttpRequestResult { result, .. }| result)
}

/// Replaces any non-ASCII characters (and 0x7f) with JSON-style '\uXXXX' sequence. Otherwise,
/// returns it unmodified without any additional allocation or copying.
pub(crate) fn json_escape_header(s: &str) -> Cow<'_, str> {
    // RFC 7230 requires escaping ASCII DEL (0x7F) too, so str::is_ascii() can't be used to
    // skip this for the common all-ASCII case.

    let mut out = Cow::Borrowed(s);
    for (i, c) in s.char_indices() {
        if !c.is_ascii() || c == '\x7f' {
            let mstr = match out {
                Cow::Borrowed(_) => {
                    // Still borrowed means everything up to here was ASCII.
                    out = Cow::Owned(s[0..i].to_owned());
                    out.to_mut()
                }
                Cow::Owned(ref mut m) => m,
            };
            // Characters outside the BMP become a UTF-16 surrogate pair, as in JSON.
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(mstr, "\\u{unit:04x}");
            }
        } else if let Cow::Owned(ref mut o) = out {
            o.push(c);
        }
    }
    out
}

/// Given an async HttpRequestResult which was created from a *sync* HttpClient, convert it to the
/// sync HttpRequestResult by cracking open the SyncReadAdapter in the body.
///
/// This is ONLY safe if the result was created by a sync HttpClient, so we require it as an
/// argument just to be extra careful.
#[inline]
pub(crate) fn unwrap_async_result<T>(r: HttpRequestResult<T>, _client: &impl sync::HttpClient) -> sync::HttpRequestResult<T> {
    match r.body {
        Some(async_read) => {
            let p: *mut (dyn AsyncRead + Unpin + Send) = Box::into_raw(async_read);
            // SAFETY: the only body value an async HttpRequestResult created for a sync client
            // can be is a SyncReadAdapter.
            let adapter = unsafe {
                Box::<SyncReadAdapter>::from_raw(p as *mut SyncReadAdapter)
            };
            sync::HttpRequestResult {
                result: r.result,
                content_length: r.content_length,
                body: Some(adapter.inner),
            }
        }
        None => sync::HttpRequestResult {
            result: r.result,
            content_length: r.content_length,
            body: None,
        }
    }
}

#[inline]
pub(crate) fn unwrap_async_body<T, E>(
    f: impl Future<Output = Result<HttpRequestResult<T>, Error<E>>>,
    client: &impl sync::HttpClient,
) -> Result<sync::HttpRequestResult<T>, Error<E>> {
    unwrap_async(f).map(|r| unwrap_async_result(r, client))
}

#[inline]
pub(crate) fn unwrap_async<T, E>(
    f: impl Future<Output = Result<T, Error<E>>>,
) -> Result<T, Error<E>> {
    f.now_or_never().expect("sync future should resolve immediately")
}
