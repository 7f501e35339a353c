use bytes::Bytes;
use futures::io::Cursor;
use dropbox_sdk::async_routes::check;
use dropbox_sdk::async_client_trait::*;
use dropbox_sdk::client_trait_common::HttpRequest;
use dropbox_sdk::config::Config;
use dropbox_sdk::Error;

mod common;

struct TestAsyncClient {
    config: Config,
}

struct TestRequest {
    url: String,
}

impl HttpClient for TestAsyncClient {
    type Request = TestRequest;

    async fn execute(&self, request: Self::Request, body: Bytes) -> Result<HttpRequestResultRaw, Error> {
        match request.url.as_str() {
            "https://api.dropboxapi.com/2/check/user" => {
                let arg = serde_json::from_slice::<check::EchoArg>(&body)?;

                // ensure the future isn't immediately ready
                tokio::task::yield_now().await;

                Ok(HttpRequestResultRaw {
                    status: 200,
                    result_header: None,
                    content_length: None,
                    body: Box::new(Cursor::new(format!(r#"{{"result":"{}"}}"#, arg.query).into_bytes())),
                })
            }
            _ => Err(Error::HttpClient(Box::new(std::io::Error::other(format!("unhandled URL {}", request.url))))),
        }
    }

    fn new_request(&self, url: &str) -> Self::Request {
        TestRequest{ url: url.to_owned() }
    }

    fn config(&self) -> &Config {
        &self.config
    }
}

impl UserAuthClient for TestAsyncClient {}

impl HttpRequest for TestRequest {
    fn set_header(self, _name: &str, _value: &str) -> Self {
        self
    }
}

#[tokio::test]
async fn test_async_client() {
    let client = TestAsyncClient { config: Config::new().with_token("token") };
    let req = check::EchoArg::default().with_query("foobar".to_owned());
    let resp = check::user(&client, &req).await.expect("request must not fail");
    if resp.result != req.query {
        panic!("response mismatch");
    }
}

#[tokio::test]
async fn test_sync_client_on_async_routes() {
    use common::{Canned, CannedClient};
    use futures::AsyncReadExt;
    use dropbox_sdk::async_routes::files;

    let client = CannedClient::with_token();
    client.push(Canned::download(
        r#"{"name":"a.txt","id":"id:a","client_modified":"2025-01-01T00:00:00Z",
            "server_modified":"2025-01-01T00:00:00Z","rev":"0123456789","size":5}"#,
        b"hello"));

    let mut result = files::download(&client, &files::DownloadArg::new("/a.txt".to_owned()), None, None)
        .await
        .expect("download must not fail");
    assert_eq!("a.txt", result.result.name);
    assert_eq!(Some(5), result.content_length);

    let mut content = String::new();
    result.body.as_mut().expect("download must have a body")
        .read_to_string(&mut content)
        .await
        .unwrap();
    assert_eq!("hello", content);
}
