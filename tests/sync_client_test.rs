use std::io::Cursor;
use dropbox_sdk::sync_routes::check;
use dropbox_sdk::client_trait::*;
use dropbox_sdk::client_trait_common::HttpRequest;
use dropbox_sdk::config::Config;
use dropbox_sdk::Error;

struct TestSyncClient {
    config: Config,
}

struct TestRequest {
    url: String,
}

impl HttpClient for TestSyncClient {
    type Request = TestRequest;

    fn execute(&self, request: Self::Request, body: &[u8]) -> Result<HttpRequestResultRaw, Error> {
        match request.url.as_str() {
            "https://api.dropboxapi.com/2/check/user" => {
                let arg = serde_json::from_slice::<check::EchoArg>(body)?;
                Ok(HttpRequestResultRaw {
                    status: 200,
                    result_header: None,
                    content_length: None,
                    body: Box::new(Cursor::new(format!(r#"{{"result":"{}"}}"#, arg.query))),
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

impl UserAuthClient for TestSyncClient {}

impl HttpRequest for TestRequest {
    fn set_header(self, _name: &str, _value: &str) -> Self {
        self
    }
}

#[test]
fn test_sync_client() {
    let client = TestSyncClient { config: Config::new().with_token("token") };
    let req = check::EchoArg::default().with_query("echo-me".to_owned());
    let resp = check::user(&client, &req).expect("request must not fail");
    if resp.result != req.query {
        panic!("response mismatch");
    }
}

#[test]
fn test_unhandled_url_is_client_error() {
    let client = TestSyncClient {
        config: Config::new()
            .with_token("token")
            .with_url_generator(|_endpoint, namespace, route| {
                format!("https://localhost/{namespace}/{route}")
            }),
    };
    let req = check::EchoArg::default().with_query("foobar".to_owned());
    match check::user(&client, &req) {
        Err(Error::HttpClient(e)) => {
            assert_eq!("unhandled URL https://localhost/check/user", e.to_string());
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
