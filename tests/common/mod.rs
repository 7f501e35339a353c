#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use dropbox_sdk::client_trait::*;
use dropbox_sdk::client_trait_common::HttpRequest;
use dropbox_sdk::config::Config;
use dropbox_sdk::Error;
use dropbox_sdk::files;
use threadpool::ThreadPool;

/// A response to hand back for the next request.
#[derive(Debug, Clone)]
pub struct Canned {
    pub status: u16,
    pub body: Vec<u8>,
    pub result_header: Option<String>,
}

impl Canned {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Canned { status, body: body.as_bytes().to_vec(), result_header: None }
    }

    pub fn download(result: &str, content: &[u8]) -> Self {
        Canned { status: 200, body: content.to_vec(), result_header: Some(result.to_owned()) }
    }
}

/// What the client was asked to send.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body must be JSON")
    }
}

/// A client which serves canned responses in order and records every request it makes.
/// It claims every auth type; the route being called decides which credential is sent.
pub struct CannedClient {
    config: Config,
    responses: Mutex<VecDeque<Canned>>,
    requests: Mutex<Vec<Recorded>>,
}

impl CannedClient {
    pub fn new(config: Config) -> Self {
        CannedClient {
            config,
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_token() -> Self {
        Self::new(Config::new().with_token("test-token"))
    }

    pub fn push(&self, response: Canned) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests.lock().unwrap().last().cloned().expect("no request was made")
    }
}

pub struct CannedRequest {
    url: String,
    headers: Vec<(String, String)>,
}

impl HttpRequest for CannedRequest {
    fn set_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }
}

impl HttpClient for CannedClient {
    type Request = CannedRequest;

    fn execute(&self, request: Self::Request, body: &[u8]) -> Result<HttpRequestResultRaw, Error> {
        self.requests.lock().unwrap().push(Recorded {
            url: request.url.clone(),
            headers: request.headers,
            body: body.to_vec(),
        });
        let Some(canned) = self.responses.lock().unwrap().pop_front() else {
            return Err(Error::HttpClient(Box::new(std::io::Error::other(
                format!("no canned response for {}", request.url)))));
        };
        Ok(HttpRequestResultRaw {
            status: canned.status,
            result_header: canned.result_header,
            content_length: Some(canned.body.len() as u64),
            body: Box::new(Cursor::new(canned.body)),
        })
    }

    fn new_request(&self, url: &str) -> Self::Request {
        CannedRequest { url: url.to_owned(), headers: vec![] }
    }

    fn config(&self) -> &Config {
        &self.config
    }
}

impl NoauthClient for CannedClient {}
impl UserAuthClient for CannedClient {}
impl TeamAuthClient for CannedClient {}
impl AppAuthClient for CannedClient {}

/// Upload `num_files` files of `size` bytes each into `path`, retrying when rate-limited.
/// Returns functions giving each file's path and expected content.
pub fn create_files(
    client: Arc<impl UserAuthClient + Send + Sync + 'static>,
    path: &'static str,
    num_files: u32,
    size: usize,
) -> (Box<impl Fn(u32) -> String>, Box<impl Fn(u32) -> Vec<u8>>) {
    let threadpool = ThreadPool::new(20);

    let file_bytes = move |i| format!("This is file {}.\n", i)
        .into_bytes()
        .into_iter()
        .cycle()
        .take(size)
        .collect::<Vec<u8>>();
    let file_path = move |i| format!("{}/file{}.txt", path, i);

    println!("Creating {} files in {}", num_files, path);
    for i in 0 .. num_files {
        let c = client.clone();
        threadpool.execute(move || {
            let path = file_path(i);
            let arg = files::CommitInfo::new(path.clone())
                .with_mode(files::WriteMode::Overwrite);
            loop {
                println!("{}: writing", path);
                match files::upload(c.as_ref(), &arg, &file_bytes(i)) {
                    Ok(_) => (),
                    Err(e) if e.retry_after_seconds().is_some() => {
                        let secs = e.retry_after_seconds().unwrap_or(1);
                        println!("{}: rate limited; sleeping {} seconds", path, secs);
                        thread::sleep(Duration::from_secs(u64::from(secs)));
                        continue;
                    }
                    Err(e) => panic!("{}: upload failed: {:?}", path, e),
                }
                println!("{}: done", path);
                break;
            }
        });
    }

    threadpool.join();
    (Box::new(file_path), Box::new(file_bytes))
}

/// Delete `path` if it exists. Uploads recreate it as needed.
pub fn create_clean_folder(client: &impl UserAuthClient, path: &str) {
    println!("Deleting any existing {} folder", path);
    match files::delete_v2(client, &files::DeleteArg::new(path.to_owned())) {
        Ok(_) => (),
        Err(dropbox_sdk::Error::Api(e))
            if matches!(e.error, files::DeleteError::PathLookup(files::LookupError::NotFound)) => (),
        e => panic!("unexpected result when deleting {}: {:?}", path, e),
    }
}
