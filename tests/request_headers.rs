use std::io::Read;
use dropbox_sdk::check::{self, EchoArg};
use dropbox_sdk::client_trait_common::TeamSelect;
use dropbox_sdk::common::PathRoot;
use dropbox_sdk::config::{AppKey, Config};
use dropbox_sdk::files;
use dropbox_sdk::users;

mod common;
use common::{Canned, CannedClient};

const FILE_METADATA: &str = r#"{"name":"ünïcode.txt","id":"id:1","client_modified":"2025-01-01T00:00:00Z",
    "server_modified":"2025-01-01T00:00:00Z","rev":"0123456789","size":11}"#;

#[test]
fn test_rpc_request() {
    let mut config = Config::new()
        .with_token("test-token")
        .with_team_select(TeamSelect::User("dbmid:user".to_owned()));
    config.set_path_root(&PathRoot::NamespaceId("42".to_owned())).unwrap();
    let client = CannedClient::new(config);
    client.push(Canned::ok(r#"{"entries":[],"cursor":"c1","has_more":false}"#));

    let result = files::list_folder(&client, &files::ListFolderArg::new("/dir".to_owned())
        .with_recursive(true))
        .unwrap();
    assert_eq!("c1", result.cursor);

    let req = client.last_request();
    assert_eq!("https://api.dropboxapi.com/2/files/list_folder", req.url);
    assert_eq!(Some("Bearer test-token"), req.header("Authorization"));
    assert_eq!(Some("application/json"), req.header("Content-Type"));
    assert_eq!(Some("dbmid:user"), req.header("Dropbox-API-Select-User"));
    assert_eq!(Some(r#"{".tag":"namespace_id","namespace_id":"42"}"#), req.header("Dropbox-API-Path-Root"));
    assert!(req.header("User-Agent").unwrap().starts_with("Dropbox-SDK-Rust/"));
    assert_eq!(None, req.header("Dropbox-API-Arg"));
    assert_eq!("/dir", req.body_json()["path"]);
    assert_eq!(true, req.body_json()["recursive"]);
}

#[test]
fn test_upload_request() {
    let client = CannedClient::with_token();
    client.push(Canned::ok(FILE_METADATA));

    let content = b"\x00\x01binary\xff\xfe";
    let arg = files::CommitInfo::new("/ünïcode.txt".to_owned())
        .with_mode(files::WriteMode::Overwrite);
    let result = files::upload(&client, &arg, content).unwrap();
    assert_eq!("ünïcode.txt", result.name);

    let req = client.last_request();
    assert_eq!("https://content.dropboxapi.com/2/files/upload", req.url);
    assert_eq!(Some("application/octet-stream"), req.header("Content-Type"));
    assert_eq!(content.as_slice(), req.body.as_slice());

    // The argument travels in a header, made ASCII-safe.
    let header = req.header("Dropbox-API-Arg").unwrap();
    assert!(header.is_ascii(), "{header}");
    assert!(header.contains(r#""path":"/\u00fcn\u00efcode.txt""#), "{header}");
    let decoded = serde_json::from_str::<files::CommitInfo>(header).unwrap();
    assert_eq!(arg, decoded);
}

#[test]
fn test_download_request() {
    let client = CannedClient::with_token();
    client.push(Canned::download(FILE_METADATA, b"hello world"));

    let result = files::download(
        &client, &files::DownloadArg::new("/ünïcode.txt".to_owned()), Some(6), None)
        .unwrap();
    assert_eq!("ünïcode.txt", result.result.name);
    assert_eq!(Some(11), result.content_length);

    let mut content = String::new();
    result.body.expect("download must have a body").read_to_string(&mut content).unwrap();
    assert_eq!("hello world", content);

    let req = client.last_request();
    assert_eq!("https://content.dropboxapi.com/2/files/download", req.url);
    assert_eq!(Some("bytes=6-"), req.header("Range"));
    assert_eq!(
        Some(r#"{"path":"/\u00fcn\u00efcode.txt"}"#),
        req.header("Dropbox-API-Arg"));
    assert!(req.body.is_empty());
}

#[test]
fn test_download_without_result_header() {
    let client = CannedClient::with_token();
    client.push(Canned::ok("content but no result"));
    match files::download(&client, &files::DownloadArg::new("/a".to_owned()), None, None) {
        Err(dropbox_sdk::Error::UnexpectedResponse(_)) => (),
        Err(e) => panic!("unexpected error: {e:?}"),
        Ok(_) => panic!("download without a result header must fail"),
    }
}

#[test]
fn test_ranged_download_partial_content() {
    let client = CannedClient::with_token();
    client.push(Canned {
        status: 206,
        body: b"world".to_vec(),
        result_header: Some(FILE_METADATA.to_owned()),
    });

    let result = files::download(
        &client, &files::DownloadArg::new("/a.txt".to_owned()), Some(6), None)
        .unwrap_or_else(|e| panic!("partial content must succeed: {e:?}"));
    assert_eq!("ünïcode.txt", result.result.name);

    let mut content = String::new();
    result.body.expect("download must have a body").read_to_string(&mut content).unwrap();
    assert_eq!("world", content);
    assert_eq!(Some("bytes=6-"), client.last_request().header("Range"));
}

#[test]
fn test_partial_content_without_range_is_error() {
    let client = CannedClient::with_token();
    client.push(Canned {
        status: 206,
        body: b"world".to_vec(),
        result_header: Some(FILE_METADATA.to_owned()),
    });

    match files::download(&client, &files::DownloadArg::new("/a.txt".to_owned()), None, None) {
        Err(dropbox_sdk::Error::Json(_)) => (),
        Err(e) => panic!("unexpected error: {e:?}"),
        Ok(_) => panic!("206 without a requested range must not succeed"),
    }
}

#[test]
fn test_longpoll_sends_no_credentials() {
    let mut config = Config::new()
        .with_token("test-token")
        .with_team_select(TeamSelect::Admin("dbmid:admin".to_owned()));
    config.set_path_root(&PathRoot::Root("1".to_owned())).unwrap();
    let client = CannedClient::new(config);
    client.push(Canned::ok(r#"{"changes":true,"backoff":30}"#));

    let result = files::list_folder_longpoll(
        &client, &files::ListFolderLongpollArg::new("cursor".to_owned()))
        .unwrap();
    assert!(result.changes);
    assert_eq!(Some(30), result.backoff);

    let req = client.last_request();
    assert_eq!("https://notify.dropboxapi.com/2/files/list_folder/longpoll", req.url);
    assert_eq!(None, req.header("Authorization"));
    assert_eq!(None, req.header("Dropbox-API-Select-Admin"));
    assert_eq!(None, req.header("Dropbox-API-Path-Root"));
    assert_eq!(serde_json::json!({"cursor": "cursor", "timeout": 30}), req.body_json());
}

#[test]
fn test_app_auth() {
    let client = CannedClient::new(Config::new()
        .with_token("ignored")
        .with_app_key(AppKey::new("key", "secret")));
    client.push(Canned::ok(r#"{"result":"ping"}"#));

    let result = check::app(&client, &EchoArg::default().with_query("ping".to_owned())).unwrap();
    assert_eq!("ping", result.result);

    let req = client.last_request();
    assert_eq!("https://api.dropboxapi.com/2/check/app", req.url);
    // base64("key:secret")
    assert_eq!(Some("Basic a2V5OnNlY3JldA=="), req.header("Authorization"));
}

#[test]
fn test_missing_credential_skips_header() {
    let client = CannedClient::new(Config::new());
    client.push(Canned::ok(r#"{"result":"ping"}"#));
    check::user(&client, &EchoArg::default().with_query("ping".to_owned())).unwrap();
    assert_eq!(None, client.last_request().header("Authorization"));
}

#[test]
fn test_no_argument_route() {
    let client = CannedClient::with_token();
    client.push(Canned::ok(r#"{"used": 100, "allocation": {".tag": "individual", "allocated": 1000}}"#));

    let usage = users::get_space_usage(&client).unwrap();
    assert_eq!(100, usage.used);
    match usage.allocation {
        users::SpaceAllocation::Individual(a) => assert_eq!(1000, a.allocated),
        other => panic!("wrong variant: {other:?}"),
    }
    assert_eq!("https://api.dropboxapi.com/2/users/get_space_usage", client.last_request().url);
}

#[test]
fn test_custom_url_generator() {
    let client = CannedClient::new(Config::new()
        .with_token("test-token")
        .with_url_generator(|endpoint, namespace, route| {
            format!("http://localhost:8080/{endpoint:?}/{namespace}/{route}")
        }));
    client.push(Canned::ok(r#"{"result":""}"#));
    check::user(&client, &EchoArg::default()).unwrap();
    assert_eq!("http://localhost:8080/Api/check/user", client.last_request().url);
}

#[test]
fn test_copy_batch_then_check() {
    let client = CannedClient::with_token();
    client.push(Canned::ok(r#"{".tag": "async_job_id", "async_job_id": "job1"}"#));
    client.push(Canned::ok(r#"{".tag": "in_progress"}"#));
    client.push(Canned::ok(r#"{".tag": "complete", "entries": [
        {".tag": "success", "success": {".tag": "folder", "name": "b", "id": "id:b"}}
    ]}"#));

    let arg = files::RelocationBatchArgBase::new(vec![
        files::RelocationPath::new("/a".to_owned(), "/b".to_owned()),
    ]);
    let job_id = match files::copy_batch_v2(&client, &arg).unwrap() {
        files::RelocationBatchV2Launch::AsyncJobId(id) => id,
        other => panic!("unexpected launch: {other:?}"),
    };
    assert_eq!("job1", job_id);

    let poll = dropbox_sdk::dbx_async::PollArg::new(job_id);
    assert_eq!(files::RelocationBatchV2JobStatus::InProgress,
        files::copy_batch_check_v2(&client, &poll).unwrap());
    match files::copy_batch_check_v2(&client, &poll).unwrap() {
        files::RelocationBatchV2JobStatus::Complete(result) => {
            assert_eq!(1, result.entries.len());
            match &result.entries[0] {
                files::RelocationBatchResultEntry::Success(m) => assert_eq!(Some("b"), m.name()),
                other => panic!("unexpected entry: {other:?}"),
            }
        }
        other => panic!("unexpected status: {other:?}"),
    }

    let requests = client.requests();
    assert_eq!(3, requests.len());
    assert_eq!("https://api.dropboxapi.com/2/files/copy_batch_v2", requests[0].url);
    assert_eq!("https://api.dropboxapi.com/2/files/copy_batch/check_v2", requests[2].url);
    assert_eq!(serde_json::json!({"async_job_id": "job1"}), requests[2].body_json());
}
