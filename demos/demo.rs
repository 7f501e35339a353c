#![deny(rust_2018_idioms)]

//! This example illustrates a few basic Dropbox API operations with the blocking client: getting
//! an OAuth2 token with PKCE, listing the contents of a folder recursively, and fetching a file
//! given its path.

use std::collections::VecDeque;
use std::env;
use std::io::{self, Read, Write};
use dropbox_sdk::default_client::{NoauthDefaultClient, UserAuthDefaultClient};
use dropbox_sdk::files;
use dropbox_sdk::oauth2::{
    ClientAuth, Oauth2AuthorizeUrlBuilder, Oauth2Type, PkceCode, TokenAccessType,
};

fn prompt_for_token() -> String {
    let client_id = env::var("DBX_CLIENT_ID").unwrap_or_else(|_| {
        eprintln!("Enter your app's client ID (app key): ");
        let mut id = String::new();
        io::stdin().read_line(&mut id).unwrap();
        id.trim().to_owned()
    });

    let pkce = PkceCode::new();
    let flow = Oauth2Type::PKCE(pkce.clone());
    let url = Oauth2AuthorizeUrlBuilder::new(&client_id, &flow)
        .token_access_type(TokenAccessType::Online)
        .build();
    eprintln!("Open this URL in your browser:");
    eprintln!("{}", url);
    eprintln!();
    eprintln!("Then paste the code here: ");

    let mut auth_code = String::new();
    io::stdin().read_line(&mut auth_code).unwrap();
    eprintln!();

    eprintln!("requesting OAuth2 token");
    match dropbox_sdk::oauth2::oauth2_token_from_authorization_code(
        &NoauthDefaultClient::default(),
        &client_id,
        ClientAuth::Pkce(&pkce),
        auth_code.trim(),
        None)
    {
        Ok(token) => {
            eprintln!("got token");

            // This is where you'd save the token somewhere so you don't need to do this dance
            // again.

            token.access_token
        }
        Err(e) => {
            panic!("Error getting OAuth2 token: {}", e);
        }
    }
}

fn main() {
    env_logger::init();

    // Let the user pass the token in an environment variable, or prompt them if that's not found.
    let token = env::var("DBX_OAUTH_TOKEN").unwrap_or_else(|_| prompt_for_token());
    let client = UserAuthDefaultClient::new(token);

    if let Some(path) = env::args().nth(1) {
        eprintln!("downloading file {}", path);
        eprintln!();
        match files::download(&client, &files::DownloadArg::new(path), None, None) {
            Ok(download_result) => {
                let mut body = download_result.body.expect("no body received!");
                let mut buf = [0u8; 4096];
                loop {
                    match body.read(&mut buf) {
                        Ok(0) => { break; }
                        Ok(len) => {
                            io::stdout().write_all(&buf[0..len]).unwrap();
                        }
                        Err(e) => panic!("read error: {}", e)
                    }
                }
            }
            Err(dropbox_sdk::Error::Api(e)) => {
                eprintln!("Download error: {}", e.error);
            }
            Err(e) => {
                eprintln!("Failed to make the request: {}", e);
            }
        }
    } else {
        eprintln!("listing all files");
        match list_directory(&client, "/", true) {
            Ok(iterator) => {
                for entry_result in iterator {
                    match entry_result {
                        Ok(files::Metadata::Folder(entry)) => {
                            println!("Folder: {}", entry.path_display.unwrap_or(entry.name));
                        }
                        Ok(files::Metadata::File(entry)) => {
                            println!("File: {}", entry.path_display.unwrap_or(entry.name));
                        }
                        Ok(other) => {
                            eprintln!("unexpected entry: {:?}", other);
                        }
                        Err(e) => {
                            eprintln!("Error from files/list_folder_continue: {}", e);
                            break;
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("Error from files/list_folder: {}", e);
            }
        }
    }
}

fn list_directory<'a>(client: &'a UserAuthDefaultClient, path: &str, recursive: bool)
    -> Result<DirectoryIterator<'a>, dropbox_sdk::Error<files::ListFolderError>>
{
    assert!(path.starts_with('/'), "path needs to be absolute (start with a '/')");
    // The root folder is the empty string. All other paths need to start with '/'.
    let path = if path == "/" { String::new() } else { path.to_owned() };
    let result = files::list_folder(
        client,
        &files::ListFolderArg::new(path).with_recursive(recursive))?;
    Ok(DirectoryIterator {
        client,
        cursor: result.has_more.then_some(result.cursor),
        buffer: result.entries.into(),
    })
}

struct DirectoryIterator<'a> {
    client: &'a UserAuthDefaultClient,
    buffer: VecDeque<files::Metadata>,
    cursor: Option<String>,
}

impl Iterator for DirectoryIterator<'_> {
    type Item = Result<files::Metadata, dropbox_sdk::Error<files::ListFolderContinueError>>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.buffer.is_empty() {
            let cursor = self.cursor.take()?;
            match files::list_folder_continue(self.client, &files::ListFolderContinueArg::new(cursor)) {
                Ok(result) => {
                    self.buffer.extend(result.entries);
                    if result.has_more {
                        self.cursor = Some(result.cursor);
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
        self.buffer.pop_front().map(Ok)
    }
}
