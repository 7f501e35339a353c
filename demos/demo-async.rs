#![deny(rust_2018_idioms)]

//! This example illustrates a few basic Dropbox API operations with the async client: getting an
//! OAuth2 token with PKCE, listing the contents of a folder recursively, fetching a file given its
//! path, and checking account details.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::compat::FuturesAsyncReadCompatExt;
use dropbox_sdk::default_async_client::{NoauthDefaultClient, UserAuthDefaultClient};
use dropbox_sdk::async_routes::{files, users};
use dropbox_sdk::oauth2::{self, ClientAuth, Oauth2AuthorizeUrlBuilder, Oauth2Type, PkceCode};

enum Operation {
    Usage,
    Account,
    List(String),
    Download(String),
    Stat(String),
}

fn parse_args() -> Operation {
    let mut args = std::env::args().skip(1);
    let (Some(flag), path) = (args.next(), args.next()) else {
        return Operation::Usage;
    };
    match (flag.as_str(), path) {
        ("--account", None) => Operation::Account,
        ("--list", Some(path)) if path.starts_with('/') => Operation::List(path),
        ("--download", Some(path)) if path.starts_with('/') => Operation::Download(path),
        ("--stat", Some(path)) if path.starts_with('/') => Operation::Stat(path),
        ("--help" | "-h", _) => Operation::Usage,
        (flag, path) => {
            eprintln!("Unrecognized arguments {flag:?} {path:?}");
            eprintln!();
            Operation::Usage
        }
    }
}

async fn prompt_for_token() -> String {
    let client_id = std::env::var("DBX_CLIENT_ID").expect("DBX_CLIENT_ID must be set");
    let pkce = PkceCode::new();
    let flow = Oauth2Type::PKCE(pkce.clone());
    let url = Oauth2AuthorizeUrlBuilder::new(&client_id, &flow).build();
    eprintln!("Open this URL in your browser:");
    eprintln!("{url}");
    eprintln!();
    eprintln!("Then paste the code here: ");

    let mut auth_code = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut auth_code).await.unwrap();

    let token = oauth2::oauth2_token_from_authorization_code_async(
        &NoauthDefaultClient::default(),
        &client_id,
        ClientAuth::Pkce(&pkce),
        auth_code.trim(),
        None,
    ).await.unwrap_or_else(|e| panic!("Error getting OAuth2 token: {e}"));

    eprintln!("Next time set this environment variable to reuse this authorization:");
    eprintln!("  DBX_OAUTH_TOKEN={}", token.access_token);
    token.access_token
}

async fn list(client: &UserAuthDefaultClient, mut path: String) {
    eprintln!("Listing recursively: {path}");

    // The root folder is the empty string. All other paths need to start with '/'.
    if path == "/" {
        path.clear();
    }

    let mut result = match files::list_folder(
        client,
        &files::ListFolderArg::new(path).with_recursive(true),
    ).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error from files/list_folder: {e}");
            return;
        }
    };

    let mut num_entries = result.entries.len();
    let mut num_pages = 1;
    loop {
        for entry in result.entries {
            match entry {
                files::Metadata::Folder(entry) => {
                    println!("Folder: {}", entry.path_display.unwrap_or(entry.name));
                }
                files::Metadata::File(entry) => {
                    println!("File: {} ({} bytes)",
                        entry.path_display.unwrap_or(entry.name), entry.size);
                }
                other => eprintln!("unexpected entry: {other:?}"),
            }
        }

        if !result.has_more {
            break;
        }

        result = match files::list_folder_continue(
            client,
            &files::ListFolderContinueArg::new(result.cursor),
        ).await {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error from files/list_folder_continue: {e}");
                break;
            }
        };
        num_pages += 1;
        num_entries += result.entries.len();
    }

    eprintln!("{num_entries} entries from {num_pages} result pages");
}

async fn download(client: &UserAuthDefaultClient, path: String) {
    eprintln!("Copying file to stdout: {path}");
    eprintln!();

    let result = match files::download(client, &files::DownloadArg::new(path), None, None).await {
        Ok(result) => result,
        Err(dropbox_sdk::Error::Api(e)) => {
            eprintln!("files/download failed: {}", e.error);
            return;
        }
        Err(e) => {
            eprintln!("Error from files/download: {e}");
            return;
        }
    };

    eprintln!("{} rev {}", result.result.name, result.result.rev);
    let mut body = result.body.expect("there must be a response body").compat();
    match tokio::io::copy(&mut body, &mut tokio::io::stdout()).await {
        Ok(n) => eprintln!("Downloaded {n} bytes"),
        Err(e) => eprintln!("I/O error: {e}"),
    }
}

async fn account(client: &UserAuthDefaultClient) {
    match users::get_current_account(client).await {
        Ok(account) => {
            println!("{} <{}>", account.name.display_name, account.email);
            println!("account type: {}", account.account_type);
            if let Some(nsid) = account.root_info.root_namespace_id() {
                println!("root namespace: {nsid}");
            }
        }
        Err(e) => {
            eprintln!("Error from users/get_current_account: {e}");
            return;
        }
    }
    match users::get_space_usage(client).await {
        Ok(usage) => match usage.allocation {
            users::SpaceAllocation::Individual(a) => {
                println!("using {} of {} bytes", usage.used, a.allocated);
            }
            users::SpaceAllocation::Team(t) => {
                println!("using {} bytes; team uses {} of {} bytes", usage.used, t.used, t.allocated);
            }
            other => println!("using {} bytes ({other})", usage.used),
        },
        Err(e) => eprintln!("Error from users/get_space_usage: {e}"),
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let op = parse_args();

    if let Operation::Usage = op {
        eprintln!("usage: {} [option]", std::env::args().next().unwrap());
        eprintln!("    options:");
        eprintln!("        --help | -h          view this text");
        eprintln!("        --account            show the account and its space usage");
        eprintln!("        --download <path>    copy the contents of <path> to stdout");
        eprintln!("        --list <path>        recursively list all files under <path>");
        eprintln!("        --stat <path>        list all metadata of <path>");
        eprintln!();
        eprintln!("    If a Dropbox OAuth token is given in the environment variable");
        eprintln!("    DBX_OAUTH_TOKEN, it will be used, otherwise you will be prompted for");
        eprintln!("    authentication interactively, using the app key in DBX_CLIENT_ID.");
        std::process::exit(1);
    }

    let token = match std::env::var("DBX_OAUTH_TOKEN") {
        Ok(token) => token,
        Err(_) => prompt_for_token().await,
    };
    let client = UserAuthDefaultClient::new(token);

    match op {
        Operation::Usage => (), // handled above
        Operation::Account => account(&client).await,
        Operation::Download(path) => download(&client, path).await,
        Operation::List(path) => list(&client, path).await,
        Operation::Stat(path) => {
            eprintln!("listing metadata for: {path}");
            let arg = files::GetMetadataArg::new(path).with_include_deleted(true);
            match files::get_metadata(&client, &arg).await {
                Ok(result) => println!("{result:#?}"),
                Err(e) => eprintln!("Error from files/get_metadata: {e}"),
            }
        }
    }
}
