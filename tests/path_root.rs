use dropbox_sdk::common::{PathRoot, PathRootError};
use dropbox_sdk::default_client::UserAuthDefaultClient;
use dropbox_sdk::files::{self, ListFolderArg};
use dropbox_sdk::{users, ApiError};

fn client() -> UserAuthDefaultClient {
    let token = std::env::var("DBX_OAUTH_TOKEN").expect("DBX_OAUTH_TOKEN must be set");
    UserAuthDefaultClient::new(token)
}

#[test]
#[ignore] // requires a pre-configured app token; should be run separately
fn own_root_namespace() {
    let mut client = client();
    let account = users::get_current_account(&client).expect("get_current_account");
    let nsid = account.root_info.root_namespace_id()
        .expect("account must have a root namespace")
        .to_owned();

    client.set_path_root(&PathRoot::Root(nsid)).unwrap();
    match files::list_folder(&client, &ListFolderArg::new(String::new())) {
        Ok(_) => (),
        // App-folder apps can't use a path root at all.
        Err(dropbox_sdk::Error::BadRequest(msg)) if msg.contains("Path root is not supported for sandbox app") => (),
        otherwise => panic!("wrong result: {:?}", otherwise),
    }
}

#[test]
#[ignore] // requires a pre-configured app token; should be run separately
fn invalid_path_root() {
    let mut client = client();
    client.set_path_root(&PathRoot::NamespaceId("1".to_owned())).unwrap();
    match files::list_folder(&client, &ListFolderArg::new("/".to_owned())) {
        // If the oauth token is for an app which only has access to its app folder, then the path
        // root cannot be specified.
        Err(dropbox_sdk::Error::BadRequest(msg)) if msg.contains("Path root is not supported for sandbox app") => (),

        // A "whole dropbox" app is refused access to the bogus namespace. A stale but real root
        // would get `invalid_root` with the new root info instead.
        Err(dropbox_sdk::Error::UnexpectedHttpError { code: 422, response, .. }) => {
            let error = serde_json::from_str::<ApiError<PathRootError>>(&response)
                .unwrap_or_else(|e| panic!("invalid path root error {:?}: {}", response, e));
            assert_eq!(PathRootError::NoPermission, error.error, "{}", error.error_summary);
        }

        // Any other result is a bug.
        otherwise => panic!("wrong result: {:?}", otherwise),
    }
}
