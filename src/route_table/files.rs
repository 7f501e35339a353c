// Copyright (c) 2025 Dropbox, Inc.

use crate::NoError;
use crate::client_trait_common::{Auth, Endpoint, Style};
use crate::route::{Route, RouteDescriptor};
use crate::types::dbx_async::{PollArg, PollError};
use crate::types::files::*;

/// Copy multiple files or folders to different locations at once in the user's Dropbox.
pub const COPY_BATCH_V2: Route<RelocationBatchArgBase, RelocationBatchV2Launch, NoError> =
    Route::rpc("files", "copy_batch_v2", Auth::User);

/// Returns the status of an asynchronous job for `copy_batch_v2`.
pub const COPY_BATCH_CHECK_V2: Route<PollArg, RelocationBatchV2JobStatus, PollError> =
    Route::rpc("files", "copy_batch/check_v2", Auth::User);

/// Delete the file or folder at a given path.
pub const DELETE_V2: Route<DeleteArg, DeleteResult, DeleteError> =
    Route::rpc("files", "delete_v2", Auth::User);

/// Download a file from a user's Dropbox.
pub const DOWNLOAD: Route<DownloadArg, FileMetadata, DownloadError> =
    Route::download("files", "download", Auth::User);

/// Returns the metadata for a file or folder.
pub const GET_METADATA: Route<GetMetadataArg, Metadata, GetMetadataError> =
    Route::rpc("files", "get_metadata", Auth::User);

/// Starts returning the contents of a folder.
pub const LIST_FOLDER: Route<ListFolderArg, ListFolderResult, ListFolderError> =
    Route::rpc("files", "list_folder", Auth::User);

/// Once a cursor has been retrieved from `list_folder`, use this to paginate through all files
/// and retrieve updates to the folder.
pub const LIST_FOLDER_CONTINUE: Route<ListFolderContinueArg, ListFolderResult, ListFolderContinueError> =
    Route::rpc("files", "list_folder/continue", Auth::User);

/// A way to quickly get a cursor for the folder's state.
pub const LIST_FOLDER_GET_LATEST_CURSOR: Route<ListFolderArg, ListFolderGetLatestCursorResult, ListFolderError> =
    Route::rpc("files", "list_folder/get_latest_cursor", Auth::User);

/// A longpoll endpoint to wait for changes on an account. The cursor is the credential here, so
/// the request carries no authorization header.
pub const LIST_FOLDER_LONGPOLL: Route<ListFolderLongpollArg, ListFolderLongpollResult, ListFolderLongpollError> =
    Route::new(Endpoint::Notify, "files", "list_folder/longpoll", Style::Rpc, Auth::Noauth);

/// Create a new file with the contents provided in the request.
pub const UPLOAD: Route<CommitInfo, FileMetadata, UploadError> =
    Route::upload("files", "upload", Auth::User);

pub const ALL: &[RouteDescriptor] = &[
    COPY_BATCH_V2.descriptor,
    COPY_BATCH_CHECK_V2.descriptor,
    DELETE_V2.descriptor,
    DOWNLOAD.descriptor,
    GET_METADATA.descriptor,
    LIST_FOLDER.descriptor,
    LIST_FOLDER_CONTINUE.descriptor,
    LIST_FOLDER_GET_LATEST_CURSOR.descriptor,
    LIST_FOLDER_LONGPOLL.descriptor,
    UPLOAD.descriptor,
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_route_names_unique() {
        let mut paths = ALL.iter().map(RouteDescriptor::to_string).collect::<Vec<_>>();
        paths.sort();
        paths.dedup();
        assert_eq!(ALL.len(), paths.len());
    }

    #[test]
    fn test_hosts_follow_style() {
        for route in ALL {
            let expected = match (route.style, route.name) {
                (_, "list_folder/longpoll") => Endpoint::Notify,
                (Style::Rpc, _) => Endpoint::Api,
                (Style::Upload | Style::Download, _) => Endpoint::Content,
            };
            assert_eq!(expected, route.endpoint, "{route}");
        }
        assert_eq!(Auth::Noauth, LIST_FOLDER_LONGPOLL.descriptor.auth);
    }
}
