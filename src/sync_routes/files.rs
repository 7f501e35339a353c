// Copyright (c) 2025 Dropbox, Inc.

use bytes::Bytes;
pub use crate::types::files::*;
pub use crate::types::dbx_async::{PollArg, PollError};
use crate::client_helpers::{request, request_with_body, unwrap_async, unwrap_async_body};
use crate::client_trait::HttpRequestResult;
use crate::route_table::files as routes;

/// Copy multiple files or folders to different locations at once in the user's Dropbox. This
/// route will either finish synchronously, or return a job ID and do the async copy job in
/// background. Please use [`copy_batch_check_v2()`] to check the job status.
pub fn copy_batch_v2(
    client: &impl crate::client_trait::UserAuthClient,
    arg: &RelocationBatchArgBase,
) -> Result<RelocationBatchV2Launch, crate::Error<crate::NoError>> {
    unwrap_async(request(client, &routes::COPY_BATCH_V2, arg))
}

/// Returns the status of an asynchronous job for [`copy_batch_v2()`]. It returns list of results
/// for each entry.
pub fn copy_batch_check_v2(
    client: &impl crate::client_trait::UserAuthClient,
    arg: &PollArg,
) -> Result<RelocationBatchV2JobStatus, crate::Error<PollError>> {
    unwrap_async(request(client, &routes::COPY_BATCH_CHECK_V2, arg))
}

/// Delete the file or folder at a given path. If the path is a folder, all its contents will be
/// deleted too.
pub fn delete_v2(
    client: &impl crate::client_trait::UserAuthClient,
    arg: &DeleteArg,
) -> Result<DeleteResult, crate::Error<DeleteError>> {
    unwrap_async(request(client, &routes::DELETE_V2, arg))
}

/// Download a file from a user's Dropbox.
///
/// The file's metadata comes back as the result; its content is the body stream. `range_start`
/// and `range_end` request only part of the file.
pub fn download(
    client: &impl crate::client_trait::UserAuthClient,
    arg: &DownloadArg,
    range_start: Option<u64>,
    range_end: Option<u64>,
) -> Result<HttpRequestResult<FileMetadata>, crate::Error<DownloadError>> {
    unwrap_async_body(
        request_with_body(client, &routes::DOWNLOAD, arg, Bytes::new(), range_start, range_end),
        client)
}

/// Returns the metadata for a file or folder. Metadata for the root folder is unsupported.
pub fn get_metadata(
    client: &impl crate::client_trait::UserAuthClient,
    arg: &GetMetadataArg,
) -> Result<Metadata, crate::Error<GetMetadataError>> {
    unwrap_async(request(client, &routes::GET_METADATA, arg))
}

/// Starts returning the contents of a folder. If the result's
/// [`ListFolderResult::has_more`] field is `true`, call [`list_folder_continue()`] with the
/// returned [`ListFolderResult::cursor`] to retrieve more entries.
pub fn list_folder(
    client: &impl crate::client_trait::UserAuthClient,
    arg: &ListFolderArg,
) -> Result<ListFolderResult, crate::Error<ListFolderError>> {
    unwrap_async(request(client, &routes::LIST_FOLDER, arg))
}

/// Once a cursor has been retrieved from [`list_folder()`], use this to paginate through all
/// files and retrieve updates to the folder.
pub fn list_folder_continue(
    client: &impl crate::client_trait::UserAuthClient,
    arg: &ListFolderContinueArg,
) -> Result<ListFolderResult, crate::Error<ListFolderContinueError>> {
    unwrap_async(request(client, &routes::LIST_FOLDER_CONTINUE, arg))
}

/// A way to quickly get a cursor for the folder's state. Unlike [`list_folder()`], this doesn't
/// return any entries. This endpoint is for app which only needs to know about new files and
/// modifications and doesn't need to know about files that already exist in Dropbox.
pub fn list_folder_get_latest_cursor(
    client: &impl crate::client_trait::UserAuthClient,
    arg: &ListFolderArg,
) -> Result<ListFolderGetLatestCursorResult, crate::Error<ListFolderError>> {
    unwrap_async(request(client, &routes::LIST_FOLDER_GET_LATEST_CURSOR, arg))
}

/// A longpoll endpoint to wait for changes on an account. In conjunction with
/// [`list_folder_continue()`], this call gives you a low-latency way to monitor an account for
/// file changes. The connection will block until there are changes available or a timeout
/// occurs. This endpoint is useful mostly for client-side apps.
pub fn list_folder_longpoll(
    client: &impl crate::client_trait::NoauthClient,
    arg: &ListFolderLongpollArg,
) -> Result<ListFolderLongpollResult, crate::Error<ListFolderLongpollError>> {
    unwrap_async(request(client, &routes::LIST_FOLDER_LONGPOLL, arg))
}

/// Create a new file with the contents provided in the request. Do not use this to upload a file
/// larger than 150 MiB.
pub fn upload(
    client: &impl crate::client_trait::UserAuthClient,
    arg: &CommitInfo,
    body: &[u8],
) -> Result<FileMetadata, crate::Error<UploadError>> {
    unwrap_async(request_with_body(
        client, &routes::UPLOAD, arg, Bytes::copy_from_slice(body), None, None))
        .map(|r| r.result)
}
