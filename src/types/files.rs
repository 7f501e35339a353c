// Copyright (c) 2025 Dropbox, Inc.

//! Types from the `files` namespace.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_longpoll_timeout() -> u64 {
    30
}

fn is_false(b: &bool) -> bool {
    !b
}

tagged_union! {
    /// Metadata for a file, folder, or deleted entry.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Metadata: open {
        "file" => File(flat FileMetadata),
        "folder" => Folder(flat FolderMetadata),
        "deleted" => Deleted(flat DeletedMetadata),
    }
}

impl Metadata {
    /// The last component of the path, whatever kind of entry this is.
    pub fn name(&self) -> Option<&str> {
        match self {
            Metadata::File(f) => Some(&f.name),
            Metadata::Folder(f) => Some(&f.name),
            Metadata::Deleted(d) => Some(&d.name),
            Metadata::Other => None,
        }
    }

    /// The cased path to be used for display purposes only, if the server sent one.
    pub fn path_display(&self) -> Option<&str> {
        match self {
            Metadata::File(f) => f.path_display.as_deref(),
            Metadata::Folder(f) => f.path_display.as_deref(),
            Metadata::Deleted(d) => d.path_display.as_deref(),
            Metadata::Other => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// The last component of the path (including extension). This never contains a slash.
    pub name: String,
    /// A unique identifier for the file.
    pub id: String,
    /// For files, this is the modification time set by the desktop client when the file was
    /// added to Dropbox.
    pub client_modified: String,
    /// The last time the file was modified on Dropbox.
    pub server_modified: String,
    /// A unique identifier for the current revision of a file.
    pub rev: String,
    /// The file size in bytes.
    pub size: u64,
    /// The lowercased full path in the user's Dropbox. This always starts with a slash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    /// The cased path to be used for display purposes only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
    /// A hash of the file content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    /// If true, file can be downloaded directly; else the file must be exported.
    #[serde(default = "default_true")]
    pub is_downloadable: bool,
}

impl FileMetadata {
    pub fn new(
        name: String,
        id: String,
        client_modified: String,
        server_modified: String,
        rev: String,
        size: u64,
    ) -> Self {
        FileMetadata {
            name,
            id,
            client_modified,
            server_modified,
            rev,
            size,
            path_lower: None,
            path_display: None,
            content_hash: None,
            is_downloadable: true,
        }
    }

    pub fn with_path_lower(mut self, value: String) -> Self {
        self.path_lower = Some(value);
        self
    }

    pub fn with_path_display(mut self, value: String) -> Self {
        self.path_display = Some(value);
        self
    }

    pub fn with_content_hash(mut self, value: String) -> Self {
        self.content_hash = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderMetadata {
    pub name: String,
    /// A unique identifier for the folder.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum LookupError: open {
        /// The given path does not satisfy the required path format. Please refer to the Path
        /// formats documentation for more information.
        "malformed_path" => MalformedPath(nested Option<String>),
        /// There is nothing at the given path.
        "not_found" => NotFound,
        /// We were expecting a file, but the given path refers to something that isn't a file.
        "not_file" => NotFile,
        /// We were expecting a folder, but the given path refers to something that isn't a folder.
        "not_folder" => NotFolder,
        /// The file cannot be transferred because the content is restricted.
        "restricted_content" => RestrictedContent,
        /// This operation is not supported for this content type.
        "unsupported_content_type" => UnsupportedContentType,
        /// The given path is locked.
        "locked" => Locked,
    }
}

impl std::error::Error for LookupError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMetadataArg {
    /// The path of a file or folder on Dropbox.
    pub path: String,
    /// If true, DeletedMetadata will be returned for deleted file or folder, otherwise
    /// LookupError::NotFound will be returned.
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_deleted: bool,
}

impl GetMetadataArg {
    pub fn new(path: String) -> Self {
        GetMetadataArg { path, include_deleted: false }
    }

    pub fn with_include_deleted(mut self, value: bool) -> Self {
        self.include_deleted = value;
        self
    }
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum GetMetadataError: closed {
        "path" => Path(nested LookupError),
    }
}

impl std::error::Error for GetMetadataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GetMetadataError::Path(inner) => Some(inner),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFolderArg {
    /// A unique identifier for the file.
    pub path: String,
    /// If true, the list folder operation will be applied recursively to all subfolders and the
    /// response will contain contents of all subfolders.
    #[serde(default)]
    pub recursive: bool,
    /// If true, the results will include entries for files and folders that used to exist but
    /// were deleted.
    #[serde(default)]
    pub include_deleted: bool,
    /// The maximum number of results to return per request. Note: This is an approximate number
    /// and there can be slightly more entries returned in some cases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListFolderArg {
    pub fn new(path: String) -> Self {
        ListFolderArg { path, recursive: false, include_deleted: false, limit: None }
    }

    pub fn with_recursive(mut self, value: bool) -> Self {
        self.recursive = value;
        self
    }

    pub fn with_include_deleted(mut self, value: bool) -> Self {
        self.include_deleted = value;
        self
    }

    pub fn with_limit(mut self, value: u32) -> Self {
        self.limit = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFolderResult {
    /// The files and (direct) subfolders in the folder.
    pub entries: Vec<Metadata>,
    /// Pass the cursor into `list_folder_continue` to see what's changed in the folder since your
    /// previous query.
    pub cursor: String,
    /// If true, then there are more entries available. Pass the cursor to `list_folder_continue`
    /// to retrieve the rest.
    pub has_more: bool,
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ListFolderError: open {
        "path" => Path(nested LookupError),
    }
}

impl std::error::Error for ListFolderError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFolderContinueArg {
    /// The cursor returned by your last call to `list_folder` or `list_folder_continue`.
    pub cursor: String,
}

impl ListFolderContinueArg {
    pub fn new(cursor: String) -> Self {
        ListFolderContinueArg { cursor }
    }
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ListFolderContinueError: open {
        "path" => Path(nested LookupError),
        /// Indicates that the cursor has been invalidated. Call `list_folder` to obtain a new
        /// cursor.
        "reset" => Reset,
    }
}

impl std::error::Error for ListFolderContinueError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFolderGetLatestCursorResult {
    /// Pass the cursor into `list_folder_continue` to see what's changed in the folder since your
    /// previous query.
    pub cursor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFolderLongpollArg {
    /// A cursor as returned by `list_folder` or `list_folder_continue`. Cursors retrieved by
    /// setting `include_media_info` to true are not supported.
    pub cursor: String,
    /// A timeout in seconds. The request will block for at most this length of time, plus up to
    /// 90 seconds of random jitter added to avoid the thundering herd problem. Care should be
    /// taken when using this parameter, as some network infrastructure does not support long
    /// timeouts.
    #[serde(default = "default_longpoll_timeout")]
    pub timeout: u64,
}

impl ListFolderLongpollArg {
    pub fn new(cursor: String) -> Self {
        ListFolderLongpollArg { cursor, timeout: default_longpoll_timeout() }
    }

    pub fn with_timeout(mut self, value: u64) -> Self {
        self.timeout = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFolderLongpollResult {
    /// Indicates whether new changes are available. If true, call `list_folder_continue` to
    /// retrieve the changes.
    pub changes: bool,
    /// If present, backoff for at least this many seconds before calling
    /// `list_folder_longpoll` again.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backoff: Option<u64>,
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ListFolderLongpollError: open {
        /// Indicates that the cursor has been invalidated. Call `list_folder` to obtain a new
        /// cursor.
        "reset" => Reset,
    }
}

impl std::error::Error for ListFolderLongpollError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadArg {
    /// The path of the file to download.
    pub path: String,
    /// Please specify revision in `path` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
}

impl DownloadArg {
    pub fn new(path: String) -> Self {
        DownloadArg { path, rev: None }
    }
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DownloadError: open {
        "path" => Path(nested LookupError),
        /// This file type cannot be downloaded directly; use `export` instead.
        "unsupported_file" => UnsupportedFile,
    }
}

impl std::error::Error for DownloadError {}

tagged_union! {
    /// Your intent when writing a file to some path. This is used to determine what constitutes a
    /// conflict and what the autorename strategy is.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum WriteMode: closed {
        /// Do not overwrite an existing file if there is a conflict. The autorename strategy is
        /// to append a number to the file name.
        "add" => Add,
        /// Always overwrite the existing file. The autorename strategy is the same as it is for
        /// `add`.
        "overwrite" => Overwrite,
        /// Overwrite if the given "rev" matches the existing file's "rev". The supplied value
        /// should be the latest known "rev" of the file.
        "update" => Update(nested String),
    }
}

impl Default for WriteMode {
    fn default() -> Self {
        WriteMode::Add
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Path in the user's Dropbox to save the file.
    pub path: String,
    /// Selects what to do if the file already exists.
    #[serde(default)]
    pub mode: WriteMode,
    /// If there's a conflict, as determined by `mode`, have the Dropbox server try to autorename
    /// the file to avoid conflict.
    #[serde(default)]
    pub autorename: bool,
    /// The value to store as the `client_modified` timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_modified: Option<String>,
    /// Normally, users are made aware of any file modifications in their Dropbox account via
    /// notifications in the client software. If true, this tells the clients that this
    /// modification shouldn't result in a user notification.
    #[serde(default)]
    pub mute: bool,
    /// Be more strict about how each WriteMode detects conflict.
    #[serde(default)]
    pub strict_conflict: bool,
}

impl CommitInfo {
    pub fn new(path: String) -> Self {
        CommitInfo {
            path,
            mode: WriteMode::Add,
            autorename: false,
            client_modified: None,
            mute: false,
            strict_conflict: false,
        }
    }

    pub fn with_mode(mut self, value: WriteMode) -> Self {
        self.mode = value;
        self
    }

    pub fn with_autorename(mut self, value: bool) -> Self {
        self.autorename = value;
        self
    }

    pub fn with_client_modified(mut self, value: String) -> Self {
        self.client_modified = Some(value);
        self
    }

    pub fn with_mute(mut self, value: bool) -> Self {
        self.mute = value;
        self
    }
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum WriteConflictError: open {
        /// There's a file in the way.
        "file" => File,
        /// There's a folder in the way.
        "folder" => Folder,
        /// There's a file at an ancestor path, so we couldn't create the required parent folders.
        "file_ancestor" => FileAncestor,
    }
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum WriteError: open {
        "malformed_path" => MalformedPath(nested Option<String>),
        /// Couldn't write to the target path because there was something in the way.
        "conflict" => Conflict(nested WriteConflictError),
        /// The user doesn't have permissions to write to the target location.
        "no_write_permission" => NoWritePermission,
        /// The user doesn't have enough available space (bytes) to write more data.
        "insufficient_space" => InsufficientSpace,
        /// Dropbox will not save the file or folder because of its name.
        "disallowed_name" => DisallowedName,
        /// This endpoint cannot move or delete team folders.
        "team_folder" => TeamFolder,
        /// This file operation is not allowed at this path.
        "operation_suppressed" => OperationSuppressed,
        /// There are too many write operations in user's Dropbox. Please retry this request.
        "too_many_write_operations" => TooManyWriteOperations,
    }
}

impl std::error::Error for WriteError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadWriteFailed {
    /// The reason why the file couldn't be saved.
    pub reason: WriteError,
    /// The upload session ID; data has already been uploaded to the corresponding upload session
    /// and this ID may be used to retry the commit.
    pub upload_session_id: String,
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum UploadError: open {
        /// Unable to save the uploaded contents to a file.
        "path" => Path(flat UploadWriteFailed),
        /// The request payload must be at most 150 MiB.
        "payload_too_large" => PayloadTooLarge,
        /// The content received by the Dropbox server in this call does not match the provided
        /// content hash.
        "content_hash_mismatch" => ContentHashMismatch,
    }
}

impl std::error::Error for UploadError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteArg {
    /// Path in the user's Dropbox to delete.
    pub path: String,
    /// Perform delete if given "rev" matches the existing file's latest "rev". This field does
    /// not support deleting a folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_rev: Option<String>,
}

impl DeleteArg {
    pub fn new(path: String) -> Self {
        DeleteArg { path, parent_rev: None }
    }

    pub fn with_parent_rev(mut self, value: String) -> Self {
        self.parent_rev = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    /// Metadata of the deleted object.
    pub metadata: Metadata,
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DeleteError: open {
        "path_lookup" => PathLookup(nested LookupError),
        "path_write" => PathWrite(nested WriteError),
        /// There are too many write operations in user's Dropbox. Please retry this request.
        "too_many_write_operations" => TooManyWriteOperations,
        /// There are too many files in one request. Please retry with fewer files.
        "too_many_files" => TooManyFiles,
    }
}

impl std::error::Error for DeleteError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocationPath {
    /// Path in the user's Dropbox to be copied or moved.
    pub from_path: String,
    /// Path in the user's Dropbox that is the destination.
    pub to_path: String,
}

impl RelocationPath {
    pub fn new(from_path: String, to_path: String) -> Self {
        RelocationPath { from_path, to_path }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocationBatchArgBase {
    /// List of entries to be moved or copied. Each entry is [`RelocationPath`].
    pub entries: Vec<RelocationPath>,
    /// If there's a conflict with any file, have the Dropbox server try to autorename that file
    /// to avoid the conflict.
    #[serde(default)]
    pub autorename: bool,
}

impl RelocationBatchArgBase {
    pub fn new(entries: Vec<RelocationPath>) -> Self {
        RelocationBatchArgBase { entries, autorename: false }
    }

    pub fn with_autorename(mut self, value: bool) -> Self {
        self.autorename = value;
        self
    }
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RelocationError: open {
        "from_lookup" => FromLookup(nested LookupError),
        "from_write" => FromWrite(nested WriteError),
        "to" => To(nested WriteError),
        /// Shared folders can't be copied.
        "cant_copy_shared_folder" => CantCopySharedFolder,
        /// Your move operation would result in nested shared folders. This is not allowed.
        "cant_nest_shared_folder" => CantNestSharedFolder,
        /// You cannot move a folder into itself.
        "cant_move_folder_into_itself" => CantMoveFolderIntoItself,
        /// The operation would involve more than 10,000 files and folders.
        "too_many_files" => TooManyFiles,
        /// There are duplicated/nested paths among `from_path` and `to_path`.
        "duplicated_or_nested_paths" => DuplicatedOrNestedPaths,
        /// The current user does not have enough space to move or copy the files.
        "insufficient_quota" => InsufficientQuota,
    }
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RelocationBatchErrorEntry: open {
        /// User errors that retry won't help.
        "relocation_error" => RelocationError(nested RelocationError),
        /// Something went wrong with the job on Dropbox's end. You'll need to verify that the
        /// action you were taking succeeded, and if not, try again. This should happen very
        /// rarely.
        "internal_error" => InternalError,
        /// There are too many write operations in user's Dropbox. Please retry this request.
        "too_many_write_operations" => TooManyWriteOperations,
    }
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RelocationBatchResultEntry: open {
        "success" => Success(nested Metadata),
        "failure" => Failure(nested RelocationBatchErrorEntry),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocationBatchV2Result {
    /// Each entry in the request's `entries` will appear at the same position inside
    /// [`RelocationBatchV2Result::entries`].
    pub entries: Vec<RelocationBatchResultEntry>,
}

tagged_union! {
    /// Result returned by `copy_batch_v2` that may either launch an asynchronous job or complete
    /// synchronously.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RelocationBatchV2Launch: closed {
        /// This response indicates that the processing is asynchronous. The string is an id that
        /// can be used to obtain the status of the asynchronous job.
        "async_job_id" => AsyncJobId(nested String),
        "complete" => Complete(flat RelocationBatchV2Result),
    }
}

tagged_union! {
    /// Result returned by `copy_batch_check_v2`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RelocationBatchV2JobStatus: closed {
        /// The asynchronous job is still in progress.
        "in_progress" => InProgress,
        /// The copy or move batch job has finished.
        "complete" => Complete(flat RelocationBatchV2Result),
    }
}
