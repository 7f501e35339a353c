// Copyright (c) 2025 Dropbox, Inc.

//! Types from the `async` namespace, shared by routes that launch a server-side job and the
//! routes that poll it.
//!
//! Polling is up to the caller: call the matching `check` route with the job ID until it stops
//! returning `in_progress`.

use serde::{Deserialize, Serialize};

/// Arguments for methods that poll the status of an asynchronous job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollArg {
    /// Id of the asynchronous job. This is the value of a response returned from the method that
    /// launched the job.
    pub async_job_id: String,
}

impl PollArg {
    pub fn new(async_job_id: String) -> Self {
        PollArg { async_job_id }
    }
}

tagged_union! {
    /// Error returned by methods for polling the status of asynchronous job.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PollError: open {
        /// The job ID is invalid.
        "invalid_async_job_id" => InvalidAsyncJobId,
        /// Something went wrong with the job on Dropbox's end. You'll need to verify that the
        /// action you were taking succeeded, and if not, try again. This should happen very
        /// rarely.
        "internal_error" => InternalError,
    }
}

impl std::error::Error for PollError {}
