// Copyright (c) 2025 Dropbox, Inc.

//! Types from the `check` namespace.

use serde::{Deserialize, Serialize};

/// Contains the arguments to be sent to the Dropbox servers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoArg {
    /// The string that you'd like to be echoed back to you.
    #[serde(default)]
    pub query: String,
}

impl EchoArg {
    pub fn with_query(mut self, value: String) -> Self {
        self.query = value;
        self
    }
}

/// EchoResult contains the result returned from the Dropbox servers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoResult {
    /// If everything worked correctly, this would be the same as query.
    #[serde(default)]
    pub result: String,
}
