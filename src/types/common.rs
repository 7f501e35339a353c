// Copyright (c) 2025 Dropbox, Inc.

//! Types from the `common` namespace.

use serde::{Deserialize, Serialize};

tagged_union! {
    /// The root a path is evaluated relative to. Sent in the `Dropbox-API-Path-Root` header.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PathRoot: open {
        /// Paths are relative to the authenticating user's home namespace, whether or not that
        /// user belongs to a team.
        "home" => Home,
        /// Paths are relative to the authenticating user's root namespace. This results in an
        /// error if the given namespace ID doesn't match the user's root namespace.
        "root" => Root(nested String),
        /// Paths are relative to given namespace id, which must be one the user has access to.
        "namespace_id" => NamespaceId(nested String),
    }
}

tagged_union! {
    /// Information about the current user's root.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RootInfo: open {
        /// Root info when user is member of a team with a separate root namespace ID.
        "team" => Team(flat TeamRootInfo),
        /// Root info when user is not member of a team or the user is a member of a team and the
        /// team does not have a separate root namespace.
        "user" => User(flat UserRootInfo),
    }
}

impl RootInfo {
    /// The namespace ID for user's root namespace, if known.
    pub fn root_namespace_id(&self) -> Option<&str> {
        match self {
            RootInfo::Team(t) => Some(&t.root_namespace_id),
            RootInfo::User(u) => Some(&u.root_namespace_id),
            RootInfo::Other => None,
        }
    }
}

tagged_union! {
    /// Why a `Dropbox-API-Path-Root` header was rejected. It arrives with HTTP 422, so it is found
    /// in the response of [`Error::UnexpectedHttpError`](crate::Error::UnexpectedHttpError).
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PathRootError: open {
        /// The root namespace id in the header is not valid. The value of this error is the
        /// user's latest root info.
        "invalid_root" => InvalidRoot(nested RootInfo),
        /// You don't have permission to access the namespace id in the header.
        "no_permission" => NoPermission,
    }
}

impl std::error::Error for PathRootError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRootInfo {
    /// The namespace ID for user's root namespace. It will be the namespace ID of the shared team
    /// root if the user is member of a team with a separate team root.
    pub root_namespace_id: String,
    /// The namespace ID for user's home namespace.
    pub home_namespace_id: String,
    /// The path for user's home directory under the shared team root.
    pub home_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRootInfo {
    pub root_namespace_id: String,
    pub home_namespace_id: String,
}
