// Copyright (c) 2025 Dropbox, Inc.

//! Types from the `users` namespace.

use serde::{Deserialize, Serialize};
use crate::types::common::RootInfo;

/// Representations for a person's name to assist with internationalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// Also known as a first name.
    pub given_name: String,
    /// Also known as a last name or family name.
    pub surname: String,
    /// Locale-dependent name. In the US, a person's familiar name is their `given_name`, but
    /// elsewhere, it could be any combination of a person's `given_name` and `surname`.
    pub familiar_name: String,
    /// A name that can be used directly to represent the name of a user's Dropbox account.
    pub display_name: String,
    /// An abbreviated form of the person's name. Their initials in most locales.
    pub abbreviated_name: String,
}

tagged_union! {
    /// What type of account this user has.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AccountType: closed {
        /// The basic account type.
        "basic" => Basic,
        /// The Dropbox Pro account type.
        "pro" => Pro,
        /// The Dropbox Business account type.
        "business" => Business,
    }
}

/// Detailed information about the current user's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullAccount {
    /// The user's unique Dropbox ID.
    pub account_id: String,
    /// Details of a user's name.
    pub name: Name,
    /// The user's email address. Do not rely on this without checking the `email_verified` field.
    pub email: String,
    /// Whether the user has verified their email address.
    pub email_verified: bool,
    /// Whether the user has been disabled.
    pub disabled: bool,
    /// The language that the user specified. Locale tags will be IETF language tags.
    pub locale: String,
    /// The user's referral link.
    pub referral_link: String,
    /// Whether the user has a personal and work account.
    pub is_paired: bool,
    /// What type of account this user has.
    pub account_type: AccountType,
    /// The root info for this account.
    pub root_info: RootInfo,
    /// URL for the photo representing the user, if one is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    /// The user's two-letter country code, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Basic information about any account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAccount {
    pub account_id: String,
    pub name: Name,
    pub email: String,
    pub email_verified: bool,
    pub disabled: bool,
    /// Whether this user is a teammate of the current user.
    pub is_teammate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
    /// The user's unique team member id. This field will only be present if the user is part of
    /// a team and `is_teammate` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_member_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAccountArg {
    /// A user's account identifier.
    pub account_id: String,
}

impl GetAccountArg {
    pub fn new(account_id: String) -> Self {
        GetAccountArg { account_id }
    }
}

tagged_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum GetAccountError: open {
        /// The specified `account_id` does not exist.
        "no_account" => NoAccount,
    }
}

impl std::error::Error for GetAccountError {}

/// Information about a user's space usage and quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceUsage {
    /// The user's total space usage (bytes).
    pub used: u64,
    /// The user's space allocation.
    pub allocation: SpaceAllocation,
}

tagged_union! {
    /// Space is allocated differently based on the type of account.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SpaceAllocation: open {
        /// The user's space allocation applies only to their individual account.
        "individual" => Individual(flat IndividualSpaceAllocation),
        /// The user shares space with other members of their team.
        "team" => Team(flat TeamSpaceAllocation),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualSpaceAllocation {
    /// The total space allocated to the user's account (bytes).
    pub allocated: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSpaceAllocation {
    /// The total space currently used by the user's team (bytes).
    pub used: u64,
    /// The total space allocated to the user's team (bytes).
    pub allocated: u64,
    /// The total space allocated to the user within its team allocated space (0 means that no
    /// restriction is imposed on the user's quota within its team).
    pub user_within_team_space_allocated: u64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_full_account() {
        let account: FullAccount = serde_json::from_str(r#"{
            "account_id": "dbid:AAH4f99T0taONIb-OurWxbNQ6ywGRopQngc",
            "name": {
                "given_name": "Franz",
                "surname": "Ferdinand",
                "familiar_name": "Franz",
                "display_name": "Franz Ferdinand (Personal)",
                "abbreviated_name": "FF"
            },
            "email": "franz@dropbox.com",
            "email_verified": true,
            "disabled": false,
            "locale": "en",
            "referral_link": "https://db.tt/ZITNuhtI",
            "is_paired": true,
            "account_type": {".tag": "business"},
            "root_info": {
                ".tag": "user",
                "root_namespace_id": "3235641",
                "home_namespace_id": "3235641"
            },
            "country": "US",
            "team": {"id": "dbtid:AAFdgehTzw7WlXhZJsbGCLePe8RvQGYDr-I", "name": "Acme, Inc."}
        }"#).unwrap();
        assert_eq!(AccountType::Business, account.account_type);
        assert_eq!(Some("3235641"), account.root_info.root_namespace_id());
        assert_eq!(None, account.profile_photo_url);
    }

    #[test]
    fn test_space_allocation() {
        let usage: SpaceUsage = serde_json::from_str(r#"{
            "used": 314159265,
            "allocation": {".tag": "individual", "allocated": 10000000000}
        }"#).unwrap();
        assert_eq!(
            SpaceAllocation::Individual(IndividualSpaceAllocation { allocated: 10000000000 }),
            usage.allocation);
        assert_eq!("individual", usage.allocation.to_string());
    }

    #[test]
    fn test_account_type_closed() {
        serde_json::from_str::<AccountType>(r#"{".tag": "enterprise"}"#).unwrap_err();
    }
}
