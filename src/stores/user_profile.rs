use serde::{Deserialize, Serialize};
use std::fmt;

use crate::stores::storage::{ProfileStorage, StorageError};

/// Storage key holding the cached profile record
pub const PROFILE_STORAGE_KEY: &str = "demo_user_profile";

/// Profile record shown on the profile page
///
/// Stored as JSON with camelCase keys. Every field is required when parsing;
/// a record that does not match this shape is treated as unreadable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub is_verified: bool,
}

impl UserProfile {
    /// Built-in profile used when nothing usable is stored
    pub fn fallback() -> Self {
        Self {
            email: "user1@test.com".to_string(),
            full_name: "Nguyễn Văn A".to_string(),
            phone: "0987654321".to_string(),
            address: "456 Đường XYZ, Quận 2, TP.HCM".to_string(),
            is_verified: true,
        }
    }

    /// The loaded profile if there is one, otherwise the built-in default
    pub fn or_fallback(loaded: Option<UserProfile>) -> Self {
        loaded.unwrap_or_else(Self::fallback)
    }
}

/// Why a stored profile could not be used
#[derive(Debug)]
pub enum ProfileLoadError {
    StorageUnavailable,
    Storage(String),
    NotFound,
    Malformed(serde_json::Error),
}

impl fmt::Display for ProfileLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageUnavailable => write!(f, "No storage available"),
            Self::Storage(msg) => write!(f, "Failed to read stored profile: {}", msg),
            Self::NotFound => write!(f, "No stored profile under '{}'", PROFILE_STORAGE_KEY),
            Self::Malformed(err) => write!(f, "Stored profile is malformed: {}", err),
        }
    }
}

impl std::error::Error for ProfileLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for ProfileLoadError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Unavailable => Self::StorageUnavailable,
            StorageError::Access(msg) => Self::Storage(msg),
        }
    }
}

impl From<serde_json::Error> for ProfileLoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err)
    }
}

/// Read and parse the stored profile, keeping the failure cause
pub fn try_load_profile<S>(storage: &S) -> Result<UserProfile, ProfileLoadError>
where
    S: ProfileStorage + ?Sized,
{
    let raw = storage
        .get_item(PROFILE_STORAGE_KEY)?
        .filter(|raw| !raw.is_empty())
        .ok_or(ProfileLoadError::NotFound)?;

    Ok(serde_json::from_str(&raw)?)
}

/// Read the stored profile, collapsing every failure to `None`
pub fn load_profile<S>(storage: &S) -> Option<UserProfile>
where
    S: ProfileStorage + ?Sized,
{
    match try_load_profile(storage) {
        Ok(profile) => Some(profile),
        Err(e @ (ProfileLoadError::NotFound | ProfileLoadError::StorageUnavailable)) => {
            log::debug!("Using default profile: {}", e);
            None
        }
        Err(e) => {
            log::warn!("Ignoring stored profile: {}", e);
            None
        }
    }
}

/// Profile to display: the stored one, or the built-in default
pub fn resolve_profile<S>(storage: &S) -> UserProfile
where
    S: ProfileStorage + ?Sized,
{
    UserProfile::or_fallback(load_profile(storage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::storage::{MemoryStorage, NoStorage};

    struct FailingStorage;

    impl ProfileStorage for FailingStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Access("SecurityError".to_string()))
        }
    }

    const STORED: &str = r#"{
        "email": "tran.b@example.com",
        "fullName": "Trần Thị B",
        "phone": "0912345678",
        "address": "12 Lê Lợi, Quận 1",
        "isVerified": false
    }"#;

    #[test]
    fn test_no_storage_falls_back_to_default() {
        let profile = resolve_profile(&NoStorage);
        assert_eq!(profile, UserProfile::fallback());
        assert_eq!(profile.email, "user1@test.com");
        assert!(profile.is_verified);
    }

    #[test]
    fn test_missing_key_falls_back() {
        let storage = MemoryStorage::new();
        assert!(matches!(try_load_profile(&storage), Err(ProfileLoadError::NotFound)));
        assert_eq!(resolve_profile(&storage), UserProfile::fallback());
    }

    #[test]
    fn test_empty_value_treated_as_absent() {
        let storage = MemoryStorage::with_item(PROFILE_STORAGE_KEY, "");
        assert!(matches!(try_load_profile(&storage), Err(ProfileLoadError::NotFound)));
        assert_eq!(resolve_profile(&storage), UserProfile::fallback());
    }

    #[test]
    fn test_unparsable_value_falls_back() {
        let storage = MemoryStorage::with_item(PROFILE_STORAGE_KEY, "{not json");
        assert!(matches!(try_load_profile(&storage), Err(ProfileLoadError::Malformed(_))));
        assert_eq!(load_profile(&storage), None);
        assert_eq!(resolve_profile(&storage), UserProfile::fallback());
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        let storage = MemoryStorage::with_item(
            PROFILE_STORAGE_KEY,
            r#"{"email": "a@b.c", "fullName": "A"}"#,
        );
        assert!(matches!(try_load_profile(&storage), Err(ProfileLoadError::Malformed(_))));

        let storage = MemoryStorage::with_item(PROFILE_STORAGE_KEY, "null");
        assert_eq!(resolve_profile(&storage), UserProfile::fallback());
    }

    #[test]
    fn test_storage_access_error_falls_back() {
        assert!(matches!(
            try_load_profile(&FailingStorage),
            Err(ProfileLoadError::Storage(msg)) if msg == "SecurityError"
        ));
        assert_eq!(resolve_profile(&FailingStorage), UserProfile::fallback());
    }

    #[test]
    fn test_valid_record_is_used() {
        let storage = MemoryStorage::with_item(PROFILE_STORAGE_KEY, STORED);
        let profile = resolve_profile(&storage);
        assert_eq!(
            profile,
            UserProfile {
                email: "tran.b@example.com".to_string(),
                full_name: "Trần Thị B".to_string(),
                phone: "0912345678".to_string(),
                address: "12 Lê Lợi, Quận 1".to_string(),
                is_verified: false,
            }
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let storage = MemoryStorage::with_item(
            PROFILE_STORAGE_KEY,
            r#"{"email":"x@y.z","fullName":"X","phone":"1","address":"A","isVerified":true,"role":"admin"}"#,
        );
        let profile = load_profile(&storage).expect("profile should parse");
        assert_eq!(profile.full_name, "X");
    }

    #[test]
    fn test_loader_is_idempotent() {
        let storage = MemoryStorage::with_item(PROFILE_STORAGE_KEY, STORED);
        assert_eq!(load_profile(&storage), load_profile(&storage));

        let broken = MemoryStorage::with_item(PROFILE_STORAGE_KEY, "[]");
        assert_eq!(resolve_profile(&broken), resolve_profile(&broken));
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(UserProfile::fallback()).unwrap();
        assert_eq!(json["fullName"], "Nguyễn Văn A");
        assert_eq!(json["isVerified"], true);
        assert!(json.get("full_name").is_none());
    }

    #[test]
    fn test_or_fallback() {
        let stored: UserProfile = serde_json::from_str(STORED).unwrap();
        assert_eq!(UserProfile::or_fallback(Some(stored.clone())), stored);
        assert_eq!(UserProfile::or_fallback(None), UserProfile::fallback());
    }
}
