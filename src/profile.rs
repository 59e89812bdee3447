//! The signed-in user's profile.
//!
//! Only the username and the preferred locale are kept here. Credentials
//! belong to the host's sign-in flow and are never read or written.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::Locale;
use crate::error::ProfileError;
use crate::history::Storage;

/// Key of the active profile.
pub const PROFILE_KEY: &str = "iching_user";

/// Key of the host's list of registered users.
pub const DIRECTORY_KEY: &str = "iching_users";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(rename = "preferredLang", default)]
    pub preferred_locale: Locale,
}

impl UserProfile {
    #[must_use]
    pub fn new(username: impl Into<String>, preferred_locale: Locale) -> Self {
        Self {
            username: username.into(),
            preferred_locale,
        }
    }
}

/// Read the active profile.
pub fn load(storage: &impl Storage) -> Result<Option<UserProfile>, ProfileError> {
    match storage.get(PROFILE_KEY)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Read the active profile, treating any failure as signed out.
pub fn load_or_none(storage: &impl Storage) -> Option<UserProfile> {
    load(storage).unwrap_or_else(|err| {
        warn!(target: "iching_puzzle::profile", error = %err, "discarding unreadable profile");
        None
    })
}

pub fn save(storage: &mut impl Storage, profile: &UserProfile) -> Result<(), ProfileError> {
    storage.set(PROFILE_KEY, &serde_json::to_string(profile)?)?;
    Ok(())
}

pub fn clear(storage: &mut impl Storage) -> Result<(), ProfileError> {
    storage.remove(PROFILE_KEY)?;
    Ok(())
}

/// Mirror a locale change into the user directory entry of `username`.
///
/// Entries are edited as raw JSON so fields owned by the sign-in flow
/// survive untouched. Returns whether an entry was updated; a missing
/// directory or user is not an error.
pub fn sync_directory_locale(
    storage: &mut impl Storage,
    username: &str,
    locale: Locale,
) -> Result<bool, ProfileError> {
    let Some(raw) = storage.get(DIRECTORY_KEY)? else {
        return Ok(false);
    };
    let mut users: Vec<Value> = serde_json::from_str(&raw)?;
    let Some(entry) = users
        .iter_mut()
        .find(|user| user.get("username").and_then(Value::as_str) == Some(username))
    else {
        return Ok(false);
    };
    if let Some(fields) = entry.as_object_mut() {
        fields.insert("preferredLang".to_string(), Value::from(locale.code()));
    }
    storage.set(DIRECTORY_KEY, &serde_json::to_string(&users)?)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryStorage;

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStorage::new();
        assert_eq!(load(&store).unwrap(), None);

        let profile = UserProfile::new("ming", Locale::En);
        save(&mut store, &profile).unwrap();
        assert_eq!(load(&store).unwrap(), Some(profile));

        clear(&mut store).unwrap();
        assert_eq!(load_or_none(&store), None);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&UserProfile::new("ming", Locale::Zh)).unwrap();
        assert_eq!(json, r#"{"username":"ming","preferredLang":"zh"}"#);

        let parsed: UserProfile =
            serde_json::from_str(r#"{"username":"li","password":"x","preferredLang":"en"}"#).unwrap();
        assert_eq!(parsed, UserProfile::new("li", Locale::En));
    }

    #[test]
    fn test_corrupt_profile_means_signed_out() {
        let mut store = MemoryStorage::new();
        store.set(PROFILE_KEY, "[]").unwrap();
        assert!(load(&store).is_err());
        assert_eq!(load_or_none(&store), None);
    }

    #[test]
    fn test_directory_sync_keeps_other_fields() {
        let mut store = MemoryStorage::new();
        store
            .set(
                DIRECTORY_KEY,
                r#"[{"username":"ming","password":"p","preferredLang":"zh"},{"username":"li","preferredLang":"zh"}]"#,
            )
            .unwrap();

        assert!(sync_directory_locale(&mut store, "ming", Locale::En).unwrap());
        assert!(!sync_directory_locale(&mut store, "nobody", Locale::En).unwrap());

        let users: Vec<Value> = serde_json::from_str(&store.get(DIRECTORY_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(users[0]["preferredLang"], "en");
        assert_eq!(users[0]["password"], "p");
        assert_eq!(users[1]["preferredLang"], "zh");
    }

    #[test]
    fn test_directory_sync_without_directory() {
        let mut store = MemoryStorage::new();
        assert!(!sync_directory_locale(&mut store, "ming", Locale::En).unwrap());
    }
}
