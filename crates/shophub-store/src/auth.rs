//! # Credential Store
//!
//! Account registration, sign-in and password management behind a trait
//! seam.
//!
//! ## Why A Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Credential Backends                                  │
//! │                                                                         │
//! │  CommerceState / storefront                                            │
//! │       │                                                                 │
//! │       │  credentials.login(email, password)                            │
//! │       ▼                                                                 │
//! │  CredentialStore (trait)                                               │
//! │       │                                                                 │
//! │       ├──► LocalCredentialStore   ← THIS CRATE                         │
//! │       │    plaintext equality against the persisted user list.         │
//! │       │    A development mock, NOT a security model.                   │
//! │       │                                                                 │
//! │       └──► (production) real credential service                        │
//! │            substituted here without touching the container.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sign-in does not persist anything: it returns the `Session`, and the
//! container installs it via `set_session` — one writer for the session
//! key.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use shophub_core::error::AuthError;
use shophub_core::types::{NewAccount, ProfileUpdate, Session, UserAccount};
use shophub_core::validation::{
    validate_email, validate_name, validate_password, validate_phone,
};

use crate::error::StoreResult;
use crate::kv::{KeyValueStore, KeyValueStoreExt, StorageKey};

// =============================================================================
// Credential Store Trait
// =============================================================================

/// The authentication contract exposed to the rest of the system.
pub trait CredentialStore: Send + Sync {
    /// Registers a new account.
    ///
    /// Fails with `DuplicateEmail` when the email already has an account,
    /// `PasswordMismatch` when the confirmation differs, or a
    /// `ValidationError` for malformed fields.
    fn register(&self, new_account: &NewAccount) -> StoreResult<UserAccount>;

    /// Signs in and returns the session to install.
    ///
    /// Fails with `InvalidCredentials` when no account matches, or
    /// `AccountDeactivated` when credentials match a deactivated account.
    fn login(&self, email: &str, password: &str) -> StoreResult<Session>;

    /// Changes an account password.
    ///
    /// Fails with `WrongCurrentPassword` when `current` doesn't match.
    fn change_password(&self, user_id: &str, current: &str, new: &str) -> StoreResult<()>;

    /// Applies a partial profile update and returns the updated account.
    fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> StoreResult<UserAccount>;
}

// =============================================================================
// Local (Mock) Credential Store
// =============================================================================

/// Credential backend over the locally persisted user list.
///
/// ## Not A Security Model
/// Passwords are stored and compared in plaintext. This exists so the
/// storefront works fully offline in development; productionizing means
/// substituting a real credential store behind [`CredentialStore`].
pub struct LocalCredentialStore {
    store: Arc<dyn KeyValueStore>,
}

impl LocalCredentialStore {
    /// Creates a credential store over the given key-value store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        LocalCredentialStore { store }
    }

    /// Reads the registered user list. Absent key → empty list; a corrupt
    /// list propagates rather than silently wiping accounts on the next
    /// write.
    fn users(&self) -> StoreResult<Vec<UserAccount>> {
        Ok(self.store.get_as(StorageKey::Users)?.unwrap_or_default())
    }

    fn save_users(&self, users: &[UserAccount]) -> StoreResult<()> {
        self.store.set_as(StorageKey::Users, &users)
    }
}

impl CredentialStore for LocalCredentialStore {
    fn register(&self, new_account: &NewAccount) -> StoreResult<UserAccount> {
        validate_name("firstName", &new_account.first_name).map_err(AuthError::from)?;
        validate_name("lastName", &new_account.last_name).map_err(AuthError::from)?;
        validate_email(&new_account.email).map_err(AuthError::from)?;
        validate_phone(&new_account.phone).map_err(AuthError::from)?;
        validate_password(&new_account.password).map_err(AuthError::from)?;

        if new_account.password != new_account.confirm_password {
            return Err(AuthError::PasswordMismatch.into());
        }

        let mut users = self.users()?;

        if users.iter().any(|u| u.email == new_account.email) {
            return Err(AuthError::DuplicateEmail {
                email: new_account.email.clone(),
            }
            .into());
        }

        let account = UserAccount {
            id: Uuid::new_v4().to_string(),
            first_name: new_account.first_name.clone(),
            last_name: new_account.last_name.clone(),
            email: new_account.email.clone(),
            phone: new_account.phone.clone(),
            password: new_account.password.clone(),
            created_at: Utc::now(),
            is_active: true,
        };

        users.push(account.clone());
        self.save_users(&users)?;

        info!(user_id = %account.id, "account registered");
        Ok(account)
    }

    fn login(&self, email: &str, password: &str) -> StoreResult<Session> {
        let users = self.users()?;

        let account = users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        // Credentials matched: tell a deactivated user the real reason
        if !account.is_active {
            return Err(AuthError::AccountDeactivated.into());
        }

        debug!(user_id = %account.id, "sign-in accepted");
        Ok(Session {
            user_id: account.id.clone(),
            display_name: account.display_name(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            login_time: Utc::now(),
        })
    }

    fn change_password(&self, user_id: &str, current: &str, new: &str) -> StoreResult<()> {
        let mut users = self.users()?;

        let account = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| AuthError::UserNotFound {
                id: user_id.to_string(),
            })?;

        if account.password != current {
            return Err(AuthError::WrongCurrentPassword.into());
        }

        validate_password(new).map_err(AuthError::from)?;
        account.password = new.to_string();

        self.save_users(&users)?;
        info!(user_id, "password changed");
        Ok(())
    }

    fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> StoreResult<UserAccount> {
        if let Some(first_name) = &update.first_name {
            validate_name("firstName", first_name).map_err(AuthError::from)?;
        }
        if let Some(last_name) = &update.last_name {
            validate_name("lastName", last_name).map_err(AuthError::from)?;
        }
        if let Some(email) = &update.email {
            validate_email(email).map_err(AuthError::from)?;
        }
        if let Some(phone) = &update.phone {
            validate_phone(phone).map_err(AuthError::from)?;
        }

        let mut users = self.users()?;

        let account = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| AuthError::UserNotFound {
                id: user_id.to_string(),
            })?;

        if let Some(first_name) = &update.first_name {
            account.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            account.last_name = last_name.clone();
        }
        if let Some(email) = &update.email {
            account.email = email.clone();
        }
        if let Some(phone) = &update.phone {
            account.phone = phone.clone();
        }

        let updated = account.clone();
        self.save_users(&users)?;

        debug!(user_id, "profile updated");
        Ok(updated)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::kv::MemoryStore;

    fn new_account(email: &str) -> NewAccount {
        NewAccount {
            first_name: "Priya".to_string(),
            last_name: "Nair".to_string(),
            email: email.to_string(),
            phone: "9876543210".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    fn fresh() -> LocalCredentialStore {
        LocalCredentialStore::new(Arc::new(MemoryStore::new()))
    }

    fn auth_err(result: StoreResult<impl std::fmt::Debug>) -> AuthError {
        match result {
            Err(StoreError::Auth(e)) => e,
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    #[test]
    fn test_register_then_login() {
        let credentials = fresh();

        let account = credentials.register(&new_account("priya@example.com")).unwrap();
        assert!(account.is_active);

        let session = credentials.login("priya@example.com", "secret1").unwrap();
        assert_eq!(session.user_id, account.id);
        assert_eq!(session.display_name, "Priya Nair");
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let credentials = fresh();
        credentials.register(&new_account("priya@example.com")).unwrap();

        let err = auth_err(credentials.register(&new_account("priya@example.com")));
        assert!(matches!(err, AuthError::DuplicateEmail { .. }));
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let credentials = fresh();
        let mut account = new_account("priya@example.com");
        account.confirm_password = "different".to_string();

        let err = auth_err(credentials.register(&account));
        assert!(matches!(err, AuthError::PasswordMismatch));
    }

    #[test]
    fn test_invalid_fields_rejected() {
        let credentials = fresh();

        let mut bad_email = new_account("not-an-email");
        bad_email.email = "not-an-email".to_string();
        assert!(matches!(
            auth_err(credentials.register(&bad_email)),
            AuthError::Validation(_)
        ));

        let mut bad_phone = new_account("priya@example.com");
        bad_phone.phone = "12345".to_string();
        assert!(matches!(
            auth_err(credentials.register(&bad_phone)),
            AuthError::Validation(_)
        ));
    }

    #[test]
    fn test_wrong_credentials() {
        let credentials = fresh();
        credentials.register(&new_account("priya@example.com")).unwrap();

        let err = auth_err(credentials.login("priya@example.com", "wrong"));
        assert!(matches!(err, AuthError::InvalidCredentials));

        let err = auth_err(credentials.login("nobody@example.com", "secret1"));
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_deactivated_account_with_correct_credentials() {
        let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
        let credentials = LocalCredentialStore::new(store.clone());
        credentials.register(&new_account("priya@example.com")).unwrap();

        // Deactivate the account directly in the persisted list
        let mut users: Vec<UserAccount> =
            store.get_as(StorageKey::Users).unwrap().unwrap();
        users[0].is_active = false;
        store.set_as(StorageKey::Users, &users).unwrap();

        // Correct credentials: the user is told the account is
        // deactivated, not that the password is wrong
        let err = auth_err(credentials.login("priya@example.com", "secret1"));
        assert!(matches!(err, AuthError::AccountDeactivated));

        // Wrong password on the same account stays InvalidCredentials
        let err = auth_err(credentials.login("priya@example.com", "wrong"));
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_change_password() {
        let credentials = fresh();
        let account = credentials.register(&new_account("priya@example.com")).unwrap();

        let err = auth_err(credentials.change_password(&account.id, "wrong", "newpass1"));
        assert!(matches!(err, AuthError::WrongCurrentPassword));

        credentials
            .change_password(&account.id, "secret1", "newpass1")
            .unwrap();

        assert!(credentials.login("priya@example.com", "newpass1").is_ok());
        let err = auth_err(credentials.login("priya@example.com", "secret1"));
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_update_profile_merges_only_given_fields() {
        let credentials = fresh();
        let account = credentials.register(&new_account("priya@example.com")).unwrap();

        let updated = credentials
            .update_profile(
                &account.id,
                &ProfileUpdate {
                    last_name: Some("Sharma".to_string()),
                    ..ProfileUpdate::default()
                },
            )
            .unwrap();

        assert_eq!(updated.first_name, "Priya");
        assert_eq!(updated.last_name, "Sharma");
        assert_eq!(updated.email, "priya@example.com");

        let err = auth_err(credentials.update_profile("missing", &ProfileUpdate::default()));
        assert!(matches!(err, AuthError::UserNotFound { .. }));
    }
}
