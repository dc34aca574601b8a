//! Session lifecycle: mock sign-in, guest sessions, and the sign-out
//! eviction of every durable record.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use mindease_config::StorageKeys;
use mindease_storage::KeyValueStore;

use crate::error::{SessionError, SessionResult};
use crate::types::User;

/// Artificial latency of the mock login/signup round trip
const AUTH_DELAY_MS: u64 = 500;

/// Owns the current identity and the session's durable records.
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
    user: Option<User>,
}

impl SessionManager {
    /// Restore a session from the persisted user record. Corrupt or
    /// unavailable data degrades to signed-out.
    pub async fn restore(store: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        let user = match store.get(&keys.user).await {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!(user_id = %user.id, "restored session");
                    Some(user)
                }
                Err(err) => {
                    warn!(error = %err, "stored user record is unreadable, starting signed out");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "user record unavailable, starting signed out");
                None
            }
        };

        Self { store, keys, user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_guest(&self) -> bool {
        self.user.as_ref().map(|u| u.is_guest).unwrap_or(false)
    }

    /// Signed in with a registered (persisted) identity
    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().map(|u| !u.is_guest).unwrap_or(false)
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Mock login. The display name is the email's local part; the
    /// password is accepted as-is (no real authentication).
    pub async fn login(&mut self, email: &str, _password: &str) -> SessionResult<&User> {
        let email = email.trim();
        if email.is_empty() {
            return Err(SessionError::Validation("Email must not be empty".to_string()));
        }

        tokio::time::sleep(Duration::from_millis(AUTH_DELAY_MS)).await;

        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = User::registered(name, email);
        self.persist_user(&user).await?;
        info!(user_id = %user.id, "logged in");
        Ok(&*self.user.insert(user))
    }

    /// Mock signup with an explicit display name
    pub async fn signup(&mut self, name: &str, email: &str, _password: &str) -> SessionResult<&User> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(SessionError::Validation(
                "Name and email must not be empty".to_string(),
            ));
        }

        tokio::time::sleep(Duration::from_millis(AUTH_DELAY_MS)).await;

        let user = User::registered(name, email);
        self.persist_user(&user).await?;
        info!(user_id = %user.id, "signed up");
        Ok(&*self.user.insert(user))
    }

    /// Guest session; nothing is ever persisted for it
    pub fn login_as_guest(&mut self) -> &User {
        let user = User::guest();
        info!(user_id = %user.id, "guest session started");
        &*self.user.insert(user)
    }

    /// Sign out and erase every durable record: the user, the mood
    /// log, and the chat history.
    pub async fn logout(&mut self) -> SessionResult<()> {
        self.user = None;
        self.store.delete(&self.keys.user).await?;
        self.store.delete(&self.keys.mood_log).await?;
        self.store.delete(&self.keys.chat_history).await?;
        info!("signed out, durable records erased");
        Ok(())
    }

    async fn persist_user(&self, user: &User) -> SessionResult<()> {
        let serialized = serde_json::to_string(user)?;
        self.store.set(&self.keys.user, &serialized).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindease_storage::MemoryStore;

    fn keys() -> StorageKeys {
        StorageKeys::default()
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_persists_user() {
        let store = Arc::new(MemoryStore::new());
        let mut session = SessionManager::restore(store.clone(), keys()).await;

        let user = session.login("amy@example.com", "hunter2").await.unwrap();
        assert_eq!(user.name, "amy");
        assert!(session.is_authenticated());
        assert!(!session.is_guest());

        let raw = store.get("mindease_user").await.unwrap().expect("persisted");
        let stored: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.email, "amy@example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_roundtrip() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut session = SessionManager::restore(store.clone(), keys()).await;
            session.signup("Sam", "sam@example.com", "pw").await.unwrap();
        }

        let session = SessionManager::restore(store, keys()).await;
        assert_eq!(session.user().unwrap().name, "Sam");
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_corrupt_user_record_starts_signed_out() {
        let store = Arc::new(MemoryStore::new());
        store.set("mindease_user", "{broken").await.unwrap();

        let session = SessionManager::restore(store, keys()).await;
        assert!(session.user().is_none());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_guest_is_never_persisted() {
        let store = Arc::new(MemoryStore::new());
        let mut session = SessionManager::restore(store.clone(), keys()).await;

        session.login_as_guest();
        assert!(session.is_guest());
        assert!(!session.is_authenticated());
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_erases_all_keys() {
        let store = Arc::new(MemoryStore::new());
        store.set("mindease_mood_logs", "[]").await.unwrap();
        store.set("mindease_chat_history", "[]").await.unwrap();

        let mut session = SessionManager::restore(store.clone(), keys()).await;
        session.login("amy@example.com", "pw").await.unwrap();

        session.logout().await.unwrap();
        assert!(session.user().is_none());
        assert!(store.get("mindease_user").await.unwrap().is_none());
        assert!(store.get("mindease_mood_logs").await.unwrap().is_none());
        assert!(store.get("mindease_chat_history").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_rejects_empty_email() {
        let store = Arc::new(MemoryStore::new());
        let mut session = SessionManager::restore(store, keys()).await;

        assert!(matches!(
            session.login("   ", "pw").await,
            Err(SessionError::Validation(_))
        ));
    }
}
