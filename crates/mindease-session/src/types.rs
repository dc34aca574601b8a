use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in identity. Not real authentication; a local mock that
/// only distinguishes guests from registered users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_guest: bool,
}

impl User {
    pub(crate) fn registered(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: format!("user_{}", Uuid::new_v4()),
            name: name.into(),
            email: email.into(),
            is_guest: false,
        }
    }

    pub(crate) fn guest() -> Self {
        Self {
            id: format!("guest_{}", Uuid::new_v4()),
            name: "Guest".to_string(),
            email: String::new(),
            is_guest: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_user() {
        let user = User::registered("amy", "amy@example.com");
        assert!(user.id.starts_with("user_"));
        assert!(!user.is_guest);
    }

    #[test]
    fn test_guest_user() {
        let user = User::guest();
        assert!(user.id.starts_with("guest_"));
        assert!(user.is_guest);
        assert!(user.email.is_empty());
    }
}
