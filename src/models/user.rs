//! User model as served by the upstream directory API.

use serde::{Deserialize, Serialize};

/// A user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialize_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {"city": "Gwenborough"},
            "phone": "1-770-736-8031",
            "website": "hildegard.org"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.username, "Bret");
        assert_eq!(user.website.as_deref(), Some("hildegard.org"));
    }

    #[test]
    fn test_user_optional_contact_fields() {
        let json = r#"{"id": 2, "name": "Ervin", "username": "Antonette", "email": "s@m.tv"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert!(user.phone.is_none());
        assert!(user.website.is_none());
    }
}
