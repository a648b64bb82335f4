use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - read-only from the API's point of view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    /// Never written to responses; stays server-side.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_not_serialized() {
        let user = User {
            id: 1,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            created_at: Utc::now(),
            password_hash: "$argon2id$secret".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "ada");
        assert!(!json.to_string().contains("argon2id"));
    }
}
