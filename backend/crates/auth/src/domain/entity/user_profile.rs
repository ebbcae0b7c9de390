//! User Profile Entity
//!
//! The blog API's view of the signed-in user. The gateway does not own
//! this data: known fields are typed for convenience, everything else is
//! carried through as-is so new API fields reach the frontend unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Profile row ID
    pub id: String,
    /// Auth user ID
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_are_preserved() {
        let body = r##"{
            "id": "p1",
            "user_id": "u1",
            "username": "writer",
            "display_name": "",
            "bio": "hello",
            "custom_colors": ["#fff", "#000"]
        }"##;

        let profile: UserProfile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.username.as_deref(), Some("writer"));
        assert_eq!(profile.extra.get("bio"), Some(&Value::from("hello")));

        let round = serde_json::to_value(&profile).unwrap();
        assert_eq!(round["custom_colors"][1], "#000");
        assert_eq!(round["user_id"], "u1");
    }
}
