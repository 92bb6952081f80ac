// Registration wire types
// Request/response shapes for the /register endpoint

use serde::{Deserialize, Serialize};

/// Incoming registration payload
///
/// All fields default to the empty string when absent from the JSON body,
/// so a missing field is rejected by the same presence check as an empty one.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// A registered user as held in the store
///
/// Constructed only from a request that passed validation, with username
/// and email already trimmed. The password is discarded before this type
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
}

/// Success response body: `{"user":{...}}`
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: UserRecord,
}

/// Failure response body: `{"error":"..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: RegistrationRequest = serde_json::from_str(r#"{"username":"alice"}"#)
            .expect("partial body should deserialize");
        assert_eq!(req.username, "alice");
        assert_eq!(req.email, "");
        assert_eq!(req.password, "");
    }

    #[test]
    fn test_success_body_shape() {
        let body = RegisterResponse {
            user: UserRecord {
                username: "alice".to_string(),
                email: "a@example.com".to_string(),
            },
        };
        let json = serde_json::to_string(&body).expect("serialize");
        assert_eq!(
            json,
            r#"{"user":{"username":"alice","email":"a@example.com"}}"#
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse {
            error: "Username required (server).".to_string(),
        };
        let json = serde_json::to_string(&body).expect("serialize");
        assert_eq!(json, r#"{"error":"Username required (server)."}"#);
    }
}
