// Registration endpoint module
// Validation, storage, and the POST /register handler

mod response;
mod store;
mod types;
mod validate;

pub use store::UserStore;
pub use types::{RegistrationRequest, UserRecord};
pub use validate::{validate, ValidationError};

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::logger;

use response::{bad_request, json_response};
use types::RegisterResponse;

/// Handle `POST /register`
///
/// Reads the JSON body, validates it, and appends the derived record to
/// the shared store. Every rejection is a 400 with an `{"error":...}`
/// body; the only success shape is `{"user":{...}}`.
pub async fn handle_register(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let whole_body = if let Ok(collected) = req.collect().await {
        collected.to_bytes()
    } else {
        logger::log_register(400, "unreadable request body");
        return bad_request("Failed to read request body");
    };

    let request: RegistrationRequest = match serde_json::from_slice(&whole_body) {
        Ok(r) => r,
        Err(e) => {
            logger::log_register(400, &format!("malformed JSON body: {e}"));
            return bad_request("Invalid JSON body");
        }
    };

    match register(&request, &state.users) {
        Ok(user) => {
            logger::log_register(200, &format!("registered '{}'", user.username));
            json_response(StatusCode::OK, &RegisterResponse { user })
        }
        Err(err) => {
            // Log the rule message only; field values stay out of the logs
            logger::log_register(400, err.message());
            bad_request(err.message())
        }
    }
}

/// Validate and append in one step
///
/// The store is only touched when every rule passes, so a failed request
/// leaves it exactly as it was. The password never leaves this function.
pub fn register(
    req: &RegistrationRequest,
    store: &UserStore,
) -> Result<UserRecord, ValidationError> {
    let user = validate::validate(req)?;
    store.append(user.clone());
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: &str, password: &str) -> RegistrationRequest {
        RegistrationRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_register_appends_exactly_once() {
        let store = UserStore::new();
        let user = register(&request("alice", "a@example.com", "secret1"), &store)
            .expect("valid request");

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0], user);
    }

    #[test]
    fn test_failed_register_leaves_store_unchanged() {
        let store = UserStore::new();
        let err = register(&request("", "a@example.com", "secret1"), &store).unwrap_err();

        assert_eq!(err.message(), validate::USERNAME_REQUIRED);
        assert!(store.is_empty());
    }

    #[test]
    fn test_repeat_registration_stores_two_records() {
        let store = UserStore::new();
        let req = request("alice", "a@example.com", "secret1");

        register(&req, &store).expect("first");
        register(&req, &store).expect("second");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_stored_record_is_trimmed() {
        let store = UserStore::new();
        register(&request("  alice  ", " a@example.com ", "secret1"), &store).expect("valid");

        let users = store.snapshot();
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[0].email, "a@example.com");
    }
}
