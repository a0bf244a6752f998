use serde::{Deserialize, Serialize};

/// Status reported by the service when a registration was accepted but the
/// emailed code has not been confirmed yet.
pub const STATUS_PENDING_VERIFICATION: &str = "pending_verification";

/// Status reported by the service once the emailed code was confirmed.
pub const STATUS_VERIFIED: &str = "verified";

/// Body `status_code` value signalling a successful login.
pub const LOGIN_OK: u16 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    /// Canonical `YYYY-MM-DD` calendar date.
    pub date_of_birth: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub status: String,
}

/// Email-only re-trigger of the registration endpoint. The service is
/// idempotent on repeated pending registrations for the same address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub email: String,
    pub code: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The service signals login success in the body `status_code` field, not
/// the transport status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Opaque session token, present on success.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn is_success(&self) -> bool {
        self.status_code == Some(LOGIN_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_wire_names() {
        let request = RegisterRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: "1995-06-15".to_string(),
            email: "jane@x.com".to_string(),
            password: "p1".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "first_name": "Jane",
                "last_name": "Doe",
                "date_of_birth": "1995-06-15",
                "email": "jane@x.com",
                "password": "p1",
            })
        );
    }

    #[test]
    fn test_verify_request_code_is_an_integer() {
        let request = VerifyRequest {
            email: "jane@x.com".to_string(),
            code: 48213,
        };

        let serialized = serde_json::to_string(&request).unwrap();
        assert_eq!(serialized, r#"{"email":"jane@x.com","code":48213}"#);
    }

    #[test]
    fn test_login_response_tolerates_missing_fields() {
        let empty: LoginResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.status_code, None);
        assert_eq!(empty.token, None);
        assert!(!empty.is_success());

        let ok: LoginResponse =
            serde_json::from_str(r#"{"status_code":200,"token":"tok123"}"#).unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.token.as_deref(), Some("tok123"));

        let denied: LoginResponse =
            serde_json::from_str(r#"{"status_code":401,"message":"Invalid credentials"}"#).unwrap();
        assert!(!denied.is_success());
        assert_eq!(denied.message.as_deref(), Some("Invalid credentials"));
    }
}
