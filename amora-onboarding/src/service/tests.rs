#[cfg(test)]
mod tests {
    use crate::service::http::NotSuccessResponseInfo;
    use crate::service::{AccountClient, ServiceConfig, ServiceError};
    use amora_connect::api::LoginResponse;

    #[test]
    fn test_client_keeps_configured_base_url() {
        let client = AccountClient::new(ServiceConfig {
            base_url: "http://10.0.0.7:8000".to_string(),
        });
        assert_eq!(client.base_url, "http://10.0.0.7:8000");
    }

    #[test]
    fn test_detail_prefers_the_service_reason() {
        let info = NotSuccessResponseInfo {
            status_code: 400,
            text: r#"{"detail":"email already registered"}"#.to_string(),
        };
        assert_eq!(info.detail(), "email already registered");

        let info = NotSuccessResponseInfo {
            status_code: 400,
            text: r#"{"message":"please try again"}"#.to_string(),
        };
        assert_eq!(info.detail(), "please try again");

        // Not JSON at all: hand the raw body back.
        let info = NotSuccessResponseInfo {
            status_code: 502,
            text: "bad gateway".to_string(),
        };
        assert_eq!(info.detail(), "bad gateway");
    }

    #[test]
    fn test_refusals_are_client_errors() {
        let refused = NotSuccessResponseInfo {
            status_code: 422,
            text: String::new(),
        };
        assert!(refused.is_client_error());

        let broken = NotSuccessResponseInfo {
            status_code: 502,
            text: String::new(),
        };
        assert!(!broken.is_client_error());
    }

    #[test]
    fn test_login_success_lives_in_the_body() {
        let ok: LoginResponse =
            serde_json::from_str(r#"{"status_code":200,"token":"tok123"}"#).unwrap();
        assert!(ok.is_success());

        let denied: LoginResponse =
            serde_json::from_str(r#"{"status_code":401,"message":"Invalid credentials"}"#).unwrap();
        assert!(!denied.is_success());
    }

    #[test]
    fn test_service_error_display() {
        assert_eq!(
            ServiceError::Rejected("email already registered".to_string()).to_string(),
            "Registration refused: email already registered"
        );
        assert_eq!(
            ServiceError::Unauthorized(None).to_string(),
            "Login failed"
        );
    }
}
