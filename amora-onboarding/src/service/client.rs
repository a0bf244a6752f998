use async_trait::async_trait;
use reqwest::Response;
use serde::Serialize;
use tracing::debug;

use amora_connect::api::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, ResendRequest, VerifyRequest,
    VerifyResponse, STATUS_PENDING_VERIFICATION, STATUS_VERIFIED,
};

use super::http::{NotSuccessResponseInfo, ResponseExt};
use super::{AccountService, ServiceConfig, ServiceError};

/// JSON-over-HTTP client of the identity service.
#[derive(Debug, Clone)]
pub struct AccountClient {
    http: reqwest::Client,
    pub(crate) base_url: String,
}

impl AccountClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    async fn post_json<T: Serialize + std::fmt::Debug>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, ServiceError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("Sending http request: POST {} {:?}", url, body);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header("User-Agent", format!("amora-onboarding/{}", crate::VERSION))
            .json(body)
            .send()
            .await?;

        Ok(response)
    }
}

#[async_trait]
impl AccountService for AccountClient {
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ServiceError> {
        let response = self
            .post_json("register", &request)
            .await?
            .check_success()
            .await
            .map_err(reject)?;

        let body: RegisterResponse = response.json().await?;
        if body.status != STATUS_PENDING_VERIFICATION {
            return Err(ServiceError::Rejected(format!(
                "unexpected registration status {:?}",
                body.status
            )));
        }
        Ok(body)
    }

    async fn resend_verification(&self, email: &str) -> Result<(), ServiceError> {
        // The registration endpoint re-issues the code for an address that
        // is already pending; no other payload is needed.
        let request = ResendRequest {
            email: email.to_string(),
        };
        self.post_json("register", &request)
            .await?
            .check_success()
            .await
            .map_err(reject)?;
        Ok(())
    }

    async fn verify(&self, request: VerifyRequest) -> Result<VerifyResponse, ServiceError> {
        let response = match self
            .post_json("verify", &request)
            .await?
            .check_success()
            .await
        {
            Ok(response) => response,
            // The endpoint answered but did not take the code: that is an
            // invalid code, not an outage.
            Err(_) => return Err(ServiceError::InvalidCode),
        };

        let body: VerifyResponse = response.json().await?;
        if body.status != STATUS_VERIFIED {
            return Err(ServiceError::InvalidCode);
        }
        Ok(body)
    }

    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ServiceError> {
        let response = self.post_json("login", &request).await?;

        // The service signals success in the body status_code field; the
        // transport status is not consulted here.
        let body: LoginResponse = response.json().await?;
        if !body.is_success() {
            return Err(ServiceError::Unauthorized(body.message));
        }
        Ok(body)
    }
}

fn reject(info: NotSuccessResponseInfo) -> ServiceError {
    if info.is_client_error() {
        ServiceError::Rejected(info.detail())
    } else {
        ServiceError::Unreachable(info.detail())
    }
}
