pub mod client;
pub mod http;

#[cfg(test)]
mod tests;

use std::fmt::Debug;

use async_trait::async_trait;

use amora_connect::api::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, VerifyRequest, VerifyResponse,
};

pub use client::AccountClient;

/// Development endpoint of the identity service.
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Environment override for the identity service endpoint.
const API_URL_VAR: &str = "AMORA_API_URL";

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl ServiceConfig {
    /// Resolves the service endpoint, preferring the environment override.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Something went wrong between dispatching a request and getting a usable
/// answer out of the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service refused the registration, with its human-readable
    /// reason.
    Rejected(String),
    /// The service did not accept the verification code.
    InvalidCode,
    /// The service refused the credentials.
    Unauthorized(Option<String>),
    /// The request never settled into a service answer.
    Unreachable(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rejected(detail) => write!(f, "Registration refused: {}", detail),
            Self::InvalidCode => write!(f, "The verification code was not accepted"),
            Self::Unauthorized(Some(message)) => write!(f, "Login failed: {}", message),
            Self::Unauthorized(None) => write!(f, "Login failed"),
            Self::Unreachable(reason) => write!(f, "Service unreachable: {}", reason),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<reqwest::Error> for ServiceError {
    fn from(value: reqwest::Error) -> Self {
        Self::Unreachable(value.to_string())
    }
}

/// The remote identity service, seen from the client side. One method per
/// endpoint; every call is a single attempt with nothing retried behind
/// the caller's back.
#[async_trait]
pub trait AccountService: Debug {
    /// Submits a full registration. `Ok` means the service accepted it and
    /// issued a verification code to the given email.
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ServiceError>;

    /// Re-triggers code issuance for a pending registration.
    async fn resend_verification(&self, email: &str) -> Result<(), ServiceError>;

    /// Confirms the emailed code. `Ok` means the account is now verified.
    async fn verify(&self, request: VerifyRequest) -> Result<VerifyResponse, ServiceError>;

    /// Exchanges credentials for a session token.
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ServiceError>;
}
