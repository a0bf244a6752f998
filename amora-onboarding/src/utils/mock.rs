use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use amora_connect::api::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, VerifyRequest, VerifyResponse,
};

use crate::navigator::{Route, SessionNavigator};
use crate::service::{AccountService, ServiceError};

/// Scripted stand-in for the identity service: an ordered list of expected
/// requests and the settlement each one gets. Calling it off-script, or
/// past the end of the script, panics the test.
#[derive(Debug)]
pub struct Service {
    script: Mutex<std::vec::IntoIter<(Option<Value>, Result<Value, ServiceError>)>>,
    calls: Mutex<Vec<Value>>,
}

impl Service {
    pub fn new(script: Vec<(Option<Value>, Result<Value, ServiceError>)>) -> Self {
        Self {
            script: Mutex::new(script.into_iter()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Requests observed so far, in dispatch order.
    pub fn calls(&self) -> Vec<Value> {
        self.calls.lock().expect("Failed to unlock").clone()
    }

    fn respond(&self, method: &str, params: Value) -> Result<Value, ServiceError> {
        let request = json!({ "method": method, "params": params });
        self.calls
            .lock()
            .expect("Failed to unlock")
            .push(request.clone());
        let (expected, response) = self
            .script
            .lock()
            .expect("Failed to unlock")
            .next()
            .expect("Mock service must have all requests scripted in the right order");
        if let Some(expected) = expected {
            assert_eq!(expected, request);
        }
        response
    }
}

#[async_trait]
impl AccountService for Service {
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, ServiceError> {
        let value = self.respond("register", serde_json::to_value(&request).unwrap())?;
        Ok(serde_json::from_value(value).unwrap())
    }

    async fn resend_verification(&self, email: &str) -> Result<(), ServiceError> {
        self.respond("resend", json!({ "email": email }))?;
        Ok(())
    }

    async fn verify(&self, request: VerifyRequest) -> Result<VerifyResponse, ServiceError> {
        let value = self.respond("verify", serde_json::to_value(&request).unwrap())?;
        Ok(serde_json::from_value(value).unwrap())
    }

    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ServiceError> {
        let value = self.respond("login", serde_json::to_value(&request).unwrap())?;
        Ok(serde_json::from_value(value).unwrap())
    }
}

/// One recorded navigator call, for assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCall {
    Navigate(Route),
    Replace(Route),
    ResetTo(Route),
}

/// Navigator that only remembers what it was asked to do.
#[derive(Debug, Default)]
pub struct Navigator {
    pub calls: Vec<NavCall>,
}

impl SessionNavigator for Navigator {
    fn navigate(&mut self, route: Route) {
        self.calls.push(NavCall::Navigate(route));
    }

    fn replace(&mut self, route: Route) {
        self.calls.push(NavCall::Replace(route));
    }

    fn reset_to(&mut self, route: Route) {
        self.calls.push(NavCall::ResetTo(route));
    }
}
