use async_trait::async_trait;
use reqwest::Response;

/// Information about an unsuccessful response.
#[derive(Debug, Clone)]
pub struct NotSuccessResponseInfo {
    pub status_code: u16,
    pub text: String,
}

impl NotSuccessResponseInfo {
    /// The service refused the request, as opposed to failing on it.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// Human-readable reason: the body's `detail` or `message` field when
    /// the service sent JSON, the raw body otherwise.
    pub fn detail(&self) -> String {
        if let Ok(body) = serde_json::from_str::<serde_json::Value>(&self.text) {
            for key in ["detail", "message"] {
                if let Some(reason) = body.get(key).and_then(|v| v.as_str()) {
                    return reason.to_string();
                }
            }
        }
        self.text.clone()
    }
}

#[async_trait]
pub trait ResponseExt {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo> {
        let status = self.status();
        if !status.is_success() {
            return Err(NotSuccessResponseInfo {
                status_code: status.as_u16(),
                text: self
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read response text".to_string()),
            });
        }
        Ok(self)
    }
}
