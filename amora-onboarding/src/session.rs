use tracing::info;

use crate::navigator::{Route, SessionNavigator};

/// The authenticated account as far as the client knows it: the email the
/// user logged in with and the opaque token the service handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    pub token: Option<String>,
}

/// Session state owned by the application shell and handed to the flows by
/// mutable reference. The flows are its only writers.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    account: Option<Account>,
}

impl SessionContext {
    pub fn is_logged_in(&self) -> bool {
        self.account.is_some()
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub(crate) fn authenticate(&mut self, email: String, token: Option<String>) {
        info!("session opened for {}", email);
        self.account = Some(Account { email, token });
    }

    /// Forgets the account and restarts navigation at the login screen.
    pub fn log_out(&mut self, navigator: &mut dyn SessionNavigator) {
        if let Some(account) = self.account.take() {
            info!("session closed for {}", account.email);
        }
        navigator.reset_to(Route::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::mock::{self, NavCall};

    #[test]
    fn test_log_out_clears_account_and_resets_to_login() {
        let mut navigator = mock::Navigator::default();
        let mut session = SessionContext::default();
        session.authenticate("jane@x.com".to_string(), Some("tok123".to_string()));
        assert!(session.is_logged_in());

        session.log_out(&mut navigator);
        assert!(!session.is_logged_in());
        assert_eq!(session.account(), None);
        assert_eq!(navigator.calls, vec![NavCall::ResetTo(Route::Login)]);
    }
}
