use std::sync::Arc;

use tracing::warn;

use amora_connect::api::{LoginRequest, LoginResponse};

use crate::draft::ValidationError;
use crate::flow::FlowError;
use crate::navigator::{Route, SessionNavigator};
use crate::service::{AccountService, ServiceError};
use crate::session::SessionContext;

#[derive(Debug, Clone)]
pub enum Event {
    EmailEdited(String),
    PasswordEdited(String),
    SubmitPressed,
    LoggedIn(Result<LoginResponse, ServiceError>),
}

/// The one request the shell dispatches for this flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login(LoginRequest),
}

#[derive(Debug)]
pub enum State {
    Editing {
        email: String,
        password: String,
        error: Option<FlowError>,
    },
    Submitting { email: String, password: String },
    Authenticated,
}

/// The login state machine. On success it writes the account into the
/// shell's session context and swaps the screen for home; `Authenticated`
/// is terminal.
#[derive(Debug, Default)]
pub struct LoginFlow {
    state: State,
}

impl Default for State {
    fn default() -> Self {
        Self::Editing {
            email: String::new(),
            password: String::new(),
            error: None,
        }
    }
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Advances the flow with one event. Same contract as the registration
    /// flow: at most one request in flight, stale settlements dropped.
    pub fn update(
        &mut self,
        session: &mut SessionContext,
        navigator: &mut dyn SessionNavigator,
        event: Event,
    ) -> Option<Command> {
        match &mut self.state {
            State::Editing {
                email,
                password,
                error,
            } => match event {
                Event::EmailEdited(value) => *email = value.trim().to_string(),
                Event::PasswordEdited(value) => *password = value,
                Event::SubmitPressed => {
                    if email.trim().is_empty() {
                        *error = Some(ValidationError::MissingField("email").into());
                        return None;
                    }
                    if password.is_empty() {
                        *error = Some(ValidationError::MissingField("password").into());
                        return None;
                    }
                    let request = LoginRequest {
                        email: email.clone(),
                        password: password.clone(),
                    };
                    self.state = State::Submitting {
                        email: request.email.clone(),
                        password: request.password.clone(),
                    };
                    return Some(Command::Login(request));
                }
                Event::LoggedIn(_) => {}
            },
            State::Submitting { email, password } => match event {
                Event::LoggedIn(Ok(response)) => {
                    session.authenticate(std::mem::take(email), response.token);
                    self.state = State::Authenticated;
                    navigator.replace(Route::Home);
                }
                Event::LoggedIn(Err(e)) => {
                    warn!("login failed: {}", e);
                    // The fields come back for another attempt.
                    self.state = State::Editing {
                        email: std::mem::take(email),
                        password: std::mem::take(password),
                        error: Some(FlowError::Service(e)),
                    };
                }
                // A repeated submit while the request is in flight is
                // dropped.
                _ => {}
            },
            State::Authenticated => {}
        }
        None
    }
}

/// Runs one command against the service and wraps its settlement as the
/// event the flow expects back.
pub async fn perform(
    service: Arc<dyn AccountService + Sync + Send>,
    command: Command,
) -> Event {
    match command {
        Command::Login(request) => Event::LoggedIn(service.login(request).await),
    }
}
