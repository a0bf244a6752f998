pub mod login;
mod message;

pub use message::{Command, Event};

use std::sync::Arc;

use tracing::warn;

use amora_connect::api::{RegisterRequest, VerifyRequest};

use crate::date::{CalendarDate, DateError, DateFormat};
use crate::draft::{
    acceptable_code_input, validate_code, DateOfBirth, RegistrationDraft, ValidationError,
};
use crate::navigator::{Route, SessionNavigator};
use crate::service::{AccountService, ServiceError};

/// Error attached to an editable state for the rendering surface to show.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowError {
    Validation(ValidationError),
    Date(DateError),
    Service(ServiceError),
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{}", e),
            Self::Date(e) => write!(f, "{}", e),
            Self::Service(e) => write!(f, "{}", e),
        }
    }
}

impl From<ValidationError> for FlowError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DateError> for FlowError {
    fn from(value: DateError) -> Self {
        Self::Date(value)
    }
}

impl From<ServiceError> for FlowError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

/// One issued verification code: the email it went to and what the user
/// typed so far. Dropped on success or explicit cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationState {
    pub email: String,
    pub code: String,
}

/// Where one registration attempt stands.
#[derive(Debug)]
pub enum State {
    /// Collecting fields; nothing dispatched yet.
    Editing {
        draft: RegistrationDraft,
        error: Option<FlowError>,
    },
    /// A register request is in flight.
    Submitting { email: String },
    /// Registration accepted; waiting for the emailed code.
    PendingVerification {
        verification: VerificationState,
        error: Option<FlowError>,
        resending: bool,
    },
    /// A verify request is in flight.
    Verifying { verification: VerificationState },
    /// Verified. The flow is done and will not move again.
    Completed,
}

/// The registration state machine. It advances only through [`update`],
/// one discrete event at a time; there is exactly one writer and no task
/// of its own.
///
/// [`update`]: RegistrationFlow::update
#[derive(Debug)]
pub struct RegistrationFlow {
    date_format: DateFormat,
    state: State,
}

impl RegistrationFlow {
    pub fn new(date_format: DateFormat) -> Self {
        Self {
            date_format,
            state: State::Editing {
                draft: RegistrationDraft::default(),
                error: None,
            },
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Advances the flow with one event and returns the single request the
    /// shell must dispatch, if any. While a request is in flight, triggers
    /// that would start another one are dropped, and a settlement for a
    /// state the flow has since left is ignored.
    pub fn update(
        &mut self,
        navigator: &mut dyn SessionNavigator,
        event: Event,
    ) -> Option<Command> {
        match &mut self.state {
            State::Editing { draft, error } => match event {
                Event::FirstNameEdited(value) => draft.first_name = value,
                Event::LastNameEdited(value) => draft.last_name = value,
                Event::DateOfBirthEdited(value) => draft.date_of_birth = DateOfBirth::Text(value),
                Event::DateOfBirthPicked(date) => draft.date_of_birth = DateOfBirth::Picked(date),
                Event::EmailEdited(value) => draft.email = value.trim().to_string(),
                Event::PasswordEdited(value) => draft.password = value,
                Event::PasswordConfirmationEdited(value) => draft.password_confirmation = value,
                Event::SubmitPressed => {
                    if let Err(e) = draft.validate() {
                        *error = Some(e.into());
                        return None;
                    }
                    let date = match &draft.date_of_birth {
                        DateOfBirth::Picked(date) => *date,
                        DateOfBirth::Text(raw) => {
                            match CalendarDate::parse(raw, self.date_format) {
                                Ok(date) => date,
                                Err(e) => {
                                    *error = Some(e.into());
                                    return None;
                                }
                            }
                        }
                    };
                    let request = RegisterRequest {
                        first_name: draft.first_name.trim().to_string(),
                        last_name: draft.last_name.trim().to_string(),
                        date_of_birth: date.to_iso(),
                        email: draft.email.clone(),
                        password: draft.password.clone(),
                    };
                    // The draft is consumed here; only the email survives
                    // the dispatch.
                    self.state = State::Submitting {
                        email: request.email.clone(),
                    };
                    return Some(Command::Register(request));
                }
                _ => {}
            },
            State::Submitting { email } => match event {
                Event::Registered(Ok(_)) => {
                    let verification = VerificationState {
                        email: std::mem::take(email),
                        code: String::new(),
                    };
                    self.state = State::PendingVerification {
                        verification,
                        error: None,
                        resending: false,
                    };
                }
                Event::Registered(Err(e)) => {
                    warn!("registration failed: {}", e);
                    self.state = State::Editing {
                        draft: RegistrationDraft::default(),
                        error: Some(FlowError::Service(e)),
                    };
                }
                // Anything else, a repeated submit included, is dropped
                // while the request is in flight.
                _ => {}
            },
            State::PendingVerification {
                verification,
                error,
                resending,
            } => match event {
                Event::CodeEdited(value) => {
                    let value = value.trim().to_string();
                    if acceptable_code_input(&value) {
                        verification.code = value;
                    }
                }
                Event::VerifyPressed => {
                    if *resending {
                        return None;
                    }
                    match validate_code(&verification.code) {
                        Ok(code) => {
                            let request = VerifyRequest {
                                email: verification.email.clone(),
                                code,
                            };
                            let verification = verification.clone();
                            self.state = State::Verifying { verification };
                            return Some(Command::Verify(request));
                        }
                        Err(e) => *error = Some(e.into()),
                    }
                }
                Event::ResendPressed => {
                    if *resending {
                        return None;
                    }
                    *resending = true;
                    *error = None;
                    verification.code.clear();
                    return Some(Command::Resend {
                        email: verification.email.clone(),
                    });
                }
                Event::ResendCompleted(result) => {
                    *resending = false;
                    if let Err(e) = result {
                        warn!("resending the verification code failed: {}", e);
                        *error = Some(FlowError::Service(e));
                    }
                }
                Event::CancelPressed => {
                    // Dropping the verification state is the cancellation;
                    // nothing is sent to the service.
                    self.state = State::Editing {
                        draft: RegistrationDraft::default(),
                        error: None,
                    };
                }
                _ => {}
            },
            State::Verifying { verification } => match event {
                Event::Verified(Ok(_)) => {
                    self.state = State::Completed;
                    navigator.replace(Route::Login);
                }
                Event::Verified(Err(e)) => {
                    warn!("verification failed: {}", e);
                    let mut verification = verification.clone();
                    verification.code.clear();
                    self.state = State::PendingVerification {
                        verification,
                        error: Some(FlowError::Service(e)),
                        resending: false,
                    };
                }
                _ => {}
            },
            State::Completed => {}
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
        Command::Register(request) => Event::Registered(service.register(request).await),
        Command::Resend { email } => {
            Event::ResendCompleted(service.resend_verification(&email).await)
        }
        Command::Verify(request) => Event::Verified(service.verify(request).await),
    }
}
