use amora_connect::api::{RegisterRequest, RegisterResponse, VerifyRequest, VerifyResponse};

use crate::date::CalendarDate;
use crate::service::ServiceError;

/// Everything that can advance a registration flow: user actions coming
/// from the rendering surface, and settlements of dispatched requests.
#[derive(Debug, Clone)]
pub enum Event {
    FirstNameEdited(String),
    LastNameEdited(String),
    DateOfBirthEdited(String),
    DateOfBirthPicked(CalendarDate),
    EmailEdited(String),
    PasswordEdited(String),
    PasswordConfirmationEdited(String),
    SubmitPressed,
    Registered(Result<RegisterResponse, ServiceError>),
    CodeEdited(String),
    VerifyPressed,
    Verified(Result<VerifyResponse, ServiceError>),
    ResendPressed,
    ResendCompleted(Result<(), ServiceError>),
    CancelPressed,
}

/// A request the shell must dispatch on the flow's behalf. At most one of
/// these is outstanding per flow instance; the settlement comes back in as
/// an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register(RegisterRequest),
    Resend { email: String },
    Verify(VerifyRequest),
}
