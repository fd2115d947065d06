pub mod controller;
pub mod gateway;
pub mod validation;

pub use controller::{Completion, ContactForm, PendingSubmission, SubmissionStatus, SubmitRejected};
pub use gateway::{
    validate_email_format, Delay, DispatchError, EmailDispatchResult, EmailGateway, GatewayMode,
};
pub use validation::{trimmed_len, validate, ContactFormInput, Field, ValidationErrors};
