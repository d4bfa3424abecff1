pub mod envelope;
pub mod errors;
pub mod form_state;
pub mod request_seq;

pub use envelope::DataEnvelope;
pub use errors::{ApiError, SubmitError, ValidationError};
pub use form_state::{FormPhase, FormState};
pub use request_seq::{RequestSequence, RequestToken};
