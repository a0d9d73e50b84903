pub mod converter;
pub mod status;

pub use converter::{Diagnostic, ErrorPayload, FormatConverter};
pub use status::Status;
