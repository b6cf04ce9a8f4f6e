pub mod quote;

pub use quote::{FieldViolation, Quote, DEFAULT_LANGUAGE};
