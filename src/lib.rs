pub mod form;
pub mod rules;
pub mod screens;

pub use form::{FormController, FormOptions, FormSnapshot};
pub use rules::Violation;
