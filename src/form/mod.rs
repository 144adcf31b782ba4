mod controller;
mod validation;


pub use controller::{
    FieldKey, FieldMeta, FormController, FormError, FormOptions, FormResult, FormSnapshot,
    RevalidateMode, SubmitState, ValidationMode,
};
pub use prepform_form_derive::FormModel;
pub use validation::{FieldLens, FieldValidator, FormModel, FormValidator, ValidationError};
