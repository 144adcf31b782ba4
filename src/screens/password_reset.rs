use crate::form::{FormController, FormModel, FormOptions, FormResult};
use crate::rules::{self, Violation};

#[derive(Clone, Default, FormModel)]
pub struct PasswordResetForm {
    pub email: String,
}

pub fn controller() -> FormResult<FormController<PasswordResetForm, Violation>> {
    let controller = FormController::new(PasswordResetForm::default(), FormOptions::default());
    let fields = PasswordResetForm::fields();

    controller.register_field_validator(
        fields.email(),
        |_form: &PasswordResetForm, value: &String| rules::email(value),
    )?;

    controller.register_required_field(fields.email())?;
    controller.register_field_description(fields.email(), "Enter your registered email")?;

    Ok(controller)
}
