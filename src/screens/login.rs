use crate::form::{FormController, FormModel, FormOptions, FormResult};
use crate::rules::{self, Violation};

#[derive(Clone, Default, FormModel)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

pub fn controller() -> FormResult<FormController<LoginForm, Violation>> {
    let controller = FormController::new(LoginForm::default(), FormOptions::default());
    let fields = LoginForm::fields();

    controller.register_field_validator(fields.email(), |_form: &LoginForm, value: &String| {
        rules::email(value)
    })?;
    controller.register_field_validator(fields.password(), |_form: &LoginForm, value: &String| {
        rules::login_password(value)
    })?;

    controller.register_required_field(fields.email())?;
    controller.register_required_field(fields.password())?;
    controller.register_field_description(fields.email(), "name@example.com")?;

    Ok(controller)
}
