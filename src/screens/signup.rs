use crate::form::{FormController, FormModel, FormOptions, FormResult};
use crate::rules::{self, Violation};

#[derive(Clone, Default, FormModel)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

pub fn controller() -> FormResult<FormController<SignupForm, Violation>> {
    let controller = FormController::new(SignupForm::default(), FormOptions::default());
    let fields = SignupForm::fields();

    controller.register_field_validator(fields.name(), |_form: &SignupForm, value: &String| {
        rules::full_name(value)
    })?;
    controller.register_field_validator(fields.email(), |_form: &SignupForm, value: &String| {
        rules::email(value)
    })?;
    controller.register_field_validator(fields.password(), |_form: &SignupForm, value: &String| {
        rules::signup_password(value)
    })?;
    controller.register_field_validator(
        fields.confirm_password(),
        |form: &SignupForm, value: &String| rules::confirm_password(&form.password, value),
    )?;
    controller.register_field_validator(
        fields.accept_terms(),
        |_form: &SignupForm, value: &bool| rules::terms_accepted(*value),
    )?;
    controller.register_dependency(fields.password(), fields.confirm_password())?;

    controller.register_required_field(fields.name())?;
    controller.register_required_field(fields.email())?;
    controller.register_required_field(fields.password())?;
    controller.register_required_field(fields.confirm_password())?;
    controller.register_required_field(fields.accept_terms())?;
    controller.register_field_description(fields.email(), "example@email.com")?;

    Ok(controller)
}
