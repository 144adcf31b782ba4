use chrono::{Local, NaiveDate};

use crate::form::{FormController, FormModel, FormOptions, FormResult};
use crate::rules::{self, Violation};

#[derive(Clone, FormModel)]
pub struct EditProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    #[form(skip)]
    pub avatar_url: String,
}

impl Default for EditProfileForm {
    fn default() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            email: "alex.j@eslearn.com".to_string(),
            phone: "9876543210".to_string(),
            dob: String::new(),
            avatar_url: "https://i.pravatar.cc/200".to_string(),
        }
    }
}

pub fn controller() -> FormResult<FormController<EditProfileForm, Violation>> {
    controller_with_clock(|| Local::now().date_naive())
}

/// The date of birth is judged against the date `clock` reports at each
/// validation pass, not at construction time.
pub fn controller_with_clock<C>(clock: C) -> FormResult<FormController<EditProfileForm, Violation>>
where
    C: Fn() -> NaiveDate + Send + Sync + 'static,
{
    let controller = FormController::new(EditProfileForm::default(), FormOptions::default());
    let fields = EditProfileForm::fields();

    controller.register_field_validator(
        fields.name(),
        |_form: &EditProfileForm, value: &String| rules::full_name(value),
    )?;
    controller.register_field_validator(
        fields.email(),
        |_form: &EditProfileForm, value: &String| rules::email_normalized(value),
    )?;
    controller.register_field_validator(
        fields.phone(),
        |_form: &EditProfileForm, value: &String| rules::mobile_number(value),
    )?;
    controller.register_field_validator(
        fields.dob(),
        move |_form: &EditProfileForm, value: &String| rules::date_of_birth(value, clock()),
    )?;

    controller.register_required_field(fields.name())?;
    controller.register_required_field(fields.email())?;
    controller.register_required_field(fields.phone())?;
    controller.register_required_field(fields.dob())?;
    controller.register_field_description(fields.dob(), "dd/mm/yyyy")?;

    Ok(controller)
}
