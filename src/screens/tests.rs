use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;

use crate::form::{FieldLens, FormModel, SubmitState};
use crate::rules::Violation;

use super::{edit_profile, login, password_reset, signup};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must be valid")
}

fn fill_valid_signup(controller: &crate::form::FormController<signup::SignupForm, Violation>) {
    let fields = signup::SignupForm::fields();
    controller
        .set(fields.name(), "Priya Sharma".to_string())
        .expect("set name");
    controller
        .set(fields.email(), "priya@example.com".to_string())
        .expect("set email");
    controller
        .set(fields.password(), "longenough".to_string())
        .expect("set password");
    controller
        .set(fields.confirm_password(), "longenough".to_string())
        .expect("set confirm password");
    controller
        .set(fields.accept_terms(), true)
        .expect("set terms");
}

#[test]
fn signup_submits_only_when_every_field_passes() {
    let controller = signup::controller().expect("build signup controller");
    let fields = signup::SignupForm::fields();
    let submitted = Arc::new(AtomicUsize::new(0));

    fill_valid_signup(&controller);
    controller
        .set(fields.accept_terms(), false)
        .expect("uncheck terms");
    {
        let submitted = submitted.clone();
        controller
            .submit(move |_model| {
                submitted.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .expect("submit");
    }
    assert_eq!(submitted.load(Ordering::SeqCst), 0);

    let snapshot = controller.snapshot().expect("snapshot");
    assert!(!snapshot.is_valid);
    assert_eq!(snapshot.submit_state, SubmitState::Failed);
    assert_eq!(snapshot.first_error, Some(fields.accept_terms().key()));
    assert_eq!(
        snapshot
            .field_meta
            .get(&fields.accept_terms().key())
            .expect("terms meta")
            .errors,
        vec![Violation::TermsNotAccepted]
    );
    assert!(
        snapshot
            .field_meta
            .get(&fields.email().key())
            .is_some_and(|meta| meta.errors.is_empty())
    );

    controller
        .set(fields.accept_terms(), true)
        .expect("accept terms");
    {
        let submitted = submitted.clone();
        controller
            .submit(move |_model| {
                submitted.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .expect("submit");
    }
    assert_eq!(submitted.load(Ordering::SeqCst), 1);
    assert_eq!(
        controller.snapshot().expect("snapshot").submit_state,
        SubmitState::Succeeded
    );
}

#[test]
fn signup_rejects_mismatched_confirmation() {
    let controller = signup::controller().expect("build signup controller");
    let fields = signup::SignupForm::fields();

    fill_valid_signup(&controller);
    controller
        .set(fields.confirm_password(), "longenough!".to_string())
        .expect("set mismatched confirm");
    controller.submit(|_model| Ok(())).expect("submit");

    let snapshot = controller.snapshot().expect("snapshot");
    assert!(!snapshot.is_valid);
    assert_eq!(
        snapshot
            .field_meta
            .get(&fields.confirm_password().key())
            .expect("confirm meta")
            .errors,
        vec![Violation::PasswordMismatch]
    );
}

#[test]
fn signup_password_requires_eight_characters() {
    let controller = signup::controller().expect("build signup controller");
    let fields = signup::SignupForm::fields();

    fill_valid_signup(&controller);
    controller
        .set(fields.password(), "seven77".to_string())
        .expect("set short password");
    controller
        .set(fields.confirm_password(), "seven77".to_string())
        .expect("set matching confirm");
    assert!(!controller.validate_form().expect("validate"));
    assert_eq!(
        controller
            .field_meta(fields.password())
            .expect("meta")
            .expect("meta exists")
            .errors,
        vec![Violation::PasswordTooShort { min_chars: 8 }]
    );
}

#[test]
fn signup_failed_submit_marks_every_empty_field() {
    let controller = signup::controller().expect("build signup controller");
    let fields = signup::SignupForm::fields();

    controller.submit(|_model| Ok(())).expect("submit");
    let snapshot = controller.snapshot().expect("snapshot");
    assert!(!snapshot.is_valid);
    for key in [
        fields.name().key(),
        fields.email().key(),
        fields.password().key(),
        fields.confirm_password().key(),
        fields.accept_terms().key(),
    ] {
        assert!(
            snapshot
                .field_meta
                .get(&key)
                .is_some_and(|meta| !meta.errors.is_empty()),
            "{key} should be marked invalid"
        );
    }
}

#[test]
fn signup_clears_a_field_error_the_moment_it_changes() {
    let controller = signup::controller().expect("build signup controller");
    let fields = signup::SignupForm::fields();

    controller.submit(|_model| Ok(())).expect("submit");
    controller
        .set(fields.name(), "P".to_string())
        .expect("set name");

    let snapshot = controller.snapshot().expect("snapshot");
    assert!(
        snapshot
            .field_meta
            .get(&fields.name().key())
            .is_some_and(|meta| meta.errors.is_empty()),
        "edited field is cleared even though the new value is still invalid"
    );
    assert!(
        snapshot
            .field_meta
            .get(&fields.email().key())
            .is_some_and(|meta| !meta.errors.is_empty()),
        "unedited fields keep their error flags"
    );
}

#[test]
fn login_accepts_six_character_password_where_signup_does_not() {
    let controller = login::controller().expect("build login controller");
    let fields = login::LoginForm::fields();

    controller
        .set(fields.email(), "user@example.com".to_string())
        .expect("set email");
    controller
        .set(fields.password(), "six666".to_string())
        .expect("set password");
    assert!(controller.validate_form().expect("validate"));

    controller
        .set(fields.password(), "five5".to_string())
        .expect("set shorter password");
    assert!(!controller.validate_form().expect("validate"));
    assert_eq!(
        controller
            .field_meta(fields.password())
            .expect("meta")
            .expect("meta exists")
            .errors,
        vec![Violation::PasswordTooShort { min_chars: 6 }]
    );
}

#[test]
fn password_reset_only_checks_the_email() {
    let controller = password_reset::controller().expect("build reset controller");
    let fields = password_reset::PasswordResetForm::fields();

    assert!(!controller.validate_form().expect("validate empty"));
    controller
        .set(fields.email(), "user@example.com".to_string())
        .expect("set email");
    assert!(controller.validate_form().expect("validate"));

    let submitted = Arc::new(AtomicUsize::new(0));
    {
        let submitted = submitted.clone();
        controller
            .submit(move |model| {
                assert_eq!(model.email, "user@example.com");
                submitted.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .expect("submit");
    }
    assert_eq!(submitted.load(Ordering::SeqCst), 1);
}

#[test]
fn edit_profile_seeded_values_pass_once_a_dob_is_set() {
    let controller =
        edit_profile::controller_with_clock(|| date(2023, 6, 15)).expect("build controller");
    let fields = edit_profile::EditProfileForm::fields();

    assert!(!controller.validate_form().expect("validate without dob"));
    assert_eq!(
        controller
            .field_meta(fields.dob())
            .expect("meta")
            .expect("meta exists")
            .errors,
        vec![Violation::DobMissing]
    );

    controller
        .set(fields.dob(), "15/06/2000".to_string())
        .expect("set dob");
    assert!(controller.validate_form().expect("validate"));
}

#[test]
fn edit_profile_enforces_the_thirteen_year_minimum() {
    let fields = edit_profile::EditProfileForm::fields();

    let too_young =
        edit_profile::controller_with_clock(|| date(2023, 6, 14)).expect("build controller");
    too_young
        .set(fields.dob(), "15/06/2010".to_string())
        .expect("set dob");
    assert!(!too_young.validate_form().expect("validate"));
    assert_eq!(
        too_young
            .field_meta(fields.dob())
            .expect("meta")
            .expect("meta exists")
            .errors,
        vec![Violation::Underage]
    );

    let of_age =
        edit_profile::controller_with_clock(|| date(2023, 6, 15)).expect("build controller");
    of_age
        .set(fields.dob(), "15/06/2010".to_string())
        .expect("set dob");
    assert!(of_age.validate_form().expect("validate"));
}

#[test]
fn edit_profile_rejects_a_future_birth_date() {
    let controller =
        edit_profile::controller_with_clock(|| date(2023, 6, 15)).expect("build controller");
    let fields = edit_profile::EditProfileForm::fields();

    controller
        .set(fields.dob(), "16/06/2023".to_string())
        .expect("set future dob");
    assert!(!controller.validate_form().expect("validate"));
    assert_eq!(
        controller
            .field_meta(fields.dob())
            .expect("meta")
            .expect("meta exists")
            .errors,
        vec![Violation::DobInFuture]
    );
}

#[test]
fn edit_profile_normalizes_email_case_and_validates_phone() {
    let controller =
        edit_profile::controller_with_clock(|| date(2023, 6, 15)).expect("build controller");
    let fields = edit_profile::EditProfileForm::fields();

    controller
        .set(fields.dob(), "15/06/2000".to_string())
        .expect("set dob");
    controller
        .set(fields.email(), "Alex.J@ESLearn.COM".to_string())
        .expect("set shouty email");
    assert!(controller.validate_form().expect("validate"));

    controller
        .set(fields.phone(), "0876543210".to_string())
        .expect("set bad phone");
    assert!(!controller.validate_field(fields.phone()).expect("validate phone"));
    assert_eq!(
        controller
            .field_meta(fields.phone())
            .expect("meta")
            .expect("meta exists")
            .errors,
        vec![Violation::InvalidMobileNumber]
    );
}

#[test]
fn edit_profile_surfaces_messages_after_a_failed_save() {
    let controller =
        edit_profile::controller_with_clock(|| date(2023, 6, 15)).expect("build controller");
    let fields = edit_profile::EditProfileForm::fields();

    controller.submit(|_model| Ok(())).expect("submit");
    assert_eq!(
        controller
            .field_error_for_display(fields.dob())
            .expect("display error"),
        Some("Date of birth is required".to_string())
    );
    assert_eq!(
        controller
            .field_error_for_display(fields.name())
            .expect("display error"),
        None,
        "fields that passed have nothing to display"
    );
}

#[test]
fn edit_profile_avatar_travels_with_the_model_unvalidated() {
    let controller =
        edit_profile::controller_with_clock(|| date(2023, 6, 15)).expect("build controller");
    let snapshot = controller.snapshot().expect("snapshot");
    assert_eq!(snapshot.model.avatar_url, "https://i.pravatar.cc/200");
    assert!(!snapshot.field_meta.contains_key(&crate::form::FieldKey::new("avatar_url")));
}
