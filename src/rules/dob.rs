use chrono::{Datelike, NaiveDate};

/// Whole completed years between `birth` and `on`, counting the birthday
/// itself as completed.
pub fn age_in_years(birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
