use thiserror::Error;
use time::Date;

/// Returns the number of complete 7-day periods between `birthdate` and
/// `today`.  The current date is an explicit parameter rather than an
/// ambient clock read, so the arithmetic is deterministic.
pub(crate) fn weeks_lived(birthdate: Date, today: Date) -> Result<u32, FutureBirthdateError> {
    let days = (today - birthdate).whole_days();
    if days < 0 {
        return Err(FutureBirthdateError(birthdate));
    }
    Ok(u32::try_from(days / 7).expect("a week count between calendar dates should fit in a u32"))
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("birthdate {0} is in the future")]
pub(crate) struct FutureBirthdateError(pub(crate) Date);
