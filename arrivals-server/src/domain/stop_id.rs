//! Stop identifier types.

use std::fmt;

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop_id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

impl InvalidStopId {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Check whether a string has the accepted stop identifier shape.
///
/// The accepted shape is an optional uppercase letter prefix, then 2 to 4
/// digits, then an optional `N` or `S` direction suffix.
///
/// # Examples
///
/// ```
/// use arrivals_server::domain::is_valid;
///
/// assert!(is_valid("137N"));
/// assert!(is_valid("A42N"));
/// assert!(is_valid("137"));
///
/// assert!(!is_valid("abc"));
/// assert!(!is_valid("AB12N"));
/// assert!(!is_valid("12345N"));
/// ```
pub fn is_valid(s: &str) -> bool {
    check(s).is_ok()
}

fn check(s: &str) -> Result<(), InvalidStopId> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(InvalidStopId::new("must not be empty"));
    }

    let mut rest = bytes;

    if let [first, tail @ ..] = rest
        && first.is_ascii_uppercase()
    {
        rest = tail;
    }

    if let [head @ .., last] = rest
        && (*last == b'N' || *last == b'S')
    {
        rest = head;
    }

    if !rest.iter().all(u8::is_ascii_digit) {
        return Err(InvalidStopId::new(
            "expected optional letter, 2-4 digits, optional N/S",
        ));
    }

    if !(2..=4).contains(&rest.len()) {
        return Err(InvalidStopId::new("must contain 2 to 4 digits"));
    }

    Ok(())
}

/// A stop identifier that passed format validation.
///
/// Stop ids look like `137N`, `R11S` or `A42`: the trailing letter, when
/// present, is the direction of travel.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop identifier, rejecting anything [`is_valid`] rejects.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        check(s)?;
        Ok(Self(s.to_string()))
    }

    /// Returns the stop identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip the direction suffix from a feed stop id.
///
/// Removes the final character unconditionally, whatever it is. Feed stop
/// ids carry a one-letter direction, while the station table is keyed on
/// the bare id.
pub fn strip_direction(stop_id: &str) -> &str {
    match stop_id.char_indices().next_back() {
        Some((idx, _)) => &stop_id[..idx],
        None => stop_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_stops() {
        for s in ["137N", "247S", "137", "A42N", "R11S", "1234N", "42", "Z9999"] {
            assert!(is_valid(s), "{s} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_stops() {
        for s in [
            "abc", "AB12N", "12345N", "", "1", "N", "a42N", "137n", "137X", "137NS", " 137N",
            "137N ", "1-37", "A", "AN",
        ] {
            assert!(!is_valid(s), "{s:?} should be invalid");
        }
    }

    #[test]
    fn suffix_only_counts_once() {
        // "S" is a direction here, leaving two digits
        assert!(is_valid("S12S"));
        assert!(is_valid("N12"));
        assert!(!is_valid("12SS"));
    }

    #[test]
    fn parse_keeps_value() {
        let stop = StopId::parse("R11S").unwrap();
        assert_eq!(stop.as_str(), "R11S");
        assert_eq!(stop.to_string(), "R11S");
        assert_eq!(format!("{stop:?}"), "StopId(R11S)");
    }

    #[test]
    fn parse_rejects_with_reason() {
        let err = StopId::parse("12345N").unwrap_err();
        assert_eq!(err.to_string(), "invalid stop_id: must contain 2 to 4 digits");

        let err = StopId::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid stop_id: must not be empty");
    }

    #[test]
    fn strip_direction_removes_last_char() {
        assert_eq!(strip_direction("042S"), "042");
        assert_eq!(strip_direction("R11N"), "R11");
        assert_eq!(strip_direction("X"), "");
        assert_eq!(strip_direction(""), "");
    }
}
