use chrono::NaiveDate;

/// Parse an eight digit `YYYYMMDD` birth date.
///
/// Month and day ranges follow the Gregorian calendar, leap years
/// included. Year `0000` is rejected.
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = value[0..4].parse().ok()?;
    let month: u32 = value[4..6].parse().ok()?;
    let day: u32 = value[6..8].parse().ok()?;
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn is_valid_birth_date(value: &str) -> bool {
    parse_birth_date(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_components() {
        assert_eq!(
            parse_birth_date("19491231"),
            NaiveDate::from_ymd_opt(1949, 12, 31)
        );
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(!is_valid_birth_date("1949123"));
        assert!(!is_valid_birth_date("1949-12-31"));
        assert!(!is_valid_birth_date("+9491231"));
        assert!(!is_valid_birth_date("00000101"));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(!is_valid_birth_date("19490001"));
        assert!(!is_valid_birth_date("19491301"));
        assert!(!is_valid_birth_date("19491200"));
        assert!(!is_valid_birth_date("19490431"));
    }
}
