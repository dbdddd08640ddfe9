use chrono::{DateTime, Utc};

/// Returns the current time in UTC.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Formats the build time as `MM/DD/YYYY HH:MM UTC`.
///
/// # Arguments
/// * `time` - The build time.
pub fn build_date(time: DateTime<Utc>) -> String {
    time.format("%m/%d/%Y %H:%M UTC").to_string()
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_build_date() {
        let time = Utc.with_ymd_and_hms(2023, 4, 1, 7, 5, 59).unwrap();
        assert_eq!(build_date(time), "04/01/2023 07:05 UTC");

        let time = Utc.with_ymd_and_hms(2021, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(build_date(time), "12/31/2021 23:59 UTC");
    }

    #[test]
    fn test_now_has_expected_shape() {
        let date = build_date(now_utc());
        let bytes = date.as_bytes();

        assert_eq!(date.len(), "MM/DD/YYYY HH:MM UTC".len());
        for (i, b) in bytes.iter().enumerate() {
            match i {
                2 | 5 => assert_eq!(*b, b'/'),
                10 | 16 => assert_eq!(*b, b' '),
                13 => assert_eq!(*b, b':'),
                17.. => {}
                _ => assert!(b.is_ascii_digit(), "{} in {}", i, date),
            }
        }
        assert!(date.ends_with(" UTC"));
    }
}
