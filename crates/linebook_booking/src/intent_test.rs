#[cfg(test)]
mod tests {
    use crate::intent::{parse_booking, ParseError};
    use chrono::{NaiveDate, NaiveTime};

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_without_year_uses_default_year() {
        let draft = parse_booking("12/02 13:00-17:00 ลูกค้า A", 2026).unwrap();

        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2026, 2, 12).unwrap());
        assert_eq!(draft.start, hm(13, 0));
        assert_eq!(draft.end, hm(17, 0));
        assert_eq!(draft.label, "ลูกค้า A");
        assert_eq!(draft.date_string(), "12/02/2026");
        assert_eq!(draft.time_range_string(), "13:00-17:00");
    }

    #[test]
    fn test_parse_with_literal_year() {
        let draft = parse_booking("1/3/2027 9:30-10:00 Meeting", 2026).unwrap();

        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2027, 3, 1).unwrap());
        assert_eq!(draft.date_string(), "01/03/2027");
        assert_eq!(draft.time_range_string(), "09:30-10:00");
    }

    #[test]
    fn test_short_literal_year_is_rendered_as_given() {
        let draft = parse_booking("12/02/26 13:00-17:00 ลูกค้า A", 2026).unwrap();

        assert_eq!(draft.date, NaiveDate::from_ymd_opt(26, 2, 12).unwrap());
        assert_eq!(draft.date_string(), "12/02/26");
        assert!(crate::messages::summary(&draft).contains("12/02/26"));
    }

    #[test]
    fn test_label_whitespace_is_collapsed() {
        let draft = parse_booking("  12/02   13:00-17:00   ลูกค้า \t  A  ", 2026).unwrap();
        assert_eq!(draft.label, "ลูกค้า A");
    }

    #[test]
    fn test_too_few_tokens() {
        assert_eq!(parse_booking("", 2026), Err(ParseError::TooFewTokens(0)));
        assert_eq!(
            parse_booking("12/02 13:00-17:00", 2026),
            Err(ParseError::TooFewTokens(2))
        );
        assert_eq!(parse_booking("hello", 2026), Err(ParseError::TooFewTokens(1)));
    }

    #[test]
    fn test_invalid_dates() {
        for date in ["13/13", "30/02", "31/04/2026", "12", "1/2/3/4", "aa/02", "12/+2", "29/02/2026"] {
            let message = format!("{date} 13:00-17:00 label");
            assert!(
                matches!(parse_booking(&message, 2026), Err(ParseError::InvalidDate(_))),
                "expected invalid date for {date}"
            );
        }
    }

    #[test]
    fn test_leap_day_with_default_year() {
        assert!(parse_booking("29/02 10:00-11:00 leap", 2028).is_ok());
        assert!(parse_booking("29/02 10:00-11:00 leap", 2026).is_err());
    }

    #[test]
    fn test_invalid_time_ranges() {
        for range in [
            "13:00",
            "13:00-",
            "17:00-13:00",
            "13:00-13:00",
            "25:00-26:00",
            "13:60-14:00",
            "1300-1400",
            "13:00-14:00-15:00",
            "13:0-14:00",
            "abc-def",
        ] {
            let message = format!("12/02 {range} label");
            assert!(
                matches!(parse_booking(&message, 2026), Err(ParseError::InvalidTimeRange(_))),
                "expected invalid time range for {range}"
            );
        }
    }

    #[test]
    fn test_confirm_like_message_is_parsed_not_confirmed() {
        assert_eq!(
            parse_booking("please CONFIRM now", 2026),
            Err(ParseError::InvalidDate("please".to_string()))
        );
    }
}
