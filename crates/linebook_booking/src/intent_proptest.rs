#[cfg(test)]
mod tests {
    use crate::intent::{parse_booking, ParseError};
    use chrono::Datelike;
    use proptest::prelude::*;

    fn label_words() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-zA-Zก-ฮ0-9]{1,8}", 1..5)
    }

    proptest! {
        // Fewer than three tokens never yields a draft
        #[test]
        fn test_short_messages_are_rejected(words in prop::collection::vec("[^\\s]{1,10}", 0..3)) {
            let message = words.join(" ");
            prop_assert_eq!(parse_booking(&message, 2026), Err(ParseError::TooFewTokens(words.len())));
        }

        // Year defaults and the label is tokens 2.. joined by single spaces
        #[test]
        fn test_default_year_and_label(
            day in 1u32..=28,
            month in 1u32..=12,
            start_hour in 0u32..23,
            year in 2000i32..2100,
            words in label_words(),
            gap in "[ \t]{1,3}",
        ) {
            let end_hour = start_hour + 1;
            let message = format!(
                "{day}/{month}{gap}{start_hour:02}:00-{end_hour:02}:30{gap}{}",
                words.join(&gap)
            );

            let draft = parse_booking(&message, year).unwrap();

            prop_assert_eq!(draft.date.year(), year);
            prop_assert_eq!(draft.date.month(), month);
            prop_assert_eq!(draft.date.day(), day);
            prop_assert_eq!(draft.label, words.join(" "));
        }

        // An explicit year is taken literally
        #[test]
        fn test_literal_year(
            day in 1u32..=28,
            month in 1u32..=12,
            year in 1000i32..=9999,
            default_year in 2000i32..2100,
        ) {
            let message = format!("{day:02}/{month:02}/{year} 08:00-09:00 label");
            let draft = parse_booking(&message, default_year).unwrap();
            prop_assert_eq!(draft.date.year(), year);
        }

        // Any accepted draft has start strictly before end
        #[test]
        fn test_accepted_ranges_are_ordered(
            sh in 0u32..24, sm in 0u32..60, eh in 0u32..24, em in 0u32..60,
        ) {
            let message = format!("01/01 {sh:02}:{sm:02}-{eh:02}:{em:02} label");
            match parse_booking(&message, 2026) {
                Ok(draft) => prop_assert!(draft.start < draft.end),
                Err(err) => {
                    prop_assert_eq!(err, ParseError::InvalidTimeRange(format!("{sh:02}:{sm:02}-{eh:02}:{em:02}")));
                    prop_assert!((sh, sm) >= (eh, em));
                }
            }
        }
    }
}
