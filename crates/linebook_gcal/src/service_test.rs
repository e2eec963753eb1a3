#[cfg(test)]
mod tests {
    use crate::service::{to_google_event, GcalServiceError};
    use chrono::{TimeZone, Utc};
    use linebook_common::services::CalendarEvent;

    fn booking_event(start: &str, end: &str) -> CalendarEvent {
        CalendarEvent {
            start_time: start.to_string(),
            end_time: end.to_string(),
            summary: "ลูกค้า A".to_string(),
            description: Some("สร้างจาก LINE Booking Bot".to_string()),
            time_zone: Some("Asia/Bangkok".to_string()),
        }
    }

    #[test]
    fn test_to_google_event_keeps_instants_and_zone() {
        let event = to_google_event(booking_event(
            "2026-02-12T13:00:00+07:00",
            "2026-02-12T17:00:00+07:00",
        ))
        .unwrap();

        assert_eq!(event.summary.as_deref(), Some("ลูกค้า A"));
        assert_eq!(event.description.as_deref(), Some("สร้างจาก LINE Booking Bot"));

        let start = event.start.unwrap();
        assert_eq!(
            start.date_time,
            Some(Utc.with_ymd_and_hms(2026, 2, 12, 6, 0, 0).unwrap())
        );
        assert_eq!(start.time_zone.as_deref(), Some("Asia/Bangkok"));
        assert_eq!(
            event.end.unwrap().date_time,
            Some(Utc.with_ymd_and_hms(2026, 2, 12, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_to_google_event_rejects_bad_time() {
        let err = to_google_event(booking_event("12/02/2026 13:00", "2026-02-12T17:00:00+07:00"))
            .unwrap_err();

        match err {
            GcalServiceError::TimeParseError(msg) => assert!(msg.contains("start_time")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
