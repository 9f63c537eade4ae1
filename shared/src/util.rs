use std::sync::atomic::{AtomicU64, Ordering};

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current UTC timestamp as an ISO-8601 string (`2026-06-01T19:00:00.123Z` style)
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

static RESERVATION_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generate a reservation id unique within the process lifetime.
///
/// Layout: `res-<millis>-<seq>`. The sequence is a process-wide monotonic
/// counter, so two reservations created in the same millisecond still get
/// distinct ids.
pub fn reservation_id() -> String {
    let seq = RESERVATION_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("res-{}-{}", now_millis(), seq)
}

/// Generate a display reservation number: `TN-<YYYYMMDD>-<3-digit random>`.
///
/// Display only. The random suffix is drawn uniformly from [0, 1000) and is
/// not guaranteed unique; the id above is the primary key.
pub fn reservation_number() -> String {
    use rand::Rng;
    let date = chrono::Utc::now().format("%Y%m%d");
    let random: u32 = rand::thread_rng().gen_range(0..1000);
    format!("TN-{}-{:03}", date, random)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_reservation_ids_unique_in_rapid_succession() {
        let ids: HashSet<String> = (0..1000).map(|_| reservation_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_reservation_number_format() {
        let number = reservation_number();
        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "TN");
        assert_eq!(parts[1].len(), 8);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 3);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_reservation_number_contains_todays_date() {
        let number = reservation_number();
        let today = chrono::Utc::now().format("%Y%m%d").to_string();
        assert_eq!(&number[3..11], today.as_str());
    }
}
