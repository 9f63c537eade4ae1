//! Availability generation
//!
//! Deterministic pseudo-random slot availability. This is decorative
//! simulation, not a scheduler: no capacity is tracked, and the result is a
//! pure function of `(restaurant_id, date)`.

/// Quarter-hour booking slots from 11:00 through 21:45 inclusive (44 total)
pub fn generate_time_slots() -> Vec<String> {
    let mut slots = Vec::with_capacity(44);
    for hour in 11..=21 {
        for minute in (0..60).step_by(15) {
            slots.push(format!("{:02}:{:02}", hour, minute));
        }
    }
    slots
}

/// Available slots for a restaurant on a date.
///
/// Seed = numeric value of the id + char code of the date's last character;
/// slot `i` survives iff `(i + seed) % 3 != 0`, removing exactly one third
/// of the schedule in index order. When the id is non-numeric or the date is
/// empty there is no usable seed and every slot is returned.
pub fn available_slots(restaurant_id: &str, date: &str) -> Vec<String> {
    let all_slots = generate_time_slots();

    let id_value: Option<i64> = restaurant_id.parse().ok();
    let last_char = date.chars().last().map(|c| c as i64);
    let (Some(id_value), Some(last_char)) = (id_value, last_char) else {
        return all_slots;
    };

    let seed = id_value + last_char;
    all_slots
        .into_iter()
        .enumerate()
        .filter(|(index, _)| (*index as i64 + seed).rem_euclid(3) != 0)
        .map(|(_, slot)| slot)
        .collect()
}
