/// Room catalogue and pricing for the booking demo
use trellis_core::calendar::Selection;
use trellis_core::components::RadioOption;

pub struct Room {
    pub value: &'static str,
    pub label: &'static str,
    /// nightly rate in minor currency units
    pub rate: i64,
    pub sold_out: bool,
}

pub static ROOMS: &[Room] = &[
    Room {
        value: "single",
        label: "Single",
        rate: 8000,
        sold_out: false,
    },
    Room {
        value: "double",
        label: "Double",
        rate: 12000,
        sold_out: false,
    },
    Room {
        value: "suite",
        label: "Suite",
        rate: 25000,
        sold_out: false,
    },
    Room {
        value: "dorm",
        label: "Dormitory (sold out)",
        rate: 3000,
        sold_out: true,
    },
];

pub fn find_room(value: &str) -> Option<&'static Room> {
    ROOMS.iter().find(|r| r.value == value)
}

pub fn room_options() -> Vec<RadioOption> {
    ROOMS
        .iter()
        .map(|r| RadioOption {
            disabled: r.sold_out,
            ..RadioOption::new(r.value, r.label)
        })
        .collect()
}

/// Next bookable room after `current`, wrapping around. `step` is +1 or -1.
pub fn cycle_room(current: &str, step: isize) -> &'static str {
    let bookable: Vec<&Room> = ROOMS.iter().filter(|r| !r.sold_out).collect();
    let idx = bookable
        .iter()
        .position(|r| r.value == current)
        .unwrap_or(0) as isize;
    let len = bookable.len() as isize;
    bookable[(idx + step).rem_euclid(len) as usize].value
}

/// Nights covered by a complete range, `None` until both ends are picked
pub fn stay_nights(selection: &Selection) -> Option<i64> {
    match (selection.start, selection.end) {
        (Some(start), Some(end)) if end > start => Some((end - start).num_days()),
        _ => None,
    }
}

/// Total in minor units for the stay, if the range and room are valid
pub fn stay_total(selection: &Selection, room: &str) -> Option<i64> {
    let nights = stay_nights(selection)?;
    let room = find_room(room)?;
    Some(nights * room.rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_stay_total() {
        let stay = Selection::range(ymd(2024, 2, 28), ymd(2024, 3, 2));
        // leap day included
        assert_eq!(stay_nights(&stay), Some(3));
        assert_eq!(stay_total(&stay, "double"), Some(36000));
        assert_eq!(stay_total(&stay, "penthouse"), None);
    }

    #[test]
    fn test_incomplete_range_has_no_total() {
        assert_eq!(stay_nights(&Selection::single(ymd(2024, 2, 28))), None);
        assert_eq!(stay_nights(&Selection::empty()), None);
        let same_day = Selection::range(ymd(2024, 2, 28), ymd(2024, 2, 28));
        assert_eq!(stay_nights(&same_day), None);
    }

    #[test]
    fn test_cycle_room_skips_sold_out() {
        assert_eq!(cycle_room("double", 1), "suite");
        assert_eq!(cycle_room("suite", 1), "single");
        assert_eq!(cycle_room("single", -1), "suite");
    }

    #[test]
    fn test_room_options() {
        let options = room_options();
        assert_eq!(options.len(), 4);
        assert!(options[3].disabled);
    }
}
