//! Day-by-day itinerary generation
//!
//! Attractions arrive ordered best-first. They are cut into consecutive,
//! equally sized slices (`ceil(count / days)` each) so that every attraction
//! is scheduled exactly once and earlier days get the better-rated ones.
//! Trailing days can end up with no attractions at all.

use std::num::NonZeroU32;

use crate::models::{Attraction, ItineraryDay};

pub const MORNING_ACTIVITY: &str = "Morning: Breakfast at hotel";
pub const EVENING_ACTIVITY: &str = "Evening: local dining experience";
pub const DEFAULT_ATTRACTION_NOTE: &str = "Explore this attraction";

/// Number of attractions placed on each day
#[must_use]
pub fn attractions_per_day(attraction_count: usize, duration: NonZeroU32) -> usize {
    attraction_count.div_ceil(duration.get() as usize)
}

/// Activity line for a single attraction visit
#[must_use]
pub fn visit_activity(attraction: &Attraction) -> String {
    let note = attraction
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_ATTRACTION_NOTE);
    format!("Visit {} - {}", attraction.name, note)
}

/// Build exactly `duration` days of activities, all staying at `accommodation`
#[must_use]
pub fn generate_itinerary(
    duration: NonZeroU32,
    attractions: &[Attraction],
    accommodation: &str,
) -> Vec<ItineraryDay> {
    let per_day = attractions_per_day(attractions.len(), duration);
    // chunks() rejects a zero size; with no attractions it yields nothing anyway
    let mut slices = attractions.chunks(per_day.max(1));

    (1..=duration.get())
        .map(|day| {
            let visits = slices.next().unwrap_or_default();

            let mut activities = Vec::with_capacity(visits.len() + 2);
            activities.push(MORNING_ACTIVITY.to_string());
            activities.extend(visits.iter().map(visit_activity));
            activities.push(EVENING_ACTIVITY.to_string());

            ItineraryDay {
                day,
                activities,
                accommodation: accommodation.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn days(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn attractions(names: &[&str]) -> Vec<Attraction> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Attraction::new(i as i64 + 1, 1, *name).with_description(format!("About {name}")))
            .collect()
    }

    /// Attraction visit lines only, without the fixed breakfast and dinner lines
    fn visits(day: &ItineraryDay) -> &[String] {
        &day.activities[1..day.activities.len() - 1]
    }

    #[test]
    fn test_seven_attractions_over_five_days() {
        let list = attractions(&["A", "B", "C", "D", "E", "F", "G"]);
        let itinerary = generate_itinerary(days(5), &list, "Hotel Lutetia");

        let counts: Vec<usize> = itinerary.iter().map(|d| visits(d).len()).collect();
        assert_eq!(counts, vec![2, 2, 2, 1, 0]);
        assert_eq!(
            itinerary[4].activities,
            vec![MORNING_ACTIVITY.to_string(), EVENING_ACTIVITY.to_string()]
        );
        assert_eq!(itinerary[0].activities[1], "Visit A - About A");
        assert_eq!(itinerary[3].activities[1], "Visit G - About G");
    }

    #[rstest]
    #[case(0, 1)]
    #[case(0, 4)]
    #[case(1, 1)]
    #[case(3, 7)]
    #[case(5, 5)]
    #[case(5, 2)]
    #[case(12, 30)]
    #[case(30, 4)]
    fn test_every_attraction_scheduled_once(#[case] count: usize, #[case] n: u32) {
        let names: Vec<String> = (0..count).map(|i| format!("Sight {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let list = attractions(&refs);

        let itinerary = generate_itinerary(days(n), &list, "Inn");

        assert_eq!(itinerary.len(), n as usize);
        for (index, day) in itinerary.iter().enumerate() {
            assert_eq!(day.day as usize, index + 1);
            assert_eq!(day.activities.first().map(String::as_str), Some(MORNING_ACTIVITY));
            assert_eq!(day.activities.last().map(String::as_str), Some(EVENING_ACTIVITY));
            assert_eq!(day.accommodation, "Inn");
        }

        let scheduled: Vec<&String> = itinerary.iter().flat_map(|d| visits(d)).collect();
        let expected: Vec<String> = list.iter().map(visit_activity).collect();
        assert_eq!(scheduled.len(), expected.len());
        assert!(scheduled.iter().zip(expected.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_missing_or_empty_description_uses_default_note() {
        let mut list = attractions(&["Louvre", "Orsay"]);
        list[0].description = None;
        list[1].description = Some(String::new());

        let itinerary = generate_itinerary(days(1), &list, "Inn");
        assert_eq!(itinerary[0].activities[1], "Visit Louvre - Explore this attraction");
        assert_eq!(itinerary[0].activities[2], "Visit Orsay - Explore this attraction");
    }

    #[test]
    fn test_output_is_deterministic() {
        let list = attractions(&["A", "B", "C"]);
        let first = generate_itinerary(days(2), &list, "Inn");
        let second = generate_itinerary(days(2), &list, "Inn");
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[rstest]
    #[case(7, 5, 2)]
    #[case(5, 5, 1)]
    #[case(0, 3, 0)]
    #[case(1, 30, 1)]
    #[case(31, 30, 2)]
    fn test_attractions_per_day(#[case] count: usize, #[case] n: u32, #[case] expected: usize) {
        assert_eq!(attractions_per_day(count, days(n)), expected);
    }
}
