//! Filtering and sort orders shared by every store backend
//!
//! Orders mirror what a relational `ORDER BY` produces: missing ratings sort
//! as the lowest value, missing prices sort first in ascending order.

use std::cmp::Ordering;

use crate::models::{Attraction, Destination, Hotel, Phrase, Transportation};

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// `None` sorts before every value
fn cmp_optional(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp_f64(a, b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

pub fn order_destinations(mut destinations: Vec<Destination>) -> Vec<Destination> {
    destinations.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    destinations
}

pub fn order_hotels(hotels: Vec<Hotel>, max_price: Option<f64>) -> Vec<Hotel> {
    let mut hotels: Vec<Hotel> = hotels
        .into_iter()
        .filter(|h| max_price.is_none_or(|max| h.is_affordable(max)))
        .collect();
    hotels.sort_by(|a, b| {
        cmp_optional(b.rating, a.rating)
            .then(cmp_f64(a.price_per_night, b.price_per_night))
            .then(a.id.cmp(&b.id))
    });
    hotels
}

pub fn order_attractions(mut attractions: Vec<Attraction>) -> Vec<Attraction> {
    attractions.sort_by(|a, b| cmp_optional(b.rating, a.rating).then(a.id.cmp(&b.id)));
    attractions
}

pub fn order_transportation(mut transportation: Vec<Transportation>) -> Vec<Transportation> {
    transportation.sort_by(|a, b| {
        a.transport_type
            .cmp(&b.transport_type)
            .then(cmp_optional(a.price, b.price))
            .then(a.id.cmp(&b.id))
    });
    transportation
}

pub fn order_phrases(mut phrases: Vec<Phrase>) -> Vec<Phrase> {
    phrases.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then(a.english_text.cmp(&b.english_text))
            .then(a.id.cmp(&b.id))
    });
    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(id: i64, price: f64, rating: Option<f64>) -> Hotel {
        let mut hotel = Hotel::new(id, 1, format!("Hotel {id}"), price);
        hotel.rating = rating;
        hotel
    }

    #[test]
    fn test_hotels_rating_desc_then_price_asc() {
        let hotels = vec![
            hotel(1, 200.0, Some(4.5)),
            hotel(2, 90.0, None),
            hotel(3, 150.0, Some(4.8)),
            hotel(4, 120.0, Some(4.5)),
        ];

        let ids: Vec<i64> = order_hotels(hotels, None).iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_hotels_price_filter_is_inclusive() {
        let hotels = vec![
            hotel(1, 160.0, Some(4.0)),
            hotel(2, 160.01, Some(5.0)),
            hotel(3, 80.0, Some(3.0)),
        ];

        let ids: Vec<i64> = order_hotels(hotels, Some(160.0)).iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_attractions_unrated_last() {
        let mut unrated = Attraction::new(1, 1, "Unrated");
        unrated.rating = None;
        let attractions = vec![
            unrated,
            Attraction::new(2, 1, "Good").with_rating(4.2),
            Attraction::new(3, 1, "Best").with_rating(4.9),
        ];

        let ids: Vec<i64> = order_attractions(attractions).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_transportation_type_then_price() {
        let mut taxi = Transportation::new(1, 1, "Taxi", "G7");
        taxi.price = Some(45.0);
        let mut metro_day = Transportation::new(2, 1, "Metro", "Day pass");
        metro_day.price = Some(13.0);
        let mut metro_single = Transportation::new(3, 1, "Metro", "Single ticket");
        metro_single.price = Some(2.1);
        let metro_unpriced = Transportation::new(4, 1, "Metro", "Walking map");

        let ordered = order_transportation(vec![taxi, metro_day, metro_single, metro_unpriced]);
        let ids: Vec<i64> = ordered.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_phrases_category_then_text() {
        let phrases = vec![
            Phrase::new(1, 1, "Greetings", "Hello", "Bonjour"),
            Phrase::new(2, 1, "Dining", "The bill, please", "L'addition, s'il vous plaît"),
            Phrase::new(3, 1, "Greetings", "Goodbye", "Au revoir"),
        ];

        let ids: Vec<i64> = order_phrases(phrases).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
