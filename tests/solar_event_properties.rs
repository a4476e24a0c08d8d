//! Property tests for the event-time engine.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use solar_zmanim::{
    noaa, normalize_day_fraction, CalendarDate, DayKind, Depression, EventTime, GeoCoordinate,
};

fn daylight(times: &solar_zmanim::EventTimes) -> Option<f64> {
    let sunrise = times.sunrise.fraction()?;
    let sunset = times.sunset.fraction()?;
    Some(normalize_day_fraction(sunset - sunrise))
}

/// Smallest distance between two day fractions on the 24 hour circle.
fn circular_distance(a: f64, b: f64) -> f64 {
    let diff = normalize_day_fraction(a - b);
    diff.min(1.0 - diff)
}

fn in_day_range(event: EventTime) -> bool {
    event.fraction().is_none_or(|f| (0.0..1.0).contains(&f))
}

proptest! {
    #[test]
    fn normalize_stays_in_range_and_is_idempotent(x in -1.0e6..1.0e6_f64) {
        let once = normalize_day_fraction(x);
        prop_assert!((0.0..1.0).contains(&once), "{x} normalized to {once}");
        prop_assert_eq!(normalize_day_fraction(once).to_bits(), once.to_bits());
    }

    #[test]
    fn event_times_are_consistent(
        year in 1900i32..=2100,
        month in 1u32..=12,
        day in 1u32..=28,
        latitude in -89.0..=89.0_f64,
        longitude in -180.0..=180.0_f64,
        depression in 1.0..=20.0_f64,
    ) {
        let date = CalendarDate::new(year, month, day).unwrap();
        let coordinate = GeoCoordinate::new(latitude, longitude);
        let twilight = Depression::Custom(depression);
        let times = noaa::event_times(date, coordinate, Some(twilight), Some(twilight));

        prop_assert!(times.solar_noon.is_present());
        for event in [times.solar_noon, times.sunrise, times.sunset] {
            prop_assert!(in_day_range(event));
        }
        prop_assert!(in_day_range(times.dawn.unwrap()));
        prop_assert!(in_day_range(times.dusk.unwrap()));

        // sunrise and sunset come as a pair, and only on regular days
        prop_assert_eq!(times.sunrise.is_present(), times.sunset.is_present());
        prop_assert_eq!(times.sunrise.is_present(), times.day_kind == DayKind::Regular);
        prop_assert_eq!(times.dawn.unwrap().is_present(), times.dusk.unwrap().is_present());
        if times.dawn.unwrap().is_present() {
            prop_assert_eq!(times.day_kind, DayKind::Regular);
        }

        // crossings are symmetric around solar noon
        if let (Some(noon), Some(sunrise), Some(sunset)) = (
            times.solar_noon.fraction(),
            times.sunrise.fraction(),
            times.sunset.fraction(),
        ) {
            let morning = normalize_day_fraction(noon - sunrise);
            let evening = normalize_day_fraction(sunset - noon);
            prop_assert!(circular_distance(morning, evening) < 1e-9);
        }
    }

    #[test]
    fn solar_noon_does_not_depend_on_latitude(
        year in 1900i32..=2100,
        month in 1u32..=12,
        day in 1u32..=28,
        latitude in -90.0..=90.0_f64,
        longitude in -180.0..=180.0_f64,
    ) {
        let date = CalendarDate::new(year, month, day).unwrap();
        let equator = noaa::event_times(date, GeoCoordinate::new(0.0, longitude), None, None);
        let other = noaa::event_times(date, GeoCoordinate::new(latitude, longitude), None, None);
        prop_assert_eq!(
            equator.solar_noon.fraction().map(f64::to_bits),
            other.solar_noon.fraction().map(f64::to_bits)
        );
    }
}

#[test]
fn test_equator_has_roughly_twelve_hours_of_daylight() {
    let equator = GeoCoordinate::new(0.0, 0.0);

    for month in 1..=12 {
        let date = CalendarDate::new(2024, month, 15).unwrap();
        let times = noaa::event_times(date, equator, None, None);
        assert_eq!(times.day_kind, DayKind::Regular);
        // the 50' horizon depression adds a few minutes to the half day
        assert_abs_diff_eq!(daylight(&times).unwrap(), 0.5, epsilon = 0.01);
        assert!(daylight(&times).unwrap() > 0.5);
    }
}

#[test]
fn test_solar_noon_near_greenwich_noon() {
    // the equation of time stays within about ±17 minutes
    for month in 1..=12 {
        let date = CalendarDate::new(2023, month, 1).unwrap();
        let times = noaa::event_times(date, GeoCoordinate::new(51.4769, 0.0), None, None);
        let noon = times.solar_noon.fraction().unwrap();
        assert!((noon - 0.5).abs() < 17.0 / 1440.0, "month {month}: noon {noon}");
    }
}

#[test]
fn test_longitude_shifts_solar_noon() {
    let date = CalendarDate::new(2024, 9, 1).unwrap();
    let greenwich = noaa::event_times(date, GeoCoordinate::new(45.0, 0.0), None, None);
    let east = noaa::event_times(date, GeoCoordinate::new(45.0, 90.0), None, None);

    // 90° east transits six hours earlier in UTC
    let shift = greenwich.solar_noon.fraction().unwrap() - east.solar_noon.fraction().unwrap();
    assert_abs_diff_eq!(shift, 0.25, epsilon = 1e-12);
}

#[test]
fn test_deeper_depression_lies_further_from_noon() {
    let date = CalendarDate::new(2024, 4, 10).unwrap();
    let lakewood = GeoCoordinate::new(40.0721087, -74.2400243);
    let depressions = [
        Depression::Standard,
        Depression::Civil,
        Depression::Nautical,
        Depression::Astronomical,
    ];

    let mornings: Vec<f64> = noaa::crossings(date, lakewood, depressions)
        .map(|(_, pair)| pair.morning.fraction().unwrap())
        .collect();
    assert!(mornings.windows(2).all(|w| w[0] > w[1]), "{mornings:?}");
}

#[test]
fn test_repeated_calls_are_identical() {
    let date = CalendarDate::new(2031, 7, 4).unwrap();
    let coordinate = GeoCoordinate::new(-33.8688, 151.2093);
    let first = noaa::event_times(date, coordinate, Some(Depression::Civil), None);
    let second = noaa::event_times(date, coordinate, Some(Depression::Civil), None);
    assert_eq!(first, second);
}

#[test]
fn test_solar_noon_ignores_requested_depressions() {
    let date = CalendarDate::new(2024, 2, 29).unwrap();
    let frankfurt = GeoCoordinate::new(50.110924, 8.682127);
    let plain = noaa::event_times(date, frankfurt, None, None);

    for depression in [Depression::Civil, Depression::Astronomical, Depression::Custom(16.1)] {
        let with_twilight = noaa::event_times(date, frankfurt, Some(depression), Some(depression));
        assert_eq!(with_twilight.solar_noon, plain.solar_noon);
        assert_eq!(with_twilight.sunrise, plain.sunrise);
        assert_eq!(with_twilight.sunset, plain.sunset);
    }
}
