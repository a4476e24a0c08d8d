//! Example demonstrating usage without chrono.
//!
//! Only the numeric API is used here, which is the part available in no_std builds
//! (`default-features = false, features = ["libm"]`). Callers handle their own
//! conversion from day fractions to clock time.

use solar_zmanim::{
    noaa, normalize_day_fraction, CalendarDate, Depression, EventTime, GeoCoordinate,
    SeasonalHours,
};

fn hms(event: EventTime) -> (u32, u32, u32) {
    let seconds = event.fraction().map_or(0, |f| (f * 86_400.0) as u32);
    (seconds / 3600, seconds / 60 % 60, seconds % 60)
}

fn main() {
    // Frankfurt on the June solstice
    let date = CalendarDate::new(2024, 6, 21).expect("Valid date");
    let frankfurt = GeoCoordinate::checked(50.110924, 8.682127).expect("Valid coordinates");

    println!("Solar event times without chrono\n");

    let position = noaa::solar_position(date);
    println!("Julian century: {:.9}", position.julian_century());
    println!("Declination: {:.4}°", position.declination());
    println!("Equation of time: {:.3} min\n", position.equation_of_time());

    let times = noaa::event_times_with_position(
        &position,
        frankfurt,
        Some(Depression::Astronomical),
        Some(Depression::Custom(8.5)),
    );

    for (name, event) in [
        ("Dawn (18°)", times.dawn.unwrap_or(EventTime::Absent)),
        ("Sunrise", times.sunrise),
        ("Solar noon", times.solar_noon),
        ("Sunset", times.sunset),
        ("Dusk (8.5°)", times.dusk.unwrap_or(EventTime::Absent)),
    ] {
        if event.is_present() {
            let (h, m, s) = hms(event);
            println!("  {name:<12} {h:02}:{m:02}:{s:02} UTC");
        } else {
            println!("  {name:<12} does not occur");
        }
    }

    if let Some(hours) = SeasonalHours::from_times(&times) {
        let (h, m, s) = hms(hours.at(3.0));
        println!("\nThree seasonal hours after sunrise: {h:02}:{m:02}:{s:02} UTC");
    }

    // Converting to a local offset is a matter of shifting and re-wrapping the fraction
    let cest = 2.0 / 24.0;
    if let Some(noon) = times.solar_noon.fraction() {
        let (h, m, s) = hms(EventTime::Present(normalize_day_fraction(noon + cest)));
        println!("Solar noon in CEST: {h:02}:{m:02}:{s:02}");
    }

    // Sweep several locations sharing one solar position
    println!("\nSunrise across one date:");
    let locations = [
        ("Toronto", 43.7167, -79.4333),
        ("Jerusalem", 31.77509, 35.23269),
        ("Sydney", -33.8688, 151.2093),
    ];
    for (name, lat, lon) in locations {
        let times =
            noaa::event_times_with_position(&position, GeoCoordinate::new(lat, lon), None, None);
        let (h, m, s) = hms(times.sunrise);
        println!("  {name:<10} {h:02}:{m:02}:{s:02} UTC");
    }
}
