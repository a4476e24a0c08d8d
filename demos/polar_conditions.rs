//! Walks through a year at high latitudes and reports polar day and polar night.

use solar_zmanim::{noaa, CalendarDate, DayKind, Depression, EventTime, GeoCoordinate};

#[derive(Debug)]
struct Site {
    name: &'static str,
    coordinate: GeoCoordinate,
}

fn format_event(event: EventTime) -> String {
    match event.hours() {
        Some(hours) => {
            let minutes = (hours * 60.0) as u32;
            format!("{:02}:{:02} UTC", minutes / 60, minutes % 60)
        }
        None => "--:--".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sites = [
        Site {
            name: "Longyearbyen, Svalbard",
            coordinate: GeoCoordinate::checked(78.22, 15.65)?,
        },
        Site {
            name: "Tromsø, Norway",
            coordinate: GeoCoordinate::checked(69.65, 18.96)?,
        },
        Site {
            name: "McMurdo Station, Antarctica",
            coordinate: GeoCoordinate::checked(-77.85, 166.67)?,
        },
    ];

    for site in &sites {
        println!("{}", site.name);

        let mut polar_days = 0;
        let mut polar_nights = 0;
        for month in 1..=12 {
            for day in 1..=28 {
                let date = CalendarDate::new(2024, month, day)?;
                match noaa::event_times(date, site.coordinate, None, None).day_kind {
                    DayKind::PolarDay => polar_days += 1,
                    DayKind::PolarNight => polar_nights += 1,
                    DayKind::Regular => {}
                }
            }
        }
        println!(
            "  sampled days with midnight sun: {polar_days}, with polar night: {polar_nights}"
        );

        for (month, day) in [(3, 20), (6, 21), (9, 22), (12, 21)] {
            let date = CalendarDate::new(2024, month, day)?;
            let times = noaa::event_times(
                date,
                site.coordinate,
                Some(Depression::Civil),
                Some(Depression::Civil),
            );
            println!(
                "  {date}: {:<10} dawn {} sunrise {} noon {} sunset {} dusk {}",
                format!("{:?}", times.day_kind),
                format_event(times.dawn.unwrap_or(EventTime::Absent)),
                format_event(times.sunrise),
                format_event(times.solar_noon),
                format_event(times.sunset),
                format_event(times.dusk.unwrap_or(EventTime::Absent)),
            );
        }
        println!();
    }

    Ok(())
}
