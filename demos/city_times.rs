//! Local zmanim for a built-in city.
//!
//! Usage: `cargo run --example city_times --features tz -- [city] [YYYY-MM-DD] [dusk] [dawn]`
//!
//! Set `RUST_LOG=debug` to see the calculation log.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use solar_zmanim::{CalendarDate, Location, ProportionalMarker, ZmanimQuery};

fn format_time(time: Option<DateTime<Tz>>) -> String {
    time.map_or_else(|| "N/A".to_string(), |t| t.format("%I:%M:%S %p").to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let city = args.next().unwrap_or_else(|| solar_zmanim::DEFAULT_LOCATION.to_string());
    let date = match args.next() {
        Some(text) => NaiveDate::parse_from_str(&text, "%Y-%m-%d")?,
        None => Utc::now().date_naive(),
    };
    let dusk = args
        .next()
        .map_or(Ok(solar_zmanim::DEFAULT_DUSK_ANGLE), |text| text.parse::<f64>())?;
    let dawn = args.next().map(|text| text.parse::<f64>()).transpose()?;

    let mut query = ZmanimQuery::new(CalendarDate::from(date))
        .with_location(&city)
        .with_dusk(dusk);
    if let Some(dawn) = dawn {
        query = query.with_dawn(dawn);
    }

    let report = match query.compute() {
        Ok(report) => report,
        Err(err) => {
            let known: Vec<&str> = Location::all().iter().map(Location::key).collect();
            eprintln!("{err} (known cities: {})", known.join(", "));
            std::process::exit(1);
        }
    };

    let location = report.location();
    let local = report.local_times()?;

    println!("Zmanim for {} on {}", location.display_name(), report.date());
    println!(
        "Coordinates: {:.4}°, {:.4}° ({})",
        report.coordinate().latitude(),
        report.coordinate().longitude(),
        location.timezone_id()
    );
    println!("Day: {:?}\n", report.times().day_kind);

    if let Some(angle) = dawn {
        println!("Dawn ({angle:.1}°):  {}", format_time(local.dawn));
    }
    println!("Sunrise:      {}", format_time(local.sunrise));
    println!("Solar noon:   {}", format_time(local.solar_noon));
    println!("Sunset:       {}", format_time(local.sunset));
    println!("Dusk ({dusk:.1}°):  {}", format_time(local.dusk));

    if let Some(hours) = report.seasonal_hours() {
        println!(
            "\nSeasonal hour: {:.1} minutes",
            hours.hour_length() * 24.0 * 60.0
        );
        let markers = [
            ("End of Shema", ProportionalMarker::EndOfShema),
            ("End of Tefillah", ProportionalMarker::EndOfTefillah),
            ("Mincha Gedola", ProportionalMarker::MinchaGedola),
            ("Mincha Ketana", ProportionalMarker::MinchaKetana),
            ("Plag HaMincha", ProportionalMarker::PlagHamincha),
        ];
        for (name, marker) in markers {
            let time = hours
                .marker(marker)
                .to_local(report.date(), location.timezone_id())?;
            println!("{name:<16} {}", format_time(time));
        }
    } else {
        println!("\nNo seasonal hours: the sun does not rise and set on this date");
    }

    Ok(())
}
