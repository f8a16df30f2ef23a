//! Demo catalogue loaded at startup

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{SeatPools, Show};

fn show_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("Invalid seed show time")
}

/// The four demo screenings, in display order
pub fn demo_shows() -> Vec<Show> {
    vec![
        Show::new(
            "s001",
            "The Martian",
            "Galaxy Cinemas",
            show_time(2025, 11, 15, 19, 0),
            SeatPools::new(100, 50),
        )
        .with_genre("Sci-Fi")
        .with_duration_minutes(144),
        Show::new(
            "s002",
            "Inception",
            "Main Street Theater",
            show_time(2025, 11, 15, 21, 30),
            SeatPools::new(80, 40),
        )
        .with_genre("Sci-Fi")
        .with_duration_minutes(148),
        Show::new(
            "s003",
            "Hello Brother",
            "Cineplex",
            show_time(2025, 11, 16, 17, 0),
            SeatPools::new(120, 60),
        )
        .with_genre("Comedy")
        .with_duration_minutes(120),
        Show::new(
            "s004",
            "Avatar",
            "Inox",
            show_time(2025, 11, 16, 17, 0),
            SeatPools::new(150, 50),
        )
        .with_genre("Sci_fi")
        .with_duration_minutes(144),
    ]
}
