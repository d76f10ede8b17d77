//! Sensor Window - Ketiga tipe bekerja bareng
//!
//! Simulasi pembacaan sensor:
//! 1. Parse setiap reading mentah ke `Either<f32, String>`
//! 2. Reading valid masuk ke sliding window `RingBuffer<f32, 4>`
//! 3. Rata-rata window disimpan di `Maybe<f32>` (kosong sampai window penuh)
//!
//! Usage:
//!   cargo run --features demo --example sensor_window

use tracing::{info, warn};
use valkit::{Either, Failure, Maybe, RingBuffer, Success};

const WINDOW: usize = 4;

fn parse_reading(raw: &str) -> Either<f32, String> {
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Success(v).into(),
        Ok(v) => Failure(format!("non-finite reading {v}")).into(),
        Err(err) => Failure(format!("{raw:?}: {err}")).into(),
    }
}

fn validate_range(celsius: f32) -> Either<f32, String> {
    if (-40.0..=125.0).contains(&celsius) {
        Success(celsius).into()
    } else {
        Failure(format!("{celsius} out of sensor range")).into()
    }
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let raw_readings = [
        "21.5", "21.7", "oops", "22.0", "500", "22.4", "22.9", "23.1", "NaN",
    ];

    let mut window: RingBuffer<f32, WINDOW> = RingBuffer::new();
    let mut average: Maybe<f32> = Maybe::Nothing;

    for raw in raw_readings {
        let reading = parse_reading(raw).and_then(validate_range);

        match reading.into_result() {
            Ok(celsius) => {
                window.push(celsius);
                if window.is_full() {
                    let sum: f32 = window.iter().sum();
                    average.insert(sum / WINDOW as f32);
                }
            }
            Err(err) => warn!(%err, "reading skipped"),
        }

        match average.get() {
            Some(avg) => info!(raw, window = ?window, avg, "window average"),
            None => info!(raw, window = ?window, "window warming up"),
        }
    }

    if let Some(latest) = window.back() {
        info!(latest, "latest accepted reading");
    }
}
