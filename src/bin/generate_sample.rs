use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

/// SplitMix64; enough for a reproducible random walk.
struct WalkRng(u64);

impl WalkRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Normal step via Box-Muller.
    fn step(&mut self, mean: f64, std_dev: f64) -> f64 {
        let r = (-2.0 * self.unit().max(1e-15).ln()).sqrt();
        let theta = std::f64::consts::TAU * self.unit();
        mean + std_dev * r * theta.cos()
    }
}

fn main() -> Result<()> {
    let mut rng = WalkRng(42);

    // A stork-like southward migration starting in the upper Rhine valley.
    let n_events = 500;
    let mut lat = 47.75;
    let mut long = 8.0;
    let start = NaiveDate::from_ymd_opt(2023, 8, 1)
        .and_then(|d| d.and_hms_opt(6, 0, 0))
        .context("invalid start date")?;

    let output_path = "sample_events.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;
    writer.write_record(["timestamp", "location_long", "location_lat", "visible"])?;

    let mut hidden = 0;
    let mut missing = 0;
    for i in 0..n_events {
        lat += rng.step(-0.05, 0.04);
        long += rng.step(-0.02, 0.05);
        let ts = (start + Duration::hours(3 * i)).format("%Y-%m-%d %H:%M:%S%.3f");

        // Sprinkle in rows the sanitizer is expected to drop.
        let roll = rng.unit();
        let (long_cell, lat_cell, visible) = if roll < 0.02 {
            missing += 1;
            (String::new(), String::new(), "true")
        } else if roll < 0.04 {
            hidden += 1;
            (format!("{long:.6}"), format!("{lat:.6}"), "false")
        } else {
            (format!("{long:.6}"), format!("{lat:.6}"), "true")
        };
        let ts = ts.to_string();
        writer.write_record([ts.as_str(), long_cell.as_str(), lat_cell.as_str(), visible])?;
    }
    writer.flush().context("flushing output file")?;

    println!(
        "Wrote {n_events} events ({hidden} hidden, {missing} without location) to {output_path}"
    );
    Ok(())
}
