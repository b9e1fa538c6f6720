use clap::{Parser, Subcommand};
use kaala_chart::{
    GeoLocation, NatalChart, Sign, ascendant_deg, find_aspect, house_cusps, mutual_aspect,
};
use kaala_ephem::{ALL_BODIES, Body, longitude_of, motion_state};
use kaala_time::{CivilTime, TimeInstant, jd_to_calendar};
use kaala_timing::{ALL_EVENTS, EventCategory, PeriodTable, SubPeriod, timing_report};

#[derive(Parser)]
#[command(name = "kaala", about = "Kaala event-timing CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ecliptic longitude and sign placement of a body
    Position {
        /// Body name (Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu)
        body: String,
        /// UTC datetime (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        date: String,
    },
    /// Daily motion and retrograde state of a body
    Motion {
        /// Body name
        body: String,
        /// UTC datetime (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        date: String,
    },
    /// Aspect between two bodies at a moment
    Aspect {
        /// First body name
        body_a: String,
        /// Second body name
        body_b: String,
        /// UTC datetime (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        date: String,
    },
    /// Ascendant degree for a time and place
    Ascendant {
        /// UTC datetime (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        date: String,
        /// Geographic latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Geographic longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
    },
    /// All twelve house cusps for a time and place
    Cusps {
        /// UTC datetime (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        date: String,
        /// Geographic latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Geographic longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
    },
    /// Multi-method timing report for a life event
    Predict {
        /// Event category (marriage, career, health, finance, spirituality)
        event: String,
        /// Birth UTC datetime (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        birth: String,
        /// Birth latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Birth longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
        /// Query start UTC datetime (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        from: String,
        /// Query end UTC datetime (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        to: String,
    },
}

fn parse_body(s: &str) -> Body {
    for body in ALL_BODIES {
        if body.name().eq_ignore_ascii_case(s) {
            return body;
        }
    }
    eprintln!("Invalid body name: {s}");
    eprintln!("Valid: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu");
    std::process::exit(1);
}

fn parse_event(s: &str) -> EventCategory {
    for event in ALL_EVENTS {
        if event.name().eq_ignore_ascii_case(s) {
            return event;
        }
    }
    eprintln!("Invalid event category: {s}");
    eprintln!("Valid: marriage, career, health, finance, spirituality");
    std::process::exit(1);
}

/// Parses "YYYY-MM-DDTHH:MM:SS"; the time part may be omitted.
fn parse_datetime(s: &str) -> TimeInstant {
    let parsed = (|| {
        let (date, time) = match s.split_once('T') {
            Some((d, t)) => (d, t),
            None => (s, "00:00:00"),
        };
        let mut date_parts = date.splitn(3, '-');
        let year: i32 = date_parts.next()?.parse().ok()?;
        let month: u8 = date_parts.next()?.parse().ok()?;
        let day: u8 = date_parts.next()?.parse().ok()?;
        let mut time_parts = time.splitn(3, ':');
        let hour: u8 = time_parts.next()?.parse().ok()?;
        let minute: u8 = time_parts.next()?.parse().ok()?;
        let second: f64 = time_parts.next().unwrap_or("0").parse().ok()?;
        if !(1..=12).contains(&month)
            || !(1..=31).contains(&day)
            || hour > 23
            || minute > 59
            || !(0.0..60.0).contains(&second)
        {
            return None;
        }
        Some(CivilTime::new(year, month, day, hour, minute, second))
    })();
    match parsed {
        Some(civil) => TimeInstant::new(civil),
        None => {
            eprintln!("Invalid datetime: {s} (expected YYYY-MM-DDTHH:MM:SS)");
            std::process::exit(1);
        }
    }
}

fn format_jd(jd: f64) -> String {
    let c = jd_to_calendar(jd);
    format!("{:04}-{:02}-{:02}", c.year, c.month, c.day)
}

/// The 120-year proportional-years cycle used to synthesize a demo
/// period table from the natal Moon.
const PERIOD_ORDER: [(Body, f64); 9] = [
    (Body::Ketu, 7.0),
    (Body::Venus, 20.0),
    (Body::Sun, 6.0),
    (Body::Moon, 10.0),
    (Body::Mars, 7.0),
    (Body::Rahu, 18.0),
    (Body::Jupiter, 16.0),
    (Body::Saturn, 19.0),
    (Body::Mercury, 17.0),
];

const CYCLE_YEARS: f64 = 120.0;
const DAYS_PER_YEAR: f64 = 365.25;

/// Builds a major/minor table from birth until `until_jd`, anchored on
/// the natal Moon's lunar-mansion position.
fn synthesize_periods(moon_longitude: f64, birth_jd: f64, until_jd: f64) -> Vec<SubPeriod> {
    let mansion_span = 360.0 / 27.0;
    let mansion = (moon_longitude / mansion_span) as usize;
    let elapsed_fraction = (moon_longitude % mansion_span) / mansion_span;

    let mut periods = Vec::new();
    let mut major_index = mansion % PERIOD_ORDER.len();
    // The first major period is partly elapsed at birth.
    let mut major_start =
        birth_jd - elapsed_fraction * PERIOD_ORDER[major_index].1 * DAYS_PER_YEAR;

    while major_start < until_jd {
        let (major, major_years) = PERIOD_ORDER[major_index];
        let major_days = major_years * DAYS_PER_YEAR;

        // Minors run in cycle order starting from the major's own lord,
        // each proportional to its share of the full cycle.
        let mut minor_start = major_start;
        for offset in 0..PERIOD_ORDER.len() {
            let (minor, minor_years) = PERIOD_ORDER[(major_index + offset) % PERIOD_ORDER.len()];
            let minor_days = major_days * minor_years / CYCLE_YEARS;
            let minor_end = minor_start + minor_days;
            if minor_end > birth_jd && minor_start < until_jd {
                periods.push(SubPeriod::new(
                    major,
                    minor,
                    minor_start.max(birth_jd),
                    minor_end.min(until_jd),
                ));
            }
            minor_start = minor_end;
        }

        major_start += major_days;
        major_index = (major_index + 1) % PERIOD_ORDER.len();
    }
    periods
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Position { body, date } => {
            let body = parse_body(&body);
            let instant = parse_datetime(&date);
            match longitude_of(body, &instant) {
                Ok(pos) => {
                    let sign = Sign::from_index(pos.sign_index);
                    println!(
                        "{} at {:.4} deg - {} {:.4} deg{}",
                        body.name(),
                        pos.longitude,
                        sign.name(),
                        pos.degree_in_sign,
                        if pos.retrograde { " (retrograde)" } else { "" },
                    );
                }
                Err(e) => {
                    eprintln!("Position failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Motion { body, date } => {
            let body = parse_body(&body);
            let instant = parse_datetime(&date);
            match motion_state(body, &instant) {
                Ok(state) => {
                    println!(
                        "{}: {:+.4} deg/day{}{}",
                        body.name(),
                        state.daily_motion_deg,
                        if state.retrograde { " retrograde" } else { " direct" },
                        if state.stationary { " (stationary)" } else { "" },
                    );
                }
                Err(e) => {
                    eprintln!("Motion failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Aspect { body_a, body_b, date } => {
            let a = parse_body(&body_a);
            let b = parse_body(&body_b);
            let instant = parse_datetime(&date);
            let (pos_a, pos_b) = match (longitude_of(a, &instant), longitude_of(b, &instant)) {
                (Ok(pa), Ok(pb)) => (pa, pb),
                (Err(e), _) | (_, Err(e)) => {
                    eprintln!("Aspect failed: {e}");
                    std::process::exit(1);
                }
            };
            match find_aspect(pos_a.longitude, pos_b.longitude, a, b) {
                Some(aspect) => println!(
                    "{} {} {} - orb {:.2} deg, strength {:.2}",
                    a.name(),
                    aspect.kind.name(),
                    b.name(),
                    aspect.orb,
                    aspect.strength,
                ),
                None => println!("No aspect between {} and {}", a.name(), b.name()),
            }
            if mutual_aspect(a, pos_a.longitude, b, pos_b.longitude).is_some() {
                println!("Mutual aspect: yes");
            }
        }

        Commands::Ascendant { date, lat, lon } => {
            let instant = parse_datetime(&date);
            let location = GeoLocation::new(lat, lon);
            match ascendant_deg(&instant, &location) {
                Ok(asc) => {
                    let sign = Sign::from_longitude(asc);
                    println!("Ascendant {:.4} deg - {}", asc, sign.name());
                }
                Err(e) => {
                    eprintln!("Ascendant failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Cusps { date, lat, lon } => {
            let instant = parse_datetime(&date);
            let location = GeoLocation::new(lat, lon);
            match house_cusps(&instant, &location) {
                Ok(cusps) => {
                    for (i, cusp) in cusps.iter().enumerate() {
                        let sign = Sign::from_longitude(*cusp);
                        println!("House {:2}: {:8.4} deg - {}", i + 1, cusp, sign.name());
                    }
                }
                Err(e) => {
                    eprintln!("Cusps failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Predict { event, birth, lat, lon, from, to } => {
            let event = parse_event(&event);
            let birth = parse_datetime(&birth);
            let location = GeoLocation::new(lat, lon);
            let start = parse_datetime(&from);
            let end = parse_datetime(&to);

            let chart = match NatalChart::for_instant(&birth, &location) {
                Ok(chart) => chart,
                Err(e) => {
                    eprintln!("Chart failed: {e}");
                    std::process::exit(1);
                }
            };
            let Some(moon) = chart.position(Body::Moon) else {
                eprintln!("Chart has no Moon position; cannot synthesize periods");
                std::process::exit(1);
            };
            let periods = match PeriodTable::new(synthesize_periods(
                moon.longitude,
                chart.birth_jd(),
                end.jd(),
            )) {
                Ok(periods) => periods,
                Err(e) => {
                    eprintln!("Period table failed: {e}");
                    std::process::exit(1);
                }
            };

            let report = match timing_report(&chart, &periods, event, start.jd(), end.jd()) {
                Ok(report) => report,
                Err(e) => {
                    eprintln!("Report failed: {e}");
                    std::process::exit(1);
                }
            };

            println!(
                "Timing report: {} from {} to {}",
                event.name(),
                format_jd(report.start_jd),
                format_jd(report.end_jd),
            );
            println!("Confidence: {:.2}", report.confidence);
            println!();
            println!("Methods:");
            for s in &report.method_summaries {
                let status = if s.degraded { " [failed]" } else { "" };
                print!(
                    "  {:12} weight {:.2} - {} favorable, {} unfavorable, {} neutral{}",
                    s.method.name(),
                    s.weight,
                    s.favorable,
                    s.unfavorable,
                    s.neutral,
                    status,
                );
                if s.missing_bodies.is_empty() {
                    println!();
                } else {
                    let names: Vec<&str> =
                        s.missing_bodies.iter().map(|b| b.name()).collect();
                    println!(" (missing: {})", names.join(", "));
                }
            }
            if !report.consensus_windows.is_empty() {
                println!();
                println!("Consensus windows:");
                for w in &report.consensus_windows {
                    let methods: Vec<&str> = w.methods.iter().map(|m| m.name()).collect();
                    println!(
                        "  {} to {} - consensus {:.2}, score {:.2} [{}]",
                        format_jd(w.start_jd),
                        format_jd(w.end_jd),
                        w.consensus,
                        w.combined_score,
                        methods.join(", "),
                    );
                }
            }
            if !report.predictions.is_empty() {
                println!();
                println!("Predictions:");
                for p in &report.predictions {
                    println!(
                        "  {} to {} - final score {:.2} (refined to {} - {})",
                        format_jd(p.window.start_jd),
                        format_jd(p.window.end_jd),
                        p.final_score,
                        format_jd(p.refined.start_jd),
                        format_jd(p.refined.end_jd),
                    );
                }
            }
            println!();
            println!("Precision:");
            for entry in &report.precision {
                println!(
                    "  {:6} {:.2} ({})",
                    entry.granularity.name(),
                    entry.precision,
                    entry.level.name(),
                );
            }
            println!();
            println!("Recommendations:");
            for line in &report.recommendations {
                println!("  - {line}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_periods_tile_without_overlap() {
        let birth = 2_448_027.0;
        let until = birth + 40.0 * 365.25;
        let periods = synthesize_periods(123.4, birth, until);
        assert!(!periods.is_empty());
        for p in &periods {
            assert!(p.end_jd > p.start_jd);
            assert!(p.start_jd >= birth);
            assert!(p.end_jd <= until);
        }
        for pair in periods.windows(2) {
            assert!(pair[0].end_jd <= pair[1].start_jd + 1e-9);
        }
        // The table must validate.
        PeriodTable::new(periods).unwrap();
    }

    #[test]
    fn minors_partition_each_major() {
        let birth = 2_448_027.0;
        let until = birth + 200.0 * 365.25;
        let periods = synthesize_periods(0.0, birth, until);
        // Moon at 0 deg: first mansion, Ketu major with no elapsed
        // fraction, so the first nine minors span exactly 7 years.
        let first_nine: f64 =
            periods.iter().take(9).map(|p| p.end_jd - p.start_jd).sum();
        assert!((first_nine - 7.0 * 365.25).abs() < 1e-6);
        assert!(periods.iter().take(9).all(|p| p.major == Body::Ketu));
    }
}
