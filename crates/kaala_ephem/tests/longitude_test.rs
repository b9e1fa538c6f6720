use kaala_ephem::{ALL_BODIES, Body, longitude_of, motion_state, separation_deg, signed_delta_deg};
use kaala_time::{CivilTime, TimeInstant};

fn at(year: i32, month: u8, day: u8, hour: u8) -> TimeInstant {
    TimeInstant::new(CivilTime::new(year, month, day, hour, 0, 0.0))
}

#[test]
fn every_body_solves_across_a_century() {
    for year in (1950..=2050).step_by(10) {
        let instant = at(year, 1, 15, 6);
        for body in ALL_BODIES {
            let p = longitude_of(body, &instant)
                .unwrap_or_else(|e| panic!("{} in {year}: {e}", body.name()));
            assert!((0.0..360.0).contains(&p.longitude));
        }
    }
}

#[test]
fn sun_advances_through_the_zodiac_month_by_month() {
    // Roughly 30° per month, always forward.
    let mut prev = longitude_of(Body::Sun, &at(2024, 1, 1, 0)).unwrap().longitude;
    for month in 2..=12 {
        let lon = longitude_of(Body::Sun, &at(2024, month, 1, 0)).unwrap().longitude;
        let step = signed_delta_deg(prev, lon);
        assert!((25.0..35.0).contains(&step), "month {month}: step {step}°");
        prev = lon;
    }
}

#[test]
fn sun_solstice_sign_placement() {
    // Around the June solstice the Sun sits at the start of Cancer
    // (tropical); allow a degree of slack for the truncated series.
    let p = longitude_of(Body::Sun, &at(2024, 6, 21, 12)).unwrap();
    assert!(
        (89.0..92.0).contains(&p.longitude),
        "Sun at solstice: {}°",
        p.longitude
    );
}

#[test]
fn moon_sun_elongation_cycles_in_a_synodic_month() {
    // New moon 2024-01-11: elongation small, then grows day by day.
    let new_moon = at(2024, 1, 11, 12);
    let sun = longitude_of(Body::Sun, &new_moon).unwrap();
    let moon = longitude_of(Body::Moon, &new_moon).unwrap();
    assert!(
        separation_deg(sun.longitude, moon.longitude) < 15.0,
        "elongation at new moon too large"
    );

    let full_moon = at(2024, 1, 25, 12);
    let sun_f = longitude_of(Body::Sun, &full_moon).unwrap();
    let moon_f = longitude_of(Body::Moon, &full_moon).unwrap();
    assert!(
        separation_deg(sun_f.longitude, moon_f.longitude) > 160.0,
        "elongation at full moon too small"
    );
}

#[test]
fn motion_and_position_agree_on_retrograde() {
    for body in ALL_BODIES {
        let instant = at(2024, 9, 1, 0);
        let p = longitude_of(body, &instant).unwrap();
        let m = motion_state(body, &instant).unwrap();
        assert_eq!(p.retrograde, m.retrograde, "{}", body.name());
    }
}

#[test]
fn outer_planets_slower_than_inner() {
    let instant = at(2024, 5, 1, 0);
    let mars = motion_state(Body::Mars, &instant).unwrap().daily_motion_deg.abs();
    let saturn = motion_state(Body::Saturn, &instant).unwrap().daily_motion_deg.abs();
    assert!(saturn < mars, "Saturn {saturn} vs Mars {mars}");
}
