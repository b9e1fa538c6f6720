//! Saturn-cycle analyzer.
//!
//! Tracks transiting Saturn against the natal Moon sign. The three
//! signs centred on the Moon (the 12th, 1st and 2nd from it) form the
//! classical seven-and-a-half-year passage; Saturn is sampled monthly
//! and contiguous same-phase samples merge into one window.

use kaala_ephem::{Body, longitude_of};
use kaala_time::TimeInstant;

use crate::error::TimingError;
use crate::method::{AnalysisContext, TimingMethod};
use crate::transit::DAYS_PER_MONTH;
use crate::types::{AnalysisWindow, Influence, MethodAnalysis, MethodId};

/// The three phases of the Saturn passage over the natal Moon sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CyclePhase {
    /// Saturn in the 12th sign from the Moon.
    Rising,
    /// Saturn on the Moon sign itself.
    Peak,
    /// Saturn in the 2nd sign from the Moon.
    Setting,
}

impl CyclePhase {
    /// Phase for Saturn's sign offset forward from the Moon sign, if
    /// the offset falls inside the passage.
    const fn from_offset(offset: u8) -> Option<Self> {
        match offset {
            11 => Some(CyclePhase::Rising),
            0 => Some(CyclePhase::Peak),
            1 => Some(CyclePhase::Setting),
            _ => None,
        }
    }

    const fn influence(self) -> Influence {
        match self {
            CyclePhase::Peak => Influence::Unfavorable,
            CyclePhase::Rising | CyclePhase::Setting => Influence::Neutral,
        }
    }

    const fn score(self) -> f64 {
        match self {
            CyclePhase::Rising => 3.0,
            CyclePhase::Peak => 2.0,
            CyclePhase::Setting => 4.0,
        }
    }
}

pub struct CycleMethod;

impl TimingMethod for CycleMethod {
    fn id(&self) -> MethodId {
        MethodId::Cycle
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<MethodAnalysis, TimingError> {
        let weight = self.weight(ctx.event);

        let Some(natal_moon) = ctx.chart.position(Body::Moon) else {
            return Ok(MethodAnalysis {
                method: MethodId::Cycle,
                weight,
                windows: Vec::new(),
                missing_bodies: vec![Body::Moon],
            });
        };
        let moon_sign = natal_moon.sign_index;

        let mut windows = Vec::new();
        let mut open: Option<(CyclePhase, f64)> = None;

        let mut sample_jd = ctx.start_jd;
        while sample_jd < ctx.end_jd {
            let saturn = longitude_of(Body::Saturn, &TimeInstant::from_jd(sample_jd))?;
            let offset = (i16::from(saturn.sign_index) - i16::from(moon_sign)).rem_euclid(12);
            let phase = CyclePhase::from_offset(offset as u8);

            match (open, phase) {
                (Some((current, _)), Some(next)) if current == next => {}
                (Some((current, start)), _) => {
                    windows.push(phase_window(current, start, sample_jd, weight));
                    open = phase.map(|p| (p, sample_jd));
                }
                (None, Some(p)) => open = Some((p, sample_jd)),
                (None, None) => {}
            }

            sample_jd += DAYS_PER_MONTH;
        }

        if let Some((phase, start)) = open {
            windows.push(phase_window(phase, start, ctx.end_jd, weight));
        }

        Ok(MethodAnalysis {
            method: MethodId::Cycle,
            weight,
            windows,
            missing_bodies: Vec::new(),
        })
    }
}

fn phase_window(phase: CyclePhase, start_jd: f64, end_jd: f64, weight: f64) -> AnalysisWindow {
    AnalysisWindow::new(
        start_jd,
        end_jd,
        MethodId::Cycle,
        phase.influence(),
        phase.score(),
        weight,
    )
}
