use crate::models::{AxisPriorities, Discipline, PerformanceScores, PriorityOverrides};

/// Default importance weights per discipline. Downwind is the original
/// tuned table; the others weight the axes a rider in that discipline
/// actually leans on.
pub fn default_priorities(discipline: Discipline) -> AxisPriorities {
    match discipline {
        Discipline::Downwind => AxisPriorities {
            glide: 10.0,
            pump: 9.0,
            lift: 7.0,
            comfort: 6.0,
            speed: 4.0,
            carving: 3.0,
        },
        Discipline::Pump => AxisPriorities {
            pump: 10.0,
            glide: 9.0,
            lift: 7.0,
            comfort: 5.0,
            speed: 2.0,
            carving: 2.0,
        },
        Discipline::Wing => AxisPriorities {
            speed: 8.0,
            carving: 7.0,
            glide: 7.0,
            lift: 6.0,
            comfort: 6.0,
            pump: 5.0,
        },
        Discipline::Parawing => AxisPriorities {
            glide: 9.0,
            speed: 8.0,
            pump: 6.0,
            lift: 5.0,
            comfort: 5.0,
            carving: 4.0,
        },
        Discipline::Kite => AxisPriorities {
            speed: 9.0,
            glide: 7.0,
            carving: 6.0,
            lift: 5.0,
            comfort: 5.0,
            pump: 3.0,
        },
        Discipline::Prone => AxisPriorities {
            carving: 10.0,
            lift: 7.0,
            pump: 6.0,
            comfort: 6.0,
            speed: 5.0,
            glide: 5.0,
        },
        Discipline::Sup => AxisPriorities {
            pump: 8.0,
            glide: 8.0,
            lift: 8.0,
            comfort: 7.0,
            carving: 5.0,
            speed: 3.0,
        },
    }
}

/// Overlay caller-supplied overrides on a default table; unset axes keep
/// their defaults.
pub fn merge_overrides(
    defaults: AxisPriorities,
    overrides: Option<&PriorityOverrides>,
) -> AxisPriorities {
    let Some(overrides) = overrides else {
        return defaults;
    };

    AxisPriorities {
        lift: overrides.lift.unwrap_or(defaults.lift),
        glide: overrides.glide.unwrap_or(defaults.glide),
        speed: overrides.speed.unwrap_or(defaults.speed),
        carving: overrides.carving.unwrap_or(defaults.carving),
        pump: overrides.pump.unwrap_or(defaults.pump),
        comfort: overrides.comfort.unwrap_or(defaults.comfort),
    }
}

/// Weighted mean of the six axes, rounded to a 0-100 match percentage.
pub fn match_score(scores: &PerformanceScores, priorities: &AxisPriorities) -> f64 {
    let total_weight = priorities.lift
        + priorities.glide
        + priorities.speed
        + priorities.carving
        + priorities.pump
        + priorities.comfort;

    if total_weight <= 0.0 {
        return 0.0;
    }

    let weighted_sum = scores.lift * priorities.lift
        + scores.glide * priorities.glide
        + scores.speed * priorities.speed
        + scores.carving * priorities.carving
        + scores.pump * priorities.pump
        + scores.comfort * priorities.comfort;

    (weighted_sum / total_weight).round()
}
