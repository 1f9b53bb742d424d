use crate::models::{Discipline, Series};

/// Candidate size relative to the rider's target area, banded at ±10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBand {
    Smaller,
    Matched,
    Larger,
}

pub fn size_band(area: f64, target_area: f64) -> SizeBand {
    let deviation = (area - target_area) / target_area;
    if deviation < -0.10 {
        SizeBand::Smaller
    } else if deviation > 0.10 {
        SizeBand::Larger
    } else {
        SizeBand::Matched
    }
}

/// One-line reasoning for a ranked candidate, assembled from a
/// (discipline, series) note and a size clause.
pub fn reasoning(discipline: Discipline, series: Series, band: SizeBand) -> String {
    format!("{} {}", series_note(discipline, series), size_note(band))
}

fn series_note(discipline: Discipline, series: Series) -> &'static str {
    use Discipline::*;
    use Series::*;

    match (discipline, series) {
        (Downwind, PngV2) => "Glide for days — the bump-connecting benchmark.",
        (Pump, PngV2) => "The dock-start standard with endless pump efficiency.",
        (Sup, PngV2) => "Easy to get flying and pumps forever.",
        (Prone, Surge) => "Loose, surfy feel with forgiving takeoffs.",
        (Kite, Spitfire) => "Race-proven speed with strong upwind drive.",
        (Parawing, Fireball) => "Fast and efficient with great low-end for wind power.",
        (_, Surge) => "Balanced pump and turning across a wide speed range.",
        (_, Tempo) => "Race-bred glide with a precise, demanding feel.",
        (_, ArtV2) => "High-aspect efficiency with surprisingly manageable control.",
        (_, Fireball) => "Fast, lively all-rounder that still carves hard.",
        (_, PngV2) => "Pump-and-glide specialist that connects bumps effortlessly.",
        (_, Spitfire) => "Race-proven speed and upwind performance.",
        _ => "Solid all-round choice for the conditions.",
    }
}

fn size_note(band: SizeBand) -> &'static str {
    match band {
        SizeBand::Matched => "Sized right on your target area.",
        SizeBand::Smaller => "Runs smaller than your target, trading lift for speed and agility.",
        SizeBand::Larger => "Runs larger than your target, adding stability and low-speed lift.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_band_edges() {
        assert_eq!(size_band(1000.0, 1000.0), SizeBand::Matched);
        assert_eq!(size_band(905.0, 1000.0), SizeBand::Matched);
        assert_eq!(size_band(1095.0, 1000.0), SizeBand::Matched);
        assert_eq!(size_band(880.0, 1000.0), SizeBand::Smaller);
        assert_eq!(size_band(1150.0, 1000.0), SizeBand::Larger);
    }

    #[test]
    fn test_discipline_specific_note_wins() {
        let downwind = reasoning(Discipline::Downwind, Series::PngV2, SizeBand::Matched);
        let wing = reasoning(Discipline::Wing, Series::PngV2, SizeBand::Matched);
        assert_ne!(downwind, wing);
    }

    #[test]
    fn test_reasoning_mentions_size() {
        let text = reasoning(Discipline::Wing, Series::Surge, SizeBand::Larger);
        assert!(text.contains("larger"));
    }
}
