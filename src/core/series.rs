use crate::models::{Discipline, EquipmentItem, Series, SkillLevel};

/// Series eligible for the recommendation path. Legacy families stay valid
/// catalog data for comparison views but never rank.
pub const CURRENT_SERIES: [Series; 6] = [
    Series::Surge,
    Series::Tempo,
    Series::ArtV2,
    Series::Fireball,
    Series::PngV2,
    Series::Spitfire,
];

/// Disambiguate an item's series by era.
///
/// The catalog reuses the raw "PNG" label across two product generations;
/// only the display title carries the version marker that separates them.
pub fn effective_series(item: &EquipmentItem) -> Series {
    let parsed = Series::parse(&item.specs.series);
    if parsed == Series::Png && item.title.to_lowercase().contains("v2") {
        return Series::PngV2;
    }
    parsed
}

/// Whether a series belongs to the current product era.
pub fn is_current(series: Series) -> bool {
    CURRENT_SERIES.contains(&series)
}

/// Ordered preference table keyed by (discipline, skill). Earlier entries
/// are preferred more strongly.
pub fn preferred_series(discipline: Discipline, skill: SkillLevel) -> &'static [Series] {
    use Discipline::*;
    use Series::*;
    use SkillLevel::*;

    match (discipline, skill) {
        (Wing, Beginner) => &[Surge, Bsc],
        (Wing, Intermediate) => &[Surge, ArtV2, Fireball],
        (Wing, Advanced) => &[Tempo, Spitfire, ArtV2, Fireball],
        (Parawing, Beginner) => &[PngV2, Surge, Tempo],
        (Parawing, Intermediate) => &[Fireball, ArtV2, Surge, PngV2],
        (Parawing, Advanced) => &[Fireball, Tempo, ArtV2, Spitfire],
        (Kite, Beginner) => &[Surge, Tempo],
        (Kite, _) => &[Spitfire, ArtV2, PngV2, Fireball],
        (Prone, _) => &[Surge, Fireball, Tempo],
        (Sup, _) => &[PngV2, Surge, Tempo],
        (Downwind, _) => &[PngV2, Surge, ArtV2, Tempo],
        (Pump, _) => &[PngV2, Tempo, Surge],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoilSpecs;

    fn item(series: &str, title: &str) -> EquipmentItem {
        EquipmentItem {
            id: 1,
            handle: String::new(),
            title: title.to_string(),
            price: String::new(),
            available: true,
            url: String::new(),
            specs: FoilSpecs {
                area: 1000.0,
                series: series.to_string(),
                aspect_ratio: None,
                wingspan: None,
                chord: None,
                volume: None,
                roll_moment: None,
                pitch_moment: None,
            },
        }
    }

    #[test]
    fn test_png_v2_disambiguated_by_title() {
        let v2 = item("PNG", "AXIS PNG V2 1010 Carbon Front Wing");
        assert_eq!(effective_series(&v2), Series::PngV2);

        let legacy = item("PNG", "AXIS PNG 1010 Carbon Front Wing");
        assert_eq!(effective_series(&legacy), Series::Png);
    }

    #[test]
    fn test_legacy_series_not_current() {
        assert!(!is_current(Series::Bsc));
        assert!(!is_current(Series::Hps));
        assert!(!is_current(Series::Png));
        assert!(is_current(Series::PngV2));
        assert!(is_current(Series::Surge));
    }

    #[test]
    fn test_intermediate_wing_preference_order() {
        let preferred = preferred_series(Discipline::Wing, SkillLevel::Intermediate);
        assert_eq!(preferred, &[Series::Surge, Series::ArtV2, Series::Fireball]);
    }

    #[test]
    fn test_kite_shares_table_above_beginner() {
        assert_eq!(
            preferred_series(Discipline::Kite, SkillLevel::Intermediate),
            preferred_series(Discipline::Kite, SkillLevel::Advanced),
        );
    }

    #[test]
    fn test_every_combination_has_preferences() {
        let skills = [
            SkillLevel::Beginner,
            SkillLevel::Intermediate,
            SkillLevel::Advanced,
        ];
        let disciplines = [
            Discipline::Wing,
            Discipline::Parawing,
            Discipline::Kite,
            Discipline::Prone,
            Discipline::Sup,
            Discipline::Downwind,
            Discipline::Pump,
        ];

        for skill in skills {
            for discipline in disciplines {
                assert!(!preferred_series(discipline, skill).is_empty());
            }
        }
    }
}
