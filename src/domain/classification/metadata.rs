//! Sector metadata - human-readable descriptions and display icons.

use serde::Serialize;

use crate::domain::foundation::Sector;

/// Descriptions indexed by [`Sector::order_index`].
const DESCRIPTIONS: [&str; Sector::COUNT] = [
    "Projects focused on healthcare, medical services, and public health initiatives",
    "Projects supporting schools, educational programs, and learning opportunities",
    "Projects building roads, bridges, utilities, and public facilities",
    "Projects promoting environmental conservation and sustainable practices",
    "Projects providing emergency response and disaster preparedness",
    "Projects supporting business development and economic growth",
    "Projects providing community support and social welfare services",
    "Projects promoting digital literacy and technology access",
    "Projects supporting farming, food security, and rural development",
    "Projects that don't fit into the above categories",
];

/// Icons indexed by [`Sector::order_index`].
const ICONS: [&str; Sector::COUNT] = [
    "\u{1F3E5}",
    "\u{1F4DA}",
    "\u{1F3D7}\u{FE0F}",
    "\u{1F331}",
    "\u{1F6A8}",
    "\u{1F4BC}",
    "\u{1F91D}",
    "\u{1F4BB}",
    "\u{1F69C}",
    "\u{1F4CB}",
];

/// Returns the human-readable description of a sector.
pub fn describe_sector(sector: Sector) -> &'static str {
    DESCRIPTIONS[sector.order_index()]
}

/// Returns the display icon (an emoji glyph) of a sector.
pub fn icon_for(sector: Sector) -> &'static str {
    ICONS[sector.order_index()]
}

/// Everything a caller needs to display a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectorInfo {
    pub sector: Sector,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl SectorInfo {
    /// Looks up all metadata for a sector.
    pub fn of(sector: Sector) -> Self {
        Self {
            sector,
            label: sector.label(),
            description: describe_sector(sector),
            icon: icon_for(sector),
        }
    }
}

/// Lists every sector's metadata in tie-break order.
pub fn catalog() -> Vec<SectorInfo> {
    Sector::all().iter().copied().map(SectorInfo::of).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sector_has_a_description_and_icon() {
        for sector in Sector::all() {
            assert!(!describe_sector(*sector).is_empty(), "{} lacks a description", sector);
            assert!(!icon_for(*sector).is_empty(), "{} lacks an icon", sector);
        }
    }

    #[test]
    fn descriptions_match_sectors() {
        assert_eq!(
            describe_sector(Sector::Health),
            "Projects focused on healthcare, medical services, and public health initiatives"
        );
        assert_eq!(
            describe_sector(Sector::Agriculture),
            "Projects supporting farming, food security, and rural development"
        );
        assert_eq!(
            describe_sector(Sector::Other),
            "Projects that don't fit into the above categories"
        );
    }

    #[test]
    fn icons_match_sectors() {
        assert_eq!(icon_for(Sector::Health), "🏥");
        assert_eq!(icon_for(Sector::Education), "📚");
        assert_eq!(icon_for(Sector::Infrastructure), "🏗️");
        assert_eq!(icon_for(Sector::Agriculture), "🚜");
        assert_eq!(icon_for(Sector::Other), "📋");
    }

    #[test]
    fn icons_are_distinct() {
        let mut icons: Vec<&str> = Sector::all().iter().map(|s| icon_for(*s)).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), Sector::COUNT);
    }

    #[test]
    fn catalog_lists_all_sectors_in_order() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog[0].sector, Sector::Health);
        assert_eq!(catalog[4].label, "Disaster relief");
        assert_eq!(catalog[9].sector, Sector::Other);
    }

    #[test]
    fn sector_info_serializes_with_slug() {
        let json = serde_json::to_value(SectorInfo::of(Sector::SocialServices)).unwrap();
        assert_eq!(json["sector"], "social-services");
        assert_eq!(json["label"], "Social services");
        assert_eq!(json["icon"], "🤝");
    }
}
