//! Static venue lookup table.

/// A venue whose courts are bookable through the booking API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Venue {
    pub display_name: &'static str,
    /// `businessId` in the booking API
    pub business_id: i64,
    /// `businessTypeId` in the booking API
    pub business_type_id: i64,
    /// Lowercase fragments that identify the venue in a user supplied name
    pub aliases: &'static [&'static str],
}

pub const VENUES: &[Venue] = &[Venue {
    display_name: "매헌시민의숲 테니스장",
    business_id: 210031,
    business_type_id: 10,
    aliases: &["양재", "yangjae", "매헌", "maeheon"],
}];

/// Finds the venue whose alias appears in `court_name`, ignoring ASCII case.
pub fn find_venue(court_name: &str) -> Option<&'static Venue> {
    let lowered = court_name.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }
    VENUES
        .iter()
        .find(|venue| venue.aliases.iter().any(|alias| lowered.contains(alias)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_venue_by_alias() {
        for name in ["양재", "Yangjae", "MAEHEON courts", "매헌 테니스장"] {
            let venue = find_venue(name).unwrap_or_else(|| panic!("{name} should resolve"));
            assert_eq!(venue.business_id, 210031);
            assert_eq!(venue.business_type_id, 10);
        }
    }

    #[test]
    fn test_unknown_venue() {
        assert!(find_venue("Naegok").is_none());
        assert!(find_venue("").is_none());
        assert!(find_venue("   ").is_none());
    }
}
