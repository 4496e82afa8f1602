pub mod commands;

use serde::Serialize;

/// The five elemental families a direction can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Element {
    Water,
    Air,
    Fire,
    Earth,
    Space,
}

impl Element {
    /// Display color token shared by every direction of this family.
    pub fn color(&self) -> &'static str {
        match self {
            Element::Water => "#3b82f6",
            Element::Air => "#22c55e",
            Element::Fire => "#ef4444",
            Element::Earth => "#eab308",
            Element::Space => "#94a3b8",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    /// Sector center in degrees clockwise from North. Multiple of 22.5,
    /// unique across the table.
    pub degree: f64,
    pub element: Element,
    pub significance: &'static str,
    pub color: &'static str,
    pub ruler: &'static str,
    pub tips: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The sixteen compass sectors, ordered by ascending degree starting at
/// North. Read-only for the life of the process.
pub const DIRECTIONS: [DirectionRecord; 16] = [
    DirectionRecord {
        id: "N",
        name: "North",
        full_name: "North (Uttar)",
        degree: 0.0,
        element: Element::Water,
        significance: "Wealth, Opportunities, and Money flow.",
        color: "#3b82f6",
        ruler: "Mercury / Kubera",
        tips: &[
            "Entrance is excellent here.",
            "Keep clean and clutter-free.",
            "Place blue items.",
        ],
    },
    DirectionRecord {
        id: "NNE",
        name: "NNE",
        full_name: "North-North-East",
        degree: 22.5,
        element: Element::Water,
        significance: "Health, Healing, and Immunity.",
        color: "#3b82f6",
        ruler: "Ashwini Kumars",
        tips: &[
            "Ideal for medicines.",
            "Best place for a health clinic.",
            "Avoid fire here.",
        ],
    },
    DirectionRecord {
        id: "NE",
        name: "NE",
        full_name: "North-East (Ishan)",
        degree: 45.0,
        element: Element::Water,
        significance: "Wisdom, Clarity of Mind, and Spirituality.",
        color: "#3b82f6",
        ruler: "Jupiter / Shiva",
        tips: &[
            "Best for Puja room.",
            "Meditation space.",
            "Keep strictly open and light.",
        ],
    },
    DirectionRecord {
        id: "ENE",
        name: "ENE",
        full_name: "East-North-East",
        degree: 67.5,
        element: Element::Air,
        significance: "Refreshment, Fun, and Recreation.",
        color: "#22c55e",
        ruler: "Indra",
        tips: &[
            "Good for living room.",
            "Family lounge.",
            "Add green plants.",
        ],
    },
    DirectionRecord {
        id: "E",
        name: "East",
        full_name: "East (Purva)",
        degree: 90.0,
        element: Element::Air,
        significance: "Social connectivity and Government relations.",
        color: "#22c55e",
        ruler: "Sun",
        tips: &[
            "Social networking.",
            "Main entrance for fame.",
            "Window for morning sun.",
        ],
    },
    DirectionRecord {
        id: "ESE",
        name: "ESE",
        full_name: "East-South-East",
        degree: 112.5,
        element: Element::Air,
        significance: "Churning, Anxiety, and Deep Analysis.",
        color: "#22c55e",
        ruler: "Arjun",
        tips: &[
            "Avoid bedroom here.",
            "Good for washing machine.",
            "Good for analytical work.",
        ],
    },
    DirectionRecord {
        id: "SE",
        name: "SE",
        full_name: "South-East (Agni)",
        degree: 135.0,
        element: Element::Fire,
        significance: "Cash flow, Liquidity, and Fire energy.",
        color: "#ef4444",
        ruler: "Venus",
        tips: &[
            "Ideal for Kitchen.",
            "Electrical panels.",
            "Place red/orange shades.",
        ],
    },
    DirectionRecord {
        id: "SSE",
        name: "SSE",
        full_name: "South-South-East",
        degree: 157.5,
        element: Element::Fire,
        significance: "Confidence, Strength, and Power.",
        color: "#ef4444",
        ruler: "Yama",
        tips: &[
            "Increases inner strength.",
            "Avoid blue color here.",
            "Good for gym or workout area.",
        ],
    },
    DirectionRecord {
        id: "S",
        name: "South",
        full_name: "South (Dakshin)",
        degree: 180.0,
        element: Element::Fire,
        significance: "Name, Fame, and Relaxation.",
        color: "#ef4444",
        ruler: "Mars",
        tips: &[
            "Rest and deep sleep.",
            "Avoid main gate here usually.",
            "Keep heavy furniture here.",
        ],
    },
    DirectionRecord {
        id: "SSW",
        name: "SSW",
        full_name: "South-South-West",
        degree: 202.5,
        element: Element::Earth,
        significance: "Disposal, Waste, and Expenditure.",
        color: "#eab308",
        ruler: "Nirriti",
        tips: &[
            "Best for Toilets.",
            "Dustbins.",
            "Avoid any positive activity here.",
        ],
    },
    DirectionRecord {
        id: "SW",
        name: "SW",
        full_name: "South-West (Nairitya)",
        degree: 225.0,
        element: Element::Earth,
        significance: "Relationships, Skills, and Ancestors.",
        color: "#eab308",
        ruler: "Rahu",
        tips: &[
            "Master Bedroom.",
            "Skills development.",
            "Family photos.",
        ],
    },
    DirectionRecord {
        id: "WSW",
        name: "WSW",
        full_name: "West-South-West",
        degree: 247.5,
        element: Element::Space,
        significance: "Savings, Education, and Knowledge.",
        color: "#94a3b8",
        ruler: "Varuna",
        tips: &[
            "Study room.",
            "Locker or Safe.",
            "Bookshelf location.",
        ],
    },
    DirectionRecord {
        id: "W",
        name: "West",
        full_name: "West (Paschim)",
        degree: 270.0,
        element: Element::Space,
        significance: "Gains and Profits.",
        color: "#94a3b8",
        ruler: "Saturn",
        tips: &[
            "Business gains.",
            "Dining area.",
            "Keep clean and stable.",
        ],
    },
    DirectionRecord {
        id: "WNW",
        name: "WNW",
        full_name: "West-North-West",
        degree: 292.5,
        element: Element::Space,
        significance: "Depression, Detoxification, and Letting Go.",
        color: "#94a3b8",
        ruler: "Shesha",
        tips: &[
            "Ideal for guest room.",
            "Detoxification area.",
            "Avoid core family bedroom.",
        ],
    },
    DirectionRecord {
        id: "NW",
        name: "NW",
        full_name: "North-West (Vayu)",
        degree: 315.0,
        element: Element::Space,
        significance: "Support, Banking, and Movement.",
        color: "#94a3b8",
        ruler: "Moon / Vayu",
        tips: &[
            "Financial support.",
            "Finished goods storage.",
            "Garage.",
        ],
    },
    DirectionRecord {
        id: "NNW",
        name: "NNW",
        full_name: "North-North-West",
        degree: 337.5,
        element: Element::Water,
        significance: "Attraction, Sex, and Relationship Harmony.",
        color: "#3b82f6",
        ruler: "Soma",
        tips: &[
            "Marital bliss.",
            "Attraction between partners.",
            "Pleasant decor.",
        ],
    },
];

/// The room types offered by the compatibility checker.
pub const ROOM_TYPES: [RoomType; 7] = [
    RoomType { id: "entrance", label: "Main Entrance", icon: "🚪" },
    RoomType { id: "kitchen", label: "Kitchen", icon: "🍳" },
    RoomType { id: "bedroom", label: "Bedroom", icon: "🛌" },
    RoomType { id: "toilet", label: "Toilet", icon: "🚽" },
    RoomType { id: "study", label: "Study Room", icon: "📚" },
    RoomType { id: "puja", label: "Puja Room", icon: "🪔" },
    RoomType { id: "living", label: "Living Room", icon: "🛋️" },
];

/// Look up a direction by its stable id. Returns `None` for any key not in
/// the fixed sixteen; callers treat that as a contract violation, not a
/// runtime condition.
pub fn direction_by_id(id: &str) -> Option<&'static DirectionRecord> {
    DIRECTIONS.iter().find(|d| d.id == id)
}

pub fn room_type_by_id(id: &str) -> Option<&'static RoomType> {
    ROOM_TYPES.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_sectors_partition_the_circle() {
        assert_eq!(DIRECTIONS.len(), 16);
        for (i, dir) in DIRECTIONS.iter().enumerate() {
            assert_eq!(dir.degree, i as f64 * 22.5, "sector {} off-center", dir.id);
        }
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in DIRECTIONS.iter().enumerate() {
            for b in DIRECTIONS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_direction_has_tips() {
        for dir in DIRECTIONS.iter() {
            assert!(!dir.tips.is_empty(), "{} has no tips", dir.id);
        }
    }

    #[test]
    fn colors_follow_the_element_family() {
        for dir in DIRECTIONS.iter() {
            assert_eq!(dir.color, dir.element.color(), "{} color mismatch", dir.id);
        }
    }

    #[test]
    fn south_east_is_the_fire_corner() {
        let se = direction_by_id("SE").unwrap();
        assert_eq!(se.element, Element::Fire);
        assert!(se.full_name.contains("South-East"));
    }

    #[test]
    fn id_round_trip_returns_the_same_record() {
        for dir in DIRECTIONS.iter() {
            let found = direction_by_id(dir.id).unwrap();
            assert_eq!(found, dir);
        }
    }

    #[test]
    fn unknown_keys_are_not_found() {
        assert!(direction_by_id("NNNE").is_none());
        assert!(direction_by_id("").is_none());
        assert!(room_type_by_id("garage").is_none());
    }

    #[test]
    fn seven_room_types_with_unique_ids() {
        assert_eq!(ROOM_TYPES.len(), 7);
        for (i, a) in ROOM_TYPES.iter().enumerate() {
            for b in ROOM_TYPES.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
        assert!(room_type_by_id("puja").is_some());
    }

    #[test]
    fn records_serialize_with_camel_case_keys() {
        let json = serde_json::to_value(DIRECTIONS[0]).unwrap();
        assert_eq!(json["fullName"], "North (Uttar)");
        assert_eq!(json["element"], "Water");
        assert_eq!(json["degree"], 0.0);
    }
}
