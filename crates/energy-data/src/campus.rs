//! Fixed campus layout shared by generated and live records.

/// A metered room on campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampusRoom {
    /// Numeric room identifier.
    pub id: u32,
    /// Display name.
    pub name: &'static str,
    /// Block the room belongs to.
    pub block: &'static str,
}

impl CampusRoom {
    /// Returns `true` for rooms in a residential hostel block.
    #[must_use]
    pub fn is_hostel(&self) -> bool {
        self.block.contains("Hostel")
    }
}

/// The eight metered rooms, in display order.
pub const ROOMS: [CampusRoom; 8] = [
    CampusRoom {
        id: 101,
        name: "Lec Hall 101",
        block: "Block A",
    },
    CampusRoom {
        id: 102,
        name: "Lec Hall 102",
        block: "Block A",
    },
    CampusRoom {
        id: 103,
        name: "Comp Lab",
        block: "Block B",
    },
    CampusRoom {
        id: 201,
        name: "Chemistry Lab",
        block: "Block C",
    },
    CampusRoom {
        id: 301,
        name: "Room 301",
        block: "Boys Hostel",
    },
    CampusRoom {
        id: 302,
        name: "Room 302",
        block: "Boys Hostel",
    },
    CampusRoom {
        id: 401,
        name: "Room 401",
        block: "Girls Hostel",
    },
    CampusRoom {
        id: 402,
        name: "Common Area",
        block: "Girls Hostel",
    },
];

/// Campus blocks, in the order block fractions are listed.
pub const BLOCKS: [&str; 5] = ["Block A", "Block B", "Block C", "Boys Hostel", "Girls Hostel"];

/// Trend sample times within a day.
pub const TREND_TIMES: [&str; 7] = ["00:00", "04:00", "08:00", "12:00", "16:00", "20:00", "23:59"];

/// Rooms sampled for the occupancy heatmap.
pub const HEATMAP_ROOMS: [&str; 5] = ["101", "102", "Lab", "301", "401"];

/// Hourly heatmap slots, 08:00 to 20:00.
pub const HEATMAP_SLOTS: usize = 12;

/// Usage breakdown categories with their chart colours.
pub const USAGE_CATEGORIES: [(&str, &str); 3] = [
    ("Productive Usage", "#10b981"),
    ("Idle Usage", "#f59e0b"),
    ("Wastage", "#ef4444"),
];
