//! Static room and recommendation lists written by store seeding.

use energy_data::{RiskLevel, RoomSnapshot, RoomStatus, is_wasting};

use super::{Recommendation, RecommendationKind};

struct RoomReading {
    id: u32,
    name: &'static str,
    block: &'static str,
    status: RoomStatus,
    lights: bool,
    fans: bool,
    power: f64,
    energy: f64,
}

const ROOM_READINGS: [RoomReading; 8] = [
    RoomReading {
        id: 101,
        name: "Lec Hall 101",
        block: "Block A",
        status: RoomStatus::Occupied,
        lights: true,
        fans: true,
        power: 450.0,
        energy: 5.2,
    },
    RoomReading {
        id: 102,
        name: "Lec Hall 102",
        block: "Block A",
        status: RoomStatus::Vacant,
        lights: false,
        fans: false,
        power: 0.0,
        energy: 2.1,
    },
    RoomReading {
        id: 103,
        name: "Comp Lab",
        block: "Block B",
        status: RoomStatus::Vacant,
        lights: true,
        fans: false,
        power: 120.0,
        energy: 3.5,
    },
    RoomReading {
        id: 201,
        name: "Chemistry Lab",
        block: "Block C",
        status: RoomStatus::Occupied,
        lights: true,
        fans: true,
        power: 850.0,
        energy: 12.5,
    },
    RoomReading {
        id: 301,
        name: "Room 301",
        block: "Boys Hostel",
        status: RoomStatus::Occupied,
        lights: true,
        fans: true,
        power: 320.0,
        energy: 8.4,
    },
    RoomReading {
        id: 302,
        name: "Room 302",
        block: "Boys Hostel",
        status: RoomStatus::Vacant,
        lights: false,
        fans: true,
        power: 60.0,
        energy: 1.2,
    },
    RoomReading {
        id: 401,
        name: "Room 401",
        block: "Girls Hostel",
        status: RoomStatus::Occupied,
        lights: true,
        fans: false,
        power: 150.0,
        energy: 3.1,
    },
    RoomReading {
        id: 402,
        name: "Common Area",
        block: "Girls Hostel",
        status: RoomStatus::Vacant,
        lights: true,
        fans: true,
        power: 400.0,
        energy: 4.5,
    },
];

/// Room snapshots seeded into `room_status`.
pub fn default_rooms() -> Vec<RoomSnapshot> {
    ROOM_READINGS
        .iter()
        .map(|reading| RoomSnapshot {
            id: reading.id,
            name: reading.name.to_owned(),
            block: reading.block.to_owned(),
            status: reading.status,
            lights: reading.lights,
            fans: reading.fans,
            power: reading.power,
            energy: reading.energy,
            warning: is_wasting(reading.status, reading.lights, reading.fans),
        })
        .collect()
}

/// Recommendations seeded into `recommendations`.
pub fn default_recommendations() -> Vec<Recommendation> {
    let entry = |id: u32,
                 room: &str,
                 block: &str,
                 (issue, insight, recommendation): (&str, &str, &str),
                 savings: &str,
                 priority: RiskLevel,
                 kind: RecommendationKind| Recommendation {
        id,
        room: room.to_owned(),
        block: block.to_owned(),
        issue: issue.to_owned(),
        insight: insight.to_owned(),
        recommendation: recommendation.to_owned(),
        savings: savings.to_owned(),
        priority,
        kind,
    };
    vec![
        entry(
            1,
            "Comp Lab",
            "Block B",
            (
                "Lights ON in vacant room",
                "Occupancy sensor detects 0 people for > 30 mins",
                "Turn off lights automatically",
            ),
            "12%",
            RiskLevel::High,
            RecommendationKind::Critical,
        ),
        entry(
            2,
            "Room 302",
            "Boys Hostel",
            ("Fan ON in vacant room", "Room vacant since 9 AM", "Remote fan cutoff"),
            "5%",
            RiskLevel::Medium,
            RecommendationKind::Warning,
        ),
        entry(
            3,
            "Chemistry Lab",
            "Block C",
            ("High baseload power", "Equipment left running", "Check equipment status"),
            "15%",
            RiskLevel::Medium,
            RecommendationKind::Improvement,
        ),
        entry(
            4,
            "Common Area",
            "Girls Hostel",
            ("Inefficient Cooling", "AC set to 18°C", "Set to 24°C"),
            "20%",
            RiskLevel::Low,
            RecommendationKind::Optimization,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use energy_data::campus::ROOMS;

    use super::*;

    #[test]
    fn default_rooms_cover_the_campus_rooms() {
        let ids: Vec<u32> = default_rooms().iter().map(|room| room.id).collect();
        let expected: Vec<u32> = ROOMS.iter().map(|room| room.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn vacant_rooms_with_loads_carry_warnings() {
        let warned: Vec<u32> = default_rooms()
            .into_iter()
            .filter(|room| room.warning)
            .map(|room| room.id)
            .collect();
        assert_eq!(warned, vec![103, 302, 402]);
    }

    #[test]
    fn recommendation_ids_are_unique() {
        let mut ids: Vec<u32> = default_recommendations().iter().map(|rec| rec.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
