//! Room snapshot synthesis.

use rand::Rng;

use crate::campus::{CampusRoom, ROOMS};
use crate::record::{RoomSnapshot, RoomStatus};
use crate::scenario::Scenario;

/// Generates one snapshot per campus room for the given scenario.
pub(crate) fn generate_rooms<R: Rng + ?Sized>(
    scenario: Scenario,
    rng: &mut R,
) -> Vec<RoomSnapshot> {
    ROOMS
        .iter()
        .map(|room| generate_room(room, scenario, rng))
        .collect()
}

fn generate_room<R: Rng + ?Sized>(
    room: &CampusRoom,
    scenario: Scenario,
    rng: &mut R,
) -> RoomSnapshot {
    match scenario {
        Scenario::Weekend if room.is_hostel() => {
            let occupied = rng.random_bool(0.7);
            let lights = occupied || rng.random_bool(0.1);
            let power = if occupied {
                150.0 + rng.random::<f64>() * 200.0
            } else if lights {
                40.0
            } else {
                0.0
            };
            RoomSnapshot::from_reading(room, status_for(occupied), lights, occupied, power)
        }
        Scenario::Weekend => {
            let occupied = rng.random_bool(0.1);
            let lights = occupied || rng.random_bool(0.2);
            let power = if lights { 50.0 } else { 0.0 };
            RoomSnapshot::from_reading(room, status_for(occupied), lights, false, power)
        }
        Scenario::HighLoad => {
            let occupied = rng.random_bool(0.8);
            let power = if occupied {
                500.0 + rng.random::<f64>() * 400.0
            } else if rng.random_bool(0.5) {
                200.0
            } else {
                0.0
            };
            RoomSnapshot::from_reading(room, status_for(occupied), true, true, power)
        }
        Scenario::Normal | Scenario::Leakage | Scenario::Event => {
            let occupied = rng.random_bool(0.6);
            let power = if occupied {
                200.0 + rng.random::<f64>() * 300.0
            } else {
                0.0
            };
            RoomSnapshot::from_reading(room, status_for(occupied), occupied, occupied, power)
        }
    }
}

const fn status_for(occupied: bool) -> RoomStatus {
    if occupied {
        RoomStatus::Occupied
    } else {
        RoomStatus::Vacant
    }
}
