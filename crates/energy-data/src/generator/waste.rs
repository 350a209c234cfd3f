//! Waste event catalogues per scenario.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::record::{RiskLevel, WasteEvent};
use crate::scenario::Scenario;

/// Number of routine issues reported on a normal day.
const ROUTINE_PICKS: usize = 3;

type Template = (&'static str, RiskLevel, &'static str);

const HIGH_LOAD_EVENTS: [Template; 2] = [
    (
        "HVAC System Overload in Block A",
        RiskLevel::Critical,
        "Cooling demand exceeding setpoints by 40%.",
    ),
    ("Peak Demand Violation", RiskLevel::High, "Crossed grid threshold at 2 PM."),
];

const WEEKEND_EVENTS: [Template; 2] = [
    (
        "Unnecessary Lighting in Academic Block",
        RiskLevel::Medium,
        "Lights active in empty classrooms.",
    ),
    ("Cafeteria Refrigeration Check", RiskLevel::Low, "Weekend mode not activated."),
];

const LEAKAGE_EVENTS: [Template; 2] = [
    (
        "Water Pump Continuous Run",
        RiskLevel::High,
        "Pump active for 24h, possible sensor failure.",
    ),
    ("Phantom Load in Labs", RiskLevel::Medium, "Standby power 3x higher than norm."),
];

const EVENT_EVENTS: [Template; 2] = [
    ("Auditorium HVAC Spike", RiskLevel::Medium, "Events usage optimized?"),
    (
        "Stage Lighting Power Draw",
        RiskLevel::Low,
        "High consumption detected during rehearsal.",
    ),
];

const ROUTINE_ISSUES: [Template; 18] = [
    (
        "Routine Sensor Calibration",
        RiskLevel::Low,
        "Sensors in Block B showing minor drift (0.5°C).",
    ),
    (
        "Optimize Corridors Lighting",
        RiskLevel::Low,
        "Daylight harvesting could save 2% in Block A.",
    ),
    (
        "Check Solar Panel Efficiency",
        RiskLevel::Medium,
        "Output 5% lower than expected clear sky model.",
    ),
    (
        "Computer Lab Sleep Settings",
        RiskLevel::Low,
        "Check if auto-shutdown policies are active in Lab 3.",
    ),
    (
        "Library HVAC Setpoint",
        RiskLevel::Low,
        "Temperature set 2°C lower than recommended ASHRAE standards.",
    ),
    (
        "Cafeteria Exhaust Fan Schedule",
        RiskLevel::Medium,
        "Fans running 2 hours post-closing time.",
    ),
    ("Streetlight Timer Adjustment", RiskLevel::Low, "Lights turning on 15 mins before sunset."),
    (
        "Water Cooler Timer Optimization",
        RiskLevel::Low,
        "Coolers cooling water during weekends/nights.",
    ),
    ("Vending Machine Energy Saver", RiskLevel::Low, "Compressors cycling too frequently."),
    ("Projector Standby Power", RiskLevel::Low, "Classroom projectors drawing 50W in standby."),
    (
        "Server Room Cold Aisle Containment",
        RiskLevel::Medium,
        "Mixing of hot/cold air reducing cooling efficiency.",
    ),
    ("Thermal Leak Detection", RiskLevel::Medium, "Infrared scan suggests gap in Block C windows."),
    (
        "Motion Sensor Sensitivity",
        RiskLevel::Low,
        "False triggers in corridors causing lights to stay on.",
    ),
    ("Elevator Idle Mode", RiskLevel::Low, "Elevators not entering deep sleep mode off-hours."),
    (
        "Irrigation Pump Schedule",
        RiskLevel::Medium,
        "Watering occurring during peak evaporation hours.",
    ),
    ("Gym Treadmill Standby", RiskLevel::Low, "Equipment left fully on 24/7."),
    ("Printer/Copier Eco Mode", RiskLevel::Low, "Admin block printers disabling sleep mode."),
    (
        "Dormitory Geyser Timer",
        RiskLevel::High,
        "Hot water circulation pumps running continuously.",
    ),
];

/// Waste events for a generated day. Never empty.
pub(crate) fn waste_events<R: Rng + ?Sized>(scenario: Scenario, rng: &mut R) -> Vec<WasteEvent> {
    let templates: Vec<&Template> = match scenario {
        Scenario::HighLoad => HIGH_LOAD_EVENTS.iter().collect(),
        Scenario::Weekend => WEEKEND_EVENTS.iter().collect(),
        Scenario::Leakage => LEAKAGE_EVENTS.iter().collect(),
        Scenario::Event => EVENT_EVENTS.iter().collect(),
        Scenario::Normal => {
            let mut routine: Vec<&Template> = ROUTINE_ISSUES.iter().collect();
            routine.shuffle(rng);
            routine.truncate(ROUTINE_PICKS);
            routine
        }
    };
    templates.into_iter().map(to_event).collect()
}

fn to_event(&(issue, risk, details): &Template) -> WasteEvent {
    WasteEvent {
        issue: issue.to_owned(),
        risk,
        details: details.to_owned(),
    }
}
