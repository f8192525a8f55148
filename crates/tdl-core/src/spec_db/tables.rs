// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Role, platform-type, and enumeration tables.

use super::{PlatformType, Role};

/// Roles a terminal may take in a Link-16 network.
pub(super) const LINK16_ROLES: &[Role] = &[
    Role {
        id: "NetControlStation",
        name: "Net Control Station",
        description: "Designated controller of the network; sole source of \
                      initialization and net time.",
        spec_ref: "MIL-STD-6016 NCS",
    },
    Role {
        id: "Participant",
        name: "Participant",
        description: "Ordinary participating terminal.",
        spec_ref: "MIL-STD-6016",
    },
    Role {
        id: "ForwardTell",
        name: "Forward Tell",
        description: "Forwards selected traffic to units outside the network.",
        spec_ref: "MIL-STD-6016",
    },
    Role {
        id: "Relay",
        name: "Relay",
        description: "Retransmits traffic in paired slots to extend coverage.",
        spec_ref: "MIL-STD-6016",
    },
];

/// Roles a member may take in a Link-22 subnetwork.
pub(super) const LINK22_ROLES: &[Role] = &[
    Role {
        id: "Controller",
        name: "Subnetwork Controller",
        description: "Manages subnetwork membership and slot allocation.",
        spec_ref: "STANAG 5522",
    },
    Role {
        id: "Participant",
        name: "Participant",
        description: "Ordinary subnetwork member.",
        spec_ref: "STANAG 5522",
    },
];

/// Platform types referenced by terminal and member declarations.
pub(super) const PLATFORM_TYPES: &[PlatformType] = &[
    PlatformType {
        id: "fighter",
        name: "Fighter",
        description: "Fixed-wing fighter aircraft.",
    },
    PlatformType {
        id: "bomber",
        name: "Bomber",
        description: "Fixed-wing strike aircraft.",
    },
    PlatformType {
        id: "tanker",
        name: "Tanker",
        description: "Air-to-air refueling aircraft.",
    },
    PlatformType {
        id: "awacs",
        name: "Airborne Early Warning",
        description: "Airborne surveillance and control platform.",
    },
    PlatformType {
        id: "maritime_patrol",
        name: "Maritime Patrol Aircraft",
        description: "Fixed-wing maritime surveillance aircraft.",
    },
    PlatformType {
        id: "helicopter",
        name: "Helicopter",
        description: "Rotary-wing platform.",
    },
    PlatformType {
        id: "uav",
        name: "Unmanned Aerial Vehicle",
        description: "Remotely piloted or autonomous air platform.",
    },
    PlatformType {
        id: "surface_ship",
        name: "Surface Ship",
        description: "Surface combatant or auxiliary.",
    },
    PlatformType {
        id: "submarine",
        name: "Submarine",
        description: "Subsurface platform.",
    },
    PlatformType {
        id: "ground_station",
        name: "Ground Station",
        description: "Fixed ground entry or relay site.",
    },
    PlatformType {
        id: "command_post",
        name: "Command Post",
        description: "Land-based command and control element.",
    },
    PlatformType {
        id: "missile_battery",
        name: "Missile Battery",
        description: "Surface-to-air missile fire unit.",
    },
];

/// Security classification levels, in ascending order.
pub(super) const CLASSIFICATIONS: &[&str] =
    &["UNCLASSIFIED", "CONFIDENTIAL", "SECRET", "TOP_SECRET"];

/// Link-22 media access modes.
pub(super) const OPERATING_MODES: &[&str] = &["NetSlotted", "Contention", "Hybrid"];

/// Link-22 transmission rates.
pub(super) const DATA_RATES: &[&str] = &["Low", "Medium", "High"];
