// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! J-series message records.
//!
//! One record per message the engine knows about, keyed by the `J<maj>/<min>`
//! id as it appears in source. `valid_npgs` drives the `message-npg-match`
//! validation rule and mirrors `valid_messages` in the NPG table.

use super::JMessage;

pub(super) const JMESSAGES: &[JMessage] = &[
    // ── J0/J1: network management ───────────────────────────────────────────
    JMessage {
        id: "J0/0",
        name: "Initial Entry",
        functional_area: "Network Management",
        description: "First transmission of a terminal entering the network.",
        fields: &["time_slot_type", "net_number", "time_quality", "stn"],
        valid_npgs: &["NPG_4"],
        spec_ref: "MIL-STD-6016 J0.0",
    },
    JMessage {
        id: "J0/1",
        name: "Test",
        functional_area: "Network Management",
        description: "Round-trip timing interrogation and reply.",
        fields: &["rtt_state", "time_quality", "stn"],
        valid_npgs: &["NPG_2", "NPG_3"],
        spec_ref: "MIL-STD-6016 J0.1",
    },
    JMessage {
        id: "J0/2",
        name: "Network Time Update",
        functional_area: "Network Management",
        description: "System time promulgation from the net time reference.",
        fields: &["system_time", "time_quality"],
        valid_npgs: &["NPG_4"],
        spec_ref: "MIL-STD-6016 J0.2",
    },
    JMessage {
        id: "J0/3",
        name: "Time Slot Assignment",
        functional_area: "Network Management",
        description: "Dynamic reassignment of time slot blocks.",
        fields: &["slot_block", "net_number", "stn"],
        valid_npgs: &["NPG_4"],
        spec_ref: "MIL-STD-6016 J0.3",
    },
    JMessage {
        id: "J0/4",
        name: "Radio Relay Control",
        functional_area: "Network Management",
        description: "Activation and control of paired-slot relay.",
        fields: &["relay_mode", "slot_block"],
        valid_npgs: &["NPG_4"],
        spec_ref: "MIL-STD-6016 J0.4",
    },
    JMessage {
        id: "J0/5",
        name: "Repromulgation Relay",
        functional_area: "Network Management",
        description: "Relay of network management traffic beyond line of sight.",
        fields: &["relay_mode", "hop_count"],
        valid_npgs: &["NPG_4"],
        spec_ref: "MIL-STD-6016 J0.5",
    },
    JMessage {
        id: "J0/6",
        name: "Communication Control",
        functional_area: "Network Management",
        description: "Control of terminal transmit and receive behavior.",
        fields: &["control_mode", "stn"],
        valid_npgs: &["NPG_4"],
        spec_ref: "MIL-STD-6016 J0.6",
    },
    JMessage {
        id: "J0/7",
        name: "Time Slot Reallocation",
        functional_area: "Network Management",
        description: "Pooled reallocation of time slots between participants.",
        fields: &["pool_id", "slot_block", "stn"],
        valid_npgs: &["NPG_4"],
        spec_ref: "MIL-STD-6016 J0.7",
    },
    JMessage {
        id: "J1/0",
        name: "Connectivity Interrogation",
        functional_area: "Network Management",
        description: "Query of a distant terminal's connectivity state.",
        fields: &["stn", "interrogation_type"],
        valid_npgs: &["NPG_4"],
        spec_ref: "MIL-STD-6016 J1.0",
    },
    JMessage {
        id: "J1/1",
        name: "Connectivity Status",
        functional_area: "Network Management",
        description: "Reply carrying observed connectivity quality.",
        fields: &["stn", "quality"],
        valid_npgs: &["NPG_4"],
        spec_ref: "MIL-STD-6016 J1.1",
    },
    JMessage {
        id: "J1/2",
        name: "Route Establishment",
        functional_area: "Network Management",
        description: "Establishment of a multi-hop relay route.",
        fields: &["route_id", "stn"],
        valid_npgs: &["NPG_4"],
        spec_ref: "MIL-STD-6016 J1.2",
    },
    JMessage {
        id: "J1/3",
        name: "Acknowledgement",
        functional_area: "Network Management",
        description: "Machine acknowledgement of addressed traffic.",
        fields: &["ack_type", "label"],
        valid_npgs: &["NPG_4"],
        spec_ref: "MIL-STD-6016 J1.3",
    },
    JMessage {
        id: "J1/4",
        name: "Communicant Status",
        functional_area: "Network Management",
        description: "Summary of a terminal's communication capabilities.",
        fields: &["stn", "capability_mask"],
        valid_npgs: &["NPG_4"],
        spec_ref: "MIL-STD-6016 J1.4",
    },
    JMessage {
        id: "J1/5",
        name: "Net Control Initialization",
        functional_area: "Network Management",
        description: "Initialization parameters issued by the net control station.",
        fields: &["net_number", "parameter_set"],
        valid_npgs: &["NPG_4"],
        spec_ref: "MIL-STD-6016 J1.5",
    },
    JMessage {
        id: "J1/6",
        name: "Needline Participation Group Assignment",
        functional_area: "Network Management",
        description: "Assignment of a participant to an NPG needline.",
        fields: &["npg_number", "stn"],
        valid_npgs: &["NPG_4"],
        spec_ref: "MIL-STD-6016 J1.6",
    },
    // ── J2: PPLI ────────────────────────────────────────────────────────────
    JMessage {
        id: "J2/0",
        name: "Indirect Interface Unit PPLI",
        functional_area: "PPLI",
        description: "Position report relayed for a unit without direct network access.",
        fields: &["latitude", "longitude", "altitude", "track_number", "time_quality"],
        valid_npgs: &["NPG_14", "NPG_A", "NPG_B"],
        spec_ref: "MIL-STD-6016 J2.0",
    },
    JMessage {
        id: "J2/2",
        name: "Air PPLI",
        functional_area: "PPLI",
        description: "Position, identification, and status of an airborne participant.",
        fields: &["latitude", "longitude", "altitude", "course", "speed", "track_number"],
        valid_npgs: &["NPG_A", "NPG_B", "NPG_5", "NPG_6", "NPG_27"],
        spec_ref: "MIL-STD-6016 J2.2",
    },
    JMessage {
        id: "J2/3",
        name: "Surface PPLI",
        functional_area: "PPLI",
        description: "Position, identification, and status of a surface participant.",
        fields: &["latitude", "longitude", "course", "speed", "track_number"],
        valid_npgs: &["NPG_A", "NPG_B", "NPG_5", "NPG_6", "NPG_27"],
        spec_ref: "MIL-STD-6016 J2.3",
    },
    JMessage {
        id: "J2/4",
        name: "Subsurface PPLI",
        functional_area: "PPLI",
        description: "Position, identification, and status of a subsurface participant.",
        fields: &["latitude", "longitude", "depth", "track_number"],
        valid_npgs: &["NPG_A", "NPG_B", "NPG_5", "NPG_6", "NPG_27"],
        spec_ref: "MIL-STD-6016 J2.4",
    },
    JMessage {
        id: "J2/5",
        name: "Land Point PPLI",
        functional_area: "PPLI",
        description: "Position and identification of a fixed land participant.",
        fields: &["latitude", "longitude", "elevation", "track_number"],
        valid_npgs: &["NPG_A", "NPG_B", "NPG_27"],
        spec_ref: "MIL-STD-6016 J2.5",
    },
    JMessage {
        id: "J2/6",
        name: "Land Track PPLI",
        functional_area: "PPLI",
        description: "Position and identification of a mobile land participant.",
        fields: &["latitude", "longitude", "course", "speed", "track_number"],
        valid_npgs: &["NPG_A", "NPG_B", "NPG_27"],
        spec_ref: "MIL-STD-6016 J2.6",
    },
    // ── J3: surveillance ────────────────────────────────────────────────────
    JMessage {
        id: "J3/0",
        name: "Reference Point",
        functional_area: "Surveillance",
        description: "Geographic reference point, line, or area.",
        fields: &["point_type", "latitude", "longitude"],
        valid_npgs: &["NPG_7", "NPG_20"],
        spec_ref: "MIL-STD-6016 J3.0",
    },
    JMessage {
        id: "J3/1",
        name: "Emergency Point",
        functional_area: "Surveillance",
        description: "Downed aircraft or distress location.",
        fields: &["emergency_type", "latitude", "longitude"],
        valid_npgs: &["NPG_7", "NPG_20"],
        spec_ref: "MIL-STD-6016 J3.1",
    },
    JMessage {
        id: "J3/2",
        name: "Air Track",
        functional_area: "Surveillance",
        description: "Air track position, identity, and amplification.",
        fields: &["track_number", "latitude", "longitude", "altitude", "identity", "strength"],
        valid_npgs: &["NPG_7", "NPG_9"],
        spec_ref: "MIL-STD-6016 J3.2",
    },
    JMessage {
        id: "J3/3",
        name: "Surface Track",
        functional_area: "Surveillance",
        description: "Maritime surface track position and identity.",
        fields: &["track_number", "latitude", "longitude", "identity"],
        valid_npgs: &["NPG_7"],
        spec_ref: "MIL-STD-6016 J3.3",
    },
    JMessage {
        id: "J3/4",
        name: "Subsurface Track",
        functional_area: "Surveillance",
        description: "Subsurface track position, identity, and depth.",
        fields: &["track_number", "latitude", "longitude", "depth", "identity"],
        valid_npgs: &["NPG_7"],
        spec_ref: "MIL-STD-6016 J3.4",
    },
    JMessage {
        id: "J3/5",
        name: "Land Point or Track",
        functional_area: "Surveillance",
        description: "Land point or mobile land track.",
        fields: &["track_number", "latitude", "longitude", "identity"],
        valid_npgs: &["NPG_7"],
        spec_ref: "MIL-STD-6016 J3.5",
    },
    JMessage {
        id: "J3/6",
        name: "Space Track",
        functional_area: "Surveillance",
        description: "Ballistic or orbital track.",
        fields: &["track_number", "latitude", "longitude", "altitude", "velocity"],
        valid_npgs: &["NPG_7"],
        spec_ref: "MIL-STD-6016 J3.6",
    },
    JMessage {
        id: "J3/7",
        name: "EW Product Information",
        functional_area: "Surveillance",
        description: "Electronic warfare derived track information.",
        fields: &["track_number", "bearing", "frequency"],
        valid_npgs: &["NPG_7", "NPG_10"],
        spec_ref: "MIL-STD-6016 J3.7",
    },
    JMessage {
        id: "J5/4",
        name: "Acoustic Bearing and Range",
        functional_area: "Surveillance",
        description: "Acoustic sensor bearing and range report.",
        fields: &["bearing", "range", "confidence"],
        valid_npgs: &["NPG_7"],
        spec_ref: "MIL-STD-6016 J5.4",
    },
    JMessage {
        id: "J6/0",
        name: "Intelligence Amplification",
        functional_area: "Intelligence",
        description: "Intelligence amplification of an existing track.",
        fields: &["track_number", "amplification_type"],
        valid_npgs: &["NPG_7"],
        spec_ref: "MIL-STD-6016 J6.0",
    },
    // ── J7: information management ──────────────────────────────────────────
    JMessage {
        id: "J7/0",
        name: "Track Management",
        functional_area: "Information Management",
        description: "Track number management actions (drop, change, emergency).",
        fields: &["action", "track_number"],
        valid_npgs: &["NPG_7", "NPG_20"],
        spec_ref: "MIL-STD-6016 J7.0",
    },
    JMessage {
        id: "J7/1",
        name: "Data Update Request",
        functional_area: "Information Management",
        description: "Request for updated data on a track or participant.",
        fields: &["request_type", "track_number"],
        valid_npgs: &["NPG_7", "NPG_11"],
        spec_ref: "MIL-STD-6016 J7.1",
    },
    JMessage {
        id: "J7/2",
        name: "Correlation",
        functional_area: "Information Management",
        description: "Correlation of two track numbers onto one object.",
        fields: &["track_number", "correlated_track_number"],
        valid_npgs: &["NPG_7"],
        spec_ref: "MIL-STD-6016 J7.2",
    },
    JMessage {
        id: "J7/3",
        name: "Pointer",
        functional_area: "Information Management",
        description: "Operator attention pointer at a geographic position.",
        fields: &["latitude", "longitude", "pointer_type"],
        valid_npgs: &["NPG_7"],
        spec_ref: "MIL-STD-6016 J7.3",
    },
    JMessage {
        id: "J7/4",
        name: "Track Identifier",
        functional_area: "Information Management",
        description: "Assignment of an alphanumeric track identifier.",
        fields: &["track_number", "identifier"],
        valid_npgs: &["NPG_7"],
        spec_ref: "MIL-STD-6016 J7.4",
    },
    JMessage {
        id: "J7/5",
        name: "IFF/SIF Management",
        functional_area: "Information Management",
        description: "IFF/SIF code management for a track.",
        fields: &["track_number", "mode", "code"],
        valid_npgs: &["NPG_7"],
        spec_ref: "MIL-STD-6016 J7.5",
    },
    JMessage {
        id: "J7/6",
        name: "Filter Management",
        functional_area: "Information Management",
        description: "Management of geographic and identity reporting filters.",
        fields: &["filter_type", "action"],
        valid_npgs: &["NPG_7"],
        spec_ref: "MIL-STD-6016 J7.6",
    },
    JMessage {
        id: "J7/7",
        name: "Association",
        functional_area: "Information Management",
        description: "Association between a track and a reference point.",
        fields: &["track_number", "point_id"],
        valid_npgs: &["NPG_7"],
        spec_ref: "MIL-STD-6016 J7.7",
    },
    JMessage {
        id: "J8/0",
        name: "Unit Designator",
        functional_area: "Information Management",
        description: "Designation of a unit by address and mission correlator.",
        fields: &["stn", "mission_correlator"],
        valid_npgs: &["NPG_8"],
        spec_ref: "MIL-STD-6016 J8.0",
    },
    JMessage {
        id: "J8/1",
        name: "Mission Correlator Change",
        functional_area: "Information Management",
        description: "Change of an assigned mission correlator.",
        fields: &["old_correlator", "new_correlator"],
        valid_npgs: &["NPG_8"],
        spec_ref: "MIL-STD-6016 J8.1",
    },
    // ── J9/J10: weapons coordination ────────────────────────────────────────
    JMessage {
        id: "J9/0",
        name: "Command",
        functional_area: "Weapons Coordination",
        description: "Engagement command from a controlling unit.",
        fields: &["command", "track_number", "addressee"],
        valid_npgs: &["NPG_8", "NPG_18", "NPG_21"],
        spec_ref: "MIL-STD-6016 J9.0",
    },
    JMessage {
        id: "J9/1",
        name: "Engagement Coordination",
        functional_area: "Weapons Coordination",
        description: "Coordination of engagements between firing units.",
        fields: &["track_number", "weapon_system", "engagement_action"],
        valid_npgs: &["NPG_18", "NPG_21"],
        spec_ref: "MIL-STD-6016 J9.1",
    },
    JMessage {
        id: "J10/2",
        name: "Engagement Status",
        functional_area: "Weapons Coordination",
        description: "Status of an engagement against a track.",
        fields: &["track_number", "status", "weapon_system"],
        valid_npgs: &["NPG_8", "NPG_18", "NPG_21"],
        spec_ref: "MIL-STD-6016 J10.2",
    },
    JMessage {
        id: "J10/3",
        name: "Handover",
        functional_area: "Weapons Coordination",
        description: "Handover of engagement responsibility.",
        fields: &["track_number", "from_unit", "to_unit"],
        valid_npgs: &["NPG_18", "NPG_21"],
        spec_ref: "MIL-STD-6016 J10.3",
    },
    JMessage {
        id: "J10/5",
        name: "Controlling Unit Report",
        functional_area: "Weapons Coordination",
        description: "Report of the unit controlling a track.",
        fields: &["track_number", "controlling_unit"],
        valid_npgs: &["NPG_18"],
        spec_ref: "MIL-STD-6016 J10.5",
    },
    JMessage {
        id: "J10/6",
        name: "Pairing",
        functional_area: "Weapons Coordination",
        description: "Pairing of a weapon to a target track.",
        fields: &["track_number", "weapon_track_number"],
        valid_npgs: &["NPG_18"],
        spec_ref: "MIL-STD-6016 J10.6",
    },
    // ── J12: air control ────────────────────────────────────────────────────
    JMessage {
        id: "J12/0",
        name: "Mission Assignment",
        functional_area: "Air Control",
        description: "Assignment of a mission to a controlled aircraft.",
        fields: &["mission_type", "track_number", "addressee"],
        valid_npgs: &["NPG_9"],
        spec_ref: "MIL-STD-6016 J12.0",
    },
    JMessage {
        id: "J12/1",
        name: "Vector",
        functional_area: "Air Control",
        description: "Vectoring instruction (heading, speed, altitude).",
        fields: &["heading", "speed", "altitude", "addressee"],
        valid_npgs: &["NPG_9"],
        spec_ref: "MIL-STD-6016 J12.1",
    },
    JMessage {
        id: "J12/2",
        name: "Precision Aircraft Direction",
        functional_area: "Air Control",
        description: "Precision direction for final-phase intercepts.",
        fields: &["heading", "range", "closing_velocity"],
        valid_npgs: &["NPG_9"],
        spec_ref: "MIL-STD-6016 J12.2",
    },
    JMessage {
        id: "J12/3",
        name: "Flight Path",
        functional_area: "Air Control",
        description: "Planned flight path waypoints.",
        fields: &["waypoint_count", "latitude", "longitude"],
        valid_npgs: &["NPG_9"],
        spec_ref: "MIL-STD-6016 J12.3",
    },
    JMessage {
        id: "J12/4",
        name: "Controlling Unit Change",
        functional_area: "Air Control",
        description: "Transfer of aircraft control between units.",
        fields: &["from_unit", "to_unit", "addressee"],
        valid_npgs: &["NPG_9"],
        spec_ref: "MIL-STD-6016 J12.4",
    },
    JMessage {
        id: "J12/5",
        name: "Target/Track Correlation",
        functional_area: "Air Control",
        description: "Correlation between an assigned target and a track.",
        fields: &["track_number", "target_number"],
        valid_npgs: &["NPG_9"],
        spec_ref: "MIL-STD-6016 J12.5",
    },
    JMessage {
        id: "J12/6",
        name: "Target Sorting",
        functional_area: "Air Control",
        description: "Sorting of targets among flight members.",
        fields: &["track_number", "sort_order"],
        valid_npgs: &["NPG_9", "NPG_19"],
        spec_ref: "MIL-STD-6016 J12.6",
    },
    JMessage {
        id: "J12/7",
        name: "Target Bearing",
        functional_area: "Air Control",
        description: "Bearing and range to an assigned target.",
        fields: &["bearing", "range", "altitude"],
        valid_npgs: &["NPG_9", "NPG_19"],
        spec_ref: "MIL-STD-6016 J12.7",
    },
    // ── J13: platform status ────────────────────────────────────────────────
    JMessage {
        id: "J13/0",
        name: "Airfield Status",
        functional_area: "Platform Status",
        description: "Operational status of an airfield.",
        fields: &["airfield_id", "runway_state", "fuel_available"],
        valid_npgs: &["NPG_5", "NPG_6"],
        spec_ref: "MIL-STD-6016 J13.0",
    },
    JMessage {
        id: "J13/2",
        name: "Air Platform and System Status",
        functional_area: "Platform Status",
        description: "Fuel, weapons, and sensor status of an air platform.",
        fields: &["fuel", "weapons_state", "radar_state"],
        valid_npgs: &["NPG_5", "NPG_6", "NPG_19"],
        spec_ref: "MIL-STD-6016 J13.2",
    },
    JMessage {
        id: "J13/3",
        name: "Surface Platform and System Status",
        functional_area: "Platform Status",
        description: "System status of a surface platform.",
        fields: &["weapons_state", "sensor_state"],
        valid_npgs: &["NPG_5", "NPG_6"],
        spec_ref: "MIL-STD-6016 J13.3",
    },
    JMessage {
        id: "J13/4",
        name: "Subsurface Platform and System Status",
        functional_area: "Platform Status",
        description: "System status of a subsurface platform.",
        fields: &["weapons_state", "depth_capability"],
        valid_npgs: &["NPG_5", "NPG_6"],
        spec_ref: "MIL-STD-6016 J13.4",
    },
    JMessage {
        id: "J13/5",
        name: "Land Platform and System Status",
        functional_area: "Platform Status",
        description: "System status of a land platform.",
        fields: &["weapons_state", "mobility_state"],
        valid_npgs: &["NPG_5", "NPG_6"],
        spec_ref: "MIL-STD-6016 J13.5",
    },
    // ── J14/J15: EW and threat warning ──────────────────────────────────────
    JMessage {
        id: "J14/0",
        name: "Parametric Information",
        functional_area: "Electronic Warfare",
        description: "Measured emitter parametrics.",
        fields: &["frequency", "pulse_width", "pri"],
        valid_npgs: &["NPG_10"],
        spec_ref: "MIL-STD-6016 J14.0",
    },
    JMessage {
        id: "J14/2",
        name: "EW Control and Coordination",
        functional_area: "Electronic Warfare",
        description: "Coordination of electronic warfare actions.",
        fields: &["action", "frequency_band"],
        valid_npgs: &["NPG_10"],
        spec_ref: "MIL-STD-6016 J14.2",
    },
    JMessage {
        id: "J15/0",
        name: "Threat Warning",
        functional_area: "Threat Warning",
        description: "Warning of an imminent threat to a unit.",
        fields: &["threat_type", "track_number", "addressee"],
        valid_npgs: &["NPG_8", "NPG_10"],
        spec_ref: "MIL-STD-6016 J15.0",
    },
    // ── Miscellaneous ───────────────────────────────────────────────────────
    JMessage {
        id: "J17/0",
        name: "Weather Over Target",
        functional_area: "Weather",
        description: "Weather conditions over a target area.",
        fields: &["latitude", "longitude", "ceiling", "visibility"],
        valid_npgs: &["NPG_15"],
        spec_ref: "MIL-STD-6016 J17.0",
    },
    JMessage {
        id: "J28/2",
        name: "Free Text",
        functional_area: "Free Text",
        description: "Operator-entered free text.",
        fields: &["text"],
        valid_npgs: &["NPG_17"],
        spec_ref: "MIL-STD-6016 J28.2",
    },
    JMessage {
        id: "J31/7",
        name: "No Statement",
        functional_area: "Miscellaneous",
        description: "Fill message carrying no information.",
        fields: &[],
        valid_npgs: &[],
        spec_ref: "MIL-STD-6016 J31.7",
    },
];
