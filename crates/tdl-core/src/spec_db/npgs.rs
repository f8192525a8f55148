// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Network Participation Group records.
//!
//! `NPG_A` and `NPG_B` are the two PPLI partitions (numbers 0 and 1); the
//! numbered groups run from `NPG_2` to `NPG_27`. The `valid_messages` lists
//! mirror the `valid_npgs` lists in the J-message table.

use super::Npg;

pub(super) const NPGS: &[Npg] = &[
    Npg {
        id: "NPG_A",
        name: "PPLI Partition A",
        number: 0,
        description: "Precise participant location and identification, partition A. \
                      Every active terminal reports position and status here.",
        valid_messages: &["J2/0", "J2/2", "J2/3", "J2/4", "J2/5", "J2/6"],
        spec_ref: "MIL-STD-6016 NPG A",
    },
    Npg {
        id: "NPG_B",
        name: "PPLI Partition B",
        number: 1,
        description: "Precise participant location and identification, partition B. \
                      Overflow partition for dense networks.",
        valid_messages: &["J2/0", "J2/2", "J2/3", "J2/4", "J2/5", "J2/6"],
        spec_ref: "MIL-STD-6016 NPG B",
    },
    Npg {
        id: "NPG_2",
        name: "Round-Trip Timing A",
        number: 2,
        description: "Dedicated round-trip timing exchanges for active synchronization.",
        valid_messages: &["J0/1"],
        spec_ref: "MIL-STD-6016 NPG 2",
    },
    Npg {
        id: "NPG_3",
        name: "Round-Trip Timing B",
        number: 3,
        description: "Alternate round-trip timing group.",
        valid_messages: &["J0/1"],
        spec_ref: "MIL-STD-6016 NPG 3",
    },
    Npg {
        id: "NPG_4",
        name: "Network Management",
        number: 4,
        description: "Network control traffic: entry, time updates, slot assignment, \
                      relay control, and connectivity management.",
        valid_messages: &[
            "J0/0", "J0/2", "J0/3", "J0/4", "J0/5", "J0/6", "J0/7", "J1/0", "J1/1", "J1/2",
            "J1/3", "J1/4", "J1/5", "J1/6",
        ],
        spec_ref: "MIL-STD-6016 NPG 4",
    },
    Npg {
        id: "NPG_5",
        name: "PPLI and Status A",
        number: 5,
        description: "Combined position and platform status reporting, group A.",
        valid_messages: &["J2/2", "J2/3", "J2/4", "J13/0", "J13/2", "J13/3", "J13/4", "J13/5"],
        spec_ref: "MIL-STD-6016 NPG 5",
    },
    Npg {
        id: "NPG_6",
        name: "PPLI and Status B",
        number: 6,
        description: "Combined position and platform status reporting, group B.",
        valid_messages: &["J2/2", "J2/3", "J2/4", "J13/0", "J13/2", "J13/3", "J13/4", "J13/5"],
        spec_ref: "MIL-STD-6016 NPG 6",
    },
    Npg {
        id: "NPG_7",
        name: "Surveillance",
        number: 7,
        description: "Track reporting and track management for all environments.",
        valid_messages: &[
            "J3/0", "J3/1", "J3/2", "J3/3", "J3/4", "J3/5", "J3/6", "J3/7", "J5/4", "J6/0",
            "J7/0", "J7/1", "J7/2", "J7/3", "J7/4", "J7/5", "J7/6", "J7/7",
        ],
        spec_ref: "MIL-STD-6016 NPG 7",
    },
    Npg {
        id: "NPG_8",
        name: "Mission Management",
        number: 8,
        description: "Unit designation, command, and engagement status exchange.",
        valid_messages: &["J8/0", "J8/1", "J9/0", "J10/2", "J15/0"],
        spec_ref: "MIL-STD-6016 NPG 8",
    },
    Npg {
        id: "NPG_9",
        name: "Air Control",
        number: 9,
        description: "Controller-to-aircraft mission assignment and vectoring; \
                      carries uplinked air tracks.",
        valid_messages: &[
            "J3/2", "J12/0", "J12/1", "J12/2", "J12/3", "J12/4", "J12/5", "J12/6", "J12/7",
        ],
        spec_ref: "MIL-STD-6016 NPG 9",
    },
    Npg {
        id: "NPG_10",
        name: "Electronic Warfare",
        number: 10,
        description: "Electronic warfare parametrics, coordination, and threat warning.",
        valid_messages: &["J3/7", "J14/0", "J14/2", "J15/0"],
        spec_ref: "MIL-STD-6016 NPG 10",
    },
    Npg {
        id: "NPG_11",
        name: "Data Update Request",
        number: 11,
        description: "Dedicated group for data update request traffic.",
        valid_messages: &["J7/1"],
        spec_ref: "MIL-STD-6016 NPG 11",
    },
    Npg {
        id: "NPG_12",
        name: "Voice Group A",
        number: 12,
        description: "Digitized voice channel A; carries no J-series traffic.",
        valid_messages: &[],
        spec_ref: "MIL-STD-6016 NPG 12",
    },
    Npg {
        id: "NPG_13",
        name: "Voice Group B",
        number: 13,
        description: "Digitized voice channel B; carries no J-series traffic.",
        valid_messages: &[],
        spec_ref: "MIL-STD-6016 NPG 13",
    },
    Npg {
        id: "NPG_14",
        name: "Indirect PPLI",
        number: 14,
        description: "Position reports relayed on behalf of units without direct access.",
        valid_messages: &["J2/0"],
        spec_ref: "MIL-STD-6016 NPG 14",
    },
    Npg {
        id: "NPG_15",
        name: "Weather",
        number: 15,
        description: "Weather-over-target reporting.",
        valid_messages: &["J17/0"],
        spec_ref: "MIL-STD-6016 NPG 15",
    },
    Npg {
        id: "NPG_16",
        name: "Imagery",
        number: 16,
        description: "Reserved for imagery transfer.",
        valid_messages: &[],
        spec_ref: "MIL-STD-6016 NPG 16",
    },
    Npg {
        id: "NPG_17",
        name: "Free Text",
        number: 17,
        description: "Free-text messaging between operators.",
        valid_messages: &["J28/2"],
        spec_ref: "MIL-STD-6016 NPG 17",
    },
    Npg {
        id: "NPG_18",
        name: "Weapons Coordination",
        number: 18,
        description: "Engagement coordination, handover, and pairing.",
        valid_messages: &["J9/0", "J9/1", "J10/2", "J10/3", "J10/5", "J10/6"],
        spec_ref: "MIL-STD-6016 NPG 18",
    },
    Npg {
        id: "NPG_19",
        name: "Fighter-to-Fighter",
        number: 19,
        description: "Direct exchange of sorting, bearing, and status between fighters.",
        valid_messages: &["J12/6", "J12/7", "J13/2"],
        spec_ref: "MIL-STD-6016 NPG 19",
    },
    Npg {
        id: "NPG_20",
        name: "Surveillance Support",
        number: 20,
        description: "Reference points, emergency points, and track management support.",
        valid_messages: &["J3/0", "J3/1", "J7/0"],
        spec_ref: "MIL-STD-6016 NPG 20",
    },
    Npg {
        id: "NPG_21",
        name: "Engagement Coordination",
        number: 21,
        description: "Dedicated engagement coordination group for dense theaters.",
        valid_messages: &["J9/0", "J9/1", "J10/2", "J10/3"],
        spec_ref: "MIL-STD-6016 NPG 21",
    },
    Npg {
        id: "NPG_22",
        name: "Composite A",
        number: 22,
        description: "Composite group A; assignment is theater-defined.",
        valid_messages: &[],
        spec_ref: "MIL-STD-6016 NPG 22",
    },
    Npg {
        id: "NPG_23",
        name: "Composite B",
        number: 23,
        description: "Composite group B; assignment is theater-defined.",
        valid_messages: &[],
        spec_ref: "MIL-STD-6016 NPG 23",
    },
    Npg {
        id: "NPG_24",
        name: "Reserved 24",
        number: 24,
        description: "Reserved.",
        valid_messages: &[],
        spec_ref: "MIL-STD-6016 NPG 24",
    },
    Npg {
        id: "NPG_25",
        name: "Reserved 25",
        number: 25,
        description: "Reserved.",
        valid_messages: &[],
        spec_ref: "MIL-STD-6016 NPG 25",
    },
    Npg {
        id: "NPG_26",
        name: "Reserved 26",
        number: 26,
        description: "Reserved.",
        valid_messages: &[],
        spec_ref: "MIL-STD-6016 NPG 26",
    },
    Npg {
        id: "NPG_27",
        name: "Joint PPLI",
        number: 27,
        description: "PPLI exchange with joint and coalition participants.",
        valid_messages: &["J2/2", "J2/3", "J2/4", "J2/5", "J2/6"],
        spec_ref: "MIL-STD-6016 NPG 27",
    },
];
