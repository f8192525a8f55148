// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The immutable link specification database.
//!
//! Static tables describing the tactical data link standards the validator
//! checks against: Network Participation Groups, the J-series message
//! catalog, terminal and member roles, platform types, and the Link-22
//! enumerations. All records are `'static`; the id-keyed lookup maps are
//! built once on first use and shared process-wide, so concurrent analyses
//! never contend.
//!
//! # Examples
//!
//! ```
//! use tdl_core::spec_db;
//!
//! assert!(spec_db::is_npg_id("NPG_7"));
//! let msg = spec_db::jmessage("J3/2").unwrap();
//! assert!(msg.valid_npgs.contains(&"NPG_7"));
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

mod jmessages;
mod npgs;
mod tables;

/// A Network Participation Group: one logical channel of a Link-16 network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Npg {
    /// Stable id as written in source (`NPG_7`).
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// The group number.
    pub number: u32,
    /// What the group carries.
    pub description: &'static str,
    /// Ids of the J-messages valid on this group.
    pub valid_messages: &'static [&'static str],
    /// Reference into the link specification.
    pub spec_ref: &'static str,
}

/// A J-series message format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JMessage {
    /// Stable id as written in source (`J3/2`).
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Functional area grouping.
    pub functional_area: &'static str,
    /// What the message carries.
    pub description: &'static str,
    /// Principal field names.
    pub fields: &'static [&'static str],
    /// Ids of the NPGs this message is valid on.
    pub valid_npgs: &'static [&'static str],
    /// Reference into the link specification.
    pub spec_ref: &'static str,
}

/// A participant role (Link-16 terminal or Link-22 member).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    /// Stable id as written in source.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// What the role entails.
    pub description: &'static str,
    /// Reference into the link specification.
    pub spec_ref: &'static str,
}

/// A platform type a terminal or member may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformType {
    /// Stable id as written in source.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// What the platform is.
    pub description: &'static str,
}

static NPG_BY_ID: LazyLock<HashMap<&'static str, &'static Npg>> =
    LazyLock::new(|| npgs::NPGS.iter().map(|npg| (npg.id, npg)).collect());

static JMESSAGE_BY_ID: LazyLock<HashMap<&'static str, &'static JMessage>> =
    LazyLock::new(|| jmessages::JMESSAGES.iter().map(|msg| (msg.id, msg)).collect());

static LINK16_ROLE_BY_ID: LazyLock<HashMap<&'static str, &'static Role>> =
    LazyLock::new(|| tables::LINK16_ROLES.iter().map(|role| (role.id, role)).collect());

static LINK22_ROLE_BY_ID: LazyLock<HashMap<&'static str, &'static Role>> =
    LazyLock::new(|| tables::LINK22_ROLES.iter().map(|role| (role.id, role)).collect());

static PLATFORM_TYPE_BY_ID: LazyLock<HashMap<&'static str, &'static PlatformType>> =
    LazyLock::new(|| {
        tables::PLATFORM_TYPES
            .iter()
            .map(|platform| (platform.id, platform))
            .collect()
    });

/// All NPG records, in group-number order.
#[must_use]
pub fn npgs() -> &'static [Npg] {
    npgs::NPGS
}

/// Looks up an NPG by id.
#[must_use]
pub fn npg(id: &str) -> Option<&'static Npg> {
    NPG_BY_ID.get(id).copied()
}

/// O(1) membership test for NPG ids.
#[must_use]
pub fn is_npg_id(id: &str) -> bool {
    NPG_BY_ID.contains_key(id)
}

/// All J-message records, in catalog order.
#[must_use]
pub fn jmessages() -> &'static [JMessage] {
    jmessages::JMESSAGES
}

/// Looks up a J-message by id (`J3/2`).
#[must_use]
pub fn jmessage(id: &str) -> Option<&'static JMessage> {
    JMESSAGE_BY_ID.get(id).copied()
}

/// O(1) membership test for J-message ids.
#[must_use]
pub fn is_jmessage_id(id: &str) -> bool {
    JMESSAGE_BY_ID.contains_key(id)
}

/// All Link-16 terminal roles.
#[must_use]
pub fn link16_roles() -> &'static [Role] {
    tables::LINK16_ROLES
}

/// O(1) membership test for Link-16 role ids.
#[must_use]
pub fn is_link16_role_id(id: &str) -> bool {
    LINK16_ROLE_BY_ID.contains_key(id)
}

/// All Link-22 member roles.
#[must_use]
pub fn link22_roles() -> &'static [Role] {
    tables::LINK22_ROLES
}

/// O(1) membership test for Link-22 role ids.
#[must_use]
pub fn is_link22_role_id(id: &str) -> bool {
    LINK22_ROLE_BY_ID.contains_key(id)
}

/// All platform-type records.
#[must_use]
pub fn platform_types() -> &'static [PlatformType] {
    tables::PLATFORM_TYPES
}

/// Looks up a platform type by id.
#[must_use]
pub fn platform_type(id: &str) -> Option<&'static PlatformType> {
    PLATFORM_TYPE_BY_ID.get(id).copied()
}

/// O(1) membership test for platform-type ids.
#[must_use]
pub fn is_platform_type_id(id: &str) -> bool {
    PLATFORM_TYPE_BY_ID.contains_key(id)
}

/// The classification levels, ascending.
#[must_use]
pub fn classifications() -> &'static [&'static str] {
    tables::CLASSIFICATIONS
}

/// O(1) membership test for classification ids.
#[must_use]
pub fn is_classification_id(id: &str) -> bool {
    matches!(id, "UNCLASSIFIED" | "CONFIDENTIAL" | "SECRET" | "TOP_SECRET")
}

/// The Link-22 operating modes.
#[must_use]
pub fn operating_modes() -> &'static [&'static str] {
    tables::OPERATING_MODES
}

/// O(1) membership test for operating-mode ids.
#[must_use]
pub fn is_operating_mode_id(id: &str) -> bool {
    matches!(id, "NetSlotted" | "Contention" | "Hybrid")
}

/// The Link-22 data rates.
#[must_use]
pub fn data_rates() -> &'static [&'static str] {
    tables::DATA_RATES
}

/// O(1) membership test for data-rate ids.
#[must_use]
pub fn is_data_rate_id(id: &str) -> bool {
    matches!(id, "Low" | "Medium" | "High")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn npg_lookup_and_membership() {
        assert!(is_npg_id("NPG_A"));
        assert!(is_npg_id("NPG_B"));
        for n in 2..=27 {
            assert!(is_npg_id(&format!("NPG_{n}")), "NPG_{n} missing");
        }
        assert!(!is_npg_id("NPG_28"));
        assert!(!is_npg_id("NPG_1"));

        let surveillance = npg("NPG_7").unwrap();
        assert_eq!(surveillance.number, 7);
        assert!(surveillance.valid_messages.contains(&"J3/2"));
    }

    #[test]
    fn npg_ids_match_numbers() {
        for record in npgs() {
            if let Some(suffix) = record.id.strip_prefix("NPG_") {
                if let Ok(number) = suffix.parse::<u32>() {
                    assert_eq!(record.number, number, "{}", record.id);
                }
            }
        }
    }

    #[test]
    fn jmessage_lookup() {
        let air_track = jmessage("J3/2").unwrap();
        assert_eq!(air_track.name, "Air Track");
        assert_eq!(air_track.valid_npgs, &["NPG_7", "NPG_9"]);
        assert!(is_jmessage_id("J0/0"));
        assert!(!is_jmessage_id("J99/9"));
    }

    #[test]
    fn valid_npg_references_resolve() {
        for msg in jmessages() {
            for id in msg.valid_npgs {
                assert!(is_npg_id(id), "{}: dangling NPG id {id}", msg.id);
            }
        }
    }

    #[test]
    fn valid_message_references_resolve() {
        for record in npgs() {
            for id in record.valid_messages {
                assert!(is_jmessage_id(id), "{}: dangling message id {id}", record.id);
            }
        }
    }

    #[test]
    fn npg_and_message_tables_are_mutually_consistent() {
        for msg in jmessages() {
            for npg_id in msg.valid_npgs {
                let record = npg(npg_id).unwrap();
                assert!(
                    record.valid_messages.contains(&msg.id),
                    "{} lists {} but not vice versa",
                    msg.id,
                    npg_id
                );
            }
        }
    }

    #[test]
    fn role_tables() {
        assert!(is_link16_role_id("NetControlStation"));
        assert!(is_link16_role_id("ForwardTell"));
        assert!(!is_link16_role_id("Controller"));

        assert!(is_link22_role_id("Controller"));
        assert!(is_link22_role_id("Participant"));
        assert!(!is_link22_role_id("Relay"));

        assert_eq!(link16_roles().len(), 4);
        assert_eq!(link22_roles().len(), 2);
    }

    #[test]
    fn enum_tables() {
        assert!(is_classification_id("SECRET"));
        assert!(!is_classification_id("secret"));
        assert_eq!(classifications().len(), 4);

        assert!(is_operating_mode_id("NetSlotted"));
        assert!(!is_operating_mode_id("Slotted"));
        assert_eq!(operating_modes().len(), 3);

        assert!(is_data_rate_id("High"));
        assert!(!is_data_rate_id("Turbo"));
        assert_eq!(data_rates().len(), 3);
    }

    #[test]
    fn platform_types_resolve() {
        assert!(is_platform_type_id("fighter"));
        assert!(is_platform_type_id("awacs"));
        assert!(!is_platform_type_id("zeppelin"));
        assert_eq!(platform_type("submarine").unwrap().name, "Submarine");
    }
}
