//! The fixed set of coached language skills.
//!
//! The store keeps skill names as plain TEXT, but every write passes
//! through [`Skill::from_str_value`], so only these four values ever
//! reach a row. Serialized names are the capitalized strings the wire
//! contract uses (`"Reading"`, `"Writing"`, `"Listening"`, `"Speaking"`).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Valid skill names.
pub const SKILL_READING: &str = "Reading";
pub const SKILL_WRITING: &str = "Writing";
pub const SKILL_LISTENING: &str = "Listening";
pub const SKILL_SPEAKING: &str = "Speaking";

/// All valid skill names, in presentation order.
pub const VALID_SKILLS: &[&str] = &[
    SKILL_READING,
    SKILL_WRITING,
    SKILL_LISTENING,
    SKILL_SPEAKING,
];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// One of the four coached skills.
///
/// Variant order is presentation order; it also drives the key order of
/// serialized level maps (`Ord` puts `Reading` first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    Reading,
    Writing,
    Listening,
    Speaking,
}

impl Skill {
    /// All skills, in presentation order.
    pub const ALL: [Skill; 4] = [
        Skill::Reading,
        Skill::Writing,
        Skill::Listening,
        Skill::Speaking,
    ];

    /// Convert from a stored or submitted string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            SKILL_READING => Ok(Self::Reading),
            SKILL_WRITING => Ok(Self::Writing),
            SKILL_LISTENING => Ok(Self::Listening),
            SKILL_SPEAKING => Ok(Self::Speaking),
            _ => Err(format!(
                "Invalid skill '{s}'. Must be one of: {}",
                VALID_SKILLS.join(", ")
            )),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reading => SKILL_READING,
            Self::Writing => SKILL_WRITING,
            Self::Listening => SKILL_LISTENING,
            Self::Speaking => SKILL_SPEAKING,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- from_str_value ---------------------------------------------------------

    #[test]
    fn skill_from_str_all_valid_names() {
        assert_eq!(Skill::from_str_value("Reading").unwrap(), Skill::Reading);
        assert_eq!(Skill::from_str_value("Writing").unwrap(), Skill::Writing);
        assert_eq!(
            Skill::from_str_value("Listening").unwrap(),
            Skill::Listening
        );
        assert_eq!(Skill::from_str_value("Speaking").unwrap(), Skill::Speaking);
    }

    #[test]
    fn skill_from_str_invalid() {
        let result = Skill::from_str_value("Grammar");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid skill"));
    }

    #[test]
    fn skill_from_str_case_sensitive() {
        assert!(Skill::from_str_value("reading").is_err());
        assert!(Skill::from_str_value("SPEAKING").is_err());
    }

    #[test]
    fn skill_from_str_empty_rejected() {
        assert!(Skill::from_str_value("").is_err());
    }

    // -- as_str -----------------------------------------------------------------

    #[test]
    fn skill_as_str_round_trip() {
        for skill in Skill::ALL {
            assert_eq!(Skill::from_str_value(skill.as_str()).unwrap(), skill);
        }
    }

    // -- Constant completeness --------------------------------------------------

    #[test]
    fn skill_list_complete() {
        assert_eq!(VALID_SKILLS.len(), 4);
        assert_eq!(Skill::ALL.len(), VALID_SKILLS.len());
        for (skill, name) in Skill::ALL.iter().zip(VALID_SKILLS) {
            assert_eq!(skill.as_str(), *name);
        }
    }

    // -- Serde names ------------------------------------------------------------

    #[test]
    fn skill_serializes_to_wire_name() {
        for skill in Skill::ALL {
            let json = serde_json::to_string(&skill).unwrap();
            assert_eq!(json, format!("\"{}\"", skill.as_str()));
        }
    }
}
