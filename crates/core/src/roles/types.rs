use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RoleError;

/// The viewing identity used to filter which session events are visible.
///
/// This is transient UI selection state, not an authenticated identity:
/// the user-select menu switches it freely while logged in. The
/// unauthenticated state is not a role; it is the absence of a login
/// session in the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Sees every event unfiltered.
    #[default]
    Admin,
    /// Teacher "EL"; sees the sessions they teach.
    #[serde(rename = "EL")]
    TeacherEl,
    /// Teacher "BL"; sees the sessions they teach.
    #[serde(rename = "BL")]
    TeacherBl,
    /// First-year student group; sees the sessions scheduled for it.
    NoviaYr1,
}

impl Role {
    /// Every selectable role, in the order the user-select menu lists them.
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::TeacherEl,
        Role::TeacherBl,
        Role::NoviaYr1,
    ];

    /// The wire form of the role, as it appears in event attribution.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::TeacherEl => "EL",
            Role::TeacherBl => "BL",
            Role::NoviaYr1 => "NoviaYr1",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "EL" => Ok(Role::TeacherEl),
            "BL" => Ok(Role::TeacherBl),
            "NoviaYr1" => Ok(Role::NoviaYr1),
            other => Err(RoleError::Unrecognized(other.to_string())),
        }
    }
}
