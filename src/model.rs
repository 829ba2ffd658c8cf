use serde::Deserialize;

// --- Data Structures ---

/// One selectable institution from the public directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub college_id: u64,
    pub college_name: String,
}

/// Which portal the login form is serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    pub fn portal_tag(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT PORTAL",
            Role::Admin => "ADMINISTRATION PORTAL",
        }
    }
}

/// The institution picker value. Exactly one variant holds at any time;
/// `NotListed` is the reserved sentinel routing to the registration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unset,
    College(u64),
    NotListed,
}

impl Selection {
    pub fn is_concrete(&self) -> bool {
        matches!(self, Selection::College(_))
    }
}
