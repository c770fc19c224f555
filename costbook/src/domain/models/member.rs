use serde::{Deserialize, Serialize};

use super::MemberId;

/// A person who can log hours or incur costs on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    /// Must match a [`super::RoleCost::role`] for the member's hours to be rated.
    pub role: String,
    #[serde(default)]
    pub initials: String,
}

impl TeamMember {
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>, role: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            initials: initials_of(&name),
            name,
            role: role.into(),
        }
    }
}

/// Look up a member by id.
pub fn find_member<'a>(members: &'a [TeamMember], id: &MemberId) -> Option<&'a TeamMember> {
    members.iter().find(|m| &m.id == id)
}

fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_are_derived_from_name() {
        assert_eq!(TeamMember::new("m1", "Sarah Chen", "Developer").initials, "SC");
        assert_eq!(TeamMember::new("m2", "emily  davis", "Designer").initials, "ED");
        assert_eq!(TeamMember::new("m3", "", "Designer").initials, "");
    }

    #[test]
    fn find_member_by_id() {
        let members = vec![
            TeamMember::new("member-1", "Sarah Chen", "Senior Developer"),
            TeamMember::new("member-2", "Alex Johnson", "Designer"),
        ];

        let found = find_member(&members, &MemberId::from("member-2")).unwrap();
        assert_eq!(found.name, "Alex Johnson");
        assert!(find_member(&members, &MemberId::from("member-9")).is_none());
    }
}
