use serde::{Deserialize, Serialize};

use crate::role::RoleId;

/// Entity to which roles can be directly assigned.
pub trait RoleHolder {
    /// Returns directly assigned roles in assignment order.
    fn assigned_roles(&self) -> &[RoleId];
}

/// Ordered, duplicate-free list of directly assigned roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignments(Vec<RoleId>);

impl RoleAssignments {
    /// Appends a role, returning `false` when it was already assigned.
    pub fn assign(&mut self, role_id: RoleId) -> bool {
        if self.0.contains(&role_id) {
            return false;
        }

        self.0.push(role_id);
        true
    }

    /// Removes a role, returning `false` when it was not assigned.
    pub fn unassign(&mut self, role_id: RoleId) -> bool {
        let len_before = self.0.len();
        self.0.retain(|assigned| assigned != &role_id);
        self.0.len() != len_before
    }

    /// Returns the assigned roles in assignment order.
    #[must_use]
    pub fn as_slice(&self) -> &[RoleId] {
        self.0.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::RoleAssignments;
    use crate::role::RoleId;

    #[test]
    fn assignments_keep_order_and_skip_duplicates() {
        let mut assignments = RoleAssignments::default();

        assert!(assignments.assign(RoleId::new(3)));
        assert!(assignments.assign(RoleId::new(1)));
        assert!(!assignments.assign(RoleId::new(3)));

        assert_eq!(assignments.as_slice(), &[RoleId::new(3), RoleId::new(1)]);
    }

    #[test]
    fn unassign_reports_whether_anything_changed() {
        let mut assignments = RoleAssignments::default();
        assignments.assign(RoleId::new(1));

        assert!(assignments.unassign(RoleId::new(1)));
        assert!(!assignments.unassign(RoleId::new(1)));
        assert!(assignments.as_slice().is_empty());
    }
}
