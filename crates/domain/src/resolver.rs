//! Effective role resolution over the role hierarchy.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::group::Group;
use crate::hierarchy::{Descendants, RoleHierarchy};
use crate::holder::RoleHolder;
use crate::role::{RoleId, RoleName};
use crate::user::User;

/// Names reachable from one holder's direct roles, duplicates included.
///
/// Each directly assigned role, in assignment order, is followed by its whole
/// subtree in pre-order.
#[derive(Debug, Clone)]
pub struct HolderRoleNames<'a> {
    hierarchy: &'a RoleHierarchy,
    assigned: std::slice::Iter<'a, RoleId>,
    current: Option<Descendants<'a>>,
}

impl<'a> Iterator for HolderRoleNames<'a> {
    type Item = &'a RoleName;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(role) = self.current.as_mut().and_then(|names| names.next()) {
                return Some(role.name());
            }

            let role_id = self.assigned.next()?;
            self.current = Some(self.hierarchy.descendants_inclusive(*role_id));
        }
    }
}

/// Lazily expands a holder's direct roles through the hierarchy.
#[must_use]
pub fn effective_role_names<'a, H>(hierarchy: &'a RoleHierarchy, holder: &'a H) -> HolderRoleNames<'a>
where
    H: RoleHolder + ?Sized,
{
    HolderRoleNames {
        hierarchy,
        assigned: holder.assigned_roles().iter(),
        current: None,
    }
}

/// De-duplicated set of role names an actor controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EffectiveRoles(BTreeSet<String>);

impl EffectiveRoles {
    /// Returns whether the named role is held.
    #[must_use]
    pub fn contains(&self, role_name: &str) -> bool {
        self.0.contains(role_name.trim())
    }

    /// Iterates held role names in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the number of distinct role names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no role is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> Extend<&'a RoleName> for EffectiveRoles {
    fn extend<I: IntoIterator<Item = &'a RoleName>>(&mut self, names: I) {
        self.0
            .extend(names.into_iter().map(|name| name.as_str().to_owned()));
    }
}

impl<'a> FromIterator<&'a RoleName> for EffectiveRoles {
    fn from_iter<I: IntoIterator<Item = &'a RoleName>>(names: I) -> Self {
        let mut roles = Self::default();
        roles.extend(names);
        roles
    }
}

/// Resolves every role name a user holds directly or through its groups.
///
/// `groups` is the store's view of the user's groups; entries the user is not
/// a member of are skipped.
#[must_use]
pub fn effective_role_names_for_user<'a>(
    hierarchy: &RoleHierarchy,
    user: &User,
    groups: impl IntoIterator<Item = &'a Group>,
) -> EffectiveRoles {
    let mut roles: EffectiveRoles = effective_role_names(hierarchy, user).collect();

    for group in groups {
        if user.is_member_of(group.id()) {
            roles.extend(effective_role_names(hierarchy, group));
        }
    }

    roles
}

#[cfg(test)]
mod tests {
    use super::{EffectiveRoles, effective_role_names, effective_role_names_for_user};
    use crate::group::Group;
    use crate::hierarchy::RoleHierarchy;
    use crate::role::{RoleId, RoleName};
    use crate::user::User;

    struct Fixture {
        hierarchy: RoleHierarchy,
        admin: RoleId,
        protected: RoleId,
        view: RoleId,
        create: RoleId,
        billing_view: RoleId,
    }

    fn role(hierarchy: &mut RoleHierarchy, name: &str, parent: Option<RoleId>) -> RoleId {
        hierarchy
            .insert_role(
                RoleName::new(name).unwrap_or_else(|_| unreachable!()),
                parent,
            )
            .unwrap_or_else(|_| unreachable!())
            .id()
    }

    fn fixture() -> Fixture {
        let mut hierarchy = RoleHierarchy::new();
        let admin = role(&mut hierarchy, "admin", None);
        let protected = role(&mut hierarchy, "protected", Some(admin));
        let view = role(&mut hierarchy, "protected.view", Some(protected));
        let create = role(&mut hierarchy, "protected.create", Some(protected));
        let billing_view = role(&mut hierarchy, "billing.view", None);

        Fixture {
            hierarchy,
            admin,
            protected,
            view,
            create,
            billing_view,
        }
    }

    fn user() -> User {
        User::new("test_user").unwrap_or_else(|_| unreachable!())
    }

    fn group(name: &str) -> Group {
        Group::new(name).unwrap_or_else(|_| unreachable!())
    }

    fn names(roles: &EffectiveRoles) -> Vec<&str> {
        roles.iter().collect()
    }

    #[test]
    fn user_without_roles_or_groups_has_nothing() {
        let fixture = fixture();
        let roles = effective_role_names_for_user(&fixture.hierarchy, &user(), []);

        assert!(roles.is_empty());
    }

    #[test]
    fn leaf_role_resolves_to_itself() {
        let fixture = fixture();
        let mut user = user();
        user.add_role(fixture.view);

        let roles = effective_role_names_for_user(&fixture.hierarchy, &user, []);
        assert_eq!(names(&roles), vec!["protected.view"]);
    }

    #[test]
    fn ancestor_grant_implies_descendants() {
        let fixture = fixture();
        let mut user = user();
        user.add_role(fixture.admin);

        let roles = effective_role_names_for_user(&fixture.hierarchy, &user, []);
        assert_eq!(
            names(&roles),
            vec!["admin", "protected", "protected.create", "protected.view"]
        );
        assert!(roles.contains("protected.view"));
        assert!(!roles.contains("billing.view"));
    }

    #[test]
    fn holder_names_keep_assignment_order_and_duplicates() {
        let fixture = fixture();
        let mut user = user();
        user.add_role(fixture.view);
        user.add_role(fixture.protected);

        let listed: Vec<&str> = effective_role_names(&fixture.hierarchy, &user)
            .map(RoleName::as_str)
            .collect();
        assert_eq!(
            listed,
            vec![
                "protected.view",
                "protected",
                "protected.view",
                "protected.create",
            ]
        );
    }

    #[test]
    fn group_assignment_matches_direct_assignment() {
        let fixture = fixture();
        let mut creators = group("creators");
        creators.add_role(fixture.create);
        let mut member = user();
        member.join_group(creators.id());

        let via_group = effective_role_names_for_user(&fixture.hierarchy, &member, [&creators]);

        let mut direct = user();
        direct.add_role(fixture.create);
        let via_role = effective_role_names_for_user(&fixture.hierarchy, &direct, []);

        assert_eq!(via_group, via_role);
        assert_eq!(names(&via_group), vec!["protected.create"]);
        assert!(!via_group.contains("protected.view"));
    }

    #[test]
    fn user_set_is_union_of_user_and_group_sets() {
        let fixture = fixture();
        let mut admins = group("admins");
        admins.add_role(fixture.protected);
        let mut billing = group("billing");
        billing.add_role(fixture.billing_view);

        let mut user = user();
        user.add_role(fixture.view);
        user.join_group(admins.id());
        user.join_group(billing.id());

        let forward = effective_role_names_for_user(&fixture.hierarchy, &user, [&admins, &billing]);
        let backward =
            effective_role_names_for_user(&fixture.hierarchy, &user, [&billing, &admins]);

        let mut expected: EffectiveRoles = effective_role_names(&fixture.hierarchy, &user).collect();
        expected.extend(effective_role_names(&fixture.hierarchy, &admins));
        expected.extend(effective_role_names(&fixture.hierarchy, &billing));

        assert_eq!(forward, backward);
        assert_eq!(forward, expected);
        assert_eq!(
            names(&forward),
            vec![
                "billing.view",
                "protected",
                "protected.create",
                "protected.view",
            ]
        );
    }

    #[test]
    fn overlapping_group_does_not_change_result() {
        let fixture = fixture();
        let mut user = user();
        user.add_role(fixture.admin);
        let before = effective_role_names_for_user(&fixture.hierarchy, &user, []);

        let mut overlap = group("overlap");
        overlap.add_roles([fixture.protected, fixture.view]);
        user.join_group(overlap.id());
        let after = effective_role_names_for_user(&fixture.hierarchy, &user, [&overlap]);

        assert_eq!(before, after);
    }

    #[test]
    fn groups_without_membership_are_ignored() {
        let fixture = fixture();
        let mut stranger = group("strangers");
        stranger.add_role(fixture.admin);

        let roles = effective_role_names_for_user(&fixture.hierarchy, &user(), [&stranger]);
        assert!(roles.is_empty());
    }

    #[test]
    fn effective_roles_serialize_as_sorted_list() {
        let fixture = fixture();
        let mut user = user();
        user.add_role(fixture.protected);

        let roles = effective_role_names_for_user(&fixture.hierarchy, &user, []);
        let encoded = serde_json::to_string(&roles).unwrap_or_default();
        assert_eq!(
            encoded,
            "[\"protected\",\"protected.create\",\"protected.view\"]"
        );
    }
}
