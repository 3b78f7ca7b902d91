//! Role tree with pre-order descendant traversal.
//!
//! Roles are only ever attached to a parent that already exists and a role's
//! parent never changes afterwards, so the tree stays acyclic by construction.

use std::collections::{BTreeMap, HashMap};

use rolegate_core::{AppError, AppResult};

use crate::role::{Role, RoleId, RoleName};

#[derive(Debug, Clone, PartialEq, Eq)]
struct RoleNode {
    role: Role,
    // Ascending by id because ids are allocated monotonically.
    children: Vec<RoleId>,
}

/// Tree of roles keyed by id, with a unique name index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleHierarchy {
    nodes: BTreeMap<RoleId, RoleNode>,
    names: HashMap<RoleName, RoleId>,
    next_id: u64,
}

impl RoleHierarchy {
    /// Creates an empty hierarchy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a role under an optional existing parent and returns it.
    pub fn insert_role(&mut self, name: RoleName, parent: Option<RoleId>) -> AppResult<Role> {
        if self.names.contains_key(&name) {
            return Err(AppError::Conflict(format!("role '{name}' already exists")));
        }

        if let Some(parent_id) = parent
            && !self.nodes.contains_key(&parent_id)
        {
            return Err(AppError::NotFound(format!(
                "parent role '{parent_id}' does not exist"
            )));
        }

        self.next_id += 1;
        let id = RoleId::new(self.next_id);
        let role = Role::new(id, name.clone(), parent);

        if let Some(parent_node) = parent.and_then(|parent_id| self.nodes.get_mut(&parent_id)) {
            parent_node.children.push(id);
        }

        self.names.insert(name, id);
        self.nodes.insert(
            id,
            RoleNode {
                role: role.clone(),
                children: Vec::new(),
            },
        );

        Ok(role)
    }

    /// Returns a role by id.
    #[must_use]
    pub fn role(&self, id: RoleId) -> Option<&Role> {
        self.nodes.get(&id).map(|node| &node.role)
    }

    /// Returns a role by its unique name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Role> {
        let name = RoleName::new(name).ok()?;
        self.names.get(&name).and_then(|id| self.role(*id))
    }

    /// Returns the direct children of a role in creation order.
    #[must_use]
    pub fn children(&self, id: RoleId) -> &[RoleId] {
        self.nodes
            .get(&id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// Iterates all roles in creation order.
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.nodes.values().map(|node| &node.role)
    }

    /// Returns the number of roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the hierarchy has no roles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Yields `id` itself, then every descendant in pre-order.
    ///
    /// Each child is followed by its own subtree before the next sibling, and
    /// siblings are visited in creation order. Traversal keeps an explicit
    /// stack, so tree depth does not grow the call stack. An unknown id
    /// yields nothing.
    #[must_use]
    pub fn descendants_inclusive(&self, id: RoleId) -> Descendants<'_> {
        let stack = if self.nodes.contains_key(&id) {
            vec![id]
        } else {
            Vec::new()
        };

        Descendants {
            hierarchy: self,
            stack,
        }
    }
}

/// Lazy pre-order traversal returned by [`RoleHierarchy::descendants_inclusive`].
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    hierarchy: &'a RoleHierarchy,
    stack: Vec<RoleId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Role;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.hierarchy.nodes.get(&id)?;
        // Reversed so the first child is popped next.
        self.stack.extend(node.children.iter().rev().copied());
        Some(&node.role)
    }
}
