use rolegate_application::{CreateRoleInput, RoleHolderRef};
use rolegate_core::AppResult;
use tracing::info;

use crate::state::AppState;

const SEED_ACTOR: &str = "dev_seed";

const SEED_ROLES: [(&str, Option<&str>); 4] = [
    ("admin", None),
    ("protected", Some("admin")),
    ("protected.view", Some("protected")),
    ("protected.create", Some("protected")),
];

const SEED_USERS: [&str; 4] = [
    "anon_user",
    "logged_in_user",
    "admin_via_role_user",
    "admin_via_group_user",
];

const SEED_ADMIN_GROUP: &str = "admin";

/// Loads the demo role tree, users and the `admin` group.
///
/// `admin_via_role_user` holds `protected.view` directly; members of the
/// `admin` group inherit the whole `admin` subtree.
pub async fn run(state: &AppState) -> AppResult<()> {
    let admin = &state.security_admin_service;

    for (name, parent) in SEED_ROLES {
        admin
            .create_role(
                SEED_ACTOR,
                CreateRoleInput {
                    name: name.to_owned(),
                    parent: parent.map(str::to_owned),
                },
            )
            .await?;
    }

    let mut users = Vec::with_capacity(SEED_USERS.len());
    for username in SEED_USERS {
        users.push(admin.create_user(SEED_ACTOR, username).await?);
    }

    let group = admin.create_group(SEED_ACTOR, SEED_ADMIN_GROUP).await?;
    admin
        .assign_role(SEED_ACTOR, RoleHolderRef::Group(group.id()), "admin")
        .await?;

    for user in &users {
        match user.username().as_str() {
            "admin_via_role_user" => {
                admin
                    .assign_role(SEED_ACTOR, RoleHolderRef::User(user.id()), "protected.view")
                    .await?;
            }
            "admin_via_group_user" => {
                admin
                    .add_group_member(SEED_ACTOR, user.id(), group.id())
                    .await?;
            }
            _ => {}
        }
    }

    info!(
        roles = SEED_ROLES.len(),
        users = users.len(),
        "demo data seeded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use rolegate_core::AppError;
    use rolegate_domain::UserId;

    use super::run;
    use crate::api_services::build_app_state;

    async fn user_id(state: &crate::state::AppState, username: &str) -> UserId {
        let identity = state
            .user_service
            .login(username)
            .await
            .unwrap_or_else(|_| unreachable!());
        UserId::from_uuid(identity.user_id())
    }

    #[tokio::test]
    async fn seeded_users_resolve_expected_roles() {
        let state = build_app_state();
        assert!(run(&state).await.is_ok());

        let authorization = &state.authorization_service;

        let plain = user_id(&state, "logged_in_user").await;
        assert!(
            authorization
                .effective_roles(plain)
                .await
                .is_ok_and(|roles| roles.is_empty())
        );

        let via_role = user_id(&state, "admin_via_role_user").await;
        let roles = authorization
            .effective_roles(via_role)
            .await
            .unwrap_or_default();
        assert_eq!(roles.iter().collect::<Vec<_>>(), vec!["protected.view"]);

        let via_group = user_id(&state, "admin_via_group_user").await;
        let roles = authorization
            .effective_roles(via_group)
            .await
            .unwrap_or_default();
        assert_eq!(
            roles.iter().collect::<Vec<_>>(),
            vec!["admin", "protected", "protected.create", "protected.view"]
        );
    }

    #[tokio::test]
    async fn seeding_twice_conflicts() {
        let state = build_app_state();
        assert!(run(&state).await.is_ok());

        assert!(matches!(run(&state).await, Err(AppError::Conflict(_))));
    }
}
