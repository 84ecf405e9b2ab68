use strum::{AsRefStr, Display, EnumString};

/// Role labels carried in the `roles` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
pub enum Role {
    Admin,
    #[strum(serialize = "HR")]
    Hr,
    Employee,
}

/// Roles allowed on the employee and project endpoints.
pub const STAFF_ROLES: [Role; 2] = [Role::Hr, Role::Admin];
