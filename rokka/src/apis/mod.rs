//! The API modules composed into [`Rokka`](crate::Rokka).

use crate::ModuleFn;

pub mod memberships;
pub mod operations;
pub mod organizations;
pub mod sourceimages;
pub mod stacks;
pub mod users;

/// Every module [`compose`](crate::compose) builds, in composition order.
pub const MODULES: &[ModuleFn] = &[
    operations::module,
    users::module,
    organizations::module,
    memberships::module,
    sourceimages::module,
    stacks::module,
];
