pub mod actor;
pub mod decision;
pub mod grant;
pub mod permission;
pub mod policy;
pub mod resource;
pub mod result;
pub mod role;
pub mod traits;
pub mod user;

pub use self::permission::{
    Permission,
    Permissions,
};
pub use self::role::{
    Role,
    Roles,
};
