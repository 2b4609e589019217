//! Role-gated navigation for the DICOM pipeline monitor.
//!
//! One authority for role logic:
//!
//! - [`PermissionTable`]: which routes need which roles
//! - [`authorize`]: the guard decision for a session
//! - [`Router`]: path parsing plus the guard, per navigation
//! - [`visible_items`]: the menu entries a role may see, narrowed by search

pub mod guard;
pub mod menu;
pub mod permissions;
pub mod router;

pub use guard::{Access, authorize};
pub use menu::{standard_menu, visible_items};
pub use permissions::PermissionTable;
pub use router::{Navigation, Router};
