//! Data model for the DICOM pipeline monitor.
//!
//! Plain values shared by the state stores (`dpm-state`) and the
//! navigation logic (`dpm-nav`). Nothing here performs I/O.

pub mod error;
pub mod menu;
pub mod role;
pub mod route;
pub mod session;
pub mod theme;

pub use error::{ModelError, Result};
pub use menu::{Icon, MenuItem};
pub use role::{LoginRequest, Role, User};
pub use route::{Route, RouteId};
pub use session::{PersistedSession, Session};
pub use theme::Theme;
