//! Client-side state for the DICOM pipeline monitor.
//!
//! - [`session`]: who is signed in, persisted under `auth-storage`
//! - [`layout`]: sidebar, mobile drawer and theme
//! - [`storage`]: the local key-value seam both stores write through
//! - [`context`]: the stores bundled for injection into views
//!
//! All mutations run synchronously on the UI thread. Stores are plain
//! values built with `restore`, not globals.

pub mod accounts;
pub mod context;
pub mod error;
pub mod layout;
pub mod loading;
pub mod session;
pub mod storage;
pub mod subscribers;
pub mod viewer;

pub use accounts::{DemoAccount, DemoDirectory};
pub use context::AppContext;
pub use error::{SessionError, StorageError};
pub use layout::{LayoutMessage, LayoutState, LayoutStore, ResolvedLayout, Sidebar};
pub use loading::SimulatedLoad;
pub use session::SessionStore;
#[cfg(feature = "web")]
pub use storage::BrowserStore;
pub use storage::{AUTH_KEY, FileStore, KeyValueStore, MemoryStore, THEME_KEY};
pub use subscribers::{SubscriptionId, Subscribers};
pub use viewer::{ViewerRequest, ViewerStatus, ViewerTool};
