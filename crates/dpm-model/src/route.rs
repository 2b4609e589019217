//! Named application routes.
//!
//! [`RouteId`] names a destination independently of its parameters;
//! [`Route`] is a concrete, parsed destination (e.g. a specific study).

use std::fmt;

use crate::error::ModelError;

// =============================================================================
// ROUTE ID
// =============================================================================

/// Identifier of a navigable destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteId {
    /// Sign-in page; never gated
    Login,
    /// Pipeline overview (the default landing route)
    Dashboard,
    /// Study list
    Studies,
    /// Detail page of one study
    StudyDetails,
    /// Image viewer
    Viewer,
    /// Generated reports
    Reports,
    /// User management
    Users,
    /// Audit log listing
    AuditLogs,
    /// System settings
    Settings,
}

impl RouteId {
    /// Path pattern as registered with the router.
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Studies => "/studies",
            Self::StudyDetails => "/studies/:id",
            Self::Viewer => "/viewer",
            Self::Reports => "/reports",
            Self::Users => "/users",
            Self::AuditLogs => "/audit",
            Self::Settings => "/settings",
        }
    }

    /// All routes in registration order.
    pub const fn all() -> &'static [RouteId] {
        &[
            Self::Login,
            Self::Dashboard,
            Self::Studies,
            Self::StudyDetails,
            Self::Viewer,
            Self::Reports,
            Self::Users,
            Self::AuditLogs,
            Self::Settings,
        ]
    }

    /// Concrete route for ids without parameters.
    pub fn route(self) -> Option<Route> {
        match self {
            Self::StudyDetails => None,
            other => Some(Route::Static(other)),
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

// =============================================================================
// ROUTE
// =============================================================================

/// A parsed destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Any route without path parameters
    Static(RouteId),
    /// `/studies/:id`
    StudyDetails {
        /// Study identifier from the path
        id: String,
    },
}

impl Route {
    pub fn id(&self) -> RouteId {
        match self {
            Self::Static(id) => *id,
            Self::StudyDetails { .. } => RouteId::StudyDetails,
        }
    }

    /// Path as it appears in the address bar.
    pub fn path(&self) -> String {
        match self {
            Self::Static(id) => id.pattern().to_string(),
            Self::StudyDetails { id } => format!("/studies/{id}"),
        }
    }

    /// Parse an address-bar path.
    ///
    /// Query strings, fragments and a single trailing slash are ignored.
    /// The root path `/` is not a route of its own; callers treat it as a
    /// redirect.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownRoute`] when no route matches.
    pub fn parse(path: &str) -> crate::Result<Self> {
        let unknown = || ModelError::UnknownRoute {
            path: path.to_string(),
        };
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let bare = if bare.len() > 1 {
            bare.strip_suffix('/').unwrap_or(bare)
        } else {
            bare
        };

        let mut segments = bare.strip_prefix('/').ok_or_else(unknown)?.split('/');
        let first = segments.next().unwrap_or_default();
        let second = segments.next();
        if segments.next().is_some() {
            return Err(unknown());
        }

        let id = match (first, second) {
            ("studies", Some(id)) if !id.is_empty() => {
                return Ok(Self::StudyDetails { id: id.to_string() });
            }
            (_, Some(_)) => return Err(unknown()),
            ("login", None) => RouteId::Login,
            ("dashboard", None) => RouteId::Dashboard,
            ("studies", None) => RouteId::Studies,
            ("viewer", None) => RouteId::Viewer,
            ("reports", None) => RouteId::Reports,
            ("users", None) => RouteId::Users,
            ("audit", None) => RouteId::AuditLogs,
            ("settings", None) => RouteId::Settings,
            _ => return Err(unknown()),
        };
        Ok(Self::Static(id))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
