use crate::Role;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub email: Option<String>,
}

/// The part of the user's profile loaded with the session.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionProfile {
    pub id: String,
    pub nombre1: String,
    pub apellido1: String,
    pub rol: Role,
}

/// Snapshot of the authentication state, as reported by the identity provider.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: Option<SessionUser>,
    pub profile: Option<SessionProfile>,
    pub loading: bool,
}

impl Session {
    /// A session that has not been resolved yet.
    pub fn loading() -> Self {
        Self {
            user: None,
            profile: None,
            loading: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            profile: None,
            loading: false,
        }
    }

    pub fn signed_in(user: SessionUser, profile: Option<SessionProfile>) -> Self {
        Self {
            user: Some(user),
            profile,
            loading: false,
        }
    }

    /// A signed out session never keeps a stale profile.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.profile = None;
        self.loading = false;
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref()?;
        self.profile.as_ref().map(|profile| profile.rol)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// The session is still being resolved, nothing should be rendered yet.
    Loading,
    Redirect(String),
    Allow,
}

/// Decides access to routes that require a signed in user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    pub redirect_path: String,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self {
            redirect_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

impl RouteGuard {
    pub fn new(redirect_path: impl Into<String>) -> Self {
        Self {
            redirect_path: redirect_path.into(),
        }
    }

    pub fn decide(&self, session: &Session) -> RouteDecision {
        if session.loading {
            return RouteDecision::Loading;
        }
        match session.user {
            Some(_) => RouteDecision::Allow,
            None => RouteDecision::Redirect(self.redirect_path.clone()),
        }
    }
}
