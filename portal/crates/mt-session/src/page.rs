use mt_core::CoreError;

use std::str::FromStr;

use serde::Serialize;

/// Pages a session can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Profile,
    Intake,
    Visits,
    NewVisit,
    SelectRole,
    Verification,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Profile => "/profile",
            Self::Intake => "/intake",
            Self::Visits => "/visits",
            Self::NewVisit => "/visits/new",
            Self::SelectRole => "/select-role",
            Self::Verification => "/verification",
        }
    }

    /// Visit creation and listing need a verified profile.
    pub fn requires_verification(&self) -> bool {
        matches!(self, Self::Visits | Self::NewVisit)
    }

    /// Whether the page is subject to role gating at all.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Home)
    }
}

impl FromStr for Page {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let page = match s.trim().trim_end_matches('/') {
            "" | "home" => Self::Home,
            "/profile" | "profile" => Self::Profile,
            "/intake" | "intake" => Self::Intake,
            "/visits" | "visits" => Self::Visits,
            "/visits/new" | "new-visit" => Self::NewVisit,
            "/select-role" | "select-role" => Self::SelectRole,
            "/verification" | "verification" => Self::Verification,
            other => {
                return Err(CoreError::validation(
                    "page",
                    format!("Unknown page '{other}'"),
                ));
            }
        };
        Ok(page)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Where the gate sends a page load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "page")]
pub enum Destination {
    SignIn,
    SelectRole,
    Verification,
    Requested(Page),
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Self::SignIn => "/sign-in",
            Self::SelectRole => Page::SelectRole.path(),
            Self::Verification => Page::Verification.path(),
            Self::Requested(page) => page.path(),
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
