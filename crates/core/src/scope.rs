//! Installation scopes and hook kinds
//!
//! A hook is installed into exactly one of two scopes under the repository
//! hook area: `local` (this checkout only) or `shared` (reused across
//! checkouts). Discovery queries address either the available candidates
//! or the installed copies of one scope.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Installation scope for a hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// Installed for this checkout only
    #[default]
    Local,
    /// Installed for reuse across checkouts
    Shared,
}

impl Scope {
    /// All scopes, in the order they are reported to users
    pub const ALL: [Scope; 2] = [Scope::Local, Scope::Shared];

    /// Directory name of this scope under the repository hook area
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Scope::Local => "local",
            Scope::Shared => "shared",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Scope::Local),
            "shared" => Ok(Scope::Shared),
            _ => Err(Error::UnknownScope {
                value: s.to_string(),
            }),
        }
    }
}

/// Which set of hooks a discovery query addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    /// Candidate scripts found in the configured search paths
    Available,
    /// Copies installed into the given scope
    Installed(Scope),
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookKind::Available => f.write_str("available"),
            HookKind::Installed(scope) => write!(f, "installed ({scope})"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_scope_parses_from_dir_name() {
        assert_eq!("local".parse::<Scope>().unwrap(), Scope::Local);
        assert_eq!("shared".parse::<Scope>().unwrap(), Scope::Shared);
    }

    #[test]
    fn test_scope_rejects_unknown_names() {
        let err = "global".parse::<Scope>().unwrap_err();
        assert!(matches!(err, Error::UnknownScope { value } if value == "global"));
    }

    #[test]
    fn test_scope_parsing_is_case_sensitive() {
        assert!("Local".parse::<Scope>().is_err());
        assert!("SHARED".parse::<Scope>().is_err());
    }

    #[test]
    fn test_scope_round_trips_through_display() {
        for scope in Scope::ALL {
            assert_eq!(scope.to_string().parse::<Scope>().unwrap(), scope);
        }
    }

    #[test]
    fn test_default_scope_is_local() {
        assert_eq!(Scope::default(), Scope::Local);
    }

    #[test]
    fn test_hook_kind_display_names_the_scope() {
        assert_eq!(HookKind::Available.to_string(), "available");
        assert_eq!(
            HookKind::Installed(Scope::Shared).to_string(),
            "installed (shared)"
        );
    }
}
