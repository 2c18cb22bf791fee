//! The four views of the info card.

use super::session::InfoError;
use std::fmt;
use std::str::FromStr;

/// Which view of the subject the card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoView {
    /// Avatar image with download links.
    Avatar,
    /// Profile banner.
    Banner,
    /// Join date, roles, id and account age.
    Info,
    /// Full role list.
    Roles,
}

impl InfoView {
    /// All views, in dropdown order.
    pub const ALL: [Self; 4] = [Self::Avatar, Self::Banner, Self::Info, Self::Roles];

    /// Dropdown label and value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Avatar => "avatar",
            Self::Banner => "banner",
            Self::Info => "info",
            Self::Roles => "roles",
        }
    }

    /// Dropdown option description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Avatar => "Avatar of the user",
            Self::Banner => "The Banner of the user",
            Self::Info => "Actual userinfo",
            Self::Roles => "Gets roles if user is a member",
        }
    }
}

impl fmt::Display for InfoView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InfoView {
    type Err = InfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| InfoError::UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_view() {
        for view in InfoView::ALL {
            assert_eq!(view.as_str().parse::<InfoView>().unwrap(), view);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            "Avatar".parse::<InfoView>(),
            Err(InfoError::UnknownView(value)) if value == "Avatar"
        ));
    }
}
