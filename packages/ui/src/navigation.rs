//! Where the auth flow sends the user next.

use std::fmt;

/// One-shot notice carried in the `/auth` query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthNotice {
    #[default]
    None,
    SignedOut,
    Unauthorized,
}

impl From<&str> for AuthNotice {
    fn from(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        for pair in query.split('&') {
            match pair.split_once('=') {
                Some(("signout", "true")) => return Self::SignedOut,
                Some(("unauthorized", "true")) => return Self::Unauthorized,
                _ => {}
            }
        }
        Self::None
    }
}

impl fmt::Display for AuthNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::SignedOut => f.write_str("signout=true"),
            Self::Unauthorized => f.write_str("unauthorized=true"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Auth(AuthNotice),
    Secret,
}

impl Destination {
    pub fn path(&self) -> String {
        match self {
            Self::Secret => "/secret".to_string(),
            Self::Auth(AuthNotice::None) => "/auth".to_string(),
            Self::Auth(notice) => format!("/auth?{notice}"),
        }
    }
}

/// Router capability handed to the submit flow.
pub trait Navigate {
    fn navigate(&self, to: Destination);
}
