//! User identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a user record.
///
/// Assigned by the store on creation; clients never choose it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// The identifier handed out when the store is empty.
    pub const FIRST: UserId = UserId(1);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    /// The identifier after this one, or `None` at `i32::MAX`.
    pub fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<UserId> for i32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = i32::from_str(s.trim())
            .map_err(|e| DomainError::invalid_id(format!("UserId: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_integers() {
        assert_eq!("42".parse::<UserId>().unwrap(), UserId::new(42));
        assert_eq!("-3".parse::<UserId>().unwrap(), UserId::new(-3));
    }

    #[test]
    fn rejects_non_integers() {
        assert!(matches!("abc".parse::<UserId>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("1.5".parse::<UserId>(), Err(DomainError::InvalidId(_))));
        assert!("99999999999".parse::<UserId>().is_err());
    }

    #[test]
    fn successor_stops_at_max() {
        assert_eq!(UserId::new(2).successor(), Some(UserId::new(3)));
        assert_eq!(UserId::new(i32::MAX).successor(), None);
    }

    #[test]
    fn serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&UserId::new(7)).unwrap(), "7");
    }
}
