// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Polling ranges.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::oid::Oid;
use crate::utils::fmt::maybe_quoted;

/// An OID range to poll. Either bound may be open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectIdentityParameter {
    #[serde(default)]
    pub start: Option<Oid>,
    #[serde(default)]
    pub end: Option<Oid>,
}

impl ObjectIdentityParameter {
    pub fn new(start: Option<Oid>, end: Option<Oid>) -> Self {
        Self { start, end }
    }

    /// Returns `true` when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl fmt::Display for ObjectIdentityParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ObjectIdentityParameter(start={}, end={})",
            maybe_quoted(&self.start),
            maybe_quoted(&self.end)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_open_start() {
        let parameter = ObjectIdentityParameter::new(None, Some(Oid::new([1, 3, 6, 1])));
        assert_eq!(
            parameter.to_string(),
            "ObjectIdentityParameter(start=None, end='1.3.6.1')"
        );
    }

    #[test]
    fn renders_both_bounds() {
        let parameter = ObjectIdentityParameter::new(
            Some(Oid::new([1, 3, 6, 1, 2, 1, 2, 2, 1, 1, 1])),
            Some(Oid::new([1, 3, 6, 1, 2, 1, 2, 2, 1, 1, 24])),
        );
        assert_eq!(
            parameter.to_string(),
            "ObjectIdentityParameter(start='1.3.6.1.2.1.2.2.1.1.1', end='1.3.6.1.2.1.2.2.1.1.24')"
        );
    }

    #[test]
    fn renders_fully_open() {
        let parameter = ObjectIdentityParameter::default();
        assert!(parameter.is_unbounded());
        assert_eq!(parameter.to_string(), "ObjectIdentityParameter(start=None, end=None)");
    }

    #[test]
    fn empty_bound_is_present_but_blank() {
        let parameter = ObjectIdentityParameter::new(Some(Oid::empty()), None);
        assert!(!parameter.is_unbounded());
        assert_eq!(parameter.to_string(), "ObjectIdentityParameter(start='', end=None)");
    }
}
