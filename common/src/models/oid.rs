// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Object identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ModelError;

/// An SNMP object identifier: an ordered sequence of non-negative arcs.
///
/// Renders as dot-joined decimal (`1.3.6.1.2.1`); the empty OID renders as
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Oid(Vec<u64>);

impl Oid {
    pub fn new(arcs: impl IntoIterator<Item = u64>) -> Self {
        Self(arcs.into_iter().collect())
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Parses dotted decimal text. A single leading dot is accepted
    /// (`.1.3.6.1`) and empty text yields the empty OID.
    ///
    /// # Examples
    /// ```
    /// use netframe_common::models::oid::Oid;
    ///
    /// let oid = Oid::parse(".1.3.6.1.2.1").unwrap();
    /// assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1]);
    /// assert!(Oid::parse("1.3.x").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ModelError> {
        let trimmed = input.trim();
        let body = trimmed.strip_prefix('.').unwrap_or(trimmed);
        if body.is_empty() {
            return Ok(Self::empty());
        }

        body.split('.')
            .map(|arc| {
                arc.parse::<u64>().map_err(|_| ModelError::InvalidOidArc {
                    input: input.to_string(),
                    arc: arc.to_string(),
                })
            })
            .collect::<Result<Vec<u64>, _>>()
            .map(Self)
    }

    pub fn arcs(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when `self` begins with every arc of `prefix`. Every OID starts
    /// with itself and with the empty OID.
    pub fn starts_with(&self, prefix: &Oid) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut arcs = self.0.iter();
        if let Some(first) = arcs.next() {
            write!(f, "{first}")?;
            for arc in arcs {
                write!(f, ".{arc}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Oid {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<u64>> for Oid {
    fn from(arcs: Vec<u64>) -> Self {
        Self(arcs)
    }
}

impl From<&[u64]> for Oid {
    fn from(arcs: &[u64]) -> Self {
        Self(arcs.to_vec())
    }
}
