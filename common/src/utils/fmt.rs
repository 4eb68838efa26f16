// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Building blocks for the canonical `TypeName(field=value, ...)` rendering.
//!
//! Every model type renders through these helpers so the conventions stay in
//! one place:
//! * text is wrapped in single quotes,
//! * an absent value is the literal `None`,
//! * a sequence is `[a, b, ...]` and an empty one is `[]`.

use std::fmt::{self, Display, Formatter};

/// Displays the inner value wrapped in single quotes.
pub struct Quoted<T>(pub T);

impl<T: Display> Display for Quoted<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.0)
    }
}

/// Displays `None` for an absent value, the value itself otherwise.
pub struct Maybe<'a, T>(&'a Option<T>);

impl<T: Display> Display for Maybe<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("None"),
        }
    }
}

/// Like [`Maybe`], but a present value is single-quoted.
pub struct MaybeQuoted<'a, T>(&'a Option<T>);

impl<T: Display> Display for MaybeQuoted<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => Quoted(value).fmt(f),
            None => f.write_str("None"),
        }
    }
}

/// Displays a slice as `[a, b, ...]`.
pub struct List<'a, T>(&'a [T]);

impl<T: Display> Display for List<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut items = self.0.iter();
        if let Some(first) = items.next() {
            first.fmt(f)?;
            for item in items {
                write!(f, ", {item}")?;
            }
        }
        f.write_str("]")
    }
}

/// Displays an optional sequence: `None` when absent, [`List`] when present
/// (so a present-but-empty sequence is `[]`).
pub struct MaybeList<'a, T>(&'a Option<Vec<T>>);

impl<T: Display> Display for MaybeList<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(items) => List(items).fmt(f),
            None => f.write_str("None"),
        }
    }
}

pub fn maybe<T: Display>(value: &Option<T>) -> Maybe<'_, T> {
    Maybe(value)
}

pub fn maybe_quoted<T: Display>(value: &Option<T>) -> MaybeQuoted<'_, T> {
    MaybeQuoted(value)
}

pub fn list<T: Display>(items: &[T]) -> List<'_, T> {
    List(items)
}

pub fn maybe_list<T: Display>(items: &Option<Vec<T>>) -> MaybeList<'_, T> {
    MaybeList(items)
}
