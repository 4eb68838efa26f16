// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Masking of credentials before they reach a log sink.
//!
//! The canonical rendering of a [`Community`](crate::models::community::Community)
//! prints the community string verbatim. Anything written through the logging
//! macros should use these helpers instead.

/// Redacts a community string while keeping it recognizable.
///
/// It preserves the first and last characters, replacing the middle with a
/// fixed number of 'X's. Strings of 4 characters or less are masked entirely.
///
/// # Examples
/// ```
/// use netframe_common::utils::redact;
///
/// assert_eq!(redact::community("public"), "pXXXXXc");
/// assert_eq!(redact::community("s3cr3t-ro"), "sXXXXXo");
/// assert_eq!(redact::community("ro"), "XXXXX");
/// ```
pub fn community(string: &str) -> String {
    let chars: Vec<char> = string.chars().collect();

    if chars.len() <= 4 {
        return "XXXXX".to_string();
    }

    format!("{}XXXXX{}", chars[0], chars[chars.len() - 1])
}

/// Redacts a hostname, keeping the first 2 and last 2 characters.
///
/// # Examples
/// ```
/// use netframe_common::utils::redact;
///
/// assert_eq!(redact::hostname("core-sw01.lab"), "coXXXXXab");
/// assert_eq!(redact::hostname("sw1"), "XXXXX");
/// ```
pub fn hostname(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let len = chars.len();

    if len <= 4 {
        return "XXXXX".to_string();
    }

    let first_two: String = chars[..2].iter().collect();
    let last_two: String = chars[len - 2..].iter().collect();

    format!("{first_two}XXXXX{last_two}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
