// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Host Model
//!
//! This module defines the [`Host`] aggregate: one pollable device together
//! with everything needed to talk to it.
//!
//! ## Key Concepts
//! * **Priority lists**: `communities` and `parameters` are ordered, first is
//!   preferred. The control plane expresses fallback by reordering them.
//! * **Live vs. snapshot**: a live `Host` is owned and edited by the control
//!   plane. A poll attempt never reads it directly; it works on
//!   [`Host::snapshot`], which owns its data and commits to the preferred
//!   entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::community::Community;
use super::parameter::ObjectIdentityParameter;
use crate::config::Config;
use crate::utils::fmt::{Quoted, list, maybe, maybe_list};

/// A pollable device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    pub id: u64,

    pub hostname: String,

    /// Credentials in priority order. May be empty.
    #[serde(default)]
    pub communities: Vec<Community>,

    /// OID ranges in priority order. `None` and `Some(vec![])` are both legal
    /// and are rendered differently.
    #[serde(default)]
    pub parameters: Option<Vec<ObjectIdentityParameter>>,

    #[serde(default)]
    pub config: Option<Config>,
}

impl Host {
    /// Creates a host with no credentials, no ranges and no config.
    pub fn new(id: u64, hostname: impl Into<String>) -> Self {
        Self {
            id,
            hostname: hostname.into(),
            communities: Vec::new(),
            parameters: None,
            config: None,
        }
    }

    pub fn with_community(mut self, community: Community) -> Self {
        self.communities.push(community);
        self
    }

    pub fn with_communities(mut self, communities: impl IntoIterator<Item = Community>) -> Self {
        self.communities.extend(communities);
        self
    }

    pub fn with_parameters(
        mut self,
        parameters: impl IntoIterator<Item = ObjectIdentityParameter>,
    ) -> Self {
        self.parameters = Some(parameters.into_iter().collect());
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Produces the single-choice copy handed to one poll attempt.
    ///
    /// * `id`, `hostname` and `config` are copied as-is.
    /// * `communities` keeps only the first entry, or stays empty.
    /// * `parameters` becomes `Some([first])` when there is a first entry and
    ///   `None` otherwise, so a present-but-empty list collapses to `None`.
    ///
    /// The result shares nothing with `self`; later edits to the live host are
    /// never visible through it.
    pub fn snapshot(&self) -> Host {
        Host {
            id: self.id,
            hostname: self.hostname.clone(),
            communities: self.communities.first().cloned().into_iter().collect(),
            parameters: self
                .parameters
                .as_ref()
                .and_then(|parameters| parameters.first())
                .map(|parameter| vec![parameter.clone()]),
            config: self.config,
        }
    }

    pub fn preferred_community(&self) -> Option<&Community> {
        self.communities.first()
    }

    pub fn preferred_parameter(&self) -> Option<&ObjectIdentityParameter> {
        self.parameters.as_ref()?.first()
    }

    /// Moves the preferred community to the back of the list so the next
    /// snapshot commits to the next candidate.
    ///
    /// Returns `false` when there is nothing to rotate.
    pub fn rotate_communities(&mut self) -> bool {
        if self.communities.len() < 2 {
            return false;
        }
        self.communities.rotate_left(1);
        true
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Host(id={}, hostname={}, communities={}, parameters={}, config={})",
            self.id,
            Quoted(&self.hostname),
            list(&self.communities),
            maybe_list(&self.parameters),
            maybe(&self.config)
        )
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
