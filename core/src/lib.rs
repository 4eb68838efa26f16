// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Poll orchestration on top of the `netframe-common` model.
//!
//! - [`store`] holds live hosts behind locks and hands out snapshots.
//! - [`plan`] turns hosts and a request into per-host [`plan::PollJob`]s.
//! - [`dispatch`] fans jobs out to a [`dispatch::PollEngine`].

pub mod dispatch;
pub mod plan;
pub mod store;
