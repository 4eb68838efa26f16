// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

mod polling;

pub mod utils {
    use netframe_common::config::Config;
    use netframe_common::models::community::Community;
    use netframe_common::models::host::Host;
    use netframe_common::models::oid::Oid;
    use netframe_common::models::parameter::ObjectIdentityParameter;

    /// A host whose every list entry is tagged with `generation`, so a reader
    /// can tell whether all of its fields came from the same edit.
    pub fn tagged_host(id: u64, generation: u64) -> Host {
        Host::new(id, format!("host-{id}"))
            .with_communities([
                Community::v2c(format!("gen-{generation}")),
                Community::v2c(format!("gen-{generation}-fallback")),
            ])
            .with_parameters([
                ObjectIdentityParameter::new(
                    Some(Oid::new([1, 3, 6, 1])),
                    Some(Oid::new([1, 3, 6, 1, generation])),
                ),
                ObjectIdentityParameter::new(None, None),
            ])
            .with_config(Config::default().with_retries(generation))
    }

    /// Returns the generation a snapshot was taken at, or `None` when its
    /// fields disagree.
    pub fn snapshot_generation(snapshot: &Host) -> Option<u64> {
        let [community] = snapshot.communities.as_slice() else {
            return None;
        };
        let generation: u64 = community.string.strip_prefix("gen-")?.parse().ok()?;

        let [parameter] = snapshot.parameters.as_deref()? else {
            return None;
        };
        let end = parameter.end.as_ref()?;
        let config = snapshot.config?;

        (end.arcs().last() == Some(&generation) && config.retries == generation)
            .then_some(generation)
    }
}
