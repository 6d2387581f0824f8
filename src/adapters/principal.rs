//! Static principal resolver.
//!
//! Resolves uids from a fixed table (normally the `principals` section of
//! [`AdapterConfig`]).  Unknown uids resolve to `None`, which leaves the
//! creator name of a provisioned network unset.

use std::collections::BTreeMap;

use log::debug;

use crate::app::ports::PrincipalResolver;
use crate::config::AdapterConfig;

#[derive(Debug, Clone, Default)]
pub struct StaticPrincipalResolver {
    names: BTreeMap<u32, String>,
}

impl StaticPrincipalResolver {
    pub fn new(names: BTreeMap<u32, String>) -> Self {
        Self { names }
    }

    pub fn from_config(config: &AdapterConfig) -> Self {
        Self::new(config.principals.clone())
    }

    #[must_use]
    pub fn with(mut self, uid: u32, name: impl Into<String>) -> Self {
        self.names.insert(uid, name.into());
        self
    }
}

impl PrincipalResolver for StaticPrincipalResolver {
    fn name_for_uid(&self, uid: u32) -> Option<String> {
        let name = self.names.get(&uid).cloned();
        if name.is_none() {
            debug!("no principal name for uid {}", uid);
        }
        name
    }
}
