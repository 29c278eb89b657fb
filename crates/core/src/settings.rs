//! Settings manager.

use crate::error::NotFound;
use crate::types::{SettingsPatch, SiteSettings};

/// Holder of the singleton [`SiteSettings`] record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    current: SiteSettings,
}

impl Settings {
    #[must_use]
    pub const fn new(current: SiteSettings) -> Self {
        Self { current }
    }

    /// The current record.
    #[must_use]
    pub const fn get(&self) -> &SiteSettings {
        &self.current
    }

    /// Merge supplied fields over the current record.
    pub fn update(&mut self, patch: SettingsPatch) -> &SiteSettings {
        patch.apply_to(&mut self.current);
        &self.current
    }

    /// Edit one entry of the name-server list in place.
    ///
    /// The list keeps its length; only existing slots can be edited.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `index` is past the end of the list.
    pub fn set_name_server(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<&SiteSettings, NotFound> {
        let slot = self
            .current
            .name_servers
            .get_mut(index)
            .ok_or_else(|| NotFound::new("name server", index))?;
        *slot = value.into();
        Ok(&self.current)
    }
}
