//! Permissions bitflags for dashboard access control

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Dashboard permission flags
    ///
    /// Serialized as a decimal string in JSON for JavaScript safety.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u64 {
        /// Browse campaign lists and calendar views
        const VIEW_CAMPAIGNS   = 1 << 0;
        /// Create and edit campaign records
        const EDIT_CAMPAIGNS   = 1 << 1;
        /// Change status and delete campaigns owned by others
        const MANAGE_CAMPAIGNS = 1 << 2;
        /// React to campaigns
        const ADD_REACTIONS    = 1 << 3;
        /// Upload cover images and materials
        const UPLOAD_FILES     = 1 << 4;
        /// Bypass all permission checks
        const ADMINISTRATOR    = 1 << 5;

        /// Baseline permissions every signed-in user gets
        const DEFAULT = Self::VIEW_CAMPAIGNS.bits() | Self::ADD_REACTIONS.bits();
    }
}

impl Permissions {
    /// Check if the permission set contains a required permission
    ///
    /// Administrators bypass all permission checks.
    #[inline]
    pub fn has(&self, permission: Permissions) -> bool {
        if self.contains(Permissions::ADMINISTRATOR) {
            return true;
        }
        self.contains(permission)
    }

    /// Check if the permission set has all of the given permissions
    #[inline]
    pub fn has_all(&self, permissions: Permissions) -> bool {
        if self.contains(Permissions::ADMINISTRATOR) {
            return true;
        }
        self.contains(permissions)
    }

    /// Parse from string representation (decimal number)
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        s.parse::<u64>().map(Permissions::from_bits_truncate)
    }
}

impl Serialize for Permissions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.bits().to_string())
    }
}

impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Permissions::parse(&s).map_err(serde::de::Error::custom)
    }
}
