//! System identity: the UUID that seeds generation, plus naming.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SystemError;

/// Identity of a generated system
///
/// The UUID is both the stable identifier and the RNG seed source: the same
/// id always regenerates the same system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetadata {
    pub id: Uuid,

    /// Optional proper name; most systems only have a `catalog_name()`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SystemMetadata {
    pub fn with_id(id: Uuid) -> Self {
        Self { id, name: None }
    }

    /// Create metadata with a random (v4) UUID
    pub fn new_random() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Create metadata whose RNG seed is exactly `seed`
    ///
    /// # Example
    /// ```
    /// use star_system::SystemMetadata;
    ///
    /// assert_eq!(SystemMetadata::from_seed(42).seed(), 42);
    /// ```
    pub fn from_seed(seed: u64) -> Self {
        Self::with_id(Uuid::from_u64_pair(seed, 0))
    }

    /// Deterministic v5 UUID derived from a human-readable seed name
    ///
    /// Does not set the display name; chain `with_name()` for that.
    pub fn from_seed_name(seed_name: &str) -> Self {
        Self::with_id(Uuid::new_v5(&Uuid::NAMESPACE_OID, seed_name.as_bytes()))
    }

    /// Parse a UUID string (hyphenated, simple or URN form)
    pub fn parse_id(id: &str) -> Result<Self, SystemError> {
        Ok(Self::with_id(Uuid::parse_str(id.trim())?))
    }

    /// Derive a u64 seed from the first 8 bytes of the UUID
    pub fn seed(&self) -> u64 {
        self.id.as_u64_pair().0
    }

    /// Catalog number in `0..=9999`, used in planet names
    ///
    /// Derived from bytes 2-3 of the id, so it always agrees with
    /// `catalog_name()`.
    pub fn system_number(&self) -> u32 {
        let bytes = self.id.as_bytes();
        u32::from(u16::from_le_bytes([bytes[2], bytes[3]]) % 10000)
    }

    /// Short catalog designation, e.g. "KV-4729"
    ///
    /// Two uppercase letters and the system number; 26² × 10000 combinations.
    ///
    /// # Example
    /// ```
    /// use star_system::SystemMetadata;
    ///
    /// let meta = SystemMetadata::from_seed_name("test-system-42");
    /// let name = meta.catalog_name();
    /// assert_eq!(name.len(), 7);
    /// assert!(name.ends_with(&format!("{:04}", meta.system_number())));
    /// ```
    pub fn catalog_name(&self) -> String {
        let bytes = self.id.as_bytes();
        let prefix1 = (bytes[0] % 26 + b'A') as char;
        let prefix2 = (bytes[1] % 26 + b'A') as char;
        format!("{}{}-{:04}", prefix1, prefix2, self.system_number())
    }

    /// Proper name if set, otherwise the catalog name
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.catalog_name())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
