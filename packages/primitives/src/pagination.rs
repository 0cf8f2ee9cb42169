use derive_more::Constructor;
use serde::Deserialize;

/// Offset and page size used when listing records.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq, Constructor)]
pub struct Pagination {
    /// Number of records to skip.
    pub offset: u32,
    /// Maximum number of records returned.
    pub limit: u32,
}

impl Pagination {
    #[must_use]
    pub fn new_with_options(offset_option: Option<u32>, limit_option: Option<u32>) -> Self {
        let offset = offset_option.unwrap_or_else(Pagination::default_offset);
        let limit = limit_option.unwrap_or_else(Pagination::default_limit);

        Self { offset, limit }
    }

    #[must_use]
    pub fn default_offset() -> u32 {
        0
    }

    #[must_use]
    pub fn default_limit() -> u32 {
        20
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: Self::default_offset(),
            limit: Self::default_limit(),
        }
    }
}
