//! Configuration options for preset validation and generation.

use serde::{Deserialize, Serialize};

/// Number of non-idle values the 8-bit shared channel can carry.
pub const STATE_BUDGET: usize = 255;

/// Items an expression menu page can show.
pub const DEFAULT_PAGE_ITEM_LIMIT: usize = 8;

/// Options for preset validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Maximum items on one page.
    pub page_item_limit: usize,

    /// Report pages that no subpage chain reaches from the root.
    /// Default: true.
    pub warn_unreachable_pages: bool,

    /// Escalate warnings to errors.
    /// Default: false.
    pub warnings_as_errors: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            page_item_limit: DEFAULT_PAGE_ITEM_LIMIT,
            warn_unreachable_pages: true,
            warnings_as_errors: false,
        }
    }
}

impl ValidationOptions {
    /// Treat every finding as blocking.
    pub fn strict() -> Self {
        Self {
            warnings_as_errors: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_page_item_limit(mut self, limit: usize) -> Self {
        self.page_item_limit = limit;
        self
    }
}

/// Options controlling one generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub validation: ValidationOptions,

    /// Refuse to allocate when validation reports errors.
    /// Default: true.
    pub fail_on_validation_errors: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            validation: ValidationOptions::default(),
            fail_on_validation_errors: true,
        }
    }
}

impl GenerationOptions {
    pub fn strict() -> Self {
        Self {
            validation: ValidationOptions::strict(),
            fail_on_validation_errors: true,
        }
    }

    #[must_use]
    pub fn allow_invalid(mut self) -> Self {
        self.fail_on_validation_errors = false;
        self
    }
}
