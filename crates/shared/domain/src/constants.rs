//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Listing
// =============================================================================

/// Upper bound on records returned by a single list call
pub const MAX_LIST_USERS: u64 = 1000;

// =============================================================================
// Validation
// =============================================================================

/// Minimum length for every profile field
pub const MIN_FIELD_LENGTH: usize = 1;
