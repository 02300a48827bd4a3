//! Claim status and request-type constants.
//!
//! Defines the valid status values for the claim lifecycle and the two
//! request types students can submit against a listed item.

/// Claim has been submitted and awaits an admin decision.
pub const STATUS_PENDING: &str = "pending";

/// Claim was approved by an admin.
pub const STATUS_APPROVED: &str = "approved";

/// Claim was rejected by an admin.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid claim status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// Ownership assertion: approval removes the referenced item from the catalog.
pub const TYPE_CLAIM: &str = "claim";

/// Question about an item: approval resolves it without touching the catalog.
pub const TYPE_INQUIRY: &str = "inquiry";

/// Whether approving a request of this type removes the referenced item.
///
/// Request types are stored verbatim from the submission, so anything other
/// than the exact `"claim"` string is treated as a non-removing inquiry.
pub fn removes_item(request_type: &str) -> bool {
    request_type == TYPE_CLAIM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_type_removes_item() {
        assert!(removes_item(TYPE_CLAIM));
    }

    #[test]
    fn test_inquiry_type_does_not_remove_item() {
        assert!(!removes_item(TYPE_INQUIRY));
    }

    #[test]
    fn test_unknown_type_does_not_remove_item() {
        assert!(!removes_item(""));
        assert!(!removes_item("Claim"));
        assert!(!removes_item("ownership"));
    }

    #[test]
    fn test_valid_statuses_contains_all_three() {
        assert_eq!(VALID_STATUSES.len(), 3);
        assert!(VALID_STATUSES.contains(&"pending"));
        assert!(VALID_STATUSES.contains(&"approved"));
        assert!(VALID_STATUSES.contains(&"rejected"));
    }
}
