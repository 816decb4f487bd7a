//! Input validation for simulation requests.
//!
//! Checks a [`SimulationRequest`] before any policy runs. Detects:
//! - Empty request lists
//! - Non-positive track bounds
//! - (strict mode) head or requests outside `[0, track_bound]`
//!
//! Bounds are not enforced by default: an out-of-range request simply
//! shows up as an out-of-range position in the head path.

use crate::models::{SimulationRequest, Track};
use crate::policies::LOWEST_TRACK;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No requests were supplied.
    EmptyRequests,
    /// Track bound is zero or negative.
    NonPositiveTrackBound,
    /// Head lies outside `[0, track_bound]`.
    HeadOutOfRange,
    /// A request lies outside `[0, track_bound]`.
    RequestOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the parameters every policy relies on.
///
/// Checks:
/// 1. At least one request is given
/// 2. Track bound is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &SimulationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.requests.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRequests,
            "Request list is empty",
        ));
    }

    if request.track_bound <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveTrackBound,
            format!("Track bound must be positive, got {}", request.track_bound),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Strict validation: [`validate_request`] plus range checks.
///
/// Every out-of-range request is reported, once per occurrence.
pub fn validate_request_strict(request: &SimulationRequest) -> ValidationResult {
    let mut errors = validate_request(request).err().unwrap_or_default();

    // Range checks are meaningless against a broken bound
    if request.track_bound > 0 {
        let in_range = |t: Track| (LOWEST_TRACK..=request.track_bound).contains(&t);

        if !in_range(request.head) {
            errors.push(ValidationError::new(
                ValidationErrorKind::HeadOutOfRange,
                format!(
                    "Head {} is outside 0..={}",
                    request.head, request.track_bound
                ),
            ));
        }

        for (pos, &track) in request.requests.iter().enumerate() {
            if !in_range(track) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RequestOutOfRange,
                    format!(
                        "Request #{} (track {}) is outside 0..={}",
                        pos + 1,
                        track,
                        request.track_bound
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Ensures the head position is a member of the request list.
///
/// Appends `head` when missing; otherwise returns the list unchanged.
pub fn normalize_requests(mut requests: Vec<Track>, head: Track) -> Vec<Track> {
    if !requests.contains(&head) {
        requests.push(head);
    }
    requests
}
