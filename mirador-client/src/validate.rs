//! Local validation of raw check-in requests
//!
//! First gate of the submission pipeline: checks a raw form request for
//! completeness and internal consistency before any network call. Rules run
//! in a fixed order and every violated rule contributes a message; nothing
//! short-circuits.

use shared::models::CheckInRequest;

/// Outcome of a validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationOutcome {
    /// Build an outcome from accumulated errors
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// A passing outcome with no errors
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }
}

/// Validate a raw check-in request
///
/// Pure function of its input: no I/O, never panics, always terminates with
/// either a passing outcome or at least one message.
pub fn validate_check_in_data(request: &CheckInRequest) -> ValidationOutcome {
    let mut errors = Vec::new();

    // 1. Required scalar fields
    if request.room_number.trim().is_empty() {
        errors.push("Room number is required".to_string());
    }
    if request.guest_name.trim().is_empty() {
        errors.push("Guest name is required".to_string());
    }
    if request.identification_number.trim().is_empty() {
        errors.push("Identification number is required".to_string());
    }
    if request.payment_method.is_none() {
        errors.push("Payment method is required".to_string());
    }

    // 2. Dates present and strictly ordered
    match (request.check_in_date, request.check_out_date) {
        (Some(check_in), Some(check_out)) => {
            if check_out <= check_in {
                errors.push("Check-out date must be after check-in date".to_string());
            }
        }
        _ => {
            errors.push("Check-in and check-out dates are required".to_string());
        }
    }

    // 3. At least one adult
    if request.adults < 1 {
        errors.push("At least one adult is required".to_string());
    }

    if request.is_walk_in {
        // 4. Walk-ins need full contact data
        if request.guest_email.trim().is_empty() {
            errors.push("Guest email is required for walk-ins".to_string());
        }
        if request.guest_phone.trim().is_empty() {
            errors.push("Guest phone is required for walk-ins".to_string());
        }
        if request.guest_nationality.trim().is_empty() {
            errors.push("Guest nationality is required for walk-ins".to_string());
        }
    } else {
        // 5. Existing-reservation path needs the reservation id
        if request.reservation_id.trim().is_empty() {
            errors.push("Reservation id is required".to_string());
        }
    }

    ValidationOutcome::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::PaymentMethod;

    fn valid_walk_in() -> CheckInRequest {
        CheckInRequest {
            is_walk_in: true,
            room_number: "305".to_string(),
            guest_name: "Maria Fernandez".to_string(),
            guest_email: "maria@example.com".to_string(),
            guest_phone: "+34 600 000 000".to_string(),
            guest_nationality: "ES".to_string(),
            identification_number: "X1234567".to_string(),
            check_in_date: NaiveDate::from_ymd_opt(2025, 9, 28),
            check_out_date: NaiveDate::from_ymd_opt(2025, 9, 29),
            adults: 2,
            children: 1,
            infants: 0,
            payment_method: Some(PaymentMethod::Cash),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_walk_in_passes() {
        let outcome = validate_check_in_data(&valid_walk_in());
        assert!(outcome.is_valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_empty_request_accumulates_all_errors() {
        let outcome = validate_check_in_data(&CheckInRequest::default());
        assert!(!outcome.is_valid);
        // Room number, guest name, identification, payment, dates, adults,
        // and the reservation id (non-walk-in default) all fire at once.
        assert!(outcome.errors.len() >= 7);
    }

    #[test]
    fn test_date_order_rejected() {
        let request = CheckInRequest {
            check_out_date: NaiveDate::from_ymd_opt(2025, 9, 27),
            ..valid_walk_in()
        };
        let outcome = validate_check_in_data(&request);
        assert!(!outcome.is_valid);
        assert!(outcome.errors.iter().any(|e| e.contains("after check-in")));
    }

    #[test]
    fn test_equal_dates_rejected() {
        let request = CheckInRequest {
            check_out_date: NaiveDate::from_ymd_opt(2025, 9, 28),
            ..valid_walk_in()
        };
        assert!(!validate_check_in_data(&request).is_valid);
    }

    #[test]
    fn test_missing_dates_rejected() {
        let request = CheckInRequest {
            check_in_date: None,
            ..valid_walk_in()
        };
        let outcome = validate_check_in_data(&request);
        assert!(outcome.errors.iter().any(|e| e.contains("dates")));
    }

    #[test]
    fn test_zero_adults_rejected() {
        let request = CheckInRequest {
            adults: 0,
            ..valid_walk_in()
        };
        let outcome = validate_check_in_data(&request);
        assert!(outcome.errors.iter().any(|e| e.contains("adult")));
    }

    #[test]
    fn test_walk_in_missing_email() {
        let request = CheckInRequest {
            guest_email: String::new(),
            ..valid_walk_in()
        };
        let outcome = validate_check_in_data(&request);
        assert!(!outcome.is_valid);
        assert!(outcome.errors.iter().any(|e| e.contains("email")));
    }

    #[test]
    fn test_non_walk_in_missing_email_passes_that_rule() {
        // Same request, but as an existing reservation: the email rule must
        // not fire.
        let request = CheckInRequest {
            is_walk_in: false,
            guest_email: String::new(),
            reservation_id: "RSV-88".to_string(),
            ..valid_walk_in()
        };
        let outcome = validate_check_in_data(&request);
        assert!(outcome.is_valid);
        assert!(!outcome.errors.iter().any(|e| e.contains("email")));
    }

    #[test]
    fn test_non_walk_in_requires_reservation_id() {
        let request = CheckInRequest {
            is_walk_in: false,
            reservation_id: "   ".to_string(),
            ..valid_walk_in()
        };
        let outcome = validate_check_in_data(&request);
        assert!(!outcome.is_valid);
        assert!(outcome.errors.iter().any(|e| e.contains("Reservation id")));
    }

    #[test]
    fn test_blank_scalars_rejected() {
        let request = CheckInRequest {
            room_number: "  ".to_string(),
            guest_name: String::new(),
            identification_number: String::new(),
            payment_method: None,
            ..valid_walk_in()
        };
        let outcome = validate_check_in_data(&request);
        assert!(outcome.errors.iter().any(|e| e.contains("Room number")));
        assert!(outcome.errors.iter().any(|e| e.contains("Guest name")));
        assert!(outcome.errors.iter().any(|e| e.contains("Identification")));
        assert!(outcome.errors.iter().any(|e| e.contains("Payment method")));
    }
}
