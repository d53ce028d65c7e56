//! Payload assembly and verification
//!
//! [`assemble`] builds the canonical wire DTO from validated input plus the
//! resolved room id; [`verify`] is a second, independent pass over the DTO
//! itself. The duplication with the request validator is intentional: a bad
//! default or assembly bug fails here, before any network call.

use crate::resolve::ResolvedRoom;
use crate::validate::ValidationOutcome;
use chrono::NaiveDate;
use shared::models::{CheckInPayload, CheckInRequest};

/// Wire value sent when the true account holder is deferred to the backend
pub const DEFERRED_CLIENT_ID: i64 = 1;

/// Fixed label used as the assignment name base
pub const ASSIGNMENT_LABEL: &str = "Check-in recepcion";

/// Placeholder stored when the desk left no observation
pub const DEFAULT_OBSERVATION: &str = "Sin observaciones";

/// Wire date format accepted by the PMS
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the titular-client id for one submission
///
/// The PMS exposes no reservation read, so the true account holder is
/// usually unknown client-side. `Deferred` keeps that fact typed instead of
/// hiding it behind a magic number; the placeholder value only appears at
/// wire time, via [`ClientId::wire_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientId {
    /// Account resolution is deferred to the backend
    Deferred,
    /// A concrete client id (fixed development values, diagnostics)
    Fixed(i64),
}

impl ClientId {
    /// Value transmitted in `id_cliente_titular`
    pub fn wire_value(self) -> i64 {
        match self {
            ClientId::Deferred => DEFERRED_CLIENT_ID,
            ClientId::Fixed(id) => id,
        }
    }

    /// Whether the backend must derive the true account itself
    pub fn is_deferred(self) -> bool {
        matches!(self, ClientId::Deferred)
    }
}

/// Assemble the canonical submission payload
///
/// Pure transformation; all validation is delegated to
/// [`crate::validate_check_in_data`] (pre-assembly) and [`verify`]
/// (post-assembly).
pub fn assemble(
    request: &CheckInRequest,
    resolved: &ResolvedRoom,
    client_id: ClientId,
) -> CheckInPayload {
    let observation = request.observation.trim();

    let nombre_asignacion = if observation.is_empty() {
        ASSIGNMENT_LABEL.to_string()
    } else {
        format!("{} - {}", ASSIGNMENT_LABEL, observation)
    };

    let observacion_checkin = if observation.is_empty() {
        DEFAULT_OBSERVATION.to_string()
    } else {
        observation.to_string()
    };

    CheckInPayload {
        id_cliente_titular: client_id.wire_value(),
        fecha_llegada: format_date(request.check_in_date),
        fecha_salida: format_date(request.check_out_date),
        adultos: request.adults,
        ninos: request.children,
        bebes: request.infants,
        id_hab: resolved.id,
        nombre_asignacion,
        observacion_checkin: Some(observacion_checkin),
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Verify the assembled payload
///
/// Structural invariants of the DTO itself, checked independently of the
/// request validator. All violations accumulate.
pub fn verify(payload: &CheckInPayload) -> ValidationOutcome {
    let mut errors = Vec::new();

    if payload.id_cliente_titular <= 0 {
        errors.push("Titular client id must be positive".to_string());
    }
    if payload.id_hab <= 0 {
        errors.push("Room id must be positive".to_string());
    }

    let llegada = NaiveDate::parse_from_str(&payload.fecha_llegada, DATE_FORMAT);
    let salida = NaiveDate::parse_from_str(&payload.fecha_salida, DATE_FORMAT);
    if llegada.is_err() {
        errors.push("Arrival date must match YYYY-MM-DD".to_string());
    }
    if salida.is_err() {
        errors.push("Departure date must match YYYY-MM-DD".to_string());
    }
    if let (Ok(llegada), Ok(salida)) = (llegada, salida) {
        if salida <= llegada {
            errors.push("Departure date must be after arrival date".to_string());
        }
    }

    if payload.adultos + payload.ninos + payload.bebes < 1 {
        errors.push("At least one guest is required".to_string());
    }
    if payload.nombre_asignacion.trim().is_empty() {
        errors.push("Assignment name must not be empty".to_string());
    }

    ValidationOutcome::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::MatchTier;
    use shared::models::PaymentMethod;

    fn request() -> CheckInRequest {
        CheckInRequest {
            is_walk_in: true,
            room_number: "305".to_string(),
            guest_name: "Maria Fernandez".to_string(),
            identification_number: "X1234567".to_string(),
            check_in_date: NaiveDate::from_ymd_opt(2025, 9, 28),
            check_out_date: NaiveDate::from_ymd_opt(2025, 9, 29),
            adults: 2,
            children: 1,
            payment_method: Some(PaymentMethod::Cash),
            ..Default::default()
        }
    }

    fn resolved() -> ResolvedRoom {
        ResolvedRoom {
            id: 12,
            tier: MatchTier::ExactQuery,
        }
    }

    #[test]
    fn test_assemble_copies_and_derives() {
        let payload = assemble(&request(), &resolved(), ClientId::Deferred);
        assert_eq!(payload.id_cliente_titular, DEFERRED_CLIENT_ID);
        assert_eq!(payload.fecha_llegada, "2025-09-28");
        assert_eq!(payload.fecha_salida, "2025-09-29");
        assert_eq!(payload.adultos, 2);
        assert_eq!(payload.ninos, 1);
        assert_eq!(payload.bebes, 0);
        assert_eq!(payload.id_hab, 12);
        assert_eq!(payload.nombre_asignacion, ASSIGNMENT_LABEL);
        assert_eq!(
            payload.observacion_checkin.as_deref(),
            Some(DEFAULT_OBSERVATION)
        );
    }

    #[test]
    fn test_assemble_with_observation() {
        let request = CheckInRequest {
            observation: "Llega tarde".to_string(),
            ..request()
        };
        let payload = assemble(&request, &resolved(), ClientId::Deferred);
        assert_eq!(
            payload.nombre_asignacion,
            format!("{} - Llega tarde", ASSIGNMENT_LABEL)
        );
        assert_eq!(payload.observacion_checkin.as_deref(), Some("Llega tarde"));
    }

    #[test]
    fn test_assemble_fixed_client_id() {
        let payload = assemble(&request(), &resolved(), ClientId::Fixed(77));
        assert_eq!(payload.id_cliente_titular, 77);
    }

    #[test]
    fn test_client_id_marker() {
        assert!(ClientId::Deferred.is_deferred());
        assert!(!ClientId::Fixed(5).is_deferred());
        assert_eq!(ClientId::Deferred.wire_value(), DEFERRED_CLIENT_ID);
        assert_eq!(ClientId::Fixed(5).wire_value(), 5);
    }

    #[test]
    fn test_verify_accepts_assembled_payload() {
        let payload = assemble(&request(), &resolved(), ClientId::Deferred);
        let outcome = verify(&payload);
        assert!(outcome.is_valid, "errors: {:?}", outcome.errors);
    }

    #[test]
    fn test_verify_rejects_zero_guests() {
        let mut payload = assemble(&request(), &resolved(), ClientId::Deferred);
        payload.adultos = 0;
        payload.ninos = 0;
        payload.bebes = 0;
        let outcome = verify(&payload);
        assert!(!outcome.is_valid);
        assert!(outcome.errors.iter().any(|e| e.contains("guest")));
    }

    #[test]
    fn test_verify_rejects_bad_dates() {
        let mut payload = assemble(&request(), &resolved(), ClientId::Deferred);
        payload.fecha_llegada = "28/09/2025".to_string();
        let outcome = verify(&payload);
        assert!(outcome.errors.iter().any(|e| e.contains("Arrival date")));

        let mut payload = assemble(&request(), &resolved(), ClientId::Deferred);
        payload.fecha_salida = payload.fecha_llegada.clone();
        let outcome = verify(&payload);
        assert!(outcome.errors.iter().any(|e| e.contains("after arrival")));
    }

    #[test]
    fn test_verify_rejects_nonpositive_ids() {
        let mut payload = assemble(&request(), &resolved(), ClientId::Deferred);
        payload.id_hab = 0;
        payload.id_cliente_titular = -3;
        let outcome = verify(&payload);
        assert!(outcome.errors.iter().any(|e| e.contains("Room id")));
        assert!(outcome.errors.iter().any(|e| e.contains("client id")));
    }

    #[test]
    fn test_verify_rejects_blank_assignment_name() {
        let mut payload = assemble(&request(), &resolved(), ClientId::Deferred);
        payload.nombre_asignacion = "  ".to_string();
        let outcome = verify(&payload);
        assert!(!outcome.is_valid);
        assert!(outcome.errors.iter().any(|e| e.contains("Assignment name")));
    }

    #[test]
    fn test_assemble_missing_dates_caught_by_verify() {
        // Assembly is pure and will happily format absent dates as empty
        // strings; verification is the stage that rejects them.
        let request = CheckInRequest {
            check_in_date: None,
            check_out_date: None,
            ..request()
        };
        let payload = assemble(&request, &resolved(), ClientId::Deferred);
        assert_eq!(payload.fecha_llegada, "");
        assert!(!verify(&payload).is_valid);
    }
}
