//! Check-in DTOs
//!
//! `CheckInRequest` is the loosely-structured front-desk form shape;
//! `CheckInPayload` is the canonical wire DTO the PMS check-in endpoint
//! accepts. Payload field names are the PMS's own (Spanish) and must not
//! be renamed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payment method selected at the desk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    Transfer,
    Other,
}

/// Raw front-desk check-in input
///
/// Created per user submission, owned by the caller, discarded at submission
/// end. Staff input is partially trusted: the room number is free text and
/// dates or the payment method may be missing until the form is complete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckInRequest {
    pub is_walk_in: bool,
    #[serde(default)]
    pub reservation_id: String,
    pub room_number: String,
    pub guest_name: String,
    #[serde(default)]
    pub guest_email: String,
    #[serde(default)]
    pub guest_phone: String,
    #[serde(default)]
    pub guest_nationality: String,
    pub identification_number: String,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub infants: u32,
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub observation: String,
    #[serde(default)]
    pub requires_charge_split: bool,
}

/// Canonical check-in submission body
///
/// Exact PMS field names; submitted at most once per attempt, after local
/// validation, room resolution, and payload verification all pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInPayload {
    pub id_cliente_titular: i64,
    pub fecha_llegada: String,
    pub fecha_salida: String,
    pub adultos: u32,
    pub ninos: u32,
    pub bebes: u32,
    pub id_hab: i64,
    pub nombre_asignacion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacion_checkin: Option<String>,
}

/// Success payload of the check-in endpoint
///
/// Decoded tolerantly: only the folio id is consumed client-side, unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckInData {
    #[serde(default)]
    pub id_folio: Option<i64>,
    #[serde(default)]
    pub estado: Option<String>,
}

/// How the submission's client id and defaults were sourced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    /// All fields from the live form; account derivation deferred to the PMS
    FormSourced,
    /// Fixed development values; diagnostics only
    FixedTest,
    /// Existing-reservation path (currently degrades to form-sourced data)
    ReservationSourced,
}

/// Outcome of one submission attempt
///
/// Produced exactly once per attempt; never represents more than one outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub folio_id: Option<i64>,
    pub message: String,
    pub data_origin: DataOrigin,
    pub endpoint_used: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_field_names() {
        let payload = CheckInPayload {
            id_cliente_titular: 1,
            fecha_llegada: "2025-09-28".to_string(),
            fecha_salida: "2025-09-29".to_string(),
            adultos: 2,
            ninos: 1,
            bebes: 0,
            id_hab: 12,
            nombre_asignacion: "Check-in recepcion".to_string(),
            observacion_checkin: Some("Sin observaciones".to_string()),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["id_cliente_titular"], 1);
        assert_eq!(json["fecha_llegada"], "2025-09-28");
        assert_eq!(json["fecha_salida"], "2025-09-29");
        assert_eq!(json["adultos"], 2);
        assert_eq!(json["ninos"], 1);
        assert_eq!(json["bebes"], 0);
        assert_eq!(json["id_hab"], 12);
        assert_eq!(json["nombre_asignacion"], "Check-in recepcion");
        assert_eq!(json["observacion_checkin"], "Sin observaciones");
    }

    #[test]
    fn test_payload_omits_absent_observation() {
        let payload = CheckInPayload {
            id_cliente_titular: 1,
            fecha_llegada: "2025-09-28".to_string(),
            fecha_salida: "2025-09-29".to_string(),
            adultos: 1,
            ninos: 0,
            bebes: 0,
            id_hab: 5,
            nombre_asignacion: "Check-in recepcion".to_string(),
            observacion_checkin: None,
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("observacion_checkin"));
    }

    #[test]
    fn test_check_in_data_tolerant_decode() {
        let json = r#"{"id_folio":501,"estado":"abierta","total":120.5}"#;
        let data: CheckInData = serde_json::from_str(json).unwrap();
        assert_eq!(data.id_folio, Some(501));
        assert_eq!(data.estado.as_deref(), Some("abierta"));

        let empty: CheckInData = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CheckInData::default());
    }

    #[test]
    fn test_payment_method_wire_values() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditCard).unwrap(),
            "\"credit_card\""
        );
        assert_eq!(
            serde_json::from_str::<PaymentMethod>("\"cash\"").unwrap(),
            PaymentMethod::Cash
        );
    }

    #[test]
    fn test_request_dates_as_iso() {
        let request = CheckInRequest {
            room_number: "305".to_string(),
            check_in_date: NaiveDate::from_ymd_opt(2025, 9, 28),
            check_out_date: NaiveDate::from_ymd_opt(2025, 9, 29),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["check_in_date"], "2025-09-28");
        assert_eq!(json["check_out_date"], "2025-09-29");
    }
}
