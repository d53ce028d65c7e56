//! Submission orchestration
//!
//! Sequences the pipeline Validating -> Resolving -> Assembling -> Verifying
//! -> Submitting. Three entry strategies share the same pipeline and differ
//! only in how the client id and some defaults are sourced. Exactly one
//! network write per invocation, issued only after every prior stage passes;
//! no automatic retry at this layer.

use crate::classify::{self, ClassifiedError};
use crate::inventory::{CheckInTransport, RoomInventory};
use crate::payload::{self, ClientId};
use crate::resolve;
use crate::validate::validate_check_in_data;
use shared::models::{CheckInRequest, DataOrigin, SubmissionResult};
use uuid::Uuid;

/// Client id used by the fixed-test diagnostic strategy
pub const TEST_CLIENT_ID: i64 = 9001;

/// Observation marker stamped on fixed-test submissions
pub const TEST_OBSERVATION: &str = "Envio de diagnostico";

/// Reservation path segment used when no reservation exists (walk-in)
pub const WALK_IN_RESERVATION_REF: &str = "0";

/// Pipeline stage, in fixed execution order
///
/// Terminal states are `Succeeded` and `Failed`; a failed attempt requires a
/// fresh invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineStage {
    Idle,
    Validating,
    Resolving,
    Assembling,
    Verifying,
    Submitting,
    Succeeded,
    Failed,
}

/// Strategy object: how the client id and fixed defaults are sourced
///
/// All three strategies converge on the same validate/resolve/assemble/
/// verify/submit pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionSource {
    origin: DataOrigin,
    client_id: ClientId,
    observation_override: Option<&'static str>,
}

impl SubmissionSource {
    /// Live-form strategy
    ///
    /// The client id stays deferred: the backend is expected to derive the
    /// true account from the reservation on its side.
    pub fn form() -> Self {
        Self {
            origin: DataOrigin::FormSourced,
            client_id: ClientId::Deferred,
            observation_override: None,
        }
    }

    /// Diagnostic strategy with fixed development values
    ///
    /// Not for production guest traffic.
    pub fn fixed_test() -> Self {
        Self {
            origin: DataOrigin::FixedTest,
            client_id: ClientId::Fixed(TEST_CLIENT_ID),
            observation_override: Some(TEST_OBSERVATION),
        }
    }

    /// Existing-reservation strategy
    ///
    /// The PMS exposes no reservation read, so this degrades to the
    /// form-sourced behavior; the origin is preserved so the degradation
    /// stays observable.
    pub fn reservation() -> Self {
        Self {
            origin: DataOrigin::ReservationSourced,
            client_id: ClientId::Deferred,
            observation_override: None,
        }
    }

    /// Where this strategy sources its data
    pub fn origin(&self) -> DataOrigin {
        self.origin
    }

    /// The client-id source for this strategy
    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    /// Apply the strategy's fixed values to the raw request
    fn apply(&self, mut request: CheckInRequest) -> CheckInRequest {
        if let Some(observation) = self.observation_override {
            request.observation = observation.to_string();
        }
        request
    }
}

/// Check-in submission pipeline over a PMS connection
#[derive(Debug, Clone)]
pub struct CheckInPipeline<C> {
    connection: C,
}

impl<C> CheckInPipeline<C>
where
    C: RoomInventory + CheckInTransport,
{
    /// Create a pipeline over a connection implementing both network seams
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Run one submission attempt
    ///
    /// Resolves to exactly one of a [`SubmissionResult`] or a
    /// [`ClassifiedError`], never both, never neither. Validation failures
    /// are returned before any network call; backend failures always pass
    /// through the classifier.
    pub async fn submit(
        &self,
        source: SubmissionSource,
        request: CheckInRequest,
    ) -> Result<SubmissionResult, ClassifiedError> {
        let correlation_id = Uuid::new_v4();
        let origin = source.origin();

        if origin == DataOrigin::ReservationSourced {
            // No reservation read endpoint exists; data stays form-sourced
            tracing::debug!(
                %correlation_id,
                "Reservation-sourced submission degrades to form-sourced data"
            );
        }

        // 1. Validating: local completeness and consistency, no I/O
        tracing::debug!(%correlation_id, stage = ?PipelineStage::Validating, "Pipeline stage");
        let outcome = validate_check_in_data(&request);
        if !outcome.is_valid {
            tracing::debug!(
                %correlation_id,
                errors = outcome.errors.len(),
                "Request rejected locally"
            );
            return Err(ClassifiedError::local_validation(&outcome.errors));
        }

        // 2. Resolving: free-text room number -> canonical id, never fails
        tracing::debug!(%correlation_id, stage = ?PipelineStage::Resolving, "Pipeline stage");
        let resolved = resolve::resolve_room(&self.connection, &request.room_number).await;

        // 3. Assembling: strategy defaults, then the pure transformation
        tracing::debug!(%correlation_id, stage = ?PipelineStage::Assembling, "Pipeline stage");
        let request = source.apply(request);
        let payload = payload::assemble(&request, &resolved, source.client_id());

        // 4. Verifying: independent invariants on the DTO itself
        tracing::debug!(%correlation_id, stage = ?PipelineStage::Verifying, "Pipeline stage");
        let verification = payload::verify(&payload);
        if !verification.is_valid {
            tracing::warn!(
                %correlation_id,
                errors = ?verification.errors,
                "Assembled payload failed verification"
            );
            return Err(ClassifiedError::local_validation(&verification.errors));
        }

        // 5. Submitting: the single network write of this invocation
        let reservation_ref = reservation_ref(&request);
        let endpoint_used = format!("frontdesk/reserva/{}/checkin", reservation_ref);
        tracing::info!(
            %correlation_id,
            endpoint = %endpoint_used,
            origin = ?origin,
            room_id = payload.id_hab,
            tier = resolved.tier.rank(),
            deferred_client = source.client_id().is_deferred(),
            "Submitting check-in"
        );

        match self
            .connection
            .submit_check_in(&reservation_ref, &payload)
            .await
        {
            Ok(response) => {
                let folio_id = response.data.as_ref().and_then(|d| d.id_folio);
                tracing::info!(%correlation_id, folio_id = ?folio_id, "Check-in accepted");
                Ok(SubmissionResult {
                    success: true,
                    folio_id,
                    message: if response.message.is_empty() {
                        "Check-in completed".to_string()
                    } else {
                        response.message
                    },
                    data_origin: origin,
                    endpoint_used,
                })
            }
            Err(err) => {
                let classified = classify::classify_client_error(&err);
                tracing::warn!(
                    %correlation_id,
                    kind = ?classified.kind,
                    code = classified.code().code(),
                    message = %classified.message,
                    "Check-in rejected"
                );
                Err(classified)
            }
        }
    }
}

/// Reservation path segment for one request
///
/// Walk-ins have no reservation; the PMS treats segment `0` as "no
/// reservation".
fn reservation_ref(request: &CheckInRequest) -> String {
    let trimmed = request.reservation_id.trim();
    if request.is_walk_in || trimmed.is_empty() {
        WALK_IN_RESERVATION_REF.to_string()
    } else {
        trimmed.to_string()
    }
}
