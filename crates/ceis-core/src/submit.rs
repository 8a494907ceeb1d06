//! Submission payload and client
//!
//! Flattens the answer store into the JSON document the spreadsheet
//! collaborator expects and POSTs it fire-and-forget: the endpoint runs
//! behind an opaque-response transport, so the client never interprets the
//! response; after a short grace delay transmission is assumed complete.
//! The collaborator takes a script lock, appends one timestamped row, and
//! stores any photo payload in its content store.

use std::time::Duration;

use serde::Serialize;

use crate::error::{RegResult, RegistrationError};
use crate::fee;
use crate::steps::keys;
use crate::store::AnswerStore;

/// Delay granted to the transport before assuming delivery.
pub const GRACE_DELAY: Duration = Duration::from_millis(1500);

/// The flat wire document. Field names match the collaborator's row schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub full_name: String,
    pub cin: String,
    pub university: String,
    pub gender: String,
    pub dob: String,
    pub position: String,
    pub department: String,
    pub allergies: String,
    pub chronic: String,
    pub medical_details: String,
    pub email: String,
    pub phone: String,
    pub emergency: String,
    pub zodiac: String,
    pub goals: String,
    pub topics: String,
    pub support: String,
    pub comm: String,
    pub bus: String,
    pub room: String,
    pub terms: String,
    /// Encoded signature image, or empty when unsigned
    pub signature: String,
    /// Formatted total, e.g. "275 DT"
    pub fee: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_type: Option<String>,
}

impl RegistrationPayload {
    /// Assemble the wire document from the collected answers. Choice groups
    /// contribute their plain stored value; prices only surface through the
    /// computed fee string.
    pub fn from_store(store: &AnswerStore) -> Self {
        let grab = |key: &str| store.value(key).to_string();
        let fee = store
            .get(keys::TOTAL_FEE)
            .map(str::to_string)
            .unwrap_or_else(|| fee::format_total(fee::total(store)));
        let photo = store.photo();

        Self {
            full_name: grab(keys::NAME),
            cin: grab(keys::CIN),
            university: grab(keys::UNIVERSITY),
            gender: grab(keys::GENDER),
            dob: grab(keys::DOB),
            position: grab(keys::POSITION),
            department: grab(keys::DEPARTMENT),
            allergies: grab(keys::ALLERGIES),
            chronic: grab(keys::CHRONIC),
            medical_details: grab(keys::MEDICAL_DETAILS),
            email: grab(keys::EMAIL),
            phone: grab(keys::PHONE),
            emergency: grab(keys::EMERGENCY),
            zodiac: grab(keys::ZODIAC),
            goals: grab(keys::GOALS),
            topics: grab(keys::TOPICS),
            support: grab(keys::SUPPORT),
            comm: grab(keys::COMM),
            bus: grab(keys::BUS),
            room: grab(keys::ROOM),
            terms: grab(keys::TERMS),
            signature: grab(keys::SIGNATURE),
            fee,
            photo_data: photo.map(|p| p.data.clone()),
            photo_name: photo.map(|p| p.name.clone()),
            photo_type: photo.map(|p| p.mime.clone()),
        }
    }
}

/// Fire-and-forget HTTP client for the spreadsheet-append endpoint.
///
/// With no endpoint configured the local flow still completes: the payload
/// is logged and the call succeeds. This is a deliberate fallback for
/// development and demos, not a swallowed error.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    endpoint: Option<String>,
    http: reqwest::Client,
    grace: Duration,
}

impl SubmissionClient {
    pub fn new(endpoint: Option<String>) -> Self {
        Self::with_grace(endpoint, GRACE_DELAY)
    }

    /// Client with a custom grace delay (tests use zero).
    pub fn with_grace(endpoint: Option<String>, grace: Duration) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
            grace,
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Send one registration. The response is not interpreted; any
    /// transport-level completion counts as success after the grace delay.
    pub async fn submit(&self, payload: &RegistrationPayload) -> RegResult<()> {
        let body = serde_json::to_string(payload)?;

        let Some(url) = &self.endpoint else {
            tracing::warn!("no sheets endpoint configured; logging payload instead");
            tracing::info!(payload = %body, "registration collected");
            return Ok(());
        };

        tracing::info!(endpoint = %url, bytes = body.len(), "transmitting registration");
        // text/plain keeps the Apps Script endpoint preflight-free
        self.http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await
            .map_err(|e| RegistrationError::Transmission(e.to_string()))?;

        tokio::time::sleep(self.grace).await;
        tracing::info!("registration transmitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo;
    use crate::session::{Advance, FormSession, Phase};
    use crate::steps::keys;

    fn complete_session() -> FormSession {
        let mut session = FormSession::new();
        session.answers.set(keys::NAME, "Souleima Maacha");
        session.answers.set(keys::CIN, "09876543");
        session.answers.set(keys::UNIVERSITY, "IHEC Carthage");
        session.select_choice(keys::GENDER, "Female", 0);
        session.answers.set(keys::DOB, "2002-11-02");
        session.answers.set(keys::POSITION, "TL");
        session.answers.set(keys::DEPARTMENT, "OGV");
        assert_eq!(session.advance(), Advance::Next(2));

        session.select_choice(keys::ALLERGIES, "Yes", 0);
        session.select_choice(keys::CHRONIC, "No", 0);
        session.answers.set(keys::MEDICAL_DETAILS, "Peanuts");
        assert_eq!(session.advance(), Advance::Next(3));

        session.answers.set(keys::EMAIL, "souleima@example.com");
        session.answers.set(keys::PHONE, "+216 20 000 000");
        session.answers.set(keys::EMERGENCY, "+216 21 111 111");
        assert_eq!(session.advance(), Advance::Next(4));

        session.answers.set(keys::ZODIAC, "Leo");
        session.answers.set(keys::GOALS, "Lead the OC");
        session.answers.set(keys::TOPICS, "Facilitation");
        assert_eq!(session.advance(), Advance::Next(5));

        session.answers.set(keys::SUPPORT, "A quiet corner");
        session.select_choice(keys::COMM, "WhatsApp", 0);
        session.select_choice(keys::BUS, "Full Package", 30);
        session.select_choice(keys::ROOM, "Yes", 100);
        session
            .answers
            .set_photo(photo::attachment_from_bytes("me.png", b"pixels").unwrap());
        assert_eq!(session.advance(), Advance::Next(6));

        session
            .answers
            .set(keys::SIGNATURE, "data:image/png;base64,AAAA");
        session.answers.set(keys::TERMS, "Accepted");
        session
    }

    #[test]
    fn payload_uses_collaborator_field_names() {
        let session = complete_session();
        let payload = RegistrationPayload::from_store(&session.answers);
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&payload).unwrap()).unwrap();

        assert_eq!(json["fullName"], "Souleima Maacha");
        assert_eq!(json["medicalDetails"], "Peanuts");
        assert_eq!(json["bus"], "Full Package");
        assert_eq!(json["fee"], "275 DT");
        assert_eq!(json["photoName"], "me.png");
        assert_eq!(json["photoType"], "image/png");
    }

    #[test]
    fn photo_finishing_after_the_step_change_still_ships() {
        // The disk read runs detached from the upload step; it can land
        // while the user is already signing. The store takes the
        // attachment on any step and the payload carries it.
        let mut session = complete_session();
        session.answers.clear_photo();
        assert_eq!(session.step(), 6);

        session
            .answers
            .set_photo(photo::attachment_from_bytes("late.jpg", b"\xff\xd8\xff").unwrap());

        let payload = RegistrationPayload::from_store(&session.answers);
        assert_eq!(payload.photo_name.as_deref(), Some("late.jpg"));
        assert_eq!(payload.photo_type.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn photo_fields_are_omitted_when_absent() {
        let store = AnswerStore::new();
        let payload = RegistrationPayload::from_store(&store);
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("photoData"));
        // fee falls back to the recomputed base
        assert_eq!(payload.fee, "145 DT");
    }

    #[tokio::test]
    async fn end_to_end_without_endpoint_reaches_submitted() {
        let mut session = complete_session();
        assert_eq!(session.advance(), Advance::ReadyToSubmit);

        let payload = RegistrationPayload::from_store(&session.answers);
        let client = SubmissionClient::with_grace(None, Duration::ZERO);
        client.submit(&payload).await.unwrap();
        session.mark_submitted();

        assert_eq!(session.phase(), Phase::Submitted);
        // the logged payload carries every entered field
        let json = serde_json::to_string(&payload).unwrap();
        for expected in [
            "Souleima Maacha",
            "09876543",
            "IHEC Carthage",
            "Female",
            "2002-11-02",
            "TL",
            "OGV",
            "Peanuts",
            "souleima@example.com",
            "Leo",
            "Full Package",
            "275 DT",
            "Accepted",
        ] {
            assert!(json.contains(expected), "missing {expected}");
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transmission_error() {
        let client = SubmissionClient::with_grace(
            Some("http://127.0.0.1:1/append".to_string()),
            Duration::ZERO,
        );
        let payload = RegistrationPayload::from_store(&AnswerStore::new());
        let err = client.submit(&payload).await.unwrap_err();
        assert!(matches!(err, RegistrationError::Transmission(_)));
    }
}
