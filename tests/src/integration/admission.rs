//! # Admission Pipeline Flows
//!
//! The full authentication path with real cryptography: canonical message
//! reconstruction, timestamp window, signature verification, and the error
//! taxonomy the API surfaces.

#[cfg(test)]
mod tests {
    use crate::support::{Client, SigEncoding};
    use placard_gate::{
        AdmissionApi, AdmissionConfig, AdmissionError, AuthError, GateService,
    };
    use placard_identity::IdentityService;
    use shared_types::TimestampMs;

    const NOW: TimestampMs = 1_700_000_000_000;

    fn gate() -> GateService<IdentityService> {
        GateService::new(IdentityService::new(), AdmissionConfig::default())
    }

    #[test]
    fn test_fixed_width_signed_thread_admitted() {
        let gate = gate();
        let client = Client::new();
        let sub = client.thread("title", "content", NOW, None, SigEncoding::FixedWidth);

        let auth = gate.admit_thread(&sub, NOW).unwrap();
        assert_eq!(auth.identity, client.public_key_hex());
        assert_eq!(auth.handle, client.handle());
        assert_eq!(auth.timestamp, NOW);
    }

    #[test]
    fn test_der_signed_thread_admitted() {
        let gate = gate();
        let client = Client::new();
        let sub = client.thread("title", "content", NOW, None, SigEncoding::Der);

        assert!(gate.admit_thread(&sub, NOW).is_ok());
    }

    #[test]
    fn test_reply_signs_over_parent_id() {
        let gate = gate();
        let client = Client::new();
        let parent = uuid::Uuid::new_v4();
        let sub = client.reply("a reply", parent, NOW, SigEncoding::FixedWidth);

        assert!(gate.admit_reply(&sub, NOW).is_ok());

        // The same signature presented with a different parent must fail:
        // the canonical message embeds the parent id.
        let mut redirected = client.reply("a reply", parent, NOW + 1, SigEncoding::FixedWidth);
        redirected.parent_id = uuid::Uuid::new_v4();
        assert!(matches!(
            gate.admit_reply(&redirected, NOW + 1),
            Err(AdmissionError::Authentication(AuthError::Signature(_)))
        ));
    }

    #[test]
    fn test_tampered_field_rejected() {
        let gate = gate();
        let client = Client::new();

        let mut sub = client.thread("title", "content", NOW, None, SigEncoding::FixedWidth);
        sub.title = "TITLE".into();
        assert!(matches!(
            gate.admit_thread(&sub, NOW),
            Err(AdmissionError::Authentication(AuthError::Signature(_)))
        ));
    }

    #[test]
    fn test_signature_from_another_key_rejected() {
        let gate = gate();
        let signer = Client::new();
        let impostor = Client::new();

        let mut sub = signer.thread("title", "content", NOW, None, SigEncoding::FixedWidth);
        sub.public_key = impostor.public_key_hex();
        assert!(matches!(
            gate.admit_thread(&sub, NOW),
            Err(AdmissionError::Authentication(AuthError::Signature(_)))
        ));
    }

    #[test]
    fn test_timestamp_window_boundaries() {
        let gate = gate();
        let client = Client::new();
        let config = AdmissionConfig::default();
        let max_age = config.gate.max_age_ms;
        let skew = config.gate.clock_skew_ms;

        // Exactly max_age old: passes. One millisecond older: stale.
        let at_edge = client.thread("t", "c", NOW - max_age, None, SigEncoding::FixedWidth);
        assert!(gate.admit_thread(&at_edge, NOW).is_ok());

        let past_edge =
            client.thread("t2", "c", NOW - max_age - 1, None, SigEncoding::FixedWidth);
        assert!(matches!(
            gate.admit_thread(&past_edge, NOW),
            Err(AdmissionError::Authentication(AuthError::StaleTimestamp { .. }))
        ));

        // Exactly skew ahead: passes. One millisecond further: rejected.
        let future_edge = client.thread("t3", "c", NOW + skew, None, SigEncoding::FixedWidth);
        assert!(gate.admit_thread(&future_edge, NOW).is_ok());

        let past_future =
            client.thread("t4", "c", NOW + skew + 1, None, SigEncoding::FixedWidth);
        assert!(matches!(
            gate.admit_thread(&past_future, NOW),
            Err(AdmissionError::Authentication(AuthError::FutureTimestamp { .. }))
        ));
    }

    #[test]
    fn test_replayed_timestamp_outside_window_rejected() {
        let gate = gate();
        let client = Client::new();
        let sub = client.thread("t", "c", NOW, None, SigEncoding::FixedWidth);

        // First delivery inside the window succeeds.
        assert!(gate.admit_thread(&sub, NOW + 1_000).is_ok());

        // A capture replayed ten minutes later fails on age alone.
        assert!(matches!(
            gate.admit_thread(&sub, NOW + 10 * 60 * 1_000),
            Err(AdmissionError::Authentication(AuthError::StaleTimestamp { .. }))
        ));
    }

    #[test]
    fn test_error_statuses_across_pipeline() {
        let gate = gate();
        let client = Client::new();

        let mut bad_key = client.thread("t", "c", NOW, None, SigEncoding::FixedWidth);
        bad_key.public_key.truncate(10);
        assert_eq!(gate.admit_thread(&bad_key, NOW).unwrap_err().status_code(), 400);

        let mut bad_sig = client.thread("t", "c", NOW, None, SigEncoding::FixedWidth);
        bad_sig.signature = "xyz".into();
        assert_eq!(gate.admit_thread(&bad_sig, NOW).unwrap_err().status_code(), 400);

        let mut forged = client.thread("t", "c", NOW, None, SigEncoding::FixedWidth);
        forged.content = "other".into();
        assert_eq!(gate.admit_thread(&forged, NOW).unwrap_err().status_code(), 401);
    }
}
