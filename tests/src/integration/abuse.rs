//! # Abuse Control Flows
//!
//! Rate limiting and duplicate suppression exercised through the full gate
//! with real signatures, per endpoint class.

#[cfg(test)]
mod tests {
    use crate::support::{Client, SigEncoding};
    use placard_gate::{
        AdmissionApi, AdmissionConfig, AdmissionError, ClassLimits, GateService,
    };
    use placard_identity::IdentityService;
    use shared_types::{EndpointClass, TimestampMs};

    const NOW: TimestampMs = 1_700_000_000_000;

    /// Tight limits so the suites stay readable: 3 threads / 10 s,
    /// duplicates suppressed for 30 s.
    fn gate() -> GateService<IdentityService> {
        let mut config = AdmissionConfig::default();
        config.guard.thread = ClassLimits {
            window_ms: 10_000,
            max_requests: 3,
            duplicate_window_ms: 30_000,
        };
        GateService::new(IdentityService::new(), config)
    }

    #[test]
    fn test_rate_window_blocks_then_recovers() {
        let gate = gate();
        let client = Client::new();

        for i in 0..3u64 {
            let sub = client.thread(
                &format!("t{i}"),
                "c",
                NOW + i,
                None,
                SigEncoding::FixedWidth,
            );
            assert!(gate.admit_thread(&sub, NOW + i).is_ok(), "request {i}");
        }

        // Fourth inside the window: blocked.
        let fourth = client.thread("t3", "c", NOW + 3, None, SigEncoding::FixedWidth);
        assert_eq!(
            gate.admit_thread(&fourth, NOW + 3),
            Err(AdmissionError::RateLimited {
                class: EndpointClass::Thread
            })
        );

        // After the window elapses: allowed again.
        let later = NOW + 10_000;
        let fifth = client.thread("t4", "c", later, None, SigEncoding::FixedWidth);
        assert!(gate.admit_thread(&fifth, later).is_ok());
    }

    #[test]
    fn test_rate_limits_are_per_identity() {
        let gate = gate();
        let alice = Client::new();
        let bob = Client::new();

        for i in 0..3u64 {
            let sub = alice.thread(
                &format!("a{i}"),
                "c",
                NOW + i,
                None,
                SigEncoding::FixedWidth,
            );
            assert!(gate.admit_thread(&sub, NOW + i).is_ok());
        }

        // Alice is out of budget; Bob is untouched.
        let blocked = alice.thread("a3", "c", NOW + 3, None, SigEncoding::FixedWidth);
        assert!(gate.admit_thread(&blocked, NOW + 3).is_err());

        let fresh = bob.thread("b0", "c", NOW + 3, None, SigEncoding::FixedWidth);
        assert!(gate.admit_thread(&fresh, NOW + 3).is_ok());
    }

    #[test]
    fn test_duplicate_content_suppressed_same_identity_only() {
        let gate = gate();
        let alice = Client::new();
        let bob = Client::new();

        let first = alice.thread("same title", "same body", NOW, None, SigEncoding::FixedWidth);
        assert!(gate.admit_thread(&first, NOW).is_ok());

        // Identical content, fresh signature and timestamp: still blocked
        // for Alice within the suppression window.
        let again = alice.thread(
            "same title",
            "same body",
            NOW + 1_000,
            None,
            SigEncoding::FixedWidth,
        );
        assert_eq!(
            gate.admit_thread(&again, NOW + 1_000),
            Err(AdmissionError::DuplicateContent)
        );

        // Bob posting the same content is not a duplicate.
        let bobs = bob.thread(
            "same title",
            "same body",
            NOW + 1_000,
            None,
            SigEncoding::FixedWidth,
        );
        assert!(gate.admit_thread(&bobs, NOW + 1_000).is_ok());
    }

    #[test]
    fn test_duplicate_allowed_after_suppression_window() {
        let gate = gate();
        let client = Client::new();

        let first = client.thread("title", "body", NOW, None, SigEncoding::FixedWidth);
        assert!(gate.admit_thread(&first, NOW).is_ok());

        // 30 s suppression window elapsed; reposting is allowed.
        let later = NOW + 30_000;
        let repost = client.thread("title", "body", later, None, SigEncoding::FixedWidth);
        assert!(gate.admit_thread(&repost, later).is_ok());
    }

    #[test]
    fn test_reply_budget_independent_of_threads() {
        let gate = gate();
        let client = Client::new();
        let parent = uuid::Uuid::new_v4();

        // Exhaust the thread class.
        for i in 0..3u64 {
            let sub = client.thread(
                &format!("t{i}"),
                "c",
                NOW + i,
                None,
                SigEncoding::FixedWidth,
            );
            assert!(gate.admit_thread(&sub, NOW + i).is_ok());
        }
        let blocked = client.thread("t3", "c", NOW + 3, None, SigEncoding::FixedWidth);
        assert!(gate.admit_thread(&blocked, NOW + 3).is_err());

        // Replies use the default reply class and still flow.
        let reply = client.reply("hello", parent, NOW + 3, SigEncoding::FixedWidth);
        assert!(gate.admit_reply(&reply, NOW + 3).is_ok());
    }

    #[test]
    fn test_forged_requests_cannot_burn_a_victims_budget() {
        let gate = gate();
        let victim = Client::new();
        let attacker = Client::new();

        // The attacker submits garbage under the victim's key.
        for i in 0..10u64 {
            let mut forged = attacker.thread(
                &format!("f{i}"),
                "c",
                NOW + i,
                None,
                SigEncoding::FixedWidth,
            );
            forged.public_key = victim.public_key_hex();
            assert!(gate.admit_thread(&forged, NOW + i).is_err());
        }

        // The victim's own budget is intact: abuse state only advances
        // after authentication succeeds.
        for i in 0..3u64 {
            let sub = victim.thread(
                &format!("v{i}"),
                "c",
                NOW + 100 + i,
                None,
                SigEncoding::FixedWidth,
            );
            assert!(gate.admit_thread(&sub, NOW + 100 + i).is_ok());
        }
    }
}
