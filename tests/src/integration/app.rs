//! # Application Boundary Flows
//!
//! The composed [`placard_node::BoardApp`] as the external HTTP layer sees
//! it: live clock, real cryptography, in-memory storage.

#[cfg(test)]
mod tests {
    use crate::support::{Client, SigEncoding};
    use placard_gate::AdmissionConfig;
    use placard_identity::IdentityService;
    use placard_lifecycle::InMemoryContentStore;
    use placard_node::{AppError, BoardApp};
    use shared_types::now_ms;

    fn app() -> BoardApp<IdentityService, InMemoryContentStore> {
        BoardApp::new(AdmissionConfig::default(), InMemoryContentStore::new())
    }

    #[tokio::test]
    async fn test_post_view_reply_roundtrip() {
        let app = app();
        let op = Client::new();
        let commenter = Client::new();

        let sub = op.thread("first", "hello board", now_ms(), Some(60), SigEncoding::FixedWidth);
        let id = app.submit_thread(sub).await.unwrap();

        let reply = commenter.reply("welcome", id, now_ms(), SigEncoding::Der);
        app.submit_reply(reply).await.unwrap();

        let view = app.view_thread(id).await.unwrap().unwrap();
        assert_eq!(view.thread.title, "first");
        assert_eq!(view.thread.author_handle, op.handle());
        assert!(view.thread.expires_at.is_some());
        assert_eq!(view.replies.len(), 1);
        assert_eq!(view.replies[0].content, "welcome");
        assert_eq!(view.replies[0].author_handle, commenter.handle());
    }

    #[tokio::test]
    async fn test_duplicate_post_surfaces_as_429() {
        let app = app();
        let client = Client::new();

        let first = client.thread("t", "same words", now_ms(), None, SigEncoding::FixedWidth);
        app.submit_thread(first).await.unwrap();

        let again = client.thread("t", "same words", now_ms(), None, SigEncoding::FixedWidth);
        let err = app.submit_thread(again).await.unwrap_err();
        assert_eq!(err.status_code(), 429);
    }

    #[tokio::test]
    async fn test_sweep_removes_due_content_via_app() {
        let app = app();
        let client = Client::new();

        // TTL in the past is impossible to submit (expiry is computed from
        // the accepted clock), so drive the sweep directly far in the
        // future instead.
        let sub = client.thread("soon gone", "bye", now_ms(), Some(1), SigEncoding::FixedWidth);
        let id = app.submit_thread(sub).await.unwrap();
        assert!(app.view_thread(id).await.unwrap().is_some());

        let lifecycle = app.lifecycle();
        let deleted = lifecycle.sweep(now_ms() + 2 * 60_000).await.unwrap();
        assert_eq!(deleted, 1);
        assert!(app.view_thread(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unparseable_key_is_400_not_500() {
        let app = app();
        let client = Client::new();
        let mut sub = client.thread("t", "c", now_ms(), None, SigEncoding::FixedWidth);
        sub.public_key = "definitely not hex".into();

        let err = app.submit_thread(sub).await.unwrap_err();
        assert!(matches!(err, AppError::Admission(_)));
        assert_eq!(err.status_code(), 400);
    }
}
