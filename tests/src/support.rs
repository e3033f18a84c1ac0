//! Client-side test fixtures: what a posting client actually runs.
//!
//! Clients hold a P-256 keypair in the browser and sign the same canonical
//! strings the server reconstructs. These helpers produce submissions in
//! both signature encodings so the suites can cover each wire form.

use p256::ecdsa::signature::Signer;
use p256::ecdsa::{Signature, SigningKey};
use shared_types::{ReplySubmission, ThreadId, ThreadSubmission, TimestampMs};

/// A test client: one identity, able to sign submissions.
pub struct Client {
    signing_key: SigningKey,
}

/// Which wire encoding the client emits for its signatures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SigEncoding {
    /// 64-byte `r‖s`, as browser-native crypto APIs produce.
    FixedWidth,
    /// ASN.1 DER, as most other signing stacks produce.
    Der,
}

impl Client {
    pub fn new() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::rngs::OsRng),
        }
    }

    /// The 130-char hex encoding of this client's public key.
    pub fn public_key_hex(&self) -> String {
        hex::encode(
            self.signing_key
                .verifying_key()
                .to_encoded_point(false)
                .as_bytes(),
        )
    }

    /// Expected display handle for this client.
    pub fn handle(&self) -> String {
        self.public_key_hex()[..8].to_string()
    }

    fn sign_hex(&self, message: &str, encoding: SigEncoding) -> String {
        let sig: Signature = self.signing_key.sign(message.as_bytes());
        match encoding {
            SigEncoding::FixedWidth => hex::encode(sig.to_bytes()),
            SigEncoding::Der => hex::encode(sig.to_der().as_bytes()),
        }
    }

    /// A fully signed thread submission.
    pub fn thread(
        &self,
        title: &str,
        content: &str,
        timestamp: TimestampMs,
        ttl_minutes: Option<i64>,
        encoding: SigEncoding,
    ) -> ThreadSubmission {
        let message = format!("{title}|{content}|{timestamp}");
        ThreadSubmission {
            title: title.into(),
            content: content.into(),
            timestamp,
            signature: self.sign_hex(&message, encoding),
            public_key: self.public_key_hex(),
            ttl_minutes,
        }
    }

    /// A fully signed reply submission.
    pub fn reply(
        &self,
        content: &str,
        parent_id: ThreadId,
        timestamp: TimestampMs,
        encoding: SigEncoding,
    ) -> ReplySubmission {
        let message = format!("{content}|{parent_id}|{timestamp}");
        ReplySubmission {
            content: content.into(),
            parent_id,
            timestamp,
            signature: self.sign_hex(&message, encoding),
            public_key: self.public_key_hex(),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
