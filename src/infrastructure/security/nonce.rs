// src/infrastructure/security/nonce.rs
use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Duration;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{nonce::NonceManager, time::Clock},
};

type HmacSha256 = Hmac<Sha256>;

const MIN_SECRET_LEN: usize = 32;
const TAG_LEN: usize = 12;

/// Time-bucketed HMAC-SHA256 form tokens.
///
/// The lifetime is split into two ticks; a token verifies during the tick it
/// was issued in and the one after, so it lives between half and the full
/// lifetime.
#[derive(Clone)]
pub struct HmacNonceManager {
    secret: Vec<u8>,
    tick_secs: i64,
    clock: Arc<dyn Clock>,
}

impl HmacNonceManager {
    pub fn new(
        secret: impl AsRef<[u8]>,
        lifetime: Duration,
        clock: Arc<dyn Clock>,
    ) -> ApplicationResult<Self> {
        let secret = secret.as_ref().to_vec();
        if secret.len() < MIN_SECRET_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "nonce secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }

        Ok(Self {
            secret,
            tick_secs: (lifetime.num_seconds() / 2).max(1),
            clock,
        })
    }

    fn tick(&self) -> i64 {
        self.clock.now().timestamp().div_euclid(self.tick_secs) + 1
    }

    fn mac(&self, tick: i64, action: &str) -> Option<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(&self.secret).ok()?;
        mac.update(tick.to_string().as_bytes());
        mac.update(b"|");
        mac.update(action.as_bytes());
        Some(mac)
    }
}

impl NonceManager for HmacNonceManager {
    fn create(&self, action: &str) -> String {
        self.mac(self.tick(), action)
            .map(|mac| {
                let tag = mac.finalize().into_bytes();
                URL_SAFE_NO_PAD.encode(&tag[..TAG_LEN])
            })
            .unwrap_or_default()
    }

    fn verify(&self, nonce: &str, action: &str) -> bool {
        let Ok(tag) = URL_SAFE_NO_PAD.decode(nonce) else {
            return false;
        };
        if tag.len() != TAG_LEN {
            return false;
        }

        let tick = self.tick();
        [tick, tick - 1].into_iter().any(|candidate| {
            self.mac(candidate, action)
                .is_some_and(|mac| mac.verify_truncated_left(&tag).is_ok())
        })
    }
}
