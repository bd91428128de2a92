//! Warm-up: turns serial strings into a fixed pool of encoded requests.
use rand::Rng;
use tracing::debug;

use crate::error::{AppResult, PoolError};
use crate::ocsp::{
    IssuerCertificate, IssuerKeyHash, RequestMessage, SerialNumber, build_request, issuer_key_hash,
};

/// Read-only, non-empty set of pre-built status requests.
#[derive(Debug, Clone)]
pub struct RequestPool {
    requests: Vec<RequestMessage>,
}

impl RequestPool {
    /// Hashes the issuer key and builds one request per usable serial.
    ///
    /// # Errors
    ///
    /// Returns an error when the issuer key cannot be hashed or when no serial
    /// produced a request.
    pub fn build<S>(serials: &[S], issuer: &IssuerCertificate) -> AppResult<Self>
    where
        S: AsRef<str>,
    {
        let key_hash = issuer_key_hash(issuer)?;
        Ok(Self::from_serials(serials, &key_hash)?)
    }

    /// Builds requests for every serial that parses and encodes, skipping the
    /// rest.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Empty`] when nothing usable remains.
    pub fn from_serials<S>(serials: &[S], key_hash: &IssuerKeyHash) -> Result<Self, PoolError>
    where
        S: AsRef<str>,
    {
        let mut requests = Vec::with_capacity(serials.len());
        for raw in serials {
            let raw = raw.as_ref();
            let request = raw
                .parse::<SerialNumber>()
                .and_then(|serial| build_request(&serial, key_hash));
            match request {
                Ok(request) => requests.push(request),
                Err(err) => debug!("Skipping serial '{}': {}", raw, err),
            }
        }
        if requests.is_empty() {
            return Err(PoolError::Empty {
                attempted: serials.len(),
            });
        }
        Ok(Self { requests })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Always false for a constructed pool.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RequestMessage> {
        self.requests.get(index)
    }

    /// Picks one request uniformly at random.
    pub fn pick<R>(&self, rng: &mut R) -> Option<&RequestMessage>
    where
        R: Rng + ?Sized,
    {
        if self.requests.is_empty() {
            return None;
        }
        self.requests.get(rng.gen_range(0..self.requests.len()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RequestMessage> {
        self.requests.iter()
    }
}
