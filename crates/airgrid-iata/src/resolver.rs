//! Per-run memoizing wrapper around [`IataClient::lookup`].

use std::collections::HashMap;

use crate::client::IataClient;

/// Outcome of resolving one carrier code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AirlineLookup {
    Found(String),
    /// The directory answered but had no matching row.
    NotFound,
    /// The request itself failed; holds the error message.
    Failed(String),
}

impl AirlineLookup {
    /// The name to store in a table row: the resolved name or `fallback`.
    #[must_use]
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            AirlineLookup::Found(name) => name,
            AirlineLookup::NotFound | AirlineLookup::Failed(_) => fallback,
        }
    }
}

/// Resolves carrier codes to airline names, issuing at most one directory
/// request per distinct code for the resolver's lifetime.
///
/// Lookup failures degrade to [`AirlineLookup::Failed`] and are memoized
/// like any other outcome.
pub struct AirlineResolver<'a> {
    client: &'a IataClient,
    cache: HashMap<String, AirlineLookup>,
}

impl<'a> AirlineResolver<'a> {
    #[must_use]
    pub fn new(client: &'a IataClient) -> Self {
        Self {
            client,
            cache: HashMap::new(),
        }
    }

    pub async fn resolve(&mut self, carrier_code: &str) -> AirlineLookup {
        let key = carrier_code.trim().to_ascii_uppercase();
        if let Some(hit) = self.cache.get(&key) {
            return hit.clone();
        }

        let outcome = if key.is_empty() {
            AirlineLookup::NotFound
        } else {
            match self.client.lookup(&key).await {
                Ok(Some(name)) => AirlineLookup::Found(name),
                Ok(None) => {
                    tracing::info!(carrier_code = %key, "airline not listed in directory");
                    AirlineLookup::NotFound
                }
                Err(e) => {
                    tracing::warn!(carrier_code = %key, error = %e, "airline lookup failed");
                    AirlineLookup::Failed(e.to_string())
                }
            }
        };

        self.cache.insert(key, outcome.clone());
        outcome
    }

    /// Number of distinct codes resolved so far.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.cache.len()
    }
}
