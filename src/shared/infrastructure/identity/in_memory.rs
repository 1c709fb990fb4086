// In memory implementation of the IdentityResolver port.
//
// Purpose
// - Resolve the static token table loaded from configuration.
// - Support tests and local development without a session service.

use crate::shared::core::identity::{Identity, IdentityResolver};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct InMemoryIdentityResolver {
    tokens: HashMap<String, Identity>,
}

impl InMemoryIdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens(tokens: impl IntoIterator<Item = (String, Identity)>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>, identity: Identity) -> Self {
        self.tokens.insert(token.into(), identity);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait::async_trait]
impl IdentityResolver for InMemoryIdentityResolver {
    async fn resolve(&self, token: &str) -> anyhow::Result<Option<Identity>> {
        Ok(self.tokens.get(token).cloned())
    }
}
