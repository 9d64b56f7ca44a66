//! The profile hook: a server-side singleton record, read plus update.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::Arc;

use super::Flag;
use crate::cache::{OperationIdentity, QueryCache};
use crate::domain::{Profile, ProfileInput};
use crate::error::{Error, Result};
use crate::graphql::{documents, RequestGateway};

#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
    pub profile: Option<Profile>,
    pub loading: bool,
    pub error: Option<Arc<Error>>,
    pub fetched_at: Option<DateTime<Utc>>,
}

pub struct ProfileHook {
    gateway: Arc<RequestGateway>,
    cache: Arc<QueryCache>,
    identity: OperationIdentity,
    updating: Flag,
}

impl ProfileHook {
    pub fn new(gateway: Arc<RequestGateway>, cache: Arc<QueryCache>) -> Self {
        Self {
            gateway,
            cache,
            identity: OperationIdentity::new("getProfile", &json!({})),
            updating: Flag::default(),
        }
    }

    pub fn identity(&self) -> &OperationIdentity {
        &self.identity
    }

    /// Stale-while-revalidate read of the profile.
    pub fn read(&self) -> ProfileSnapshot {
        let gateway = Arc::clone(&self.gateway);
        let entry = self.cache.read(&self.identity, move || {
            let gateway = Arc::clone(&gateway);
            async move { gateway.send(documents::GET_PROFILE, json!({})).await }
        });

        let mut error = entry.error.clone();
        let profile = entry
            .data
            .as_ref()
            .and_then(|data| data.get("getProfile"))
            .and_then(|value| match value {
                Value::Null => None,
                other => match serde_json::from_value(other.clone()) {
                    Ok(profile) => Some(profile),
                    Err(e) => {
                        if error.is_none() {
                            error = Some(Arc::new(e.into()));
                        }
                        None
                    }
                },
            });

        ProfileSnapshot {
            loading: entry.is_initial_loading(),
            profile,
            error,
            fetched_at: entry.fetched_at,
        }
    }

    /// Fetch the profile now, writing through the cache.
    pub async fn refetch(&self) -> Result<Option<Profile>> {
        let data = self.gateway.send(documents::GET_PROFILE, json!({})).await?;
        let profile = match data.get("getProfile") {
            None | Some(Value::Null) => None,
            Some(value) => Some(serde_json::from_value(value.clone())?),
        };
        self.cache.write(&self.identity, data);
        Ok(profile)
    }

    /// Update the profile; on success the cached query is invalidated so
    /// the next read reflects server truth.
    pub async fn update(&self, input: &ProfileInput) -> Result<Profile> {
        let _guard = self.updating.begin();
        let mut data = self
            .gateway
            .send(documents::UPDATE_PROFILE, json!({ "input": input }))
            .await?;
        let profile = data
            .get_mut("updateProfile")
            .map(Value::take)
            .ok_or(Error::MissingData("updateProfile"))?;
        let profile: Profile = serde_json::from_value(profile)?;

        let gateway = Arc::clone(&self.gateway);
        self.cache.invalidate(&self.identity, move || {
            let gateway = Arc::clone(&gateway);
            async move { gateway.send(documents::GET_PROFILE, json!({})).await }
        });

        Ok(profile)
    }

    pub fn updating(&self) -> bool {
        self.updating.get()
    }
}
