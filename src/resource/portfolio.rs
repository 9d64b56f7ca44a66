//! Read-only aggregate hook backing the public pages.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::cache::{OperationIdentity, QueryCache};
use crate::domain::Portfolio;
use crate::error::{Error, Result};
use crate::graphql::{documents, RequestGateway};

#[derive(Debug, Clone)]
pub struct PortfolioSnapshot {
    pub portfolio: Option<Portfolio>,
    pub loading: bool,
    pub error: Option<Arc<Error>>,
    pub fetched_at: Option<DateTime<Utc>>,
}

pub struct PortfolioHook {
    gateway: Arc<RequestGateway>,
    cache: Arc<QueryCache>,
    identity: OperationIdentity,
}

impl PortfolioHook {
    pub fn new(gateway: Arc<RequestGateway>, cache: Arc<QueryCache>) -> Self {
        Self {
            gateway,
            cache,
            identity: OperationIdentity::new("getPortfolio", &json!({})),
        }
    }

    pub fn identity(&self) -> &OperationIdentity {
        &self.identity
    }

    pub fn read(&self) -> PortfolioSnapshot {
        let gateway = Arc::clone(&self.gateway);
        let entry = self.cache.read(&self.identity, move || {
            let gateway = Arc::clone(&gateway);
            async move { gateway.send(documents::GET_PORTFOLIO, json!({})).await }
        });

        let mut error = entry.error.clone();
        let portfolio = entry
            .data
            .as_ref()
            .and_then(|data| data.get("getPortfolio"))
            .and_then(|value| match value {
                Value::Null => None,
                other => match serde_json::from_value(other.clone()) {
                    Ok(portfolio) => Some(portfolio),
                    Err(e) => {
                        if error.is_none() {
                            error = Some(Arc::new(e.into()));
                        }
                        None
                    }
                },
            });

        PortfolioSnapshot {
            loading: entry.is_initial_loading(),
            portfolio,
            error,
            fetched_at: entry.fetched_at,
        }
    }

    pub async fn refetch(&self) -> Result<Portfolio> {
        let data = self.gateway.send(documents::GET_PORTFOLIO, json!({})).await?;
        let portfolio = data
            .get("getPortfolio")
            .ok_or(Error::MissingData("getPortfolio"))?;
        let portfolio: Portfolio = serde_json::from_value(portfolio.clone())?;
        self.cache.write(&self.identity, data);
        Ok(portfolio)
    }
}
