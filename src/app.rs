//! Composition root.
//!
//! All process-wide singletons (state store, token store, cache, gateway,
//! hooks, guard) are constructed here once at startup and shared by `Arc`;
//! nothing in the crate keeps ambient global state.

use std::sync::Arc;
use url::Url;

use crate::auth::{AuthClient, AuthGuard, TokenStore};
use crate::cache::QueryCache;
use crate::config::Config;
use crate::domain::{Experience, ExperienceInput, Project, ProjectInput, Skill, SkillInput};
use crate::error::Result;
use crate::graphql::RequestGateway;
use crate::resource::{self, Collection, PortfolioHook, ProfileHook};
use crate::store::{self, FileStore, StateStore, Theme};

pub struct App {
    state: Arc<dyn StateStore>,
    tokens: Arc<TokenStore>,
    cache: Arc<QueryCache>,
    gateway: Arc<RequestGateway>,
    auth: AuthClient,
    guard: AuthGuard,
    profile: ProfileHook,
    portfolio: PortfolioHook,
    projects: Collection<Project, ProjectInput>,
    skills: Collection<Skill, SkillInput>,
    experiences: Collection<Experience, ExperienceInput>,
}

impl App {
    /// Wire the application against the configured endpoint, persisting
    /// client state to the configured file.
    pub fn new(config: &Config) -> Result<Self> {
        let state: Arc<dyn StateStore> = Arc::new(FileStore::open(config.state_path())?);
        Self::with_store(config, state)
    }

    /// Wire the application over a caller-supplied state store. Used by
    /// tests and by callers that want ephemeral sessions.
    pub fn with_store(config: &Config, state: Arc<dyn StateStore>) -> Result<Self> {
        let endpoint = Url::parse(&config.network.graphql_url)?;
        let tokens = Arc::new(TokenStore::new(Arc::clone(&state)));
        let gateway = Arc::new(RequestGateway::over_http(endpoint, Arc::clone(&tokens)));
        let cache = Arc::new(QueryCache::new());

        let auth = AuthClient::new(
            Arc::clone(&gateway),
            Arc::clone(&tokens),
            Arc::clone(&state),
        );
        let guard = AuthGuard::new(Arc::clone(&tokens));
        let profile = ProfileHook::new(Arc::clone(&gateway), Arc::clone(&cache));
        let portfolio = PortfolioHook::new(Arc::clone(&gateway), Arc::clone(&cache));
        let projects = resource::projects(Arc::clone(&gateway), Arc::clone(&cache));
        let skills = resource::skills(Arc::clone(&gateway), Arc::clone(&cache));
        let experiences = resource::experiences(Arc::clone(&gateway), Arc::clone(&cache));

        Ok(Self {
            state,
            tokens,
            cache,
            gateway,
            auth,
            guard,
            profile,
            portfolio,
            projects,
            skills,
            experiences,
        })
    }

    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    pub fn guard(&self) -> &AuthGuard {
        &self.guard
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    pub fn gateway(&self) -> &Arc<RequestGateway> {
        &self.gateway
    }

    pub fn profile(&self) -> &ProfileHook {
        &self.profile
    }

    pub fn portfolio(&self) -> &PortfolioHook {
        &self.portfolio
    }

    pub fn projects(&self) -> &Collection<Project, ProjectInput> {
        &self.projects
    }

    pub fn skills(&self) -> &Collection<Skill, SkillInput> {
        &self.skills
    }

    pub fn experiences(&self) -> &Collection<Experience, ExperienceInput> {
        &self.experiences
    }

    pub fn theme(&self) -> Option<Theme> {
        store::theme(self.state.as_ref())
    }

    pub fn set_theme(&self, theme: Theme) {
        store::set_theme(self.state.as_ref(), theme);
    }
}
