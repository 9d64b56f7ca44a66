//! Codefolio - headless client core for the Codefolio portfolio API.
//!
//! This crate implements the session and data-synchronization layer that
//! sits between a rendering surface (the bundled terminal dashboard, or any
//! other UI) and the portfolio GraphQL endpoint:
//!
//! - [`store`] - persisted client state (token, theme, cached user) with
//!   memory and file backends
//! - [`auth`] - bearer credential store, login/logout, and the route guard
//! - [`graphql`] - wire contract, operation documents, and the request
//!   gateway with error normalization
//! - [`cache`] - stale-while-revalidate query cache with per-identity fetch
//!   coalescing and last-request-wins ordering
//! - [`resource`] - cache-backed CRUD hooks for projects, skills, and
//!   experiences, plus the profile and portfolio read hooks
//! - [`app`] - composition root wiring the above into one set of
//!   process-wide singletons
//! - [`config`] - TOML configuration and logging setup
//!
//! # Example
//!
//! ```no_run
//! use codefolio::app::App;
//! use codefolio::config::Config;
//!
//! # async fn run() -> codefolio::error::Result<()> {
//! let config = Config::default();
//! let app = App::new(&config)?;
//! app.auth().login("admin", "secret").await?;
//! let projects = app.projects().refetch().await?;
//! println!("{} projects", projects.len());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod auth;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod graphql;
pub mod resource;
pub mod store;
