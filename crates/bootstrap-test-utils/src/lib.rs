//! Shared test utilities for the project-bootstrapper workspace.
//!
//! This crate provides standardised test doubles and fixtures. It is a
//! dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`git`] - assertions about git repositories on disk
//! - [`github`] - [`FakeRepositoryClient`](github::FakeRepositoryClient) recording remote calls
//! - [`runner`] - command runners that fail on demand
//! - [`workspace`] - temporary base directories

pub mod git;
pub mod github;
pub mod runner;
pub mod workspace;
