//! # CivilForge Backend
//!
//! Backend scaffold for the CivilForge building-design platform.
//!
//! This crate accepts a project brief (location, usage, floors, footprint) and
//! deterministically derives a layout sketch, a structural skeleton sketch, an
//! SSR/SOR-based cost estimate, and an execution task list from fixed lookup
//! tables and simple arithmetic. The "engines" are placeholder heuristics
//! pending integration with an external solver; the backend exposes them as a
//! REST API via Axum.
//!
//! ## Features
//!
//! - **Intake**: Validated project briefs with code/structure-type dedup
//! - **Layout**: Usage-template room schedules with efficiency and parking
//! - **Structure**: Column/beam counts, slab and foundation selection,
//!   seismic and wind zone lookup by location
//! - **Estimation**: SSR/SOR rate tables, BOQ lines, contingency and GST
//! - **Execution**: Static task template with dependencies, plus drawings,
//!   compliance checks, export links, and a risk register
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and the consolidated DTO surface
//! - [`config`]: Settings loaded from `civilforge.toml` and the environment
//! - [`models`]: Request, project aggregate, and derived sub-results
//! - [`services`]: The derivation pipeline (pure functions)
//! - [`store`]: Unbounded in-memory project map
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;
pub mod http;
pub mod models;
pub mod services;
pub mod store;
