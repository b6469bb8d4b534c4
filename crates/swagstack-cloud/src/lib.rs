//! swagstack provider host
//!
//! This crate lets swagstack manage resource types it has no built-in
//! knowledge of. A dynamic provider implements a small set of lifecycle
//! hooks; the engine decides which hook to call and records the result.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   swag CLI                       │
//! │                 (swag plan/up)                   │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │               swagstack-cloud                    │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │  Engine (plan / apply)                    │   │
//! │  │  trait DynamicProvider { create, ... }    │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐            │
//! │  │ Plan/Actions │  │  State Mgmt  │            │
//! │  └──────────────┘  └──────────────┘            │
//! └───────┬─────────────────────────────────────────┘
//!         │
//! ┌───────▼───────┐
//! │ swag-webhook  │
//! │   provider    │
//! └───────────────┘
//! ```
//!
//! Providers that only implement `create` are create-only: a created
//! resource is never updated or deleted by the engine.

pub mod action;
pub mod engine;
pub mod error;
pub mod provider;
pub mod state;

// Re-exports
pub use action::{Action, ActionResult, ActionType, ApplyResult, Plan, PlanSummary};
pub use engine::Engine;
pub use error::{CloudError, Result};
pub use provider::{
    Capabilities, CreateResult, DiffResult, DynamicProvider, ReadResult, ResourceConfig,
    ResourceSet,
};
pub use state::{GlobalState, ResourceState, StateLock, StateManager};
