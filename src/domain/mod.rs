//! Domain layer containing business rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, errors)
//! - `entitlement` - Free-tier quota, subscription flag, user profile
//! - `journal` - Journal entries, newest first
//! - `localization` - Supported locales
//! - `symptom` - Symptom decoding record and prompt
//! - `technique` - Self-help technique catalog and prompt

pub mod entitlement;
pub mod foundation;
pub mod journal;
pub mod localization;
pub mod symptom;
pub mod technique;
