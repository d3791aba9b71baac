// src/builders/mod.rs
//! # Builders
//!
//! This module provides builder patterns for constructing a configured hasher.
//!
//! ## Modules
//!
//! - [`hasher_builder`] - Builder for [`CredentialHasher`](crate::CredentialHasher)
//!
//! ## Usage
//!
//! Builders provide a fluent API with strong defaults; every setting is
//! validated once, in `build()`.

pub mod hasher_builder;

pub use hasher_builder::CredentialHasherBuilder;
