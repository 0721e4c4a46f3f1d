//! Translation module generator and runtime binder.
//!
//! The generator turns `;`-delimited translation tables into typed Rust
//! modules: a contract trait, a bindable manager and one implementation per
//! language. The [`i18n`] module is the runtime those modules depend on.

pub mod component;
pub mod config;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod i18n;
pub mod identifier;
pub mod namespace;
pub mod table;
pub mod validator;
