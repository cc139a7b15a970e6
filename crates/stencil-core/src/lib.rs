//! Stencil Core Types and Definitions
//!
//! This crate provides the document model that symbol imports operate on:
//!
//! - **Identifiers**: Interned identifiers for symbols and keys ([`identifier::Id`])
//! - **Geometry**: Points, sizes and layer frames ([`geometry`] module)
//! - **Layers**: Symbol masters, instances, groups and shapes ([`layer`] module)
//! - **Documents**: Pages and the document-wide symbol collection ([`document`] module)
//! - **Storage**: Opening, closing and saving documents ([`store`] module)

pub mod document;
pub mod error;
pub mod geometry;
pub mod identifier;
pub mod layer;
pub mod store;

pub use error::DocumentError;
