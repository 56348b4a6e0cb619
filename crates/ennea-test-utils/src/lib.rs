//! Deterministic fixture catalogs for engine tests.
//!
//! All builders produce REAL, valid catalog data - no mocks. The point of
//! the fixtures is controlled sparseness: integration tests need catalogs
//! where specific styles or pairs are known to be absent, which the
//! complete built-in catalog cannot provide.

pub mod catalogs;

pub use catalogs::{
    empty_catalog, sample_pairing, sample_style, sparse_catalog,
};
