//! Core 2-D differential-growth simulation library.
//!
//! A closed polyline evolves frame by frame under local forces (repulsion
//! from nearby nodes, attraction between cycle neighbors, alignment to the
//! neighbor midpoint) plus topology edits: overstretched edges split at
//! their midpoint and overcompressed edges collapse by pruning a node. A
//! fixed boundary polygon softly contains the growth.
//!
//! Main components:
//! - [`config`] — simulation configuration, validation and unit scaling.
//! - [`engine`] — the growth engine and its per-step pipeline.
//! - [`error`] — configuration error types.
//! - [`geometry`] — regular polygon generation and small point helpers.
//! - [`path`] — the closed polyline being grown.
//! - [`polygon`] — the fixed containment polygon.
//! - [`spatial`] — uniform grid for radius-bounded neighbor queries.
//! - [`types`] — shared type aliases.

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod path;
pub mod polygon;
pub mod spatial;
pub mod types;
