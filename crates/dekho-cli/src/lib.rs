//! dekho-cli
//! =========
//!
//! Command-line interface for the `dekho-core` travel catalog.
//!
//! This crate primarily provides a binary (`dekho`). The library target
//! exists so that the crate gets a rendered documentation page with this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! dekho --help
//! dekho stats
//! dekho tree
//! dekho search go
//! dekho path varkala
//! dekho recommend leh --count 3
//! dekho --json node goa
//! ```
//!
//! For programmatic access to the catalog and its queries, use the
//! [`dekho-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// No public API; the binary is the deliverable.
