//! CRDB Version - CockroachDB release version identifiers
//!
//! CockroachDB versions look like semantic versions but are not: besides
//! `vX.Y.Z` they carry release phases (`-alpha.1`, `-rc.2`), cloud-only
//! sub-releases (`-beta.1-cloudonly-rc2`), adhoc build counters
//! (`-12-g9cbe7c5281`), and a handful of legacy labels. This crate parses all
//! of them, orders them, and converts them to and from storage formats.
//!
//! ## Types
//!
//! - [`MajorVersion`]: a release series such as `v25.1`
//! - [`Version`]: a full binary version; keeps its original text for display
//! - [`NullVersion`]: a version that may be absent, for nullable columns
//!
//! ## Features
//!
//! - `serde` (default): JSON representation as `{"$raw": "..."}` wrapper objects
//! - `sqlite` (default): rusqlite `ToSql`/`FromSql` column adapters
//!
//! ## Example
//!
//! ```rust
//! use crdb_version::Version;
//!
//! let rc = Version::parse("v24.1.0-rc.2").unwrap();
//! let adhoc = Version::parse("v24.1.0-rc.2-14-gabcdef").unwrap();
//! let stable = Version::parse("v24.1.0").unwrap();
//!
//! assert!(rc < adhoc && adhoc < stable);
//! assert!(rc.is_prerelease());
//! assert_eq!(rc.inc_pre_release().unwrap().to_string(), "v24.1.0-rc.3");
//! assert_eq!(adhoc.to_string(), "v24.1.0-rc.2-14-gabcdef");
//! ```
//!
//! Copyright (c) 2025 The Cockroach Authors
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod major;
pub mod null;
pub mod version;

mod adapters;

pub use error::{ErrorKind, Result, VersionError};
pub use major::MajorVersion;
pub use null::NullVersion;
pub use version::{ReleasePhase, Version};
