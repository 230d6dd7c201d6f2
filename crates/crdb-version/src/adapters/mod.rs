//! Storage and wire representations
//!
//! - `json`: serde `Serialize`/`Deserialize` (feature `serde`)
//! - `sql`: rusqlite `ToSql`/`FromSql` (feature `sqlite`)
//!
//! Both adapters are plain trait impls on [`Version`](crate::Version) and
//! [`NullVersion`](crate::NullVersion); nothing here is exported by name.

#[cfg(feature = "serde")]
mod json;
#[cfg(feature = "sqlite")]
mod sql;
