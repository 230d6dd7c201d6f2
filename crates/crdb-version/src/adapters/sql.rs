//! SQL column representation (rusqlite)
//!
//! Versions are stored as their original text. A [`Version`] column must not
//! be NULL; an empty string reads back as the empty version. A
//! [`NullVersion`] column maps NULL to the absent value and an empty string
//! to a valid-but-empty value.
//!
//! Read failures are boxed into [`FromSqlError::Other`] and can be downcast
//! to [`VersionError`].

use crate::error::VersionError;
use crate::null::NullVersion;
use crate::version::Version;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use tracing::debug;

const VERSION_TYPE: &str = "Version";

fn into_sql_error(err: VersionError) -> FromSqlError {
    FromSqlError::Other(Box::new(err))
}

/// Text content of a column, `None` for NULL
fn column_text<'a>(value: ValueRef<'a>) -> Result<Option<&'a str>, VersionError> {
    match value {
        ValueRef::Null => Ok(None),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes).map(Some).map_err(|_| {
            VersionError::TypeMismatch {
                expected: VERSION_TYPE,
                found: "non-UTF-8 text".to_string(),
            }
        }),
        other => {
            debug!(column_type = %other.data_type(), "version column holds a non-text value");
            Err(VersionError::TypeMismatch {
                expected: VERSION_TYPE,
                found: other.data_type().to_string(),
            })
        }
    }
}

/// Parse stored text; the empty string is the empty version
fn scan_version(text: &str) -> Result<Version, VersionError> {
    if text.is_empty() {
        Ok(Version::default())
    } else {
        Version::parse(text)
    }
}

impl ToSql for Version {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.raw.as_str()))
    }
}

impl FromSql for Version {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match column_text(value).map_err(into_sql_error)? {
            Some(text) => scan_version(text).map_err(into_sql_error),
            None => Err(into_sql_error(VersionError::RequiredValueMissing {
                expected: VERSION_TYPE,
            })),
        }
    }
}

impl ToSql for NullVersion {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        if self.valid {
            self.version.to_sql()
        } else {
            Ok(ToSqlOutput::Borrowed(ValueRef::Null))
        }
    }
}

impl FromSql for NullVersion {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match column_text(value).map_err(into_sql_error)? {
            Some(text) => Ok(NullVersion {
                valid: true,
                version: scan_version(text).map_err(into_sql_error)?,
            }),
            None => Ok(NullVersion::null()),
        }
    }
}
