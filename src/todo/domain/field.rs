//! Presence marker for sparse update and request fields.
//!
//! [`Field`] distinguishes a value the caller never mentioned from one it
//! supplied, even when the supplied value is empty. Nullable columns use
//! `Field<Option<T>>`, so `Present(None)` means "clear the stored value".

use serde::{Deserialize, Deserializer};

/// A field that is either absent from a request or present with a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<T> {
    /// The caller did not mention the field.
    Absent,
    /// The caller supplied the field.
    Present(T),
}

impl<T> Field<T> {
    /// Returns `true` when the caller supplied the field.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Converts `&Field<T>` to `Field<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Present(value) => Field::Present(value),
            Self::Absent => Field::Absent,
        }
    }

    /// Returns the supplied value, if any.
    #[must_use]
    pub fn into_present(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Maps the supplied value, keeping absence.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Self::Present(value) => Field::Present(f(value)),
            Self::Absent => Field::Absent,
        }
    }

    /// Maps the supplied value through a fallible conversion.
    ///
    /// # Errors
    ///
    /// Returns the conversion error when the field is present and `f` fails.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Field<U>, E> {
        match self {
            Self::Present(value) => f(value).map(Field::Present),
            Self::Absent => Ok(Field::Absent),
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

/// Missing keys become [`Field::Absent`] through `#[serde(default)]`; a key
/// that is present always deserializes to [`Field::Present`].
impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::Present)
    }
}
