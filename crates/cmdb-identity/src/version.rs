//! Three-component versions in dotted (`1.2.34`) and storage (`1_2_34`) form.

use std::fmt;
use std::str::FromStr;

use crate::errors::{CodecError, log_rejection, parse_unsigned, separators};

/// One of the three version components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Index 0.
    Major,
    /// Index 1.
    Minor,
    /// Index 2.
    Patch,
}

impl Component {
    /// Return the component name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<usize> for Component {
    type Error = CodecError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Major),
            1 => Ok(Self::Minor),
            2 => Ok(Self::Patch),
            _ => Err(CodecError::ComponentIndex { index }),
        }
    }
}

/// A `major.minor.patch` version of a configuration type.
///
/// Ordering compares major, then minor, then patch.
///
/// # Examples
/// ```
/// use cmdb_identity::{Component, Version};
/// let version: Version = "1.2.34".parse().expect("well-formed version");
/// assert_eq!(version.to_storage(), "1_2_34");
/// let bumped = version.increase(Component::Minor).expect("no overflow");
/// assert_eq!(bumped.to_string(), "1.3.34");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Major component.
    pub major: u64,
    /// Minor component.
    pub minor: u64,
    /// Patch component.
    pub patch: u64,
}

impl Version {
    /// Create a version from its components.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    fn from_parts(input: &str, separator: char) -> Result<Self, CodecError> {
        let mut parts = input.split(separator);
        let (Some(major), Some(minor), Some(patch), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(separators(input, separator, 2));
        };
        Ok(Self {
            major: parse_unsigned(input, major)?,
            minor: parse_unsigned(input, minor)?,
            patch: parse_unsigned(input, patch)?,
        })
    }

    /// Parse the underscore-separated storage form.
    ///
    /// # Errors
    /// Returns [`CodecError`] unless the input holds exactly three
    /// non-negative integers separated by `_`.
    pub fn from_storage(stored: &str) -> Result<Self, CodecError> {
        Self::from_parts(stored, '_')
    }

    /// Render the underscore-separated storage form.
    #[must_use]
    pub fn to_storage(&self) -> String {
        format!("{}_{}_{}", self.major, self.minor, self.patch)
    }

    /// Return the value of a single component.
    #[must_use]
    pub const fn get(&self, component: Component) -> u64 {
        match component {
            Component::Major => self.major,
            Component::Minor => self.minor,
            Component::Patch => self.patch,
        }
    }

    /// Increase one component by one, leaving the other two unchanged.
    ///
    /// # Errors
    /// Returns [`CodecError::Overflow`] if the component is already
    /// `u64::MAX`.
    pub fn increase(&self, component: Component) -> Result<Self, CodecError> {
        let next = self
            .get(component)
            .checked_add(1)
            .ok_or_else(|| CodecError::Overflow {
                version: self.to_string(),
                component,
            })?;
        let mut bumped = *self;
        match component {
            Component::Major => bumped.major = next,
            Component::Minor => bumped.minor = next,
            Component::Patch => bumped.patch = next,
        }
        Ok(bumped)
    }
}

impl FromStr for Version {
    type Err = CodecError;

    fn from_str(dotted: &str) -> Result<Self, Self::Err> {
        Self::from_parts(dotted, '.')
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Convert a stored version (`1_2_34`) to its dotted form (`1.2.34`).
///
/// The digits are carried over verbatim, so the conversion round-trips with
/// [`version_stringify`].
///
/// # Errors
/// Returns [`CodecError`] for anything other than three `_`-separated
/// non-negative integers.
///
/// # Examples
/// ```
/// use cmdb_identity::version_parse;
/// assert_eq!(version_parse("1_2_34").as_deref(), Ok("1.2.34"));
/// ```
pub fn version_parse(stored: &str) -> Result<String, CodecError> {
    log_rejection(stored, Version::from_storage(stored))?;
    Ok(stored.replace('_', "."))
}

/// Convert a dotted version (`1.2.34`) to its stored form (`1_2_34`).
///
/// # Errors
/// Returns [`CodecError`] for anything other than three `.`-separated
/// non-negative integers.
///
/// # Examples
/// ```
/// use cmdb_identity::version_stringify;
/// assert_eq!(version_stringify("1.2.34").as_deref(), Ok("1_2_34"));
/// ```
pub fn version_stringify(dotted: &str) -> Result<String, CodecError> {
    log_rejection(dotted, dotted.parse::<Version>())?;
    Ok(dotted.replace('.', "_"))
}

/// Increase the component at `index` (0 major, 1 minor, 2 patch) of a dotted
/// version by one.
///
/// # Errors
/// Returns [`CodecError`] for a malformed version, an index above 2 or an
/// overflowing component.
///
/// # Examples
/// ```
/// use cmdb_identity::version_increase;
/// assert_eq!(version_increase("1.2.34", 0).as_deref(), Ok("2.2.34"));
/// assert_eq!(version_increase("1.2.34", 1).as_deref(), Ok("1.3.34"));
/// ```
pub fn version_increase(dotted: &str, index: usize) -> Result<String, CodecError> {
    let bumped = log_rejection(
        dotted,
        dotted
            .parse::<Version>()
            .and_then(|version| version.increase(Component::try_from(index)?)),
    )?;
    Ok(bumped.to_string())
}
