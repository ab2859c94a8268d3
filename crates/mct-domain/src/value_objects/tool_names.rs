//! Tool name list carried by tool-removal requests
//!
//! The list is optional on the wire, and "no list" is not the same as
//! "an empty list": the first means the message carries no removal
//! instruction, the second an instruction naming zero tools.
//!
//! | Value | Wire bytes |
//! |-------|------------|
//! | [`ToolNames::Absent`] | `00` |
//! | `Present([])` | `01 00` |
//! | `Present(["search"])` | `01 01 06 's' 'e' 'a' 'r' 'c' 'h'` |

use crate::error::Result;
use crate::transport::{Readable, StreamInput, StreamOutput, Writeable};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Optional, ordered list of tool identifiers
///
/// # Example
///
/// ```
/// use mct_domain::value_objects::ToolNames;
///
/// let absent = ToolNames::from(None);
/// let empty = ToolNames::from(Some(Vec::new()));
///
/// assert!(!absent.is_present());
/// assert!(empty.is_present());
/// assert_ne!(absent, empty);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Option<Vec<String>>")]
pub enum ToolNames {
    /// No tool list accompanies the message
    #[default]
    Absent,
    /// A tool list, possibly empty, in caller order
    Present(Vec<String>),
}

impl ToolNames {
    /// Whether a list is present (it may still be empty)
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// The listed names, or `None` when absent
    pub fn as_slice(&self) -> Option<&[String]> {
        match self {
            Self::Absent => None,
            Self::Present(names) => Some(names.as_slice()),
        }
    }

    /// Number of listed names; zero when absent
    pub fn len(&self) -> usize {
        self.as_slice().map_or(0, <[String]>::len)
    }

    /// Whether no names are listed, either because the list is absent or empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert into the plain optional form
    pub fn into_option(self) -> Option<Vec<String>> {
        self.into()
    }
}

impl From<Option<Vec<String>>> for ToolNames {
    fn from(names: Option<Vec<String>>) -> Self {
        names.map_or(Self::Absent, Self::Present)
    }
}

impl From<Vec<String>> for ToolNames {
    fn from(names: Vec<String>) -> Self {
        Self::Present(names)
    }
}

impl From<ToolNames> for Option<Vec<String>> {
    fn from(names: ToolNames) -> Self {
        match names {
            ToolNames::Absent => None,
            ToolNames::Present(names) => Some(names),
        }
    }
}

impl Writeable for ToolNames {
    fn write_to<W: Write>(&self, out: &mut StreamOutput<W>) -> Result<()> {
        match self {
            Self::Present(names) => {
                out.write_bool(true)?;
                out.write_string_array(names.as_slice())
            }
            Self::Absent => out.write_bool(false),
        }
    }
}

impl Readable for ToolNames {
    fn read_from<R: Read>(input: &mut StreamInput<R>) -> Result<Self> {
        if input.read_bool()? {
            Ok(Self::Present(input.read_list(StreamInput::read_string)?))
        } else {
            Ok(Self::Absent)
        }
    }
}
