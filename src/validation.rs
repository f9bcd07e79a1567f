//! Name validation shared by queues and the registry.

use tracing::warn;

use crate::error::{Error, Result};

/// What a validated name identifies, used in error messages and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameKind {
    Element,
    Queue,
}

impl NameKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Queue => "queue",
        }
    }
}

/// Validates an element or queue name.
///
/// Valid names:
/// - Must not be empty
/// - Must not contain null bytes
///
/// Any other text is accepted as-is; names are compared exactly and
/// case-sensitively.
pub(crate) fn validate_name(kind: NameKind, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_argument(format!(
            "{} name cannot be empty",
            kind.as_str()
        )));
    }

    if name.contains('\0') {
        warn!(
            kind = kind.as_str(),
            name = %name.replace('\0', "\\0"),
            reason = "null_byte",
            "Rejected name with null byte"
        );
        return Err(Error::invalid_argument(format!(
            "{} name cannot contain null bytes",
            kind.as_str()
        )));
    }

    Ok(())
}
