//! Strategy plugins
//!
//! A strategy turns one trimmed window into an edit script, composing the
//! toolbox primitives however it sees fit. The engine keeps a name-keyed
//! registry; the built-ins cover the common cases and external callers may
//! register their own.

pub mod common_ses;
pub mod patience;
pub mod preserve;

pub use common_ses::CommonSes;
pub use patience::PatienceDiff;
pub use preserve::PreserveStructure;

use crate::algorithm::Region;
use crate::error::DiffError;
use crate::script::RawOp;
use crate::toolbox::Toolbox;

/// Registry name of [`CommonSes`], the default strategy.
pub const COMMON_SES: &str = "commonSES";
/// Registry name of [`PatienceDiff`].
pub const PATIENCE_DIFF: &str = "patienceDiff";
/// Registry name of [`PreserveStructure`].
pub const PRESERVE_STRUCTURE: &str = "preserveStructure";

/// Contract for strategy plugins.
///
/// `window` is the trimmed interior region; the returned script covers
/// exactly that window. The engine prepends and appends the trimmed
/// `EQUAL` affixes itself.
pub trait DiffStrategy: Send + Sync {
    /// Compute the edit script body for `window`.
    fn compute(&self, toolbox: &mut Toolbox<'_>, window: Region) -> Result<Vec<RawOp>, DiffError>;
}
