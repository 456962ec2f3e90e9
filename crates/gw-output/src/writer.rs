//! The `PathWriter` trait implemented by all path sinks.

use gw_spatial::Path;

use crate::OutputResult;

/// A sink for finished walks.
pub trait PathWriter {
    /// Append every coordinate of `path`, in walk order.
    fn write_path(&mut self, path: &Path) -> OutputResult<()>;

    /// Flush and close the underlying handle.
    ///
    /// Calling it again after the first time does nothing.
    fn finish(&mut self) -> OutputResult<()>;
}
