//! `PlanOutputObserver<W>` — bridges `RouteObserver` to a `PathWriter`.

use gw_route::{RouteObserver, RoutePlan};

use crate::writer::PathWriter;
use crate::{OutputError, OutputResult};

/// A [`RouteObserver`] that writes the finished plan's path to any
/// [`PathWriter`] and closes it.
///
/// Nothing is written when optimization fails.  Observer methods have no
/// return value, so the first write error is stored and retrieved with
/// [`take_error`][Self::take_error] after `optimize` returns.
pub struct PlanOutputObserver<W: PathWriter> {
    writer:     W,
    written:    bool,
    last_error: Option<OutputError>,
}

impl<W: PathWriter> PlanOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: false, last_error: None }
    }

    /// Whether a plan reached the writer.
    pub fn written(&self) -> bool {
        self.written
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: PathWriter> RouteObserver for PlanOutputObserver<W> {
    fn on_complete(&mut self, plan: &RoutePlan) {
        let result = self
            .writer
            .write_path(&plan.path)
            .and_then(|()| self.writer.finish());
        self.written = result.is_ok();
        self.store_err(result);
    }
}
