//! Scoped terminal-output patching during interactive renders
//!
//! While a prompt application owns the terminal, output written by other
//! parts of the program can tear its rendering, and an aborted run can
//! leave the cursor hidden. A [`PatchScope`] brackets a run: it begins the
//! patched region before the renderer takes over and ends it on every exit
//! path, normal return and error propagation alike.

use std::io::{self, Write};
use std::sync::Arc;

use console::Term;

use crate::error::Result;

/// Begin/end pair around a patched-stdout region.
///
/// `end` must be safe to call after a run that errored out halfway; the
/// guard does not know how the run finished.
pub trait StdoutPatcher: Send + Sync {
    /// Begin the patched region. Called once per scope.
    fn begin(&self) -> Result<()>;

    /// End the patched region. Called exactly once, on every exit path.
    fn end(&self);
}

/// Default patcher backed by the process terminal.
pub struct TermPatcher {
    term: Term,
}

impl TermPatcher {
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Default for TermPatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutPatcher for TermPatcher {
    fn begin(&self) -> Result<()> {
        // Pending buffered text must land before the renderer redraws over it.
        io::stdout().flush()?;
        Ok(())
    }

    fn end(&self) {
        // An interrupted run leaves the renderer's hidden cursor behind.
        let _ = self.term.show_cursor();
        let _ = io::stdout().flush();
    }
}

/// RAII guard for a patched-stdout region.
pub struct PatchScope {
    patcher: Arc<dyn StdoutPatcher>,
}

impl PatchScope {
    /// Begin the region, returning the guard that ends it on drop.
    pub fn enter(patcher: Arc<dyn StdoutPatcher>) -> Result<Self> {
        patcher.begin()?;
        Ok(Self { patcher })
    }
}

impl Drop for PatchScope {
    fn drop(&mut self) {
        self.patcher.end();
    }
}
