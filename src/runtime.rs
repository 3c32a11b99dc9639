//! One-time async-mode activation
//!
//! The renderer's asynchronous integration is a process-lifetime setup, not
//! per-question state: the first async ask switches the runtime into a mode
//! compatible with interactive terminal IO, and later asks must not repeat
//! it. [`AsyncRuntimeMode`] enforces "activate at most once" by
//! construction instead of by convention.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::error::Result;

/// Future returned by an activation hook.
pub type ActivationFuture = Pin<Box<dyn Future<Output = Result<()>> + Send>>;

/// Hook performing the one-time runtime activation.
pub type ActivationHook = Arc<dyn Fn() -> ActivationFuture + Send + Sync>;

/// One-time-initialization primitive guarding async-mode activation.
pub struct AsyncRuntimeMode {
    activated: OnceCell<()>,
}

impl AsyncRuntimeMode {
    pub const fn new() -> Self {
        Self { activated: OnceCell::const_new() }
    }

    /// Whether a prior activation has completed.
    pub fn is_activated(&self) -> bool {
        self.activated.initialized()
    }

    /// Run `activate` unless a prior call already completed it.
    ///
    /// Concurrent callers rendezvous on the same in-flight activation. A
    /// failed activation leaves the mode unset, so the next ask retries.
    pub async fn ensure_activated<F, Fut>(&self, activate: F) -> Result<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        self.activated.get_or_try_init(activate).await?;
        Ok(())
    }
}

impl Default for AsyncRuntimeMode {
    fn default() -> Self {
        Self::new()
    }
}

static ASYNC_MODE: AsyncRuntimeMode = AsyncRuntimeMode::new();

/// The process-wide activation state shared by every question.
pub fn process_mode() -> &'static AsyncRuntimeMode {
    &ASYNC_MODE
}

/// Set once a user interrupt has been observed by the bridge handler.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Whether an interrupt arrived since the flag was last cleared.
pub fn interrupt_pending() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Clear the pending-interrupt flag.
pub fn clear_interrupt() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}

pub(crate) fn default_activation_hook() -> ActivationHook {
    Arc::new(|| Box::pin(activate_async_mode()))
}

/// Default activation: bridge user interrupts and probe the blocking pool.
///
/// The terminal backend raises SIGINT when the user hits Ctrl-C inside a
/// raw-mode read; without a handler installed the process dies before the
/// interrupted read error can surface to the adapter.
async fn activate_async_mode() -> Result<()> {
    install_interrupt_bridge();

    // Prompts run on the blocking pool; fail activation early if terminal
    // IO is not reachable from there.
    tokio::task::spawn_blocking(|| {
        use std::io::Write;
        std::io::stdout().flush()
    })
    .await??;

    log::debug!("Async prompt mode activated.");
    Ok(())
}

static BRIDGE_INSTALLED: AtomicBool = AtomicBool::new(false);

fn install_interrupt_bridge() {
    if BRIDGE_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    // The embedding application may own the handler already; that serves
    // the same purpose, so a failure here is not fatal.
    if let Err(e) = ctrlc::set_handler(|| {
        INTERRUPTED.store(true, Ordering::SeqCst);
    }) {
        log::warn!("Could not install Ctrl-C handler: {e}");
    }
}
