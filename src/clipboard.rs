//! System clipboard access.
//!
//! A thin wrapper around `arboard`. On Linux the clipboard needs an X11 or
//! Wayland session; without one every call fails with
//! [`ClipboardError::Unavailable`].
//!
//! An X11 or Wayland selection lives only as long as its owner. On Linux a
//! write keeps ownership for [`HANDOVER_WINDOW`] so a clipboard manager can
//! take the text over before `t2` exits.

use std::time::{Duration, Instant};

use crate::error::ClipboardError;

/// How long a Linux write holds the selection after setting it.
pub const HANDOVER_WINDOW: Duration = Duration::from_millis(500);

/// Somewhere to put (and optionally fetch) plain text.
pub trait ClipboardSink: Send + Sync {
    fn write(&self, text: &str) -> Result<(), ClipboardError>;

    fn read(&self) -> Result<String, ClipboardError>;
}

/// The OS clipboard. A fresh `arboard` handle is opened per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;
        set_text(&mut clipboard, text, handover_deadline(Instant::now()))
    }

    fn read(&self) -> Result<String, ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;
        Ok(clipboard.get_text()?)
    }
}

/// Deadline until which a Linux write keeps serving the selection.
fn handover_deadline(now: Instant) -> Instant {
    now + HANDOVER_WINDOW
}

#[cfg(target_os = "linux")]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    deadline: Instant,
) -> Result<(), ClipboardError> {
    use arboard::SetExtLinux;

    clipboard.set().wait_until(deadline).text(text.to_owned())?;
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _deadline: Instant,
) -> Result<(), ClipboardError> {
    clipboard.set_text(text.to_owned())?;
    Ok(())
}
