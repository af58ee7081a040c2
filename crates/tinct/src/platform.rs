//! Console setup for terminals that do not interpret ANSI escapes natively.
//!
//! Legacy Windows consoles print escape sequences literally until virtual
//! terminal processing is switched on for the output handle. Everywhere else
//! this is a no-op.
//!
//! Call [`enable_ansi_console`] once at startup, before anything is printed.
//! It never fails: errors are logged and otherwise ignored, since rendering
//! does not depend on them.
//!
//! ```rust
//! use tinct::platform::{default_enabler, enable_ansi_console};
//!
//! enable_ansi_console(default_enabler().as_ref());
//! ```

use std::io;

/// Something that can switch the host console into ANSI mode.
pub trait ConsoleEnabler {
    /// Attempt to enable ANSI escape processing for stdout.
    fn enable(&self) -> io::Result<()>;

    /// Short label used in log events.
    fn name(&self) -> &'static str;
}

/// For terminals that already understand ANSI.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopConsole;

impl ConsoleEnabler for NoopConsole {
    fn enable(&self) -> io::Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}

/// Sets `ENABLE_VIRTUAL_TERMINAL_PROCESSING` on the stdout console handle.
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsConsole;

#[cfg(windows)]
impl ConsoleEnabler for WindowsConsole {
    fn enable(&self) -> io::Result<()> {
        use windows_sys::Win32::Foundation::INVALID_HANDLE_VALUE;
        use windows_sys::Win32::System::Console::{
            GetConsoleMode, GetStdHandle, SetConsoleMode, ENABLE_VIRTUAL_TERMINAL_PROCESSING,
            STD_OUTPUT_HANDLE,
        };

        // SAFETY: plain Win32 calls on the process's own stdout handle; `mode`
        // outlives the call that writes to it.
        unsafe {
            let handle = GetStdHandle(STD_OUTPUT_HANDLE);
            if handle == INVALID_HANDLE_VALUE || handle == 0 {
                return Err(io::Error::last_os_error());
            }
            let mut mode: u32 = 0;
            if GetConsoleMode(handle, &mut mode) == 0 {
                return Err(io::Error::last_os_error());
            }
            if mode & ENABLE_VIRTUAL_TERMINAL_PROCESSING != 0 {
                return Ok(());
            }
            if SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING) == 0 {
                return Err(io::Error::last_os_error());
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "windows"
    }
}

/// Returns the enabler for the current platform.
#[cfg(windows)]
pub fn default_enabler() -> Box<dyn ConsoleEnabler> {
    Box::new(WindowsConsole)
}

/// Returns the enabler for the current platform.
#[cfg(not(windows))]
pub fn default_enabler() -> Box<dyn ConsoleEnabler> {
    Box::new(NoopConsole)
}

/// Runs `enabler` once, logging and discarding any failure.
pub fn enable_ansi_console(enabler: &dyn ConsoleEnabler) {
    match enabler.enable() {
        Ok(()) => tracing::debug!(enabler = enabler.name(), "ANSI console enabled"),
        Err(err) => tracing::warn!(
            enabler = enabler.name(),
            error = %err,
            "could not enable ANSI console; escapes may print literally"
        ),
    }
}
