use super::system::{HostEnvironment, PreferenceStore, ProcessControl};
use crate::error::{Error, Result};

pub const FINDER_DOMAIN: &str = "com.apple.finder";
pub const CREATE_DESKTOP_KEY: &str = "CreateDesktop";
pub const SHELL_PROCESS: &str = "Finder";
pub const TARGET_KERNEL: &str = "Darwin";

const SHOW: bool = true;
const HIDE: bool = false;

/// Shows, hides or toggles the desktop icons by flipping Finder's
/// `CreateDesktop` preference and restarting Finder.
///
/// Nothing is cached: every decision is made on a fresh read of the
/// preference store.
pub struct IconVisibilityController<S, P> {
    store: S,
    shell: P,
}

impl<S: PreferenceStore, P: ProcessControl> IconVisibilityController<S, P> {
    /// Fails with `UnsupportedPlatform` unless `host` reports a Darwin kernel.
    /// The store and shell are not touched here.
    pub fn new<H: HostEnvironment>(host: &H, store: S, shell: P) -> Result<Self> {
        let kernel = host.kernel_name()?;
        if !kernel.starts_with(TARGET_KERNEL) {
            return Err(Error::UnsupportedPlatform {
                kernel: kernel.trim().to_string(),
            });
        }
        log::debug!("kernel {:?}", kernel.trim());
        Ok(IconVisibilityController { store, shell })
    }

    pub fn show(&self) -> Result<bool> {
        self.desktop_icons(SHOW)
    }

    pub fn hide(&self) -> Result<bool> {
        self.desktop_icons(HIDE)
    }

    /// Always writes (the negation never equals the current value) and
    /// restarts Finder, then reads the key back.
    pub fn toggle(&self) -> Result<bool> {
        let visible = self.inverted_setting()?;
        self.write_preference(visible)?;
        self.restart_shell();
        self.is_showing()
    }

    /// Read, invert and write without restarting Finder, so the key can be
    /// inspected before Finder notices it. Returns the value read back.
    pub fn diagnose(&self) -> Result<bool> {
        let current = self.is_showing()?;
        log::debug!("icons showing: {}", current);
        let inverted = self.inverted_setting()?;
        log::debug!("inverted setting: {}", inverted);
        self.write_preference(inverted)?;
        let after = self.is_showing()?;
        log::debug!("icons showing after write: {}", after);
        Ok(after)
    }

    // only the exact token "true" counts, anything else (empty, error text,
    // "1", missing key) means hidden
    fn is_showing(&self) -> Result<bool> {
        let raw = self.store.read(FINDER_DOMAIN, CREATE_DESKTOP_KEY)?;
        Ok(chomp(&raw) == "true")
    }

    fn inverted_setting(&self) -> Result<bool> {
        Ok(!self.is_showing()?)
    }

    fn write_preference(&self, visible: bool) -> Result<()> {
        let token = if visible { "true" } else { "false" };
        log::info!("setting {} {} to {}", FINDER_DOMAIN, CREATE_DESKTOP_KEY, token);
        self.store.write(FINDER_DOMAIN, CREATE_DESKTOP_KEY, token)
    }

    // best effort, launchd brings Finder back
    fn restart_shell(&self) {
        match self.shell.kill(SHELL_PROCESS) {
            Ok(()) => log::debug!("restarted {}", SHELL_PROCESS),
            Err(e) => log::warn!("could not restart {}: {}", SHELL_PROCESS, e),
        }
    }

    fn desktop_icons(&self, visible: bool) -> Result<bool> {
        if self.is_showing()? == visible {
            log::info!("icons already {}", if visible { "shown" } else { "hidden" });
            return Ok(visible);
        }
        self.write_preference(visible)?;
        self.restart_shell();
        self.is_showing()
    }
}

// drops a single trailing line ending, nothing else
fn chomp(s: &str) -> &str {
    if let Some(stripped) = s.strip_suffix("\r\n") {
        stripped
    } else if let Some(stripped) = s.strip_suffix('\n') {
        stripped
    } else if let Some(stripped) = s.strip_suffix('\r') {
        stripped
    } else {
        s
    }
}
