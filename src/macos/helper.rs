use std::process::{Command, Stdio};

use crate::error::Result;
use crate::service::system::{PreferenceStore, ProcessControl};

static DEFAULTS: &'static str = "defaults";
static PKILL: &'static str = "pkill";

/// The `defaults` command line tool (cfprefsd).
pub struct Defaults;

impl PreferenceStore for Defaults {
    // stdout only, like a shell backtick: a missing key prints to stderr and
    // exits non-zero, which reads back as an empty string
    fn read(&self, domain: &str, key: &str) -> Result<String> {
        log::debug!("{} read {} {}", DEFAULTS, domain, key);
        let output = Command::new(DEFAULTS)
            .args(&["read", domain, key])
            .stderr(Stdio::null())
            .output()?;
        if !output.status.success() {
            log::debug!("{} read exited with {}", DEFAULTS, output.status);
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    // untyped write on purpose: `-bool` would store 1/0 and break the
    // "true" string comparison on the way back
    fn write(&self, domain: &str, key: &str, value: &str) -> Result<()> {
        log::debug!("{} write {} {} {}", DEFAULTS, domain, key, value);
        let status = Command::new(DEFAULTS)
            .args(&["write", domain, key, value])
            .status()?;
        if !status.success() {
            log::warn!("{} write {} {} exited with {}", DEFAULTS, domain, key, status);
        }
        Ok(())
    }
}

/// Kills processes by name with `pkill`; launchd relaunches Finder.
pub struct Pkill;

impl ProcessControl for Pkill {
    fn kill(&self, name: &str) -> Result<()> {
        log::debug!("{} {}", PKILL, name);
        let status = Command::new(PKILL).arg(name).status()?;
        if !status.success() {
            log::warn!("{} {} exited with {}", PKILL, name, status);
        }
        Ok(())
    }
}
