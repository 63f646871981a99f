#[cfg(unix)]
use std::process::{Command, Stdio};

use crate::error::Result;
use crate::service::system::HostEnvironment;

/// `uname -s` where there is one, the compile-time OS name elsewhere. If uname
/// can't be spawned the kernel name is empty, which the controller rejects as
/// an unsupported platform.
pub struct Uname;

impl HostEnvironment for Uname {
    fn kernel_name(&self) -> Result<String> {
        Ok(host_kernel())
    }
}

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        fn host_kernel() -> String {
            match Command::new("uname").arg("-s").stderr(Stdio::null()).output() {
                Ok(output) => String::from_utf8_lossy(&output.stdout).trim().to_string(),
                Err(e) => {
                    log::debug!("uname failed: {}", e);
                    String::new()
                }
            }
        }
    } else {
        fn host_kernel() -> String {
            std::env::consts::OS.to_string()
        }
    }
}

pub fn system_host() -> Uname {
    Uname
}

pub fn system_store() -> crate::macos::helper::Defaults {
    crate::macos::helper::Defaults
}

pub fn system_shell() -> crate::macos::helper::Pkill {
    crate::macos::helper::Pkill
}
