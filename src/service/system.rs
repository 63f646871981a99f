// capabilities the controller needs from the host. production versions spawn
// uname/defaults/pkill, tests swap in the recorders from service::fake
use crate::error::Result;

pub trait HostEnvironment {
    /// Kernel name as reported by `uname -s`, e.g. "Darwin".
    fn kernel_name(&self) -> Result<String>;
}

pub trait PreferenceStore {
    /// Raw textual value of `domain key`. A missing key is not an error, it
    /// reads as whatever the store prints (usually nothing).
    fn read(&self, domain: &str, key: &str) -> Result<String>;

    fn write(&self, domain: &str, key: &str, value: &str) -> Result<()>;
}

pub trait ProcessControl {
    /// Terminate every process called `name`.
    fn kill(&self, name: &str) -> Result<()>;
}
