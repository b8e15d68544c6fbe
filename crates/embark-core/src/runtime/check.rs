//! Local SDK detection

use std::ffi::OsString;
use std::path::Path;

/// Is the Android SDK installed? `$ANDROID_HOME/tools` has to exist.
pub fn android_sdk_installed() -> bool {
    check_android_sdk(std::env::var_os("ANDROID_HOME"), |path| path.is_dir())
}

/// The probe is injected so the check stays a pure function of the
/// environment value and one filesystem query.
pub fn check_android_sdk<F>(android_home: Option<OsString>, probe: F) -> bool
where
    F: Fn(&Path) -> bool,
{
    match android_home {
        Some(home) if !home.is_empty() => probe(&Path::new(&home).join("tools")),
        _ => false,
    }
}
