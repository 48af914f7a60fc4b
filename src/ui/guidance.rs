//! Canned guidance text shown around the build.
//!
//! Remediation advice for each terminal outcome lives here so the flow code
//! only decides *which* block to show.

use std::path::Path;

/// Heading shown above [`PLATFORM_ALTERNATIVES`].
pub const PLATFORM_ALTERNATIVES_TITLE: &str = "Build the APK from one of these environments instead:";

/// Environments that can run the build when the host is not Linux.
pub const PLATFORM_ALTERNATIVES: &[&str] = &[
    "WSL2 on Windows: install Ubuntu from the Microsoft Store and run this tool inside it",
    "GitHub Actions: run the build on an ubuntu-latest runner and download the APK artifact",
    "Google Colab: upload the project to a notebook, install buildozer there and build",
];

/// The build mode menu.
pub const MODE_MENU: &[&str] = &[
    "Select build type:",
    "  1) Debug   (for testing, unsigned)",
    "  2) Release (for distribution, requires signing)",
];

/// Checklist printed when a debug build fails.
pub const DEBUG_TROUBLESHOOTING: &[&str] = &[
    "Check your internet connection: the first build downloads the Android SDK and NDK",
    "Make sure at least 10 GB of disk space is free",
    "Clean the build and retry: buildozer android clean",
    "Check the requirements line in buildozer.spec",
    "Rerun with verbose output: buildozer -v android debug",
];

/// Checklist printed when a release build fails.
pub const RELEASE_TROUBLESHOOTING: &[&str] = &[
    "Make sure a debug build succeeds first",
    "Check the keystore settings in buildozer.spec",
    "Clean the build and retry: buildozer android clean",
    "Rerun with verbose output: buildozer -v android release",
];

/// Reminder printed after a successful release build.
pub const RELEASE_SIGNING_REMINDER: &[&str] = &[
    "Release packages must be signed before they can be installed or published.",
    "Sign with apksigner (or jarsigner) using your keystore, then zipalign the result.",
];

/// Ways to get a debug package onto a phone.
pub fn debug_install_instructions(artifact_dir: &Path) -> Vec<String> {
    vec![
        "Install on your phone:".to_string(),
        "  1. Copy the APK to the phone (USB cable, cloud drive, or email)".to_string(),
        "  2. Enable \"Install from unknown sources\" in the phone's security settings".to_string(),
        format!(
            "  3. Or serve it over Wi-Fi: cd {} && python3 -m http.server 8000",
            artifact_dir.display()
        ),
        "     then open http://<this-machine-ip>:8000 in the phone's browser".to_string(),
    ]
}
