//! Host platform detection.

/// Identifier of the host operating system.
///
/// On Linux this reports `linux-gnu` or `linux-musl` depending on the target
/// environment, mirroring the identifiers shells expose through `OSTYPE`.
pub fn host_os() -> String {
    match std::env::consts::OS {
        "linux" if cfg!(target_env = "musl") => "linux-musl".to_string(),
        "linux" => "linux-gnu".to_string(),
        "android" => "linux-android".to_string(),
        other => other.to_string(),
    }
}

/// Whether an OS identifier names a Linux-like environment.
pub fn is_linux_like(os: &str) -> bool {
    os.trim().to_ascii_lowercase().starts_with("linux")
}

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_identifiers_are_accepted() {
        assert!(is_linux_like("linux"));
        assert!(is_linux_like("linux-gnu"));
        assert!(is_linux_like("linux-gnueabihf"));
        assert!(is_linux_like("Linux"));
    }

    #[test]
    fn other_identifiers_are_rejected() {
        for os in ["macos", "darwin22", "windows", "msys", "cygwin", "freebsd", ""] {
            assert!(!is_linux_like(os), "{os} should not be linux-like");
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn host_os_is_linux_like_on_linux() {
        assert!(is_linux_like(&host_os()));
    }

    #[test]
    fn is_ci_does_not_panic() {
        let _ = is_ci();
    }
}
