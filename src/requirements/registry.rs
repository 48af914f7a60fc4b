//! Definitions of the external tools the build depends on.

/// An external tool checked during preflight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    /// Display name.
    pub name: &'static str,
    /// Executable names tried in order.
    pub candidates: &'static [&'static str],
    /// Arguments that make the tool print its version.
    pub version_args: &'static [&'static str],
    /// Exact command the operator should run to install the tool.
    pub install_command: &'static str,
}

impl Tool {
    /// The executable name to fall back on when the tool cannot be located.
    pub fn primary_executable(&self) -> &'static str {
        self.candidates.first().copied().unwrap_or(self.name)
    }
}

/// Python runtime; also used to run pip and the icon script.
pub const PYTHON: Tool = Tool {
    name: "Python 3",
    candidates: &["python3", "python"],
    version_args: &["--version"],
    install_command: "sudo apt install -y python3 python3-pip",
};

/// Java runtime required by the Android Gradle build.
pub const JAVA: Tool = Tool {
    name: "Java",
    candidates: &["java"],
    version_args: &["-version"],
    install_command: "sudo apt install -y openjdk-17-jdk",
};

/// The packaging tool itself. Installed automatically when missing.
pub const BUILDOZER: Tool = Tool {
    name: "Buildozer",
    candidates: &["buildozer"],
    version_args: &["--version"],
    install_command: "pip3 install --user buildozer",
};
