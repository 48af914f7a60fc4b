//! Build conventions.
//!
//! The wrapper has no config file: every value here is a fixed convention of
//! a buildozer project, gathered in one place so tests can point them at
//! temporary directories.

use std::path::{Path, PathBuf};

/// Conventions of a buildozer project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    /// Project directory the build runs in.
    pub project_root: PathBuf,
    /// Build tool target platform argument.
    pub target: String,
    /// Icon file, relative to the project root.
    pub icon_file: String,
    /// Script that generates the icon, relative to the project root.
    pub icon_script: String,
    /// Directory the build tool writes packages to, relative to the project root.
    pub artifact_dir: String,
    /// Extension of the debug package.
    pub artifact_extension: String,
    /// Package name passed to pip when the build tool is missing.
    pub pip_package: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            target: "android".to_string(),
            icon_file: "icon.png".to_string(),
            icon_script: "create_icon.py".to_string(),
            artifact_dir: "bin".to_string(),
            artifact_extension: "apk".to_string(),
            pip_package: "buildozer".to_string(),
        }
    }
}

impl BuildSettings {
    /// Default conventions rooted at `project_root`.
    pub fn for_project(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            ..Self::default()
        }
    }

    /// Absolute-or-relative path of the icon file.
    pub fn icon_path(&self) -> PathBuf {
        self.project_root.join(&self.icon_file)
    }

    /// Path of the icon generation script.
    pub fn icon_script_path(&self) -> PathBuf {
        self.project_root.join(&self.icon_script)
    }

    /// Directory searched for built packages.
    pub fn artifact_dir_path(&self) -> PathBuf {
        self.project_root.join(&self.artifact_dir)
    }

    /// Project root as a path.
    pub fn root(&self) -> &Path {
        &self.project_root
    }
}
