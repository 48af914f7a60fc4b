//! Build mode selection.

use std::fmt;

/// Which package variant to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BuildMode {
    /// Unsigned package for local testing and sideloading.
    #[default]
    Debug,
    /// Package for distribution; must be signed afterwards.
    Release,
}

impl BuildMode {
    /// Map a menu answer to a mode.
    ///
    /// `2` selects release. Every other answer, including empty input and
    /// typos, selects debug.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "2" => BuildMode::Release,
            "1" => BuildMode::Debug,
            other => {
                tracing::debug!("Unrecognized build choice {:?}, using debug", other);
                BuildMode::Debug
            }
        }
    }

    /// The build tool argument for this mode.
    pub fn as_arg(&self) -> &'static str {
        match self {
            BuildMode::Debug => "debug",
            BuildMode::Release => "release",
        }
    }

    /// The menu number for this mode.
    pub fn choice(&self) -> &'static str {
        match self {
            BuildMode::Debug => "1",
            BuildMode::Release => "2",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Debug => write!(f, "Debug"),
            BuildMode::Release => write!(f, "Release"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_selects_release() {
        assert_eq!(BuildMode::from_choice("2"), BuildMode::Release);
        assert_eq!(BuildMode::from_choice(" 2\n"), BuildMode::Release);
    }

    #[test]
    fn one_selects_debug() {
        assert_eq!(BuildMode::from_choice("1"), BuildMode::Debug);
    }

    #[test]
    fn anything_else_falls_back_to_debug() {
        for input in ["", "3", "release", "22", "debug", "x"] {
            assert_eq!(BuildMode::from_choice(input), BuildMode::Debug, "{input:?}");
        }
    }

    #[test]
    fn args_and_choices() {
        assert_eq!(BuildMode::Debug.as_arg(), "debug");
        assert_eq!(BuildMode::Release.as_arg(), "release");
        assert_eq!(BuildMode::from_choice(BuildMode::Release.choice()), BuildMode::Release);
    }

    #[test]
    fn display_is_capitalized() {
        assert_eq!(BuildMode::Debug.to_string(), "Debug");
        assert_eq!(BuildMode::Release.to_string(), "Release");
    }
}
