//! Build target platform groups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BuildSetError;

/// Build target family a settings operation is aimed at.
///
/// Identity and scripting settings are keyed per group; a few channels only
/// exist for one group (the integer version counter on Android, the build
/// number string on iOS).
///
/// # Examples
///
/// ```
/// use buildset::settings::PlatformGroup;
///
/// let group: PlatformGroup = "android".parse().unwrap();
/// assert_eq!(group, PlatformGroup::Android);
/// assert_eq!(group.to_string(), "android");
/// ```
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lower")]
pub enum PlatformGroup {
    /// Desktop builds (Windows, macOS, Linux players)
    #[serde(alias = "Standalone")]
    Standalone,
    /// Android devices
    #[serde(alias = "Android")]
    Android,
    /// iOS devices
    #[serde(alias = "iOS", alias = "Ios")]
    Ios,
    /// Browser builds
    #[serde(alias = "WebGL", alias = "Webgl")]
    WebGl,
}

impl PlatformGroup {
    /// Canonical lowercase name, as used in profiles and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformGroup::Standalone => "standalone",
            PlatformGroup::Android => "android",
            PlatformGroup::Ios => "ios",
            PlatformGroup::WebGl => "webgl",
        }
    }
}

impl fmt::Display for PlatformGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformGroup {
    type Err = BuildSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standalone" => Ok(PlatformGroup::Standalone),
            "android" => Ok(PlatformGroup::Android),
            "ios" => Ok(PlatformGroup::Ios),
            "webgl" => Ok(PlatformGroup::WebGl),
            _ => Err(BuildSetError::UnknownPlatformGroup(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Android".parse::<PlatformGroup>().unwrap(), PlatformGroup::Android);
        assert_eq!("iOS".parse::<PlatformGroup>().unwrap(), PlatformGroup::Ios);
        assert_eq!("WEBGL".parse::<PlatformGroup>().unwrap(), PlatformGroup::WebGl);
    }

    #[test]
    fn rejects_unknown_group() {
        let err = "ps4".parse::<PlatformGroup>().unwrap_err();
        assert!(err.to_string().contains("ps4"));
    }

    #[test]
    fn json_accepts_engine_style_capitalization() {
        let group: PlatformGroup = serde_json::from_str(r#""iOS""#).unwrap();
        assert_eq!(group, PlatformGroup::Ios);

        let group: PlatformGroup = serde_json::from_str(r#""android""#).unwrap();
        assert_eq!(group, PlatformGroup::Android);
    }

    #[test]
    fn json_round_trips_lowercase() {
        let text = serde_json::to_string(&PlatformGroup::WebGl).unwrap();
        assert_eq!(text, r#""webgl""#);
    }
}
