//! Platform, platform variant, and architecture identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Apple platforms a slice can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    /// iOS and iPadOS.
    #[serde(rename = "ios")]
    IOS,
    /// macOS.
    #[serde(rename = "macos")]
    MacOS,
    /// tvOS.
    #[serde(rename = "tvos")]
    TvOS,
    /// watchOS.
    #[serde(rename = "watchos")]
    WatchOS,
    /// visionOS (declared as `xros` in manifests).
    #[serde(rename = "xros")]
    VisionOS,
}

impl Platform {
    /// Get the manifest string for this platform (e.g., "ios").
    ///
    /// This is also the prefix slice identifiers use for the platform,
    /// so `"macos-arm64_x86_64"` belongs to [`Platform::MacOS`].
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IOS => "ios",
            Self::MacOS => "macos",
            Self::TvOS => "tvos",
            Self::WatchOS => "watchos",
            Self::VisionOS => "xros",
        }
    }

    /// Parse a platform from its manifest string.
    ///
    /// Accepts the human-readable aliases `"visionos"` and `"osx"` as well.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Some(Self::IOS),
            "macos" | "osx" => Some(Self::MacOS),
            "tvos" => Some(Self::TvOS),
            "watchos" => Some(Self::WatchOS),
            "xros" | "visionos" => Some(Self::VisionOS),
            _ => None,
        }
    }

    /// Check whether a slice identifier belongs to this platform.
    ///
    /// The identifier's first `-`-separated component must equal the
    /// platform string exactly, so `"ios"` does not match `"iosmac-..."`.
    #[must_use]
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        identifier
            .split('-')
            .next()
            .is_some_and(|head| head == self.as_str())
    }

    /// Get all supported platforms.
    #[must_use]
    pub fn all() -> &'static [Platform] {
        &[
            Self::IOS,
            Self::MacOS,
            Self::TvOS,
            Self::WatchOS,
            Self::VisionOS,
        ]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Platform variant declared alongside the platform.
///
/// Device slices carry no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformVariant {
    Simulator,
    MacCatalyst,
}

impl PlatformVariant {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simulator => "simulator",
            Self::MacCatalyst => "maccatalyst",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "simulator" => Some(Self::Simulator),
            "maccatalyst" => Some(Self::MacCatalyst),
            _ => None,
        }
    }
}

impl fmt::Display for PlatformVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CPU architecture tokens found in `SupportedArchitectures`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Architecture {
    #[serde(rename = "arm64")]
    Arm64,
    #[serde(rename = "arm64e")]
    Arm64e,
    #[serde(rename = "arm64_32")]
    Arm64_32,
    #[serde(rename = "armv7")]
    Armv7,
    #[serde(rename = "armv7s")]
    Armv7s,
    #[serde(rename = "armv7k")]
    Armv7k,
    #[serde(rename = "x86_64")]
    X86_64,
    #[serde(rename = "i386")]
    I386,
}

impl Architecture {
    /// Get the architecture token (e.g., "x86_64").
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arm64 => "arm64",
            Self::Arm64e => "arm64e",
            Self::Arm64_32 => "arm64_32",
            Self::Armv7 => "armv7",
            Self::Armv7s => "armv7s",
            Self::Armv7k => "armv7k",
            Self::X86_64 => "x86_64",
            Self::I386 => "i386",
        }
    }

    /// Parse an architecture token. Tokens are case sensitive.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "arm64" => Some(Self::Arm64),
            "arm64e" => Some(Self::Arm64e),
            "arm64_32" => Some(Self::Arm64_32),
            "armv7" => Some(Self::Armv7),
            "armv7s" => Some(Self::Armv7s),
            "armv7k" => Some(Self::Armv7k),
            "x86_64" => Some(Self::X86_64),
            "i386" => Some(Self::I386),
            _ => None,
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
