//! On-disk bundle fixtures shared by integration tests.

#![allow(dead_code)]

use plist::{Dictionary, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One manifest entry.
pub struct Slice {
    pub identifier: &'static str,
    pub path: &'static str,
    pub platform: Option<&'static str>,
    pub variant: Option<&'static str>,
    pub architectures: &'static [&'static str],
    pub mergeable: Option<bool>,
}

impl Slice {
    pub fn new(
        identifier: &'static str,
        path: &'static str,
        architectures: &'static [&'static str],
    ) -> Self {
        Self {
            identifier,
            path,
            platform: None,
            variant: None,
            architectures,
            mergeable: None,
        }
    }

    pub fn platform(mut self, platform: &'static str) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn simulator(mut self) -> Self {
        self.variant = Some("simulator");
        self
    }

    pub fn mergeable(mut self, mergeable: bool) -> Self {
        self.mergeable = Some(mergeable);
        self
    }

    fn binary_name(&self) -> String {
        let stem = Path::new(self.path)
            .file_stem()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        if self.path.ends_with(".framework") {
            stem
        } else {
            stem.strip_prefix("lib").unwrap_or(&stem).to_string()
        }
    }

    /// Binary path relative to the bundle root.
    pub fn binary(&self) -> String {
        if self.path.ends_with(".framework") {
            format!("{}/{}/{}", self.identifier, self.path, self.binary_name())
        } else {
            format!("{}/{}", self.identifier, self.path)
        }
    }

    /// Macro path relative to the bundle root.
    pub fn macro_binary(&self) -> String {
        if self.path.ends_with(".framework") {
            format!("{}/{}/Macros/{}", self.identifier, self.path, self.binary_name())
        } else {
            format!("{}/Macros/{}", self.identifier, self.binary_name())
        }
    }

    fn to_value(&self) -> Value {
        let mut dict = Dictionary::new();
        dict.insert(
            "LibraryIdentifier".to_string(),
            Value::String(self.identifier.to_string()),
        );
        dict.insert("LibraryPath".to_string(), Value::String(self.path.to_string()));
        dict.insert(
            "SupportedArchitectures".to_string(),
            Value::Array(
                self.architectures
                    .iter()
                    .map(|arch| Value::String((*arch).to_string()))
                    .collect(),
            ),
        );
        if let Some(platform) = self.platform {
            dict.insert(
                "SupportedPlatform".to_string(),
                Value::String(platform.to_string()),
            );
        }
        if let Some(variant) = self.variant {
            dict.insert(
                "SupportedPlatformVariant".to_string(),
                Value::String(variant.to_string()),
            );
        }
        if let Some(mergeable) = self.mergeable {
            dict.insert("MergeableMetadata".to_string(), Value::Boolean(mergeable));
        }
        Value::Dictionary(dict)
    }
}

/// A bundle written into a temporary directory.
pub struct BundleFixture {
    _temp_dir: TempDir,
    pub root: PathBuf,
    pub slices: Vec<Slice>,
}

impl BundleFixture {
    /// Write the manifest (XML) and every slice binary.
    pub fn new(name: &str, slices: Vec<Slice>) -> Self {
        Self::with_format(name, slices, false)
    }

    /// Write the manifest in binary property list format.
    pub fn binary_manifest(name: &str, slices: Vec<Slice>) -> Self {
        Self::with_format(name, slices, true)
    }

    fn with_format(name: &str, slices: Vec<Slice>, binary: bool) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(name);
        fs::create_dir_all(&root).unwrap();

        let mut manifest = Dictionary::new();
        manifest.insert(
            "AvailableLibraries".to_string(),
            Value::Array(slices.iter().map(Slice::to_value).collect()),
        );
        manifest.insert(
            "CFBundlePackageType".to_string(),
            Value::String("XFWK".to_string()),
        );
        manifest.insert(
            "XCFrameworkFormatVersion".to_string(),
            Value::String("1.0".to_string()),
        );
        let manifest = Value::Dictionary(manifest);
        let manifest_path = root.join("Info.plist");
        if binary {
            manifest.to_file_binary(&manifest_path).unwrap();
        } else {
            manifest.to_file_xml(&manifest_path).unwrap();
        }

        let fixture = Self {
            _temp_dir: temp_dir,
            root,
            slices,
        };
        for slice in &fixture.slices {
            fixture.touch(&slice.binary());
        }
        fixture
    }

    /// Create an empty file at a bundle-relative path.
    pub fn touch(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"").unwrap();
        path
    }

    /// Delete a bundle-relative file.
    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.root.join(relative)).unwrap();
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

pub fn framework_slices(framework: &'static str) -> Vec<Slice> {
    vec![
        Slice::new("ios-x86_64-simulator", framework, &["x86_64"])
            .platform("ios")
            .simulator(),
        Slice::new("ios-arm64", framework, &["arm64"]).platform("ios"),
    ]
}

pub fn my_math_slices() -> Vec<Slice> {
    vec![
        Slice::new("ios-arm64", "libmymath_ios.dylib", &["arm64"]),
        Slice::new(
            "ios-arm64_x86_64-simulator",
            "libmymath_ios_sim.dylib",
            &["arm64", "x86_64"],
        ),
        Slice::new(
            "macos-arm64_x86_64",
            "libmymath_macos.dylib",
            &["arm64", "x86_64"],
        ),
    ]
}
