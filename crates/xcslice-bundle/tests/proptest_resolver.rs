//! Property-based tests for slice selection and binary naming.

#![allow(non_snake_case)]

use proptest::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use xcslice_bundle::{BundleResolver, LibraryKind, MemoryFileSystem, library::binary_name};
use xcslice_bundle::{AvailableLibrary, BundleManifest};
use xcslice_core::{CollectingSink, ResolveError, Status};

const ROOT: &str = "/bundles/Prop.xcframework";

fn manifest_xml(count: usize) -> String {
    let entries: String = (0..count)
        .map(|index| {
            format!(
                "<dict>\
                 <key>LibraryIdentifier</key><string>ios-arm64-{index}</string>\
                 <key>LibraryPath</key><string>libprop{index}.dylib</string>\
                 <key>SupportedArchitectures</key><array><string>arm64</string></array>\
                 </dict>"
            )
        })
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <plist version=\"1.0\"><dict>\
         <key>AvailableLibraries</key><array>{entries}</array>\
         </dict></plist>"
    )
}

fn binary(index: usize) -> String {
    format!("{ROOT}/ios-arm64-{index}/libprop{index}.dylib")
}

fn bundle(present: &[bool]) -> MemoryFileSystem {
    let mut fs = MemoryFileSystem::new();
    fs.add_file(format!("{ROOT}/Info.plist"), manifest_xml(present.len()));
    for (index, _) in present.iter().enumerate().filter(|(_, present)| **present) {
        fs.add_file(binary(index), b"binary".to_vec());
    }
    fs
}

fn library_at(path: &str) -> Option<AvailableLibrary> {
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <plist version=\"1.0\"><dict>\
         <key>AvailableLibraries</key><array><dict>\
         <key>LibraryIdentifier</key><string>ios-arm64</string>\
         <key>LibraryPath</key><string>{path}</string>\
         <key>SupportedArchitectures</key><array><string>arm64</string></array>\
         </dict></array></dict></plist>"
    );
    BundleManifest::from_bytes(xml.as_bytes(), &PathBuf::from("Info.plist"))
        .ok()
        .and_then(|manifest| manifest.libraries.into_iter().next())
}

proptest! {
    #[test]
    fn proptest_resolve_selects_first_present_slice(
        present in prop::collection::vec(any::<bool>(), 1..8)
    ) {
        let sink = Arc::new(CollectingSink::new());
        let resolver = BundleResolver::with_file_system(bundle(&present), sink.clone());

        let result = resolver.resolve(ROOT, Status::Required, None);

        match present.iter().position(|present| *present) {
            Some(first) => {
                let metadata = result.unwrap();
                prop_assert_eq!(metadata.primary_binary_path, PathBuf::from(binary(first)));
                prop_assert_eq!(sink.len(), first);
            }
            None => {
                let is_not_found = matches!(result, Err(ResolveError::ArchitectureNotFound { .. }));
                prop_assert!(is_not_found);
                prop_assert_eq!(sink.len(), present.len());
            }
        }
    }

    #[test]
    fn proptest_resolve_is_deterministic(
        present in prop::collection::vec(any::<bool>(), 1..8)
    ) {
        let sink = Arc::new(CollectingSink::new());
        let resolver = BundleResolver::with_file_system(bundle(&present), sink.clone());

        let first = resolver.resolve(ROOT, Status::Optional, None).ok();
        let first_warnings = sink.take();
        let second = resolver.resolve(ROOT, Status::Optional, None).ok();
        let second_warnings = sink.take();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_warnings, second_warnings);
    }

    #[test]
    fn proptest_binary_name_strips_lib_prefix(name in "[A-Za-z][A-Za-z0-9_]{0,15}") {
        let archive = library_at(&format!("lib{name}.a")).unwrap();
        let dylib = library_at(&format!("lib{name}.dylib")).unwrap();
        let framework = library_at(&format!("{name}.framework")).unwrap();

        prop_assert_eq!(archive.kind, LibraryKind::StaticArchive);
        prop_assert_eq!(binary_name(&archive), name.clone());
        prop_assert_eq!(binary_name(&dylib), name.clone());
        prop_assert_eq!(binary_name(&framework), name);
    }

    #[test]
    fn proptest_binary_name_never_empty(stem in "[A-Za-z0-9_]{1,12}") {
        let library = library_at(&format!("{stem}.a")).unwrap();

        prop_assert!(!binary_name(&library).is_empty());
    }
}
