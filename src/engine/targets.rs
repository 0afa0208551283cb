// Thu Oct 15 2026 - Alex

use serde::Serialize;

/// Directory holding the serialized player data of a Unity build.
pub const ASSET_DATA_PREFIX: &str = "assets/bin/Data/";

pub const ENGINE_INDICATORS: &[&str] = &[
    ASSET_DATA_PREFIX,
    "lib/armeabi-v7a/libunity.so",
    "lib/arm64-v8a/libunity.so",
    "lib/x86/libunity.so",
    "lib/x86_64/libunity.so",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetEntry {
    pub path: &'static str,
    pub label: &'static str,
}

impl TargetEntry {
    const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }
}

/// Entries most likely to carry the version string, best first.
pub const TARGET_ENTRIES: &[TargetEntry] = &[
    TargetEntry::new("assets/bin/Data/globalgamemanagers", "globalgamemanagers"),
    TargetEntry::new("assets/bin/Data/data.unity3d", "data.unity3d"),
    TargetEntry::new("assets/bin/Data/level0", "level0"),
    TargetEntry::new("assets/bin/Data/mainData", "mainData"),
    TargetEntry::new("lib/armeabi-v7a/libunity.so", "libunity.so (ARM)"),
    TargetEntry::new("lib/arm64-v8a/libunity.so", "libunity.so (ARM64)"),
    TargetEntry::new("lib/x86/libunity.so", "libunity.so (x86)"),
];

pub fn present_targets<'a>(names: &'a indexmap::IndexSet<String>) -> impl Iterator<Item = &'static TargetEntry> + 'a {
    TARGET_ENTRIES.iter().filter(move |target| names.contains(target.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    #[test]
    fn test_target_order_is_fixed() {
        let labels: Vec<&str> = TARGET_ENTRIES.iter().map(|t| t.label).collect();
        assert_eq!(
            labels,
            vec![
                "globalgamemanagers",
                "data.unity3d",
                "level0",
                "mainData",
                "libunity.so (ARM)",
                "libunity.so (ARM64)",
                "libunity.so (x86)",
            ]
        );
    }

    #[test]
    fn test_present_targets_keep_table_order() {
        let names: IndexSet<String> = [
            "lib/arm64-v8a/libunity.so",
            "assets/bin/Data/level0",
            "classes.dex",
            "assets/bin/Data/globalgamemanagers",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let paths: Vec<&str> = present_targets(&names).map(|t| t.path).collect();
        assert_eq!(
            paths,
            vec![
                "assets/bin/Data/globalgamemanagers",
                "assets/bin/Data/level0",
                "lib/arm64-v8a/libunity.so",
            ]
        );
    }

    #[test]
    fn test_every_target_is_an_indicator() {
        for target in TARGET_ENTRIES {
            assert!(ENGINE_INDICATORS.iter().any(|i| target.path.starts_with(i)));
        }
    }
}
