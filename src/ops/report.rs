//! Human-readable listings of the classification lists and the index.

use std::fmt::Write;

use crate::resolver::{ClassificationLists, MessagePackageIndex, MESSAGE_TRIGGERS};

fn join_or_none<'a>(names: impl Iterator<Item = &'a String>) -> String {
    let joined = names.map(String::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}

/// Format the blacklist and whitelist, one line each.
pub fn format_classification_lists(lists: &ClassificationLists) -> String {
    let mut output = String::new();
    writeln!(output, "Blacklist: {}", join_or_none(lists.blacklist.iter())).unwrap();
    writeln!(output, "Whitelist: {}", join_or_none(lists.whitelist.iter())).unwrap();
    output
}

/// Format the message packages sorted by name, each with its manifest and
/// its dependencies other than the generation triggers.
///
/// With `verbose`, the overlay events are listed first.
pub fn format_index(index: &MessagePackageIndex, verbose: bool) -> String {
    let mut output = String::new();

    if verbose && !index.overlays().is_empty() {
        writeln!(output, "Overlays ({}):", index.overlays().len()).unwrap();
        for overlay in index.overlays() {
            writeln!(
                output,
                "  {} {} ({}) shadows {} ({})",
                overlay.name,
                overlay.version,
                overlay.manifest.display(),
                overlay.shadowed_version,
                overlay.shadowed_manifest.display()
            )
            .unwrap();
        }
        writeln!(output).unwrap();
    }

    writeln!(output, "Message packages ({}):", index.len()).unwrap();
    for package in index.sorted() {
        writeln!(
            output,
            "  {} {} ({})",
            package.name(),
            package.version(),
            package.manifest_path().display()
        )
        .unwrap();

        let deps: Vec<String> = package
            .build_depends()
            .iter()
            .filter(|dep| !MESSAGE_TRIGGERS.contains(&dep.name()))
            .map(ToString::to_string)
            .collect();
        if !deps.is_empty() {
            writeln!(output, "    depends: {}", deps.join(", ")).unwrap();
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::package_at;
    use std::path::Path;

    #[test]
    fn test_format_classification_lists() {
        let lists = ClassificationLists::new(["b_msgs", "a_msgs"], []);
        let output = format_classification_lists(&lists);
        assert_eq!(output, "Blacklist: (none)\nWhitelist: a_msgs, b_msgs\n");
    }

    #[test]
    fn test_format_index_sorted_without_triggers() {
        let lists = ClassificationLists::default();
        let mut index = MessagePackageIndex::default();
        index.add_layer(
            Path::new("/ws"),
            [
                package_at("/ws/z", "z_msgs", "1.0.0", &["message_generation", "a_msgs"]),
                package_at("/ws/a", "a_msgs", "0.1.0", &["genmsg"]),
            ],
            &lists,
        );

        let output = format_index(&index, false);
        let a = output.find("a_msgs 0.1.0").unwrap();
        let z = output.find("z_msgs 1.0.0").unwrap();
        assert!(a < z);
        assert!(output.contains("    depends: a_msgs\n"));
        assert!(!output.contains("message_generation"));
        assert!(!output.contains("genmsg"));
        assert!(!output.contains("Overlays"));
    }

    #[test]
    fn test_format_index_verbose_lists_overlays() {
        let lists = ClassificationLists::default();
        let mut index = MessagePackageIndex::default();
        index.add_layer(
            Path::new("/base"),
            [package_at("/base/foo", "foo_msgs", "1.0.0", &["message_generation"])],
            &lists,
        );
        index.add_layer(
            Path::new("/overlay"),
            [package_at("/overlay/foo", "foo_msgs", "2.0.0", &["message_generation"])],
            &lists,
        );

        let output = format_index(&index, true);
        assert!(output.starts_with("Overlays (1):\n"));
        assert!(output.contains("foo_msgs 2.0.0"));
        assert!(output.contains("shadows 1.0.0"));
        assert!(!format_index(&index, false).contains("Overlays"));
    }
}
