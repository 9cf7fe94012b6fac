use crate::bumper::rewrite::{KEY_PREFIX, VersionBump};
use std::path::Path;

const BANNER: &str = "==============================================";

pub fn format_bump_summary(bump: &VersionBump, path: &Path, dry_run: bool) -> String {
    let target = if dry_run {
        format!("File Not Written (dry run): {}", path.display())
    } else {
        format!("File Updated: {}", path.display())
    };

    [
        BANNER.to_string(),
        "   PROJECT VERSION BUMPED SUCCESSFULLY".to_string(),
        BANNER.to_string(),
        format!("Old Version: {}", bump.old),
        format!("New Version: {}", bump.new),
        target,
        BANNER.to_string(),
    ]
    .join("\n")
}

pub fn format_missing_key_warning(path: &Path) -> String {
    [
        BANNER.to_string(),
        "[VERSION BUMP WARNING]".to_string(),
        format!("No version key '{}' found in:", KEY_PREFIX),
        format!("  {}", path.display()),
        BANNER.to_string(),
    ]
    .join("\n")
}

pub fn print_bump_summary(bump: &VersionBump, path: &Path, dry_run: bool) {
    println!("{}", format_bump_summary(bump, path, dry_run));
}

pub fn print_missing_key_warning(path: &Path) {
    println!("{}", format_missing_key_warning(path));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_both_versions_and_the_file() {
        let bump = VersionBump {
            line_number: 4,
            old: "1.2.3.007".into(),
            new: "1.2.3.008".into(),
        };
        let text = format_bump_summary(&bump, Path::new("game/project.godot"), false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], BANNER);
        assert_eq!(lines[3], "Old Version: 1.2.3.007");
        assert_eq!(lines[4], "New Version: 1.2.3.008");
        assert_eq!(lines[5], "File Updated: game/project.godot");
        assert_eq!(lines[6], BANNER);
    }

    #[test]
    fn warning_names_the_key() {
        let text = format_missing_key_warning(Path::new("project.godot"));
        assert!(text.contains("No version key 'config/version=' found in:"));
        assert!(text.contains("\n  project.godot\n"));
    }
}
