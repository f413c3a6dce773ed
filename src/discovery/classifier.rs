//! File classification
//!
//! Decides what happens to each file of the site: the Jekyll configuration
//! is translated, content and assets are relocated, anything else stays.

use std::path::Path;

use crate::constants::JEKYLL_CONFIG_FILENAME;

/// Extensions of files relocated verbatim
pub const RELOCATED_EXTENSIONS: [&str; 15] = [
    "scss", "css", "js", "md", "png", "svg", "jpg", "jpeg", "gif", "yml", "yaml", "json", "toml",
    "html", "xml",
];

/// What to do with a file of the source tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// The site configuration, translated line by line
    Config,
    /// Moved (or copied) to its mapped path unchanged
    Relocate,
    /// Left where it is
    Skip,
}

/// Classifies a file by name and extension
pub fn classify_file(path: &Path) -> FileKind {
    let file_name = path.file_name().and_then(|name| name.to_str());
    if file_name == Some(JEKYLL_CONFIG_FILENAME) {
        return FileKind::Config;
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    match extension {
        Some(ext) if RELOCATED_EXTENSIONS.contains(&ext.as_str()) => FileKind::Relocate,
        _ => FileKind::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        assert_eq!(classify_file(Path::new("site/_config.yml")), FileKind::Config);
        assert_eq!(classify_file(Path::new("_config.yml")), FileKind::Config);
    }

    #[test]
    fn test_other_yaml_is_relocated() {
        assert_eq!(classify_file(Path::new("_data/nav.yml")), FileKind::Relocate);
        assert_eq!(classify_file(Path::new("_config.dev.yml")), FileKind::Relocate);
    }

    #[test]
    fn test_relocated_extensions() {
        for name in ["a.scss", "b.md", "c.PNG", "d.svg", "e.json", "f.html", "g.xml", "h.js", "i.jpg"] {
            assert_eq!(classify_file(Path::new(name)), FileKind::Relocate, "{name}");
        }
    }

    #[test]
    fn test_skipped_files() {
        for name in ["Gemfile", "Gemfile.lock", "plugin.rb", "font.woff2", "CNAME"] {
            assert_eq!(classify_file(Path::new(name)), FileKind::Skip, "{name}");
        }
    }
}
