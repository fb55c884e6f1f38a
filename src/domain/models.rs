use std::collections::HashSet;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ImportedFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub content: String,
    pub line_count: usize,
    pub extension: String,
}

impl ImportedFile {
    pub fn new(name: String, size_bytes: u64, content: String) -> Self {
        let line_count = content.split('\n').count();
        let extension = extension_of(&name);
        let mime_type = mime_for_extension(&extension).to_string();

        ImportedFile {
            name,
            size_bytes,
            mime_type,
            content,
            line_count,
            extension,
        }
    }
}

fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_string()
}

fn mime_for_extension(extension: &str) -> &'static str {
    match extension {
        "rs" => "text/x-rust",
        "py" => "text/x-python",
        "js" | "mjs" => "text/javascript",
        "ts" | "tsx" | "jsx" => "text/typescript",
        "go" => "text/x-go",
        "java" => "text/x-java",
        "c" | "h" => "text/x-c",
        "cpp" | "hpp" | "cc" => "text/x-c++",
        "html" => "text/html",
        "css" => "text/css",
        "json" => "application/json",
        "yml" | "yaml" => "application/yaml",
        "toml" => "application/toml",
        "md" => "text/markdown",
        "sh" => "text/x-shellscript",
        _ => "text/plain",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    Files,
    Folder,
}

#[derive(Debug, Clone)]
pub struct ImportFilterConfig {
    pub ignored_suffixes: Vec<String>,
    pub ignored_folders: Vec<String>,
}

pub const DEFAULT_IGNORED_SUFFIXES: &str =
    ".env,.log,.gitignore,.json,.npmrc,.prettierrc,.eslintrc,.babelrc,.pyc,.pyo,.pyd,.class";

pub const DEFAULT_IGNORED_FOLDERS: &str =
    ".git,.svn,.vscode,.idea,node_modules,venv,.venv,build,dist,out,.next,coverage";

impl Default for ImportFilterConfig {
    fn default() -> Self {
        Self::from_csv(DEFAULT_IGNORED_SUFFIXES, DEFAULT_IGNORED_FOLDERS)
    }
}

impl ImportFilterConfig {
    pub fn from_csv(suffixes: &str, folders: &str) -> Self {
        ImportFilterConfig {
            ignored_suffixes: parse_csv(suffixes),
            ignored_folders: parse_csv(folders)
                .into_iter()
                .map(|f| f.trim_end_matches('/').to_string())
                .collect(),
        }
    }

    pub fn ignores_name(&self, name: &str) -> bool {
        self.ignored_suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }

    pub fn ignores_path(&self, path: &Path) -> bool {
        path.components().any(|component| {
            let segment = component.as_os_str().to_string_lossy();
            self.ignored_folders.iter().any(|f| f.as_str() == segment)
        })
    }
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// Names of files currently included in the prompt. Must stay a subset of
// the names present in the session's file list.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    names: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        SelectionSet::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn insert(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    pub fn remove(&mut self, name: &str) {
        self.names.remove(name);
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn prune(&mut self, keep: impl Fn(&str) -> bool) {
        self.names.retain(|name| keep(name));
    }
}

// A file the pipeline has located but not yet read. `name` is the key the
// file will carry in the list: the path as given for file imports, the
// root-relative path for folder imports.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub path: std::path::PathBuf,
    pub name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone)]
pub enum ImportWarning {
    Oversize { name: String, size_bytes: u64 },
    Unreadable { name: String, reason: String },
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportWarning::Oversize { name, size_bytes } => {
                write!(
                    f,
                    "skipped {} ({} bytes exceeds size ceiling)",
                    name, size_bytes
                )
            }
            ImportWarning::Unreadable { name, reason } => {
                write!(f, "skipped {} (unreadable: {})", name, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_imported_file_line_count() {
        let empty = ImportedFile::new("empty.txt".to_string(), 0, String::new());
        assert_eq!(empty.line_count, 1);

        let trailing = ImportedFile::new("a.ts".to_string(), 4, "x\ny\n".to_string());
        assert_eq!(trailing.line_count, 3);

        let single = ImportedFile::new("one.rs".to_string(), 9, "fn main()".to_string());
        assert_eq!(single.line_count, 1);
    }

    #[test]
    fn test_imported_file_extension_and_mime() {
        let file = ImportedFile::new("src/main.rs".to_string(), 10, "fn main() {}".to_string());
        assert_eq!(file.extension, "rs");
        assert_eq!(file.mime_type, "text/x-rust");

        let bare = ImportedFile::new("Makefile".to_string(), 0, String::new());
        assert_eq!(bare.extension, "");
        assert_eq!(bare.mime_type, "text/plain");
    }

    #[test]
    fn test_filter_config_parsing() {
        let config = ImportFilterConfig::from_csv(".env, .log", ".git/, node_modules/");
        assert_eq!(config.ignored_suffixes, vec![".env", ".log"]);
        assert_eq!(config.ignored_folders, vec![".git", "node_modules"]);
    }

    #[test]
    fn test_filter_config_matches() {
        let config = ImportFilterConfig::default();

        assert!(config.ignores_name("secrets.env"));
        assert!(config.ignores_name("debug.log"));
        assert!(!config.ignores_name("main.rs"));

        assert!(config.ignores_path(&PathBuf::from("node_modules/react/index.js")));
        assert!(config.ignores_path(&PathBuf::from("src/.git/config")));
        assert!(!config.ignores_path(&PathBuf::from("src/components/app.tsx")));
    }

    #[test]
    fn test_folder_name_must_match_whole_component() {
        let config = ImportFilterConfig::from_csv("", "out");
        assert!(config.ignores_path(&PathBuf::from("out/bundle.js")));
        assert!(!config.ignores_path(&PathBuf::from("layout/bundle.js")));
    }

    #[test]
    fn test_selection_set_prune() {
        let mut selection = SelectionSet::new();
        selection.insert("a.rs");
        selection.insert("b.rs");

        selection.prune(|name| name == "a.rs");

        assert!(selection.contains("a.rs"));
        assert!(!selection.contains("b.rs"));
        assert_eq!(selection.len(), 1);
    }
}
