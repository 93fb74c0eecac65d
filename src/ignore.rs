// Names skipped while walking a document root
use std::path::Path;

pub fn is_ignored_dir_name(name: &str) -> bool {
    let n = name.to_lowercase();
    matches!(n.as_str(),
        ".git" | ".hg" | ".svn" | ".obsidian" | ".vscode" | ".idea"
    )
}

pub fn is_ignored_file_name(name: &str) -> bool {
    let n = name.to_lowercase();
    // hidden files, editor swap and backup copies
    n.starts_with('.') || n.starts_with("~$") || n.ends_with('~') || n.ends_with(".swp") || n.ends_with(".bak")
}

pub fn is_ignored_path(path: &Path, extra: &[String]) -> bool {
    let name = path.file_name().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
    if name.is_empty() { return false; }
    if extra.iter().any(|e| e == &name) { return true; }
    if path.is_dir() { is_ignored_dir_name(&name) } else { is_ignored_file_name(&name) }
}
