//! Navigator rows as tab-separated lines: `kind \t key \t display \t parent`.

use crate::model::{folder_display_name, parent_key, FolderNode, Tree};
use crate::state::UiState;
use regex::Regex;

pub const NO_DOCUMENTS: &str = "(no documents)";
pub const NO_FILES: &str = "(no files)";

pub struct SidebarOptions<'a> {
    pub filter: Option<&'a str>,
    /// Show every folder as open, ignoring the expand-map.
    pub show_all: bool,
}

pub fn render_rows(tree: &Tree, state: &UiState, opts: &SidebarOptions) -> Vec<String> {
    let mut lines = Vec::new();
    let matcher = opts.filter.and_then(build_fuzzy);
    if tree.is_empty() {
        lines.push(format!("empty\t\t{}\t", NO_DOCUMENTS));
        return lines;
    }
    for node in &tree.folders {
        push_folder(&mut lines, node, None, 0, state, opts.show_all, matcher.as_ref());
    }
    lines
}

fn glyph(open: bool) -> &'static str { if open { "▾" } else { "▸" } }

fn push_folder(lines: &mut Vec<String>, node: &FolderNode, parent: Option<&FolderNode>, depth: usize, state: &UiState, show_all: bool, matcher: Option<&Regex>) {
    let key = parent_key(parent);
    let is_open = show_all || state.is_open(key, &node.name);
    let display = format!("{}{} {}", "  ".repeat(depth), glyph(is_open), folder_display_name(&node.name));
    push_line(lines, matcher, "dir", &node.path, &display, key);
    if !is_open { return; }

    let indent = "  ".repeat(depth + 1);
    if node.files.is_empty() {
        push_line(lines, matcher, "empty", "", &format!("{}{}", indent, NO_FILES), &node.path);
    }
    for f in &node.files {
        let marker = if state.active.as_deref() == Some(f.id.as_str()) { "* " } else { "  " };
        push_line(lines, matcher, "file", &f.id, &format!("{}{}{}", indent, marker, f.label), &node.path);
    }
    for ch in &node.folders {
        push_folder(lines, ch, Some(node), depth + 1, state, show_all, matcher);
    }
}

fn push_line(lines: &mut Vec<String>, matcher: Option<&Regex>, kind: &str, key: &str, display: &str, parent: &str) {
    let hay = format!("{} {}", display, key);
    if matcher.map(|re| re.is_match(&hay)).unwrap_or(true) {
        lines.push(format!("{}\t{}\t{}\t{}", kind, key, display, parent));
    }
}

fn build_fuzzy(q: &str) -> Option<Regex> {
    // subsequence match: q chars appear in order, anything in between
    let mut pat = String::from("(?i)");
    for ch in q.chars() {
        let esc = regex::escape(&ch.to_string());
        pat.push_str(&format!(".*{}", esc));
    }
    Regex::new(&pat).ok()
}
