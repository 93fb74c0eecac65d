use crate::model::FileEntry;

pub const EMPTY_VIEW: &str = "Select a document to view";
pub const VIEWER_HEADER: &str = "Document Viewer";

/// Content pane text. The document body is passed through untouched; `max_lines` keeps only its head.
pub fn render_pane(file: Option<&FileEntry>, max_lines: Option<usize>) -> String {
    let file = match file {
        Some(f) => f,
        None => return format!("{}\n", EMPTY_VIEW),
    };
    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n\n", VIEWER_HEADER, file.label));
    match max_lines {
        Some(n) => {
            let head = file.content.lines().take(n).collect::<Vec<_>>().join("\n");
            out.push_str(&head);
            if !head.is_empty() { out.push('\n'); }
        }
        None => {
            out.push_str(&file.content);
            if !file.content.ends_with('\n') && !file.content.is_empty() { out.push('\n'); }
        }
    }
    out
}
