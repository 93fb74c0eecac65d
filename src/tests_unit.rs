#[cfg(test)]
mod tests {
    use crate::builder::build;
    use crate::model::{derive_label, DEFAULT_PREFIX};
    use crate::select::{initial_open_map, select_initial};
    use crate::sidebar::{render_rows, SidebarOptions};
    use crate::state::UiState;

    #[test]
    fn label_variants() {
        assert_eq!(derive_label("025_The_final_design.md"), "025 The final design");
        assert_eq!(derive_label("notes.Md"), "notes");
        assert_eq!(derive_label("a__b.md.md"), "a  b.md");
        assert_eq!(derive_label("plain"), "plain");
    }

    #[test]
    fn load_to_first_view() {
        let built = build(DEFAULT_PREFIX, [
            ("/src/data/UNIT-1_Introduction/02_Design_Learning_System/025_The_final_design.md", "# Final"),
            ("/src/data/UNIT-1_Introduction/02_Design_Learning_System/021_Choosing.md", "# Choosing"),
            ("/src/data/UNIT-2_Concepts/01_Version_Spaces.md", "# VS"),
        ]);
        let tree = &built.tree;
        let sel = select_initial(tree);
        assert_eq!(sel.file.map(|f| f.label.as_str()), Some("021 Choosing"));
        assert_eq!(sel.parent_chain, vec!["UNIT-1_Introduction".to_string(), "02_Design_Learning_System".to_string()]);
        let open = initial_open_map(&sel.parent_chain);
        assert_eq!(open["root"], "UNIT-1_Introduction");
        assert_eq!(open["UNIT-1_Introduction"], "02_Design_Learning_System");

        let st = UiState::initial(tree);
        let rows = render_rows(tree, &st, &SidebarOptions { filter: None, show_all: false });
        let displays: Vec<&str> = rows.iter().map(|r| r.split('\t').nth(2).unwrap()).collect();
        assert_eq!(displays, vec![
            "▾ UNIT-1 Introduction",
            "  (no files)",
            "  ▾ 02 Design Learning System",
            "    * 021 Choosing",
            "      025 The final design",
            "▸ UNIT-2 Concepts",
        ]);
    }
}
