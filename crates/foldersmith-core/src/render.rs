/// Flattening a template into `(depth, name)` rows for display.
use crate::model::FolderTemplate;

/// Pre-order rows, depth 0 for top-level folders.
pub fn render(template: &FolderTemplate) -> Vec<(usize, &str)> {
    let mut rows = Vec::with_capacity(template.node_count());
    push_rows(template, 0, &mut rows);
    rows
}

fn push_rows<'a>(template: &'a FolderTemplate, depth: usize, rows: &mut Vec<(usize, &'a str)>) {
    for (name, node) in template.iter() {
        rows.push((depth, name));
        if let Some(children) = node.children() {
            push_rows(children, depth + 1, rows);
        }
    }
}
