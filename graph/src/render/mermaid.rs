use crate::core::{short_id, CommitRecord, DependencyGraph};

const HEADER: &str = "graph TD";
const INDENT: &str = "    ";
const LINE_BREAK: &str = "<br>";

/// Serializes a dependency graph as a top-down Mermaid flowchart.
///
/// Each commit becomes a node labelled with its short id, message and
/// changed files, followed by one edge per parent. Output is a pure
/// function of the graph and its iteration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidSerializer;

impl MermaidSerializer {
    pub fn new() -> Self {
        Self
    }

    pub fn serialize(&self, graph: &DependencyGraph) -> String {
        let mut lines = vec![HEADER.to_string()];

        for (id, record) in graph.iter() {
            let short = short_id(id);
            lines.push(format!("{INDENT}{short}[\"{}\"]", Self::label(short, record)));

            for parent in &record.parents {
                lines.push(format!("{INDENT}{} --> {short}", short_id(parent)));
            }
        }

        lines.join("\n")
    }

    /// `Commit: <id><br>Message: <msg><br>Files: <a, b>`. With no files the
    /// label ends in a bare `Files:`.
    fn label(short: &str, record: &CommitRecord) -> String {
        let mut label = format!(
            "Commit: {short}{LINE_BREAK}Message: {}{LINE_BREAK}Files:",
            record.message
        );
        if !record.files.is_empty() {
            label.push(' ');
            label.push_str(&record.files.join(", "));
        }
        label
    }
}

/// Render `graph` as Mermaid text
pub fn to_mermaid(graph: &DependencyGraph) -> String {
    MermaidSerializer::new().serialize(graph)
}
