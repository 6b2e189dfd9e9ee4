pub mod mermaid;

pub use mermaid::{to_mermaid, MermaidSerializer};
