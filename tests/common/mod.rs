pub mod fixtures;
pub mod path_executor;

use grovepath::{DocumentNode, XmlNode};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Local names of element nodes, `#text`/`#comment`/`@name` for the rest.
pub fn labels<'a>(nodes: impl IntoIterator<Item = XmlNode<'a, 'a>>) -> Vec<String> {
    use grovepath::NodeCategory;
    nodes
        .into_iter()
        .map(|n| match (n.category(), n.name()) {
            (NodeCategory::Attribute, Some(q)) => format!("@{}", q.local_part),
            (_, Some(q)) => q.local_part.to_string(),
            (NodeCategory::Text, None) => "#text".to_string(),
            (NodeCategory::Comment, None) => "#comment".to_string(),
            (category, None) => format!("#{category:?}"),
        })
        .collect()
}
