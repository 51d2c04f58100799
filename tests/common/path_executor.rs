//! A deliberately small path evaluator for exercising `Selector` end to end.
//!
//! Supports `/`, `//` and relative location paths of element names, with
//! predicates made of `@attr = "v"` or `Child = 'v'` comparisons joined by
//! `and`. Descendant steps return nodes in traversal (children-first) order.

use grovepath::{
    CategoryFilter, DocumentNode, ExecutorError, NodeCategory, QueryExecutor, XmlNode,
    child_elements, traverse,
};

pub struct PathExecutor;

enum Operand<'q> {
    Attribute(&'q str),
    Child(&'q str),
}

struct Comparison<'q> {
    lhs: Operand<'q>,
    literal: &'q str,
}

impl<'a> QueryExecutor<'a, XmlNode<'a, 'a>> for PathExecutor {
    fn select_nodes(
        &self,
        context: XmlNode<'a, 'a>,
        query: &str,
    ) -> Result<Vec<XmlNode<'a, 'a>>, ExecutorError> {
        let (mut current, rest) = match query.strip_prefix('/') {
            Some(rest) => (vec![document_of(context)], rest),
            None => (vec![context], query),
        };

        let mut descend = false;
        for step in split_steps(query, rest)? {
            if step.is_empty() {
                descend = true;
                continue;
            }
            let (name, comparisons) = parse_step(query, step)?;
            let mut next = Vec::new();
            for node in &current {
                let candidates: Vec<_> = if descend {
                    traverse(Some(*node), CategoryFilter::from(NodeCategory::Element))
                        .filter(|n| n != node)
                        .collect()
                } else {
                    child_elements(Some(*node), None).collect()
                };
                for candidate in candidates {
                    if (name == "*" || candidate.has_local_name(name))
                        && comparisons.iter().all(|c| c.holds(candidate))
                        && !next.contains(&candidate)
                    {
                        next.push(candidate);
                    }
                }
            }
            descend = false;
            current = next;
        }
        Ok(current)
    }
}

impl Comparison<'_> {
    fn holds<'a>(&self, node: XmlNode<'a, 'a>) -> bool {
        match self.lhs {
            Operand::Attribute(name) => node.attribute(name) == Some(self.literal),
            Operand::Child(name) => child_elements(Some(node), Some(name))
                .any(|child| child.string_value() == self.literal),
        }
    }
}

fn document_of<'a>(node: XmlNode<'a, 'a>) -> XmlNode<'a, 'a> {
    let mut top = node;
    while let Some(parent) = top.parent() {
        top = parent;
    }
    top
}

fn invalid(query: &str, message: &str) -> ExecutorError {
    ExecutorError::InvalidQuery {
        query: query.to_string(),
        message: message.to_string(),
    }
}

/// Splits on `/` outside predicates and literals. `a//b` yields `a`, ``, `b`.
fn split_steps<'q>(query: &str, path: &'q str) -> Result<Vec<&'q str>, ExecutorError> {
    let mut steps = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in path.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| invalid(query, "unbalanced ']'"))?
            }
            (None, '/') if depth == 0 => {
                steps.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 || quote.is_some() {
        return Err(invalid(query, "unterminated predicate or literal"));
    }
    steps.push(&path[start..]);
    Ok(steps)
}

fn parse_step<'q>(query: &str, step: &'q str) -> Result<(&'q str, Vec<Comparison<'q>>), ExecutorError> {
    let Some(open) = step.find('[') else {
        return Ok((step.trim(), Vec::new()));
    };
    let name = step[..open].trim();
    let body = step[open..]
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| invalid(query, "malformed predicate"))?;

    let mut comparisons = Vec::new();
    for clause in body.split(" and ") {
        let (lhs, rhs) = clause
            .split_once('=')
            .ok_or_else(|| ExecutorError::Unsupported(format!("predicate '{clause}'")))?;
        let lhs = lhs.trim();
        let rhs = rhs.trim();
        let literal = rhs
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .or_else(|| rhs.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
            .ok_or_else(|| invalid(query, "expected a string literal"))?;
        let lhs = match lhs.strip_prefix('@') {
            Some(attr) => Operand::Attribute(attr),
            None => Operand::Child(lhs),
        };
        comparisons.push(Comparison { lhs, literal });
    }
    Ok((name, comparisons))
}
