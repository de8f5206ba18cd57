//! Statement generation ordering.
//!
//! The four statements (plus Notes) form a fixed dependency chain:
//! Assumptions drive the Income Statement, the Cash Flow Statement starts
//! from Income Statement results, and Balance Sheet cash is the Cash Flow
//! closing balance. Rather than relying on implicit call order, each
//! statement declares its dependencies and the build order is a
//! topological sort of that graph, so a future line-item addition cannot
//! silently introduce a forward reference into an unbuilt statement.

use crate::error::{ModelError, ModelResult};
use crate::types::Statement;
use petgraph::algo::toposort;
use petgraph::graph::DiGraph;
use std::collections::HashMap;

/// Resolve the statement build order from the declared dependencies.
pub fn statement_order() -> ModelResult<Vec<Statement>> {
    let mut graph = DiGraph::new();
    let mut node_indices = HashMap::new();

    for statement in Statement::ALL {
        let idx = graph.add_node(statement);
        node_indices.insert(statement, idx);
    }

    for statement in Statement::ALL {
        for dep in statement.deps() {
            graph.add_edge(node_indices[dep], node_indices[&statement], ());
        }
    }

    let order = toposort(&graph, None).map_err(|_| {
        ModelError::CircularDependency(
            "Circular dependency declared between statements".to_string(),
        )
    })?;

    Ok(order
        .iter()
        .filter_map(|idx| graph.node_weight(*idx).copied())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[Statement], statement: Statement) -> usize {
        order.iter().position(|&s| s == statement).unwrap()
    }

    #[test]
    fn test_order_contains_every_statement_once() {
        let order = statement_order().unwrap();
        assert_eq!(order.len(), Statement::ALL.len());
        for statement in Statement::ALL {
            assert!(order.contains(&statement));
        }
    }

    #[test]
    fn test_order_respects_declared_dependencies() {
        let order = statement_order().unwrap();
        for statement in Statement::ALL {
            for dep in statement.deps() {
                assert!(
                    position(&order, *dep) < position(&order, statement),
                    "{:?} must be built before {:?}",
                    dep,
                    statement
                );
            }
        }
    }

    #[test]
    fn test_assumptions_first_notes_last() {
        let order = statement_order().unwrap();
        assert_eq!(order.first(), Some(&Statement::Assumptions));
        assert_eq!(order.last(), Some(&Statement::Notes));
    }
}
