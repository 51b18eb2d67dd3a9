use std::fmt;

use crate::NodeId;

/// Route from the source to one destination: the total arrival time at the
/// destination and the visited nodes in travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub total_time: f64,
    pub nodes: Vec<NodeId>,
}

/// Renders the route in the report format: the total arrival time on the
/// first line, the space-separated node ids on the second.
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.total_time)?;

        let mut nodes = self.nodes.iter();
        if let Some(first) = nodes.next() {
            write!(f, "{first}")?;
        }
        for node in nodes {
            write!(f, " {node}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn route_display_001() {
        let route = Route {
            total_time: 99.14,
            nodes: vec![0, 3, 2, 4],
        };

        assert_eq!(route.to_string(), "99.14\n0 3 2 4");
    }

    #[test]
    fn route_display_002() {
        let route = Route {
            total_time: 5.0,
            nodes: vec![0],
        };

        assert_eq!(route.to_string(), "5\n0");
    }
}
