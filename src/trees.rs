use std::io::BufRead;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::TreeFormatError;

/// Rooted tree with integer labels and unordered children.
///
/// Labels identify nodes, so they must be unique within the tree. Children
/// are compared as sets: the order in which they appear in the input never
/// matters.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    root: i64,
    children: FxHashMap<i64, Vec<i64>>,
}

impl Tree {
    /// Builds a tree from `parent,child` pairs, one per line.
    /// The root is the unique label that never appears as a child.
    pub fn from_pairs(input: impl BufRead) -> Result<Self, TreeFormatError> {
        let mut children: FxHashMap<i64, Vec<i64>> = FxHashMap::default();
        let mut parent_labels = FxHashSet::default();
        let mut child_labels = FxHashSet::default();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let content = line.trim();
            if content.is_empty() {
                continue;
            }

            let number = index + 1;
            let (parent, child) =
                content
                    .split_once(',')
                    .ok_or_else(|| TreeFormatError::MalformedPair {
                        line: number,
                        content: content.to_owned(),
                    })?;

            let parent = parse_label(parent, number)?;
            let child = parse_label(child, number)?;

            children.entry(parent).or_default().push(child);
            parent_labels.insert(parent);
            child_labels.insert(child);
        }

        if parent_labels.is_empty() {
            return Err(TreeFormatError::Empty);
        }

        let mut roots: Vec<i64> = parent_labels.difference(&child_labels).copied().collect();
        match roots.as_slice() {
            [root] => Ok(Self {
                root: *root,
                children,
            }),
            [] => Err(TreeFormatError::MissingRoot),
            _ => {
                roots.sort_unstable();
                Err(TreeFormatError::MultipleRoots(roots))
            }
        }
    }

    /// Builds a tree from nested-bracket notation, e.g. `[1[2][3[4]]]`.
    /// Whitespace and commas between nodes are ignored.
    pub fn from_nested(text: &str) -> Result<Self, TreeFormatError> {
        let mut children: FxHashMap<i64, Vec<i64>> = FxHashMap::default();
        let mut stack: Vec<i64> = Vec::new();
        let mut root = None;

        let mut characters = text.char_indices().peekable();

        while let Some((position, character)) = characters.next() {
            match character {
                '[' => {
                    let mut digits = String::new();
                    if let Some(&(_, '-')) = characters.peek() {
                        digits.push('-');
                        characters.next();
                    }
                    while let Some(&(_, digit)) = characters.peek() {
                        if !digit.is_ascii_digit() {
                            break;
                        }
                        digits.push(digit);
                        characters.next();
                    }

                    let label: i64 = digits
                        .parse()
                        .map_err(|_| TreeFormatError::MissingLabel(position))?;

                    if let Some(&parent) = stack.last() {
                        children.entry(parent).or_default().push(label);
                    } else if root.is_some() {
                        return Err(TreeFormatError::UnexpectedCharacter {
                            character,
                            position,
                        });
                    } else {
                        root = Some(label);
                    }

                    stack.push(label);
                }
                ']' => {
                    if stack.pop().is_none() {
                        return Err(TreeFormatError::UnbalancedBracket(position));
                    }
                }
                ',' => {}
                character if character.is_whitespace() => {}
                character => {
                    return Err(TreeFormatError::UnexpectedCharacter {
                        character,
                        position,
                    });
                }
            }
        }

        if !stack.is_empty() {
            return Err(TreeFormatError::UnbalancedBracket(text.len()));
        }

        match root {
            Some(root) => Ok(Self { root, children }),
            None => Err(TreeFormatError::Empty),
        }
    }

    pub fn root(&self) -> i64 {
        self.root
    }

    /// Children of the labeled node, in input order. Empty for leaves.
    pub fn children(&self, label: i64) -> &[i64] {
        self.children
            .get(&label)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Returns true only if both trees have the same root and, recursively, the
/// same set of children at every node.
pub fn trees_equal(first: &Tree, second: &Tree) -> bool {
    first.root == second.root && subtrees_equal(first, second, first.root)
}

fn subtrees_equal(first: &Tree, second: &Tree, label: i64) -> bool {
    let left = sorted_children(first, label);
    let right = sorted_children(second, label);

    left == right && left.iter().all(|&child| subtrees_equal(first, second, child))
}

fn sorted_children(tree: &Tree, label: i64) -> Vec<i64> {
    let mut children = tree.children(label).to_vec();
    children.sort_unstable();
    children.dedup();
    children
}

fn parse_label(token: &str, line: usize) -> Result<i64, TreeFormatError> {
    let token = token.trim();

    token.parse().map_err(|_| TreeFormatError::InvalidLabel {
        line,
        token: token.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn from_pairs(text: &str) -> Result<Tree, TreeFormatError> {
        Tree::from_pairs(text.as_bytes())
    }

    #[test]
    fn tree_from_pairs_001() {
        let tree = from_pairs("1,2\n1,3\n3,4\n").unwrap();

        assert_eq!(tree.root(), 1);
        assert_eq!(tree.children(1), &[2, 3]);
        assert_eq!(tree.children(3), &[4]);
        assert!(tree.children(4).is_empty());
    }

    #[test]
    fn tree_from_pairs_002() {
        assert_eq!(from_pairs(""), Err(TreeFormatError::Empty));
        assert_eq!(
            from_pairs("1,2\n3,4\n"),
            Err(TreeFormatError::MultipleRoots(vec![1, 3]))
        );
        assert_eq!(from_pairs("1,2\n2,1\n"), Err(TreeFormatError::MissingRoot));
        assert_eq!(
            from_pairs("1;2\n"),
            Err(TreeFormatError::MalformedPair {
                line: 1,
                content: "1;2".to_owned(),
            })
        );
        assert_eq!(
            from_pairs("1,x\n"),
            Err(TreeFormatError::InvalidLabel {
                line: 1,
                token: "x".to_owned(),
            })
        );
    }

    #[test]
    fn tree_from_nested_001() {
        let tree = Tree::from_nested("[1[2][3[4]]]").unwrap();

        assert_eq!(tree.root(), 1);
        assert_eq!(tree.children(1), &[2, 3]);
        assert_eq!(tree.children(3), &[4]);
    }

    #[test]
    fn tree_from_nested_002() {
        let tree = Tree::from_nested("[1 [2], [-3 [4]]]").unwrap();

        assert_eq!(tree.children(1), &[2, -3]);
        assert_eq!(tree.children(-3), &[4]);
    }

    #[test]
    fn tree_from_nested_003() {
        assert_eq!(Tree::from_nested(""), Err(TreeFormatError::Empty));
        assert_eq!(
            Tree::from_nested("[1[2]"),
            Err(TreeFormatError::UnbalancedBracket(5))
        );
        assert_eq!(
            Tree::from_nested("[1]]"),
            Err(TreeFormatError::UnbalancedBracket(3))
        );
        assert_eq!(
            Tree::from_nested("[[2]]"),
            Err(TreeFormatError::MissingLabel(0))
        );
        assert_eq!(
            Tree::from_nested("[1]x"),
            Err(TreeFormatError::UnexpectedCharacter {
                character: 'x',
                position: 3,
            })
        );
        assert_eq!(
            Tree::from_nested("[1][2]"),
            Err(TreeFormatError::UnexpectedCharacter {
                character: '[',
                position: 3,
            })
        );
    }

    // sibling order never matters
    #[test]
    fn trees_equal_001() {
        let pairs = from_pairs("1,2\n1,3\n3,4\n").unwrap();
        let nested = Tree::from_nested("[1[3[4]][2]]").unwrap();

        assert!(trees_equal(&pairs, &nested));
        assert!(trees_equal(&nested, &pairs));
    }

    #[test]
    fn trees_equal_002() {
        let pairs = from_pairs("1,2\n1,3\n3,4\n").unwrap();

        // node 4 hangs off a different parent
        let shape = Tree::from_nested("[1[2[4]][3]]").unwrap();
        assert!(!trees_equal(&pairs, &shape));

        // different root
        let root = Tree::from_nested("[9[2][3[4]]]").unwrap();
        assert!(!trees_equal(&pairs, &root));

        // missing leaf
        let leaf = Tree::from_nested("[1[2][3]]").unwrap();
        assert!(!trees_equal(&pairs, &leaf));
    }

    // repeated pairs collapse to the same child set
    #[test]
    fn trees_equal_003() {
        let pairs = from_pairs("1,2\n1,2\n").unwrap();
        let nested = Tree::from_nested("[1[2]]").unwrap();

        assert!(trees_equal(&pairs, &nested));
    }

    #[test]
    fn trees_equal_004() {
        let single = Tree::from_nested("[7]").unwrap();

        assert!(trees_equal(&single, &single.clone()));
    }
}
