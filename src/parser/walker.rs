//! Read-only full-tree traversal that pulls out naming tokens.

use super::{NodeKind, SyntaxTree};

/// Collect every plain name reference in the tree, in document order.
///
/// Duplicates are retained since occurrence frequency is the point.
/// Original case is preserved.
pub fn extract_names(tree: &SyntaxTree) -> Vec<String> {
    let mut names = Vec::new();
    visit(tree, |kind| {
        if let NodeKind::Name(text) = kind {
            if !text.is_empty() {
                names.push(text);
            }
        }
    });
    names
}

/// Collect the declared name of every function definition, lowercased,
/// in document order.
///
/// Nested definitions and methods are included; duplicates are retained.
pub fn extract_function_names(tree: &SyntaxTree) -> Vec<String> {
    let mut names = Vec::new();
    visit(tree, |kind| {
        if let NodeKind::FunctionDef(name) = kind {
            if !name.is_empty() {
                names.push(name.to_lowercase());
            }
        }
    });
    names
}

/// Pre-order walk over every node reachable from the root.
fn visit<F: FnMut(NodeKind)>(tree: &SyntaxTree, mut f: F) {
    let mut cursor = tree.root().walk();
    loop {
        f(tree.classify(cursor.node(), cursor.field_name()));
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SyntaxTree;

    fn parse(source: &str) -> SyntaxTree {
        SyntaxTree::parse(source).expect("fixture should parse")
    }

    #[test]
    fn test_function_names_lowercased_in_order() {
        let tree = parse("def GetUser():\n    pass\n\ndef save_data():\n    pass\n");
        assert_eq!(extract_function_names(&tree), vec!["getuser", "save_data"]);
    }

    #[test]
    fn test_function_names_include_nested_scopes() {
        let source = r#"
def outer():
    def inner():
        pass
    return inner

class Account:
    def deposit(self, amount):
        pass

    def withdraw(self, amount):
        pass
"#;
        let tree = parse(source);
        assert_eq!(
            extract_function_names(&tree),
            vec!["outer", "inner", "deposit", "withdraw"]
        );
    }

    #[test]
    fn test_function_names_keep_duplicates() {
        let source = r#"
class A:
    def reset(self):
        pass

class B:
    def reset(self):
        pass
"#;
        let tree = parse(source);
        assert_eq!(extract_function_names(&tree), vec!["reset", "reset"]);
    }

    #[test]
    fn test_names_in_document_order_with_duplicates() {
        let tree = parse("total = price + price\nprint(total)\n");
        assert_eq!(
            extract_names(&tree),
            vec!["total", "price", "price", "print", "total"]
        );
    }

    #[test]
    fn test_names_preserve_case() {
        let tree = parse("Result = compute()\n");
        assert_eq!(extract_names(&tree), vec!["Result", "compute"]);
    }

    #[test]
    fn test_declared_names_are_not_references() {
        // Neither the function name nor its parameters are plain
        // references; the body's uses of the parameter are.
        let tree = parse("def double(value):\n    return value + value\n");
        assert_eq!(extract_names(&tree), vec!["value", "value"]);
    }

    #[test]
    fn test_attribute_accessor_excluded() {
        let tree = parse("user.name = name\n");
        assert_eq!(extract_names(&tree), vec!["user", "name"]);
    }

    #[test]
    fn test_keyword_argument_name_excluded() {
        let tree = parse("connect(host=address)\n");
        assert_eq!(extract_names(&tree), vec!["connect", "address"]);
    }

    #[test]
    fn test_import_components_excluded() {
        let tree = parse("import os.path\nfrom sys import argv\nos.walk(argv)\n");
        assert_eq!(extract_names(&tree), vec!["os", "argv"]);
    }

    #[test]
    fn test_class_body_names() {
        let source = r#"
class Order:
    status = PENDING

    def cancel(self):
        self.status = CANCELLED
"#;
        let tree = parse(source);
        // "status" on the left of the class-level assignment is a plain
        // identifier target; "self" is an ordinary reference.
        assert_eq!(
            extract_names(&tree),
            vec!["status", "PENDING", "self", "CANCELLED"]
        );
        assert_eq!(extract_function_names(&tree), vec!["cancel"]);
    }

    #[test]
    fn test_empty_module_yields_nothing() {
        let tree = parse("");
        assert!(extract_names(&tree).is_empty());
        assert!(extract_function_names(&tree).is_empty());
    }
}
