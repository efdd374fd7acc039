use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Module {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<i64>,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Node of the module tree returned by `GET /projects/{id}/modules`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModuleNode {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub children: Vec<ModuleNode>,
}

impl ModuleNode {
    /// Depth-first walk yielding every node together with its depth.
    pub fn walk(&self) -> Vec<(usize, &ModuleNode)> {
        let mut out = Vec::new();
        let mut stack = vec![(0usize, self)];
        while let Some((depth, node)) = stack.pop() {
            out.push((depth, node));
            for child in node.children.iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        out
    }

    pub fn find(&self, id: i64) -> Option<&ModuleNode> {
        self.walk()
            .into_iter()
            .map(|(_, node)| node)
            .find(|node| node.id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ModuleCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ModuleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_module_tree_walk() {
        let tree: ModuleNode = serde_json::from_value(json!({
            "id": 1, "name": "root", "description": null, "parent_id": null,
            "children": [
                {"id": 2, "name": "a", "description": null, "parent_id": 1,
                 "children": [{"id": 4, "name": "a1", "description": null, "parent_id": 2}]},
                {"id": 3, "name": "b", "description": null, "parent_id": 1}
            ]
        }))
        .unwrap();

        let order: Vec<(usize, i64)> = tree.walk().iter().map(|(d, n)| (*d, n.id)).collect();
        assert_eq!(order, vec![(0, 1), (1, 2), (2, 4), (1, 3)]);
        assert_eq!(tree.find(4).map(|n| n.name.as_str()), Some("a1"));
        assert!(tree.find(99).is_none());
    }
}
