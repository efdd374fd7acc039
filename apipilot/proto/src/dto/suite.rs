use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::case::TestCaseSummary;

fn default_execution_mode() -> String {
    "sequential".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TestSuite {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub description: Option<String>,
    /// `sequential` or `parallel`.
    #[serde(default = "default_execution_mode")]
    pub execution_mode: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TestSuiteSummary {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_execution_mode")]
    pub execution_mode: String,
    #[serde(default)]
    pub case_count: u32,
    pub created_at: NaiveDateTime,
}

/// Suite with its cases in execution order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TestSuiteDetail {
    #[serde(flatten)]
    pub suite: TestSuite,
    #[serde(default)]
    pub cases: Vec<SuiteCaseDetail>,
}

impl TestSuiteDetail {
    /// Case ids sorted by their position in the suite.
    pub fn ordered_case_ids(&self) -> Vec<i64> {
        let mut cases: Vec<&SuiteCaseDetail> = self.cases.iter().collect();
        cases.sort_by_key(|c| c.sort_order);
        cases.into_iter().map(|c| c.test_case_id).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SuiteCase {
    pub id: i64,
    pub suite_id: i64,
    pub test_case_id: i64,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SuiteCaseDetail {
    pub id: i64,
    pub suite_id: i64,
    pub test_case_id: i64,
    pub sort_order: i32,
    pub test_case: TestCaseSummary,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TestSuiteCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub execution_mode: String,
}

impl TestSuiteCreate {
    pub fn new(name: impl Into<String>) -> Self {
        TestSuiteCreate {
            name: name.into(),
            description: None,
            execution_mode: default_execution_mode(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TestSuiteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SuiteCaseCreate {
    pub test_case_id: i64,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SuiteCaseOrder {
    pub test_case_id: i64,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SuiteCaseOrderUpdate {
    pub case_orders: Vec<SuiteCaseOrder>,
}

impl SuiteCaseOrderUpdate {
    /// Positions follow the order of `case_ids`, starting at zero.
    pub fn from_ids(case_ids: &[i64]) -> Self {
        SuiteCaseOrderUpdate {
            case_orders: case_ids
                .iter()
                .enumerate()
                .map(|(pos, &test_case_id)| SuiteCaseOrder {
                    test_case_id,
                    sort_order: pos as i32,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_from_ids() {
        let update = SuiteCaseOrderUpdate::from_ids(&[9, 3, 5]);
        assert_eq!(
            update.case_orders,
            vec![
                SuiteCaseOrder { test_case_id: 9, sort_order: 0 },
                SuiteCaseOrder { test_case_id: 3, sort_order: 1 },
                SuiteCaseOrder { test_case_id: 5, sort_order: 2 },
            ]
        );
    }
}
