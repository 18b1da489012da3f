//! Update-expression builder.
//!
//! Pure construction of the minimal `SET` instruction for a partial update.
//! No field absent from the originating patch is ever touched, so a caller
//! can change `status` alone without resending `task`, and vice versa.

use std::collections::HashMap;

use serde_json::Value;

use crate::task::TaskPatch;

use super::Item;

/// Value placeholder bound to the `task` attribute.
const TASK_VALUE: &str = ":t";
/// Value placeholder bound to the `status` attribute.
const STATUS_VALUE: &str = ":s";
/// Name placeholder for the `status` attribute.
///
/// `status` collides with a reserved word in the store's expression dialect,
/// so it is always addressed through a bound name, never literally.
const STATUS_NAME: &str = "#st";

/// One `<attribute> = <placeholder>` assignment in a `SET` instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SetClause {
    /// Left-hand side: a literal attribute name or a name placeholder.
    lhs: &'static str,
    /// Value placeholder on the right-hand side.
    placeholder: &'static str,
}

/// A minimal mutation instruction touching only the fields present in the
/// originating [`TaskPatch`].
///
/// Carries both the rendered expression string (for expression-dialect
/// backends) and enough structure for other backends to apply the mutation
/// directly via [`UpdateExpression::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateExpression {
    clauses: Vec<SetClause>,
    values: HashMap<String, String>,
    names: HashMap<String, String>,
}

impl UpdateExpression {
    /// Builds the instruction for a validated patch.
    ///
    /// The patch is non-empty by construction, so the rendered expression
    /// always contains at least one clause.
    pub fn for_patch(patch: &TaskPatch) -> Self {
        let mut clauses = Vec::new();
        let mut values = HashMap::new();
        let mut names = HashMap::new();

        if let Some(task) = patch.task() {
            clauses.push(SetClause {
                lhs: "task",
                placeholder: TASK_VALUE,
            });
            values.insert(TASK_VALUE.to_string(), task.to_string());
        }

        if let Some(status) = patch.status() {
            clauses.push(SetClause {
                lhs: STATUS_NAME,
                placeholder: STATUS_VALUE,
            });
            values.insert(STATUS_VALUE.to_string(), status.to_string());
            names.insert(STATUS_NAME.to_string(), "status".to_string());
        }

        Self {
            clauses,
            values,
            names,
        }
    }

    /// Renders the `SET <clause>, <clause>` instruction string.
    pub fn expression(&self) -> String {
        let clauses: Vec<String> = self
            .clauses
            .iter()
            .map(|c| format!("{} = {}", c.lhs, c.placeholder))
            .collect();
        format!("SET {}", clauses.join(", "))
    }

    /// Placeholder-to-value bindings.
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Placeholder-to-attribute-name bindings. Empty when no clause needs one.
    pub fn names(&self) -> &HashMap<String, String> {
        &self.names
    }

    /// Applies the instruction to an item in place and returns only the
    /// attributes that were set, mirroring the store's `UPDATED_NEW` shape.
    pub fn apply(&self, item: &mut Item) -> Item {
        let mut changed = Item::new();
        for clause in &self.clauses {
            let attribute = self
                .names
                .get(clause.lhs)
                .map(String::as_str)
                .unwrap_or(clause.lhs);
            if let Some(value) = self.values.get(clause.placeholder) {
                item.insert(attribute.to_string(), Value::String(value.clone()));
                changed.insert(attribute.to_string(), Value::String(value.clone()));
            }
        }
        changed
    }
}
