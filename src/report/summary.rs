use crate::core::ComponentRow;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Shape of the raw component inventory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSummary {
    pub total_rows: usize,
    pub unique_files: usize,
    pub unique_component_types: usize,
}

pub fn summarize_input(rows: &[ComponentRow]) -> InputSummary {
    let files: HashSet<&str> = rows.iter().map(|r| r.file.as_str()).collect();
    let types: HashSet<&str> = rows.iter().map(|r| r.component_type.as_str()).collect();

    InputSummary {
        total_rows: rows.len(),
        unique_files: files.len(),
        unique_component_types: types.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_counts_distinct_values() {
        let rows = vec![
            ComponentRow::new("a.kjb", "tMap", "tMap_1"),
            ComponentRow::new("a.kjb", "tMap", "tMap_2"),
            ComponentRow::new("b.kjb", "tJava", "tJava_1"),
        ];

        let summary = summarize_input(&rows);

        assert_eq!(
            summary,
            InputSummary {
                total_rows: 3,
                unique_files: 2,
                unique_component_types: 2,
            }
        );
    }
}
