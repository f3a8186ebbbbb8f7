use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum LinearizeError {
    #[error("No consistent linearization for '{name}': parents disagree on the order of [{}]", .unresolved.join(", "))]
    InconsistentHierarchy {
        /// The type whose linearization was requested.
        name: String,
        /// The blocked sequence heads at the point the merge gave up, in
        /// scan order with duplicates removed.
        unresolved: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inconsistent_hierarchy_display() {
        let err = LinearizeError::InconsistentHierarchy {
            name: "Z".to_string(),
            unresolved: vec!["A".to_string(), "B".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "No consistent linearization for 'Z': parents disagree on the order of [A, B]"
        );
    }
}
