//! Tests for error variants, message formatting and helper constructors

#[cfg(test)]
mod tests {
    use archpatterns::DecisionError;
    use archpatterns::support::error::{
        bounds_error, check_index, construction_error, domain_error,
    };

    // Tests Construction error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_construction_error_message() {
        let error = construction_error("alternative_counts", &"[3, 0]", &"must be positive");

        let message = error.to_string();
        assert!(message.contains("alternative_counts"));
        assert!(message.contains("[3, 0]"));
        assert!(message.contains("must be positive"));
        assert!(error.is_construction());
    }

    // Tests Bounds error reports axis, index and length
    // Verified by swapping index and len in the message
    #[test]
    fn test_bounds_error_message() {
        let error = bounds_error("row", 7, 3);

        let message = error.to_string();
        assert!(message.contains("row index 7"));
        assert!(message.contains("len: 3"));
        assert!(error.is_bounds());
        assert!(!error.is_domain());
    }

    // Tests Domain error formatting
    // Verified by omitting reason from message
    #[test]
    fn test_domain_error_message() {
        let error = domain_error("value", &5, &"slot 1 has 2 alternatives");

        let message = error.to_string();
        assert!(message.contains("'5'"));
        assert!(message.contains("slot 1 has 2 alternatives"));
        assert!(error.is_domain());
    }

    // Tests index checking accepts the last valid index and rejects len
    // Verified by changing the comparison to <=
    #[test]
    fn test_check_index_boundaries() {
        assert_eq!(check_index("slot", 2, 3), Ok(2));
        assert_eq!(
            check_index("slot", 3, 3),
            Err(DecisionError::Bounds {
                axis: "slot",
                index: 3,
                len: 3
            })
        );
        assert!(check_index("slot", 0, 0).is_err());
    }

    // Tests errors behave as standard errors without a source
    #[test]
    fn test_error_trait_object() {
        let error: Box<dyn std::error::Error> = Box::new(bounds_error("entity", 1, 0));
        assert!(error.source().is_none());
        assert!(error.to_string().contains("entity"));
    }
}
