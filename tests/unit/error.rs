//! Tests for error construction and display

#[cfg(test)]
mod tests {
    use cellgrid::GridError;
    use cellgrid::error::{invalid_dimension, unknown_direction};

    // Tests invalid dimension helper fills every field
    // Verified by swapping value and reason
    #[test]
    fn test_invalid_dimension_helper() {
        let error = invalid_dimension("width", &0, &"must be positive");
        assert_eq!(
            error,
            GridError::InvalidDimension {
                parameter: "width",
                value: "0".to_string(),
                reason: "must be positive".to_string(),
            }
        );
    }

    // Tests display output names the parameter and value
    // Verified by removing the parameter from the format string
    #[test]
    fn test_invalid_dimension_display() {
        let error = invalid_dimension("height", &2.5, &"must be a non-negative integer");
        assert_eq!(
            error.to_string(),
            "Invalid dimension 'height' = '2.5': must be a non-negative integer"
        );
    }

    // Tests unknown direction display quotes the name
    // Verified by changing the display message
    #[test]
    fn test_unknown_direction_display() {
        let error = unknown_direction(&"Up");
        assert_eq!(error.to_string(), "Unknown direction 'Up'");
    }

    // Tests errors work as trait objects
    // Verified by removing the std::error::Error impl
    #[test]
    fn test_error_trait_object() {
        let boxed: Box<dyn std::error::Error> = Box::new(unknown_direction(&"Sideways"));
        assert!(boxed.source().is_none());
        assert!(boxed.to_string().contains("Sideways"));
    }
}
