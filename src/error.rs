#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleError {
    NegativeWeight { index: usize, value: f64 },
    NonFiniteWeight { index: usize, value: f64 },
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::NegativeWeight { index, value } => {
                write!(f, "items contain a negative weight at index {index}: {value}")
            }
            SampleError::NonFiniteWeight { index, value } => {
                write!(f, "items contain a non-finite weight at index {index}: {value}")
            }
        }
    }
}

impl std::error::Error for SampleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_index_and_value() {
        let e = SampleError::NegativeWeight {
            index: 3,
            value: -1.5,
        };
        assert_eq!(
            e.to_string(),
            "items contain a negative weight at index 3: -1.5"
        );

        let e = SampleError::NonFiniteWeight {
            index: 0,
            value: f64::INFINITY,
        };
        assert_eq!(
            e.to_string(),
            "items contain a non-finite weight at index 0: inf"
        );
    }
}
