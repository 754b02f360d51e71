use thiserror::Error;

pub type Result<T, E = StreamError> = std::result::Result<T, E>;

/// Rejection of a root sequence at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("source `{label}` has no upper bound and no max_len was configured")]
    Unbounded { label: String },
    #[error("source `{label}` exceeds the configured max_len of {max_len} elements")]
    TooLong { label: String, max_len: usize },
}

#[derive(Debug, Error)]
pub enum StreamError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    /// A fallible operator body failed. `index` is the position of the
    /// offending element in that operator's input.
    #[error("operator `{operator}` failed on element {index}: {source}")]
    Operator {
        operator: &'static str,
        index: usize,
        #[source]
        source: anyhow::Error,
    },
}

impl StreamError {
    pub(crate) fn operator(operator: &'static str, index: usize, source: anyhow::Error) -> Self {
        StreamError::Operator {
            operator,
            index,
            source,
        }
    }

    pub fn is_construction(&self) -> bool {
        matches!(self, StreamError::Construction(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, StreamError::Operator { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn operator_error_names_operator_and_index() {
        let err = StreamError::operator("try_map", 3, anyhow!("division by zero"));
        assert!(err.is_operator());
        assert_eq!(
            err.to_string(),
            "operator `try_map` failed on element 3: division by zero"
        );
    }

    #[test]
    fn construction_error_converts_transparently() {
        let err: StreamError = ConstructionError::TooLong {
            label: "numbers".to_string(),
            max_len: 4,
        }
        .into();
        assert!(err.is_construction());
        assert_eq!(
            err.to_string(),
            "source `numbers` exceeds the configured max_len of 4 elements"
        );
    }
}
