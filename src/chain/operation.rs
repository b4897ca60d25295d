use std::fmt;

/// Routing key for the handler chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationTag {
    Add,
    Multiply,
    Equal,
    Determinant,
    Inverse,
    Transpose,
    Trace,
    Diagonalize,
}

impl OperationTag {
    /// Every tag, in the order the standard chain visits its handlers.
    pub const ALL: [OperationTag; 8] = [
        OperationTag::Add,
        OperationTag::Multiply,
        OperationTag::Equal,
        OperationTag::Determinant,
        OperationTag::Inverse,
        OperationTag::Transpose,
        OperationTag::Trace,
        OperationTag::Diagonalize,
    ];

    /// Menu number (1-8) of the tag.
    pub fn selector(self) -> u8 {
        match self {
            OperationTag::Add => 1,
            OperationTag::Multiply => 2,
            OperationTag::Equal => 3,
            OperationTag::Determinant => 4,
            OperationTag::Inverse => 5,
            OperationTag::Transpose => 6,
            OperationTag::Trace => 7,
            OperationTag::Diagonalize => 8,
        }
    }

    pub fn from_selector(selector: u8) -> Option<OperationTag> {
        OperationTag::ALL
            .into_iter()
            .find(|tag| tag.selector() == selector)
    }

    pub fn name(self) -> &'static str {
        match self {
            OperationTag::Add => "add",
            OperationTag::Multiply => "multiply",
            OperationTag::Equal => "equal",
            OperationTag::Determinant => "determinant",
            OperationTag::Inverse => "inverse",
            OperationTag::Transpose => "transpose",
            OperationTag::Trace => "trace",
            OperationTag::Diagonalize => "diagonalize",
        }
    }
}

impl fmt::Display for OperationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_table() {
        for (i, tag) in OperationTag::ALL.into_iter().enumerate() {
            assert_eq!(tag.selector() as usize, i + 1);
            assert_eq!(OperationTag::from_selector(tag.selector()), Some(tag));
        }
        assert_eq!(OperationTag::from_selector(0), None);
        assert_eq!(OperationTag::from_selector(9), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(OperationTag::Diagonalize.to_string(), "diagonalize");
        assert_eq!(OperationTag::Trace.to_string(), "trace");
    }
}
