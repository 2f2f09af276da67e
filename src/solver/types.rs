/// One way of reaching `value` from some sub-multiset of the selection
///
/// Singletons are the bare starting numbers; every other calculation combines
/// exactly two disjoint calculations with one operator.
#[derive(Debug, Clone)]
pub(crate) struct Calculation {
    pub value: u64,
    pub expression: String,
    pub singleton: bool,
}

impl Calculation {
    pub fn singleton(n: u64) -> Self {
        Self {
            value: n,
            expression: n.to_string(),
            singleton: true,
        }
    }

    pub fn combine(a: &Self, op: char, b: &Self, value: u64) -> Self {
        Self {
            value,
            expression: format!("{} {} {}", a.wrapped(), op, b.wrapped()),
            singleton: false,
        }
    }

    /// Operand text, parenthesized unless it is a bare literal
    fn wrapped(&self) -> String {
        if self.singleton {
            self.expression.clone()
        } else {
            format!("({})", self.expression)
        }
    }
}

/// All calculations reachable from one sub-multiset of the selection
#[derive(Debug)]
pub(crate) struct Group {
    pub calculations: Vec<Calculation>,
}

/// One optimal value together with an expression that reaches it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub value: u64,
    pub expression: String,
}

/// The outcome of a solve: the smallest achievable distance from the target
/// and every distinct value sitting at that distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solutions {
    pub target: u64,
    pub difference: u64,
    pub results: Vec<Solution>,
}

impl Solutions {
    /// Whether the target is reachable exactly
    pub fn is_exact(&self) -> bool {
        self.difference == 0
    }
}
