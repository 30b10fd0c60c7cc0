/// How the scanner treats number literals that fail to parse.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LiteralPolicy {
    /// Reject characters outside the accepted alphabet, malformed literals and
    /// literals glued to an opening bracket.
    #[default]
    Strict,
    /// Silently drop anything that does not parse as a number.
    Lenient,
}

/// How many pending operators are reduced when a new operator arrives.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ReductionStrategy {
    /// Reduce every pending operator that binds at least as tightly as the
    /// incoming one. A closing bracket drains down to its opening bracket.
    #[default]
    Eager,
    /// Reduce at most one pending operator per incoming operator and discard a
    /// single stack entry per closing bracket.
    SinglePop,
}

/// Tunables for a [`Calculator`](super::Calculator).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    pub precision: u32,
    pub literal_policy: LiteralPolicy,
    pub strategy: ReductionStrategy,
    pub max_literal_len: usize,
}

impl EvaluatorOptions {
    pub const DEFAULT_PRECISION: u32 = 4;
    pub const DEFAULT_MAX_LITERAL_LEN: usize = 64;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn literal_policy(mut self, literal_policy: LiteralPolicy) -> Self {
        self.literal_policy = literal_policy;
        self
    }

    pub fn strategy(mut self, strategy: ReductionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn max_literal_len(mut self, max_literal_len: usize) -> Self {
        self.max_literal_len = max_literal_len;
        self
    }

    /// Options reproducing the lenient, single-pop scheme.
    pub fn legacy() -> Self {
        Self::default()
            .literal_policy(LiteralPolicy::Lenient)
            .strategy(ReductionStrategy::SinglePop)
    }
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
            literal_policy: LiteralPolicy::default(),
            strategy: ReductionStrategy::default(),
            max_literal_len: Self::DEFAULT_MAX_LITERAL_LEN,
        }
    }
}
