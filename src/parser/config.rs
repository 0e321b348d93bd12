/// How chains of binary operators group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Associativity {
    /// `3-3-3` is `(3-3)-3`.
    #[default]
    Left,
    /// The right operand of every binary operator is a whole expression, so
    /// `3-3-3` is `3-(3-3)` and `2*3+4` is `2*(3+4)`.
    Right,
}

/// Limits and grammar options for one parser instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Largest accepted parameter list for `fun` and `lambda`.
    pub max_params: usize,
    /// Largest number of open statement and expression frames.
    ///
    /// Every statement and every expression counts as one frame, so a
    /// top-level expression statement already holds two: with the default
    /// of 128, `((..(1)..));` is accepted with 126 parentheses and rejected
    /// with 127. Operands of a binary chain do not stack.
    pub max_depth: usize,
    pub associativity: Associativity,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_params: 128,
            max_depth: 128,
            associativity: Associativity::Left,
        }
    }
}

impl ParserConfig {
    pub fn with_max_params(mut self, max_params: usize) -> Self {
        self.max_params = max_params;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_associativity(mut self, associativity: Associativity) -> Self {
        self.associativity = associativity;
        self
    }
}
