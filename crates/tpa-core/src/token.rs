//! Token vocabulary.
//!
//! `TokenKind` is the closed set of kinds the grammar understands. Records with a
//! kind outside the vocabulary are still representable (`TokenKind::Unknown`) so the
//! cursor can carry them; the grammar rejects them wherever a specific kind is needed.

use std::fmt;

macro_rules! token_kinds {
    ($($variant:ident => $name:literal,)*) => {
        /// All recognized token kinds, then `Unknown`.
        /// `#[repr(u8)]` keeps discriminants below the `TokenSet` capacity.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum TokenKind {
            $($variant,)*
            /// Out-of-vocabulary kind, accepted opaquely.
            Unknown,
        }

        impl TokenKind {
            /// Recognized kinds in vocabulary order. Excludes `Unknown`.
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant,)*];

            /// Wire name as it appears in token records.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => $name,)*
                    TokenKind::Unknown => "UNKNOWN",
                }
            }

            /// Resolves a wire name. `None` for anything outside the vocabulary.
            pub fn from_name(name: &str) -> Option<TokenKind> {
                match name {
                    $($name => Some(TokenKind::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

token_kinds! {
    ProgramStart => "PROGRAM_START",
    ProgramEnd => "PROGRAM_END",
    ProgramFinish => "PROGRAM_FINISH",
    BlockStart => "BLOCK_START",
    BlockEnd => "BLOCK_END",
    Type => "TYPE",
    Identifier => "IDENTIFIER",
    Assign => "ASSIGN",
    CommandEnd => "COMMAND_END",
    ArgumentSeparator => "ARGUMENT_SEPARATOR",
    IfConditional => "IF_CONDITIONAL",
    ElseConditional => "ELSE_CONDITIONAL",
    LeftParen => "LEFT_PAREN",
    RightParen => "RIGHT_PAREN",
    DataOutput => "DATA_OUTPUT",
    DataInput => "DATA_INPUT",
    WhileLoop => "WHILE_LOOP",
    Number => "NUMBER",
    LiteralString => "LITERAL_STRING",
    GreaterEqual => "GREATER_EQUAL",
    Less => "LESS",
    Equal => "EQUAL",
    Greater => "GREATER",
    LessEqual => "LESS_EQUAL",
    Sum => "SUM",
    Subtract => "SUBTRACT",
    Multiply => "MULTIPLY",
    Divide => "DIVIDE",
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified input token. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// Wire name of an out-of-vocabulary kind. Only set when `kind` is `Unknown`.
    raw_kind: Option<Box<str>>,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            raw_kind: None,
        }
    }

    /// Out-of-vocabulary token that remembers its wire name.
    pub fn unknown(name: impl Into<Box<str>>, value: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Unknown,
            value: value.into(),
            raw_kind: Some(name.into()),
        }
    }

    /// Kind name as it appeared in the token records.
    pub fn kind_name(&self) -> &str {
        self.raw_kind.as_deref().unwrap_or(self.kind.as_str())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, {})", self.kind_name(), self.value)
    }
}

/// 64-bit bitset of `TokenKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u8;
            assert!(kind < 64, "TokenKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        let kind = kind as u8;
        assert!(kind < 64, "TokenKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let kind = kind as u8;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL
            .iter()
            .copied()
            .chain(std::iter::once(TokenKind::Unknown))
            .filter(move |kind| self.contains(*kind))
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// `A`, `A or B`, `one of A, B, C`.
impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<&str> = self.iter().map(TokenKind::as_str).collect();
        match kinds.as_slice() {
            [] => f.write_str("nothing"),
            [one] => f.write_str(one),
            [a, b] => write!(f, "{} or {}", a, b),
            many => write!(f, "one of {}", many.join(", ")),
        }
    }
}

/// Pre-defined token sets for the grammar.
pub mod token_sets {
    use super::TokenKind::*;
    use super::TokenSet;

    pub const PROGRAM_TERMINATORS: TokenSet = TokenSet::new(&[ProgramEnd, ProgramFinish]);

    /// Lookahead kinds that select a statement production.
    pub const STATEMENT_FIRST: TokenSet = TokenSet::new(&[
        BlockStart,
        Type,
        Identifier,
        IfConditional,
        DataOutput,
        DataInput,
        WhileLoop,
    ]);

    /// Kinds allowed as the first operand of an expression.
    pub const OPERAND_FIRST: TokenSet = TokenSet::new(&[Number, Identifier, LiteralString]);

    /// Kinds allowed as the operand after a binary operator. String literals are excluded.
    pub const TRAILING_OPERAND: TokenSet = TokenSet::new(&[Number, Identifier]);

    pub const COMPARISON_OPERATORS: TokenSet =
        TokenSet::new(&[GreaterEqual, Less, Equal, Greater, LessEqual]);

    pub const ARITHMETIC_OPERATORS: TokenSet = TokenSet::new(&[Sum, Subtract, Multiply, Divide]);

    pub const BINARY_OPERATORS: TokenSet = COMPARISON_OPERATORS.union(ARITHMETIC_OPERATORS);
}
