use std::fmt;

pub type NodeId = String;

/// The atomic value category governing how a literal's raw text is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralType {
    Int,
    Float,
    String,
    Duration,
    Filesize,
    Boolean,
    Datetime,
}

impl LiteralType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "int" => Some(LiteralType::Int),
            "float" => Some(LiteralType::Float),
            "string" => Some(LiteralType::String),
            "duration" => Some(LiteralType::Duration),
            "filesize" => Some(LiteralType::Filesize),
            "boolean" => Some(LiteralType::Boolean),
            "datetime" => Some(LiteralType::Datetime),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LiteralType::Int => "int",
            LiteralType::Float => "float",
            LiteralType::String => "string",
            LiteralType::Duration => "duration",
            LiteralType::Filesize => "filesize",
            LiteralType::Boolean => "boolean",
            LiteralType::Datetime => "datetime",
        }
    }
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defines the closed operator set together with each operator's source token.
macro_rules! define_operators {
    ( $( $group:literal => { $( ($variant:ident, $token:literal) ),* $(,)? } ),* $(,)? ) => {
        /// A binary operator of the target language.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum OperatorToken {
            $( $( $variant, )* )*
        }

        impl OperatorToken {
            /// Every operator, in declaration order.
            pub const ALL: &'static [OperatorToken] = &[ $( $( OperatorToken::$variant, )* )* ];

            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $( $( $token => Some(OperatorToken::$variant), )* )*
                    _ => None,
                }
            }

            /// The token as it appears in rendered source.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $( OperatorToken::$variant => $token, )* )*
                }
            }

            /// The operator family, e.g. `"comparison"`.
            pub fn group(&self) -> &'static str {
                match self {
                    $( $( OperatorToken::$variant => $group, )* )*
                }
            }
        }
    };
}

define_operators! {
    "arithmetic" => {
        (Add, "+"),
        (Subtract, "-"),
        (Multiply, "*"),
        (Divide, "/"),
        (FloorDivide, "//"),
        (Modulo, "mod"),
        (Power, "**"),
        (Append, "++"),
    },
    "comparison" => {
        (Equal, "=="),
        (NotEqual, "!="),
        (LessThan, "<"),
        (LessThanOrEqual, "<="),
        (GreaterThan, ">"),
        (GreaterThanOrEqual, ">="),
    },
    "logical" => {
        (And, "and"),
        (Or, "or"),
        (Xor, "xor"),
    },
    "bitwise" => {
        (BitAnd, "bit-and"),
        (BitOr, "bit-or"),
        (BitXor, "bit-xor"),
        (ShiftLeft, "bit-shl"),
        (ShiftRight, "bit-shr"),
    },
    "string-match" => {
        (RegexMatch, "=~"),
        (NotRegexMatch, "!~"),
        (Like, "like"),
        (NotLike, "not-like"),
        (In, "in"),
        (NotIn, "not-in"),
        (StartsWith, "starts-with"),
        (EndsWith, "ends-with"),
    },
}

impl fmt::Display for OperatorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operand slot of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Left,
    Right,
}

/// Target-side tag of an edge, classified once at graph construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EdgeHandle {
    /// `"A"` or `"B"`: fills the left or right operand slot.
    Operand(Operand),
    /// Any other tag. On commands this names a parameter.
    Named(String),
}

impl EdgeHandle {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "A" => EdgeHandle::Operand(Operand::Left),
            "B" => EdgeHandle::Operand(Operand::Right),
            other => EdgeHandle::Named(other.to_string()),
        }
    }
}

impl fmt::Display for EdgeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeHandle::Operand(Operand::Left) => f.write_str("A"),
            EdgeHandle::Operand(Operand::Right) => f.write_str("B"),
            EdgeHandle::Named(name) => f.write_str(name),
        }
    }
}

/// The role a node plays in the dataflow graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRole {
    Command {
        name: String,
        switches: Vec<String>,
    },
    Data {
        text: String,
        literal_type: LiteralType,
    },
    Operator {
        op: OperatorToken,
    },
    Result,
}

impl NodeRole {
    /// Short name of the role, used in log and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            NodeRole::Command { .. } => "command",
            NodeRole::Data { .. } => "data",
            NodeRole::Operator { .. } => "operator",
            NodeRole::Result => "result",
        }
    }
}
