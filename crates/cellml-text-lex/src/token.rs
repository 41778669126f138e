//! Token kinds produced by the scanner.
//!
//! Every reserved word, SI unit name, parameter-block keyword and piece of
//! punctuation this surface syntax recognizes gets its own bare variant.
//! Membership in a category (is this a one-argument math function? an SI
//! unit?) is answered by a predicate method matching over the relevant
//! variants, rather than by comparing against a first/last range marker —
//! the enum itself is the source of truth, not its declaration order.

use std::fmt;

/// The kind of a scanned token, independent of its source position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Literals.
    /// A plain identifier, or an underscore/dot/hyphen-bearing word that
    /// reduced to nothing when those separators were stripped.
    Identifier(String),
    /// A word containing dots or hyphens that survives separator-stripping
    /// (a `cmeta:id`-shaped identifier).
    CmetaId(String),
    /// The raw lexeme of a number literal, unparsed; the parser is
    /// responsible for splitting out the e-notation exponent.
    Number(String),
    /// The body of a double-quoted string literal, unescaped.
    StringLiteral(String),

    // General keywords.
    And,
    As,
    Between,
    Case,
    Comp,
    Def,
    EndComp,
    EndDef,
    EndSel,
    For,
    Group,
    Import,
    Incl,
    Map,
    Model,
    Otherwise,
    Sel,
    Unit,
    Using,
    Var,
    Vars,

    // Math functions.
    Abs,
    Ceil,
    Exp,
    Fact,
    Floor,
    Ln,
    Log,
    Pow,
    Rem,
    Root,
    Sqr,
    Sqrt,
    Or,
    Xor,
    Not,
    Ode,
    Min,
    Max,
    Gcd,
    Lcm,
    Sin,
    Cos,
    Tan,
    Sec,
    Csc,
    Cot,
    Sinh,
    Cosh,
    Tanh,
    Sech,
    Csch,
    Coth,
    Asin,
    Acos,
    Atan,
    Asec,
    Acsc,
    Acot,
    Asinh,
    Acosh,
    Atanh,
    Asech,
    Acsch,
    Acoth,

    // Math constants.
    True,
    False,
    Nan,
    Pi,
    Inf,
    E,

    // Miscellaneous reserved words.
    Base,
    Encapsulation,
    Containment,

    // SI units.
    Ampere,
    Becquerel,
    Candela,
    Celsius,
    Coulomb,
    Dimensionless,
    Farad,
    Gram,
    Gray,
    Henry,
    Hertz,
    Joule,
    Katal,
    Kelvin,
    Kilogram,
    Liter,
    Litre,
    Lumen,
    Lux,
    Meter,
    Metre,
    Mole,
    Newton,
    Ohm,
    Pascal,
    Radian,
    Second,
    Siemens,
    Sievert,
    Steradian,
    Tesla,
    Volt,
    Watt,
    Weber,

    // Parameter-block keywords.
    Pref,
    Expo,
    Mult,
    Off,
    Init,
    Pub,
    Priv,
    Yotta,
    Zetta,
    Exa,
    Peta,
    Tera,
    Giga,
    Mega,
    Kilo,
    Hecto,
    Deka,
    Deci,
    Centi,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
    Zepto,
    Yocto,
    In,
    Out,
    None,

    // Punctuation and operators.
    Eq,
    EqEq,
    Neq,
    Lt,
    Leq,
    Gt,
    Geq,
    Plus,
    Minus,
    Times,
    Divide,
    Quote,
    Comma,
    Colon,
    SemiColon,
    OpeningBracket,
    ClosingBracket,
    OpeningCurlyBracket,
    ClosingCurlyBracket,

    /// A `//` comment, its delimiter stripped. These are the only comments
    /// the parser ever attaches to the XML it emits.
    LineComment(String),
    /// A `/* */` comment, its delimiters stripped. The parser discards
    /// these unconditionally.
    BlockComment(String),

    /// A lexeme the scanner could not classify at all.
    Unknown(String),
    /// A lexeme that was recognized as malformed, carrying an explanatory
    /// message (an unterminated string, an incomplete comment, ...).
    Invalid(String),

    Eof,
}

impl TokenKind {
    /// Is this one of the unary/binary operator or punctuation tokens that
    /// the scanner emits outside of a recognized keyword or literal?
    pub fn is_si_unit(&self) -> bool {
        matches!(
            self,
            TokenKind::Ampere
                | TokenKind::Becquerel
                | TokenKind::Candela
                | TokenKind::Celsius
                | TokenKind::Coulomb
                | TokenKind::Dimensionless
                | TokenKind::Farad
                | TokenKind::Gram
                | TokenKind::Gray
                | TokenKind::Henry
                | TokenKind::Hertz
                | TokenKind::Joule
                | TokenKind::Katal
                | TokenKind::Kelvin
                | TokenKind::Kilogram
                | TokenKind::Liter
                | TokenKind::Litre
                | TokenKind::Lumen
                | TokenKind::Lux
                | TokenKind::Meter
                | TokenKind::Metre
                | TokenKind::Mole
                | TokenKind::Newton
                | TokenKind::Ohm
                | TokenKind::Pascal
                | TokenKind::Radian
                | TokenKind::Second
                | TokenKind::Siemens
                | TokenKind::Sievert
                | TokenKind::Steradian
                | TokenKind::Tesla
                | TokenKind::Volt
                | TokenKind::Watt
                | TokenKind::Weber
        )
    }

    /// Is this one of `true false nan pi inf e`?
    pub fn is_mathematical_constant(&self) -> bool {
        matches!(
            self,
            TokenKind::True
                | TokenKind::False
                | TokenKind::Nan
                | TokenKind::Pi
                | TokenKind::Inf
                | TokenKind::E
        )
    }

    /// Functions called as `f(x)`.
    pub fn is_one_argument_function(&self) -> bool {
        matches!(
            self,
            TokenKind::Abs
                | TokenKind::Ceil
                | TokenKind::Exp
                | TokenKind::Fact
                | TokenKind::Floor
                | TokenKind::Ln
                | TokenKind::Sqr
                | TokenKind::Sqrt
                | TokenKind::Sin
                | TokenKind::Cos
                | TokenKind::Tan
                | TokenKind::Sec
                | TokenKind::Csc
                | TokenKind::Cot
                | TokenKind::Sinh
                | TokenKind::Cosh
                | TokenKind::Tanh
                | TokenKind::Sech
                | TokenKind::Csch
                | TokenKind::Coth
                | TokenKind::Asin
                | TokenKind::Acos
                | TokenKind::Atan
                | TokenKind::Asec
                | TokenKind::Acsc
                | TokenKind::Acot
                | TokenKind::Asinh
                | TokenKind::Acosh
                | TokenKind::Atanh
                | TokenKind::Asech
                | TokenKind::Acsch
                | TokenKind::Acoth
        )
    }

    /// Functions called as `f(x)` or `f(x, y)`: `log`, `root`.
    pub fn is_one_or_two_argument_function(&self) -> bool {
        matches!(self, TokenKind::Log | TokenKind::Root)
    }

    /// Functions called as `f(x, y)`: `pow`, `rem`.
    pub fn is_two_argument_function(&self) -> bool {
        matches!(self, TokenKind::Pow | TokenKind::Rem)
    }

    /// Functions called as `f(x, y, ...)` with two or more arguments:
    /// `min`, `max`, `gcd`, `lcm`.
    pub fn is_two_or_more_argument_function(&self) -> bool {
        matches!(
            self,
            TokenKind::Min | TokenKind::Max | TokenKind::Gcd | TokenKind::Lcm
        )
    }

    /// Any of the math function categories above, excluding `ode` and `sel`
    /// which have their own grammar.
    pub fn is_mathematical_function(&self) -> bool {
        self.is_one_argument_function()
            || self.is_one_or_two_argument_function()
            || self.is_two_argument_function()
            || self.is_two_or_more_argument_function()
    }

    /// One of the SI-prefix keywords valid inside a parameter block
    /// (`yotta` down to `yocto`).
    pub fn is_prefix(&self) -> bool {
        matches!(
            self,
            TokenKind::Yotta
                | TokenKind::Zetta
                | TokenKind::Exa
                | TokenKind::Peta
                | TokenKind::Tera
                | TokenKind::Giga
                | TokenKind::Mega
                | TokenKind::Kilo
                | TokenKind::Hecto
                | TokenKind::Deka
                | TokenKind::Deci
                | TokenKind::Centi
                | TokenKind::Milli
                | TokenKind::Micro
                | TokenKind::Nano
                | TokenKind::Pico
                | TokenKind::Femto
                | TokenKind::Atto
                | TokenKind::Zepto
                | TokenKind::Yocto
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(name) | TokenKind::CmetaId(name) => write!(f, "{name}"),
            TokenKind::Number(lexeme) => write!(f, "{lexeme}"),
            TokenKind::StringLiteral(s) => write!(f, "\"{s}\""),
            TokenKind::LineComment(_) | TokenKind::BlockComment(_) => write!(f, "a comment"),
            TokenKind::Unknown(lexeme) => write!(f, "{lexeme}"),
            TokenKind::Invalid(message) => write!(f, "{message}"),
            TokenKind::Eof => write!(f, "the end of the file"),
            TokenKind::Eq => write!(f, "="),
            TokenKind::EqEq => write!(f, "=="),
            TokenKind::Neq => write!(f, "<>"),
            TokenKind::Lt => write!(f, "<"),
            TokenKind::Leq => write!(f, "<="),
            TokenKind::Gt => write!(f, ">"),
            TokenKind::Geq => write!(f, ">="),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Times => write!(f, "*"),
            TokenKind::Divide => write!(f, "/"),
            TokenKind::Quote => write!(f, "'"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Colon => write!(f, ":"),
            TokenKind::SemiColon => write!(f, ";"),
            TokenKind::OpeningBracket => write!(f, "("),
            TokenKind::ClosingBracket => write!(f, ")"),
            TokenKind::OpeningCurlyBracket => write!(f, "{{"),
            TokenKind::ClosingCurlyBracket => write!(f, "}}"),
            // Every remaining variant is a keyword or reserved word whose Rust
            // identifier is already the lexeme in PascalCase (e.g. `EndSel` -> "endsel").
            other => write!(f, "{}", format!("{other:?}").to_lowercase()),
        }
    }
}

/// A token with the position of its first character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: cellml_text_util::Position,
}

impl Token {
    pub fn new(kind: TokenKind, position: cellml_text_util::Position) -> Self {
        Self { kind, position }
    }
}
