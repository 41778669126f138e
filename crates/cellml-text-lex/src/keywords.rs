//! Keyword lookup tables.
//!
//! Three separate tables, matching the three separate namespaces the
//! surface syntax reserves words in: general keywords (statement forms,
//! math functions and constants), SI unit names, and parameter-block-only
//! keywords (`pref`, the SI prefixes, `in`/`out`/`none`). A plain `match` on
//! the lowercase word is used rather than a `HashMap`, since the table is
//! fixed at compile time and the match compiles to a jump table.

use crate::token::TokenKind;

/// Look up `word` in the general keyword table.
pub fn lookup_general(word: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match word {
        "and" => And,
        "as" => As,
        "between" => Between,
        "case" => Case,
        "comp" => Comp,
        "def" => Def,
        "endcomp" => EndComp,
        "enddef" => EndDef,
        "endsel" => EndSel,
        "for" => For,
        "group" => Group,
        "import" => Import,
        "incl" => Incl,
        "map" => Map,
        "model" => Model,
        "otherwise" => Otherwise,
        "sel" => Sel,
        "unit" => Unit,
        "using" => Using,
        "var" => Var,
        "vars" => Vars,
        "abs" => Abs,
        "ceil" => Ceil,
        "exp" => Exp,
        "fact" => Fact,
        "floor" => Floor,
        "ln" => Ln,
        "log" => Log,
        "pow" => Pow,
        "rem" => Rem,
        "root" => Root,
        "sqr" => Sqr,
        "sqrt" => Sqrt,
        "or" => Or,
        "xor" => Xor,
        "not" => Not,
        "ode" => Ode,
        "min" => Min,
        "max" => Max,
        "gcd" => Gcd,
        "lcm" => Lcm,
        "sin" => Sin,
        "cos" => Cos,
        "tan" => Tan,
        "sec" => Sec,
        "csc" => Csc,
        "cot" => Cot,
        "sinh" => Sinh,
        "cosh" => Cosh,
        "tanh" => Tanh,
        "sech" => Sech,
        "csch" => Csch,
        "coth" => Coth,
        "asin" => Asin,
        "acos" => Acos,
        "atan" => Atan,
        "asec" => Asec,
        "acsc" => Acsc,
        "acot" => Acot,
        "asinh" => Asinh,
        "acosh" => Acosh,
        "atanh" => Atanh,
        "asech" => Asech,
        "acsch" => Acsch,
        "acoth" => Acoth,
        "true" => True,
        "false" => False,
        "nan" => Nan,
        "pi" => Pi,
        "inf" => Inf,
        "e" => E,
        "base" => Base,
        "encapsulation" => Encapsulation,
        "containment" => Containment,
        _ => return None,
    })
}

/// Look up `word` in the SI unit keyword table.
pub fn lookup_si_unit(word: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match word {
        "ampere" => Ampere,
        "becquerel" => Becquerel,
        "candela" => Candela,
        "celsius" => Celsius,
        "coulomb" => Coulomb,
        "dimensionless" => Dimensionless,
        "farad" => Farad,
        "gram" => Gram,
        "gray" => Gray,
        "henry" => Henry,
        "hertz" => Hertz,
        "joule" => Joule,
        "katal" => Katal,
        "kelvin" => Kelvin,
        "kilogram" => Kilogram,
        "liter" => Liter,
        "litre" => Litre,
        "lumen" => Lumen,
        "lux" => Lux,
        "meter" => Meter,
        "metre" => Metre,
        "mole" => Mole,
        "newton" => Newton,
        "ohm" => Ohm,
        "pascal" => Pascal,
        "radian" => Radian,
        "second" => Second,
        "siemens" => Siemens,
        "sievert" => Sievert,
        "steradian" => Steradian,
        "tesla" => Tesla,
        "volt" => Volt,
        "watt" => Watt,
        "weber" => Weber,
        _ => return None,
    })
}

/// Look up `word` in the parameter-block keyword table (only consulted
/// while the scanner is inside a `{ ... }` parameter block).
pub fn lookup_parameter(word: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match word {
        "pref" => Pref,
        "expo" => Expo,
        "mult" => Mult,
        "off" => Off,
        "init" => Init,
        "pub" => Pub,
        "priv" => Priv,
        "yotta" => Yotta,
        "zetta" => Zetta,
        "exa" => Exa,
        "peta" => Peta,
        "tera" => Tera,
        "giga" => Giga,
        "mega" => Mega,
        "kilo" => Kilo,
        "hecto" => Hecto,
        "deka" => Deka,
        "deci" => Deci,
        "centi" => Centi,
        "milli" => Milli,
        "micro" => Micro,
        "nano" => Nano,
        "pico" => Pico,
        "femto" => Femto,
        "atto" => Atto,
        "zepto" => Zepto,
        "yocto" => Yocto,
        "in" => In,
        "out" => Out,
        "none" => None,
        _ => return None,
    })
}

/// Resolve a scanned word to a keyword, honoring the lookup order for the
/// current scanning mode.
///
/// Inside a parameter block the parameter table is tried first, then the
/// general table (never skipped), then the SI-unit table. Outside a
/// parameter block the general table is tried first, then the SI-unit
/// table.
pub fn resolve(word: &str, within_parameter_block: bool) -> Option<TokenKind> {
    if within_parameter_block {
        lookup_parameter(word)
            .or_else(|| lookup_general(word))
            .or_else(|| lookup_si_unit(word))
    } else {
        lookup_general(word).or_else(|| lookup_si_unit(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_keywords_resolve_outside_parameter_block() {
        assert_eq!(resolve("sel", false), Some(TokenKind::Sel));
        assert_eq!(resolve("ode", false), Some(TokenKind::Ode));
    }

    #[test]
    fn si_units_resolve_outside_parameter_block() {
        assert_eq!(resolve("kilogram", false), Some(TokenKind::Kilogram));
    }

    #[test]
    fn parameter_keywords_take_priority_inside_parameter_block() {
        assert_eq!(resolve("pref", true), Some(TokenKind::Pref));
        assert_eq!(resolve("in", true), Some(TokenKind::In));
    }

    #[test]
    fn general_table_is_not_skipped_inside_parameter_block() {
        assert_eq!(resolve("sel", true), Some(TokenKind::Sel));
        assert_eq!(resolve("min", true), Some(TokenKind::Min));
    }

    #[test]
    fn si_unit_still_reachable_inside_parameter_block() {
        assert_eq!(resolve("kilogram", true), Some(TokenKind::Kilogram));
    }

    #[test]
    fn unrecognized_word_resolves_to_none() {
        assert_eq!(resolve("not_a_keyword", false), None);
    }

    #[test]
    fn parameter_only_keyword_is_unrecognized_outside_block() {
        assert_eq!(resolve("pref", false), None);
    }
}
