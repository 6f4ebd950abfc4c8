//! Literal token rewriting.
//!
//! Each function takes the Java token as it appears in the source and
//! returns the target spelling, or `None` when the literal uses a form the
//! target cannot express.

use javelin_options::TargetLanguage;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Radix {
    Decimal,
    Hex,
    Binary,
    Octal,
}

/// A Java numeric literal split into its parts.
#[derive(Debug)]
struct JavaNumber<'a> {
    radix: Radix,
    /// `0x`/`0b` prefix exactly as written, or empty.
    prefix: &'a str,
    /// Everything between prefix and suffix.
    body: &'a str,
    suffix: Option<char>,
}

impl<'a> JavaNumber<'a> {
    fn parse(token: &'a str) -> Self {
        let (radix, prefix) = match token.get(..2) {
            Some("0x" | "0X") => (Radix::Hex, &token[..2]),
            Some("0b" | "0B") => (Radix::Binary, &token[..2]),
            _ => (Radix::Decimal, ""),
        };
        let rest = &token[prefix.len()..];
        let is_hex_float = radix == Radix::Hex && rest.contains(['p', 'P']);
        let suffix = rest.chars().next_back().filter(|c| match radix {
            Radix::Hex if !is_hex_float => matches!(c, 'l' | 'L'),
            _ => matches!(c, 'l' | 'L' | 'f' | 'F' | 'd' | 'D'),
        });
        let body = match suffix {
            Some(_) => &rest[..rest.len() - 1],
            None => rest,
        };

        let mut number = JavaNumber {
            radix,
            prefix,
            body,
            suffix,
        };
        if radix == Radix::Decimal
            && !number.is_float()
            && body.len() > 1
            && body.starts_with('0')
            && body.bytes().all(|b| matches!(b, b'0'..=b'7' | b'_'))
        {
            number.radix = Radix::Octal;
        }
        number
    }

    fn is_float(&self) -> bool {
        match self.radix {
            Radix::Decimal => {
                self.body.contains(['.', 'e', 'E'])
                    || matches!(self.suffix, Some('f' | 'F' | 'd' | 'D'))
            }
            Radix::Hex => self.body.contains(['p', 'P']),
            Radix::Binary | Radix::Octal => false,
        }
    }

    fn has_fraction_or_exponent(&self) -> bool {
        self.body.contains(['.', 'e', 'E'])
    }

    fn is_long(&self) -> bool {
        matches!(self.suffix, Some('l' | 'L'))
    }

    /// Octal digits without the leading `0`.
    fn octal_digits(&self) -> &'a str {
        self.body.trim_start_matches('0').trim_start_matches('_')
    }

    fn octal_value(&self) -> Option<u64> {
        let digits: String = self.octal_digits().chars().filter(|&c| c != '_').collect();
        if digits.is_empty() {
            return Some(0);
        }
        u64::from_str_radix(&digits, 8).ok()
    }
}

/// `5.` → `5.0`, `5.e3` → `5.0e3`.
fn complete_fraction(body: &str) -> Cow<'_, str> {
    match body.find('.') {
        Some(dot) => {
            let after = &body[dot + 1..];
            if after.is_empty() || after.starts_with(['e', 'E']) {
                Cow::Owned(format!("{}0{}", &body[..=dot], after))
            } else {
                Cow::Borrowed(body)
            }
        }
        None => Cow::Borrowed(body),
    }
}

pub fn number_literal(target: TargetLanguage, token: &str) -> Option<String> {
    let number = JavaNumber::parse(token);
    let suffix = number.suffix.map(String::from).unwrap_or_default();
    match target {
        TargetLanguage::CSharp => match number.radix {
            Radix::Hex if number.is_float() => None,
            Radix::Octal => {
                let value = number.octal_value()?;
                Some(format!("0x{:X}{}", value, suffix))
            }
            Radix::Decimal => Some(format!("{}{}", complete_fraction(number.body), suffix)),
            Radix::Hex | Radix::Binary => Some(token.to_string()),
        },
        TargetLanguage::Swift => Some(match number.radix {
            Radix::Hex => format!("0x{}", number.body),
            Radix::Binary => format!("0b{}", number.body),
            Radix::Octal if number.octal_digits().is_empty() => "0".to_string(),
            Radix::Octal => format!("0o{}", number.octal_digits()),
            Radix::Decimal => {
                let mut text = complete_fraction(number.body).into_owned();
                if text.starts_with('.') {
                    text.insert(0, '0');
                }
                if number.is_float() && !number.has_fraction_or_exponent() {
                    text.push_str(".0");
                }
                text
            }
        }),
        TargetLanguage::Cpp => {
            let body = number.body.replace('_', "'");
            let (body, suffix) = match number.suffix {
                _ if number.is_long() => (body, "LL"),
                Some('f' | 'F') if !number.has_fraction_or_exponent() => {
                    (format!("{}.0", body), "f")
                }
                Some('d' | 'D') if !number.has_fraction_or_exponent() => (format!("{}.0", body), ""),
                Some('d' | 'D') => (body, ""),
                Some('f') => (body, "f"),
                Some('F') => (body, "F"),
                _ => (body, ""),
            };
            Some(format!("{}{}{}", number.prefix, body, suffix))
        }
    }
}

// ============================================================================
// Strings and characters
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Double,
    Single,
    /// A Java character literal written as a double-quoted string.
    SingleAsDouble,
}

pub fn string_literal(target: TargetLanguage, token: &str) -> Option<String> {
    if token.starts_with("\"\"\"") {
        return None;
    }
    let body = token.strip_prefix('"')?.strip_suffix('"')?;
    let body = translate_escapes(target, body, Quote::Double)?;
    Some(match target {
        TargetLanguage::Cpp => format!("u\"{}\"", body),
        TargetLanguage::CSharp | TargetLanguage::Swift => format!("\"{}\"", body),
    })
}

pub fn character_literal(target: TargetLanguage, token: &str) -> Option<String> {
    let body = token.strip_prefix('\'')?.strip_suffix('\'')?;
    Some(match target {
        TargetLanguage::CSharp => format!("'{}'", translate_escapes(target, body, Quote::Single)?),
        TargetLanguage::Cpp => format!("u'{}'", translate_escapes(target, body, Quote::Single)?),
        TargetLanguage::Swift => {
            format!("\"{}\"", translate_escapes(target, body, Quote::SingleAsDouble)?)
        }
    })
}

fn translate_escapes(target: TargetLanguage, body: &str, quote: Quote) -> Option<String> {
    let mut out = String::with_capacity(body.len() + 2);
    let mut rest = body;
    while let Some(backslash) = rest.find('\\') {
        push_plain(&mut out, &rest[..backslash], quote);
        let escape = &rest[backslash + 1..];
        let consumed = translate_escape(target, escape, quote, &mut out)?;
        rest = &escape[consumed..];
    }
    push_plain(&mut out, rest, quote);
    Some(out)
}

fn push_plain(out: &mut String, text: &str, quote: Quote) {
    if quote == Quote::SingleAsDouble {
        out.push_str(&text.replace('"', "\\\""));
    } else {
        out.push_str(text);
    }
}

/// Translate the escape sequence at the start of `escape` (the text after
/// the backslash) into `out`; returns the number of bytes consumed.
fn translate_escape(
    target: TargetLanguage,
    escape: &str,
    quote: Quote,
    out: &mut String,
) -> Option<usize> {
    let first = escape.chars().next()?;
    match first {
        'u' => translate_unicode_escape(target, escape, out),
        '0'..='7' => {
            let max_len = if first <= '3' { 3 } else { 2 };
            let len = escape
                .bytes()
                .take(max_len)
                .take_while(|b| (b'0'..=b'7').contains(b))
                .count();
            let digits = &escape[..len];
            let value = u32::from_str_radix(digits, 8).ok()?;
            match target {
                TargetLanguage::CSharp => out.push_str(&format!("\\u{:04X}", value)),
                TargetLanguage::Swift => out.push_str(&format!("\\u{{{:X}}}", value)),
                TargetLanguage::Cpp => {
                    out.push('\\');
                    out.push_str(digits);
                }
            }
            Some(len)
        }
        's' => {
            out.push(' ');
            Some(1)
        }
        'b' if target == TargetLanguage::Swift => {
            out.push_str("\\u{8}");
            Some(1)
        }
        'f' if target == TargetLanguage::Swift => {
            out.push_str("\\u{C}");
            Some(1)
        }
        '\'' if quote == Quote::SingleAsDouble => {
            out.push('\'');
            Some(1)
        }
        'b' | 'f' | 't' | 'n' | 'r' | '"' | '\'' | '\\' => {
            out.push('\\');
            out.push(first);
            Some(1)
        }
        _ => None,
    }
}

fn translate_unicode_escape(target: TargetLanguage, escape: &str, out: &mut String) -> Option<usize> {
    let (value, consumed) = parse_unicode_escape(escape)?;
    if target == TargetLanguage::CSharp {
        out.push_str(&format!("\\u{:04X}", value));
        return Some(consumed);
    }

    // Swift and C++ escapes name scalar values, so surrogate pairs are joined.
    let (scalar, consumed) = if (0xD800..0xDC00).contains(&value) {
        let low_escape = escape[consumed..].strip_prefix('\\')?;
        let (low, low_consumed) = parse_unicode_escape(low_escape)?;
        if !(0xDC00..0xE000).contains(&low) {
            return None;
        }
        let scalar = 0x10000 + ((value - 0xD800) << 10) + (low - 0xDC00);
        (scalar, consumed + 1 + low_consumed)
    } else if (0xDC00..0xE000).contains(&value) {
        return None;
    } else {
        (value, consumed)
    };

    match target {
        TargetLanguage::Swift => out.push_str(&format!("\\u{{{:X}}}", scalar)),
        _ if scalar > 0xFFFF => out.push_str(&format!("\\U{:08X}", scalar)),
        _ => out.push_str(&format!("\\u{:04X}", scalar)),
    }
    Some(consumed)
}

/// Parse `u+XXXX` (Java allows any number of `u`s).
fn parse_unicode_escape(escape: &str) -> Option<(u32, usize)> {
    let us = escape.bytes().take_while(|&b| b == b'u').count();
    if us == 0 {
        return None;
    }
    let digits = escape.get(us..us + 4)?;
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some((value, us + 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(target: TargetLanguage, token: &str) -> String {
        number_literal(target, token).unwrap()
    }

    #[test]
    fn test_csharp_numbers() {
        assert_eq!(number(TargetLanguage::CSharp, "42"), "42");
        assert_eq!(number(TargetLanguage::CSharp, "1_000L"), "1_000L");
        assert_eq!(number(TargetLanguage::CSharp, "0x7fff_ffff"), "0x7fff_ffff");
        assert_eq!(number(TargetLanguage::CSharp, "017"), "0xF");
        assert_eq!(number(TargetLanguage::CSharp, "5."), "5.0");
        assert_eq!(number(TargetLanguage::CSharp, "1.5f"), "1.5f");
        assert_eq!(number(TargetLanguage::CSharp, "0"), "0");
        assert_eq!(number_literal(TargetLanguage::CSharp, "0x1.8p1"), None);
    }

    #[test]
    fn test_swift_numbers() {
        assert_eq!(number(TargetLanguage::Swift, "10L"), "10");
        assert_eq!(number(TargetLanguage::Swift, "2.5f"), "2.5");
        assert_eq!(number(TargetLanguage::Swift, "1d"), "1.0");
        assert_eq!(number(TargetLanguage::Swift, ".5"), "0.5");
        assert_eq!(number(TargetLanguage::Swift, "017"), "0o17");
        assert_eq!(number(TargetLanguage::Swift, "0XFF"), "0xFF");
        assert_eq!(number(TargetLanguage::Swift, "0xCAFEL"), "0xCAFE");
    }

    #[test]
    fn test_cpp_numbers() {
        assert_eq!(number(TargetLanguage::Cpp, "1_000_000"), "1'000'000");
        assert_eq!(number(TargetLanguage::Cpp, "5L"), "5LL");
        assert_eq!(number(TargetLanguage::Cpp, "1f"), "1.0f");
        assert_eq!(number(TargetLanguage::Cpp, "2.5d"), "2.5");
        assert_eq!(number(TargetLanguage::Cpp, "3D"), "3.0");
        assert_eq!(number(TargetLanguage::Cpp, "017"), "017");
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            string_literal(TargetLanguage::CSharp, r#""a\tb""#).unwrap(),
            r#""a\tb""#
        );
        assert_eq!(
            string_literal(TargetLanguage::Swift, r#""caf\u00e9""#).unwrap(),
            r#""caf\u{E9}""#
        );
        assert_eq!(
            string_literal(TargetLanguage::Swift, r#""\b\f""#).unwrap(),
            r#""\u{8}\u{C}""#
        );
        assert_eq!(string_literal(TargetLanguage::Cpp, r#""hi""#).unwrap(), r#"u"hi""#);
        assert_eq!(
            string_literal(TargetLanguage::CSharp, r#""\0\101""#).unwrap(),
            r#""\u0000\u0041""#
        );
        assert_eq!(string_literal(TargetLanguage::CSharp, r#""a\sb""#).unwrap(), r#""a b""#);
        assert_eq!(string_literal(TargetLanguage::CSharp, "\"\"\"\n  text\n\"\"\""), None);
    }

    #[test]
    fn test_surrogate_pairs() {
        assert_eq!(
            string_literal(TargetLanguage::Swift, r#""\uD83D\uDE00""#).unwrap(),
            r#""\u{1F600}""#
        );
        assert_eq!(
            string_literal(TargetLanguage::Cpp, r#""\uD83D\uDE00""#).unwrap(),
            r#"u"\U0001F600""#
        );
        assert_eq!(
            string_literal(TargetLanguage::CSharp, r#""\uD83D\uDE00""#).unwrap(),
            r#""\uD83D\uDE00""#
        );
        assert_eq!(string_literal(TargetLanguage::Swift, r#""\uD83D""#), None);
    }

    #[test]
    fn test_characters() {
        assert_eq!(character_literal(TargetLanguage::CSharp, "'a'").unwrap(), "'a'");
        assert_eq!(character_literal(TargetLanguage::Cpp, "'a'").unwrap(), "u'a'");
        assert_eq!(character_literal(TargetLanguage::Swift, "'a'").unwrap(), "\"a\"");
        assert_eq!(character_literal(TargetLanguage::Swift, r"'\''").unwrap(), "\"'\"");
        assert_eq!(character_literal(TargetLanguage::Swift, "'\"'").unwrap(), r#""\"""#);
        assert_eq!(character_literal(TargetLanguage::Swift, r"'\n'").unwrap(), r#""\n""#);
    }
}
