/*!
Parsing of algorithm specification strings.

A request such as `"HMAC(SHA256)"` or `"AES-128/CBC"` is parsed into a
[`ScanName`], which resolves aliases and yields one canonical string per
algorithm configuration. That canonical string is the key every engine
cache is indexed by, so parsing must be deterministic: logically equal
requests always produce the same string.
*/

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::core::error::{Error, Result};

// Alternative spellings mapped to their canonical names
static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("AES128", "AES-128"),
        ("AES192", "AES-192"),
        ("AES256", "AES-256"),
        ("ChaCha", "ChaCha20"),
        ("ChaCha20IETF", "ChaCha20"),
        ("SHA224", "SHA-224"),
        ("SHA256", "SHA-256"),
        ("SHA384", "SHA-384"),
        ("SHA512", "SHA-512"),
        ("SHA-2(224)", "SHA-224"),
        ("SHA-2(256)", "SHA-256"),
        ("SHA-2(384)", "SHA-384"),
        ("SHA-2(512)", "SHA-512"),
    ])
});

/// Deepest argument nesting accepted by [`ScanName::parse`]
pub const MAX_NESTING: usize = 16;

/// Resolve `name` through the alias table
pub fn deref_alias(name: &str) -> &str {
    ALIASES.get(name).copied().unwrap_or(name)
}

/// A parsed algorithm request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScanName {
    /// The string this name was parsed from
    orig: String,
    /// Canonical algorithm name
    algo: String,
    /// Canonical arguments
    args: Vec<String>,
    /// Mode and padding components following the first `/`
    modes: Vec<String>,
}

impl ScanName {
    /// Parse an algorithm specification
    pub fn parse(spec: &str) -> Result<Self> {
        let cleaned: String = spec.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.is_empty() {
            return Err(invalid(spec, "empty specification"));
        }
        check_balanced(spec, &cleaned)?;

        let mut components = split_top_level(&cleaned, '/').into_iter();
        let head = components.next().unwrap_or_default();

        // A whole-component alias may itself carry arguments
        let head = deref_alias(head);

        let (algo, args) = match head.find('(') {
            None => (head, Vec::new()),
            Some(open) => {
                if !head.ends_with(')') {
                    return Err(invalid(spec, "trailing data after argument list"));
                }
                let inner = &head[open + 1..head.len() - 1];
                let args = split_top_level(inner, ',')
                    .into_iter()
                    .map(|arg| {
                        if arg.is_empty() {
                            return Err(invalid(spec, "empty argument"));
                        }
                        ScanName::parse(arg).map(|parsed| parsed.as_string())
                    })
                    .collect::<Result<Vec<_>>>()?;
                (&head[..open], args)
            }
        };

        if algo.is_empty() {
            return Err(invalid(spec, "missing algorithm name"));
        }
        if algo.contains(')') || algo.contains(',') {
            return Err(invalid(spec, "malformed algorithm name"));
        }

        let modes = components
            .map(|mode| {
                if mode.is_empty() {
                    Err(invalid(spec, "empty mode component"))
                } else {
                    Ok(deref_alias(mode).to_string())
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            orig: spec.to_string(),
            algo: deref_alias(algo).to_string(),
            args,
            modes,
        })
    }

    /// The canonical string form, used as the cache key
    pub fn as_string(&self) -> String {
        let mut out = self.algo.clone();
        if !self.args.is_empty() {
            out.push('(');
            out.push_str(&self.args.join(","));
            out.push(')');
        }
        for mode in &self.modes {
            out.push('/');
            out.push_str(mode);
        }
        out
    }

    /// The string this name was parsed from
    pub fn original(&self) -> &str {
        &self.orig
    }

    /// Canonical algorithm name, without arguments or modes
    pub fn algo_name(&self) -> &str {
        &self.algo
    }

    /// Number of arguments
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Canonical argument `i`
    pub fn arg(&self, i: usize) -> Option<&str> {
        self.args.get(i).map(String::as_str)
    }

    /// Argument `i` as a number, or `default` if absent or not numeric
    pub fn arg_as_u32(&self, i: usize, default: u32) -> u32 {
        self.arg(i).and_then(|a| a.parse().ok()).unwrap_or(default)
    }

    /// The cipher mode, if one was given
    pub fn cipher_mode(&self) -> Option<&str> {
        self.modes.first().map(String::as_str)
    }
}

impl fmt::Display for ScanName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl FromStr for ScanName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn invalid(spec: &str, reason: &str) -> Error {
    Error::InvalidAlgorithmName(format!("{spec:?}: {reason}"))
}

fn check_balanced(spec: &str, cleaned: &str) -> Result<()> {
    let mut depth = 0usize;
    for c in cleaned.chars() {
        match c {
            '(' => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(invalid(spec, "arguments nested too deeply"));
                }
            }
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| invalid(spec, "unbalanced parentheses"))?;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(invalid(spec, "unbalanced parentheses"));
    }
    Ok(())
}

// Split on `sep` outside of any parentheses
fn split_top_level(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == sep && depth == 0 => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        let name = ScanName::parse("AES-128").unwrap();
        assert_eq!(name.algo_name(), "AES-128");
        assert_eq!(name.arg_count(), 0);
        assert_eq!(name.cipher_mode(), None);
        assert_eq!(name.as_string(), "AES-128");
    }

    #[test]
    fn test_nested_arguments() {
        let name = ScanName::parse("HMAC(SHA256)").unwrap();
        assert_eq!(name.algo_name(), "HMAC");
        assert_eq!(name.arg(0), Some("SHA-256"));
        assert_eq!(name.as_string(), "HMAC(SHA-256)");

        let name = ScanName::parse("Lion(SHA-256,ChaCha,64)").unwrap();
        assert_eq!(name.arg_count(), 3);
        assert_eq!(name.arg(1), Some("ChaCha20"));
        assert_eq!(name.arg_as_u32(2, 0), 64);
        assert_eq!(name.arg_as_u32(0, 7), 7);
        assert_eq!(name.arg_as_u32(5, 9), 9);
    }

    #[test]
    fn test_modes_and_whitespace() {
        let name = ScanName::parse(" AES256 / CBC / PKCS7 ").unwrap();
        assert_eq!(name.algo_name(), "AES-256");
        assert_eq!(name.cipher_mode(), Some("CBC"));
        assert_eq!(name.as_string(), "AES-256/CBC/PKCS7");
        assert_eq!(name.original(), " AES256 / CBC / PKCS7 ");
    }

    #[test]
    fn test_alias_with_arguments() {
        let name = ScanName::parse("SHA-2(256)").unwrap();
        assert_eq!(name.as_string(), "SHA-256");
    }

    #[test]
    fn test_equal_requests_share_a_key() {
        let a = ScanName::parse("HMAC(SHA256)").unwrap();
        let b = ScanName::parse("HMAC( SHA-256 )").unwrap();
        assert_eq!(a.as_string(), b.as_string());
    }

    #[test]
    fn test_malformed_specs() {
        for spec in ["", "   ", "HMAC(SHA-256", "HMAC)SHA-256(", "(SHA-256)", "HMAC(SHA-256)x",
                     "HMAC(,SHA-256)", "AES-128//CBC", "AES-128/"] {
            let result = ScanName::parse(spec);
            assert!(
                matches!(result, Err(Error::InvalidAlgorithmName(_))),
                "{spec:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |depth: usize| format!("{}X{}", "A(".repeat(depth), ")".repeat(depth));

        let name = ScanName::parse(&nested(MAX_NESTING)).unwrap();
        assert_eq!(name.arg_count(), 1);

        for depth in [MAX_NESTING + 1, 5_000, 50_000] {
            assert!(matches!(
                ScanName::parse(&nested(depth)),
                Err(Error::InvalidAlgorithmName(_))
            ));
        }
    }

    #[test]
    fn test_from_str_and_display() {
        let name: ScanName = "SHA512".parse().unwrap();
        assert_eq!(name.to_string(), "SHA-512");
    }
}
