//! # Key Model
//!
//! Two layers of keys:
//! * [`RawKey`] is whatever the front-end saw. It can be anything.
//! * [`AddressKey`] is the closed allow-list the accumulator reacts to.
//!
//! [`AddressKey::classify`] is the only way to get from one to the other, so a
//! key that is not on the list can never reach the accumulator's dispatch.

use crate::error::KeyParseError;

/// A key press as reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawKey {
    Char(char),
    Backspace,
    Delete,
    Enter,
    /// Anything without a meaning here (arrows, function keys, ...).
    Other,
}

/// The keys the accumulator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKey {
    /// One of `'0'..='9'`.
    Digit(char),
    Period,
    Backspace,
    Delete,
    /// Commit the current buffer.
    Enter,
    /// Reset both displays.
    Clear,
}

impl AddressKey {
    /// Filters a raw key against the allow-list.
    ///
    /// The clear key is the letter C, in either case.
    pub fn classify(raw: RawKey) -> Option<Self> {
        match raw {
            RawKey::Char(c @ '0'..='9') => Some(AddressKey::Digit(c)),
            RawKey::Char('.') => Some(AddressKey::Period),
            RawKey::Char('c' | 'C') => Some(AddressKey::Clear),
            RawKey::Char(_) => None,
            RawKey::Backspace => Some(AddressKey::Backspace),
            RawKey::Delete => Some(AddressKey::Delete),
            RawKey::Enter => Some(AddressKey::Enter),
            RawKey::Other => None,
        }
    }
}

impl RawKey {
    /// Parses a key script such as `"192.168<bs>.1<enter>"`.
    ///
    /// Each character is one key press. Named keys are written in angle
    /// brackets: `<bs>`, `<backspace>`, `<del>`, `<delete>`, `<enter>`, `<cr>`,
    /// `<clear>` and `<other>`. Names are case-insensitive.
    pub fn parse_sequence(script: &str) -> Result<Vec<RawKey>, KeyParseError> {
        let mut keys: Vec<RawKey> = Vec::with_capacity(script.len());
        let mut chars = script.char_indices();

        while let Some((start, c)) = chars.next() {
            if c != '<' {
                keys.push(RawKey::Char(c));
                continue;
            }

            let mut name = String::new();
            let mut closed = false;
            for (_, n) in chars.by_ref() {
                if n == '>' {
                    closed = true;
                    break;
                }
                name.push(n);
            }

            if !closed {
                return Err(KeyParseError::Unterminated { position: start });
            }

            keys.push(parse_named_key(&name)?);
        }

        Ok(keys)
    }
}

fn parse_named_key(name: &str) -> Result<RawKey, KeyParseError> {
    match name.to_ascii_lowercase().as_str() {
        "bs" | "backspace" => Ok(RawKey::Backspace),
        "del" | "delete" => Ok(RawKey::Delete),
        "enter" | "cr" => Ok(RawKey::Enter),
        "clear" => Ok(RawKey::Char('c')),
        "other" => Ok(RawKey::Other),
        _ => Err(KeyParseError::UnknownKey(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_allow_list() {
        for c in '0'..='9' {
            assert_eq!(AddressKey::classify(RawKey::Char(c)), Some(AddressKey::Digit(c)));
        }
        assert_eq!(AddressKey::classify(RawKey::Char('.')), Some(AddressKey::Period));
        assert_eq!(AddressKey::classify(RawKey::Char('c')), Some(AddressKey::Clear));
        assert_eq!(AddressKey::classify(RawKey::Char('C')), Some(AddressKey::Clear));
        assert_eq!(AddressKey::classify(RawKey::Backspace), Some(AddressKey::Backspace));
        assert_eq!(AddressKey::classify(RawKey::Delete), Some(AddressKey::Delete));
        assert_eq!(AddressKey::classify(RawKey::Enter), Some(AddressKey::Enter));
    }

    #[test]
    fn test_classify_rejects_everything_else() {
        for c in ['a', 'x', ' ', ',', '-', '/', ':', '\n', 'é'] {
            assert_eq!(AddressKey::classify(RawKey::Char(c)), None, "{c:?} accepted");
        }
        assert_eq!(AddressKey::classify(RawKey::Other), None);
    }

    #[test]
    fn test_parse_sequence() {
        let keys = RawKey::parse_sequence("1.<BS>2<enter><clear><del><other>x").unwrap();
        assert_eq!(
            keys,
            vec![
                RawKey::Char('1'),
                RawKey::Char('.'),
                RawKey::Backspace,
                RawKey::Char('2'),
                RawKey::Enter,
                RawKey::Char('c'),
                RawKey::Delete,
                RawKey::Other,
                RawKey::Char('x'),
            ]
        );

        assert_eq!(RawKey::parse_sequence("").unwrap(), vec![]);
    }

    #[test]
    fn test_parse_sequence_errors() {
        assert_eq!(
            RawKey::parse_sequence("12<enter"),
            Err(KeyParseError::Unterminated { position: 2 })
        );
        assert_eq!(
            RawKey::parse_sequence("<tab>"),
            Err(KeyParseError::UnknownKey("tab".to_string()))
        );
    }
}
