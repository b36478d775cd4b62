//! In-game text encodings.
//!
//! Generation 1 and 2 share one single-byte table, generation 3 uses another.
//! Both codecs are lossy and never fail: unknown bytes decode to `?` and
//! unknown characters encode to the charset's fallback byte.

use log::warn;
use serde::{Deserialize, Serialize};

const PLACEHOLDER: char = '?';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Charset {
    Gen12,
    Gen3,
}

impl Charset {
    pub const fn terminator(self) -> u8 {
        match self {
            Self::Gen12 => 0x50,
            Self::Gen3 => 0xFF,
        }
    }

    /// Byte written for characters the table cannot represent.
    pub const fn fallback(self) -> u8 {
        match self {
            Self::Gen12 => 0x7F,
            Self::Gen3 => 0x00,
        }
    }

    pub fn decode_byte(self, byte: u8) -> Option<char> {
        match self {
            Self::Gen12 => gen12_char(byte),
            Self::Gen3 => gen3_char(byte),
        }
    }

    pub fn encode_char(self, ch: char) -> Option<u8> {
        match self {
            Self::Gen12 => gen12_byte(ch),
            Self::Gen3 => gen3_byte(ch),
        }
    }

    /// Decodes at most `max_units` bytes starting at `offset`, stopping at the
    /// terminator or the end of `data`.
    pub fn decode(self, data: &[u8], offset: usize, max_units: usize) -> String {
        let Some(tail) = data.get(offset..) else {
            return String::new();
        };
        tail.iter()
            .take(max_units)
            .take_while(|&&b| b != self.terminator())
            .map(|&b| self.decode_byte(b).unwrap_or(PLACEHOLDER))
            .collect()
    }

    /// Encodes `text` into exactly `max_units` bytes. One unit is always kept
    /// for the terminator, longer input is truncated.
    pub fn encode(self, text: &str, max_units: usize) -> Vec<u8> {
        self.encode_field(text, max_units, max_units.saturating_sub(1))
    }

    /// Encodes into a `width`-byte field that may be filled completely, as the
    /// generation 3 nickname and original-trainer fields are.
    pub fn encode_unterminated(self, text: &str, width: usize) -> Vec<u8> {
        self.encode_field(text, width, width)
    }

    fn encode_field(self, text: &str, width: usize, max_chars: usize) -> Vec<u8> {
        let char_count = text.chars().count();
        if char_count > max_chars {
            warn!("text {text:?} truncated to {max_chars} of {char_count} characters");
        }

        let mut out: Vec<u8> = text
            .chars()
            .take(max_chars)
            .map(|ch| self.encode_char(ch).unwrap_or(self.fallback()))
            .collect();
        out.resize(width, self.terminator());
        out
    }
}

fn gen12_char(byte: u8) -> Option<char> {
    let ch = match byte {
        0x7F => ' ',
        0x80..=0x99 => char::from(b'A' + (byte - 0x80)),
        0x9A => '(',
        0x9B => ')',
        0x9C => ':',
        0x9D => ';',
        0x9E => '[',
        0x9F => ']',
        0xA0..=0xB9 => char::from(b'a' + (byte - 0xA0)),
        0xBA => 'é',
        0xE0 => '\'',
        0xE3 => '-',
        0xE6 => '?',
        0xE7 => '!',
        0xE8 | 0xF2 => '.',
        0xEF => '♂',
        0xF1 => '×',
        0xF3 => '/',
        0xF4 => ',',
        0xF5 => '♀',
        0xF6..=0xFF => char::from(b'0' + (byte - 0xF6)),
        _ => return None,
    };
    Some(ch)
}

fn gen12_byte(ch: char) -> Option<u8> {
    let byte = match ch {
        ' ' => 0x7F,
        'A'..='Z' => 0x80 + (ch as u8 - b'A'),
        '(' => 0x9A,
        ')' => 0x9B,
        ':' => 0x9C,
        ';' => 0x9D,
        '[' => 0x9E,
        ']' => 0x9F,
        'a'..='z' => 0xA0 + (ch as u8 - b'a'),
        'é' => 0xBA,
        '\'' => 0xE0,
        '-' => 0xE3,
        '?' => 0xE6,
        '!' => 0xE7,
        '.' => 0xE8,
        '♂' => 0xEF,
        '×' => 0xF1,
        '/' => 0xF3,
        ',' => 0xF4,
        '♀' => 0xF5,
        '0'..='9' => 0xF6 + (ch as u8 - b'0'),
        _ => return None,
    };
    Some(byte)
}

fn gen3_char(byte: u8) -> Option<char> {
    let ch = match byte {
        0x00 => ' ',
        0x1B => 'é',
        0x2D => '&',
        0x2E => '+',
        0x5C => '(',
        0x5D => ')',
        0xA1..=0xAA => char::from(b'0' + (byte - 0xA1)),
        0xAB => '!',
        0xAC => '?',
        0xAD => '.',
        0xAE => '-',
        0xB0 => '…',
        0xB1 => '“',
        0xB2 => '”',
        0xB3 => '‘',
        0xB4 => '’',
        0xB5 => '♂',
        0xB6 => '♀',
        0xB8 => ',',
        0xBA => '/',
        0xBB..=0xD4 => char::from(b'A' + (byte - 0xBB)),
        0xD5..=0xEE => char::from(b'a' + (byte - 0xD5)),
        0xF0 => ':',
        0xF1 => 'Ä',
        0xF2 => 'Ö',
        0xF3 => 'Ü',
        0xF4 => 'ä',
        0xF5 => 'ö',
        0xF6 => 'ü',
        _ => return None,
    };
    Some(ch)
}

fn gen3_byte(ch: char) -> Option<u8> {
    let byte = match ch {
        ' ' => 0x00,
        'é' => 0x1B,
        '&' => 0x2D,
        '+' => 0x2E,
        '(' => 0x5C,
        ')' => 0x5D,
        '0'..='9' => 0xA1 + (ch as u8 - b'0'),
        '!' => 0xAB,
        '?' => 0xAC,
        '.' => 0xAD,
        '-' => 0xAE,
        '…' => 0xB0,
        '“' => 0xB1,
        '”' => 0xB2,
        '‘' => 0xB3,
        '’' | '\'' => 0xB4,
        '♂' => 0xB5,
        '♀' => 0xB6,
        ',' => 0xB8,
        '/' => 0xBA,
        'A'..='Z' => 0xBB + (ch as u8 - b'A'),
        'a'..='z' => 0xD5 + (ch as u8 - b'a'),
        ':' => 0xF0,
        'Ä' => 0xF1,
        'Ö' => 0xF2,
        'Ü' => 0xF3,
        'ä' => 0xF4,
        'ö' => 0xF5,
        'ü' => 0xF6,
        _ => return None,
    };
    Some(byte)
}

#[cfg(test)]
mod tests {
    use super::Charset;

    #[test]
    fn gen12_round_trips_names() {
        for name in ["RED", "Ash-1", "NIDORAN♂", "Mr.Mime"] {
            let bytes = Charset::Gen12.encode(name, 11);
            assert_eq!(bytes.len(), 11);
            assert_eq!(Charset::Gen12.decode(&bytes, 0, 11), name);
        }
    }

    #[test]
    fn gen3_round_trips_names() {
        for name in ["MAY", "Brendan", "Zigzag?", "Farfetch’d", "♀ 42"] {
            let bytes = Charset::Gen3.encode(name, 11);
            assert_eq!(Charset::Gen3.decode(&bytes, 0, 11), name);
        }
    }

    #[test]
    fn encode_reserves_terminator_and_pads() {
        let bytes = Charset::Gen12.encode("ABCDEFGHIJKLMNOP", 6);
        assert_eq!(bytes, vec![0x80, 0x81, 0x82, 0x83, 0x84, 0x50]);

        let padded = Charset::Gen3.encode("AB", 5);
        assert_eq!(padded, vec![0xBB, 0xBC, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn unterminated_fields_use_full_width() {
        let bytes = Charset::Gen3.encode_unterminated("ABCDEFGHIJ", 10);
        assert!(!bytes.contains(&0xFF));
        assert_eq!(Charset::Gen3.decode(&bytes, 0, 10), "ABCDEFGHIJ");
    }

    #[test]
    fn unknown_characters_map_to_fallback() {
        assert_eq!(Charset::Gen12.encode("A#", 3), vec![0x80, 0x7F, 0x50]);
        assert_eq!(Charset::Gen3.encode("A#", 3), vec![0xBB, 0x00, 0xFF]);
    }

    #[test]
    fn unknown_bytes_decode_to_placeholder() {
        assert_eq!(Charset::Gen12.decode(&[0x80, 0x01, 0x50], 0, 3), "A?");
        assert_eq!(Charset::Gen3.decode(&[0xBB, 0xFE, 0xFF], 0, 3), "A?");
    }

    #[test]
    fn decode_stops_at_budget_and_buffer_end() {
        let bytes = [0x80, 0x81, 0x82];
        assert_eq!(Charset::Gen12.decode(&bytes, 0, 2), "AB");
        assert_eq!(Charset::Gen12.decode(&bytes, 1, 10), "BC");
        assert_eq!(Charset::Gen12.decode(&bytes, 10, 10), "");
    }
}
