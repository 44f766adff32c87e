//! Numeric literal scanning. §4.3.2.
//!
//! Entered with the first digit already consumed by the DEFAULT dispatch.
//! Values are never computed here — a token is a kind plus a span, and the
//! text is still sitting in the buffer for whoever needs to parse it later.

use crate::classify;
use crate::token::TokenKind;

use super::Lexer;

enum FloatOutcome {
    None,
    Float,
    Invalid,
}

struct DigitRun {
    any: bool,
    all_valid: bool,
}

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self) -> TokenKind {
        let mut is_float = false;
        if self.cursor.buf()[self.token_start] == b'0' {
            match self.cursor.current() {
                b'd' | b'D' => {
                    self.cursor.advance();
                    let run = self.consume_digit_run(classify::digit_dec);
                    if !run.any {
                        return self.invalid("'0d' prefix with no digits");
                    }
                }
                b'b' | b'B' => {
                    self.cursor.advance();
                    let run = self.consume_digit_run(classify::digit_bin);
                    if !run.any || !run.all_valid {
                        return self.invalid("malformed binary literal");
                    }
                }
                b'o' | b'O' => {
                    self.cursor.advance();
                    let run = self.consume_digit_run(classify::digit_oct);
                    if !run.any || !run.all_valid {
                        return self.invalid("malformed octal literal");
                    }
                }
                b'x' | b'X' => {
                    self.cursor.advance();
                    let run = self.consume_digit_run(classify::digit_hex);
                    if !run.any || !run.all_valid {
                        return self.invalid("malformed hexadecimal literal");
                    }
                }
                b'0'..=b'7' => {
                    let run = self.consume_digit_run(classify::digit_oct);
                    if !run.all_valid {
                        return self.invalid("malformed octal literal");
                    }
                }
                b'.' | b'e' | b'E' => match self.scan_float_suffix() {
                    FloatOutcome::Invalid => return self.invalid("malformed float exponent"),
                    FloatOutcome::Float => is_float = true,
                    FloatOutcome::None => {}
                },
                _ => {}
            }
        } else {
            self.consume_digit_run(classify::digit_dec);
            match self.scan_float_suffix() {
                FloatOutcome::Invalid => return self.invalid("malformed float exponent"),
                FloatOutcome::Float => is_float = true,
                FloatOutcome::None => {}
            }
        }

        if self.cursor.position() > self.token_start
            && self.cursor.buf()[self.cursor.position() - 1] == b'_'
        {
            return self.invalid("numeric literal ends on '_'");
        }

        let mut kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        if self.cursor.bump_if(b'r') {
            kind = TokenKind::RationalNumber;
        }
        if self.cursor.bump_if(b'i') {
            kind = TokenKind::ImaginaryNumber;
        }
        kind
    }

    /// Consumes a maximal run of decimal digits and underscores — decimal is
    /// always the continuation class so a malformed based literal (`0b2`)
    /// still consumes its whole run into one token — while checking every
    /// digit seen against `pred`, the base's own digit class.
    fn consume_digit_run(&mut self, pred: fn(u8) -> bool) -> DigitRun {
        let mut any = false;
        let mut all_valid = true;
        loop {
            let c = self.cursor.current();
            if classify::digit_dec(c) || pred(c) {
                any = true;
                if !pred(c) {
                    all_valid = false;
                }
                self.cursor.advance();
            } else if c == b'_' {
                self.cursor.advance();
            } else {
                break;
            }
        }
        DigitRun { any, all_valid }
    }

    fn scan_float_suffix(&mut self) -> FloatOutcome {
        let mut had_fraction = false;
        if self.cursor.current() == b'.' && classify::digit_dec(self.cursor.peek(1)) {
            self.cursor.advance();
            self.consume_digit_run(classify::digit_dec);
            had_fraction = true;
        }
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            if classify::digit_dec(self.cursor.current()) {
                self.consume_digit_run(classify::digit_dec);
                return FloatOutcome::Float;
            }
            return FloatOutcome::Invalid;
        }
        if had_fraction {
            FloatOutcome::Float
        } else {
            FloatOutcome::None
        }
    }
}
