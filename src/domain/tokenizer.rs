//! Console line tokenizer.
//!
//! Splits a raw line into words and chain operators, honoring quoted
//! substrings. Quoting is single-level: `'...'` and `"..."` group text into
//! one word with the quotes stripped, and there is no escape syntax inside
//! quotes. An unterminated quote runs to the end of the line.

use crate::domain::Token;

/// Tokenize one raw console line.
///
/// Two-character operators are matched before single-character ones, so the
/// first `&` of `&&` is never read as ordinary text and `|` only becomes
/// [`Token::Pipe`] when not followed by a second `|`. A lone `&` has no
/// operator meaning and stays part of the surrounding word.
///
/// After a pipe, everything up to the next operator is collected as a single
/// word: the whole filter invocation (`grep cash`) travels as one token.
pub fn tokenize(line: &str) -> Vec<Token> {
    let chars: Vec<char> = line.trim().chars().collect();
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' | '"' => {
                i += 1;
                while i < chars.len() && chars[i] != c {
                    word.push(chars[i]);
                    i += 1;
                }
                if i < chars.len() {
                    i += 1; // closing quote
                }
            }
            '&' if chars.get(i + 1) == Some(&'&') => {
                flush_word(&mut word, &mut tokens);
                tokens.push(Token::And);
                i += 2;
            }
            '|' if chars.get(i + 1) == Some(&'|') => {
                flush_word(&mut word, &mut tokens);
                tokens.push(Token::Or);
                i += 2;
            }
            '|' => {
                flush_word(&mut word, &mut tokens);
                tokens.push(Token::Pipe);
                i = collect_filter_invocation(&chars, i + 1, &mut tokens);
            }
            ';' => {
                flush_word(&mut word, &mut tokens);
                tokens.push(Token::Sequence);
                i += 1;
            }
            c if c.is_whitespace() => {
                flush_word(&mut word, &mut tokens);
                i += 1;
            }
            _ => {
                word.push(c);
                i += 1;
            }
        }
    }

    flush_word(&mut word, &mut tokens);
    tokens
}

fn flush_word(word: &mut String, tokens: &mut Vec<Token>) {
    if !word.is_empty() {
        tokens.push(Token::Word(std::mem::take(word)));
    }
}

/// Collect the filter invocation following a pipe as one word, stopping at
/// the next operator or end of line. Quotes are honored the same way as in
/// the main loop.
fn collect_filter_invocation(chars: &[char], mut i: usize, tokens: &mut Vec<Token>) -> usize {
    let mut text = String::new();

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' | '"' => {
                i += 1;
                while i < chars.len() && chars[i] != c {
                    text.push(chars[i]);
                    i += 1;
                }
                if i < chars.len() {
                    i += 1;
                }
            }
            ';' | '|' => break,
            '&' if chars.get(i + 1) == Some(&'&') => break,
            _ => {
                text.push(c);
                i += 1;
            }
        }
    }

    let invocation = text.trim();
    if !invocation.is_empty() {
        tokens.push(Token::Word(invocation.to_string()));
    }
    i
}
