//! Chain parser.
//!
//! Consumes the token stream produced by the tokenizer and builds the
//! ordered list of [`Link`]s the executor walks. Parsing is a single pass:
//! words accumulate into the current command, pipes attach filter
//! invocations to it, and control operators close it into a link.

use crate::domain::{ChainError, ChainOp, Link, Token};

/// Parse a token sequence into an ordered chain of links.
///
/// Each link carries the operator that was active when it was *opened*, so
/// gating always relates a link to the previous link's result. A pipe with
/// no accumulated command, a pipe with no filter expression after it, or a
/// control operator with no command before it all fail the whole line —
/// no partial chain is ever returned.
pub fn parse_chain(tokens: &[Token]) -> Result<Vec<Link>, ChainError> {
    let mut links = Vec::new();
    let mut words: Vec<&str> = Vec::new();
    let mut pipes: Vec<String> = Vec::new();
    let mut op: Option<ChainOp> = None;

    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        match token {
            Token::Word(w) => words.push(w),
            Token::Pipe => {
                if words.is_empty() {
                    return Err(ChainError::PipeWithoutCommand);
                }
                // The tokenizer delivers the whole filter invocation as one word.
                match iter.next() {
                    Some(Token::Word(invocation)) => pipes.push(invocation.clone()),
                    _ => return Err(ChainError::MissingFilter),
                }
            }
            Token::And | Token::Or | Token::Sequence => {
                let next_op = match token {
                    Token::And => ChainOp::And,
                    Token::Or => ChainOp::Or,
                    _ => ChainOp::Sequence,
                };
                if words.is_empty() {
                    return Err(ChainError::MissingCommand(op_symbol(next_op).to_string()));
                }
                links.push(Link {
                    command: words.join(" "),
                    pipes: std::mem::take(&mut pipes),
                    op,
                });
                words.clear();
                op = Some(next_op);
            }
        }
    }

    // Trailing operator with nothing after it: the empty buffer is simply
    // never closed into a link.
    if !words.is_empty() {
        links.push(Link {
            command: words.join(" "),
            pipes,
            op,
        });
    }

    Ok(links)
}

fn op_symbol(op: ChainOp) -> &'static str {
    match op {
        ChainOp::And => "&&",
        ChainOp::Or => "||",
        ChainOp::Sequence => ";",
    }
}
