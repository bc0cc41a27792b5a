use crate::Position;

use super::{
    lexer::tokenize,
    source::{Line, SourceFile},
    tokens::Token,
};

/// A forward-only cursor over the eligible lines of a [`SourceFile`].
///
/// Lines are tokenized lazily, one at a time, when the cursor reaches them.
/// Each validation pass creates its own tokenizer over the same source.
pub struct Tokenizer<'a> {
    source: &'a SourceFile,
    next_line: usize,
    line: Option<&'a Line>,
    tokens: Vec<Token>,
    index: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a SourceFile) -> Tokenizer<'a> {
        let mut tokenizer = Tokenizer {
            source,
            next_line: 0,
            line: None,
            tokens: vec![],
            index: 0,
        };
        tokenizer.advance_line();
        tokenizer
    }

    /// Moves to the next token, pulling the next eligible line once the
    /// current one is exhausted.
    pub fn advance(&mut self) {
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
        } else {
            self.advance_line();
        }
    }

    /// Drops whatever is left of the current line and moves to the next
    /// eligible one.
    pub fn advance_line(&mut self) {
        self.line = None;
        self.tokens.clear();
        self.index = 0;

        let lines = self.source.lines();
        while let Some(line) = lines.get(self.next_line) {
            self.next_line += 1;
            if line.is_eligible() {
                self.line = Some(line);
                self.tokens = tokenize(&line.text);
                break;
            }
        }
    }

    /// The current line, or `None` once the input is exhausted.
    pub fn current_line(&self) -> Option<&'a Line> {
        self.line
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.line.and(self.tokens.get(self.index))
    }

    pub fn at_end(&self) -> bool {
        self.line.is_none()
    }

    /// Where the cursor currently is, for error reporting.
    pub fn position(&self) -> Position {
        match self.line {
            Some(line) => Position(line.number, self.source.file().clone()),
            None => Position(
                self.source.lines().len(),
                self.source.file().clone(),
            ),
        }
    }
}
