//! Pretty-printer for generated libdef text.
//!
//! The emitter produces everything on as few lines as possible. The printer
//! re-flows that text into a stable layout:
//! - block-level braces put each member on its own indented line
//! - braces nested inside `(`, `[` or `<` stay inline
//! - top-level declarations ending in a block are separated by a blank line
//! - block comments are re-indented
//!
//! It checks delimiter balance as it goes, so malformed text is reported as
//! a [`FormatError`] instead of being written out.

use crate::error::FormatError;

/// Formats raw declaration text.
pub trait Formatter {
    /// Re-flow `source`, or report why it is not well formed.
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Layout knobs for [`FlowFormatter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Print `{ a: T }` instead of `{a: T}` for inline objects.
    pub bracket_spacing: bool,
    /// Keep a trailing comma after the last member of a block.
    pub trailing_commas: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            bracket_spacing: false,
            trailing_commas: true,
        }
    }
}

/// The built-in [`Formatter`] for Flow declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowFormatter {
    options: FormatOptions,
}

impl FlowFormatter {
    /// Formatter with custom layout options.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// The options this formatter prints with.
    pub fn options(&self) -> FormatOptions {
        self.options
    }
}

impl Formatter for FlowFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        Printer::new(source, self.options).run()
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    opener: char,
    offset: usize,
    block: bool,
}

fn closer_for(opener: char) -> char {
    match opener {
        '{' => '}',
        '(' => ')',
        '[' => ']',
        _ => '>',
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[allow(clippy::struct_excessive_bools)]
struct Printer<'a> {
    chars: Vec<(usize, char)>,
    source: &'a str,
    options: FormatOptions,
    pos: usize,
    out: String,
    stack: Vec<Frame>,
    at_line_start: bool,
    pending_space: bool,
    no_space_next: bool,
    after_block: bool,
}

impl<'a> Printer<'a> {
    fn new(source: &'a str, options: FormatOptions) -> Self {
        Self {
            chars: source.char_indices().collect(),
            source,
            options,
            pos: 0,
            out: String::with_capacity(source.len() * 2),
            stack: Vec::new(),
            at_line_start: true,
            pending_space: false,
            no_space_next: false,
            after_block: false,
        }
    }

    fn run(mut self) -> Result<String, FormatError> {
        while let Some(c) = self.peek(0) {
            let offset = self.offset();
            match c {
                c if c.is_whitespace() => {
                    self.pending_space = true;
                    self.pos += 1;
                }
                '/' if self.peek(1) == Some('*') => self.block_comment(offset)?,
                '/' if self.peek(1) == Some('/') => self.line_comment(),
                '\'' | '"' => self.string_literal(c, offset)?,
                '{' => self.open_brace(offset),
                '}' => self.close_brace(offset)?,
                '(' | '[' | '<' => {
                    self.after_block = false;
                    self.token(&c.to_string());
                    self.stack.push(Frame {
                        opener: c,
                        offset,
                        block: false,
                    });
                    self.no_space_next = true;
                    self.pos += 1;
                }
                ')' | ']' | '>' => {
                    self.pop_frame(c, offset)?;
                    self.trim_spaces();
                    self.out.push(c);
                    self.pending_space = false;
                    self.after_block = false;
                    self.pos += 1;
                }
                '=' if self.peek(1) == Some('>') => {
                    self.after_block = false;
                    self.token("=>");
                    self.pos += 2;
                }
                ',' => {
                    self.trim_spaces();
                    self.out.push(',');
                    self.pending_space = false;
                    self.after_block = false;
                    self.pos += 1;
                    if self.at_block_level() && !self.stack.is_empty() {
                        self.newline();
                    }
                }
                ';' => {
                    self.trim_spaces();
                    self.out.push(';');
                    self.pending_space = false;
                    self.after_block = false;
                    self.pos += 1;
                    if self.at_block_level() {
                        self.newline();
                    }
                }
                _ => {
                    if self.after_block {
                        if is_word_char(c) {
                            self.break_after_block();
                        } else {
                            self.after_block = false;
                        }
                    }
                    self.token(&c.to_string());
                    self.pos += 1;
                }
            }
        }

        if let Some(frame) = self.stack.last() {
            return Err(FormatError::UnclosedDelimiter {
                opener: frame.opener,
                offset: frame.offset,
            });
        }

        let mut out = self.out.trim_end().to_string();
        out.push('\n');
        Ok(out)
    }

    fn peek(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).map(|(_, c)| *c)
    }

    fn offset(&self) -> usize {
        self.chars
            .get(self.pos)
            .map_or(self.source.len(), |(offset, _)| *offset)
    }

    fn depth(&self) -> usize {
        self.stack.iter().filter(|f| f.block).count()
    }

    /// True when every open delimiter is a block brace.
    fn at_block_level(&self) -> bool {
        self.stack.iter().all(|f| f.block)
    }

    fn write_indent(&mut self) {
        let width = self.depth() * self.options.indent_width;
        self.out.extend(std::iter::repeat_n(' ', width));
        self.at_line_start = false;
    }

    /// Write a token, honoring collapsed whitespace and indentation.
    fn token(&mut self, text: &str) {
        if self.at_line_start {
            self.write_indent();
        } else if self.pending_space && !self.no_space_next {
            self.out.push(' ');
        }
        self.pending_space = false;
        self.no_space_next = false;
        self.out.push_str(text);
    }

    fn trim_spaces(&mut self) {
        let len = self.out.trim_end_matches([' ', '\t']).len();
        self.out.truncate(len);
    }

    fn newline(&mut self) {
        self.trim_spaces();
        self.out.push('\n');
        self.at_line_start = true;
        self.pending_space = false;
    }

    fn break_after_block(&mut self) {
        self.after_block = false;
        self.newline();
        if self.depth() <= 1 {
            self.out.push('\n');
        }
    }

    fn last_content_char(&self) -> Option<char> {
        self.out.trim_end().chars().last()
    }

    fn pop_frame(&mut self, found: char, offset: usize) -> Result<Frame, FormatError> {
        let frame = self
            .stack
            .pop()
            .ok_or(FormatError::UnexpectedCloser { found, offset })?;
        let expected = closer_for(frame.opener);
        if expected != found {
            return Err(FormatError::MismatchedDelimiter {
                expected,
                found,
                offset,
            });
        }
        Ok(frame)
    }

    fn open_brace(&mut self, offset: usize) {
        let block = self.at_block_level();
        self.after_block = false;

        // `{}` with only whitespace inside stays as written.
        let mut ahead = 1;
        while self.peek(ahead).is_some_and(char::is_whitespace) {
            ahead += 1;
        }
        if self.peek(ahead) == Some('}') {
            self.token("{}");
            self.pos += ahead + 1;
            self.after_block = block;
            return;
        }

        self.token("{");
        self.stack.push(Frame {
            opener: '{',
            offset,
            block,
        });
        self.pos += 1;
        if block {
            self.newline();
        } else if self.options.bracket_spacing {
            self.pending_space = true;
        } else {
            self.no_space_next = true;
        }
    }

    fn close_brace(&mut self, offset: usize) -> Result<(), FormatError> {
        let frame = self.pop_frame('}', offset)?;
        self.pos += 1;

        if frame.block {
            let last = self.last_content_char();
            if self.options.trailing_commas {
                if !matches!(last, Some(',' | ';' | '{' | '}')) {
                    self.trim_trailing_whitespace();
                    self.out.push(',');
                }
            } else if last == Some(',') {
                self.trim_trailing_whitespace();
                self.out.pop();
            }
            self.trim_trailing_whitespace();
            self.newline();
            self.token("}");
            self.after_block = true;
        } else {
            self.trim_spaces();
            if self.out.ends_with(',') {
                self.out.pop();
                self.trim_spaces();
            }
            if self.options.bracket_spacing {
                self.out.push(' ');
            }
            self.out.push('}');
            self.pending_space = false;
            self.after_block = false;
        }
        Ok(())
    }

    fn trim_trailing_whitespace(&mut self) {
        let len = self.out.trim_end().len();
        self.out.truncate(len);
    }

    fn block_comment(&mut self, offset: usize) -> Result<(), FormatError> {
        let start = self.pos;
        let mut end = None;
        let mut i = start + 2;
        while i + 1 < self.chars.len() {
            if self.chars[i].1 == '*' && self.chars[i + 1].1 == '/' {
                end = Some(i + 2);
                break;
            }
            i += 1;
        }
        let end = end.ok_or(FormatError::UnterminatedComment { offset })?;
        let text: String = self.chars[start..end].iter().map(|(_, c)| *c).collect();

        if !self.at_line_start {
            self.newline();
        }
        for (n, line) in text.lines().enumerate() {
            let line = line.trim();
            if n == 0 {
                self.token(line);
                continue;
            }
            self.newline();
            self.write_indent();
            if line.starts_with('*') {
                self.out.push(' ');
                self.out.push_str(line);
            } else if line.is_empty() {
                self.out.push_str(" *");
            } else {
                self.out.push_str(" * ");
                self.out.push_str(line);
            }
        }
        self.newline();
        self.after_block = false;
        self.pos = end;
        Ok(())
    }

    fn line_comment(&mut self) {
        let start = self.pos;
        while self.peek(0).is_some_and(|c| c != '\n') {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos]
            .iter()
            .map(|(_, c)| *c)
            .collect();
        self.token(text.trim_end());
        self.newline();
    }

    fn string_literal(&mut self, quote: char, offset: usize) -> Result<(), FormatError> {
        let start = self.pos;
        let mut i = start + 1;
        loop {
            match self.chars.get(i).map(|(_, c)| *c) {
                None | Some('\n') => return Err(FormatError::UnterminatedString { offset }),
                Some('\\') => i += 2,
                Some(c) if c == quote => break,
                Some(_) => i += 1,
            }
        }
        let text: String = self.chars[start..=i].iter().map(|(_, c)| *c).collect();
        if self.after_block {
            self.break_after_block();
        }
        self.token(&text);
        self.pos = i + 1;
        Ok(())
    }
}
