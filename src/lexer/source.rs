use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    rc::Rc,
};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// One raw source line together with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

impl Line {
    /// Blank lines and `//` comment lines are never handed to the validator.
    pub fn is_eligible(&self) -> bool {
        let trimmed = self.text.trim_start();
        !trimmed.is_empty() && !trimmed.starts_with("//")
    }

    /// A line ending with `{` opens a method, `if` or `while` body.
    pub fn opens_scope(&self) -> bool {
        self.text.trim_end().ends_with('{')
    }

    /// A closing brace must stand on a line of its own.
    pub fn closes_scope(&self) -> bool {
        self.text.trim() == "}"
    }
}

/// The whole source, read once and shared by both validation passes.
#[derive(Debug, Clone)]
pub struct SourceFile {
    file: Rc<String>,
    lines: Vec<Line>,
}

impl SourceFile {
    pub fn new(source: &str, file: Option<String>) -> SourceFile {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        SourceFile {
            file: file_name,
            lines: source
                .lines()
                .enumerate()
                .map(|(index, text)| Line {
                    number: index + 1,
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    pub fn from_reader<R: BufRead>(reader: R, file: Option<String>) -> Result<SourceFile, Error> {
        let name = file.clone().unwrap_or_else(|| String::from("shell"));
        let mut lines = vec![];

        for (index, text) in reader.lines().enumerate() {
            let text = text.map_err(|e| io_error(&name, e))?;
            lines.push(Line {
                number: index + 1,
                text,
            });
        }

        Ok(SourceFile {
            file: Rc::new(name),
            lines,
        })
    }

    pub fn open(path: &Path) -> Result<SourceFile, Error> {
        let name = path.to_string_lossy().to_string();
        let file = File::open(path).map_err(|e| io_error(&name, e))?;
        SourceFile::from_reader(BufReader::new(file), Some(name))
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Looks up a line by its 1-based number.
    pub fn line(&self, number: usize) -> Option<&Line> {
        number.checked_sub(1).and_then(|index| self.lines.get(index))
    }
}

fn io_error(file: &str, error: std::io::Error) -> Error {
    Error::new(
        ErrorImpl::Io {
            path: file.to_string(),
            message: error.to_string(),
        },
        Position(0, Rc::new(file.to_string())),
    )
}
