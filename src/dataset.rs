// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{MiningError, Result};
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Format {
    Arff,
    Csv,
}

impl Format {
    pub fn from_path(path: &Path) -> Format {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("arff") => Format::Arff,
            _ => Format::Csv,
        }
    }
}

/// Parsed tabular data: one raw value per attribute for every record.
#[derive(Debug)]
pub struct Dataset {
    pub relation: Option<String>,
    pub attribute_names: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl Dataset {
    pub fn open(path: &Path) -> Result<Dataset> {
        let file = File::open(path).map_err(|source| MiningError::DataUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let origin = path.display().to_string();
        Dataset::from_reader(BufReader::new(file), Format::from_path(path), &origin)
    }

    pub fn from_reader<R: BufRead>(reader: R, format: Format, origin: &str) -> Result<Dataset> {
        let mut parser = Parser::new(format, origin);
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| MiningError::Read {
                origin: origin.to_owned(),
                line: index + 1,
                source,
            })?;
            parser.feed(index + 1, &line)?;
        }
        parser.finish()
    }

    pub fn num_instances(&self) -> usize {
        self.records.len()
    }

    pub fn num_attributes(&self) -> usize {
        self.attribute_names.len()
    }
}

#[derive(Copy, Clone, PartialEq)]
enum Section {
    Header,
    Data,
}

struct Parser<'a> {
    format: Format,
    origin: &'a str,
    section: Section,
    dataset: Dataset,
}

impl<'a> Parser<'a> {
    fn new(format: Format, origin: &'a str) -> Parser<'a> {
        Parser {
            format,
            origin,
            section: Section::Header,
            dataset: Dataset {
                relation: None,
                attribute_names: vec![],
                records: vec![],
            },
        }
    }

    fn malformed(&self, line: usize, detail: String) -> MiningError {
        MiningError::MalformedRow {
            origin: self.origin.to_owned(),
            line,
            detail,
        }
    }

    fn feed(&mut self, line_number: usize, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }
        match (self.format, self.section) {
            (Format::Arff, _) if line.starts_with('%') => Ok(()),
            (Format::Arff, Section::Header) => self.arff_header(line_number, line),
            (Format::Csv, Section::Header) => {
                self.dataset.attribute_names = split_values(line)
                    .map_err(|detail| self.malformed(line_number, detail))?;
                self.section = Section::Data;
                Ok(())
            }
            (_, Section::Data) => self.data_row(line_number, line),
        }
    }

    fn arff_header(&mut self, line_number: usize, line: &str) -> Result<()> {
        let (keyword, rest) = match line.find(char::is_whitespace) {
            Some(pos) => (&line[..pos], line[pos..].trim()),
            None => (line, ""),
        };
        if keyword.eq_ignore_ascii_case("@relation") {
            self.dataset.relation = Some(unquote(rest).to_owned());
        } else if keyword.eq_ignore_ascii_case("@attribute") {
            let name = attribute_name(rest)
                .ok_or_else(|| self.malformed(line_number, "attribute has no name".to_owned()))?;
            self.dataset.attribute_names.push(name);
        } else if keyword.eq_ignore_ascii_case("@data") {
            self.section = Section::Data;
        } else {
            return Err(self.malformed(
                line_number,
                format!("unexpected header line '{}'", line),
            ));
        }
        Ok(())
    }

    fn data_row(&mut self, line_number: usize, line: &str) -> Result<()> {
        if self.format == Format::Arff && line.starts_with('{') {
            return Err(self.malformed(line_number, "sparse rows are not supported".to_owned()));
        }
        let values = split_values(line).map_err(|detail| self.malformed(line_number, detail))?;
        let expected = self.dataset.attribute_names.len();
        if values.len() != expected {
            return Err(self.malformed(
                line_number,
                format!("expected {} values, found {}", expected, values.len()),
            ));
        }
        self.dataset.records.push(values);
        Ok(())
    }

    fn finish(self) -> Result<Dataset> {
        if self.dataset.attribute_names.is_empty() {
            return Err(MiningError::MissingHeader {
                origin: self.origin.to_owned(),
                detail: "no attributes declared".to_owned(),
            });
        }
        if self.section != Section::Data {
            return Err(MiningError::MissingHeader {
                origin: self.origin.to_owned(),
                detail: "no @data section".to_owned(),
            });
        }
        Ok(self.dataset)
    }
}

// The name is the first token after @attribute, possibly quoted; the
// declared type that follows is irrelevant since every value is treated
// as an opaque string.
fn attribute_name(rest: &str) -> Option<String> {
    let mut chars = rest.chars();
    match chars.next() {
        Some(q) if q == '\'' || q == '"' => {
            let body = &rest[1..];
            body.find(q).map(|end| body[..end].to_owned())
        }
        Some(_) => rest
            .split(|c: char| c.is_whitespace() || c == '{')
            .next()
            .map(str::to_owned),
        None => None,
    }
}

fn unquote(s: &str) -> &str {
    let s = s.trim();
    if s.len() >= 2 {
        let first = s.as_bytes()[0];
        let last = s.as_bytes()[s.len() - 1];
        if (first == b'\'' || first == b'"') && first == last {
            return &s[1..s.len() - 1];
        }
    }
    s
}

// Comma separated values, where commas inside single or double quotes do
// not split.
fn split_values(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut values = vec![];
    let mut current = String::new();
    let mut quote: Option<char> = None;
    for c in line.chars() {
        match quote {
            Some(q) if c == q => {
                quote = None;
                current.push(c);
            }
            Some(_) => current.push(c),
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                current.push(c);
            }
            None if c == ',' => {
                values.push(unquote(&current).to_owned());
                current.clear();
            }
            None => current.push(c),
        }
    }
    if let Some(q) = quote {
        return Err(format!("unterminated {} quote", q));
    }
    values.push(unquote(&current).to_owned());
    Ok(values)
}
