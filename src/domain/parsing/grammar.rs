//! Rule tables and primitives shared by the response parsers.
//!
//! Model output is unstructured text, so every field carries an explicit
//! tolerance policy instead of failing the whole batch.

/// How a labelled value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    Text,
    Number,
    /// Comma-separated values.
    List,
}

/// What happens when a field is absent or unusable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldPolicy {
    /// The block is dropped.
    Required,
    /// The given number stands in.
    Fallback(f64),
    /// The field is left empty.
    Optional,
}

/// One `LABEL: value` rule of a block grammar.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule<F> {
    pub label: &'static str,
    pub field: F,
    pub shape: FieldShape,
    pub policy: FieldPolicy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
}

/// Fields extracted from one block, after policies were applied.
#[derive(Debug, Clone)]
pub struct BlockFields<F> {
    values: Vec<(F, FieldValue)>,
}

impl<F: Copy + PartialEq> BlockFields<F> {
    fn set(&mut self, field: F, value: FieldValue) {
        match self.values.iter_mut().find(|(existing, _)| *existing == field) {
            Some(slot) => slot.1 = value,
            None => self.values.push((field, value)),
        }
    }

    fn get(&self, field: F) -> Option<&FieldValue> {
        self.values.iter().find(|(existing, _)| *existing == field).map(|(_, value)| value)
    }

    fn has(&self, field: F) -> bool {
        self.get(field).is_some()
    }

    pub fn text(&self, field: F) -> String {
        match self.get(field) {
            Some(FieldValue::Text(value)) => value.clone(),
            _ => String::new(),
        }
    }

    pub fn number(&self, field: F) -> f64 {
        match self.get(field) {
            Some(FieldValue::Number(value)) => *value,
            _ => 0.0,
        }
    }

    pub fn list(&self, field: F) -> Vec<String> {
        match self.get(field) {
            Some(FieldValue::List(values)) => values.clone(),
            _ => Vec::new(),
        }
    }
}

/// Blocks following each `sentinel`, paired with their 1-based index.
///
/// Text before the first sentinel is discarded.
pub fn blocks<'a>(input: &'a str, sentinel: &'a str) -> impl Iterator<Item = (usize, &'a str)> {
    input.split(sentinel).enumerate().skip(1)
}

/// Split a line on its first `:` into trimmed (label, value).
pub fn split_label(line: &str) -> Option<(&str, &str)> {
    let (label, value) = line.split_once(':')?;
    Some((label.trim(), value.trim()))
}

/// Apply `rules` to the lines of one block.
///
/// Returns `None` when a required field is missing, empty, or unparseable.
/// Unknown labels and lines without `:` are ignored; a repeated label
/// overwrites the earlier value.
pub fn extract_fields<F: Copy + PartialEq>(
    block: &str,
    rules: &[FieldRule<F>],
) -> Option<BlockFields<F>> {
    let mut fields = BlockFields { values: Vec::new() };

    for line in block.lines().filter(|line| !line.trim().is_empty()) {
        let Some((label, value)) = split_label(line) else {
            continue;
        };
        let Some(rule) = rules.iter().find(|rule| rule.label == label) else {
            continue;
        };

        match interpret(rule, value) {
            Some(parsed) => fields.set(rule.field, parsed),
            None => {
                // Unusable value: forget any earlier occurrence so policy decides.
                fields.values.retain(|(existing, _)| *existing != rule.field);
            }
        }
    }

    for rule in rules {
        if fields.has(rule.field) {
            continue;
        }
        match rule.policy {
            FieldPolicy::Required => return None,
            FieldPolicy::Fallback(value) => fields.set(rule.field, FieldValue::Number(value)),
            FieldPolicy::Optional => {}
        }
    }

    Some(fields)
}

fn interpret<F>(rule: &FieldRule<F>, value: &str) -> Option<FieldValue> {
    match rule.shape {
        FieldShape::Text => {
            if value.is_empty() && rule.policy == FieldPolicy::Required {
                None
            } else {
                Some(FieldValue::Text(value.to_string()))
            }
        }
        FieldShape::Number => parse_leading_float(value).map(FieldValue::Number),
        FieldShape::List => Some(FieldValue::List(split_list(value))),
    }
}

/// Split a comma-separated value and trim each element.
///
/// Only an empty value yields `[]`; empty elements between commas are kept.
pub fn split_list(value: &str) -> Vec<String> {
    if value.trim().is_empty() {
        return Vec::new();
    }
    value.split(',').map(|item| item.trim().to_string()).collect()
}

/// Parse the longest leading decimal number (`"9.2/10"` reads as 9.2).
pub fn parse_leading_float(value: &str) -> Option<f64> {
    let bytes = value.trim_start().as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if frac_end > frac_start || digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let text = std::str::from_utf8(&bytes[..end]).ok()?;
    text.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// How items of a copy sub-list are delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// Every non-blank line is an item.
    Lines,
    /// Multi-line passages separated by `---`.
    ///
    /// Enumeration markers also separate passages, but only when the first
    /// content line is enumerated; otherwise numbered lines stay inside the text.
    Passages,
}

/// Split a sub-list body into items according to `shape`.
pub fn list_items(lines: &[&str], shape: ListShape) -> Vec<String> {
    match shape {
        ListShape::Lines => lines
            .iter()
            .map(|line| strip_item_marker(line))
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect(),
        ListShape::Passages => {
            let enumerated = lines
                .iter()
                .map(|line| line.trim())
                .find(|line| !line.is_empty() && *line != "---")
                .is_some_and(|line| strip_enumeration(line).is_some());
            let mut passages: Vec<Vec<&str>> = Vec::new();
            let mut current: Vec<&str> = Vec::new();

            for line in lines {
                let trimmed = line.trim();
                if trimmed == "---" {
                    passages.push(std::mem::take(&mut current));
                    continue;
                }
                if let Some(rest) = strip_enumeration(trimmed).filter(|_| enumerated) {
                    passages.push(std::mem::take(&mut current));
                    current.push(rest);
                    continue;
                }
                current.push(line.trim_end());
            }
            passages.push(current);

            passages
                .into_iter()
                .map(|passage| passage.join("\n").trim().to_string())
                .filter(|passage| !passage.is_empty())
                .collect()
        }
    }
}

/// Remove a leading `1.` / `2)` / `-` / `*` / `•` marker and one pair of quotes.
pub fn strip_item_marker(line: &str) -> &str {
    let trimmed = line.trim();
    let unmarked = strip_enumeration(trimmed)
        .or_else(|| {
            ["- ", "* ", "• "].iter().find_map(|bullet| trimmed.strip_prefix(bullet)).map(str::trim)
        })
        .unwrap_or(trimmed);

    unmarked
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(unmarked)
}

fn strip_enumeration(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    let rest = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')'))?;
    if rest.is_empty() {
        return Some(rest);
    }
    if rest.starts_with(char::is_whitespace) { Some(rest.trim_start()) } else { None }
}
