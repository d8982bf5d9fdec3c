//! Comma-separated table files for recipe URLs and recipe details.
//!
//! List-valued fields (ingredients, method) are stored as one JSON array per
//! cell; absent optional values are empty cells.

use std::io::{self, Read, Write};
use std::mem::take;

use crate::error::TableError;
use crate::model::{IngredientLine, Nutrition, RecipeRecord};

pub const URL_HEADER: [&str; 1] = ["Recipe URLs"];

pub const DETAIL_HEADER: [&str; 19] = [
    "Title",
    "Image Link",
    "Raw Ingredients",
    "Measured Ingredients",
    "Method",
    "Author",
    "Prep Time",
    "Cook Time",
    "Difficulty Level",
    "Rating",
    "Ratings Count",
    "Calories",
    "Fat",
    "Saturates",
    "Carbs",
    "Sugars",
    "Fibre",
    "Protein",
    "Salt",
];

const SEP: char = ',';

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant). Blank lines are skipped.
fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == SEP && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing row that has no final newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

fn check_header(rows: &mut Vec<Vec<String>>, expected: &[&str]) -> Result<(), TableError> {
    if rows.is_empty() {
        return Err(TableError::MissingHeader("empty file".to_string()));
    }
    let header = rows.remove(0);
    if header.len() != expected.len() || header.iter().zip(expected).any(|(a, b)| a != b) {
        return Err(TableError::MissingHeader(header.join(",")));
    }
    Ok(())
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer.
fn write_row<W: Write, S: AsRef<str>>(w: &mut W, row: &[S]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first {
            write!(w, "{}", SEP)?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn record_cells(record: &RecipeRecord) -> Result<Vec<String>, TableError> {
    let nutrition = &record.nutrition;
    Ok(vec![
        record.title.clone(),
        record.image_link.clone(),
        serde_json::to_string(&record.raw_ingredients())?,
        serde_json::to_string(&record.measured_ingredients())?,
        serde_json::to_string(&record.method)?,
        record.author.clone().unwrap_or_default(),
        record.prep_time.to_string(),
        record.cook_time.to_string(),
        record.difficulty.clone(),
        optional(record.rating),
        optional(record.ratings_count),
        optional(nutrition.calories),
        optional(nutrition.fat),
        optional(nutrition.saturates),
        optional(nutrition.carbs),
        optional(nutrition.sugars),
        optional(nutrition.fibre),
        optional(nutrition.protein),
        optional(nutrition.salt),
    ])
}

/// Writes the URL table: a `Recipe URLs` header then one URL per row.
pub fn write_url_table<W, I, S>(mut w: W, urls: I) -> Result<(), TableError>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    write_row(&mut w, &URL_HEADER)?;
    for url in urls {
        write_row(&mut w, &[url])?;
    }
    w.flush()?;
    Ok(())
}

/// Writes the detail table, one row per record.
pub fn write_detail_table<'a, W, I>(mut w: W, records: I) -> Result<(), TableError>
where
    W: Write,
    I: IntoIterator<Item = &'a RecipeRecord>,
{
    write_row(&mut w, &DETAIL_HEADER)?;
    for record in records {
        write_row(&mut w, &record_cells(record)?)?;
    }
    w.flush()?;
    Ok(())
}

/* ---------------- Reading ---------------- */

pub fn read_url_table<R: Read>(mut r: R) -> Result<Vec<String>, TableError> {
    let mut text = String::new();
    r.read_to_string(&mut text)?;

    let mut rows = parse_rows(&text);
    check_header(&mut rows, &URL_HEADER)?;

    Ok(rows
        .into_iter()
        .filter_map(|row| row.into_iter().next())
        .collect())
}

pub fn read_detail_table<R: Read>(mut r: R) -> Result<Vec<RecipeRecord>, TableError> {
    let mut text = String::new();
    r.read_to_string(&mut text)?;

    let mut rows = parse_rows(&text);
    check_header(&mut rows, &DETAIL_HEADER)?;

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| parse_record(index + 1, row))
        .collect()
}

struct RowReader {
    row: usize,
    cells: std::vec::IntoIter<String>,
}

impl RowReader {
    /// Cells are consumed in header order.
    fn take_cell(&mut self) -> String {
        self.cells.next().unwrap_or_default()
    }

    fn json<T: serde::de::DeserializeOwned>(&mut self, column: &'static str) -> Result<T, TableError> {
        let cell = self.take_cell();
        serde_json::from_str(&cell).map_err(|e| self.invalid(column, e))
    }

    fn number<T: std::str::FromStr>(&mut self, column: &'static str) -> Result<T, TableError>
    where
        T::Err: std::fmt::Display,
    {
        let cell = self.take_cell();
        cell.parse().map_err(|e| self.invalid(column, e))
    }

    fn optional_number<T: std::str::FromStr>(
        &mut self,
        column: &'static str,
    ) -> Result<Option<T>, TableError>
    where
        T::Err: std::fmt::Display,
    {
        let cell = self.take_cell();
        if cell.is_empty() {
            return Ok(None);
        }
        cell.parse().map(Some).map_err(|e| self.invalid(column, e))
    }

    fn invalid(&self, column: &'static str, error: impl std::fmt::Display) -> TableError {
        TableError::InvalidCell {
            row: self.row,
            column,
            message: error.to_string(),
        }
    }
}

fn parse_record(row: usize, cells: Vec<String>) -> Result<RecipeRecord, TableError> {
    if cells.len() != DETAIL_HEADER.len() {
        return Err(TableError::ColumnCount {
            row,
            expected: DETAIL_HEADER.len(),
            found: cells.len(),
        });
    }
    let mut reader = RowReader {
        row,
        cells: cells.into_iter(),
    };

    let title = reader.take_cell();
    let image_link = reader.take_cell();
    let raw: Vec<Option<String>> = reader.json("Raw Ingredients")?;
    let measured: Vec<String> = reader.json("Measured Ingredients")?;
    if raw.len() != measured.len() {
        return Err(TableError::Misaligned { row });
    }
    let method: Vec<String> = reader.json("Method")?;
    let author = Some(reader.take_cell()).filter(|author| !author.is_empty());

    Ok(RecipeRecord {
        title,
        image_link,
        ingredients: measured
            .into_iter()
            .zip(raw)
            .map(|(measured, raw)| IngredientLine { measured, raw })
            .collect(),
        method,
        author,
        prep_time: reader.number("Prep Time")?,
        cook_time: reader.number("Cook Time")?,
        difficulty: reader.take_cell(),
        rating: reader.optional_number("Rating")?,
        ratings_count: reader.optional_number("Ratings Count")?,
        nutrition: Nutrition {
            calories: reader.optional_number("Calories")?,
            fat: reader.optional_number("Fat")?,
            saturates: reader.optional_number("Saturates")?,
            carbs: reader.optional_number("Carbs")?,
            sugars: reader.optional_number("Sugars")?,
            fibre: reader.optional_number("Fibre")?,
            protein: reader.optional_number("Protein")?,
            salt: reader.optional_number("Salt")?,
        },
    })
}
