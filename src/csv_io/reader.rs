//! Gemeinsamer, fehlertoleranter CSV-Zeilenleser.

use crate::core::{GraphError, GraphResult};
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};
use std::io::Read;

/// Eine nicht-leere CSV-Zeile mit ihrer 1-basierten Zeilennummer.
pub(super) struct Record {
    pub line: u64,
    pub fields: StringRecord,
}

impl Record {
    /// Feld an Position `index` (bereits getrimmt)
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index)
    }

    /// Anzahl der Felder ohne leere Felder am Zeilenende
    pub fn len(&self) -> usize {
        let mut len = self.fields.len();
        while len > 0 && self.fields.get(len - 1).is_some_and(str::is_empty) {
            len -= 1;
        }
        len
    }
}

/// Iterator über die Datenzeilen einer CSV-Quelle.
///
/// Leere Zeilen werden ignoriert, eine optionale Kopfzeile (erkannt über
/// `is_header`) nur als allererste Zeile. Nach einem I/O-Fehler endet die
/// Iteration mit genau einem `MalformedRow`.
pub(super) struct Records<R: Read> {
    inner: StringRecordsIntoIter<R>,
    is_header: fn(&StringRecord) -> bool,
    first: bool,
    done: bool,
    last_line: u64,
}

impl<R: Read> Records<R> {
    pub fn new(input: R, is_header: fn(&StringRecord) -> bool) -> Self {
        let inner = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(input)
            .into_records();
        Self {
            inner,
            is_header,
            first: true,
            done: false,
            last_line: 0,
        }
    }
}

impl<R: Read> Iterator for Records<R> {
    type Item = GraphResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let result = self.inner.next()?;
            let first = std::mem::replace(&mut self.first, false);

            match result {
                Ok(fields) => {
                    let line = fields
                        .position()
                        .map(|p| p.line())
                        .unwrap_or(self.last_line + 1);
                    self.last_line = line;

                    if fields.iter().all(str::is_empty) {
                        continue;
                    }
                    if first && (self.is_header)(&fields) {
                        log::debug!("CSV-Kopfzeile übersprungen: {:?}", fields);
                        continue;
                    }
                    return Some(Ok(Record { line, fields }));
                }
                Err(err) => {
                    let line = err
                        .position()
                        .map(|p| p.line())
                        .unwrap_or(self.last_line + 1);
                    self.last_line = line;
                    if err.is_io_error() {
                        self.done = true;
                    }
                    return Some(Err(GraphError::malformed(line, err.to_string())));
                }
            }
        }
        None
    }
}

/// Parst eine Node-ID.
pub(super) fn parse_id(line: u64, text: &str) -> GraphResult<i64> {
    text.parse::<i64>()
        .map_err(|_| GraphError::malformed(line, format!("ungültige Node-ID '{}'", text)))
}

/// Parst eine endliche Koordinate.
pub(super) fn parse_coordinate(line: u64, text: &str) -> GraphResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GraphError::malformed(
            line,
            format!("ungültige Koordinate '{}'", text),
        )),
    }
}

/// Kopfzeile, wenn das erste Feld keine Ganzzahl ist.
pub(super) fn first_field_not_id(fields: &StringRecord) -> bool {
    fields.get(0).is_some_and(|f| f.parse::<i64>().is_err())
}
