//! FILENAME: core/persistence/src/csv_writer.rs
//! PURPOSE: Writes a frame out as comma-separated text.
//! CONTEXT: One optional header line of variable names, then one line per
//! global coordinate tuple. Fields are written verbatim: no quoting, so a
//! formatted value containing a comma will shift the columns after it.
//! Lines end with '\n' on every platform.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mdframe::{Frame, TextVisitor};

use crate::error::ExportError;
use crate::layout::TableLayout;
use crate::options::ExportOptions;

/// Exports `frame` to a CSV file at `path`, creating or truncating it.
pub fn export_table<P: AsRef<Path>>(
    frame: &Frame,
    path: P,
    include_header: bool,
) -> Result<(), ExportError> {
    export_table_with(frame, path, &ExportOptions::new(include_header)).map(|_| ())
}

/// Same as `export_table`, returning the number of data rows written.
///
/// The layout is validated before the file is touched, so an empty or
/// inconsistent frame leaves any existing file at `path` as it was. Once
/// writing has started, a failure leaves the rows written so far in place.
pub fn export_table_with<P: AsRef<Path>>(
    frame: &Frame,
    path: P,
    options: &ExportOptions,
) -> Result<usize, ExportError> {
    let path = path.as_ref();
    let layout = TableLayout::build(frame)?;

    let file = File::create(path).map_err(|source| {
        log::error!(target: "EXPORT", "open failed path={} err={}", path.display(), source);
        ExportError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mut out = BufWriter::new(file);
    let rows = write_layout(&layout, &mut out, options)?;
    out.flush()?;

    log::info!(target: "EXPORT", "wrote path={} rows={}", path.display(), rows);
    Ok(rows)
}

/// Writes `frame` as CSV into any writer. Returns the number of data rows.
pub fn write_table<W: Write>(
    frame: &Frame,
    writer: &mut W,
    options: &ExportOptions,
) -> Result<usize, ExportError> {
    let layout = TableLayout::build(frame)?;
    write_layout(&layout, writer, options)
}

fn write_layout<W: Write>(
    layout: &TableLayout<'_>,
    out: &mut W,
    options: &ExportOptions,
) -> Result<usize, ExportError> {
    log::debug!(
        target: "EXPORT",
        "layout variables={} dimensions={} shape={:?} rows~{}",
        layout.variables().len(),
        layout.dimensions().len(),
        layout.shape(),
        layout.row_count_hint()
    );

    if options.include_header {
        writeln!(out, "{}", layout.header_line())?;
    }

    let mut visitor = TextVisitor;
    let mut local: Vec<usize> = Vec::with_capacity(layout.max_rank());
    let mut line = String::new();
    let mut rows = 0usize;

    for global in layout.rows() {
        line.clear();
        for (column, var) in layout.variables().iter().enumerate() {
            layout.fill_local(column, &global, &mut local);
            let value = var.at(&local)?;
            if column > 0 {
                line.push(',');
            }
            line.push_str(&value.accept(&mut visitor));
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
        rows += 1;
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdframe::VariableData;

    fn to_string(frame: &Frame, include_header: bool) -> Result<String, ExportError> {
        let mut buf: Vec<u8> = Vec::new();
        write_table(frame, &mut buf, &ExportOptions::new(include_header))?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_mixed_kinds() {
        let mut frame = Frame::new();
        frame.add_dimension("i", 2).unwrap();
        frame
            .add_variable("count", &["i"], VariableData::Int(vec![3, -4]))
            .unwrap();
        frame
            .add_variable("flag", &["i"], VariableData::Bool(vec![true, false]))
            .unwrap();
        frame
            .add_variable("name", &["i"], VariableData::Text(vec!["x".into(), "y".into()]))
            .unwrap();
        frame
            .add_variable("ratio", &["i"], VariableData::Float(vec![0.25, 2.0]))
            .unwrap();

        let out = to_string(&frame, true).unwrap();
        assert_eq!(out, "count,flag,name,ratio\n3,true,x,0.25\n-4,false,y,2\n");
    }

    #[test]
    fn test_rank_zero_repeats_on_every_row() {
        let mut frame = Frame::new();
        frame.add_dimension("t", 3).unwrap();
        frame
            .add_variable("scale", &[], VariableData::Float(vec![1.5]))
            .unwrap();
        frame
            .add_variable("t_val", &["t"], VariableData::Int(vec![7, 8, 9]))
            .unwrap();

        let out = to_string(&frame, false).unwrap();
        assert_eq!(out, "1.5,7\n1.5,8\n1.5,9\n");
    }

    /// Accepts `limit` bytes, then fails every write.
    struct FailingWriter {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let room = self.limit - self.written.len();
            if room == 0 {
                return Err(std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full"));
            }
            let n = room.min(buf.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_keeps_written_prefix() {
        let mut frame = Frame::new();
        frame.add_dimension("t", 3).unwrap();
        frame
            .add_variable("v", &["t"], VariableData::Int(vec![1, 2, 3]))
            .unwrap();

        let mut out = FailingWriter {
            written: Vec::new(),
            limit: 5,
        };
        let err = write_table(&frame, &mut out, &ExportOptions::default()).unwrap_err();

        match err {
            ExportError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::WriteZero),
            other => panic!("Expected Io error, got {:?}", other),
        }
        assert_eq!(String::from_utf8(out.written).unwrap(), "v\n1\n2");
    }

    #[test]
    fn test_short_storage_fails_lookup() {
        let mut frame = Frame::new();
        frame.add_dimension("t", 2).unwrap();
        frame
            .add_variable("v", &["t"], VariableData::Int(vec![1, 2]))
            .unwrap();
        if let Some(v) = frame.variables.get_mut("v") {
            v.data = VariableData::Int(vec![1]);
        }

        let mut buf: Vec<u8> = Vec::new();
        let err = write_table(&frame, &mut buf, &ExportOptions::default()).unwrap_err();
        assert!(matches!(err, ExportError::Lookup(_)));
        // Rows before the failure stay written.
        assert_eq!(String::from_utf8(buf).unwrap(), "v\n1\n");
    }

    #[test]
    fn test_header_only_when_shape_is_empty_set() {
        // A zero-sized dimension cannot be added through the frame API,
        // but a frame edited directly can still carry one.
        let mut frame = Frame::new();
        frame.add_dimension("t", 1).unwrap();
        frame
            .add_variable("v", &["t"], VariableData::Int(vec![1]))
            .unwrap();
        frame.add_dimension("empty", 1).unwrap();
        if let Some(d) = frame.dimensions.get_mut("empty") {
            d.size = 0;
        }

        assert_eq!(to_string(&frame, true).unwrap(), "v\n");
        assert_eq!(to_string(&frame, false).unwrap(), "");
    }
}
