//! Renders `error_lookup_table.cpp`.
//!
//! The generated file is consumed by `error_handler.cpp` via `#include`, so
//! everything outside the per-record lines is fixed text and must not drift.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::record::ErrorRecord;

const BANNER: &str = "\n// Automatically generated by BuildErrorTable.\n// DO NOT MODIFY\n\n";

/// `ErrorInfo` declaration and `ErrorLookup` typedef, identical in every run.
const ERROR_INFO_DECL: &str = include_str!("error_info.inc");

const FEATURE_CHECK: &str = "EPUB_COMPILER_SUPPORTS(CXX_INITIALIZER_LISTS)";

/// Where the generated source goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Write `bytes` as a C++ narrow string literal. `"` and `\` are escaped,
/// every other byte is copied unchanged.
pub fn write_cpp_str(out: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    out.write_all(b"\"")?;
    for chunk in bytes.split_inclusive(|&b| b == b'"' || b == b'\\') {
        match chunk.split_last() {
            Some((&last, head)) if last == b'"' || last == b'\\' => {
                out.write_all(head)?;
                out.write_all(&[b'\\', last])?;
            }
            _ => out.write_all(chunk)?,
        }
    }
    out.write_all(b"\"")
}

/// Copy the license text with every line commented out, then close the block
/// with an empty comment line.
///
/// Splitting on `\n` means a trailing newline in the license yields a final
/// `// ` line; existing generated files depend on that.
pub fn write_license_header(license: &[u8], out: &mut dyn Write) -> io::Result<()> {
    for (i, line) in license.split(|&b| b == b'\n').enumerate() {
        if i > 0 {
            out.write_all(b"\n")?;
        }
        out.write_all(b"// ")?;
        out.write_all(line)?;
    }
    out.write_all(b"\n//\n")
}

/// `"<section>", "<message>"`
fn write_values(out: &mut dyn Write, r: &ErrorRecord) -> io::Result<()> {
    write_cpp_str(out, r.section_reference.as_bytes())?;
    out.write_all(b", ")?;
    write_cpp_str(out, &r.message)
}

/// Write the banner, the type declarations and both renderings of the table.
pub fn write_lookup_table(records: &[ErrorRecord], out: &mut dyn Write) -> io::Result<()> {
    out.write_all(BANNER.as_bytes())?;
    writeln!(out)?;
    out.write_all(ERROR_INFO_DECL.as_bytes())?;
    writeln!(out)?;

    writeln!(out, "#if {FEATURE_CHECK}\n")?;
    writeln!(out, "static const ErrorLookup gErrorLookupTable = {{")?;
    for (i, r) in records.iter().enumerate() {
        write!(
            out,
            "    {{EPUBError::{}, {{{}, {}, ",
            r.name, r.severity, r.spec_reference
        )?;
        write_values(out, r)?;
        out.write_all(b"}}")?;
        if i + 1 == records.len() {
            writeln!(out)?;
        } else {
            writeln!(out, ",")?;
        }
    }
    writeln!(out, "}};")?;

    writeln!(out, "\n#else   // !{FEATURE_CHECK}\n")?;
    writeln!(out, "static ErrorLookup gErrorLookupTable;\n")?;
    writeln!(out, "INITIALIZER(__initErrorTables)\n{{")?;
    for r in records {
        write!(
            out,
            "    gErrorLookupTable[EPUBError::{}] = ErrorInfo({}, {}, ",
            r.name, r.severity, r.spec_reference
        )?;
        write_values(out, r)?;
        out.write_all(b");\n")?;
    }
    writeln!(out, "}}")?;
    writeln!(out, "\n#endif  // !{FEATURE_CHECK}")
}

/// The complete generated file for the given license text and records.
pub fn render(license: &[u8], records: &[ErrorRecord], out: &mut dyn Write) -> io::Result<()> {
    write_license_header(license, out)?;
    write_lookup_table(records, out)
}

/// Read the license and write the generated file to `dest`.
///
/// The license is read before the destination is opened, so a missing license
/// leaves an existing output file untouched.
pub fn emit(license_path: &Path, records: &[ErrorRecord], dest: &Destination) -> Result<()> {
    let license = fs::read(license_path)
        .with_context(|| format!("cannot read license header {}", license_path.display()))?;

    match dest {
        Destination::Stdout => {
            debug!("writing {} records to stdout", records.len());
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            render(&license, records, &mut out).context("failed to write to stdout")?;
            out.flush().context("failed to flush stdout")?;
        }
        Destination::File(path) => {
            debug!("writing source header from {}", license_path.display());
            let file =
                File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            render(&license, records, &mut out)
                .and_then(|()| out.flush())
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!("wrote {} records to {}", records.len(), path.display());
        }
    }
    Ok(())
}
