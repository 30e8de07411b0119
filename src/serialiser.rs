use crate::vtt::Cue;

use std::ffi::OsStr;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

const OUTPUT_SUFFIX: &str = "_formatted.txt";

pub fn serialise<P: AsRef<Path>>(cues: &[Cue], output: P) -> Result<()> {
    let output = output.as_ref();
    let file = std::fs::File::create(output)
        .context(format!("Failed to create output file: '{}'", output.display()))?;
    let mut writer = BufWriter::new(file);
    let written = write_transcript(&mut writer, cues).context("Failed to write to output file.")?;
    writer.flush().context("Failed to write to output file.")?;
    info!(lines = written, path = %output.display(), "wrote transcript");
    Ok(())
}

/// Renders every cue that carries dialogue as `[start] text`, one per line,
/// without a trailing newline.
pub fn format_transcript(cues: &[Cue]) -> String {
    cues.iter()
        .filter(|cue| cue.has_text())
        .map(format_cue)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `dir/movie.vtt` becomes `dir/movie_formatted.txt`.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = base_name(input).to_os_string();
    name.push(OUTPUT_SUFFIX);
    input.with_file_name(name)
}

/// The file name without its last extension. A name like `.vtt` is all
/// extension, so nothing is left of it.
fn base_name(input: &Path) -> &OsStr {
    let stem = input.file_stem().unwrap_or_default();
    let is_bare_extension =
        input.extension().is_none() && stem.to_str().map_or(false, |s| s.starts_with('.'));
    if is_bare_extension {
        OsStr::new("")
    } else {
        stem
    }
}

fn write_transcript<W: Write>(buf: &mut W, cues: &[Cue]) -> Result<usize> {
    let transcript = format_transcript(cues);
    buf.write_all(transcript.as_bytes())?;
    Ok(cues.iter().filter(|cue| cue.has_text()).count())
}

fn format_cue(cue: &Cue) -> String {
    format!("[{}] {}", cue.start_time, cue.text)
}
