use crate::error::TranscriptError;
use crate::processor::extract_dialogue;
use crate::vtt::Cue;

use std::io::BufRead;

use nom::bytes::complete::{tag, take_while_m_n};
use nom::combinator::recognize;
use nom::sequence::tuple;
use nom::IResult;
use tracing::{debug, info};

const BOM: char = '\u{FEFF}';
const HEADER: &str = "WEBVTT";
const STYLE_BLOCK: &str = "STYLE";

/// Walks WebVTT lines and collects one [`Cue`] per timing line.
///
/// Lines between two timing lines are buffered and only turned into dialogue
/// once the cue is closed, either by the next timing line or by the end of
/// the input. Unrecognised lines never cause an error; at worst the cue ends
/// up without text.
pub struct CueParser {
    cues: Vec<Cue>,
    current: Option<Cue>,
    buffer: String,
}

impl CueParser {
    pub fn new() -> Self {
        Self {
            cues: Vec::new(),
            current: None,
            buffer: String::new(),
        }
    }

    pub fn parse<I>(mut self, lines: I) -> Vec<Cue>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.feed(line.as_ref());
        }
        self.finish()
    }

    /// Parses lines as they are read. Bytes that are not valid UTF-8 are
    /// replaced rather than rejected; only a failing reader is an error.
    pub fn parse_reader<R: BufRead>(mut self, mut reader: R) -> Result<Vec<Cue>, TranscriptError> {
        let mut raw = Vec::new();
        loop {
            raw.clear();
            let read = reader
                .read_until(b'\n', &mut raw)
                .map_err(TranscriptError::ReadError)?;
            if read == 0 {
                break;
            }
            let line = String::from_utf8_lossy(strip_line_ending(&raw));
            self.feed(&line);
        }
        Ok(self.finish())
    }

    fn feed(&mut self, line: &str) {
        let line = line.trim_start_matches(BOM).trim();
        if line.is_empty() || line == HEADER || line.starts_with(STYLE_BLOCK) {
            return;
        }

        match find_timing(line) {
            Some((start_time, end_time)) => {
                self.finalize();
                self.current = Some(Cue::new(start_time, end_time));
            }
            None => {
                if !self.buffer.is_empty() {
                    self.buffer.push(' ');
                }
                self.buffer.push_str(line);
            }
        }
    }

    fn finalize(&mut self) {
        if let Some(mut cue) = self.current.take() {
            if let Some(text) = extract_dialogue(&self.buffer) {
                cue.append_text(&text);
            }
            if !cue.has_text() {
                debug!(start = %cue.start_time, end = %cue.end_time, "cue has no dialogue");
            }
            self.cues.push(cue);
        }
        // Anything buffered before the first timing line is dropped here too.
        self.buffer.clear();
    }

    fn finish(mut self) -> Vec<Cue> {
        self.finalize();
        info!(cues = self.cues.len(), "parsed subtitle cues");
        self.cues
    }
}

fn strip_line_ending(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}

/// Finds the leftmost `HH:MM:SS.mmm --> HH:MM:SS.mmm` anywhere in the line.
/// Cue identifiers before it and cue settings after it are ignored.
fn find_timing(line: &str) -> Option<(&str, &str)> {
    line.char_indices()
        .find_map(|(offset, _)| timing_line(&line[offset..]).ok())
        .map(|(_, times)| times)
}

fn timing_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, start) = timestamp(input)?;
    let (input, _) = tag(" --> ")(input)?;
    let (input, end) = timestamp(input)?;

    Ok((input, (start, end)))
}

fn timestamp(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        two_digits,
        tag(":"),
        two_digits,
        tag(":"),
        two_digits,
        tag("."),
        three_digits,
    )))(input)
}

fn two_digits(input: &str) -> IResult<&str, &str> {
    take_while_m_n(2, 2, |c: char| c.is_ascii_digit())(input)
}

fn three_digits(input: &str) -> IResult<&str, &str> {
    take_while_m_n(3, 3, |c: char| c.is_ascii_digit())(input)
}
