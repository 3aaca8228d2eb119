//! Upstream text: loading files and splitting text into sortable units
//!
//! Sentence boundary detection lives outside this crate. Anything that can
//! turn text into a sequence of units implements [`Segmenter`]; the
//! built-in segmenters only split on line and paragraph breaks.

use crate::error::{SortContext, SortError, SortResult};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

/// Minimum run of dashes treated as a section divider
pub const DIVIDER_MIN_DASHES: usize = 10;

/// Read a UTF-8 text file. Any failure aborts the load with a named error.
pub fn load_text(path: &Path) -> SortResult<String> {
    let name = path.to_string_lossy();
    if path.is_dir() {
        return Err(SortError::is_directory(&name));
    }

    let bytes = fs::read(path).with_file_context(&name)?;
    let text = String::from_utf8(bytes)?;
    log::info!("loaded {} bytes from {}", text.len(), name);
    Ok(text)
}

pub fn read_stdin() -> SortResult<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .with_context(|| "reading standard input".to_string())?;
    Ok(text)
}

/// Load one input, where `-` means standard input
pub fn load_input(name: &str) -> SortResult<String> {
    if name == "-" {
        read_stdin()
    } else {
        load_text(Path::new(name))
    }
}

/// Remove dash dividers: a run of ten or more dashes at the start of a line,
/// together with all whitespace (newlines included) that follows it
pub fn strip_dividers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut line_start = true;

    while !rest.is_empty() {
        if line_start {
            let dashes = rest.len() - rest.trim_start_matches('-').len();
            if dashes >= DIVIDER_MIN_DASHES {
                let after = &rest[dashes..];
                let trimmed = after.trim_start();
                line_start = after[..after.len() - trimmed.len()].ends_with('\n');
                rest = trimmed;
                continue;
            }
        }

        match rest.find('\n') {
            Some(idx) => {
                out.push_str(&rest[..=idx]);
                rest = &rest[idx + 1..];
                line_start = true;
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }

    out
}

/// Splits text into the units that get sorted.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// One unit per non-blank line, trimmed
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSegmenter;

impl Segmenter for LineSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// One unit per blank-line separated block, whitespace runs collapsed
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphSegmenter;

impl Segmenter for ParagraphSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut units = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    units.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.extend(line.split_whitespace());
            }
        }
        if !current.is_empty() {
            units.push(current.join(" "));
        }

        units
    }
}

/// Built-in segmenter selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SegmentMode {
    #[default]
    Line,
    Paragraph,
}

impl SegmentMode {
    pub fn segmenter(&self) -> Box<dyn Segmenter + Send + Sync> {
        match self {
            SegmentMode::Line => Box::new(LineSegmenter),
            SegmentMode::Paragraph => Box::new(ParagraphSegmenter),
        }
    }
}

impl FromStr for SegmentMode {
    type Err = SortError;

    fn from_str(s: &str) -> SortResult<Self> {
        match s.to_lowercase().as_str() {
            "line" | "lines" => Ok(SegmentMode::Line),
            "paragraph" | "paragraphs" => Ok(SegmentMode::Paragraph),
            _ => Err(SortError::parse_error(&format!("unknown split mode: {s}"))),
        }
    }
}

impl std::fmt::Display for SegmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SegmentMode::Line => "line",
            SegmentMode::Paragraph => "paragraph",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_text() -> SortResult<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("story.txt");
        fs::write(&path, "First line.\nSecond line.\n")?;

        assert_eq!(load_text(&path)?, "First line.\nSecond line.\n");
        Ok(())
    }

    #[test]
    fn test_load_errors_are_named() -> SortResult<()> {
        let temp_dir = TempDir::new()?;

        let missing = temp_dir.path().join("missing.txt");
        assert!(matches!(
            load_text(&missing),
            Err(SortError::FileNotFound { .. })
        ));

        assert!(matches!(
            load_text(temp_dir.path()),
            Err(SortError::IsDirectory { .. })
        ));

        let binary = temp_dir.path().join("binary.bin");
        fs::write(&binary, [0xff, 0xfe, 0x00])?;
        assert!(matches!(load_text(&binary), Err(SortError::Utf8Error(_))));
        Ok(())
    }

    #[test]
    fn test_strip_dividers_inline_and_blank_runs() {
        assert_eq!(strip_dividers("----------Chapter one.\nb"), "Chapter one.\nb");
        assert_eq!(
            strip_dividers("intro\n------------   \n\n   Indented start\n"),
            "intro\nIndented start\n"
        );
        assert_eq!(strip_dividers("----------\n----------\nbody"), "body");
        assert_eq!(strip_dividers("---------- tail -----------"), "tail -----------");
        assert_eq!(strip_dividers("mid ---------- line"), "mid ---------- line");
    }

    #[test]
    fn test_strip_dividers() {
        let text = "Chapter one.\n----------\nChapter two.\n---------- \n---\n- - - - - - - - - -";
        assert_eq!(
            strip_dividers(text),
            "Chapter one.\nChapter two.\n---\n- - - - - - - - - -"
        );
    }

    #[test]
    fn test_line_segmenter() {
        assert!(LineSegmenter.segment("").is_empty());
        assert!(LineSegmenter.segment("   \t  \n  ").is_empty());
        assert_eq!(
            LineSegmenter.segment("  First sentence. \n\nSecond sentence.\n"),
            vec!["First sentence.", "Second sentence."]
        );
    }

    #[test]
    fn test_paragraph_segmenter() {
        assert!(ParagraphSegmenter.segment("\n\n  \n").is_empty());
        let text = "Dr. Smith was\nreally   upset.\n\n\nHe was expecting\nyou earlier.";
        assert_eq!(
            ParagraphSegmenter.segment(text),
            vec!["Dr. Smith was really upset.", "He was expecting you earlier."]
        );
    }

    #[test]
    fn test_segment_mode_from_str() {
        assert_eq!(
            "paragraph".parse::<SegmentMode>().expect("Failed to parse paragraph"),
            SegmentMode::Paragraph
        );
        assert_eq!(
            "LINES".parse::<SegmentMode>().expect("Failed to parse lines"),
            SegmentMode::Line
        );
        assert!("sentence".parse::<SegmentMode>().is_err());
        assert_eq!(SegmentMode::default().to_string(), "line");
    }
}
