//! Character-level highlighting of a rename for operator review.

use crate::plan::FilePair;
use colored::*;
use similar::{ChangeTag, TextDiff};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Common,
    Removed,
    Added,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

/// Ordered segments describing how `from` turns into `to`. Adjacent
/// segments never share a kind.
pub fn char_segments(from: &str, to: &str) -> Vec<Segment> {
    let diff = TextDiff::from_chars(from, to);
    let mut segments: Vec<Segment> = Vec::new();

    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SegmentKind::Common,
            ChangeTag::Delete => SegmentKind::Removed,
            ChangeTag::Insert => SegmentKind::Added,
        };
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => segments.push(Segment {
                kind,
                text: change.value().to_string(),
            }),
        }
    }

    segments
}

/// Two lines per pair: the old name with removed parts in red, the new
/// name with added parts in green.
pub fn render_pair<W: Write>(out: &mut W, pair: &FilePair) -> io::Result<()> {
    let segments = char_segments(&pair.from, &pair.to);

    write!(out, "{}", "From: ".cyan())?;
    for seg in &segments {
        match seg.kind {
            SegmentKind::Added => {}
            SegmentKind::Removed => write!(out, "{}", seg.text.red())?,
            SegmentKind::Common => write!(out, "{}", seg.text.white())?,
        }
    }
    writeln!(out)?;

    write!(out, "{}", "To:   ".yellow())?;
    for seg in &segments {
        match seg.kind {
            SegmentKind::Added => write!(out, "{}", seg.text.green())?,
            SegmentKind::Removed => {}
            SegmentKind::Common => write!(out, "{}", seg.text.white())?,
        }
    }
    writeln!(out)
}

pub fn show_diff<W: Write>(out: &mut W, pairs: &[FilePair]) -> io::Result<()> {
    for pair in pairs {
        render_pair(out, pair)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(segments: &[Segment], keep: &[SegmentKind]) -> String {
        segments
            .iter()
            .filter(|s| keep.contains(&s.kind))
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn test_segments_rebuild_both_names() {
        let from = "holiday_2019_img.jpg";
        let to = "holiday-2020-img.jpeg";
        let segments = char_segments(from, to);
        assert_eq!(
            text_of(&segments, &[SegmentKind::Common, SegmentKind::Removed]),
            from
        );
        assert_eq!(
            text_of(&segments, &[SegmentKind::Common, SegmentKind::Added]),
            to
        );
    }

    #[test]
    fn test_adjacent_segments_are_merged() {
        let segments = char_segments("abc.txt", "xyz.txt");
        for window in segments.windows(2) {
            assert_ne!(window[0].kind, window[1].kind);
        }
        assert_eq!(segments.last().unwrap().kind, SegmentKind::Common);
        assert_eq!(segments.last().unwrap().text, ".txt");
    }

    #[test]
    fn test_pure_insertion() {
        let segments = char_segments("a.txt", "a.old.txt");
        assert!(segments.iter().all(|s| s.kind != SegmentKind::Removed));
        assert_eq!(text_of(&segments, &[SegmentKind::Added]).len(), 4);
        assert_eq!(text_of(&segments, &[SegmentKind::Common]).len(), 5);
    }

    #[test]
    fn test_render_pair_plain() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        render_pair(&mut out, &FilePair::new("b.txt", "c.txt")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "From: b.txt\nTo:   c.txt\n");
    }
}
