use std::sync::Arc;

use memchr::memchr2;
use smallvec::SmallVec;
use smol_str::SmolStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SegmentKind {
    Object,
    Array,
}

/// One parsed unit of a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Segment {
    pub kind: SegmentKind,
    /// Raw text between delimiters; empty for `[]` push addressing.
    pub key: SmolStr,
    /// Container kind to instantiate when the next level does not exist:
    /// an array iff the next character is `[`.
    pub child_kind: SegmentKind,
    /// The canonical path, shared by every segment scanned from it.
    path: Arc<str>,
    /// Byte length of the path prefix ending at this segment.
    upto: usize,
}

impl Segment {
    /// Prefix of the canonical path ending at this segment, reproduced
    /// verbatim in error messages.
    pub fn path_so_far(&self) -> &str {
        &self.path[..self.upto]
    }
}

pub(crate) type Segments = SmallVec<[Segment; 4]>;

/// Splits a canonical path into ordered segments.
///
/// Grammar: object segments are runs of one or more characters other than
/// `.` and `[`; array segments are `[` digits* `]`, with digits meaning an
/// explicit index and none meaning push. Segments chain left to right with
/// `.` as an optional separator before object segments.
///
/// Anything from the first malformed character onward (an unclosed `[` or a
/// non-digit inside brackets) is dropped, not rejected; the scanner flags
/// the dropped tail through the `log` facade.
pub(crate) fn scan_path(path: &str) -> Segments {
    let shared: Arc<str> = Arc::from(path);
    let bytes = path.as_bytes();
    let mut segments = Segments::new();
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'.' => pos += 1,
            b'[' => {
                let digits_start = pos + 1;
                let mut digits_end = digits_start;
                while digits_end < bytes.len() && bytes[digits_end].is_ascii_digit() {
                    digits_end += 1;
                }
                if bytes.get(digits_end) != Some(&b']') {
                    log::warn!("ignoring malformed tail {:?} of path {path:?}", &path[pos..]);
                    break;
                }
                let after = digits_end + 1;
                segments.push(Segment {
                    kind: SegmentKind::Array,
                    key: SmolStr::new(&path[digits_start..digits_end]),
                    child_kind: child_kind(bytes, after),
                    path: Arc::clone(&shared),
                    upto: after,
                });
                pos = after;
            }
            _ => {
                let end = memchr2(b'.', b'[', &bytes[pos..])
                    .map_or(bytes.len(), |offset| pos + offset);
                segments.push(Segment {
                    kind: SegmentKind::Object,
                    key: SmolStr::new(&path[pos..end]),
                    child_kind: child_kind(bytes, end),
                    path: Arc::clone(&shared),
                    upto: end,
                });
                pos = end;
            }
        }
    }
    segments
}

fn child_kind(bytes: &[u8], next: usize) -> SegmentKind {
    if bytes.get(next) == Some(&b'[') {
        SegmentKind::Array
    } else {
        SegmentKind::Object
    }
}
