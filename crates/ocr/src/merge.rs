/// Symbols that show up when the engine reads texture or edges as text.
const GARBAGE_CHARS: &[char] = &[
    '|', '\\', '/', '@', '#', '$', '^', '&', '*', '~', '`', '[', ']', '{', '}',
];

const MIN_LINE_CHARS: usize = 3;
const MIN_ALPHA_RATIO: f32 = 0.3;
const MAX_GARBAGE_RATIO: f32 = 0.2;

/// Merge several transcriptions of the same image into one text.
///
/// The first non-blank transcription is kept as-is. Lines from later passes
/// are appended only when they are not already present in the merged text and
/// look like real text rather than scan noise.
pub fn merge_transcriptions<S: AsRef<str>>(transcriptions: &[S]) -> String {
    let mut usable = transcriptions
        .iter()
        .map(AsRef::as_ref)
        .filter(|t| !t.trim().is_empty());

    let Some(base) = usable.next() else {
        return String::new();
    };

    let mut merged = base.to_string();
    for other in usable {
        let mut recovered = 0usize;
        for line in other.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if !merged.contains(line) && is_quality_line(line) {
                merged.push('\n');
                merged.push_str(line);
                recovered += 1;
            }
        }
        tracing::debug!(recovered, "merged secondary OCR pass");
    }

    merged
}

/// At least three characters, mostly letters, little symbol noise.
pub fn is_quality_line(line: &str) -> bool {
    let total = line.chars().count();
    if total < MIN_LINE_CHARS {
        return false;
    }

    let alpha = line.chars().filter(|c| c.is_alphabetic()).count();
    if (alpha as f32) < total as f32 * MIN_ALPHA_RATIO {
        return false;
    }

    let garbage = line.chars().filter(|c| GARBAGE_CHARS.contains(c)).count();
    garbage as f32 <= total as f32 * MAX_GARBAGE_RATIO
}
