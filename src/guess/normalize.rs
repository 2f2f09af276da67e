use log::debug;

/// Canonicalize a raw guess: fold ASCII letters to lowercase, strip all
/// whitespace, and map every accepted operator synonym and bracket style to
/// one canonical symbol each.
///
/// Unknown characters pass through unchanged; rejecting them is the
/// validator's job, not the normalizer's.
pub fn normalize(raw: &str) -> String {
    let normalized: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            'x' | '×' | '·' => '*',
            '÷' | ':' => '/',
            '−' | '–' => '-',
            '[' | '{' => '(',
            ']' | '}' => ')',
            other => other,
        })
        .collect();

    debug!("Normalized {:?} to {:?}", raw, normalized);
    normalized
}
