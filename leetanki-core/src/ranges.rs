use crate::CoreError;
use std::collections::BTreeSet;

/// Parses 1-based indices and ranges such as `"1,3,5-7"` into a zero-based
/// set over a collection of `len`. Reversed ranges are accepted, blank parts
/// ignored, and anything outside `0..len` is dropped. Fails on the first
/// malformed token.
pub fn parse_index_list(spec: &str, len: usize) -> Result<BTreeSet<usize>, CoreError> {
    let last = len as i64 - 1;
    let mut out = BTreeSet::new();
    for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if let Some((a, b)) = part.split_once('-') {
            let parse = |s: &str| {
                s.trim()
                    .parse::<i64>()
                    .map_err(|_| CoreError::InvalidRange(part.to_string()))
            };
            let (a, b) = (parse(a)?.saturating_sub(1), parse(b)?.saturating_sub(1));
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            // clamp before expanding; ranges may be far larger than the collection
            let (lo, hi) = (lo.max(0), hi.min(last));
            if lo <= hi {
                out.extend((lo..=hi).map(|i| i as usize));
            }
        } else {
            let idx = part
                .parse::<i64>()
                .map_err(|_| CoreError::InvalidIndex(part.to_string()))?
                .saturating_sub(1);
            if (0..=last).contains(&idx) {
                out.insert(idx as usize);
            }
        }
    }
    Ok(out)
}

/// Maps a 1-based problem number onto an index into a collection of `len`.
pub fn problem_index(len: usize, number: usize) -> Result<usize, CoreError> {
    if number == 0 || number > len {
        return Err(CoreError::NotFound(format!("problem #{number}")));
    }
    Ok(number - 1)
}
