/// Slides a zero-free line toward its front and merges equal neighbours.
///
/// Pairs are taken front to back and a merged tile is never compared again in the same
/// pass, so `[2, 2, 2]` becomes `[4, 2]` rather than collapsing further. Returns the
/// compressed line and, per merge, the value of the tiles that were merged.
///
/// Two tiles whose sum does not fit in a `u32` stay apart.
pub fn compress_line(values: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let mut compressed = Vec::with_capacity(values.len());
    let mut removed = Vec::new();
    let mut rest = values;

    loop {
        match rest {
            [] => break,
            [first, second, tail @ ..] if first == second => match first.checked_add(*second) {
                Some(merged) => {
                    removed.push(*first);
                    compressed.push(merged);
                    rest = tail;
                }
                None => {
                    compressed.push(*first);
                    rest = &rest[1..];
                }
            },
            [first, tail @ ..] => {
                compressed.push(*first);
                rest = tail;
            }
        }
    }

    (compressed, removed)
}

/// Leftward shift of a single row: drops the gaps, compresses, pads back to full width.
pub(super) fn shift_line(line: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let non_zero: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();
    let (mut result, removed) = compress_line(&non_zero);
    result.resize(line.len(), 0);
    (result, removed)
}
