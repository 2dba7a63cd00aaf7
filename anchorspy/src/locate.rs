/// The outcome of locating the trigger line among anchor offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Located {
    /// Index of the current anchor, if any.
    pub index: Option<usize>,
    /// Whether the trigger line is within 1px of the current anchor's offset.
    pub at_top: bool,
}

/// Sub-pixel tolerance for `at_top`.
pub const AT_TOP_TOLERANCE: f64 = 1.0;

/// Finds the anchor whose section contains the trigger line `scroll_offset + pixel_offset`.
///
/// `offsets` are the anchors' document offsets in document order (expected ascending).
/// `end` is the scroll offset of the tracked container's bottom edge; past it nothing is
/// current, while the space between the last anchor and `end` belongs to the last anchor.
///
/// The search key is `trigger + 1`, so an anchor sitting exactly on the trigger line (or up to a
/// pixel below it) is already current.
pub fn locate(offsets: &[f64], end: f64, scroll_offset: f64, pixel_offset: f64) -> Located {
    if offsets.windows(2).any(|w| w[0] > w[1]) {
        sptrace!(count = offsets.len(), "locate: anchor offsets are not ascending");
    }

    let trigger = scroll_offset + pixel_offset;
    let key = trigger + 1.0;

    // Upper bound over `[offsets.., end]`: count of elements <= key.
    let mut insertion = offsets.partition_point(|&a| a <= key);
    if insertion == offsets.len() && end <= key {
        insertion += 1;
    }

    let index = insertion
        .checked_sub(1)
        .filter(|&i| i < offsets.len());
    let at_top = index.is_some_and(|i| (trigger - offsets[i]).abs() < AT_TOP_TOLERANCE);

    Located { index, at_top }
}
