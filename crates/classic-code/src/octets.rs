//! Random-access octet operations on [`ClassicCode`].
//!
//! Reads and writes touch one lane of the word at a time: a write XORs the
//! difference between the old and new octet into place, so the other three
//! octets are never rebuilt.

use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

use crate::index::OctetIndex;
use crate::{swar, ClassicCode, SubCode};

#[inline]
pub(crate) fn read_octet(word: u32, index: OctetIndex) -> u8 {
    (word >> index.shift()) as u8
}

#[inline]
pub(crate) fn write_octet(word: &mut u32, index: OctetIndex, value: u8) {
    let delta = (read_octet(*word, index) ^ value) as u32;
    *word ^= delta << index.shift();
}

#[inline]
pub(crate) fn swap_octets(word: &mut u32, i: OctetIndex, j: OctetIndex) {
    let delta = (read_octet(*word, i) ^ read_octet(*word, j)) as u32;
    // For i == j the delta is zero and the word is untouched.
    *word ^= (delta << i.shift()) | (delta << j.shift());
}

/// Writes `replacement` over `[start, end)`. The replacement must yield
/// exactly `end - start` octets; it is drained before the first write, so a
/// source copied from the same word reads the old octets.
pub(crate) fn replace_octets<I>(
    word: &mut u32,
    start: OctetIndex,
    end: OctetIndex,
    replacement: I,
)
where
    I: IntoIterator<Item = u8>,
{
    let len = start.distance_to(end) as usize;
    let mut staged = [0u8; 4];
    let mut count = 0;
    for byte in replacement {
        assert!(count < len, "replacement is longer than the replaced range");
        staged[count] = byte;
        count += 1;
    }
    assert!(count == len, "replacement is shorter than the replaced range");
    let mut index = start;
    for &byte in &staged[..len] {
        write_octet(word, index, byte);
        index = index.next();
    }
}

/// `0x80` in the lane of every octet in `[start, end)`.
#[inline]
pub(crate) fn lane_mask(start: OctetIndex, end: OctetIndex) -> u32 {
    let hi = 32 - 8 * start.position() as u32;
    let lo = 32 - 8 * end.position() as u32;
    (((1u64 << hi) - (1u64 << lo)) as u32) & 0x8080_8080
}

/// Position of the first octet flagged in a lane mask.
#[inline]
pub(crate) fn first_in_mask(mask: u32) -> Option<OctetIndex> {
    (mask != 0).then(|| OctetIndex::from_position(mask.leading_zeros() as usize / 8))
}

/// Position of the last octet flagged in a lane mask.
#[inline]
pub(crate) fn last_in_mask(mask: u32) -> Option<OctetIndex> {
    (mask != 0).then(|| OctetIndex::from_position(3 - mask.trailing_zeros() as usize / 8))
}

/// Turns `range` into a half-open `[start, end)` inside `[lower, upper]`.
///
/// # Panics
///
/// Panics if the range is inverted or leaves `[lower, upper]`.
pub(crate) fn resolve_range<R>(
    range: R,
    lower: OctetIndex,
    upper: OctetIndex,
) -> (OctetIndex, OctetIndex)
where
    R: RangeBounds<OctetIndex>,
{
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.next(),
        Bound::Unbounded => lower,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i.next(),
        Bound::Excluded(&i) => i,
        Bound::Unbounded => upper,
    };
    assert!(
        lower <= start && start <= end && end <= upper,
        "octet range {start:?}..{end:?} is out of bounds {lower:?}..{upper:?}"
    );
    (start, end)
}

impl ClassicCode {
    /// Index of the first octet.
    #[inline]
    pub const fn start_index(self) -> OctetIndex {
        OctetIndex::START
    }

    /// One past the last octet.
    #[inline]
    pub const fn end_index(self) -> OctetIndex {
        OctetIndex::END
    }

    /// Always 4.
    #[inline]
    pub const fn len(self) -> usize {
        Self::LEN
    }

    /// Always `false`; present for parity with slices.
    #[inline]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// The index after `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is at or past the end.
    pub fn index_after(self, index: OctetIndex) -> OctetIndex {
        assert!(index < OctetIndex::END, "cannot step past the end index");
        index.next()
    }

    /// The index before `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is at or before the start.
    pub fn index_before(self, index: OctetIndex) -> OctetIndex {
        assert!(index > OctetIndex::START, "cannot step before the start index");
        index.prev()
    }

    /// `index` moved by `distance` octets, without bounds checks.
    pub fn index_offset_by(self, index: OctetIndex, distance: isize) -> OctetIndex {
        index.offset(distance)
    }

    /// `index` moved by `distance` octets, or `None` if that passes `limit`.
    ///
    /// See [`OctetIndex::offset_limited_by`].
    pub fn index_offset_by_limited(
        self,
        index: OctetIndex,
        distance: isize,
        limit: OctetIndex,
    ) -> Option<OctetIndex> {
        index.offset_limited_by(distance, limit)
    }

    /// Signed octet count from `from` to `to`.
    #[inline]
    pub fn distance(self, from: OctetIndex, to: OctetIndex) -> isize {
        from.distance_to(to)
    }

    /// The octet at `index`.
    ///
    /// # Panics
    ///
    /// Panics unless `index` addresses one of the four octets.
    #[inline]
    pub fn octet(self, index: OctetIndex) -> u8 {
        read_octet(self.0, index)
    }

    /// Replaces the octet at `index`, leaving the other three untouched.
    ///
    /// # Panics
    ///
    /// Panics unless `index` addresses one of the four octets.
    #[inline]
    pub fn set_octet(&mut self, index: OctetIndex, value: u8) {
        write_octet(&mut self.0, index, value);
    }

    /// Exchanges two octets. Swapping an index with itself does nothing.
    pub fn swap_at(&mut self, i: OctetIndex, j: OctetIndex) {
        swap_octets(&mut self.0, i, j);
    }

    /// A sub-view over `range`.
    ///
    /// # Example
    ///
    /// ```
    /// use classic_code::{ClassicCode, OctetIndex};
    ///
    /// let code = ClassicCode::from_ascii(b"ABCD");
    /// let tail = code.slice(OctetIndex::from_position(2)..);
    /// assert_eq!(tail, *b"CD");
    /// ```
    pub fn slice<R>(self, range: R) -> SubCode
    where
        R: RangeBounds<OctetIndex>,
    {
        let (start, end) = resolve_range(range, OctetIndex::START, OctetIndex::END);
        SubCode::new(self, start, end)
    }

    /// Overwrites `range` with `replacement`, which must yield exactly as many
    /// octets as the range holds.
    ///
    /// The replacement is read in full before any octet is written, so a
    /// sub-view of this same code can be copied onto another part of it.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or the lengths differ.
    ///
    /// # Example
    ///
    /// ```
    /// use classic_code::{ClassicCode, OctetIndex};
    ///
    /// let mut code = ClassicCode::from_ascii(b"ABCD");
    /// let mid = OctetIndex::from_position(2);
    /// code.replace_octets(..mid, code.slice(mid..));
    /// assert_eq!(code, ClassicCode::from_ascii(b"CDCD"));
    /// ```
    pub fn replace_octets<R, I>(&mut self, range: R, replacement: I)
    where
        R: RangeBounds<OctetIndex>,
        I: IntoIterator<Item = u8>,
    {
        let (start, end) = resolve_range(range, OctetIndex::START, OctetIndex::END);
        replace_octets(&mut self.0, start, end, replacement);
    }

    /// Runs `f` on a mutable sub-view over `range` and writes its octets back.
    ///
    /// # Example
    ///
    /// ```
    /// use classic_code::{ClassicCode, OctetIndex};
    ///
    /// let mut code = ClassicCode::from_ascii(b"ABCD");
    /// code.with_slice_mut(OctetIndex::from_position(1)..OctetIndex::from_position(3), |view| {
    ///     view.swap_at(view.start_index(), view.index_before(view.end_index()));
    /// });
    /// assert_eq!(code, ClassicCode::from_ascii(b"ACBD"));
    /// ```
    pub fn with_slice_mut<R, F, T>(&mut self, range: R, f: F) -> T
    where
        R: RangeBounds<OctetIndex>,
        F: FnOnce(&mut SubCode) -> T,
    {
        let mut view = self.slice(range);
        let out = f(&mut view);
        self.0 = view.base().0;
        out
    }

    /// Iterator over the octets in text order.
    #[inline]
    pub fn iter(self) -> Octets {
        Octets::new(self.0, OctetIndex::START, OctetIndex::END)
    }

    /// Iterator over the four dereferenceable indices.
    pub fn indices(self) -> impl DoubleEndedIterator<Item = OctetIndex> + ExactSizeIterator {
        (0..Self::LEN).map(OctetIndex::from_position)
    }

    /// The code with its octets in reverse order.
    #[inline]
    pub const fn reversed(self) -> Self {
        ClassicCode(self.0.swap_bytes())
    }

    /// Reverses the octets in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.0 = self.0.swap_bytes();
    }

    /// Whether any octet equals `byte`, tested on the whole word at once.
    #[inline]
    pub const fn contains(self, byte: u8) -> bool {
        swar::has_byte_equal_to(self.0, byte)
    }

    /// Index of the first octet equal to `byte`.
    pub fn first_index_of(self, byte: u8) -> Option<OctetIndex> {
        first_in_mask(swar::equal_byte_mask(self.0, byte))
    }

    /// Index of the last octet equal to `byte`.
    pub fn last_index_of(self, byte: u8) -> Option<OctetIndex> {
        last_in_mask(swar::equal_byte_mask(self.0, byte))
    }
}

impl IntoIterator for ClassicCode {
    type Item = u8;
    type IntoIter = Octets;

    fn into_iter(self) -> Octets {
        self.iter()
    }
}

impl IntoIterator for &ClassicCode {
    type Item = u8;
    type IntoIter = Octets;

    fn into_iter(self) -> Octets {
        self.iter()
    }
}

/// Iterator over the octets of a code or sub-view.
#[derive(Debug, Clone)]
pub struct Octets {
    word: u32,
    front: OctetIndex,
    back: OctetIndex,
}

impl Octets {
    pub(crate) fn new(word: u32, front: OctetIndex, back: OctetIndex) -> Self {
        Self { word, front, back }
    }
}

impl Iterator for Octets {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.front == self.back {
            return None;
        }
        let byte = read_octet(self.word, self.front);
        self.front = self.front.next();
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Octets {
    fn next_back(&mut self) -> Option<u8> {
        if self.front == self.back {
            return None;
        }
        self.back = self.back.prev();
        Some(read_octet(self.word, self.back))
    }
}

impl ExactSizeIterator for Octets {
    fn len(&self) -> usize {
        self.front.distance_to(self.back) as usize
    }
}

impl FusedIterator for Octets {}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(position: usize) -> OctetIndex {
        OctetIndex::from_position(position)
    }

    #[test]
    fn reads_in_text_order() {
        let code = ClassicCode::from_ascii(b"WXYZ");
        let octets: Vec<u8> = code.indices().map(|i| code.octet(i)).collect();
        assert_eq!(octets, b"WXYZ".to_vec());
        assert_eq!(code.iter().collect::<Vec<_>>(), b"WXYZ".to_vec());
        assert_eq!(code.iter().rev().collect::<Vec<_>>(), b"ZYXW".to_vec());
        assert_eq!(code.iter().len(), 4);
    }

    #[test]
    fn set_octet_keeps_neighbours() {
        let mut code = ClassicCode::new(0x1122_3344);
        code.set_octet(at(1), 0xAA);
        assert_eq!(code.raw_value(), 0x11AA_3344);
        code.set_octet(at(3), 0x00);
        assert_eq!(code.raw_value(), 0x11AA_3300);
        code.set_octet(at(0), 0x11);
        assert_eq!(code.raw_value(), 0x11AA_3300);
    }

    #[test]
    fn swap_is_an_involution() {
        let original = ClassicCode::from_ascii(b"ABCD");
        let mut code = original;
        code.swap_at(at(0), at(3));
        assert_eq!(code, ClassicCode::from_ascii(b"DBCA"));
        code.swap_at(at(0), at(3));
        assert_eq!(code, original);
        code.swap_at(at(2), at(2));
        assert_eq!(code, original);
    }

    #[test]
    fn stepping_within_bounds() {
        let code = ClassicCode::ZERO;
        assert_eq!(code.index_after(code.start_index()), at(1));
        assert_eq!(code.index_before(code.end_index()), at(3));
        assert_eq!(code.distance(code.start_index(), code.end_index()), 4);
        assert_eq!(code.index_offset_by(code.start_index(), 2), at(2));
        let end = code.end_index();
        assert_eq!(code.index_offset_by_limited(at(1), 3, end), Some(end));
        assert_eq!(code.index_offset_by_limited(at(1), 4, code.end_index()), None);
    }

    #[test]
    #[should_panic(expected = "cannot step past the end index")]
    fn stepping_past_end_panics() {
        ClassicCode::ZERO.index_after(OctetIndex::END);
    }

    #[test]
    #[should_panic(expected = "cannot step before the start index")]
    fn stepping_before_start_panics() {
        ClassicCode::ZERO.index_before(OctetIndex::START);
    }

    #[test]
    fn replace_first_half_with_second_half() {
        let mut code = ClassicCode::from_ascii(b"ABCD");
        let tail = code.slice(at(2)..);
        code.replace_octets(..at(2), tail);
        assert_eq!(code, ClassicCode::from_ascii(b"CDCD"));

        let mut code = ClassicCode::from_ascii(b"ABCD");
        code.replace_octets(at(1).., code.slice(..at(3)));
        assert_eq!(code, ClassicCode::from_ascii(b"AABC"));
    }

    #[test]
    fn replace_empty_range() {
        let mut code = ClassicCode::from_ascii(b"ABCD");
        code.replace_octets(at(2)..at(2), [0u8; 0]);
        assert_eq!(code, ClassicCode::from_ascii(b"ABCD"));
    }

    #[test]
    #[should_panic(expected = "replacement is shorter")]
    fn replace_rejects_short_source() {
        let mut code = ClassicCode::ZERO;
        code.replace_octets(..at(2), [1u8]);
    }

    #[test]
    #[should_panic(expected = "replacement is longer")]
    fn replace_rejects_long_source() {
        let mut code = ClassicCode::ZERO;
        code.replace_octets(..at(2), [1u8, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn slice_rejects_inverted_range() {
        let _ = ClassicCode::ZERO.slice(at(3)..at(1));
    }

    #[test]
    fn search_uses_word_masks() {
        let code = ClassicCode::from_ascii(b"ABAB");
        assert!(code.contains(b'A'));
        assert!(!code.contains(b'C'));
        assert_eq!(code.first_index_of(b'A'), Some(at(0)));
        assert_eq!(code.last_index_of(b'A'), Some(at(2)));
        assert_eq!(code.first_index_of(b'B'), Some(at(1)));
        assert_eq!(code.last_index_of(b'B'), Some(at(3)));
        assert_eq!(code.first_index_of(b'C'), None);

        let zeros = ClassicCode::new(0x0100_0000);
        assert_eq!(zeros.first_index_of(0), Some(at(1)));
        assert_eq!(zeros.last_index_of(0), Some(at(3)));
        assert_eq!(zeros.last_index_of(1), Some(at(0)));
    }

    #[test]
    fn search_matches_linear_scan() {
        for raw in [0u32, 0x0001_0001, 0x7F7F_0080, 0xFF00_FF00, 0x4142_4344] {
            let code = ClassicCode::new(raw);
            for byte in 0..=u8::MAX {
                let first = code.indices().find(|&i| code.octet(i) == byte);
                let last = code.indices().rev().find(|&i| code.octet(i) == byte);
                assert_eq!(code.first_index_of(byte), first);
                assert_eq!(code.last_index_of(byte), last);
                assert_eq!(code.contains(byte), first.is_some());
            }
        }
    }

    #[test]
    fn reversal() {
        let mut code = ClassicCode::from_ascii(b"ABCD");
        assert_eq!(code.reversed(), ClassicCode::from_ascii(b"DCBA"));
        code.reverse();
        assert_eq!(code.to_octets(), *b"DCBA");
    }

    #[test]
    fn lane_masks() {
        assert_eq!(lane_mask(at(0), at(4)), 0x8080_8080);
        assert_eq!(lane_mask(at(1), at(3)), 0x0080_8000);
        assert_eq!(lane_mask(at(2), at(2)), 0);
        assert_eq!(lane_mask(at(3), at(4)), 0x0000_0080);
    }
}
