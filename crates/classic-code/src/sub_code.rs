//! Range-restricted views over a code's octets.

use std::fmt;
use std::ops::RangeBounds;

use crate::index::OctetIndex;
use crate::octets::{
    first_in_mask, lane_mask, last_in_mask, read_octet, replace_octets, resolve_range,
    swap_octets, write_octet, Octets,
};
use crate::{swar, ClassicCode};

/// A contiguous run of a code's octets, `[start_index, end_index)`.
///
/// A `SubCode` carries its own copy of the full word and uses the same
/// [`OctetIndex`] values as the code it was sliced from. Writes land in that
/// copy; [`base`](Self::base) returns the whole code with them applied, and
/// [`ClassicCode::with_slice_mut`] writes them back in one step.
///
/// Two sub-views are equal when their visible octets are equal, wherever
/// they sit in their codes.
#[derive(Clone, Copy)]
pub struct SubCode {
    word: u32,
    start: OctetIndex,
    end: OctetIndex,
}

impl SubCode {
    pub(crate) fn new(base: ClassicCode, start: OctetIndex, end: OctetIndex) -> Self {
        Self {
            word: base.0,
            start,
            end,
        }
    }

    /// The full code this view was sliced from, including writes made
    /// through the view.
    #[inline]
    pub fn base(self) -> ClassicCode {
        ClassicCode(self.word)
    }

    /// Index of the view's first octet.
    #[inline]
    pub fn start_index(self) -> OctetIndex {
        self.start
    }

    /// One past the view's last octet.
    #[inline]
    pub fn end_index(self) -> OctetIndex {
        self.end
    }

    /// Number of visible octets.
    #[inline]
    pub fn len(self) -> usize {
        self.start.distance_to(self.end) as usize
    }

    /// Whether the view covers no octets.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    fn check(self, index: OctetIndex) {
        assert!(
            self.start <= index && index < self.end,
            "octet index {index:?} outside sub-view {:?}..{:?}",
            self.start,
            self.end
        );
    }

    /// The index after `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is at or past this view's end.
    pub fn index_after(self, index: OctetIndex) -> OctetIndex {
        assert!(index < self.end, "cannot step past the end index");
        index.next()
    }

    /// The index before `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is at or before this view's start.
    pub fn index_before(self, index: OctetIndex) -> OctetIndex {
        assert!(index > self.start, "cannot step before the start index");
        index.prev()
    }

    /// `index` moved by `distance` octets, without bounds checks.
    pub fn index_offset_by(self, index: OctetIndex, distance: isize) -> OctetIndex {
        index.offset(distance)
    }

    /// `index` moved by `distance` octets, or `None` if that passes `limit`.
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
    /// Panics if `index` is outside this view.
    pub fn octet(self, index: OctetIndex) -> u8 {
        self.check(index);
        read_octet(self.word, index)
    }

    /// Replaces the octet at `index`, leaving the others untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside this view.
    pub fn set_octet(&mut self, index: OctetIndex, value: u8) {
        self.check(index);
        write_octet(&mut self.word, index, value);
    }

    /// Exchanges two octets of the view.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside this view.
    pub fn swap_at(&mut self, i: OctetIndex, j: OctetIndex) {
        self.check(i);
        self.check(j);
        swap_octets(&mut self.word, i, j);
    }

    /// A narrower view; unbounded ends default to this view's bounds.
    ///
    /// # Panics
    ///
    /// Panics if `range` reaches outside this view.
    pub fn slice<R>(self, range: R) -> SubCode
    where
        R: RangeBounds<OctetIndex>,
    {
        let (start, end) = resolve_range(range, self.start, self.end);
        SubCode {
            word: self.word,
            start,
            end,
        }
    }

    /// Overwrites `range` (within this view) with exactly as many octets.
    ///
    /// # Panics
    ///
    /// Panics if `range` reaches outside this view or the lengths differ.
    pub fn replace_octets<R, I>(&mut self, range: R, replacement: I)
    where
        R: RangeBounds<OctetIndex>,
        I: IntoIterator<Item = u8>,
    {
        let (start, end) = resolve_range(range, self.start, self.end);
        replace_octets(&mut self.word, start, end, replacement);
    }

    /// Iterator over the visible octets in text order.
    #[inline]
    pub fn iter(self) -> Octets {
        Octets::new(self.word, self.start, self.end)
    }

    /// The visible octets, copied out.
    pub fn to_vec(self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Whether any visible octet equals `byte`.
    pub fn contains(self, byte: u8) -> bool {
        self.matches(byte) != 0
    }

    /// Index of the first visible octet equal to `byte`.
    pub fn first_index_of(self, byte: u8) -> Option<OctetIndex> {
        first_in_mask(self.matches(byte))
    }

    /// Index of the last visible octet equal to `byte`.
    pub fn last_index_of(self, byte: u8) -> Option<OctetIndex> {
        last_in_mask(self.matches(byte))
    }

    fn matches(self, byte: u8) -> u32 {
        swar::equal_byte_mask(self.word, byte) & lane_mask(self.start, self.end)
    }
}

impl IntoIterator for SubCode {
    type Item = u8;
    type IntoIter = Octets;

    fn into_iter(self) -> Octets {
        self.iter()
    }
}

impl PartialEq for SubCode {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for SubCode {}

impl PartialEq<[u8]> for SubCode {
    fn eq(&self, other: &[u8]) -> bool {
        self.iter().eq(other.iter().copied())
    }
}

impl<const N: usize> PartialEq<[u8; N]> for SubCode {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.iter().eq(other.iter().copied())
    }
}

impl fmt::Debug for SubCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubCode")
            .field("base", &self.base())
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}
