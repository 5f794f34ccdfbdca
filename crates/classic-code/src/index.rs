//! Index space over the four octets of a code.
//!
//! An [`OctetIndex`] stores the negated right-shift that brings its octet
//! into the low byte of the word: the first (most significant) octet sits at
//! `-24`, the last at `0`, and the end sentinel at `8`. Turning an index into
//! a shift amount is then a negation instead of a multiply.

use std::fmt;

/// Bit width of one octet and the distance between neighbouring indices.
pub const STRIDE: i32 = 8;

/// Position of an octet inside a [`ClassicCode`](crate::ClassicCode) or
/// [`SubCode`](crate::SubCode).
///
/// Ordering follows the text form: [`OctetIndex::START`] addresses the first
/// character, which is the highest-order byte.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OctetIndex(i32);

impl OctetIndex {
    /// Index of the first octet.
    pub const START: OctetIndex = OctetIndex(-3 * STRIDE);
    /// One past the last octet; never dereferenceable.
    pub const END: OctetIndex = OctetIndex(STRIDE);

    /// Builds an index from its raw negated-shift value.
    ///
    /// # Panics
    ///
    /// Panics if `raw` is not a multiple of [`STRIDE`].
    pub const fn from_raw(raw: i32) -> Self {
        assert!(raw % STRIDE == 0, "octet index must be a multiple of the stride");
        OctetIndex(raw)
    }

    /// Builds the index of the octet at `position` (`0` is the first octet,
    /// `4` the end sentinel).
    ///
    /// # Panics
    ///
    /// Panics if `position > 4`.
    pub const fn from_position(position: usize) -> Self {
        assert!(position <= 4, "octet position out of range");
        OctetIndex(Self::START.0 + position as i32 * STRIDE)
    }

    /// Raw negated-shift value.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Zero-based position, `0..=4` for indices between `START` and `END`.
    ///
    /// # Panics
    ///
    /// Panics if the index lies outside `START..=END`.
    pub const fn position(self) -> usize {
        assert!(self.0 >= Self::START.0 && self.0 <= Self::END.0, "octet index out of range");
        ((self.0 - Self::START.0) / STRIDE) as usize
    }

    /// Whether the index addresses one of the four octets.
    #[inline]
    pub const fn is_dereferenceable(self) -> bool {
        self.0 >= Self::START.0 && self.0 < Self::END.0
    }

    /// Right-shift that moves this octet into the low byte.
    ///
    /// # Panics
    ///
    /// Panics unless the index addresses one of the four octets.
    #[inline]
    pub const fn shift(self) -> u32 {
        assert!(self.is_dereferenceable(), "octet index out of range");
        (-self.0) as u32
    }

    /// The next index. Stepping never checks the code's bounds; callers do.
    #[inline]
    pub const fn next(self) -> Self {
        OctetIndex(self.0 + STRIDE)
    }

    /// The previous index.
    #[inline]
    pub const fn prev(self) -> Self {
        OctetIndex(self.0 - STRIDE)
    }

    /// Signed octet count from `self` to `other`.
    #[inline]
    pub const fn distance_to(self, other: OctetIndex) -> isize {
        ((other.0 as i64 - self.0 as i64) / STRIDE as i64) as isize
    }

    /// Moves by `distance` octets, or `None` if the result is not representable.
    pub fn checked_offset(self, distance: isize) -> Option<Self> {
        let bits = i64::try_from(distance).ok()?.checked_mul(STRIDE as i64)?;
        let raw = (self.0 as i64).checked_add(bits)?;
        i32::try_from(raw).ok().map(OctetIndex)
    }

    /// Moves by `distance` octets.
    ///
    /// # Panics
    ///
    /// Panics if the result is not representable.
    pub fn offset(self, distance: isize) -> Self {
        match self.checked_offset(distance) {
            Some(index) => index,
            None => panic!("octet index offset overflow"),
        }
    }

    /// Moves by `distance` octets unless that passes `limit`.
    ///
    /// `limit` only applies when it lies in the direction of travel (or at
    /// `self`). A limit behind the direction of travel is ignored. Offsets too
    /// large to represent count as passing the limit and yield `None`.
    pub fn offset_limited_by(self, distance: isize, limit: OctetIndex) -> Option<Self> {
        let room = self.distance_to(limit);
        let blocked = if distance >= 0 {
            room >= 0 && distance > room
        } else {
            room <= 0 && distance < room
        };
        if blocked {
            return None;
        }
        self.checked_offset(distance)
    }
}

impl fmt::Debug for OctetIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OctetIndex({})", self.0)
    }
}
