//! Conversion of appendable values into raw code-buffer bytes.
//!
//! Everything the emitter can append (instruction words, data directives,
//! pseudo-op expansions) funnels through [`IntoBytes`]. Multi-byte scalars
//! are rendered in the host's byte order: emitted code is consumed either by
//! a CPU configured to match or by a byte-exact dump of this same program.

use std::borrow::Cow;

use smallvec::SmallVec;

pub trait IntoBytes<'a> {
    #[must_use]
    fn into_bytes(self) -> Cow<'a, [u8]>;
}

impl<'a> IntoBytes<'a> for &'a [u8] {
    #[inline(always)]
    fn into_bytes(self) -> Cow<'a, [u8]> {
        Cow::Borrowed(self)
    }
}

impl<'a, const N: usize> IntoBytes<'a> for &'a [u8; N] {
    #[inline(always)]
    fn into_bytes(self) -> Cow<'a, [u8]> {
        Cow::Borrowed(&self[..])
    }
}

impl<'a> IntoBytes<'a> for Vec<u8> {
    #[inline(always)]
    fn into_bytes(self) -> Cow<'a, [u8]> {
        Cow::Owned(self)
    }
}

impl<'a, A: smallvec::Array<Item = u8>> IntoBytes<'a> for SmallVec<A> {
    #[inline(always)]
    fn into_bytes(self) -> Cow<'a, [u8]> {
        Cow::Owned(self.into_vec())
    }
}

macro_rules! scalar_into_bytes {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'a> IntoBytes<'a> for $ty {
                #[inline(always)]
                fn into_bytes(self) -> Cow<'a, [u8]> {
                    Cow::Owned(self.to_ne_bytes().to_vec())
                }
            }

            impl<'a> IntoBytes<'a> for &'a [$ty] {
                #[inline(always)]
                fn into_bytes(self) -> Cow<'a, [u8]> {
                    let mut bytes = Vec::with_capacity(std::mem::size_of_val(self));
                    for v in self {
                        bytes.extend_from_slice(&v.to_ne_bytes());
                    }
                    Cow::Owned(bytes)
                }
            }
        )+
    };
}

scalar_into_bytes!(u16, u32, u64, f32, f64);

impl<'a> IntoBytes<'a> for u8 {
    #[inline(always)]
    fn into_bytes(self) -> Cow<'a, [u8]> {
        Cow::Owned(vec![self])
    }
}
