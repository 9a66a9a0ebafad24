//! Code buffer: a contiguous word-aligned region, a write cursor and a
//! growth policy.
//!
//! Every append funnels through [`CodeBuf::write_bytes`]. Words are written
//! in host byte order; the buffer itself never touches page permissions or
//! the instruction cache, that is the host's job before jumping into the
//! emitted code.

use std::alloc::{self, Layout};
use std::{ptr, slice};

/// What happens when an append would run past the reserved end.
#[derive(Eq, Hash, Copy, Clone, Debug, PartialEq)]
pub enum GrowMode {
    /// The region is allocated once; overflowing it is fatal.
    FixedSize,
    /// The region is reallocated (and the contents copied) in
    /// grow-step increments.
    AutoGrow,
}

/// Default reserved size.
pub const DEFAULT_CAPACITY: usize = 64 * 1024;

/// Default auto-grow increment.
pub const DEFAULT_GROW_STEP: usize = 64 * 1024;

// Owned regions are allocated cache-line aligned so that offset alignment
// coincides with address alignment up to 64 bytes.
const BUF_ALIGN: usize = 64;

/// The emitted-code region.
///
/// Either owns its storage (allocated at construction or on grow) or borrows
/// a caller-supplied region adopted via [`CodeBuf::set_external`]; adopted
/// storage is never freed here. Holding a raw region makes this type neither
/// `Send` nor `Sync`, which matches the single-threaded emission model.
pub struct CodeBuf {
    ptr: *mut u8,
    reserved: usize,
    used: usize,
    grow_step: usize,
    mode: GrowMode,
    owned: bool,
}

impl std::fmt::Debug for CodeBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeBuf")
            .field("ptr", &self.ptr)
            .field("reserved", &self.reserved)
            .field("used", &self.used)
            .field("grow_step", &self.grow_step)
            .field("mode", &self.mode)
            .field("owned", &self.owned)
            .finish()
    }
}

impl CodeBuf {
    /// Reserve `capacity` bytes up front. A capacity of zero defers
    /// allocation entirely (storage arrives later via
    /// [`CodeBuf::set_external`], or the first auto-grow).
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is not word-aligned; aborts on allocation
    /// failure.
    #[must_use]
    pub fn new(mode: GrowMode, capacity: usize) -> Self {
        if capacity & 3 != 0 {
            panic!("buffer size is not word-aligned: {capacity:#x}");
        }

        let mut buf = Self {
            ptr: ptr::null_mut(),
            reserved: capacity,
            used: 0,
            grow_step: DEFAULT_GROW_STEP,
            mode,
            owned: false,
        };

        if capacity != 0 {
            buf.ptr = Self::alloc_region(capacity);
            buf.owned = true;
        }

        buf
    }

    fn alloc_region(size: usize) -> *mut u8 {
        let layout =
            Layout::from_size_align(size, BUF_ALIGN).expect("invalid code buffer layout");
        let p = unsafe { alloc::alloc(layout) };
        if p.is_null() {
            alloc::handle_alloc_error(layout);
        }
        p
    }

    /// Adopt a caller-owned region. The cursor resets to its start; any
    /// previously owned storage is released first, and the adopted region is
    /// never freed by this type.
    ///
    /// # Safety
    ///
    /// `p` must be valid for writes of `size` bytes for as long as this
    /// buffer (or anything emitted into it) is in use.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not word-aligned.
    pub unsafe fn set_external(&mut self, p: *mut u8, size: usize) {
        if size & 3 != 0 {
            panic!("buffer size is not word-aligned: {size:#x}");
        }

        self.release();
        self.ptr = p;
        self.reserved = size;
        self.used = 0;
        self.owned = false;
    }

    /// Set the auto-grow increment.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero or not word-aligned.
    pub fn set_grow_step(&mut self, step: usize) {
        if step == 0 || step & 3 != 0 {
            panic!("auto-grow step is not word-aligned: {step:#x}");
        }
        self.grow_step = step;
    }

    /// Base of the region (null before any storage exists).
    #[inline(always)]
    #[must_use]
    pub fn base_ptr(&self) -> *const u8 {
        self.ptr
    }

    /// Base of the region as an address.
    #[inline(always)]
    #[must_use]
    pub fn base_addr(&self) -> usize {
        self.ptr as usize
    }

    /// Bytes emitted so far (the cursor).
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.used
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Bytes currently reserved.
    #[inline(always)]
    #[must_use]
    pub fn reserved(&self) -> usize {
        self.reserved
    }

    /// The emitted bytes.
    #[inline(always)]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        if self.ptr.is_null() {
            &[]
        } else {
            unsafe { slice::from_raw_parts(self.ptr, self.used) }
        }
    }

    /// Append raw bytes at the cursor.
    ///
    /// # Panics
    ///
    /// Panics when the append overflows a [`GrowMode::FixedSize`] region.
    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        let needed = self.used + bytes.len();
        if needed > self.reserved {
            match self.mode {
                GrowMode::FixedSize => panic!(
                    "code buffer overflow: need {needed:#x} bytes, reserved {:#x}",
                    self.reserved,
                ),
                GrowMode::AutoGrow => self.grow(needed),
            }
        }

        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), self.ptr.add(self.used), bytes.len());
        }
        self.used += bytes.len();
    }

    // Reallocate to the smallest reserved + k * grow_step that fits `needed`
    // bytes, copy the emitted code over, and release the old region if it
    // was ours. Branch labels are buffer offsets, so they stay valid across
    // the move.
    fn grow(&mut self, needed: usize) {
        let mut new_size = self.reserved;
        while new_size < needed {
            new_size += self.grow_step;
        }

        tracing::debug!(
            used = self.used,
            reserved = self.reserved,
            new_size,
            "code buffer exceeded its reservation, growing",
        );

        let new_ptr = Self::alloc_region(new_size);
        if !self.ptr.is_null() {
            unsafe {
                ptr::copy_nonoverlapping(self.ptr, new_ptr, self.used);
            }
        }
        self.release();

        self.ptr = new_ptr;
        self.reserved = new_size;
        self.owned = true;
    }

    /// Read the instruction word at byte offset `at`.
    ///
    /// # Panics
    ///
    /// Panics if the word is not fully inside the emitted region.
    #[must_use]
    pub(crate) fn word_at(&self, at: usize) -> u32 {
        assert!(
            at + 4 <= self.used,
            "word read at {at:#x} outside emitted code ({:#x} bytes)",
            self.used,
        );
        unsafe { self.ptr.add(at).cast::<u32>().read_unaligned() }
    }

    /// Rewrite the instruction word at byte offset `at` in place; the
    /// cursor does not move.
    pub(crate) fn set_word_at(&mut self, at: usize, word: u32) {
        assert!(
            at + 4 <= self.used,
            "word write at {at:#x} outside emitted code ({:#x} bytes)",
            self.used,
        );
        unsafe { self.ptr.add(at).cast::<u32>().write_unaligned(word) }
    }

    fn release(&mut self) {
        if self.owned && !self.ptr.is_null() {
            let layout = Layout::from_size_align(self.reserved, BUF_ALIGN)
                .expect("invalid code buffer layout");
            unsafe { alloc::dealloc(self.ptr, layout) };
            self.ptr = ptr::null_mut();
            self.owned = false;
        }
    }
}

impl Drop for CodeBuf {
    fn drop(&mut self) {
        self.release();
    }
}
