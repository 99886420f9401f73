/*
 * Copyright (c) Radzivon Bartoshyk, 2/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

/// Canonical packed layout produced by a repack pass.
///
/// The layout is selected per frame from the chroma pixel strides and returned
/// to the caller so the downstream color conversion stage knows how to
/// interpret the buffer.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RepackedFormat {
    /// Semi-planar, full Y plane followed by interleaved V,U bytes.
    Nv21 = 0,
    /// Fully planar, full Y plane followed by the V plane, then the U plane.
    Yv12 = 1,
}

impl RepackedFormat {
    /// Packed buffer length in bytes for a 4:2:0 image of the given visible size.
    ///
    /// Both NV21 and YV12 occupy `width * height + width * height / 2` bytes.
    #[inline]
    pub const fn packed_size(width: u32, height: u32) -> usize {
        let pixel_count = width as usize * height as usize;
        pixel_count + pixel_count / 2
    }
}

/// Active sub-region of a plane's backing buffer, edges in samples,
/// right/bottom exclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    #[inline]
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> CropRect {
        CropRect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Crop spanning the entire visible image.
    #[inline]
    pub const fn full(width: u32, height: u32) -> CropRect {
        CropRect {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Matching crop for a 4:2:0 chroma plane, every edge halved truncating.
    #[inline]
    pub const fn to_chroma(&self) -> CropRect {
        CropRect {
            left: self.left / 2,
            top: self.top / 2,
            right: self.right / 2,
            bottom: self.bottom / 2,
        }
    }
}
