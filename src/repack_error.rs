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
use crate::repack_support::CropRect;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug)]
pub enum RepackError {
    UnsupportedPlaneCount(usize),
    PackedSizeMismatch(MismatchedSize),
    PlaneMinimumSizeMismatch(MismatchedSize),
    RowStrideMismatch(MismatchedSize),
    PointerOverflow,
    ZeroBaseSize,
}

impl Display for RepackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RepackError::UnsupportedPlaneCount(count) => f.write_fmt(format_args!(
                "Expected the 3 plane Y'UV 4:2:0 layout, but {} planes were reported",
                count
            )),
            RepackError::PackedSizeMismatch(size) => f.write_fmt(format_args!(
                "Packed destination must have size {}, but it was {}",
                size.expected, size.received
            )),
            RepackError::PlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Plane must have size at least {}, but it was {}",
                size.expected, size.received
            )),
            RepackError::RowStrideMismatch(size) => f.write_fmt(format_args!(
                "Row stride must be at least {}, but it was {}",
                size.expected, size.received
            )),
            RepackError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            RepackError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
        }
    }
}

impl Error for RepackError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), RepackError> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(RepackError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_packed_destination(
    packed: &[u8],
    width: u32,
    height: u32,
) -> Result<(), RepackError> {
    check_overflow_v2(width as usize, height as usize)?;
    let pixel_count = width as usize * height as usize;
    let expected = pixel_count + pixel_count / 2;
    if packed.len() != expected {
        return Err(RepackError::PackedSizeMismatch(MismatchedSize {
            expected,
            received: packed.len(),
        }));
    }
    Ok(())
}

/// Checks that a plane's backing slice covers its cropped region at the
/// declared strides, up to and including the last sample's first byte.
#[inline]
pub(crate) fn check_plane_source(
    data: &[u8],
    row_stride: u32,
    pixel_stride: u32,
    crop: CropRect,
) -> Result<(), RepackError> {
    if crop.width() == 0 || crop.height() == 0 {
        return Ok(());
    }
    let row_stride = row_stride as usize;
    let pixel_stride = pixel_stride as usize;
    check_overflow_v2(crop.right as usize, pixel_stride)?;
    let row_span = (crop.right as usize - 1) * pixel_stride + 1;
    if row_stride < row_span {
        return Err(RepackError::RowStrideMismatch(MismatchedSize {
            expected: row_span,
            received: row_stride,
        }));
    }
    check_overflow_v2(crop.bottom as usize, row_stride)?;
    let required = (crop.bottom as usize - 1) * row_stride + row_span;
    if data.len() < required {
        return Err(RepackError::PlaneMinimumSizeMismatch(MismatchedSize {
            expected: required,
            received: data.len(),
        }));
    }
    Ok(())
}
