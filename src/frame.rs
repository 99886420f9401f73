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
use crate::repack_error::check_plane_source;
use crate::repack_support::CropRect;
use crate::RepackError;

/// One plane of a device-reported YUV image.
///
/// Strides are reported by the producing driver and vary between devices;
/// nothing here assumes tight packing.
#[derive(Debug, Clone)]
pub struct YuvPlane<'a> {
    pub data: &'a [u8],
    /// Bytes between the start of consecutive rows, at least the row's sample span.
    pub row_stride: u32,
    /// Bytes between consecutive samples within a row, 1 for planar, 2 for
    /// chroma interleaved with the other channel.
    pub pixel_stride: u32,
}

impl YuvPlane<'_> {
    /// Raw address of the plane's first backing byte, used to recognize chroma
    /// planes carved out of one interleaved allocation.
    #[inline]
    pub(crate) fn base_address(&self) -> usize {
        self.data.as_ptr() as usize
    }
}

/// A YUV 4:2:0 image as handed out by a camera pipeline: plane 0 is Y,
/// plane 1 is U, plane 2 is V, and the crop marks the visible region in luma
/// sample coordinates.
#[derive(Debug, Clone)]
pub struct Yuv420Frame<'a> {
    pub planes: &'a [YuvPlane<'a>],
    pub crop: CropRect,
}

impl<'a> Yuv420Frame<'a> {
    /// Frame whose visible region is the whole backing image.
    pub fn from_planes(planes: &'a [YuvPlane<'a>], width: u32, height: u32) -> Self {
        Yuv420Frame {
            planes,
            crop: CropRect::full(width, height),
        }
    }

    /// Visible width in luma samples.
    #[inline]
    pub fn width(&self) -> u32 {
        self.crop.width()
    }

    /// Visible height in luma samples.
    #[inline]
    pub fn height(&self) -> u32 {
        self.crop.height()
    }

    pub fn check_constraints(&self) -> Result<(), RepackError> {
        if self.planes.len() != 3 {
            return Err(RepackError::UnsupportedPlaneCount(self.planes.len()));
        }
        if self.width() == 0 || self.height() == 0 {
            return Err(RepackError::ZeroBaseSize);
        }
        let luma = &self.planes[0];
        check_plane_source(luma.data, luma.row_stride, luma.pixel_stride, self.crop)?;
        let chroma_crop = self.crop.to_chroma();
        for chroma in &self.planes[1..] {
            check_plane_source(
                chroma.data,
                chroma.row_stride,
                chroma.pixel_stride,
                chroma_crop,
            )?;
        }
        Ok(())
    }
}
