/*
 * Copyright (c) Radzivon Bartoshyk, 3/2025. All rights reserved.
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
use crate::frame::{Yuv420Frame, YuvPlane};
use crate::repack_error::check_packed_destination;
use crate::repack_support::{CropRect, RepackedFormat};
use crate::RepackError;

/// Relative placement of the chroma planes within their backing memory.
///
/// Camera drivers commonly expose one interleaved chroma allocation as two
/// logical planes with `pixel_stride == 2` whose base addresses differ by a
/// single byte. Recognizing that lets both channels move in one sweep instead
/// of two sample-by-sample passes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ChromaInterleave {
    /// Distinct allocations, every channel copied on its own.
    Separate,
    /// V,U byte pairs in memory, matching the NV21 chroma order.
    VuOrdered,
    /// U,V byte pairs in memory, pair order must be reversed.
    UvOrdered,
}

impl ChromaInterleave {
    fn detect(u_plane: &YuvPlane, v_plane: &YuvPlane) -> ChromaInterleave {
        if u_plane.pixel_stride != 2
            || v_plane.pixel_stride != 2
            || u_plane.row_stride != v_plane.row_stride
        {
            return ChromaInterleave::Separate;
        }
        let u_base = u_plane.base_address();
        let v_base = v_plane.base_address();
        if v_base.wrapping_add(1) == u_base {
            ChromaInterleave::VuOrdered
        } else if u_base.wrapping_add(1) == v_base {
            ChromaInterleave::UvOrdered
        } else {
            ChromaInterleave::Separate
        }
    }
}

/// Reorders a chroma run whose byte pairs arrive in the opposite channel
/// order. Every pair is loaded as a native 16-bit value and stored with its
/// bytes flipped; an odd run keeps its final sample as a plain single byte
/// copy since it has no partner inside the run.
fn swap_vu_pairs(run: &[u8], swapped: &mut [u8]) {
    debug_assert_eq!(run.len(), swapped.len());
    for (dst, src) in swapped.chunks_exact_mut(2).zip(run.chunks_exact(2)) {
        let pair = u16::from_ne_bytes([src[0], src[1]]).swap_bytes();
        dst.copy_from_slice(&pair.to_ne_bytes());
    }
    if run.len() % 2 != 0 {
        swapped[run.len() - 1] = run[run.len() - 1];
    }
}

/// Repacks device-reported YUV 4:2:0 frames into one contiguous NV21 or YV12
/// buffer.
///
/// One instance is expected to live as long as the camera session feeding it.
/// Scratch buffers are grown on demand and reused across frames, so a warmed
/// up instance performs no allocation on the per-frame path. The `&mut self`
/// receiver makes the single-owner contract explicit: two threads cannot share
/// one repacker, while independent instances never share state.
#[derive(Debug, Default)]
pub struct Yuv420Repacker {
    row_buffer: Vec<u8>,
    vu_buffer: Vec<u8>,
}

impl Yuv420Repacker {
    pub fn new() -> Yuv420Repacker {
        Yuv420Repacker::default()
    }

    /// Repacks `frame` into `packed`, choosing the canonical layout from the
    /// chroma pixel strides.
    ///
    /// `packed` must be exactly `RepackedFormat::packed_size(width, height)`
    /// bytes for the frame's visible size. Planar chroma produces [`RepackedFormat::Yv12`],
    /// interleaved chroma produces [`RepackedFormat::Nv21`]; the returned tag
    /// tells the downstream conversion stage which layout it received.
    ///
    /// A failed frame leaves the repacker reusable; the destination content is
    /// unspecified for that frame only.
    pub fn repack(
        &mut self,
        frame: &Yuv420Frame,
        packed: &mut [u8],
    ) -> Result<RepackedFormat, RepackError> {
        frame.check_constraints()?;
        check_packed_destination(packed, frame.width(), frame.height())?;

        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let pixel_count = width * height;

        let luma = &frame.planes[0];
        let u_plane = &frame.planes[1];
        let v_plane = &frame.planes[2];

        let format = if u_plane.pixel_stride == 1 && v_plane.pixel_stride == 1 {
            RepackedFormat::Yv12
        } else {
            RepackedFormat::Nv21
        };

        self.copy_plane(luma, frame.crop, packed, 0, 1);

        let chroma_crop = frame.crop.to_chroma();
        match format {
            RepackedFormat::Yv12 => {
                self.copy_plane(v_plane, chroma_crop, packed, pixel_count, 1);
                self.copy_plane(
                    u_plane,
                    chroma_crop,
                    packed,
                    pixel_count + pixel_count / 4,
                    1,
                );
            }
            RepackedFormat::Nv21 => match ChromaInterleave::detect(u_plane, v_plane) {
                ChromaInterleave::VuOrdered => {
                    self.interleaved_pass(v_plane, u_plane, chroma_crop, packed, pixel_count, false);
                }
                ChromaInterleave::UvOrdered => {
                    self.interleaved_pass(u_plane, v_plane, chroma_crop, packed, pixel_count, true);
                }
                ChromaInterleave::Separate => {
                    self.copy_plane(v_plane, chroma_crop, packed, pixel_count, 2);
                    self.copy_plane(u_plane, chroma_crop, packed, pixel_count + 1, 2);
                }
            },
        }

        Ok(format)
    }

    /// Copies one plane into the packed buffer at the given offset and sample
    /// spacing, fastest applicable strategy first.
    fn copy_plane(
        &mut self,
        plane: &YuvPlane,
        crop: CropRect,
        packed: &mut [u8],
        output_offset: usize,
        output_stride: usize,
    ) {
        let plane_width = crop.width() as usize;
        let plane_height = crop.height() as usize;
        if plane_width == 0 || plane_height == 0 {
            return;
        }
        let row_stride = plane.row_stride as usize;
        let pixel_stride = plane.pixel_stride as usize;
        let top = crop.top as usize;
        let left = crop.left as usize;

        let mut output_offset = output_offset;

        if pixel_stride == 1 && output_stride == 1 {
            if row_stride == plane_width {
                // Tight rows, the whole cropped region is one contiguous run.
                let start = top * row_stride;
                packed[output_offset..output_offset + plane_width * plane_height]
                    .copy_from_slice(&plane.data[start..start + plane_width * plane_height]);
                return;
            }
            for row in 0..plane_height {
                let start = (row + top) * row_stride + left;
                packed[output_offset..output_offset + plane_width]
                    .copy_from_slice(&plane.data[start..start + plane_width]);
                output_offset += plane_width;
            }
            return;
        }

        // Sample spacing disagrees with the destination, stage each row in the
        // reusable scratch and scatter sample by sample.
        let row_length = (plane_width - 1) * pixel_stride + 1;
        self.reserve_row(row_stride);
        let row_buffer = &mut self.row_buffer[..row_length];
        for row in 0..plane_height {
            let start = (row + top) * row_stride + left * pixel_stride;
            row_buffer.copy_from_slice(&plane.data[start..start + row_length]);
            for col in 0..plane_width {
                packed[output_offset] = row_buffer[col * pixel_stride];
                output_offset += output_stride;
            }
        }
    }

    /// Combined chroma pass for planes recognized as one interleaved
    /// allocation. Both channels are written in a single sweep starting at the
    /// NV21 V offset; the caller skips the separate U pass.
    ///
    /// `run_plane` is the plane whose base byte opens the interleaved run,
    /// `partner` is the one starting a byte later. Driver buffers stop at the
    /// last sample's first byte, so a clipped run is completed from the
    /// partner plane's final sample.
    fn interleaved_pass(
        &mut self,
        run_plane: &YuvPlane,
        partner: &YuvPlane,
        crop: CropRect,
        packed: &mut [u8],
        output_offset: usize,
        swap: bool,
    ) {
        let plane_width = crop.width() as usize;
        let plane_height = crop.height() as usize;
        if plane_width == 0 || plane_height == 0 {
            return;
        }
        let row_stride = run_plane.row_stride as usize;
        let top = crop.top as usize;
        let left = crop.left as usize;
        let row_length = 2 * plane_width;

        // Tight rows collapse into one whole-region sweep.
        let (rows, span) = if row_stride == row_length {
            (1usize, row_length * plane_height)
        } else {
            (plane_height, row_length)
        };

        if swap {
            self.reserve_vu(span);
        }

        let mut output_offset = output_offset;
        for row in 0..rows {
            let start = (row + top) * row_stride + left * 2;
            let avail = span.min(run_plane.data.len().saturating_sub(start));
            if swap {
                let vu_buffer = &mut self.vu_buffer[..span];
                swap_vu_pairs(
                    &run_plane.data[start..start + avail],
                    &mut vu_buffer[..avail],
                );
                if avail < span {
                    vu_buffer[avail] = vu_buffer[avail - 1];
                    vu_buffer[avail - 1] = partner.data[start + avail - 1];
                }
                packed[output_offset..output_offset + span].copy_from_slice(vu_buffer);
            } else {
                packed[output_offset..output_offset + avail]
                    .copy_from_slice(&run_plane.data[start..start + avail]);
                if avail < span {
                    packed[output_offset + avail] = partner.data[start + avail - 1];
                }
            }
            output_offset += span;
        }
    }

    fn reserve_row(&mut self, capacity: usize) {
        if self.row_buffer.len() < capacity {
            self.row_buffer.resize(capacity, 0);
        }
    }

    fn reserve_vu(&mut self, capacity: usize) {
        if self.vu_buffer.len() < capacity {
            self.vu_buffer.resize(capacity, 0);
        }
    }
}
