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

#![no_main]

use libfuzzer_sys::fuzz_target;
use yuv_repack::{RepackedFormat, Yuv420Frame, Yuv420Repacker, YuvPlane};

fuzz_target!(|data: (u8, u8, u8)| {
    fuzz_adjacent(data.0, data.1, data.2, false);
    fuzz_adjacent(data.0, data.1, data.2, true);
});

// Both interleave directions over one shared allocation must reproduce the
// exact V,U byte sequence regardless of which path the repacker picks.
fn fuzz_adjacent(i_width: u8, i_height: u8, seed: u8, uv_ordered: bool) {
    if i_width < 2 || i_height < 2 {
        return;
    }
    let width = (i_width as u32) & !1;
    let height = (i_height as u32) & !1;
    let chroma_width = (width / 2) as usize;
    let chroma_height = (height / 2) as usize;
    let chroma_len = chroma_width * chroma_height;

    let luma = vec![seed; width as usize * height as usize];
    let backing: Vec<u8> = (0..chroma_len * 2)
        .map(|i| (i as u8).wrapping_add(seed))
        .collect();
    let clipped = &backing[..chroma_len * 2 - 1];
    let shifted = &backing[1..];

    // uv_ordered: backing holds U,V pairs and the repacker must swap them;
    // otherwise backing already holds V,U pairs.
    let (u_data, v_data) = if uv_ordered {
        (clipped, shifted)
    } else {
        (shifted, clipped)
    };

    let planes = [
        YuvPlane {
            data: &luma,
            row_stride: width,
            pixel_stride: 1,
        },
        YuvPlane {
            data: u_data,
            row_stride: chroma_width as u32 * 2,
            pixel_stride: 2,
        },
        YuvPlane {
            data: v_data,
            row_stride: chroma_width as u32 * 2,
            pixel_stride: 2,
        },
    ];
    let frame = Yuv420Frame::from_planes(&planes, width, height);

    let mut packed = vec![0u8; RepackedFormat::packed_size(width, height)];
    let mut repacker = Yuv420Repacker::new();
    let format = repacker.repack(&frame, &mut packed).unwrap();
    assert_eq!(format, RepackedFormat::Nv21);

    let pixel_count = (width * height) as usize;
    for sample in 0..chroma_len {
        let (v_expected, u_expected) = if uv_ordered {
            (backing[sample * 2 + 1], backing[sample * 2])
        } else {
            (backing[sample * 2], backing[sample * 2 + 1])
        };
        assert_eq!(packed[pixel_count + sample * 2], v_expected);
        assert_eq!(packed[pixel_count + sample * 2 + 1], u_expected);
    }
}
