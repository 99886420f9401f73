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

fuzz_target!(|data: (u8, u8, u8, u8)| {
    fuzz_planar(data.0, data.1, data.2, data.3);
    fuzz_separate_interleaved(data.0, data.1, data.2, data.3);
});

fn fuzz_planar(i_width: u8, i_height: u8, yuv_value: u8, padding: u8) {
    if i_width == 0 || i_height == 0 {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;
    let chroma_width = (width / 2) as usize;
    let chroma_height = (height / 2) as usize;

    let luma_stride = width as usize + padding as usize;
    let chroma_stride = chroma_width + padding as usize;

    let luma = vec![yuv_value; luma_stride * height as usize];
    let u_plane = vec![yuv_value; chroma_stride * chroma_height];
    let v_plane = vec![yuv_value; chroma_stride * chroma_height];

    let planes = [
        YuvPlane {
            data: &luma,
            row_stride: luma_stride as u32,
            pixel_stride: 1,
        },
        YuvPlane {
            data: &u_plane,
            row_stride: chroma_stride as u32,
            pixel_stride: 1,
        },
        YuvPlane {
            data: &v_plane,
            row_stride: chroma_stride as u32,
            pixel_stride: 1,
        },
    ];
    let frame = Yuv420Frame::from_planes(&planes, width, height);

    let mut packed = vec![0u8; RepackedFormat::packed_size(width, height)];
    let mut repacker = Yuv420Repacker::new();
    let format = repacker.repack(&frame, &mut packed).unwrap();
    assert_eq!(format, RepackedFormat::Yv12);
}

fn fuzz_separate_interleaved(i_width: u8, i_height: u8, yuv_value: u8, padding: u8) {
    if i_width == 0 || i_height == 0 {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;
    let chroma_width = (width / 2) as usize;
    let chroma_height = (height / 2) as usize;

    let luma_stride = width as usize + padding as usize;
    let chroma_stride = chroma_width * 2 + padding as usize + 1;

    let luma = vec![yuv_value; luma_stride * height as usize];
    let u_plane = vec![yuv_value; chroma_stride * chroma_height];
    let v_plane = vec![yuv_value; chroma_stride * chroma_height];

    let planes = [
        YuvPlane {
            data: &luma,
            row_stride: luma_stride as u32,
            pixel_stride: 1,
        },
        YuvPlane {
            data: &u_plane,
            row_stride: chroma_stride as u32,
            pixel_stride: 2,
        },
        YuvPlane {
            data: &v_plane,
            row_stride: chroma_stride as u32,
            pixel_stride: 2,
        },
    ];
    let frame = Yuv420Frame::from_planes(&planes, width, height);

    let mut packed = vec![0u8; RepackedFormat::packed_size(width, height)];
    let mut repacker = Yuv420Repacker::new();
    let format = repacker.repack(&frame, &mut packed).unwrap();
    assert_eq!(format, RepackedFormat::Nv21);
}
