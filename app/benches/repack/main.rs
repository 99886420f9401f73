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
use criterion::{criterion_group, criterion_main, Criterion};
use yuv_repack::{CropRect, RepackedFormat, Yuv420Frame, Yuv420Repacker, YuvPlane};

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;

pub fn criterion_benchmark(c: &mut Criterion) {
    let pixel_count = (WIDTH * HEIGHT) as usize;
    let chroma_width = (WIDTH / 2) as usize;
    let chroma_height = (HEIGHT / 2) as usize;
    let chroma_len = chroma_width * chroma_height;

    let luma: Vec<u8> = (0..pixel_count).map(|i| (i % 256) as u8).collect();
    let u_plane: Vec<u8> = (0..chroma_len).map(|i| (i % 256) as u8).collect();
    let v_plane: Vec<u8> = (0..chroma_len).map(|i| ((i * 3) % 256) as u8).collect();

    let planar = [
        YuvPlane {
            data: &luma,
            row_stride: WIDTH,
            pixel_stride: 1,
        },
        YuvPlane {
            data: &u_plane,
            row_stride: chroma_width as u32,
            pixel_stride: 1,
        },
        YuvPlane {
            data: &v_plane,
            row_stride: chroma_width as u32,
            pixel_stride: 1,
        },
    ];
    let planar_frame = Yuv420Frame {
        planes: &planar,
        crop: CropRect::full(WIDTH, HEIGHT),
    };
    let mut packed = vec![0u8; RepackedFormat::packed_size(WIDTH, HEIGHT)];
    let mut repacker = Yuv420Repacker::new();
    c.bench_function("yuv_repack: planar -> YV12 1080p", |b| {
        b.iter(|| {
            repacker.repack(&planar_frame, &mut packed).unwrap();
        })
    });

    // NV12-ordered interleaved allocation, the swap path.
    let nv12_backing: Vec<u8> = (0..chroma_len * 2).map(|i| (i % 256) as u8).collect();
    let uv_ordered = [
        YuvPlane {
            data: &luma,
            row_stride: WIDTH,
            pixel_stride: 1,
        },
        YuvPlane {
            data: &nv12_backing[..chroma_len * 2 - 1],
            row_stride: chroma_width as u32 * 2,
            pixel_stride: 2,
        },
        YuvPlane {
            data: &nv12_backing[1..],
            row_stride: chroma_width as u32 * 2,
            pixel_stride: 2,
        },
    ];
    let uv_ordered_frame = Yuv420Frame {
        planes: &uv_ordered,
        crop: CropRect::full(WIDTH, HEIGHT),
    };
    let mut packed = vec![0u8; RepackedFormat::packed_size(WIDTH, HEIGHT)];
    let mut repacker = Yuv420Repacker::new();
    c.bench_function("yuv_repack: U,V interleaved -> NV21 1080p", |b| {
        b.iter(|| {
            repacker.repack(&uv_ordered_frame, &mut packed).unwrap();
        })
    });

    // V,U ordered allocation, straight bulk copy.
    let vu_ordered = [
        YuvPlane {
            data: &luma,
            row_stride: WIDTH,
            pixel_stride: 1,
        },
        YuvPlane {
            data: &nv12_backing[1..],
            row_stride: chroma_width as u32 * 2,
            pixel_stride: 2,
        },
        YuvPlane {
            data: &nv12_backing[..chroma_len * 2 - 1],
            row_stride: chroma_width as u32 * 2,
            pixel_stride: 2,
        },
    ];
    let vu_ordered_frame = Yuv420Frame {
        planes: &vu_ordered,
        crop: CropRect::full(WIDTH, HEIGHT),
    };
    let mut packed = vec![0u8; RepackedFormat::packed_size(WIDTH, HEIGHT)];
    let mut repacker = Yuv420Repacker::new();
    c.bench_function("yuv_repack: V,U interleaved -> NV21 1080p", |b| {
        b.iter(|| {
            repacker.repack(&vu_ordered_frame, &mut packed).unwrap();
        })
    });

    // Chroma planes from unrelated allocations, the sample-by-sample path.
    let u_loose: Vec<u8> = (0..chroma_len * 2).map(|i| (i % 256) as u8).collect();
    let v_loose: Vec<u8> = (0..chroma_len * 2).map(|i| ((i * 5) % 256) as u8).collect();
    let separate = [
        YuvPlane {
            data: &luma,
            row_stride: WIDTH,
            pixel_stride: 1,
        },
        YuvPlane {
            data: &u_loose,
            row_stride: chroma_width as u32 * 2,
            pixel_stride: 2,
        },
        YuvPlane {
            data: &v_loose,
            row_stride: chroma_width as u32 * 2,
            pixel_stride: 2,
        },
    ];
    let separate_frame = Yuv420Frame {
        planes: &separate,
        crop: CropRect::full(WIDTH, HEIGHT),
    };
    let mut packed = vec![0u8; RepackedFormat::packed_size(WIDTH, HEIGHT)];
    let mut repacker = Yuv420Repacker::new();
    c.bench_function("yuv_repack: separate planes -> NV21 1080p", |b| {
        b.iter(|| {
            repacker.repack(&separate_frame, &mut packed).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
