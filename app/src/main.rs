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
use image::GrayImage;
use rand::Rng;
use std::time::Instant;
use yuv_repack::{CropRect, RepackedFormat, Yuv420Frame, Yuv420Repacker, YuvPlane};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const FRAMES: u32 = 240;

fn synth_luma(row_stride: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    let mut luma = vec![0u8; row_stride * HEIGHT as usize];
    for (y, row) in luma.chunks_exact_mut(row_stride).enumerate() {
        for (x, sample) in row.iter_mut().take(WIDTH as usize).enumerate() {
            let gradient = ((x + y) * 255 / (WIDTH + HEIGHT) as usize) as u8;
            *sample = gradient.saturating_add(rng.random_range(0..16));
        }
    }
    luma
}

fn main() {
    let chroma_width = (WIDTH / 2) as usize;
    let chroma_height = (HEIGHT / 2) as usize;

    let luma_stride = WIDTH as usize + 32;
    let luma = synth_luma(luma_stride);

    // Interleaved chroma the way camera HALs usually hand it out: one U,V
    // allocation with row padding, exposed as two planes one byte apart.
    let chroma_stride = chroma_width * 2 + 64;
    let mut rng = rand::rng();
    let mut chroma_backing = vec![0u8; chroma_stride * chroma_height];
    for sample in chroma_backing.iter_mut() {
        *sample = rng.random();
    }

    let interleaved_planes = [
        YuvPlane {
            data: &luma,
            row_stride: luma_stride as u32,
            pixel_stride: 1,
        },
        YuvPlane {
            data: &chroma_backing[..chroma_stride * chroma_height - 1],
            row_stride: chroma_stride as u32,
            pixel_stride: 2,
        },
        YuvPlane {
            data: &chroma_backing[1..],
            row_stride: chroma_stride as u32,
            pixel_stride: 2,
        },
    ];
    let interleaved_frame = Yuv420Frame {
        planes: &interleaved_planes,
        crop: CropRect::full(WIDTH, HEIGHT),
    };

    let mut packed = vec![0u8; RepackedFormat::packed_size(WIDTH, HEIGHT)];
    let mut repacker = Yuv420Repacker::new();

    // Warm the scratch buffers before timing, the steady state is what the
    // per-frame path sees.
    let format = repacker.repack(&interleaved_frame, &mut packed).unwrap();
    let start = Instant::now();
    for _ in 0..FRAMES {
        repacker.repack(&interleaved_frame, &mut packed).unwrap();
    }
    let elapsed = start.elapsed();
    println!(
        "{}x{} interleaved chroma -> {:?}: {:.3} ms/frame ({:.0} fps)",
        WIDTH,
        HEIGHT,
        format,
        elapsed.as_secs_f64() * 1000.0 / FRAMES as f64,
        FRAMES as f64 / elapsed.as_secs_f64()
    );

    let u_plane: Vec<u8> = (0..chroma_width * chroma_height)
        .map(|i| (i % 256) as u8)
        .collect();
    let v_plane: Vec<u8> = (0..chroma_width * chroma_height)
        .map(|i| ((i * 7) % 256) as u8)
        .collect();
    let planar_planes = [
        YuvPlane {
            data: &luma,
            row_stride: luma_stride as u32,
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
        planes: &planar_planes,
        crop: CropRect::full(WIDTH, HEIGHT),
    };

    let format = repacker.repack(&planar_frame, &mut packed).unwrap();
    let start = Instant::now();
    for _ in 0..FRAMES {
        repacker.repack(&planar_frame, &mut packed).unwrap();
    }
    let elapsed = start.elapsed();
    println!(
        "{}x{} planar chroma -> {:?}: {:.3} ms/frame ({:.0} fps)",
        WIDTH,
        HEIGHT,
        format,
        elapsed.as_secs_f64() * 1000.0 / FRAMES as f64,
        FRAMES as f64 / elapsed.as_secs_f64()
    );

    let pixel_count = (WIDTH * HEIGHT) as usize;
    let preview = GrayImage::from_raw(WIDTH, HEIGHT, packed[..pixel_count].to_vec()).unwrap();
    preview.save("repacked_luma.png").unwrap();
    println!("Wrote repacked_luma.png");
}
