#![allow(dead_code)]

use image::{ImageFormat, Rgb, RgbImage};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

pub fn create_input_directory(temp_dir: &Path) -> PathBuf {
    let input_dir = temp_dir.join("compress");
    fs::create_dir(&input_dir).unwrap();
    input_dir
}

/// Smooth gradient: compresses well, far below 500KB at any quality.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save_with_format(path, ImageFormat::Jpeg).unwrap();
}

/// Pseudo-random pixels: compresses poorly.
pub fn create_noise_jpeg(path: &Path, width: u32, height: u32) {
    let mut state: u32 = 0x9E37_79B9;
    let img = RgbImage::from_fn(width, height, |_, _| {
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state & 0xFF) as u8
        };
        Rgb([next(), next(), next()])
    });
    img.save_with_format(path, ImageFormat::Jpeg).unwrap();
}

/// Random colour cells of `cell` pixels. Unlike per-pixel noise, the detail
/// survives heavy downscaling, so even tiny resizes stay large.
pub fn create_blocky_noise_jpeg(path: &Path, width: u32, height: u32, cell: u32) {
    let cells_x = width.div_ceil(cell);
    let cells_y = height.div_ceil(cell);
    let mut state: u32 = 0x2545_F491;
    let colors: Vec<Rgb<u8>> = (0..cells_x * cells_y)
        .map(|_| {
            let mut next = || {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state & 0xFF) as u8
            };
            Rgb([next(), next(), next()])
        })
        .collect();
    let img = RgbImage::from_fn(width, height, |x, y| {
        colors[((y / cell) * cells_x + x / cell) as usize]
    });
    img.save_with_format(path, ImageFormat::Jpeg).unwrap();
}

pub fn create_fake_jpeg(path: &Path) {
    File::create(path)
        .unwrap()
        .write_all(b"fake jpg data")
        .unwrap();
}

/// Seconds since the Unix epoch; 1_704_067_200 is 2024-01-01.
pub fn set_mtime(path: &Path, unix_secs: u64) {
    let file = File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(unix_secs))
        .unwrap();
}
