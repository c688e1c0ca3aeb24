//! 이미지 → [0,1] 채널 그리드 변환과 결과 저장

use crate::core::types::TermSet;
use anyhow::{bail, Context, Result};
use image::imageops::FilterType;
use image::{GrayImage, RgbImage};
use ndarray::Array2;
use std::path::Path;

/// 이미지를 읽어 [0,1] 채널 그리드로 변환
///
/// `size`가 주어지면 size×size 정사각형으로 리사이즈한다. `color`가
/// false면 휘도 1채널, true면 RGB 3채널을 돌려준다. 8비트 샘플을
/// 255로 나눠 정규화한다.
pub fn load_image(path: &Path, size: Option<u32>, color: bool) -> Result<Vec<Array2<f32>>> {
    let mut img = image::open(path)
        .with_context(|| format!("이미지를 열 수 없음: {}", path.display()))?;
    if let Some(s) = size {
        img = img.resize_exact(s, s, FilterType::Triangle);
    }

    if color {
        let rgb = img.to_rgb8();
        let (w, h) = rgb.dimensions();
        let mut channels = vec![Array2::zeros((h as usize, w as usize)); 3];
        for (x, y, pixel) in rgb.enumerate_pixels() {
            for (ch, grid) in channels.iter_mut().enumerate() {
                grid[(y as usize, x as usize)] = pixel[ch] as f32 / 255.0;
            }
        }
        Ok(channels)
    } else {
        let gray = img.to_luma8();
        let (w, h) = gray.dimensions();
        let mut channel = Array2::zeros((h as usize, w as usize));
        for (x, y, pixel) in gray.enumerate_pixels() {
            channel[(y as usize, x as usize)] = pixel[0] as f32 / 255.0;
        }
        Ok(vec![channel])
    }
}

/// [0,1] 채널들을 8비트 이미지로 저장 (1채널 = 그레이, 3채널 = RGB)
pub fn save_image(path: &Path, channels: &[Array2<f32>]) -> Result<()> {
    match channels {
        [gray] => {
            let (rows, cols) = gray.dim();
            let raw: Vec<u8> = gray
                .iter()
                .map(|&v| (v.clamp(0.0, 1.0) * 255.0) as u8)
                .collect();
            let img = GrayImage::from_raw(cols as u32, rows as u32, raw)
                .context("그레이 이미지 버퍼 생성 실패")?;
            img.save(path)
                .with_context(|| format!("이미지 저장 실패: {}", path.display()))?;
        }
        [r, g, b] => {
            let (rows, cols) = r.dim();
            if g.dim() != (rows, cols) || b.dim() != (rows, cols) {
                bail!("채널 형상 불일치: {:?} / {:?} / {:?}", r.dim(), g.dim(), b.dim());
            }
            let mut raw = Vec::with_capacity(rows * cols * 3);
            for i in 0..rows {
                for j in 0..cols {
                    for ch in [r, g, b] {
                        raw.push((ch[(i, j)].clamp(0.0, 1.0) * 255.0) as u8);
                    }
                }
            }
            let img = RgbImage::from_raw(cols as u32, rows as u32, raw)
                .context("RGB 이미지 버퍼 생성 실패")?;
            img.save(path)
                .with_context(|| format!("이미지 저장 실패: {}", path.display()))?;
        }
        _ => bail!("지원하는 채널 수는 1 또는 3: {}", channels.len()),
    }
    Ok(())
}

/// 항 집합들을 JSON 파일로 저장
pub fn save_term_sets(path: &Path, sets: &[TermSet]) -> Result<()> {
    let json = serde_json::to_string_pretty(sets).context("항 집합 직렬화 실패")?;
    std::fs::write(path, json)
        .with_context(|| format!("항 집합 쓰기 실패: {}", path.display()))?;
    Ok(())
}

/// JSON 파일에서 항 집합들 로드
pub fn load_term_sets(path: &Path) -> Result<Vec<TermSet>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("항 집합 읽기 실패: {}", path.display()))?;
    serde_json::from_str(&json).context("항 집합 역직렬화 실패")
}
