//! 주파수 bin 순위 매기기와 선택

use crate::core::types::SelectionPolicy;
use ndarray::Array2;
use rustfft::num_complex::Complex;

/// 선택된 bin: 중심 정렬 좌표와 복소 계수
#[derive(Debug, Clone, Copy)]
pub struct SelectedBin {
    pub row: usize,
    pub col: usize,
    pub coeff: Complex<f32>,
}

/// 정책에 따라 bin을 선택한다. 결과는 크기 내림차순.
pub fn select_bins(
    spectrum: &Array2<Complex<f32>>,
    policy: SelectionPolicy,
) -> Vec<SelectedBin> {
    match policy {
        SelectionPolicy::TopK(k) => select_top_k(spectrum, k),
        SelectionPolicy::Percentile(p) => select_percentile(spectrum, p),
    }
}

/// 크기 상위 k개 bin 선택
///
/// k가 전체 bin 수를 넘으면 전체 bin으로 클램핑된다 (완전 역변환으로
/// 퇴화). 동률은 (row, col) 오름차순으로 깨서 결정적이다.
pub fn select_top_k(spectrum: &Array2<Complex<f32>>, k: usize) -> Vec<SelectedBin> {
    let mut bins = ranked_bins(spectrum);
    bins.truncate(k.min(bins.len()));
    bins
}

/// 백분위수 임계값을 엄격히 초과하는 bin 선택
///
/// 결과 크기는 데이터에 따라 달라진다.
pub fn select_percentile(spectrum: &Array2<Complex<f32>>, p: f32) -> Vec<SelectedBin> {
    if p <= 0.0 || p >= 100.0 {
        panic!("백분위수는 (0, 100) 범위여야 함: {}", p);
    }
    let mags: Vec<f32> = spectrum.iter().map(|c| c.norm()).collect();
    let threshold = percentile(&mags, p);

    ranked_bins(spectrum)
        .into_iter()
        .filter(|b| b.coeff.norm() > threshold)
        .collect()
}

/// 전체 bin을 크기 내림차순으로 정렬
fn ranked_bins(spectrum: &Array2<Complex<f32>>) -> Vec<SelectedBin> {
    let mut bins: Vec<SelectedBin> = spectrum
        .indexed_iter()
        .map(|((row, col), &coeff)| SelectedBin { row, col, coeff })
        .collect();
    bins.sort_unstable_by(|a, b| {
        b.coeff
            .norm()
            .partial_cmp(&a.coeff.norm())
            .unwrap()
            .then((a.row, a.col).cmp(&(b.row, b.col)))
    });
    bins
}

/// 선형 보간 백분위수 (0 ≤ p ≤ 100)
pub fn percentile(values: &[f32], p: f32) -> f32 {
    if values.is_empty() {
        panic!("빈 배열의 백분위수는 정의되지 않음");
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());

    let rank = (p / 100.0) as f64 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = (rank - lo as f64) as f32;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
