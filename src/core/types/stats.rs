//! 근사 품질 통계

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// 채널별 근사 통계
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproxStats {
    /// 유지된 진동 항 개수
    pub kept_terms: usize,
    /// 전체 bin 개수 (h·w)
    pub total_bins: usize,
    pub mse: f32,
    pub rmse: f32,
    pub psnr_db: f32,
    pub elapsed_ms: f64,
}

impl ApproxStats {
    pub fn from_reconstruction(
        original: &Array2<f32>,
        reconstruction: &Array2<f32>,
        kept_terms: usize,
        elapsed_ms: f64,
    ) -> Self {
        let mse = compute_mse(original, reconstruction);
        Self {
            kept_terms,
            total_bins: original.len(),
            mse,
            rmse: mse.sqrt(),
            psnr_db: compute_psnr(mse),
            elapsed_ms,
        }
    }
}

/// 두 그리드 사이의 평균 제곱 오차
pub fn compute_mse(a: &Array2<f32>, b: &Array2<f32>) -> f32 {
    if a.dim() != b.dim() {
        panic!("그리드 형상 불일치: {:?} vs {:?}", a.dim(), b.dim());
    }
    let sum: f32 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum();
    sum / a.len() as f32
}

/// [0,1] 신호 기준 PSNR (dB)
pub fn compute_psnr(mse: f32) -> f32 {
    if mse <= 0.0 {
        return f32::INFINITY;
    }
    -10.0 * mse.log10()
}
