//! 재구성 신호의 표준 [0,1] 재스케일

use ndarray::Array2;
use ndarray_stats::QuantileExt;

/// 선형 재스케일: (g − min) / (max − min)
///
/// 동적 범위가 정확히 0이면 (상수 그리드) 0으로 채운 그리드를
/// 반환한다. 오류로 전파하지 않는 정의된 엣지 케이스다.
pub fn normalize_display(grid: &Array2<f32>) -> Array2<f32> {
    let (min, max) = match (grid.min(), grid.max()) {
        (Ok(&lo), Ok(&hi)) => (lo, hi),
        _ => return Array2::zeros(grid.raw_dim()),
    };

    let range = max - min;
    if range == 0.0 {
        return Array2::zeros(grid.raw_dim());
    }
    grid.mapv(|v| (v - min) / range)
}

/// 여러 채널을 결합 극값으로 함께 정규화
///
/// 컬러 모드에서 채널별이 아니라 세 채널의 공통 min/max 한 쌍을
/// 쓰므로 상대 밝기와 색 균형이 시각적으로 보존된다.
pub fn normalize_joint(channels: &[Array2<f32>]) -> Vec<Array2<f32>> {
    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for channel in channels {
        if let (Ok(&min), Ok(&max)) = (channel.min(), channel.max()) {
            lo = lo.min(min);
            hi = hi.max(max);
        }
    }

    let range = hi - lo;
    if !range.is_finite() || range == 0.0 {
        return channels
            .iter()
            .map(|ch| Array2::zeros(ch.raw_dim()))
            .collect();
    }
    channels
        .iter()
        .map(|ch| ch.mapv(|v| (v - lo) / range))
        .collect()
}
