//! K개 자유 사인파 항 모델과 손실

use crate::core::types::{BasisKind, Term, TermSet};
use ndarray::Array2;
use std::f32::consts::PI;

/// 항 하나당 파라미터 수: [진폭, freq_x, freq_y, 위상]
pub const PARAMS_PER_TERM: usize = 4;

/// 파라미터 벡터를 사인 기저 그리드로 평가
///
/// 재구성기와 같은 반개구간 [0,1) 좌표 그리드를 쓰고 기저만 sin이다.
/// 주파수는 bin에 정렬되지 않은 연속 실수값.
pub fn evaluate_model(params: &[f32], rows: usize, cols: usize) -> Array2<f32> {
    if params.len() % PARAMS_PER_TERM != 0 {
        panic!(
            "파라미터 벡터 길이는 {}의 배수여야 함: {}",
            PARAMS_PER_TERM,
            params.len()
        );
    }

    Array2::from_shape_fn((rows, cols), |(i, j)| {
        let x = j as f32 / cols as f32;
        let y = i as f32 / rows as f32;
        let mut acc = 0.0_f32;
        for chunk in params.chunks_exact(PARAMS_PER_TERM) {
            let (a, kx, ky, phi) = (chunk[0], chunk[1], chunk[2], chunk[3]);
            acc += a * (2.0 * PI * (kx * x + ky * y) + phi).sin();
        }
        acc
    })
}

/// 목표 채널에 대한 평균 제곱 오차 손실
///
/// 비용은 f64로 누적한다. 심플렉스 이동 판정이 작은 차이에
/// 민감하기 때문.
pub fn mse_loss(params: &[f32], target: &Array2<f32>) -> f64 {
    let (rows, cols) = target.dim();
    let model = evaluate_model(params, rows, cols);

    let mut sum = 0.0_f64;
    for (m, t) in model.iter().zip(target.iter()) {
        let d = (m - t) as f64;
        sum += d * d;
    }
    sum / (rows * cols) as f64
}

/// 피팅된 파라미터 벡터를 사인 기저 항 집합으로 변환
///
/// 음수 진폭은 위상에 π를 더해 양수로 정규화하고 위상은 (-π, π]로
/// 감긴다. DC는 영 주파수 항이 암묵적으로 담당하므로 0으로 둔다.
pub fn params_to_term_set(params: &[f32], rows: usize, cols: usize) -> TermSet {
    let mut set = TermSet::new(BasisKind::Sine, rows, cols);
    for chunk in params.chunks_exact(PARAMS_PER_TERM) {
        let (mut a, kx, ky, mut phi) = (chunk[0], chunk[1], chunk[2], chunk[3]);
        if a < 0.0 {
            a = -a;
            phi += PI;
        }
        set.terms.push(Term::new(kx, ky, a, wrap_phase(phi)));
    }
    set
}

/// 위상을 (-π, π] 구간으로 감기
pub fn wrap_phase(phi: f32) -> f32 {
    let two_pi = 2.0 * PI;
    let mut p = phi % two_pi;
    if p <= -PI {
        p += two_pi;
    } else if p > PI {
        p -= two_pi;
    }
    p
}
