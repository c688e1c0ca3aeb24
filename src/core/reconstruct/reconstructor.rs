//! 항 집합의 코사인/사인 기저 합 평가

use crate::core::types::TermSet;
use ndarray::parallel::prelude::*;
use ndarray::{Array2, Axis};
use std::f32::consts::PI;

/// 항 집합을 목표 형상의 좌표 그리드 위에서 평가한다.
///
/// 좌표는 반개구간 [0,1): x = j/w, y = i/h. 주기 기저가 단위 구간마다
/// 정확히 한 번 나타나도록 끝점을 제외한다. 출력은
/// dc + Σ amplitude·basis(2π(fx·x + fy·y) + phase) 이며 합산 순서는
/// 부동소수점 반올림 외에는 결과에 영향이 없다.
pub fn reconstruct(set: &TermSet, rows: usize, cols: usize) -> Array2<f32> {
    let mut grid = Array2::from_elem((rows, cols), set.dc);

    // 행 단위 병렬화 (순수 함수라 관측 결과는 동일)
    grid.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut row)| {
            let y = i as f32 / rows as f32;
            for (j, value) in row.iter_mut().enumerate() {
                let x = j as f32 / cols as f32;
                let mut acc = 0.0_f32;
                for term in &set.terms {
                    let angle =
                        2.0 * PI * (term.freq_x * x + term.freq_y * y) + term.phase;
                    acc += term.amplitude * set.basis.eval(angle);
                }
                *value += acc;
            }
        });

    grid
}

/// 원본 채널과 같은 형상으로 재구성
pub fn reconstruct_source(set: &TermSet) -> Array2<f32> {
    reconstruct(set, set.rows, set.cols)
}
