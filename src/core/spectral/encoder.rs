//! 선택된 bin을 정규화 항으로 인코딩

use super::selector::SelectedBin;
use crate::core::types::{BasisKind, Term, TermSet};
use ndarray::Array2;
use rustfft::num_complex::Complex;

/// 선택된 bin들을 (주파수, 진폭, 위상) 항 집합으로 변환한다.
///
/// DC는 선택 결과와 무관하게 스펙트럼 중심에서 정확히 한 번 계산되며,
/// 중심 bin은 진동 항으로 방출되지 않는다. 재구성의 평균 밝기가
/// 선택 정책과 분리되는 불변식이다.
pub fn encode_terms(spectrum: &Array2<Complex<f32>>, selected: &[SelectedBin]) -> TermSet {
    let (rows, cols) = spectrum.dim();
    let scale = (rows * cols) as f32;
    let (center_r, center_c) = (rows / 2, cols / 2);

    let mut set = TermSet::new(BasisKind::Cosine, rows, cols);
    set.dc = spectrum[(center_r, center_c)].norm() / scale;

    for bin in selected {
        if bin.row == center_r && bin.col == center_c {
            continue;
        }
        set.terms.push(Term::new(
            (bin.col as i32 - center_c as i32) as f32,
            (bin.row as i32 - center_r as i32) as f32,
            bin.coeff.norm() / scale,
            bin.coeff.arg(),
        ));
    }
    set
}
