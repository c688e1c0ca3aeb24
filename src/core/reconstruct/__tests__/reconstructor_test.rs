use crate::core::reconstruct::*;
use crate::core::types::{BasisKind, Term, TermSet};
use approx::assert_abs_diff_eq;
use std::f32::consts::PI;

#[test]
fn 빈_항집합_테스트() {
    let mut set = TermSet::new(BasisKind::Cosine, 3, 5);
    set.dc = 0.25;

    let grid = reconstruct(&set, 3, 5);
    assert_eq!(grid.dim(), (3, 5));
    for &v in grid.iter() {
        assert_eq!(v, 0.25, "진동 항이 없으면 전부 DC 값");
    }
}

#[test]
fn 단일_항_평가_테스트() {
    let mut set = TermSet::new(BasisKind::Cosine, 4, 4);
    set.terms.push(Term::new(1.0, 0.0, 0.5, 0.0));

    let grid = reconstruct(&set, 4, 4);
    // (i, j) = (0, 1): x = 0.25 → 0.5·cos(π/2) = 0
    assert_abs_diff_eq!(grid[(0, 1)], 0.0, epsilon = 1e-6);
    // (0, 0): 0.5·cos(0) = 0.5
    assert_abs_diff_eq!(grid[(0, 0)], 0.5, epsilon = 1e-6);
    // (0, 2): x = 0.5 → 0.5·cos(π) = −0.5
    assert_abs_diff_eq!(grid[(0, 2)], -0.5, epsilon = 1e-6);
    // y에는 의존하지 않아야 함
    for i in 0..4 {
        assert!((grid[(i, 0)] - grid[(0, 0)]).abs() < 1e-6);
    }
}

#[test]
fn 사인_기저_테스트() {
    let mut set = TermSet::new(BasisKind::Sine, 4, 4);
    set.terms.push(Term::new(0.0, 1.0, 1.0, 0.0));

    let grid = reconstruct(&set, 4, 4);
    // (1, 0): y = 0.25 → sin(π/2) = 1
    assert_abs_diff_eq!(grid[(1, 0)], 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(grid[(0, 0)], 0.0, epsilon = 1e-6);
}

#[test]
fn dc_분리_가산성_테스트() {
    let mut set = TermSet::new(BasisKind::Cosine, 4, 6);
    set.terms.push(Term::new(2.0, -1.0, 0.3, PI / 3.0));
    set.terms.push(Term::new(-1.0, 1.0, 0.1, -PI / 4.0));
    set.dc = 0.45;

    // DC를 떼고 재구성한 뒤 다시 더하면 같은 결과여야 함
    let with_dc = reconstruct(&set, 4, 6);

    let mut zero_dc = set.clone();
    zero_dc.dc = 0.0;
    let without_dc = reconstruct(&zero_dc, 4, 6);

    for (a, b) in with_dc.iter().zip(without_dc.iter()) {
        assert!((a - (b + 0.45)).abs() < 1e-6, "DC는 가산·분리 가능해야 함");
    }
}

#[test]
fn 원본_형상_재구성_테스트() {
    let mut set = TermSet::new(BasisKind::Cosine, 7, 3);
    set.dc = 1.0;
    let grid = reconstruct_source(&set);
    assert_eq!(grid.dim(), (7, 3));
}
