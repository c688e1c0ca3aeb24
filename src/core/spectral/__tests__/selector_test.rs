use crate::core::spectral::*;
use crate::core::types::SelectionPolicy;
use ndarray::Array2;
use rustfft::num_complex::Complex;

fn 테스트_스펙트럼() -> Array2<Complex<f32>> {
    // 크기: 4.0, 3.0, 2.0, 1.0
    let values = [4.0_f32, 3.0, 2.0, 1.0];
    Array2::from_shape_fn((2, 2), |(r, c)| Complex::new(values[r * 2 + c], 0.0))
}

#[test]
fn top_k_개수_테스트() {
    let spectrum = 테스트_스펙트럼();

    let bins = select_top_k(&spectrum, 2);
    assert_eq!(bins.len(), 2);
    assert_eq!((bins[0].row, bins[0].col), (0, 0), "최대 크기 bin이 먼저");
    assert_eq!((bins[1].row, bins[1].col), (0, 1));
}

#[test]
fn top_k_클램핑_테스트() {
    let spectrum = 테스트_스펙트럼();

    // 전체 bin 수를 넘는 k는 전체 선택으로 클램핑
    let bins = select_top_k(&spectrum, 100);
    assert_eq!(bins.len(), 4);
}

#[test]
fn 동률_결정성_테스트() {
    let spectrum = Array2::from_elem((3, 3), Complex::new(1.0_f32, 0.0));

    let a = select_top_k(&spectrum, 4);
    let b = select_top_k(&spectrum, 4);
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!((x.row, x.col), (y.row, y.col), "동률 순서는 결정적이어야 함");
    }
    // (row, col) 오름차순 동률 깨기
    assert_eq!((a[0].row, a[0].col), (0, 0));
    assert_eq!((a[3].row, a[3].col), (1, 0));
}

#[test]
fn 백분위수_보간_테스트() {
    let values = [0.0_f32, 1.0, 2.0, 3.0, 4.0];
    assert_eq!(percentile(&values, 50.0), 2.0);
    assert!((percentile(&values, 25.0) - 1.0).abs() < 1e-6);
    assert!((percentile(&values, 90.0) - 3.6).abs() < 1e-6);
}

#[test]
fn 백분위수_선택_테스트() {
    let spectrum = 테스트_스펙트럼();

    // 75 백분위수 임계값 = 3.25, 엄격 초과는 4.0 하나
    let bins = select_percentile(&spectrum, 75.0);
    assert_eq!(bins.len(), 1);
    assert_eq!((bins[0].row, bins[0].col), (0, 0));
}

#[test]
fn 정책_분기_테스트() {
    let spectrum = 테스트_스펙트럼();

    let top = select_bins(&spectrum, SelectionPolicy::TopK(3));
    assert_eq!(top.len(), 3);

    let pct = select_bins(&spectrum, SelectionPolicy::Percentile(75.0));
    assert_eq!(pct.len(), 1);
}

#[test]
#[should_panic]
fn 백분위수_범위_테스트() {
    let spectrum = 테스트_스펙트럼();
    select_percentile(&spectrum, 100.0);
}
