use crate::core::types::*;
use ndarray::array;

#[test]
fn mse_기본_테스트() {
    let a = array![[0.0_f32, 1.0], [1.0, 0.0]];
    let b = array![[0.0_f32, 0.0], [0.0, 0.0]];

    let mse = compute_mse(&a, &a);
    assert_eq!(mse, 0.0, "동일 그리드의 MSE는 0");

    let mse = compute_mse(&a, &b);
    assert!((mse - 0.5).abs() < 1e-6, "MSE가 0.5여야 함: {}", mse);
}

#[test]
fn psnr_테스트() {
    assert!(compute_psnr(0.0).is_infinite(), "무손실이면 PSNR 무한대");
    let psnr = compute_psnr(0.01);
    assert!((psnr - 20.0).abs() < 1e-4, "MSE 0.01은 20dB: {}", psnr);
}

#[test]
#[should_panic]
fn mse_형상_불일치_테스트() {
    let a = array![[0.0_f32, 1.0]];
    let b = array![[0.0_f32], [1.0]];
    compute_mse(&a, &b);
}

#[test]
fn 통계_생성_테스트() {
    let original = array![[0.5_f32, 0.5], [0.5, 0.5]];
    let recon = array![[0.5_f32, 0.5], [0.5, 0.5]];

    let stats = ApproxStats::from_reconstruction(&original, &recon, 3, 1.5);
    assert_eq!(stats.kept_terms, 3);
    assert_eq!(stats.total_bins, 4);
    assert_eq!(stats.mse, 0.0);
    assert!(stats.psnr_db.is_infinite());
}
