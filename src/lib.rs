//! pixel2pi 라이브러리
//!
//! 래스터 이미지를 2차원 사인파 기저 항의 유한 합으로 근사해
//! 재구성 이미지와 닫힌 형식 수식을 함께 만들어내는 라이브러리

pub mod core;
pub mod io;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 자료구조
    ApproxConfig, ApproxStats, BasisKind, FitConfig, SelectionPolicy, Term, TermSet,
    // 스펙트럼 경로
    encode_terms, select_bins, SpectralDecomposer,
    // 재구성과 정규화
    normalize_display, normalize_joint, reconstruct, reconstruct_source,
    // 채널 오케스트레이션
    approximate_channel, approximate_image, ApproximationResult, ChannelApproximation,
    // 파라메트릭 경로
    evaluate_model, FitResult, ParametricFitter,
    // 수식 렌더링
    format_equation, format_term_lines,
};

// 편의 타입 별칭들
pub type Channel = ndarray::Array2<f32>;
pub type Spectrum = ndarray::Array2<rustfft::num_complex::Complex<f32>>;
