//! 분해 → 선택 → 인코딩 → 재구성을 채널 단위로 묶는 파이프라인
//!
//! 그레이스케일은 1채널, 컬러는 3채널을 같은 정책으로 독립 처리한다.
//! 컬러/그레이스케일 분기 대신 채널 루프 하나로 통일되어 있다.

use crate::core::reconstruct::{normalize_display, normalize_joint, reconstruct};
use crate::core::spectral::{encode_terms, select_bins, SpectralDecomposer};
use crate::core::types::{ApproxConfig, ApproxStats, TermSet};
use ndarray::Array2;
use rayon::prelude::*;
use std::time::Instant;

/// 채널 하나의 근사 결과 (정규화 전 재구성 포함)
#[derive(Debug, Clone)]
pub struct ChannelApproximation {
    pub reconstruction: Array2<f32>,
    pub term_set: TermSet,
    pub stats: ApproxStats,
}

/// 이미지 전체 근사 결과
#[derive(Debug, Clone)]
pub struct ApproximationResult {
    /// 표시용으로 정규화된 채널들 (1 = 그레이스케일, 3 = 컬러)
    pub channels: Vec<Array2<f32>>,
    /// 채널별 항 집합 (선택 순위 순서 보존)
    pub term_sets: Vec<TermSet>,
    pub stats: Vec<ApproxStats>,
}

/// 단일 채널 파이프라인
pub fn approximate_channel(
    channel: &Array2<f32>,
    config: &ApproxConfig,
) -> ChannelApproximation {
    let start = Instant::now();
    let (rows, cols) = channel.dim();

    let mut decomposer = SpectralDecomposer::new();
    let spectrum = decomposer.decompose(channel);
    let selected = select_bins(&spectrum, config.policy);
    let term_set = encode_terms(&spectrum, &selected);
    let reconstruction = reconstruct(&term_set, rows, cols);

    let stats = ApproxStats::from_reconstruction(
        channel,
        &reconstruction,
        term_set.len(),
        start.elapsed().as_secs_f64() * 1000.0,
    );

    ChannelApproximation {
        reconstruction,
        term_set,
        stats,
    }
}

/// 채널 목록 전체 근사
///
/// 채널 사이에는 데이터 의존성이 없어 병렬 처리한다. 컬러 모드는
/// 세 채널의 결합 극값으로 단일 정규화를 적용한다.
pub fn approximate_image(
    channels: &[Array2<f32>],
    config: &ApproxConfig,
) -> ApproximationResult {
    if channels.len() != 1 && channels.len() != 3 {
        panic!("지원하는 채널 수는 1 또는 3: {}", channels.len());
    }

    let per_channel: Vec<ChannelApproximation> = channels
        .par_iter()
        .map(|ch| approximate_channel(ch, config))
        .collect();

    let mut raw = Vec::with_capacity(per_channel.len());
    let mut term_sets = Vec::with_capacity(per_channel.len());
    let mut stats = Vec::with_capacity(per_channel.len());
    for ch in per_channel {
        raw.push(ch.reconstruction);
        term_sets.push(ch.term_set);
        stats.push(ch.stats);
    }

    let normalized = if raw.len() == 1 {
        vec![normalize_display(&raw[0])]
    } else {
        normalize_joint(&raw)
    };

    ApproximationResult {
        channels: normalized,
        term_sets,
        stats,
    }
}
