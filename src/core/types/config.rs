//! 근사 엔진 설정

use serde::{Deserialize, Serialize};

/// 주파수 bin 선택 정책
///
/// 한 번의 실행에서 정확히 하나만 활성화된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// 크기 상위 N개 bin 유지 (N은 전체 bin 수로 클램핑)
    TopK(usize),
    /// 크기 백분위수 임계값을 초과하는 bin만 유지 (0 < p < 100)
    Percentile(f32),
}

/// 스펙트럼 근사 설정
#[derive(Debug, Clone, Copy)]
pub struct ApproxConfig {
    pub policy: SelectionPolicy,
}

impl ApproxConfig {
    /// 상위 N개 항 유지
    pub fn top_k(n: usize) -> Self {
        Self {
            policy: SelectionPolicy::TopK(n),
        }
    }

    /// 백분위수 임계값 선택
    pub fn percentile(p: f32) -> Self {
        Self {
            policy: SelectionPolicy::Percentile(p),
        }
    }
}

impl Default for ApproxConfig {
    fn default() -> Self {
        // 상위 1% bin 유지
        Self::percentile(99.0)
    }
}

/// 파라메트릭 피팅 설정
#[derive(Debug, Clone, Copy)]
pub struct FitConfig {
    /// 자유 항 개수 K (파라미터 수는 4K)
    pub term_count: usize,
    /// Nelder-Mead 최대 반복 횟수
    pub max_iterations: u32,
    /// 초기 심플렉스 스텝 크기
    pub step_size: f32,
    /// 난수 시드 (None이면 스레드 난수)
    pub seed: Option<u64>,
}

impl FitConfig {
    pub fn new(term_count: usize, max_iterations: u32) -> Self {
        Self {
            term_count,
            max_iterations,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            term_count: 300,
            max_iterations: 5000,
            step_size: 0.25,
            seed: None,
        }
    }
}
