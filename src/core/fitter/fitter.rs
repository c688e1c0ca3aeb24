//! 목표 채널에 대한 반복적 무도함수 피팅

use super::model::{mse_loss, params_to_term_set, PARAMS_PER_TERM};
use super::nelder_mead::{nelder_mead, OptimizeResult};
use crate::core::types::{FitConfig, TermSet};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 피팅 결과
#[derive(Debug, Clone)]
pub struct FitResult {
    /// 사인 기저 항 집합으로 정규화된 파라미터
    pub term_set: TermSet,
    /// 원시 파라미터 벡터 (4K개)
    pub params: Vec<f32>,
    /// 달성한 최종 MSE 손실
    pub loss: f64,
    pub iterations: u32,
}

/// 고정 K개 항 파라메트릭 피팅기
///
/// 난수 초기값에서 시작하는 국소 탐색이므로 실행마다 다른 결과가
/// 나올 수 있다. 버그가 아니라 수용된 특성이고, 시드를 고정하면
/// 재현 가능하다.
pub struct ParametricFitter {
    pub config: FitConfig,
}

impl ParametricFitter {
    pub fn new(config: FitConfig) -> Self {
        Self { config }
    }

    /// 목표 채널에 모델 피팅
    ///
    /// 반복 상한 내 비수렴은 오류가 아니다. 그때까지의 최적 파라미터와
    /// 달성 손실을 반환하므로 호출자가 손실로 수용 여부를 판단한다.
    pub fn fit(&self, target: &Array2<f32>) -> FitResult {
        self.fit_with_progress(target, None)
    }

    /// 진행 콜백과 함께 피팅
    ///
    /// 콜백은 반복마다 (반복 번호, 현재 최저 손실)로 호출된다.
    pub fn fit_with_progress(
        &self,
        target: &Array2<f32>,
        on_iteration: Option<&mut dyn FnMut(u32, f64)>,
    ) -> FitResult {
        if self.config.term_count == 0 {
            panic!("항 개수 K는 1 이상이어야 함");
        }
        let n_params = self.config.term_count * PARAMS_PER_TERM;

        // 4K개 파라미터를 [0,1) 균등 난수로 독립 초기화
        let initial: Vec<f32> = match self.config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                (0..n_params).map(|_| rng.gen::<f32>()).collect()
            }
            None => {
                let mut rng = rand::thread_rng();
                (0..n_params).map(|_| rng.gen::<f32>()).collect()
            }
        };
        let steps = vec![self.config.step_size; n_params];

        let (rows, cols) = target.dim();
        let OptimizeResult {
            params,
            cost,
            iterations,
        } = nelder_mead(
            &initial,
            &steps,
            self.config.max_iterations,
            |p| mse_loss(p, target),
            on_iteration,
        );

        FitResult {
            term_set: params_to_term_set(&params, rows, cols),
            params,
            loss: cost,
            iterations,
        }
    }
}
