//! Nelder-Mead 심플렉스 최소화기
//!
//! 도함수 없이 비용 함수 `f: &[f32] -> f64` 를 최소화한다.
//! 반복 상한 안에서의 종료만 보장하고 전역 최적 수렴은 보장하지 않는다.

/// 최소화 결과
pub struct OptimizeResult {
    /// 찾은 최적 파라미터 벡터
    pub params: Vec<f32>,
    /// 최적점에서의 비용
    pub cost: f64,
    /// 수행한 반복 횟수
    pub iterations: u32,
}

/// Nelder-Mead 최소화 실행
///
/// - `initial`: 시작 파라미터 벡터
/// - `step_sizes`: 초기 심플렉스의 파라미터별 스텝 크기
/// - `max_iter`: 최대 반복 횟수
/// - `cost_fn`: 최소화할 비용 함수
/// - `on_iteration`: 반복마다 (반복 번호, 현재 최저 비용)으로 호출되는
///   진행 콜백 (CLI 진행률 표시용)
pub fn nelder_mead<F>(
    initial: &[f32],
    step_sizes: &[f32],
    max_iter: u32,
    cost_fn: F,
    mut on_iteration: Option<&mut dyn FnMut(u32, f64)>,
) -> OptimizeResult
where
    F: Fn(&[f32]) -> f64,
{
    let n = initial.len();
    if n == 0 || step_sizes.len() != n {
        panic!(
            "파라미터 {}개에 스텝 {}개는 쓸 수 없음",
            n,
            step_sizes.len()
        );
    }
    let np1 = n + 1;

    // 반사/확장/수축/축소 계수
    let alpha = 1.0_f64;
    let gamma = 2.0_f64;
    let rho = 0.5_f64;
    let sigma = 0.5_f64;

    // 심플렉스 초기화: n+1 꼭짓점
    let mut vertices: Vec<Vec<f32>> = Vec::with_capacity(np1);
    vertices.push(initial.to_vec());
    for i in 0..n {
        let mut v = initial.to_vec();
        v[i] += step_sizes[i];
        vertices.push(v);
    }

    let mut costs: Vec<f64> = vertices.iter().map(|v| cost_fn(v)).collect();

    let mut centroid = vec![0.0f32; n];
    let mut reflected = vec![0.0f32; n];
    let mut expanded = vec![0.0f32; n];
    let mut contracted = vec![0.0f32; n];

    let mut iter = 0u32;
    while iter < max_iter {
        iter += 1;

        // 비용 오름차순으로 꼭짓점 순위 매기기
        let mut indices: Vec<usize> = (0..np1).collect();
        indices.sort_by(|&a, &b| costs[a].partial_cmp(&costs[b]).unwrap());

        let best_idx = indices[0];
        let worst_idx = indices[np1 - 1];
        let second_worst_idx = indices[np1 - 2];

        if let Some(callback) = on_iteration.as_deref_mut() {
            callback(iter, costs[best_idx]);
        }

        // 수렴 판정
        let cost_range = costs[worst_idx] - costs[best_idx];
        if cost_range < 1e-10 {
            break;
        }

        // 최악점을 제외한 무게중심
        for c in centroid.iter_mut() {
            *c = 0.0;
        }
        for &idx in &indices[..n] {
            for (j, c) in centroid.iter_mut().enumerate() {
                *c += vertices[idx][j];
            }
        }
        for c in centroid.iter_mut() {
            *c /= n as f32;
        }

        // 반사
        for j in 0..n {
            reflected[j] =
                centroid[j] + (alpha as f32) * (centroid[j] - vertices[worst_idx][j]);
        }
        let cost_r = cost_fn(&reflected);

        if cost_r < costs[second_worst_idx] && cost_r >= costs[best_idx] {
            vertices[worst_idx].copy_from_slice(&reflected);
            costs[worst_idx] = cost_r;
            continue;
        }

        if cost_r < costs[best_idx] {
            // 확장 시도
            for j in 0..n {
                expanded[j] = centroid[j] + (gamma as f32) * (reflected[j] - centroid[j]);
            }
            let cost_e = cost_fn(&expanded);
            if cost_e < cost_r {
                vertices[worst_idx].copy_from_slice(&expanded);
                costs[worst_idx] = cost_e;
            } else {
                vertices[worst_idx].copy_from_slice(&reflected);
                costs[worst_idx] = cost_r;
            }
            continue;
        }

        // 수축
        for j in 0..n {
            contracted[j] =
                centroid[j] + (rho as f32) * (vertices[worst_idx][j] - centroid[j]);
        }
        let cost_c = cost_fn(&contracted);

        if cost_c < costs[worst_idx] {
            vertices[worst_idx].copy_from_slice(&contracted);
            costs[worst_idx] = cost_c;
            continue;
        }

        // 축소: 모든 꼭짓점을 최적점 쪽으로 이동
        let best = vertices[best_idx].clone();
        for i in 0..np1 {
            if i == best_idx {
                continue;
            }
            for j in 0..n {
                vertices[i][j] = best[j] + (sigma as f32) * (vertices[i][j] - best[j]);
            }
            costs[i] = cost_fn(&vertices[i]);
        }
    }

    // 최적 꼭짓점 반환
    let mut best_idx = 0;
    for i in 1..np1 {
        if costs[i] < costs[best_idx] {
            best_idx = i;
        }
    }

    OptimizeResult {
        params: vertices[best_idx].clone(),
        cost: costs[best_idx],
        iterations: iter,
    }
}
