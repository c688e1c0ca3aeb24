//! 단일 채널의 2차원 주파수 분해

use ndarray::Array2;
use rustfft::{num_complex::Complex, FftPlanner};

/// 2D 스펙트럼 분해기
///
/// 순방향 FFT를 행 방향, 열 방향 순서로 적용한 뒤 중심 이동까지
/// 수행한다. 손실 없는 완전 가역 변환이다.
pub struct SpectralDecomposer {
    // planner는 재사용 가능하므로 분해기가 소유하는 것이 효율적
    planner: FftPlanner<f32>,
}

impl SpectralDecomposer {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// 중심 정렬 스펙트럼 계산
    ///
    /// 출력의 (h/2, w/2)가 영 주파수 bin이고, 중심 기준 오프셋이
    /// 부호 있는 정수 주파수다: freq_y = row − h/2, freq_x = col − w/2.
    pub fn decompose(&mut self, channel: &Array2<f32>) -> Array2<Complex<f32>> {
        let (rows, cols) = channel.dim();
        if rows == 0 || cols == 0 {
            panic!("빈 채널은 분해할 수 없음: {}x{}", rows, cols);
        }

        let mut data: Vec<Complex<f32>> = channel
            .iter()
            .map(|&v| Complex::new(v, 0.0))
            .collect();

        // 행 방향 FFT
        let fft_row = self.planner.plan_fft_forward(cols);
        for row in data.chunks_exact_mut(cols) {
            fft_row.process(row);
        }

        // 열 방향 FFT
        let fft_col = self.planner.plan_fft_forward(rows);
        let mut col_buf = vec![Complex::new(0.0, 0.0); rows];
        for c in 0..cols {
            for r in 0..rows {
                col_buf[r] = data[r * cols + c];
            }
            fft_col.process(&mut col_buf);
            for r in 0..rows {
                data[r * cols + c] = col_buf[r];
            }
        }

        // 중심 이동: centered[i] = raw[(i + ceil(n/2)) mod n]
        let (shift_r, shift_c) = (rows - rows / 2, cols - cols / 2);
        Array2::from_shape_fn((rows, cols), |(r, c)| {
            let src_r = (r + shift_r) % rows;
            let src_c = (c + shift_c) % cols;
            data[src_r * cols + src_c]
        })
    }
}

impl Default for SpectralDecomposer {
    fn default() -> Self {
        Self::new()
    }
}

/// 중심 정렬 인덱스가 나타내는 부호 있는 정수 주파수
#[inline]
pub fn centered_frequency(len: usize, idx: usize) -> i32 {
    idx as i32 - (len / 2) as i32
}
