//! 항 집합을 사람이 읽을 수식 문자열로 변환

use crate::core::types::TermSet;
use std::fmt::Write;

/// 한 줄 닫힌 형식 수식
///
/// `f(x,y) ≈ dc + Σ a·basis(2π(fx·x + fy·y) + φ)` 꼴. 숫자는 소수점
/// 3자리 고정이고 값을 계산하거나 바꾸지 않는 순수 포매팅이다.
/// 항 순서는 집합의 선택 순위 그대로.
pub fn format_equation(set: &TermSet) -> String {
    let mut out = String::new();
    write!(out, "f(x,y) ≈ {:.3}", set.dc).unwrap();
    for term in &set.terms {
        write!(
            out,
            " + {:.3}·{}(2π({:.3}x + {:.3}y) + {:.3})",
            term.amplitude,
            set.basis.symbol(),
            term.freq_x,
            term.freq_y,
            term.phase
        )
        .unwrap();
    }
    out
}

/// 항별 한 줄 목록
pub fn format_term_lines(set: &TermSet) -> Vec<String> {
    set.terms
        .iter()
        .enumerate()
        .map(|(i, term)| {
            format!(
                "Term {}: {:.3} * {}(2π({:.3}x + {:.3}y) + {:.3})",
                i + 1,
                term.amplitude,
                set.basis.symbol(),
                term.freq_x,
                term.freq_y,
                term.phase
            )
        })
        .collect()
}
