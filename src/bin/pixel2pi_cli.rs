use clap::{Arg, ArgAction, Command};
use indicatif::{ProgressBar, ProgressStyle};
use pixel2pi::core::{
    approximate_image, format_equation, format_term_lines, normalize_display,
    reconstruct_source, ApproxConfig, FitConfig, ParametricFitter, SelectionPolicy,
};
use pixel2pi::io::{load_image, save_image, save_term_sets};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = Command::new("pixel2pi")
        .version("0.1.0")
        .about("이미지를 사인파 기저 합과 닫힌 형식 수식으로 근사하는 도구")
        .subcommand(
            Command::new("approximate")
                .about("스펙트럼 경로: FFT 분해 후 상위 항만으로 재구성")
                .arg(Arg::new("input").required(true).help("입력 이미지 경로"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("재구성 이미지 출력 경로")
                        .default_value("approximation.png"),
                )
                .arg(
                    Arg::new("terms")
                        .long("terms")
                        .short('t')
                        .value_name("N")
                        .help("유지할 상위 항 개수 (지정 시 백분위수 대신 사용)"),
                )
                .arg(
                    Arg::new("percentile")
                        .long("percentile")
                        .short('p')
                        .value_name("P")
                        .help("크기 백분위수 임계값 (0 < P < 100)")
                        .default_value("99"),
                )
                .arg(
                    Arg::new("size")
                        .long("size")
                        .value_name("PIXELS")
                        .help("작업 해상도 (정사각형 리사이즈)")
                        .default_value("128"),
                )
                .arg(
                    Arg::new("color")
                        .long("color")
                        .action(ArgAction::SetTrue)
                        .help("RGB 3채널 모드 (기본은 그레이스케일)"),
                )
                .arg(
                    Arg::new("equation")
                        .long("equation")
                        .action(ArgAction::SetTrue)
                        .help("닫힌 형식 수식 출력"),
                )
                .arg(
                    Arg::new("save-terms")
                        .long("save-terms")
                        .value_name("FILE")
                        .help("항 집합을 JSON으로 저장할 경로"),
                ),
        )
        .subcommand(
            Command::new("fit")
                .about("파라메트릭 경로: K개 자유 사인파 항을 직접 피팅")
                .arg(Arg::new("input").required(true).help("입력 이미지 경로"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("재구성 이미지 출력 경로")
                        .default_value("fit.png"),
                )
                .arg(
                    Arg::new("terms")
                        .long("terms")
                        .short('t')
                        .value_name("K")
                        .help("자유 항 개수")
                        .default_value("300"),
                )
                .arg(
                    Arg::new("max-iter")
                        .long("max-iter")
                        .value_name("M")
                        .help("최대 반복 횟수")
                        .default_value("5000"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("SEED")
                        .help("난수 시드 (재현 가능한 피팅)"),
                )
                .arg(
                    Arg::new("size")
                        .long("size")
                        .value_name("PIXELS")
                        .help("작업 해상도 (정사각형 리사이즈)")
                        .default_value("64"),
                )
                .arg(
                    Arg::new("equation")
                        .long("equation")
                        .action(ArgAction::SetTrue)
                        .help("항별 수식 출력"),
                ),
        )
        .subcommand_required(true)
        .get_matches();

    match matches.subcommand() {
        Some(("approximate", sub)) => run_approximate(sub),
        Some(("fit", sub)) => run_fit(sub),
        _ => unreachable!(),
    }
}

fn run_approximate(matches: &clap::ArgMatches) -> anyhow::Result<()> {
    let input = PathBuf::from(matches.get_one::<String>("input").unwrap());
    let output = PathBuf::from(matches.get_one::<String>("output").unwrap());
    let size: u32 = matches.get_one::<String>("size").unwrap().parse()?;
    let color = matches.get_flag("color");

    // --terms가 있으면 top-N, 없으면 백분위수 정책
    let policy = match matches.get_one::<String>("terms") {
        Some(n) => SelectionPolicy::TopK(n.parse()?),
        None => {
            let p: f32 = matches.get_one::<String>("percentile").unwrap().parse()?;
            SelectionPolicy::Percentile(p)
        }
    };

    let channels = load_image(&input, Some(size), color)?;
    log::info!(
        "{}채널 {}x{} 근사 시작, 정책 {:?}",
        channels.len(),
        size,
        size,
        policy
    );

    let config = ApproxConfig { policy };
    let result = approximate_image(&channels, &config);

    for (i, stats) in result.stats.iter().enumerate() {
        println!(
            "채널 {}: {} / {} bin 유지, RMSE {:.6}, PSNR {:.2} dB ({:.1} ms)",
            i, stats.kept_terms, stats.total_bins, stats.rmse, stats.psnr_db, stats.elapsed_ms
        );
    }

    save_image(&output, &result.channels)?;
    println!("재구성 저장: {}", output.display());

    if let Some(path) = matches.get_one::<String>("save-terms") {
        save_term_sets(&PathBuf::from(path), &result.term_sets)?;
        println!("항 집합 저장: {}", path);
    }

    if matches.get_flag("equation") {
        for (i, set) in result.term_sets.iter().enumerate() {
            if result.term_sets.len() > 1 {
                println!("\n채널 {}:", i);
            }
            println!("{}", format_equation(set));
        }
    }

    Ok(())
}

fn run_fit(matches: &clap::ArgMatches) -> anyhow::Result<()> {
    let input = PathBuf::from(matches.get_one::<String>("input").unwrap());
    let output = PathBuf::from(matches.get_one::<String>("output").unwrap());
    let size: u32 = matches.get_one::<String>("size").unwrap().parse()?;
    let term_count: usize = matches.get_one::<String>("terms").unwrap().parse()?;
    let max_iterations: u32 = matches.get_one::<String>("max-iter").unwrap().parse()?;
    let seed = matches
        .get_one::<String>("seed")
        .map(|s| s.parse::<u64>())
        .transpose()?;

    // 파라메트릭 경로는 휘도 1채널만 다룬다
    let channels = load_image(&input, Some(size), false)?;
    let target = &channels[0];
    log::info!(
        "{}x{} 피팅 시작, K = {}, 최대 {}회",
        size,
        size,
        term_count,
        max_iterations
    );

    let config = FitConfig {
        term_count,
        max_iterations,
        seed,
        ..FitConfig::default()
    };
    let fitter = ParametricFitter::new(config);

    let pb = ProgressBar::new(max_iterations as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("피팅: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("진행률 스타일 설정 실패")
            .progress_chars("=>-"),
    );
    let mut on_iteration = |iter: u32, loss: f64| {
        pb.set_position(iter as u64);
        pb.set_message(format!("loss {:.6}", loss));
    };

    let result = fitter.fit_with_progress(target, Some(&mut on_iteration));
    pb.finish_and_clear();

    println!(
        "최종 손실 {:.6}, {}회 반복 (K = {})",
        result.loss, result.iterations, term_count
    );

    let reconstruction = normalize_display(&reconstruct_source(&result.term_set));
    save_image(&output, &[reconstruction])?;
    println!("재구성 저장: {}", output.display());

    if matches.get_flag("equation") {
        println!("\nApproximation Equation:");
        for line in format_term_lines(&result.term_set) {
            println!("{}", line);
        }
    }

    Ok(())
}
