//! stackscope 命令行入口
//! 仅负责参数解析、日志初始化与输出格式化，检测逻辑全部位于库中

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use stackscope::{
    ConfigManager, DetectionStore, ExportReport, GlobalConfig, HeaderConverter, LastDetection, Message,
    Orchestrator, PageCollector, PageInput, PageSnapshot, StaticProbe, TabInfo, TechDetector,
    parse_url, render_text,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 输出格式
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// 导出JSON报告（文件或目录）
    #[arg(long, global = true)]
    export: Option<PathBuf>,

    /// 上报阈值（0-100）
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// 本地JSON特征文件，替代内置特征表
    #[arg(long, global = true)]
    signatures: Option<PathBuf>,

    /// 最近一次检测结果的存储路径
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// 详细日志
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 分析页面快照JSON文件
    Analyze {
        #[arg(long)]
        snapshot: PathBuf,
    },
    /// 由HTML与响应头采集页面快照
    Collect(PageArgs),
    /// 采集并分析
    Scan(PageArgs),
    /// 显示最近一次检测
    Last,
    /// 列出特征库
    Signatures {
        /// 按分类过滤（不区分大小写）
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Args)]
struct PageArgs {
    /// HTML文件
    #[arg(long)]
    html: PathBuf,
    /// 页面URL
    #[arg(long, default_value = "")]
    url: String,
    /// 响应头，格式 `name: value`
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,
    /// 全局变量，格式 `name=value`
    #[arg(long = "global")]
    globals: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "stackscope=debug" } else { "stackscope=warn" };
    let filter = EnvFilter::try_from_env("STACKSCOPE_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(fmt::time::ChronoLocal::rfc_3339())
                .with_target(verbose),
        )
        .with(filter)
        .init();
}

fn build_config(cli: &Cli) -> GlobalConfig {
    let mut builder = ConfigManager::custom().verbose(cli.verbose);
    if let Some(threshold) = cli.threshold {
        builder = builder.report_threshold(threshold);
    }
    if let Some(path) = &cli.signatures {
        builder = builder.signature_file(path);
    }
    if let Some(path) = &cli.store {
        builder = builder.store_path(path);
    }
    builder.build()
}

async fn collect_snapshot(args: &PageArgs, config: &GlobalConfig) -> Result<PageSnapshot> {
    let html = tokio::fs::read_to_string(&args.html)
        .await
        .with_context(|| format!("读取HTML失败：{}", args.html.display()))?;
    let headers = args
        .headers
        .iter()
        .map(|line| HeaderConverter::parse_line(line).ok_or_else(|| anyhow!("无效的响应头：{}", line)))
        .collect::<Result<Vec<_>>>()?;
    if !args.url.is_empty() {
        parse_url(&args.url).with_context(|| format!("无效的页面URL：{}", args.url))?;
    }
    let probe = StaticProbe::from_assignments(&args.globals)?;

    let collector = PageCollector::new(config).with_probe_names(probe.names());
    let input = PageInput {
        html,
        url: args.url.clone(),
        headers,
    };
    Ok(collector.collect(&input, &probe))
}

async fn detect(orchestrator: &Orchestrator, snapshot: PageSnapshot) -> LastDetection {
    let tab = TabInfo {
        id: None,
        url: snapshot.url.clone(),
    };
    let response = orchestrator.handle(Message::PageData { data: snapshot, tab }).await;
    LastDetection {
        technologies: response.technologies,
        url: response.url,
        timestamp: response.timestamp,
    }
}

async fn emit(cli: &Cli, detection: &LastDetection) -> Result<()> {
    let report = match detection.timestamp {
        Some(ts) => ExportReport::at(&detection.url, ts, detection.technologies.clone()),
        None => ExportReport::new(&detection.url, detection.technologies.clone()),
    };
    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&detection.url, &detection.technologies)),
        OutputFormat::Json => println!("{}", report.to_json_pretty()?),
    }
    if let Some(target) = &cli.export {
        let path = report.save(target).await?;
        eprintln!("报告已导出：{}", path.display());
    }
    Ok(())
}

fn print_signatures(detector: &TechDetector, category: Option<&str>, format: OutputFormat) -> Result<()> {
    let signatures: Vec<_> = detector
        .database()
        .iter()
        .map(|(_, compiled)| &compiled.signature)
        .filter(|sig| category.is_none_or(|c| sig.category.eq_ignore_ascii_case(c)))
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&signatures)?),
        OutputFormat::Text => {
            for sig in &signatures {
                let nominal = sig.confidence.map(|c| format!("{}%", c)).unwrap_or_else(|| "-".to_string());
                println!("{:<28} {:<24} {:>5}  {} patterns", sig.name, sig.category, nominal, sig.patterns.len());
            }
            let stats = detector.database().stats();
            println!(
                "{} technologies, {} patterns ({} invalid)",
                stats.tech_count,
                stats.pattern_count(),
                stats.invalid_count
            );
        }
    }
    Ok(())
}

fn require_store(path: Option<&Path>) -> Result<DetectionStore> {
    path.map(DetectionStore::new)
        .ok_or_else(|| anyhow!("未指定存储路径，请使用 --store"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = build_config(&cli);

    match &cli.command {
        Commands::Analyze { snapshot } => {
            let json = tokio::fs::read_to_string(snapshot)
                .await
                .with_context(|| format!("读取快照失败：{}", snapshot.display()))?;
            let snapshot = PageSnapshot::from_json_str(&json)?;
            let orchestrator = Orchestrator::from_config(config)?;
            let detection = detect(&orchestrator, snapshot).await;
            emit(&cli, &detection).await?;
        }
        Commands::Collect(args) => {
            let snapshot = collect_snapshot(args, &config).await?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Commands::Scan(args) => {
            let snapshot = collect_snapshot(args, &config).await?;
            let orchestrator = Orchestrator::from_config(config)?;
            let detection = detect(&orchestrator, snapshot).await;
            emit(&cli, &detection).await?;
        }
        Commands::Last => {
            let store = require_store(cli.store.as_deref())?;
            match store.load().await? {
                Some(detection) => emit(&cli, &detection).await?,
                None => bail!("没有已保存的检测记录：{}", store.path().display()),
            }
        }
        Commands::Signatures { category } => {
            let detector = TechDetector::new(config)?;
            print_signatures(&detector, category.as_deref(), cli.format)?;
        }
    }
    Ok(())
}
