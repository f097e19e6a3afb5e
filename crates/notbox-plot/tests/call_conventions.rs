//! Both calling conventions end up at the same plot

use notbox_plot::{
    CallArgs, Error, GroupKeys, IntervalKind, NotBoxPlot, OptionValue, RecordingCanvas, Style,
    DEFAULT_JITTER,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_legacy_and_keyword_calls_agree() -> anyhow::Result<()> {
    init_tracing();
    let legacy = NotBoxPlot::from_call(&CallArgs::new().legacy_jitter(0.2).legacy_style("line"))?;
    let keyword = NotBoxPlot::from_call(
        &CallArgs::new()
            .option("Jitter", 0.2)
            .option("STYLE", "Line"),
    )?;
    assert_eq!(legacy.config(), keyword.config());

    let samples = vec![3.0, 4.0, 5.0, 4.5];
    let mut first = RecordingCanvas::new();
    let mut second = RecordingCanvas::new();
    legacy.plot_with_rng(&mut first, samples.clone(), GroupKeys::none(), &mut ChaCha8Rng::seed_from_u64(9))?;
    keyword.plot_with_rng(&mut second, samples, GroupKeys::none(), &mut ChaCha8Rng::seed_from_u64(9))?;
    assert_eq!(first.primitives(), second.primitives());
    Ok(())
}

#[test]
fn test_empty_call_uses_defaults() -> anyhow::Result<()> {
    let plot = NotBoxPlot::from_call(&CallArgs::new())?;
    let config = plot.config();
    assert_eq!(config.jitter, DEFAULT_JITTER);
    assert_eq!(config.style, Style::Patch);
    assert_eq!(config.interval, IntervalKind::Sem);
    assert!(!config.mark_median);
    Ok(())
}

#[test]
fn test_rejected_calls() {
    init_tracing();
    let cases = [
        CallArgs::new().option("style", "violin"),
        CallArgs::new().option("interval", "bootstrap"),
        CallArgs::new().option("whiskers", true),
        CallArgs::new().option("jitter", "wide"),
        CallArgs::new().option("jitter", -1.0),
        CallArgs::new().legacy_style("patch").option("markMedian", true),
    ];
    for args in &cases {
        let err = NotBoxPlot::from_call(args).unwrap_err();
        assert!(err.is_configuration(), "{err}");
    }
}

#[test]
fn test_mark_median_flag_accepts_numeric() -> anyhow::Result<()> {
    let plot = NotBoxPlot::from_call(&CallArgs::new().option("markMedian", OptionValue::Real(1.0)))?;
    assert!(plot.config().mark_median);

    let err = NotBoxPlot::from_call(&CallArgs::new().option("markMedian", OptionValue::Real(0.5)))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
    Ok(())
}
