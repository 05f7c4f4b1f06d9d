use tracing::level_filters::{LevelFilter, STATIC_MAX_LEVEL};
use treecalc::run;

#[test]
fn stage_events_are_not_capped_at_compile_time() {
    assert_eq!(STATIC_MAX_LEVEL, LevelFilter::TRACE);
}

#[test]
fn pipeline_runs_with_a_subscriber_installed() {
    let _ = tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::new("trace"))
                                     .with_test_writer()
                                     .try_init();

    assert_eq!(run("40*4+8").unwrap().value, 480);
}
