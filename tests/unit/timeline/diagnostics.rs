use super::*;

#[test]
fn log_clones_share_a_buffer() {
    let log = DiagnosticLog::new();
    let mut handle = log.clone();
    handle.emit(&Diagnostic::unparseable_position("abc"));
    assert_eq!(log.len(), 1);
    assert_eq!(log.entries()[0].kind, DiagnosticKind::UnparseablePosition);
    assert_eq!(log.entries()[0].input, "abc");

    log.clear();
    assert!(log.is_empty());
}

#[test]
fn message_names_the_input_and_fallback() {
    let d = Diagnostic::unparseable_position("*=2");
    let text = d.to_string();
    assert!(text.contains("'*=2'"));
    assert!(text.contains("after the previous entry"));
}

#[test]
fn fn_sink_forwards() {
    let mut count = 0;
    {
        let mut sink = FnSink(|_: &Diagnostic| count += 1);
        sink.emit(&Diagnostic::unparseable_position("x"));
        sink.emit(&Diagnostic::unparseable_position("y"));
    }
    assert_eq!(count, 2);
}

#[test]
fn tracing_and_null_sinks_accept_diagnostics() {
    TracingSink.emit(&Diagnostic::unparseable_position("x"));
    NullSink.emit(&Diagnostic::unparseable_position("x"));
}
