/// Record the outcome of one completion request. Outcomes are a small fixed
/// set ("ok" / "error") to keep label cardinality bounded.
pub fn record_completion(outcome: &'static str) {
    metrics::counter!("chat_backend_requests_total", "outcome" => outcome).increment(1);
}
