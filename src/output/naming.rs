/// `<prefix>-<unix-nanos>-<node>.json`
pub(crate) fn result_file_name(prefix: &str, unix_nanos: u64, node_id: &str) -> String {
    format!("{}-{}-{}.json", prefix, unix_nanos, sanitize(node_id))
}

/// `<prefix>-<unix-seconds>-<node>.log`
pub(crate) fn log_file_name(prefix: &str, unix_secs: i64, node_id: &str) -> String {
    format!("{}-{}-{}.log", prefix, unix_secs, sanitize(node_id))
}

// Node ids come from deployment config and end up inside a file name.
fn sanitize(node_id: &str) -> String {
    node_id
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | '\0' => '_',
            other => other,
        })
        .collect()
}
