use dioxus::document;

/// Copies `text` through the webview's clipboard API, falling back to a
/// hidden textarea where the async API is unavailable. Resolves to whether
/// the webview reported a successful write.
pub async fn copy_text_to_clipboard(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let payload = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    let script = format!(
        r#"(async () => {{
            const data = {payload};
            if (navigator.clipboard && navigator.clipboard.writeText) {{
                try {{
                    await navigator.clipboard.writeText(data);
                    return true;
                }} catch (_err) {{}}
            }}
            const area = document.createElement('textarea');
            area.value = data;
            area.style.position = 'fixed';
            area.style.opacity = '0';
            document.body.appendChild(area);
            area.select();
            const ok = document.execCommand('copy');
            document.body.removeChild(area);
            return ok;
        }})()"#
    );
    match document::eval(&script).await {
        Ok(value) => reported_success(&value),
        Err(err) => {
            tracing::warn!(error = ?err, "clipboard write failed");
            false
        }
    }
}

/// Only an explicit `true` from the script counts as a completed copy.
fn reported_success(value: &serde_json::Value) -> bool {
    value.as_bool().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_true_counts_as_copied() {
        assert!(reported_success(&json!(true)));
        assert!(!reported_success(&json!(false)));
        assert!(!reported_success(&json!(null)));
        assert!(!reported_success(&json!("true")));
    }
}
