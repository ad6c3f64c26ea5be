//! Page script injected by the clipboard copier.
//!
//! The script is a function expression. The extension evaluates it in the
//! target tab and calls it with the request's `args`, so `url` is the first
//! argument. It resolves to `"clipboard"` when the async Clipboard API
//! accepted the text, or `"fallback"` when the manual selection path was
//! used, and rejects if neither worked.

// ============================================================================
// Constants
// ============================================================================

/// Result reported when `navigator.clipboard.writeText` succeeded.
pub(crate) const RESULT_CLIPBOARD: &str = "clipboard";

/// Result reported when the textarea + `execCommand("copy")` path was used.
pub(crate) const RESULT_FALLBACK: &str = "fallback";

/// How long the on-page toast stays visible.
const TOAST_MS: u32 = 1800;

/// Copy script, with `$TOAST_MS` still to be substituted.
const COPY_URL_TEMPLATE: &str = r##"async (url) => {
    const toast = (text) => {
        const el = document.createElement("div");
        el.textContent = text;
        el.setAttribute("role", "status");
        Object.assign(el.style, {
            position: "fixed",
            right: "16px",
            bottom: "16px",
            zIndex: "2147483647",
            padding: "8px 14px",
            borderRadius: "6px",
            background: "#1a1a2e",
            color: "#4ade80",
            font: "13px monospace",
            boxShadow: "0 2px 8px rgba(0,0,0,.35)",
        });
        (document.body || document.documentElement).appendChild(el);
        setTimeout(() => el.remove(), $TOAST_MS);
    };

    try {
        await navigator.clipboard.writeText(url);
        toast("URL copied");
        return "clipboard";
    } catch (_) {
        const area = document.createElement("textarea");
        area.value = url;
        area.setAttribute("readonly", "");
        area.style.position = "fixed";
        area.style.opacity = "0";
        (document.body || document.documentElement).appendChild(area);
        area.select();
        const ok = document.execCommand("copy");
        area.remove();
        if (!ok) {
            throw new Error("copy command was rejected");
        }
        toast("URL copied");
        return "fallback";
    }
}"##;

// ============================================================================
// Public Functions
// ============================================================================

/// Returns the copy script ready for `scripting.executeScript`.
#[must_use]
pub(crate) fn copy_url_script() -> String {
    COPY_URL_TEMPLATE.replace("$TOAST_MS", &TOAST_MS.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_is_fully_substituted() {
        let script = copy_url_script();
        assert!(!script.contains('$'));
        assert!(script.contains("1800"));
    }

    #[test]
    fn test_script_reports_both_paths() {
        let script = copy_url_script();
        assert!(script.starts_with("async (url) =>"));
        assert!(script.contains(&format!("return \"{RESULT_CLIPBOARD}\"")));
        assert!(script.contains(&format!("return \"{RESULT_FALLBACK}\"")));
        assert!(script.contains("execCommand(\"copy\")"));
    }
}
