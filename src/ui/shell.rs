//! Page shell shared by every HTML page.

use crate::thread::SCROLL_EVENT;
use crate::ui::components::SCROLL_VIEWPORT_ATTR;
use crate::ui::html::escape;

/// Id of the toast region used for transient notifications.
pub const TOAST_REGION_ID: &str = "toast-region";

/// Pinned HTMX build.
pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js";

/// Stylesheet served from the `static/` directory.
pub const STYLESHEET_HREF: &str = "/static/app.css";

/// Generate the HTML shell for a page.
///
/// The shell provides `window.showToast(message)` for transient error
/// notifications and scrolls every thread viewport to the end on load and
/// whenever a response carries the scroll-to-end trigger.
pub fn page_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - Reported Errors</title>
    <script src="{HTMX_SRC}" crossorigin="anonymous"></script>
    <link rel="stylesheet" href="{STYLESHEET_HREF}">
    <script>
        window.showToast = function (message) {{
            const region = document.getElementById("{TOAST_REGION_ID}");
            if (!region) return;
            const toast = document.createElement("div");
            toast.className = "rounded-md bg-destructive px-4 py-2 text-sm text-white shadow";
            toast.textContent = message;
            region.appendChild(toast);
            setTimeout(() => toast.remove(), 4000);
        }};
        window.scrollThreadsToEnd = function () {{
            document.querySelectorAll("[{SCROLL_VIEWPORT_ATTR}]").forEach((el) => {{
                el.scrollTop = el.scrollHeight;
            }});
        }};
        document.addEventListener("DOMContentLoaded", window.scrollThreadsToEnd);
        document.addEventListener("{SCROLL_EVENT}", () => requestAnimationFrame(window.scrollThreadsToEnd));
    </script>
</head>
<body class="min-h-screen bg-background text-foreground antialiased">
    <main id="app" class="container mx-auto max-w-3xl px-4 py-6">
        {content}
    </main>
    <div id="{TOAST_REGION_ID}" class="fixed bottom-4 right-4 z-50 flex flex-col gap-2" aria-live="polite"></div>
</body>
</html>"#,
        title = escape(title),
    )
}
