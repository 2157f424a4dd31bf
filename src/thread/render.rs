//! HTML rendering of a message thread.

use super::view::{
    Bubble, LINKED_CHAT_LEAD, LINKED_CHAT_TAIL, LinkedChatBubble, MessageThread, OwnFooter,
    ThreadEntry,
};
use crate::mail::encode_component;
use crate::reports::ReportedErrorMessage;
use crate::ui::components::{
    ButtonProps, ButtonSize, ButtonVariant, alert_circle_icon, avatar, button, fish_icon,
    link_button, loader_icon, scroll_area,
};
use crate::ui::html::escape;

/// Id of the thread container; HTMX swaps target it.
pub const THREAD_ELEMENT_ID: &str = "message-thread";

/// Where the rendered thread talks back to.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// URL of the thread's message collection. Polling hits it with
    /// `?seen=N`; retries post to `{messages_url}/{id}/retry`, or to
    /// `{messages_url}/at/{index}/retry` for messages without an ID.
    pub messages_url: &'a str,
    /// HTMX trigger for polling (e.g. `every 5s`), `None` to disable.
    pub poll: Option<&'a str>,
}

/// Render the thread inside a scroll area.
pub fn render_thread<R>(thread: &MessageThread<'_, R>, options: &RenderOptions<'_>) -> String
where
    R: Fn(&ReportedErrorMessage),
{
    let body: String = thread
        .entries()
        .iter()
        .filter(|e| e.is_visible())
        .map(|e| render_entry(e, options))
        .collect();

    let count = thread.len().to_string();
    let mut attrs: Vec<(&str, &str)> = vec![
        ("id", THREAD_ELEMENT_ID),
        ("data-message-count", count.as_str()),
    ];

    let poll_url = format!("{}?seen={count}", options.messages_url);
    if let Some(trigger) = options.poll {
        attrs.extend([
            ("hx-get", poll_url.as_str()),
            ("hx-trigger", trigger),
            ("hx-swap", "outerHTML"),
        ]);
    }

    scroll_area("mb-2 max-h-[50svh] w-full pr-4", &attrs, &body)
}

fn render_entry(entry: &ThreadEntry, options: &RenderOptions<'_>) -> String {
    let primary = match &entry.bubble {
        Some(Bubble::Own {
            text,
            footer,
            error_indicator,
        }) => render_own(entry, text, footer, *error_indicator, options),
        Some(Bubble::Other {
            author,
            initial,
            text,
            timestamp,
        }) => render_other(author, initial, text, timestamp),
        None => String::new(),
    };
    let linked = entry
        .linked_chat
        .as_ref()
        .map(render_linked_chat)
        .unwrap_or_default();

    format!(
        r#"<div id="message-{}" class="animate-in fade-in slide-in-from-bottom-2 duration-300">{primary}{linked}</div>"#,
        escape(&entry.key)
    )
}

fn render_own(
    entry: &ThreadEntry,
    text: &str,
    footer: &OwnFooter,
    error_indicator: bool,
    options: &RenderOptions<'_>,
) -> String {
    let footer = match footer {
        OwnFooter::Spinner => loader_icon("size-3"),
        OwnFooter::Timestamp(ts) => format!(r#"<span class="opacity-70">{}</span>"#, escape(ts)),
        OwnFooter::Retry => format!("<div>{}</div>", retry_button(entry, options)),
    };
    let indicator = if error_indicator {
        alert_circle_icon("stroke-destructive")
    } else {
        String::new()
    };

    format!(
        r#"<div class="mb-4 flex items-center gap-2" data-bubble="own"><div class="ml-auto w-2/3 rounded-md bg-primary p-2 text-primary-foreground"><div class="whitespace-pre-wrap text-sm">{}</div><div class="mt-1 flex justify-end text-xs">{footer}</div></div>{indicator}</div>"#,
        escape(text)
    )
}

fn retry_button(entry: &ThreadEntry, options: &RenderOptions<'_>) -> String {
    let target = format!("#{THREAD_ELEMENT_ID}");
    let retry_url = match &entry.id {
        Some(id) => format!("{}/{}/retry", options.messages_url, encode_component(id)),
        None => format!("{}/at/{}/retry", options.messages_url, entry.index),
    };
    let attrs = [
        ("hx-post", retry_url.as_str()),
        ("hx-target", target.as_str()),
        ("hx-swap", "outerHTML"),
    ];

    button(
        &ButtonProps {
            variant: ButtonVariant::Link,
            size: ButtonSize::Inline,
            class: "font-semibold text-destructive text-xs",
            attrs: &attrs,
            ..Default::default()
        },
        "Retry",
    )
}

fn render_other(author: &str, initial: &str, text: &str, timestamp: &str) -> String {
    format!(
        r#"<div class="mb-4 flex items-end gap-2" data-bubble="other">{}<div class="mr-auto w-2/3 rounded-md bg-secondary p-2 text-secondary-foreground"><div class="mb-1 font-semibold text-primary text-xs">{}</div><div class="whitespace-pre-wrap text-sm">{}</div><div class="mt-1 flex justify-end text-xs opacity-70">{}</div></div></div>"#,
        avatar(&escape(initial), "size-6"),
        escape(author),
        escape(text),
        escape(timestamp)
    )
}

fn render_linked_chat(chat: &LinkedChatBubble) -> String {
    let link = link_button(
        &ButtonProps {
            variant: ButtonVariant::Link,
            size: ButtonSize::Inline,
            class: "whitespace-normal",
            attrs: &[("target", "_blank"), ("rel", "noopener noreferrer")],
            ..Default::default()
        },
        &chat.href,
        "link",
    );

    format!(
        r#"<div class="mb-4 flex items-end gap-2" data-bubble="linked-chat">{}<div class="mr-auto w-2/3 rounded-md bg-secondary p-2 text-secondary-foreground"><div class="mb-1 font-semibold text-primary text-xs">{}</div><div class="text-sm">{LINKED_CHAT_LEAD} {link} {LINKED_CHAT_TAIL}</div><div class="mt-1 flex justify-end text-xs opacity-70">{}</div></div></div>"#,
        avatar(&fish_icon(""), "size-6"),
        escape(chat.persona),
        escape(&chat.timestamp)
    )
}
