//! Notebook Browser panel.
//!
//! Renders an [`HtmlSurface`] as plain forms posting to the `/browser/*`
//! routes, so the panel works without client-side scripting.

use super::components::{base_html, html_escape};
use crate::browser::state::ViewState;
use crate::browser::ui::{
    HtmlSurface, CONTENT_ID, DIRECTORY_SELECT_ID, FILE_ITEM_CLASS, FILE_LIST_ID, IMPORT_BUTTON_ID,
};
use crate::models::FileRow;

/// The panel markup alone, for embedding in a host page.
pub fn render_panel(state: &ViewState, surface: &HtmlSurface, alerts: &[String]) -> String {
    let mut html = String::new();

    for alert in alerts {
        html.push_str(&format!(
            r#"<div class="alert" role="alert">{}</div>"#,
            html_escape(alert)
        ));
    }

    html.push_str(r#"<div class="notebook-browser"><div class="notebook-nav">"#);

    // Directory selector
    html.push_str(&format!(
        r#"<form method="post" action="/browser/directory">
            <select id="{id}" name="directory" onchange="this.form.submit()">"#,
        id = DIRECTORY_SELECT_ID
    ));
    for option in &surface.directory_options {
        let selected = if !option.is_placeholder()
            && state.current_directory() == Some(option.value.as_str())
        {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            html_escape(&option.value),
            selected,
            html_escape(&option.label)
        ));
    }
    html.push_str(r#"</select><noscript><button type="submit">Open</button></noscript></form>"#);

    // File list
    html.push_str(&format!(r#"<div id="{}">"#, FILE_LIST_ID));
    for row in &surface.file_rows {
        match row {
            FileRow::File { directory, file } => html.push_str(&format!(
                r#"<form method="post" action="/browser/file">
                    <input type="hidden" name="directory" value="{dir}">
                    <input type="hidden" name="file" value="{file}">
                    <button type="submit" class="{class}">{file}</button>
                </form>"#,
                dir = html_escape(directory),
                file = html_escape(file),
                class = FILE_ITEM_CLASS,
            )),
            FileRow::Info(text) => html.push_str(&format!(
                r#"<div class="{}">{}</div>"#,
                FILE_ITEM_CLASS,
                html_escape(text)
            )),
        }
    }
    html.push_str("</div></div>");

    // Preview and import
    html.push_str(&format!(
        r#"<div class="notebook-main"><div id="{}"><pre>{}</pre>"#,
        CONTENT_ID,
        html_escape(&surface.preview)
    ));
    for link in &surface.links {
        html.push_str(&format!(
            r#"<a class="wiki-link" href="{}" target="_blank">{}</a>"#,
            html_escape(&link.href),
            html_escape(&link.text)
        ));
    }
    html.push_str(&format!(
        r#"</div>
        <form method="post" action="/browser/import">
            <button type="submit" id="{}"{}>Import to Wiki</button>
        </form></div></div>"#,
        IMPORT_BUTTON_ID,
        if surface.import_enabled { "" } else { " disabled" }
    ));

    html
}

/// The panel as a standalone page.
pub fn render_browser(state: &ViewState, surface: &HtmlSurface, alerts: &[String]) -> String {
    let content = format!(
        "<h1>Notebooks</h1>{}",
        render_panel(state, surface, alerts)
    );
    base_html("Notebooks", &content)
}
