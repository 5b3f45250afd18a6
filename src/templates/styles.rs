//! CSS styles for the Notebook Browser panel.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base01: #586e75;
    --base00: #657b83;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --red: #dc322f;
    --blue: #268bd2;
    --cyan: #2aa198;
    --green: #859900;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
    --accent: var(--base2);
    --code-bg: var(--base2);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 900px;
    margin: 0 auto;
    padding: 1rem;
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

h1 { font-size: 1.5rem; font-weight: 600; margin-bottom: 0.5em; }

.notebook-browser {
    display: grid;
    grid-template-columns: 240px 1fr;
    gap: 1rem;
}

.notebook-browser select {
    width: 100%;
    padding: 0.4rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--bg);
    color: var(--fg);
}

#file-list { margin-top: 0.75rem; border-top: 1px solid var(--border); }

.file-item {
    display: block;
    width: 100%;
    text-align: left;
    padding: 0.4rem 0.25rem;
    border: none;
    border-bottom: 1px solid var(--border);
    background: none;
    color: var(--fg);
    font-family: inherit;
    font-size: 0.9rem;
}
button.file-item { cursor: pointer; color: var(--link); }
button.file-item:hover { background: var(--accent); }

#notebook-content pre {
    background: var(--code-bg);
    padding: 0.75rem;
    border-radius: 4px;
    min-height: 8rem;
    white-space: pre-wrap;
    font-size: 0.85rem;
}

.wiki-link { display: block; margin-top: 10px; }

#import-button {
    margin-top: 0.75rem;
    padding: 0.4rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--accent);
    color: var(--fg);
    cursor: pointer;
}
#import-button:disabled { color: var(--muted); cursor: not-allowed; }

.alert {
    padding: 0.5rem 0.75rem;
    margin-bottom: 0.75rem;
    border-left: 3px solid var(--green);
    background: var(--accent);
}
"#;
