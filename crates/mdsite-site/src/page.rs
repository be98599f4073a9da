//! Single page rendering: markdown + HTML template -> full page

use mdsite_core::{extract_title, markdown_to_html};

/// Placeholder replaced with the page title
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder replaced with the rendered document
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Render a markdown document into an HTML template
///
/// Every title and content placeholder in the template is substituted. When
/// `base_path` is anything other than `/`, root-relative `href` and `src`
/// attributes are rewritten to start with it.
pub fn generate_page(markdown: &str, template: &str, base_path: &str) -> mdsite_core::Result<String> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content);

    Ok(apply_base_path(&page, base_path))
}

/// Rewrite `href="/` and `src="/` to the given base path
pub fn apply_base_path(html: &str, base_path: &str) -> String {
    let base = normalize_base_path(base_path);
    if base == "/" {
        return html.to_string();
    }
    html.replace(r#"href="/"#, &format!(r#"href="{}"#, base))
        .replace(r#"src="/"#, &format!(r#"src="{}"#, base))
}

/// Ensure a base path starts and ends with `/`
fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
