//! `tripchat render`: run the renderer over a file or stdin.

use std::path::Path;

use tokio::io::AsyncReadExt;

use tripchat_core::render::{render, render_document};
use tripchat_types::config::Theme;

/// Render `source` as a fragment, or as a themed page when `document` is set.
pub fn render_text(source: &str, document: bool, theme: Theme, title: &str) -> String {
    if document {
        render_document(source, theme, title)
    } else {
        render(source)
    }
}

pub async fn run_render(
    file: Option<&Path>,
    document: bool,
    theme: Theme,
    title: &str,
) -> anyhow::Result<()> {
    let source = match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    println!("{}", render_text(&source, document, theme, title));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_output() {
        assert_eq!(
            render_text("- Bali\n- Lombok", false, Theme::Light, "t"),
            "<ul><li>Bali</li><li>Lombok</li></ul>"
        );
    }

    #[test]
    fn test_document_output() {
        let page = render_text("**Day 1**", true, Theme::Dark, "Plan");
        assert!(page.contains("data-theme=\"dark\""));
        assert!(page.contains("<p><strong>Day 1</strong></p>"));
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope.md");
        assert!(run_render(Some(&missing), false, Theme::Light, "t").await.is_err());
    }
}
