//! Single-page HTML document holding the panels.

use super::panels::Panel;
use crate::chart::escape_xml;
use crate::utils::config::DashboardConfig;

const BACKGROUND: &str = "#E2E6EB";
const TEXT: &str = "#05336B";

/// Render the dashboard page
///
/// Panels appear in the order given; each SVG is inlined so the page has no
/// external assets.
pub fn render_page(panels: &[Panel], config: &DashboardConfig, generated_at: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_xml(&config.title)));
    html.push_str(&format!(
        "<style>\nbody {{ background-color: {bg}; margin: 0; font-family: 'Open Sans', verdana, arial, sans-serif; }}\n\
         h1, .subtitle, footer {{ text-align: center; color: {fg}; }}\n\
         .panel {{ display: flex; justify-content: center; margin: 12px 0; }}\n\
         footer {{ font-size: 12px; padding: 16px; }}\n</style>\n",
        bg = BACKGROUND,
        fg = TEXT
    ));
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!("<h1>{}</h1>\n", escape_xml(&config.title)));
    html.push_str(&format!(
        "<div class=\"subtitle\">{}</div>\n",
        escape_xml(&config.subtitle)
    ));

    for panel in panels {
        html.push_str(&format!(
            "<div class=\"panel\" id=\"{}\">{}</div>\n",
            panel.kind.id(),
            panel.svg
        ));
    }

    html.push_str(&format!(
        "<footer>Generated {}</footer>\n</body>\n</html>\n",
        escape_xml(generated_at)
    ));

    html
}
