use crate::{route_block::RouteBlock, surface::ResultContainer};

/// A result container that keeps its content as an HTML fragment, the way
/// `rotaContainer.innerHTML` would hold it.
#[derive(Debug, Default, Clone)]
pub struct HtmlContainer {
    inner_html: String,
    block_count: usize,
}

impl HtmlContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(inner_html: impl Into<String>) -> Self {
        Self {
            inner_html: inner_html.into(),
            block_count: 0,
        }
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Number of route blocks appended since the last clear.
    pub fn block_count(&self) -> usize {
        self.block_count
    }
}

impl ResultContainer for HtmlContainer {
    fn clear(&mut self) {
        self.inner_html.clear();
        self.block_count = 0;
    }

    fn append_block(&mut self, block: RouteBlock) {
        self.inner_html.push_str(&render_block(&block));
        self.block_count += 1;
    }

    fn show_message(&mut self, message: &str) {
        self.inner_html = format!("<p>{}</p>", escape_html(message));
        self.block_count = 0;
    }
}

pub fn render_block(block: &RouteBlock) -> String {
    format!(
        concat!(
            "<div class=\"rota\">",
            "<h3>{}</h3>",
            "<p><strong>Caminho:</strong> {}</p>",
            "<p><strong>Distância:</strong> {}</p>",
            "<p><strong>Custo:</strong> {}</p>",
            "<p><strong>Tempo:</strong> {}</p>",
            "</div>"
        ),
        escape_html(&block.label),
        escape_html(&block.path),
        escape_html(&block.distance),
        escape_html(&block.cost),
        escape_html(&block.time),
    )
}

/// Waypoint names come from the server and are inserted as text.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use crate::test_utils;

    use super::*;

    #[test]
    fn test_render_block() {
        let block = RouteBlock::new(
            1,
            &test_utils::route(&["CityA", "Hub", "CityB"], 120.0, 50.5, 2.5),
        );

        assert_eq!(
            render_block(&block),
            "<div class=\"rota\"><h3>Rota 1</h3>\
             <p><strong>Caminho:</strong> CityA → Hub → CityB</p>\
             <p><strong>Distância:</strong> 120 km</p>\
             <p><strong>Custo:</strong> R$50.5</p>\
             <p><strong>Tempo:</strong> 2.5 horas</p></div>"
        );
    }

    #[test]
    fn test_waypoints_are_escaped() {
        let block = RouteBlock::new(1, &test_utils::route(&["<b>A</b>", "B&C"], 1.0, 1.0, 1.0));
        let html = render_block(&block);

        assert!(html.contains("&lt;b&gt;A&lt;/b&gt; → B&amp;C"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_message_replaces_content() {
        let mut container = HtmlContainer::with_content("<div>stale</div>");
        container.show_message("Nenhuma rota encontrada.");

        assert_eq!(container.inner_html(), "<p>Nenhuma rota encontrada.</p>");
        assert_eq!(container.block_count(), 0);
    }

    #[test]
    fn test_clear_then_append() {
        let mut container = HtmlContainer::with_content("<div>stale</div>");
        container.clear();
        container.append_block(RouteBlock::new(1, &test_utils::route(&["A"], 1.0, 1.0, 1.0)));

        assert!(!container.inner_html().contains("stale"));
        assert_eq!(container.block_count(), 1);
    }
}
