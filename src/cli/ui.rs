use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Result,
    Error,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Result => style(text).green().bold(),
        StyleType::Error => style(text).red(),
    };
    styled.to_string()
}
