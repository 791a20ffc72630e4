/// Theme name written into `theme` fields and attributes.
pub const THEME_NAME: &str = "Windows 11";

/// Corner rounding written into `borderRadius` fields and attributes.
pub const BORDER_RADIUS: &str = "8px";

/// Drop shadow written into `shadow` fields.
pub const SHADOW: &str = "0px 4px 6px rgba(0, 0, 0, 0.1)";

/// Marker substring that guards the CSS append against double application.
pub const CSS_MARKER: &str = "Windows 11 Styling";

/// Stylesheet block appended to CSS files that do not carry the marker yet.
pub const CSS_BLOCK: &str = r#"
/* Windows 11 Styling */
:root {
    --primary-color: #0078D4;
    --border-radius: 8px;
    --shadow: 0px 4px 6px rgba(0, 0, 0, 0.1);
}
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    background-color: #F3F3F3;
    color: #323130;
}
"#;
