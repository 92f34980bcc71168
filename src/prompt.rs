//! Prompt construction for the generation endpoint.
//!
//! Turns a [`SiteConfig`] into a single natural-language instruction
//! string. The template is fixed: a task statement, the user's
//! description, the design requirements as bullets, output guidelines,
//! the section plan, and a literal example of the three fenced code
//! block markers the model is expected to emit. Pure transformation,
//! no validation of field values.
//!
//! # Example
//!
//! ```
//! use webforge::config::SiteConfig;
//! use webforge::prompt::PromptBuilder;
//!
//! let config = SiteConfig::new("landing page for a bakery");
//! let prompt = PromptBuilder::build(&config);
//!
//! assert!(prompt.contains("landing page for a bakery"));
//! assert!(prompt.contains("```html"));
//! ```

use crate::config::SiteConfig;

/// Builds the instruction prompt sent to the generation model.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the complete generation prompt for a configuration.
    ///
    /// Every design field's literal value appears as a substring of the
    /// output. The `model` field does not: it selects the client and is
    /// not prompt content.
    #[must_use]
    pub fn build(config: &SiteConfig) -> String {
        let mut lines = vec![
            "Task: Generate a complete, modern website based on the following requirements."
                .to_string(),
            "Provide the HTML, CSS, and JavaScript in separate markdown code blocks.".to_string(),
            String::new(),
            "### Website Description:".to_string(),
            config.description.clone(),
            String::new(),
            "### Design Requirements:".to_string(),
            format!("- Primary Color: {}", config.primary_color),
            format!("- Secondary Color: {}", config.secondary_color),
            format!("- Font Family: {}", config.font_family),
            format!("- Layout Style: {}", config.layout_style),
            format!(
                "- Include Animations: {}",
                yes_no(config.include_animation)
            ),
            format!("- Dark Mode Support: {}", yes_no(config.dark_mode)),
            format!("- Number of Sections: {}", config.num_sections),
            String::new(),
            "### Output Guidelines:".to_string(),
            "1. Create a responsive, accessible website".to_string(),
            "2. Use modern CSS (Flexbox/Grid)".to_string(),
            "3. Include proper semantic HTML".to_string(),
            "4. Make sure the design is visually appealing".to_string(),
            "5. If animations are requested, use subtle, performant animations".to_string(),
            "6. If dark mode is requested, include a toggle switch and appropriate styling"
                .to_string(),
            String::new(),
            "### Required Sections (adjust based on number of sections requested):".to_string(),
            "1. Hero section with headline and call-to-action".to_string(),
            "2. Features/Benefits section".to_string(),
            "3. Testimonials/Reviews section".to_string(),
            "4. Pricing section (if applicable)".to_string(),
            "5. Contact/CTA section".to_string(),
            "6. Footer with basic links".to_string(),
            String::new(),
            "Please generate the complete code with HTML, CSS, and JavaScript in separate code blocks below:"
                .to_string(),
            String::new(),
        ];

        lines.push("```html".to_string());
        lines.push("<!-- Your HTML code here -->".to_string());
        lines.push("```".to_string());
        lines.push(String::new());
        lines.push("```css".to_string());
        lines.push("/* Your CSS code here */".to_string());
        lines.push("```".to_string());
        lines.push(String::new());
        lines.push("```javascript".to_string());
        lines.push("// Your JavaScript code here".to_string());
        lines.push("```".to_string());

        lines.join("\n")
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
