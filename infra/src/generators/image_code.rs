//! Image captcha generator
//!
//! Renders the code as an SVG with noise lines and jittered glyphs, returned
//! as a base64 `data:` URI on the generated code.

use base64::{engine::general_purpose::STANDARD, Engine};
use rand::Rng;
use vc_core::{CodeGenerator, CodeResult, CodeType, RequestContext, ValidateCode};
use vc_shared::ImageCodeConfig;

use super::expiring_code;

/// Characters drawn on captchas (no 0/O or 1/I)
const ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Upper bound accepted for request-supplied dimensions
const MAX_DIMENSION: u32 = 1000;

/// Generates alphanumeric captchas rendered as SVG
#[derive(Debug, Clone)]
pub struct ImageCodeGenerator {
    config: ImageCodeConfig,
}

impl ImageCodeGenerator {
    pub fn new(config: ImageCodeConfig) -> Self {
        Self { config }
    }

    /// Dimension from the request when present and in range, else the default
    fn dimension(ctx: &dyn RequestContext, name: &str, default: u32) -> u32 {
        ctx.parameter(name)
            .ok()
            .flatten()
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|value| (1..=MAX_DIMENSION).contains(value))
            .unwrap_or(default)
    }

    fn random_text(length: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }

    fn render_svg(text: &str, width: u32, height: u32) -> String {
        let mut rng = rand::thread_rng();

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            width, height
        );
        svg.push_str(r##"<rect width="100%" height="100%" fill="#f5f5f5"/>"##);

        for _ in 0..(text.len() * 4).max(8) {
            svg.push_str(&format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="rgb({},{},{})" stroke-width="1"/>"#,
                rng.gen_range(0..width),
                rng.gen_range(0..height),
                rng.gen_range(0..width),
                rng.gen_range(0..height),
                rng.gen_range(160..220),
                rng.gen_range(160..220),
                rng.gen_range(160..220),
            ));
        }

        let font_size = (height as f32 * 0.8).max(8.0);
        let char_width = width as f32 / (text.len() as f32 + 1.0);
        let jitter = (height / 8).max(1) as i32;
        for (i, c) in text.chars().enumerate() {
            let x = char_width * (i as f32 + 0.6);
            let y = height as i32 * 3 / 4 + rng.gen_range(-jitter..=jitter);
            let rotation = rng.gen_range(-20..=20);
            svg.push_str(&format!(
                r#"<text x="{:.1}" y="{}" font-family="monospace" font-size="{:.1}" font-weight="bold" fill="rgb({},{},{})" transform="rotate({} {:.1} {})">{}</text>"#,
                x,
                y,
                font_size,
                rng.gen_range(20..110),
                rng.gen_range(20..110),
                rng.gen_range(20..110),
                rotation,
                x,
                y,
                c
            ));
        }

        svg.push_str("</svg>");
        svg
    }
}

impl CodeGenerator for ImageCodeGenerator {
    fn generate(&self, ctx: &dyn RequestContext) -> CodeResult<ValidateCode> {
        let width = Self::dimension(ctx, "width", self.config.width);
        let height = Self::dimension(ctx, "height", self.config.height);

        let text = Self::random_text(self.config.length);
        let svg = Self::render_svg(&text, width, height);
        let code = expiring_code(CodeType::Image, text, self.config.expire_in)?;

        tracing::debug!(width, height, "Rendered image captcha");

        Ok(code.with_image(format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use vc_core::{CodeRequest, ValidateCodeError};

    fn decode_svg(code: &ValidateCode) -> String {
        let image = code.image.as_deref().expect("image attached");
        let encoded = image
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("svg data uri");
        String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap()
    }

    #[test]
    fn test_generates_captcha_with_image() {
        let generator = ImageCodeGenerator::new(ImageCodeConfig::default());
        let code = generator.generate(&CodeRequest::new("s1", "")).unwrap();

        assert_eq!(code.code.len(), 4);
        assert!(code.code.bytes().all(|b| ALPHABET.contains(&b)));
        assert_eq!(code.expire_time - code.created_at, Duration::seconds(60));

        let svg = decode_svg(&code);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="67" height="23""#));
        for c in code.code.chars() {
            assert!(svg.contains(&format!(">{}</text>", c)));
        }
    }

    #[test]
    fn test_request_dimensions_override_defaults() {
        let generator = ImageCodeGenerator::new(ImageCodeConfig::default());
        let request = CodeRequest::new("s1", "width=120&height=40");

        let svg = decode_svg(&generator.generate(&request).unwrap());
        assert!(svg.contains(r#"width="120" height="40""#));
    }

    #[test]
    fn test_invalid_dimensions_fall_back() {
        let generator = ImageCodeGenerator::new(ImageCodeConfig::default());
        let request = CodeRequest::new("s1", "width=abc&height=5000");

        let svg = decode_svg(&generator.generate(&request).unwrap());
        assert!(svg.contains(r#"width="67" height="23""#));
    }

    #[test]
    fn test_configured_length() {
        let generator = ImageCodeGenerator::new(ImageCodeConfig {
            length: 6,
            ..ImageCodeConfig::default()
        });
        let code = generator.generate(&CodeRequest::new("s1", "")).unwrap();
        assert_eq!(code.code.len(), 6);
    }

    #[test]
    fn test_unrepresentable_lifetime_is_an_error() {
        let generator = ImageCodeGenerator::new(ImageCodeConfig {
            expire_in: i64::MAX / 1000,
            ..ImageCodeConfig::default()
        });
        let result = generator.generate(&CodeRequest::new("s1", ""));
        assert!(matches!(
            result,
            Err(ValidateCodeError::InvalidExpiry { kind: CodeType::Image, .. })
        ));
    }
}
