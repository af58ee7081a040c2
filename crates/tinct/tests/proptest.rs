//! Property-based tests for tinct using proptest.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tinct::colorize::is_visible;
use tinct::{render_with_rng, validate, Color, RenderRequest, Styles, RESET};

// ============================================================================
// Strategies
// ============================================================================

fn styles_strategy() -> impl Strategy<Value = Styles> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(bold, underline, italic)| Styles {
        bold,
        underline,
        italic,
    })
}

fn color_strategy() -> impl Strategy<Value = Option<Color>> {
    prop::option::of(prop::sample::select(Color::ALL.to_vec()))
}

// Printable ASCII plus whitespace and a few multi-byte characters.
fn text_strategy() -> impl Strategy<Value = String> {
    "[ -~\t\n\r éß中🎨]{0,40}"
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Rendered output never starts or ends with whitespace.
    #[test]
    fn output_is_trimmed(
        text in text_strategy(),
        color in color_strategy(),
        styles in styles_strategy(),
        seed in any::<u64>(),
    ) {
        let request = RenderRequest::new(text, color);
        let out = render_with_rng(&request, styles, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    /// Stripping escapes gives back the trimmed input text.
    #[test]
    fn visible_text_is_preserved(
        text in text_strategy(),
        color in color_strategy(),
        styles in styles_strategy(),
        seed in any::<u64>(),
    ) {
        let request = RenderRequest::new(text.clone(), color);
        let out = render_with_rng(&request, styles, &mut StdRng::seed_from_u64(seed));
        let stripped = console::strip_ansi_codes(&out);
        let expected = match color {
            Some(_) => text.as_str(),
            None => text.trim(),
        };
        prop_assert_eq!(&*stripped, expected);
    }

    /// Random mode emits exactly one reset per visible character.
    #[test]
    fn random_mode_one_reset_per_visible_char(
        text in text_strategy(),
        styles in styles_strategy(),
        seed in any::<u64>(),
    ) {
        let visible = text.chars().filter(|c| is_visible(*c)).count();
        let request = RenderRequest::new(text, None);
        let out = render_with_rng(&request, styles, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(out.matches(RESET).count(), visible);
    }

    /// Uniform mode is deterministic and carries a single reset at the end.
    #[test]
    fn uniform_mode_single_trailing_reset(
        text in text_strategy(),
        color in prop::sample::select(Color::ALL.to_vec()),
        styles in styles_strategy(),
        seed_a in any::<u64>(),
        seed_b in any::<u64>(),
    ) {
        let request = RenderRequest::new(text, Some(color));
        let a = render_with_rng(&request, styles, &mut StdRng::seed_from_u64(seed_a));
        let b = render_with_rng(&request, styles, &mut StdRng::seed_from_u64(seed_b));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.matches(RESET).count(), 1);
        prop_assert!(a.ends_with(RESET));
        let expected_prefix = format!("{}{}", styles.prefix(), color.code());
        prop_assert!(a.starts_with(&expected_prefix));
    }

    /// Validation gives the same answer every time for the same input.
    #[test]
    fn validation_is_pure(text in ".{0,10}", token in "[a-zA-Z]{0,3}") {
        let args = [json!(text), json!(token)];
        prop_assert_eq!(validate(&args), validate(&args));
    }

    /// Every letter token resolves regardless of case.
    #[test]
    fn letter_tokens_case_insensitive(
        color in prop::sample::select(Color::ALL.to_vec()),
        upper in any::<bool>(),
    ) {
        let letter = color.letter().to_string();
        let token = if upper { letter.to_uppercase() } else { letter };
        prop_assert_eq!(Color::from_token(&token), Ok(color));
    }
}
