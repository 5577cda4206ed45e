//! Property tests for splitting and decoding

use proptest::prelude::*;
use stransi_parser::{Ansi, Color, ColorRole, Decoded, Escape, Instruction, Rgb};

/// Text fragments biased towards control-sequence syntax
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("\x1b[".to_string()),
        Just("\x1b".to_string()),
        Just(";".to_string()),
        "[0-9]{1,4}",
        "[a-zA-Z]",
        "[ -~]{0,6}",
        "[éß日本]{1,2}",
        "(38|48);(2|5)(;[0-9]{1,3}){0,3}m",
    ]
}

fn ansi_text() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..24).prop_map(|parts| parts.concat())
}

fn decode(text: &str) -> Vec<Instruction> {
    Escape::new(text)
        .map(|e| e.instructions().collect())
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn escapes_reconstruct_input(text in ansi_text()) {
        let s = Ansi::new(text.clone());
        let rebuilt: String = s.escapes().map(|seg| seg.as_str()).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn escapes_never_yield_empty_pieces(text in ansi_text()) {
        let s = Ansi::new(text);
        prop_assert!(s.escapes().all(|seg| !seg.as_str().is_empty()));
    }

    #[test]
    fn decoding_is_total_and_keeps_text(text in ansi_text()) {
        let s = Ansi::new(text);
        let decoded_text: String = s
            .instructions()
            .filter_map(|d| match d {
                Decoded::Text(t) => Some(t),
                Decoded::Instruction(_) => None,
            })
            .collect();
        prop_assert_eq!(decoded_text, s.strip());
    }

    #[test]
    fn token_count_matches_parameter_count(params in prop::collection::vec(prop::option::of(0u32..1000), 1..8)) {
        let raw = params
            .iter()
            .map(|p| p.map(|v| v.to_string()).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(";");
        let text = format!("\x1b[{}m", raw);
        let escape = Escape::new(&text).unwrap();
        let data: Vec<u32> = escape.tokens().map(|t| t.data).collect();
        let expected: Vec<u32> = params.iter().map(|p| p.unwrap_or(0)).collect();
        prop_assert_eq!(data, expected);
    }

    #[test]
    fn bright_foreground_offset(code in 90u32..=97) {
        let expected = Instruction::SetColor {
            role: ColorRole::Foreground,
            color: Some(Color::Ansi256(u8::try_from(code - 82).unwrap())),
        };
        prop_assert_eq!(decode(&format!("\x1b[{}m", code)), vec![expected]);
    }

    #[test]
    fn bright_background_offset(code in 100u32..=107) {
        let expected = Instruction::SetColor {
            role: ColorRole::Background,
            color: Some(Color::Ansi256(u8::try_from(code - 92).unwrap())),
        };
        prop_assert_eq!(decode(&format!("\x1b[{}m", code)), vec![expected]);
    }

    #[test]
    fn palette_colors(index: u8) {
        prop_assert_eq!(
            decode(&format!("\x1b[38;5;{}m", index)),
            vec![Instruction::SetColor {
                role: ColorRole::Foreground,
                color: Some(Color::Ansi256(index)),
            }]
        );
        prop_assert_eq!(
            decode(&format!("\x1b[48;5;{}m", index)),
            vec![Instruction::SetColor {
                role: ColorRole::Background,
                color: Some(Color::Ansi256(index)),
            }]
        );
    }

    #[test]
    fn true_colors(red: u8, green: u8, blue: u8) {
        let rgb = Rgb::new(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        );
        prop_assert_eq!(
            decode(&format!("\x1b[38;2;{};{};{}m", red, green, blue)),
            vec![Instruction::SetColor {
                role: ColorRole::Foreground,
                color: Some(Color::Rgb(rgb)),
            }]
        );
        prop_assert_eq!(
            decode(&format!("\x1b[48;2;{};{};{}m", red, green, blue)),
            vec![Instruction::SetColor {
                role: ColorRole::Background,
                color: Some(Color::Rgb(rgb)),
            }]
        );
    }

    #[test]
    fn absolute_moves_are_zero_based(x in 1u32..500, y in 1u32..500) {
        prop_assert_eq!(
            decode(&format!("\x1b[{};{}H", x, y)),
            vec![Instruction::SetCursor(stransi_parser::CursorMove::to(x - 1, y - 1))]
        );
    }
}
