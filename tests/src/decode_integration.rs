//! Integration tests for decoding realistic terminal output

use stransi_config::Config;
use stransi_parser::{
    Ansi, Attribute, Clear, Color, ColorRole, CursorMove, Decoded, Escape, Instruction, Rgb,
    Segment, Token,
};

fn fg(color: Color) -> Decoded<'static> {
    Decoded::Instruction(Instruction::SetColor {
        role: ColorRole::Foreground,
        color: Some(color),
    })
}

fn attr(attribute: Attribute) -> Decoded<'static> {
    Decoded::Instruction(Instruction::SetAttribute(attribute))
}

/// Test the canonical two-word greeting
#[test]
fn test_hello_world_scenario() {
    let s = Ansi::new("\x1b[0;31;1mHello\x1b[m, \x1B[32mWorld!\x1b[0m");
    let decoded: Vec<_> = s.instructions().collect();

    assert_eq!(
        decoded,
        vec![
            attr(Attribute::Normal),
            fg(Color::Ansi256(1)),
            attr(Attribute::Bold),
            Decoded::Text("Hello"),
            attr(Attribute::Normal),
            Decoded::Text(", "),
            fg(Color::Ansi256(2)),
            Decoded::Text("World!"),
            attr(Attribute::Normal),
        ]
    );
}

/// Test a colorful shell session with prompts, listings and a redraw
#[test]
fn test_shell_session() -> anyhow::Result<()> {
    let session = concat!(
        "\x1b[1;32m$ \x1b[0m\x1b[33mls -la\x1b[0m\r\n",
        "\x1b[34mtotal 8\x1b[0m\r\n",
        "\x1b[1;31m-rw-r--r--\x1b[0m file.txt\r\n",
        "\x1b[2J\x1b[H\x1b[38;2;255;165;0mOrange\x1b[39m",
    );
    let s = Ansi::new(session);

    let instructions: Vec<Instruction> = s
        .instructions()
        .filter_map(|d| match d {
            Decoded::Instruction(i) => Some(i),
            Decoded::Text(_) => None,
        })
        .collect();

    assert!(instructions.iter().all(|i| !i.is_unsupported()));
    assert_eq!(
        instructions.iter().filter(|i| **i == Instruction::SetAttribute(Attribute::Bold)).count(),
        2
    );
    assert!(instructions.contains(&Instruction::SetClear(Clear::Screen)));
    assert!(instructions.contains(&Instruction::SetCursor(CursorMove::to_home())));
    assert!(instructions.contains(&Instruction::SetColor {
        role: ColorRole::Foreground,
        color: Some(Color::Rgb(Rgb::from_bytes(255, 165, 0))),
    }));
    assert_eq!(
        instructions.last(),
        Some(&Instruction::SetColor {
            role: ColorRole::Foreground,
            color: None,
        })
    );

    assert_eq!(
        s.strip(),
        "$ ls -la\r\ntotal 8\r\n-rw-r--r-- file.txt\r\nOrange"
    );
    Ok(())
}

/// Test that escapes() pieces rebuild the input exactly
#[test]
fn test_escapes_reconstruct_input() {
    let input = "plain\x1b[1m\x1b[;5Hmid\x1b[?25l\x1b[38;5mtail\x1b[";
    let s = Ansi::new(input);
    let rebuilt: String = s.escapes().map(|seg| seg.as_str()).collect();
    assert_eq!(rebuilt, input);

    let escapes: Vec<Escape<'_>> = s
        .escapes()
        .filter_map(|seg| match seg {
            Segment::Escape(e) => Some(e),
            Segment::Text(_) => None,
        })
        .collect();
    assert_eq!(escapes.len(), 3);
    assert_eq!(
        escapes[1].tokens().collect::<Vec<_>>(),
        vec![Token::new('H', 0), Token::new('H', 5)]
    );
}

/// Test that a broken color spec does not affect its neighbours
#[test]
fn test_malformed_color_is_contained() {
    let s = Ansi::new("\x1b[38;2;10mA\x1b[4mB");
    let decoded: Vec<_> = s.instructions().collect();
    assert_eq!(
        decoded,
        vec![
            Decoded::Instruction(Instruction::Unsupported(Token::new('m', 38))),
            Decoded::Instruction(Instruction::Unsupported(Token::new('m', 2))),
            Decoded::Instruction(Instruction::Unsupported(Token::new('m', 10))),
            Decoded::Text("A"),
            attr(Attribute::Underline),
            Decoded::Text("B"),
        ]
    );
}

/// Test that an instruction stream survives a JSON round trip
#[test]
fn test_instruction_stream_json() -> anyhow::Result<()> {
    let s = Ansi::new("\x1b[1;38;2;0;0;255;48;5;17m\x1b[3A\x1b[1K\x1b[5q");
    let instructions: Vec<Instruction> = s
        .instructions()
        .filter_map(|d| match d {
            Decoded::Instruction(i) => Some(i),
            Decoded::Text(_) => None,
        })
        .collect();
    assert_eq!(instructions.len(), 6);

    let json = serde_json::to_string(&instructions)?;
    let back: Vec<Instruction> = serde_json::from_str(&json)?;
    assert_eq!(back, instructions);

    let value = serde_json::to_value(instructions[5])?;
    assert_eq!(value, serde_json::json!({"Unsupported": {"kind": "q", "data": 5}}));
    Ok(())
}

/// Test decoding with options taken from a configuration file
#[test]
fn test_decoder_options_from_config() -> anyhow::Result<()> {
    let config = Config::from_toml("[decoder]\nlog_unsupported = false\n")?;
    assert!(!config.decoder.log_unsupported);

    let s = Ansi::new("\x1b[9mstrike\x1b[29m");
    let quiet: Vec<_> = s.instructions_with(config.decoder).collect();
    let loud: Vec<_> = s.instructions().collect();
    assert_eq!(quiet, loud);
    assert_eq!(quiet.len(), 3);
    Ok(())
}
