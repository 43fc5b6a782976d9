use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn command_cursor_is_solid_while_typing() {
    let cfg = TerminalConfig::default();
    let term = TerminalContent::new(&cfg);
    let s = term.state(FrameIndex(10), fps30());
    assert_eq!(s.command, &cfg.command[..18]);
    assert!(!s.typing_complete);
    assert!(s.command_cursor);
    assert_eq!(s.tail_cursor, None);
    assert_eq!(s.font_size, 32.0);
}

#[test]
fn command_cursor_stays_until_output_starts() {
    let cfg = TerminalConfig::default();
    let term = TerminalContent::new(&cfg);
    // Typing completes at frame 26; the first line appears at frame 32.
    let s = term.state(FrameIndex(28), fps30());
    assert!(s.typing_complete);
    assert!(s.output.is_empty());
    assert!(s.command_cursor);

    let s = term.state(FrameIndex(32), fps30());
    assert_eq!(s.output.len(), 1);
    assert!(!s.command_cursor);
    assert_eq!(s.tail_cursor, Some(true));
}

#[test]
fn font_shrinks_to_seventy_percent() {
    let cfg = TerminalConfig::default();
    let term = TerminalContent::new(&cfg);
    let s = term.state(FrameIndex(100), fps30());
    assert!(s.output_complete);
    assert!((s.font_size - 22.4).abs() < 1e-9);
    let (w, h) = s.cursor_size();
    assert!((w - 11.2).abs() < 1e-9);
    assert!((h - 26.88).abs() < 1e-9);
    assert!((s.line_height() - 33.6).abs() < 1e-9);
}

#[test]
fn tail_cursor_blinks_after_output() {
    let cfg = TerminalConfig::default();
    let term = TerminalContent::new(&cfg);
    assert_eq!(term.settle_frame(fps30()), FrameIndex(46));
    assert_eq!(term.state(FrameIndex(50), fps30()).tail_cursor, Some(false));
    assert_eq!(term.state(FrameIndex(60), fps30()).tail_cursor, Some(true));
}

#[test]
fn write_emits_content_tree() {
    let cfg = TerminalConfig::default();
    let mut out = Elements::new();
    TerminalContent::new(&cfg).write(FrameIndex(40), fps30(), "terminal", &mut out);

    let content = out.get("terminal.content").unwrap();
    assert_eq!(content.parent.as_deref(), Some("terminal"));
    let prompt = out.get("terminal.prompt").unwrap();
    assert_eq!(prompt.label.as_deref(), Some("~ $"));
    assert_eq!(prompt.text.as_deref(), Some(cfg.command.as_str()));
    assert!(prompt.cursor.is_none());
    assert!(out.get("terminal.tail").is_some());
    assert!(!out.get("terminal.output").unwrap().lines.as_ref().unwrap().is_empty());
}

#[test]
fn output_carries_line_height_from_font_size() {
    let cfg = TerminalConfig::default();
    for frame in [0, 35, 40, 120] {
        let mut out = Elements::new();
        TerminalContent::new(&cfg).write(FrameIndex(frame), fps30(), "terminal", &mut out);
        let font = out.get("terminal.content").unwrap().font_size.unwrap();
        let output = out.get("terminal.output").unwrap();
        assert_eq!(output.line_height, Some(font * 1.5), "frame {frame}");
    }
}
