//! Plain-text framing for chat hosts.

use crate::report::{Hud, Report};

/// Prefix put in front of every plain line.
pub const LINE_PREFIX: &str = "**[SOUL STAGE]**";

/// Render one report item as a chat message.
pub fn render(report: &Report) -> String {
    match report {
        Report::Line(text) => format!("{LINE_PREFIX} {text}"),
        Report::MajorEvent(event) => format!("{LINE_PREFIX} {event}"),
        Report::Hud(hud) => render_hud(hud),
    }
}

/// Render a sequence of report items, one message each.
pub fn render_all(reports: &[Report]) -> Vec<String> {
    reports.iter().map(render).collect()
}

/// A HUD becomes a fenced code block so it stands out in chat.
fn render_hud(hud: &Hud) -> String {
    let mut body = format!("```\n== {} ==\n", hud.title);
    for line in &hud.lines {
        body.push_str(line);
        body.push('\n');
    }
    body.push_str("```");
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MajorEvent;

    #[test]
    fn plain_lines_are_prefixed() {
        assert_eq!(
            render(&Report::line("Combat mode ENDED")),
            "**[SOUL STAGE]** Combat mode ENDED"
        );
        assert!(render(&Report::MajorEvent(MajorEvent::FigureArrives))
            .starts_with("**[SOUL STAGE]** 🎺"));
    }

    #[test]
    fn hud_is_fenced() {
        let hud = Hud {
            title: "SOUL HUD".into(),
            lines: vec!["Turn 1".into(), "Sera: HP 100/100".into()],
        };
        assert_eq!(
            render(&Report::Hud(hud)),
            "```\n== SOUL HUD ==\nTurn 1\nSera: HP 100/100\n```"
        );
    }

    #[test]
    fn render_all_keeps_order() {
        let out = render_all(&[Report::line("a"), Report::line("b")]);
        assert_eq!(out, vec!["**[SOUL STAGE]** a", "**[SOUL STAGE]** b"]);
    }
}
